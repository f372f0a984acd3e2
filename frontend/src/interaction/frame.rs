//! Cancellable repeating per-frame work.
//!
//! A [`RepeatingFrameTask`] asks its scheduler for one frame at a time and
//! re-arms itself from inside the callback. Cancelling drops the pending
//! request, and the callback only holds a weak reference to the task, so
//! nothing runs once the owner is gone.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Source of display-refresh callbacks.
///
/// Dropping the returned handle must cancel the request if it has not fired.
pub trait FrameScheduler: 'static {
    type Handle: 'static;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle;
}

/// `requestAnimationFrame` on the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    type Handle = gloo_render::AnimationFrame;

    fn request(&self, callback: Box<dyn FnOnce(f64)>) -> Self::Handle {
        gloo_render::request_animation_frame(move |timestamp| callback(timestamp))
    }
}

/// Lets one frame in every `stride` through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameThrottle {
    stride: u32,
    counter: u32,
}

impl FrameThrottle {
    pub fn new(stride: u32) -> Self {
        Self {
            stride: stride.max(1),
            counter: 0,
        }
    }

    pub fn stride(&self) -> u32 {
        self.stride
    }

    /// Count one frame; true when this frame should do work.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.stride {
            self.counter = 0;
            true
        } else {
            false
        }
    }
}

struct Inner<S: FrameScheduler> {
    scheduler: S,
    pending: RefCell<Option<S::Handle>>,
    active: Cell<bool>,
    throttle: RefCell<FrameThrottle>,
    job: RefCell<Box<dyn FnMut(f64)>>,
}

pub struct RepeatingFrameTask<S: FrameScheduler> {
    inner: Rc<Inner<S>>,
}

impl<S: FrameScheduler> RepeatingFrameTask<S> {
    /// Start running `job` on every `stride`-th frame until cancelled.
    pub fn start(scheduler: S, stride: u32, job: impl FnMut(f64) + 'static) -> Self {
        let inner = Rc::new(Inner {
            scheduler,
            pending: RefCell::new(None),
            active: Cell::new(true),
            throttle: RefCell::new(FrameThrottle::new(stride)),
            job: RefCell::new(Box::new(job)),
        });
        schedule_next(&inner);
        Self { inner }
    }

    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }

    pub fn cancel(&self) {
        self.inner.active.set(false);
        // dropping the handle cancels the outstanding frame request
        let pending = self.inner.pending.borrow_mut().take();
        drop(pending);
    }
}

impl<S: FrameScheduler> Drop for RepeatingFrameTask<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn schedule_next<S: FrameScheduler>(inner: &Rc<Inner<S>>) {
    let weak: Weak<Inner<S>> = Rc::downgrade(inner);
    let handle = inner.scheduler.request(Box::new(move |timestamp| {
        if let Some(inner) = weak.upgrade() {
            on_frame(&inner, timestamp);
        }
    }));
    let previous = inner.pending.borrow_mut().replace(handle);
    drop(previous);
}

fn on_frame<S: FrameScheduler>(inner: &Rc<Inner<S>>, timestamp: f64) {
    if !inner.active.get() {
        return;
    }
    let due = inner.throttle.borrow_mut().tick();
    if due {
        let mut job = inner.job.borrow_mut();
        (*job)(timestamp);
    }
    if inner.active.get() {
        schedule_next(inner);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::FrameScheduler;
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    type Queue = RefCell<Vec<(u64, Box<dyn FnOnce(f64)>)>>;

    /// Frame source driven by hand from tests.
    #[derive(Clone, Default)]
    pub struct ManualFrames {
        queue: Rc<Queue>,
        next_id: Rc<Cell<u64>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Weak<Queue>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                queue.borrow_mut().retain(|(id, _)| *id != self.id);
            }
        }
    }

    impl ManualFrames {
        pub fn pending(&self) -> usize {
            self.queue.borrow().len()
        }

        /// Run every callback that was waiting for this frame.
        pub fn fire(&self, timestamp: f64) {
            let due = std::mem::take(&mut *self.queue.borrow_mut());
            for (_, callback) in due {
                callback(timestamp);
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = ManualHandle;

        fn request(&self, callback: Box<dyn FnOnce(f64)>) -> ManualHandle {
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::ManualFrames;
    use super::*;

    fn counting_task(frames: &ManualFrames, stride: u32) -> (RepeatingFrameTask<ManualFrames>, Rc<Cell<u32>>) {
        let updates = Rc::new(Cell::new(0));
        let counter = updates.clone();
        let task = RepeatingFrameTask::start(frames.clone(), stride, move |_| {
            counter.set(counter.get() + 1);
        });
        (task, updates)
    }

    #[test]
    fn test_throttle_fires_every_stride() {
        let mut throttle = FrameThrottle::new(3);
        let fired: Vec<u32> = (1..=9).filter(|_| throttle.tick()).collect();
        assert_eq!(fired.len(), 3);

        let mut throttle = FrameThrottle::new(3);
        let pattern: Vec<bool> = (0..6).map(|_| throttle.tick()).collect();
        assert_eq!(pattern, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_zero_stride_fires_every_frame() {
        let mut throttle = FrameThrottle::new(0);
        assert_eq!(throttle.stride(), 1);
        assert!(throttle.tick());
        assert!(throttle.tick());
    }

    #[test]
    fn test_task_runs_on_throttled_frames() {
        let frames = ManualFrames::default();
        let (_task, updates) = counting_task(&frames, 3);
        for frame in 0..9 {
            frames.fire(frame as f64 * 16.0);
        }
        assert_eq!(updates.get(), 3);
        assert_eq!(frames.pending(), 1);
    }

    #[test]
    fn test_cancel_stops_updates() {
        let frames = ManualFrames::default();
        let (task, updates) = counting_task(&frames, 1);
        frames.fire(0.0);
        frames.fire(16.0);
        assert_eq!(updates.get(), 2);

        task.cancel();
        assert!(!task.is_active());
        assert_eq!(frames.pending(), 0);
        for frame in 0..10 {
            frames.fire(frame as f64);
        }
        assert_eq!(updates.get(), 2);
    }

    #[test]
    fn test_drop_stops_updates() {
        let frames = ManualFrames::default();
        let (task, updates) = counting_task(&frames, 1);
        frames.fire(0.0);
        drop(task);
        assert_eq!(frames.pending(), 0);
        frames.fire(16.0);
        frames.fire(32.0);
        assert_eq!(updates.get(), 1);
    }

    #[test]
    fn test_job_receives_timestamp() {
        let frames = ManualFrames::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let _task = RepeatingFrameTask::start(frames.clone(), 2, move |ts| sink.borrow_mut().push(ts));
        for ts in [10.0, 20.0, 30.0, 40.0] {
            frames.fire(ts);
        }
        assert_eq!(*seen.borrow(), vec![20.0, 40.0]);
    }
}
