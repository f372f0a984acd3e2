//! Page scroll lock held for as long as a guard is alive.

/// Something with an inline `overflow` style.
pub trait OverflowStyle {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

impl OverflowStyle for web_sys::HtmlElement {
    fn overflow(&self) -> String {
        self.style().get_property_value("overflow").unwrap_or_default()
    }

    fn set_overflow(&self, value: &str) {
        let style = self.style();
        let _ = if value.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", value)
        };
    }
}

/// Sets `overflow: hidden` on acquire and puts back whatever was there on drop.
pub struct BodyScrollLock<T: OverflowStyle> {
    target: T,
    previous: String,
}

impl<T: OverflowStyle> BodyScrollLock<T> {
    pub fn acquire(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        Self { target, previous }
    }
}

impl BodyScrollLock<web_sys::HtmlElement> {
    /// Lock the document body, if there is one.
    pub fn body() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        Some(Self::acquire(body))
    }
}

impl<T: OverflowStyle> Drop for BodyScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeBody(Rc<RefCell<String>>);

    impl OverflowStyle for FakeBody {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    #[test]
    fn test_lock_hides_and_restores() {
        let body = FakeBody::default();
        {
            let _lock = BodyScrollLock::acquire(body.clone());
            assert_eq!(body.overflow(), "hidden");
        }
        assert_eq!(body.overflow(), "");
    }

    #[test]
    fn test_restores_previous_value() {
        let body = FakeBody::default();
        body.set_overflow("scroll");
        let lock = BodyScrollLock::acquire(body.clone());
        drop(lock);
        assert_eq!(body.overflow(), "scroll");
    }

    #[test]
    fn test_nested_locks_unwind_in_order() {
        let body = FakeBody::default();
        let outer = BodyScrollLock::acquire(body.clone());
        let inner = BodyScrollLock::acquire(body.clone());
        drop(inner);
        assert_eq!(body.overflow(), "hidden");
        drop(outer);
        assert_eq!(body.overflow(), "");
    }
}
