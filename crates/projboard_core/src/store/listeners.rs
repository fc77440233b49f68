//! Ordered snapshot listener list.

/// Boxed snapshot callback.
pub type Listener<T> = Box<dyn FnMut(Vec<T>)>;

/// Append-only list of snapshot callbacks.
///
/// There is no de-registration: a listener lives as long as its owner.
pub struct Listeners<T> {
    entries: Vec<Listener<T>>,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T: Clone> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, listener: impl FnMut(Vec<T>) + 'static) {
        self.entries.push(Box::new(listener));
    }

    /// Calls every listener in registration order, each with its own copy
    /// of `items`.
    pub fn notify(&mut self, items: &[T]) {
        for listener in &mut self.entries {
            listener(items.to_vec());
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Listeners;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn notifies_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::<u8>::new();
        for tag in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            listeners.add(move |_| calls.borrow_mut().push(tag));
        }

        listeners.notify(&[1, 2]);
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn each_listener_gets_an_independent_copy() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::<u8>::new();
        listeners.add(|mut items: Vec<u8>| items.clear());
        {
            let seen = Rc::clone(&seen);
            listeners.add(move |items| seen.borrow_mut().push(items));
        }

        listeners.notify(&[7, 8]);
        assert_eq!(*seen.borrow(), vec![vec![7, 8]]);
        assert_eq!(listeners.len(), 2);
    }
}
