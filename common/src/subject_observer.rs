use std::{cell::RefCell, rc::Rc};

use log::{debug, trace};

/// A source of notifications with an ordered set of observers.
///
/// Methods take `&self` so that observers holding a weak handle on the subject
/// can coexist with it; implementors keep their state in cells.
pub trait Subject {
    type Observer: ?Sized;
    type Error;

    fn register_observer(&self, observer: Rc<Self::Observer>);
    fn unregister_observer(&self, observer: &Rc<Self::Observer>) -> bool;
    fn notify_observers(&self) -> Result<(), Self::Error>;
}

/// Observers kept in registration order. The same instance may appear more
/// than once and is then notified once per registration.
pub struct ObserverRegistry<O: ?Sized> {
    observers: RefCell<Vec<Rc<O>>>,
}

impl<O: ?Sized> Default for ObserverRegistry<O> {
    fn default() -> Self {
        Self {
            observers: RefCell::new(vec![]),
        }
    }
}

impl<O: ?Sized> ObserverRegistry<O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, observer: Rc<O>) {
        let mut observers = self.observers.borrow_mut();
        observers.push(observer);
        trace!("Observer registered, {} registration(s)", observers.len());
    }

    /// Removes the first registration of `observer`, compared by identity.
    pub fn unregister(&self, observer: &Rc<O>) -> bool {
        let mut observers = self.observers.borrow_mut();
        match observers.iter().position(|obs| Rc::ptr_eq(obs, observer)) {
            Some(index) => {
                observers.remove(index);
                trace!("Observer unregistered, {} registration(s)", observers.len());
                true
            }
            None => {
                debug!("Ignoring removal of an observer that is not registered");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.observers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.borrow().is_empty()
    }

    /// Calls `f` on each observer in registration order and stops at the first
    /// error. Iterates over the registrations present when the call starts.
    pub fn try_for_each<F, E>(&self, mut f: F) -> Result<(), E>
    where
        F: FnMut(&O) -> Result<(), E>,
    {
        let snapshot = self.observers.borrow().clone();
        snapshot.iter().try_for_each(|observer| f(observer))
    }
}
