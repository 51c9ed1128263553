use std::{cell::Cell, rc::Rc};

use common::subject_observer::{ObserverRegistry, Subject};
use log::debug;

use super::PriceObserver;
use crate::{NotifyError, NotifyResult};

#[derive(Default)]
pub struct Stock {
    price: Cell<f64>,
    observers: ObserverRegistry<dyn PriceObserver>,
}

impl Stock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn price(&self) -> f64 {
        self.price.get()
    }

    /// Stores `price` then notifies every observer before returning.
    pub fn set_price(&self, price: f64) -> NotifyResult {
        self.price.set(price);
        debug!("Stock price set to {price}");
        self.notify_observers()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for Stock {
    type Observer = dyn PriceObserver;
    type Error = NotifyError;

    fn register_observer(&self, observer: Rc<dyn PriceObserver>) {
        self.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Rc<dyn PriceObserver>) -> bool {
        self.observers.unregister(observer)
    }

    fn notify_observers(&self) -> NotifyResult {
        let price = self.price.get();
        self.observers.try_for_each(|observer| observer.update(price))
    }
}
