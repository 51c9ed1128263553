use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use common::subject_observer::{ObserverRegistry, Subject};
use log::debug;

use super::StockObserver;
use crate::{NotifyError, NotifyResult};

#[derive(Default)]
pub struct Stock {
    price: Cell<f64>,
    observers: ObserverRegistry<dyn StockObserver>,
}

/// Read-only handle on a [`Stock`] that does not keep it alive.
#[derive(Clone, Debug)]
pub struct StockView {
    stock: Weak<Stock>,
}

impl StockView {
    pub fn price(&self) -> Result<f64, NotifyError> {
        self.stock
            .upgrade()
            .map(|stock| stock.price())
            .ok_or(NotifyError::SubjectDropped)
    }
}

impl Stock {
    /// Observers need a [`StockView`], which can only be taken from a shared
    /// stock.
    pub fn shared() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn view(self: &Rc<Self>) -> StockView {
        StockView {
            stock: Rc::downgrade(self),
        }
    }

    pub fn price(&self) -> f64 {
        self.price.get()
    }

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
    type Observer = dyn StockObserver;
    type Error = NotifyError;

    fn register_observer(&self, observer: Rc<dyn StockObserver>) {
        self.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Rc<dyn StockObserver>) -> bool {
        self.observers.unregister(observer)
    }

    fn notify_observers(&self) -> NotifyResult {
        self.observers.try_for_each(|observer| observer.update())
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use common::subject_observer::Subject;
    use mockall::{mock, Sequence};

    use super::{Stock, StockView};
    use crate::{pull_model::StockObserver, NotifyError, NotifyResult};

    mock! {
        Observer {}

        impl StockObserver for Observer {
            fn update(&self) -> NotifyResult;
        }
    }

    /// Records the price read through its view on every notification.
    struct PriceReader {
        view: StockView,
        seen: RefCell<Vec<f64>>,
    }

    impl StockObserver for PriceReader {
        fn update(&self) -> NotifyResult {
            self.seen.borrow_mut().push(self.view.price()?);
            Ok(())
        }
    }

    #[test]
    fn test_view_reads_current_price() {
        // Given
        let stock = Stock::shared();
        let view = stock.view();

        // When
        stock.price.set(12.5);

        // Then
        assert_eq!(12.5, view.price().unwrap());
    }

    #[test]
    fn test_view_does_not_keep_stock_alive() {
        // Given
        let stock = Stock::shared();
        let view = stock.view();

        // When
        drop(stock);

        // Then
        assert!(matches!(view.price(), Err(NotifyError::SubjectDropped)));
    }

    #[test]
    fn test_observers_read_the_price_just_set() {
        // Given
        let stock = Stock::shared();
        let reader = Rc::new(PriceReader {
            view: stock.view(),
            seen: RefCell::new(vec![]),
        });
        stock.register_observer(reader.clone());

        // When
        stock.set_price(1200.50).unwrap();
        stock.set_price(1250.75).unwrap();

        // Then
        assert_eq!(vec![1200.50, 1250.75], *reader.seen.borrow());
    }

    #[test]
    fn test_set_price_notifies_in_registration_order() {
        // Given
        let mut seq = Sequence::new();
        let mut first = MockObserver::new();
        let mut second = MockObserver::new();
        for _ in 0..2 {
            first
                .expect_update()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|| Ok(()));
            second
                .expect_update()
                .times(1)
                .in_sequence(&mut seq)
                .returning(|| Ok(()));
        }
        let stock = Stock::shared();
        stock.register_observer(Rc::new(first));
        stock.register_observer(Rc::new(second));

        // When
        stock.set_price(1200.50).unwrap();
        stock.set_price(1250.75).unwrap();

        // Then
        assert_eq!(2, stock.observer_count());
    }

    #[test]
    fn test_unregister_observer_stops_its_notifications() {
        // Given
        let mut removed = MockObserver::new();
        removed.expect_update().times(0);
        let mut kept = MockObserver::new();
        kept.expect_update().times(1).returning(|| Ok(()));
        let removed: Rc<dyn StockObserver> = Rc::new(removed);
        let stock = Stock::shared();
        stock.register_observer(removed.clone());
        stock.register_observer(Rc::new(kept));

        // When
        let result = stock.unregister_observer(&removed);
        stock.set_price(3.0).unwrap();

        // Then
        assert!(result);
        assert!(!stock.unregister_observer(&removed), "Should be a no-op");
    }

    #[test]
    fn test_failing_observer_aborts_notification() {
        // Given
        let mut failing = MockObserver::new();
        failing
            .expect_update()
            .times(1)
            .returning(|| Err(NotifyError::SubjectDropped));
        let mut skipped = MockObserver::new();
        skipped.expect_update().times(0);
        let stock = Stock::shared();
        stock.register_observer(Rc::new(failing));
        stock.register_observer(Rc::new(skipped));

        // When
        let result = stock.notify_observers();

        // Then
        assert!(matches!(result, Err(NotifyError::SubjectDropped)));
    }
}
