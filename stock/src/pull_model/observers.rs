use std::{io::Write, rc::Rc};

use super::{StockObserver, StockView};
use crate::{
    notification::{deliver, Channel},
    NotifyResult, SharedWriter,
};

pub struct EmailObserver<W> {
    stock: StockView,
    out: SharedWriter<W>,
}

impl<W: Write> EmailObserver<W> {
    pub fn new(stock: StockView, out: SharedWriter<W>) -> Self {
        EmailObserver { stock, out }
    }
}

impl<W: Write> StockObserver for EmailObserver<W> {
    fn update(&self) -> NotifyResult {
        deliver(&self.out, Channel::Email, self.stock.price()?)
    }
}

pub struct SmsObserver<W> {
    stock: StockView,
    out: SharedWriter<W>,
}

impl<W: Write> SmsObserver<W> {
    pub fn new(stock: StockView, out: SharedWriter<W>) -> Self {
        SmsObserver { stock, out }
    }
}

impl<W: Write> StockObserver for SmsObserver<W> {
    fn update(&self) -> NotifyResult {
        deliver(&self.out, Channel::Sms, self.stock.price()?)
    }
}

pub fn observer_for<W>(
    channel: Channel,
    stock: StockView,
    out: SharedWriter<W>,
) -> Rc<dyn StockObserver>
where
    W: Write + 'static,
{
    match channel {
        Channel::Email => Rc::new(EmailObserver::new(stock, out)),
        Channel::Sms => Rc::new(SmsObserver::new(stock, out)),
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use common::subject_observer::Subject;
    use common_test::{shared_buffer, written_lines};

    use super::{observer_for, EmailObserver, SmsObserver};
    use crate::{
        pull_model::{Stock, StockObserver},
        Channel, NotifyError,
    };

    #[test]
    fn test_email_and_sms_observers_scenario() {
        // Given
        let buffer = shared_buffer();
        let stock = Stock::shared();
        stock.register_observer(Rc::new(EmailObserver::new(stock.view(), buffer.clone())));
        stock.register_observer(Rc::new(SmsObserver::new(stock.view(), buffer.clone())));

        // When
        stock.set_price(1200.50).unwrap();
        stock.set_price(1250.75).unwrap();

        // Then
        assert_eq!(
            vec![
                "Email stock price updated to 1200.5",
                "SMS: Stock price updated to 1200.5",
                "Email stock price updated to 1250.75",
                "SMS: Stock price updated to 1250.75",
            ],
            written_lines(&buffer)
        );
    }

    #[test]
    fn test_removed_observer_no_longer_writes() {
        // Given
        let buffer = shared_buffer();
        let stock = Stock::shared();
        let sms = observer_for(Channel::Sms, stock.view(), buffer.clone());
        stock.register_observer(observer_for(Channel::Email, stock.view(), buffer.clone()));
        stock.register_observer(sms.clone());

        // When
        stock.unregister_observer(&sms);
        stock.set_price(1200.50).unwrap();

        // Then
        assert_eq!(
            vec!["Email stock price updated to 1200.5"],
            written_lines(&buffer)
        );
    }

    #[test]
    fn test_observer_of_dropped_stock() {
        // Given
        let buffer = shared_buffer();
        let stock = Stock::shared();
        let observer = observer_for(Channel::Email, stock.view(), buffer.clone());

        // When
        drop(stock);
        let result = observer.update();

        // Then
        assert!(matches!(result, Err(NotifyError::SubjectDropped)));
        assert!(written_lines(&buffer).is_empty(), "Should not write anything");
    }
}
