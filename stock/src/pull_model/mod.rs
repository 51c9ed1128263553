//! Observers are told that the stock changed and read the price themselves
//! through a [`StockView`].

mod observers;
mod stock;

pub use observers::{observer_for, EmailObserver, SmsObserver};
pub use stock::{Stock, StockView};

use crate::NotifyResult;

pub trait StockObserver {
    fn update(&self) -> NotifyResult;
}
