//! Observers receive the new price as an argument and never see the stock.

mod observers;
mod stock;

pub use observers::{observer_for, EmailObserver, SmsObserver};
pub use stock::Stock;

use crate::NotifyResult;

pub trait PriceObserver {
    fn update(&self, price: f64) -> NotifyResult;
}
