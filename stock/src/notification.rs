use std::{
    cell::RefCell,
    io::{self, Write},
    rc::Rc,
};

use log::trace;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Unable to deliver notification: {0}")]
    Output(#[from] io::Error),
    #[error("Stock is no longer available")]
    SubjectDropped,
}

pub type NotifyResult = Result<(), NotifyError>;

/// Output shared by every observer of a stock.
pub type SharedWriter<W> = Rc<RefCell<W>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Display, EnumIter)]
pub enum Channel {
    Email,
    #[strum(serialize = "SMS")]
    Sms,
}

impl Channel {
    /// Whole prices keep their fractional part: `8.0`, not `8`.
    pub fn message(&self, price: f64) -> String {
        match self {
            Channel::Email => format!("Email stock price updated to {price:?}"),
            Channel::Sms => format!("SMS: Stock price updated to {price:?}"),
        }
    }
}

pub(crate) fn deliver<W: Write>(out: &RefCell<W>, channel: Channel, price: f64) -> NotifyResult {
    let message = channel.message(price);
    trace!("Delivering {channel} notification: {message}");
    writeln!(out.borrow_mut(), "{message}")?;
    Ok(())
}
