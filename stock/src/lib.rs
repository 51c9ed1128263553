//! A stock price subject notifying its observers, in two flavours:
//! [`push_model`] hands the new price to each observer, [`pull_model`] lets
//! each observer read it back through a read-only handle on the stock.

pub mod notification;
pub mod pull_model;
pub mod push_model;

pub use notification::{Channel, NotifyError, NotifyResult, SharedWriter};
