use std::{io::Write, rc::Rc};

use super::PriceObserver;
use crate::{
    notification::{deliver, Channel},
    NotifyResult, SharedWriter,
};

pub struct EmailObserver<W> {
    out: SharedWriter<W>,
}

impl<W: Write> EmailObserver<W> {
    pub fn new(out: SharedWriter<W>) -> Self {
        EmailObserver { out }
    }
}

impl<W: Write> PriceObserver for EmailObserver<W> {
    fn update(&self, price: f64) -> NotifyResult {
        deliver(&self.out, Channel::Email, price)
    }
}

pub struct SmsObserver<W> {
    out: SharedWriter<W>,
}

impl<W: Write> SmsObserver<W> {
    pub fn new(out: SharedWriter<W>) -> Self {
        SmsObserver { out }
    }
}

impl<W: Write> PriceObserver for SmsObserver<W> {
    fn update(&self, price: f64) -> NotifyResult {
        deliver(&self.out, Channel::Sms, price)
    }
}

pub fn observer_for<W>(channel: Channel, out: SharedWriter<W>) -> Rc<dyn PriceObserver>
where
    W: Write + 'static,
{
    match channel {
        Channel::Email => Rc::new(EmailObserver::new(out)),
        Channel::Sms => Rc::new(SmsObserver::new(out)),
    }
}
