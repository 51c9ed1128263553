use std::io::Write;

use common::subject_observer::Subject;
use log::debug;
use stock::{pull_model, push_model, SharedWriter};
use strum::Display;

use crate::{config::app::AppConfig, AppError};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Model {
    Push,
    Pull,
}

pub fn run<W>(model: Model, config: &AppConfig, out: SharedWriter<W>) -> Result<(), AppError>
where
    W: Write + 'static,
{
    match model {
        Model::Push => run_push_model(config, out),
        Model::Pull => run_pull_model(config, out),
    }
}

/// Registers one observer per configured channel, then sets each configured
/// price in turn.
pub fn run_push_model<W>(config: &AppConfig, out: SharedWriter<W>) -> Result<(), AppError>
where
    W: Write + 'static,
{
    let stock = push_model::Stock::new();
    for &channel in &config.channels {
        debug!("Registering {channel} observer");
        stock.register_observer(push_model::observer_for(channel, out.clone()));
    }
    for &price in &config.prices {
        stock.set_price(price)?;
    }
    Ok(())
}

pub fn run_pull_model<W>(config: &AppConfig, out: SharedWriter<W>) -> Result<(), AppError>
where
    W: Write + 'static,
{
    let stock = pull_model::Stock::shared();
    for &channel in &config.channels {
        debug!("Registering {channel} observer");
        stock.register_observer(pull_model::observer_for(
            channel,
            stock.view(),
            out.clone(),
        ));
    }
    for &price in &config.prices {
        stock.set_price(price)?;
    }
    Ok(())
}
