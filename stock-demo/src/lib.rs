use std::{
    cell::RefCell,
    io::{self, Write},
    process::ExitCode,
    rc::Rc,
};

use log::{error, info};
use stock::SharedWriter;

use crate::{config::app::AppConfig, scenario::Model};

pub mod config;
mod error;
pub mod scenario;

pub use error::AppError;

/// Entry point shared by the demonstration binaries: notifications go to
/// stdout, failures are logged and turned into a failure exit code.
pub fn launch(model: Model) -> ExitCode {
    if let Err(err) = config::log::init() {
        eprintln!("Unable to initialize logging: {err}");
    }

    match execute(model, Rc::new(RefCell::new(io::stdout()))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Loads the configuration then runs the scenario of `model` against `out`.
pub fn execute<W>(model: Model, out: SharedWriter<W>) -> Result<(), AppError>
where
    W: Write + 'static,
{
    let app_config = AppConfig::new()?;
    info!("Running {model} model with {app_config:?}");
    scenario::run(model, &app_config, out)
}
