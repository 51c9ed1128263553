use std::process::ExitCode;

use stock_demo::scenario::Model;

fn main() -> ExitCode {
    stock_demo::launch(Model::Pull)
}
