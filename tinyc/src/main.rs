use std::process::ExitCode;

use tinyc_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    tinyc_driver::run(argument)
}
