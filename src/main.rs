use std::process::ExitCode;

use clap::Parser;
use domain_count::{DomainCountInput, process_customers, report_failure};

pub fn main() -> ExitCode {
    let input = DomainCountInput::parse();
    env_logger::Builder::new()
        .filter_level(input.log_level.into())
        .parse_default_env()
        .init();

    match process_customers(&input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err, std::io::stderr().lock());
            ExitCode::FAILURE
        }
    }
}
