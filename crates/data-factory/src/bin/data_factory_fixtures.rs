//! Fixture generator emitting one JSON person record per line.
//!
//! Settings come from `DATA_FACTORY_*` environment variables, configuration
//! files and flags; see `data_factory::FixtureSettings`.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use data_factory::FixtureSettings;
use data_factory::fixture_cli::{FixtureError, run, write_lines};
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match generate() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "fixture generation failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn generate() -> Result<(), FixtureError> {
    let settings =
        FixtureSettings::load_from_iter(env::args_os()).map_err(|e| FixtureError::Config {
            message: e.to_string(),
        })?;
    let lines = run(&settings)?;
    write_lines(io::stdout().lock(), &lines)
}
