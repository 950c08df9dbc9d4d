//! Command dispatch: bridges CLI args -> model operations -> output formatting.

pub mod config_cmd;
pub mod convert;
pub mod diff;
pub mod models;
pub mod params;
pub mod schema;
pub mod util;
pub mod validate;

use crate::cli::Command;
use crate::config::{Config, Settings};
use crate::error::CliError;

pub fn dispatch(cmd: Command, cfg: &Config, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Models => models::handle(settings),
        Command::Schema(args) => schema::handle(&args, settings),
        Command::Get(args) => params::get(&args, settings),
        Command::Names(args) => params::names(&args, settings),
        Command::Set(args) => params::set(&args, settings),
        Command::Add(args) => params::add(&args, settings),
        Command::Delete(args) => params::delete(&args, settings),
        Command::Validate(args) => validate::handle(&args, settings),
        Command::Diff(args) => diff::handle(&args, settings),
        Command::Convert(args) => convert::convert(&args, settings),
        Command::New(args) => convert::new(&args, settings),
        Command::Config(args) => config_cmd::handle(&args, cfg, settings),
        Command::Completions(_) => Ok(()),
    }
}
