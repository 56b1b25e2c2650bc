// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;

use toast_stack::app::{self, Flags};
use toast_stack::config::{self, DurationSetting};
use toast_stack::error::{Error, Result};
use toast_stack::notifications::{FlashBatch, FlashMessage};

const HELP: &str = "\
toast_stack: stacked toast notifications demo

USAGE:
  toast_stack [OPTIONS] [MESSAGE]...

OPTIONS:
  --config <PATH>      Load settings from PATH instead of the default location
  --limit <N>          Maximum number of visible toasts (0 = unlimited)
  --dismiss <MODE>     Dismiss mode: button or click
  --duration <SECS>    Display time for every kind (0 = until dismissed)
  -h, --help           Print this help

Each MESSAGE is rendered as a notice; prefix it with `alert:` for an alert.
";

fn main() -> ExitCode {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("toast_stack: {err}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("toast_stack: {err}");
            ExitCode::FAILURE
        }
    }
}

fn cli_error(err: pico_args::Error) -> Error {
    Error::Config(err.to_string())
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags> {
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").map_err(cli_error)?;
    let mut config = match config_path {
        Some(path) => config::load_from_path(&path)?,
        None => config::load()?,
    };

    if let Some(limit) = args.opt_value_from_str("--limit").map_err(cli_error)? {
        config.limit = limit;
    }
    if let Some(raw) = args.opt_value_from_str::<_, String>("--dismiss").map_err(cli_error)? {
        config.dismiss = config::parse_dismiss(&raw)?;
    }
    if let Some(secs) = args.opt_value_from_str("--duration").map_err(cli_error)? {
        config.duration = DurationSetting::Uniform(secs);
    }

    let messages: FlashBatch = args
        .finish()
        .into_iter()
        .filter_map(|raw| raw.into_string().ok())
        .map(|raw| match raw.strip_prefix("alert:") {
            Some(text) => FlashMessage::alert(text),
            None => FlashMessage::notice(raw),
        })
        .collect();

    Ok(Flags { config, messages })
}
