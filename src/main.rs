// SPDX-License-Identifier: MPL-2.0
use bookshelf::app::{self, paths, Flags};
use bookshelf::error::Result;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::convert::Infallible;
use std::fs::{self, File};
use std::path::PathBuf;

const HELP: &str = "\
Bookshelf

USAGE:
  bookshelf [OPTIONS]

OPTIONS:
  -h, --help                Print this help
  --lang <LOCALE>           Interface language (e.g. en-US, es)
  --config-dir <PATH>       Directory holding settings.toml
  --data-dir <PATH>         Directory for the log file
  --api-base-url <URL>      Library API base URL
";

fn parse_flags() -> std::result::Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_os_str("--config-dir", to_path)?,
        data_dir: args.opt_value_from_os_str("--data-dir", to_path)?,
        api_base_url: args.opt_value_from_str("--api-base-url")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(flags)
}

fn to_path(value: &std::ffi::OsStr) -> std::result::Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}

/// Writes the log next to the application data.
fn init_logging() -> Result<()> {
    let Some(log_path) = paths::get_log_file() else {
        return Ok(());
    };
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let log_file = File::create(&log_path)?;
    WriteLogger::init(LevelFilter::Debug, log_config, log_file)?;
    Ok(())
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    if let Err(err) = init_logging() {
        eprintln!("logging disabled: {err}");
    }
    log::info!("Bookshelf {} starting", env!("CARGO_PKG_VERSION"));

    app::run(flags)
}
