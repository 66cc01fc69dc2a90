use std::path::PathBuf;

use hcp_sat::config::{Config, Strategy};

use crate::config::{CliConfig, ConfigError};

/// Parse CLI arguments to a [Config] struct or a [CliConfig] struct.
///
/// The last argument is the path to a graph, and is not examined.
pub(super) fn parse_args(args: &[String], cli_options: &mut CliConfig) -> Result<Config, ConfigError> {
    let mut cfg = Config::default();

    'arg_examination: for arg in args.iter().skip(1).rev().skip(1) {
        let mut split = arg.split("=");
        match split.next() {
            Some("--all") => {
                println!("c All cycles will be written.");
                cli_options.enumerate = true;
                cfg.cycle_limit.value = cfg.cycle_limit.max;
            }

            Some("--directed") => {
                println!("c Edges will be read as directed.");
                cfg.undirected.value = false;
            }

            Some("--model") => {
                println!("c A model will be written, if one exists.");
                cli_options.model = true;
            }

            Some("--stats") => {
                cli_options.stats = true;
            }

            Some("--dimacs") => {
                if let Some(request) = split.next().filter(|request| !request.is_empty()) {
                    let path = PathBuf::from(request);
                    println!("c The encoding will be written to {path:?}.");
                    cli_options.dimacs = Some(path);
                    continue 'arg_examination;
                }

                return Err(ConfigError::NonSpecific(
                    "dimacs requires a path".to_string(),
                ));
            }

            Some("--solution") => {
                if let Some(request) = split.next().filter(|request| !request.is_empty()) {
                    let path = PathBuf::from(request);
                    println!("c A solution will be read from {path:?}.");
                    cli_options.solution = Some(path);
                    continue 'arg_examination;
                }

                return Err(ConfigError::NonSpecific(
                    "solution requires a path".to_string(),
                ));
            }

            // The remaining cases follow a common template.
            // If a value is present, may be parsed appropriately, and is valid, the config is updated.
            // Otherwise, an error is returned.
            //
            Some("--limit") => {
                let (min, max) = cfg.cycle_limit.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<usize>() {
                        if cfg.cycle_limit.set(value).is_ok() {
                            println!("c limit set to: {value}");
                            cli_options.enumerate = true;
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "limit requires a value between {min} and {max}"
                )));
            }

            Some("--strategy") => {
                let (min, max) = cfg.strategy.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<Strategy>() {
                        if cfg.strategy.set(value).is_ok() {
                            println!("c strategy set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "strategy requires a value between {min} and {max}"
                )));
            }

            Some("--verify") => {
                let (min, max) = cfg.verify_model.min_max();

                if let Some(request) = split.next() {
                    if let Ok(value) = request.parse::<bool>() {
                        if cfg.verify_model.set(value).is_ok() {
                            println!("c verify set to: {value}");
                            continue 'arg_examination;
                        }
                    }
                }

                return Err(ConfigError::NonSpecific(format!(
                    "verify requires a value between {min} and {max}"
                )));
            }

            Some(_) | None => {
                return Err(ConfigError::NonSpecific(format!(
                    "Unable to parse argument: {arg:?}"
                )));
            }
        }
    }

    Ok(cfg)
}
