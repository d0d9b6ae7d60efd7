// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tabnav and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tabnav CLI entrypoint.
//!
//! By default this runs the interactive TUI against a tab config file. `--resolve` prints the
//! redirect chain for one location and `--schema` prints the config JSON schema.

use std::error::Error;
use std::fs::File;
use std::io;
use std::sync::Mutex;

use tabnav::reconcile::TabBarConfig;
use tabnav::route::{follow_redirects, Decision};
use tabnav::store::{config_schema, TabConfigFile};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "TABNAV_LOG";
const LOG_FILE_ENV: &str = "TABNAV_LOG_FILE";
const DEFAULT_CONFIG_FILE: &str = "tabnav.json";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--config <file>] [--path <location>]\n  {program} --demo [--path <location>]\n  {program} --resolve <location> [--config <file> | --demo]\n  {program} --schema\n\nIf --config is omitted, `{DEFAULT_CONFIG_FILE}` in the current working directory is used.\n--demo uses a built-in staking tab bar and cannot be combined with --config.\n--schema prints the JSON schema of the config file and takes no other flags.\n\nLogging is controlled by {LOG_ENV} (default `warn`); in TUI mode logs are discarded unless\n{LOG_FILE_ENV} names a file."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    schema: bool,
    config: Option<String>,
    path: Option<String>,
    resolve: Option<String>,
}

impl CliOptions {
    fn is_interactive(&self) -> bool {
        !self.schema && self.resolve.is_none()
    }
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--schema" => {
                if options.schema {
                    return Err(());
                }
                options.schema = true;
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                let file = args.next().ok_or(())?;
                options.config = Some(file);
            }
            "--path" => {
                if options.path.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.path = Some(path);
            }
            "--resolve" => {
                if options.resolve.is_some() {
                    return Err(());
                }
                let path = args.next().ok_or(())?;
                options.resolve = Some(path);
            }
            _ => return Err(()),
        }
    }

    if options.demo && options.config.is_some() {
        return Err(());
    }

    if options.resolve.is_some() && options.path.is_some() {
        return Err(());
    }

    if options.schema
        && (options.demo
            || options.config.is_some()
            || options.path.is_some()
            || options.resolve.is_some())
    {
        return Err(());
    }

    Ok(options)
}

fn init_logging(interactive: bool) -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let log_file = std::env::var(LOG_FILE_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty());

    if let Some(log_file) = log_file {
        let file = File::create(&log_file)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|err| err as Box<dyn Error>)?;
    } else if interactive {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .try_init()
            .map_err(|err| err as Box<dyn Error>)?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .try_init()
            .map_err(|err| err as Box<dyn Error>)?;
    }
    Ok(())
}

fn load_config(options: &CliOptions) -> Result<TabBarConfig, Box<dyn Error>> {
    if options.demo {
        return Ok(tabnav::tui::demo_config());
    }
    let file = options.config.as_deref().unwrap_or(DEFAULT_CONFIG_FILE);
    Ok(TabConfigFile::new(file).load()?)
}

fn describe_decision(decision: &Decision) -> &'static str {
    match decision {
        Decision::NoAction => "no action",
        Decision::RedirectToAlias { .. } => "alias redirect",
        Decision::RedirectToBase { .. } => "base redirect",
    }
}

fn print_resolution(config: &TabBarConfig, path: &str) -> Result<(), Box<dyn Error>> {
    let decision = config.resolve(path);
    println!("{path}: {}", describe_decision(&decision));

    let chain = follow_redirects(
        path,
        &config.base_path,
        config.items.as_slice(),
        &config.hidden,
    )?;
    for hop in &chain {
        println!("  -> {hop}");
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "tabnav".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging(options.is_interactive())?;

        if options.schema {
            println!("{}", serde_json::to_string_pretty(&config_schema())?);
            return Ok(());
        }

        let config = load_config(&options)?;

        if let Some(path) = options.resolve.as_deref() {
            return print_resolution(&config, path);
        }

        tabnav::tui::run(config, options.path)
    })();

    if let Err(err) = result {
        eprintln!("tabnav: {err}");
        std::process::exit(1);
    }
}
