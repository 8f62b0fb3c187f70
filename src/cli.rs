// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, parser::ValueSource};
use std::{env, path::PathBuf};

use crate::core::config::{ConfigOverrides, DEFAULT_CONFIG_FILE};
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang=").map(str::to_string))
}

/// The arguments of `run`. They are also accepted without the subcommand,
/// since `run` is the default.
fn run_args() -> Vec<Arg> {
    vec![
        Arg::new("config")
            .short('c')
            .long("config")
            .help(t!("arg.config").to_string())
            .value_name("CONFIG")
            .default_value(DEFAULT_CONFIG_FILE)
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("source")
            .long("source")
            .help(t!("arg.source").to_string())
            .value_name("SOURCE")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("executable")
            .long("executable")
            .help(t!("arg.executable").to_string())
            .value_name("EXECUTABLE")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("report")
            .long("report")
            .help(t!("arg.report").to_string())
            .value_name("REPORT")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("cases-dir")
            .long("cases-dir")
            .help(t!("arg.cases_dir").to_string())
            .value_name("CASES_DIR")
            .value_parser(clap::value_parser!(PathBuf))
            .action(ArgAction::Set),
        Arg::new("first")
            .long("first")
            .help(t!("arg.first").to_string())
            .value_name("FIRST")
            .value_parser(clap::value_parser!(usize))
            .action(ArgAction::Set),
        Arg::new("last")
            .long("last")
            .help(t!("arg.last").to_string())
            .value_name("LAST")
            .value_parser(clap::value_parser!(usize))
            .action(ArgAction::Set),
        Arg::new("compiler")
            .long("compiler")
            .help(t!("arg.compiler").to_string())
            .value_name("COMPILER")
            .action(ArgAction::Set),
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help(t!("arg.verbose").to_string())
            .action(ArgAction::SetTrue),
    ]
}

pub fn build_cli() -> Command {
    Command::new("stdin-harness")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli.about").to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli.lang").to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .args(run_args())
        .subcommand(
            Command::new("run")
                .about(t!("cmd.run_about").to_string())
                .args(run_args()),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd.init_about").to_string())
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help(t!("arg.init_output").to_string())
                        .value_name("OUTPUT")
                        .default_value(DEFAULT_CONFIG_FILE)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("force")
                        .short('f')
                        .long("force")
                        .help(t!("arg.init_force").to_string())
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg.init_non_interactive").to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

/// Whether `id` was given on the command line of this (sub)command.
fn given(matches: &ArgMatches, id: &str) -> bool {
    matches!(
        matches.value_source(id),
        Some(ValueSource::CommandLine | ValueSource::EnvVariable)
    )
}

/// Reads a `run` argument. `layers` go from the innermost command outwards: a
/// value given to `run` wins over one given before it, and defaults come from
/// the innermost layer.
fn run_value<T: Clone + Send + Sync + 'static>(layers: &[&ArgMatches], id: &str) -> Option<T> {
    layers
        .iter()
        .find(|matches| given(matches, id))
        .or(layers.first())
        .and_then(|matches| matches.get_one::<T>(id).cloned())
}

fn run_options(layers: &[&ArgMatches], lang: Option<String>) -> commands::run::RunOptions {
    let config = run_value::<PathBuf>(layers, "config")
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config_required = layers.iter().any(|matches| given(matches, "config"));

    commands::run::RunOptions {
        config,
        config_required,
        overrides: ConfigOverrides {
            source: run_value(layers, "source"),
            executable: run_value(layers, "executable"),
            report: run_value(layers, "report"),
            cases_dir: run_value(layers, "cases-dir"),
            first: run_value(layers, "first"),
            last: run_value(layers, "last"),
            compiler: run_value(layers, "compiler"),
        },
        verbose: layers.iter().any(|matches| matches.get_flag("verbose")),
        lang,
    }
}

pub async fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first, so help text is localised.
    let requested_language = pre_parse_language();
    crate::init_locale(requested_language.as_deref());

    let matches = build_cli().get_matches();
    let lang = requested_language;

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            commands::run::execute(run_options(&[run_matches, &matches], lang)).await?;
        }
        Some(("init", init_matches)) => {
            let output = init_matches
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            let force = init_matches.get_flag("force");
            let non_interactive = init_matches.get_flag("non-interactive");
            commands::init::run_init_wizard(&output, force, non_interactive)?;
        }
        _ => {
            // No subcommand: `run` with the top-level arguments.
            commands::run::execute(run_options(&[&matches], lang)).await?;
        }
    }
    Ok(())
}
