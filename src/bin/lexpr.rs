//! Command-line interface for lexpr
//!
//! Reads Lexpr source from a file or stdin and writes the translation in the chosen format.
//!
//! Usage:
//!   lexpr [INPUT] [-o OUTPUT] [-f FORMAT]    - Translate INPUT (stdin when absent or `-`)
//!   lexpr --tokens [INPUT]                   - Dump the merged token stream as JSON
//!   lexpr --list-formats                     - List the available output formats
//!
//! Exit status is 0 on success, 1 when the input does not translate and 2 for usage, I/O
//! and configuration problems.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use lexpr::lexpr::config::{LexprConfig, Loader};
use lexpr::lexpr::formats::{FormatError, FormatRegistry};
use lexpr::lexpr::transforms::standard::{lexing_pipeline, pipeline};
use lexpr::lexpr::TranslateError;
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Translate(#[from] TranslateError),
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("cannot write {path}: {source}")]
    Write { path: String, source: io::Error },
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("{0}")]
    Format(#[from] FormatError),
    #[error("cannot serialize tokens: {0}")]
    Tokens(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::Translate(_) => 1,
            _ => 2,
        }
    }
}

fn command() -> Command {
    Command::new("lexpr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate Lexpr notation into prefix s-expressions")
        .arg(
            Arg::new("input")
                .help("Input file; `-` or absent reads stdin")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the result to this file instead of stdout"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (see --list-formats)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("mixfix")
                .long("mixfix")
                .help("Join separated identifiers in one run into a single head")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("Maximum parenthesis nesting depth")
                .value_parser(value_parser!(u32)),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the merged token stream as JSON instead of translating")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline stages to stderr")
                .action(ArgAction::SetTrue),
        )
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LEXPR_LOG").unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn load_config(matches: &ArgMatches) -> Result<LexprConfig, CliError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if matches.get_flag("mixfix") {
        loader = loader.set_override("parsing.mixfix_heads", true)?;
    }
    if let Some(depth) = matches.get_one::<u32>("max-depth") {
        loader = loader.set_override("limits.max_depth", i64::from(*depth))?;
    }
    Ok(loader.build()?)
}

fn read_input(input: Option<&String>) -> Result<String, CliError> {
    match input.map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(|source| CliError::Read {
                    path: "stdin".to_string(),
                    source,
                })?;
            Ok(source)
        }
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_string(),
            source,
        }),
    }
}

fn write_output(output: Option<&String>, mut text: String) -> Result<(), CliError> {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    match output {
        Some(path) => std::fs::write(path, text).map_err(|source| CliError::Write {
            path: path.to_string(),
            source,
        }),
        None => {
            print!("{}", text);
            Ok(())
        }
    }
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let registry = FormatRegistry::with_defaults();
    if matches.get_flag("list-formats") {
        println!("Available output formats:\n");
        for (name, description) in registry.describe_formats() {
            println!("  {:<10} {}", name, description);
        }
        return Ok(());
    }

    let config = load_config(matches)?;
    let format = config.output.format.as_str();
    if !registry.has(format) {
        return Err(FormatError::FormatNotFound(format.to_string()).into());
    }

    let source = read_input(matches.get_one::<String>("input"))?;
    tracing::debug!(bytes = source.len(), format, "read input");

    let text = if matches.get_flag("tokens") {
        let tokens = lexing_pipeline(&config).run(source)?;
        serde_json::to_string_pretty(&tokens)?
    } else {
        let program = pipeline(&config).run(source)?;
        registry.serialize(&program, format)?
    };
    write_output(matches.get_one::<String>("output"), text)
}

fn main() -> ExitCode {
    let matches = command().get_matches();
    init_logging(matches.get_flag("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        command().debug_assert();
    }

    #[test]
    fn overrides_reach_config() {
        let matches = command()
            .try_get_matches_from(["lexpr", "--mixfix", "--max-depth", "3", "-f", "json"])
            .unwrap();
        let config = load_config(&matches).unwrap();
        assert!(config.parsing.mixfix_heads);
        assert_eq!(config.limits.max_depth, 3);
        assert_eq!(config.output.format, "json");
    }

    #[test]
    fn exit_codes_by_error_kind() {
        let err = CliError::from(TranslateError::UnbalancedParens {
            problem: lexpr::lexpr::error::ParenProblem::Stray,
            position: Default::default(),
        });
        assert_eq!(err.exit_code(), 1);

        let err = CliError::from(FormatError::FormatNotFound("yaml".to_string()));
        assert_eq!(err.exit_code(), 2);
    }
}
