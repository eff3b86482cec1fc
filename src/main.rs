//! pseudopy — translate English-like pseudocode into Python.
//!
//! Usage:
//!   pseudopy [OPTIONS] [FILE]
//!
//! Examples:
//!   pseudopy algo.txt                 # Print generated Python
//!   pseudopy --tokens algo.txt        # Token listing, then code
//!   echo 'x = 1 + 2' | pseudopy       # Read from stdin

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::{debug, info};

use pseudopy::config::{self, Config, TokenFormat};
use pseudopy::translate::{LexErrorPolicy, Token, TranslateError, Translator};

#[derive(Parser, Debug)]
#[command(name = "pseudopy")]
#[command(version)]
#[command(about = "Translate English-like pseudocode into Python", long_about = None)]
struct Cli {
    /// Pseudocode file to translate (stdin when absent or `-`)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Config file (defaults to ~/.pseudopy/config.yaml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Spaces per indentation level
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u8).range(1..))]
    indent: Option<u8>,

    /// Print the token listing before the code
    #[arg(long)]
    tokens: bool,

    /// Token listing format
    #[arg(long)]
    token_format: Option<FormatArg>,

    /// Skip illegal characters and translate what remains
    #[arg(long)]
    keep_going: bool,

    /// Verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for TokenFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => TokenFormat::Text,
            FormatArg::Json => TokenFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.quiet {
        log::LevelFilter::Error
    } else {
        match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .format_timestamp(None)
        .init();

    let config = match resolve_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("failed to load config: {e}");
            std::process::exit(1);
        }
    };
    debug!("config: {config:?}");

    let source = match read_source(&cli.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("failed to read input: {e}");
            std::process::exit(1);
        }
    };

    info!("translating {} bytes", source.len());
    let translator = Translator::new(config.translate_options());
    debug!("translate options: {:?}", translator.options());

    match translator.translate(&source) {
        Ok(translation) => {
            if config.show_tokens {
                print_tokens(&translation.tokens, config.token_format);
            }
            for warning in &translation.warnings {
                eprintln!("warning: {warning}");
            }
            println!("{}", translation.code);
        }
        Err(e) => {
            if config.show_tokens && !e.tokens().is_empty() {
                print_tokens(e.tokens(), config.token_format);
            }
            match e {
                TranslateError::NoInput => eprintln!("{e}"),
                _ => eprintln!("error: {e}"),
            }
            std::process::exit(1);
        }
    }
}

/// File config first, then command-line overrides.
fn resolve_config(cli: &Cli) -> io::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => Config::load().unwrap_or_default(),
    };

    if let Some(width) = cli.indent {
        config.indent_width = usize::from(width);
    }
    if cli.tokens {
        config.show_tokens = true;
    }
    if let Some(format) = cli.token_format {
        config.token_format = format.into();
    }
    if cli.keep_going {
        config.lex_errors = LexErrorPolicy::Continue;
    }
    Ok(config)
}

fn read_source(input: &Option<PathBuf>) -> io::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn print_tokens(tokens: &[Token], format: TokenFormat) {
    match format {
        TokenFormat::Text => {
            for token in tokens {
                println!("{token}");
            }
        }
        TokenFormat::Json => {
            let records: Vec<_> = tokens.iter().map(Token::record).collect();
            match serde_json::to_string_pretty(&records) {
                Ok(json) => println!("{json}"),
                Err(e) => eprintln!("failed to serialize tokens: {e}"),
            }
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indent_must_be_positive() {
        assert!(Cli::try_parse_from(["pseudopy", "--indent", "0"]).is_err());
        let cli = Cli::try_parse_from(["pseudopy", "--indent", "2"]).unwrap();
        assert_eq!(cli.indent, Some(2));
    }

    #[test]
    fn flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "indent_width: 8\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from([
            "pseudopy",
            "--config",
            path.as_str(),
            "--indent",
            "2",
            "--tokens",
            "--token-format",
            "json",
            "--keep-going",
        ])
        .unwrap();
        let config = resolve_config(&cli).unwrap();
        assert_eq!(config.indent_width, 2);
        assert!(config.show_tokens);
        assert_eq!(config.token_format, TokenFormat::Json);
        assert_eq!(config.lex_errors, LexErrorPolicy::Continue);
    }

    #[test]
    fn zero_indent_in_config_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "indent_width: 0\n").unwrap();
        let path = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from(["pseudopy", "--config", path.as_str()]).unwrap();
        assert!(resolve_config(&cli).is_err());
    }
}
