//! Lexitrie - Main entrypoint.
//!
//! Loads configuration and a dictionary into a word trie, then answers
//! membership, listing and suggestion queries from the command line.

use clap::{Parser, Subcommand};
use lexitrie_lib::config::{ConfigLoader, LexiConfig, LogConfig, ENV_PREFIX};
use lexitrie_lib::data_structures::{WordTrie, WordTrieConfig};
use lexitrie_lib::dictionary::{self, LoadOptions, LoadReport};
use lexitrie_lib::error::{
    report_error, set_error_reporter, ErrorContext, LexiError, LexiResult, TracingErrorReporter,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Command line arguments for lexitrie.
#[derive(Parser, Debug)]
#[clap(name = "lexitrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Word list to load, overriding the configured one
    #[clap(short, long, value_parser)]
    dictionary: Option<PathBuf>,

    /// Print results as JSON
    #[clap(long)]
    json: bool,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether each word is in the dictionary
    Contains {
        /// Words to look up
        #[clap(required = true)]
        words: Vec<String>,
    },

    /// List stored words, optionally under a prefix
    Words {
        /// Prefix to list completions for
        #[clap(short, long)]
        prefix: Option<String>,
    },

    /// Suggest words for a possibly misspelled input
    Suggest {
        /// Input to find suggestions for
        input: String,
    },

    /// Show dictionary statistics
    Stats,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct Membership<'a> {
    word: &'a str,
    contained: bool,
}

#[derive(Debug, Serialize)]
struct Stats {
    words: usize,
    nodes: usize,
    height: usize,
    load: Option<LoadReport>,
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(config: &LogConfig) -> LexiResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| LexiError::Custom(format!("Invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let result = if config.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| LexiError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds the trie and loads the dictionary, if one is configured.
fn build_trie(config: &LexiConfig) -> LexiResult<(WordTrie, Option<LoadReport>)> {
    let mut trie = WordTrie::with_config(WordTrieConfig::from(&config.trie));

    let report = match &config.dictionary.path {
        Some(path) => {
            let options = LoadOptions::from(&config.dictionary);
            Some(dictionary::load_file(&mut trie, path, &options)?)
        }
        None => {
            debug!("No dictionary configured, starting with an empty trie");
            None
        }
    };

    Ok((trie, report))
}

fn print_json<T: Serialize>(value: &T) -> LexiResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_list(words: &[String], json: bool) -> LexiResult<()> {
    if json {
        return print_json(&words);
    }
    for word in words {
        println!("{word}");
    }
    Ok(())
}

fn run(args: Args, config: LexiConfig) -> LexiResult<()> {
    match args.command {
        Command::Contains { words } => {
            let (trie, _) = build_trie(&config)?;
            let results: Vec<Membership<'_>> = words
                .iter()
                .map(|word| Membership {
                    word: word.as_str(),
                    contained: trie.contains(word),
                })
                .collect();

            if args.json {
                print_json(&results)
            } else {
                for result in &results {
                    println!("{}\t{}", result.word, result.contained);
                }
                Ok(())
            }
        }
        Command::Words { prefix } => {
            let (trie, _) = build_trie(&config)?;
            let words = match prefix {
                Some(prefix) => trie.words_with_prefix(&prefix)?,
                None => trie.words(),
            };
            print_list(&words, args.json)
        }
        Command::Suggest { input } => {
            let (trie, _) = build_trie(&config)?;
            let suggestions = trie.suggest(&input)?;
            print_list(&suggestions, args.json)
        }
        Command::Stats => {
            let (trie, load) = build_trie(&config)?;
            let stats = Stats {
                words: trie.len(),
                nodes: trie.node_count(),
                height: trie.height(),
                load,
            };

            if args.json {
                print_json(&stats)
            } else {
                println!("words:  {}", stats.words);
                println!("nodes:  {}", stats.nodes);
                println!("height: {}", stats.height);
                Ok(())
            }
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");
            let default_config = LexiConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| LexiError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);
    let mut config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };
    if let Some(path) = &args.dictionary {
        config.dictionary.path = Some(path.clone());
    }

    if let Err(e) = init_logging(&config.log) {
        eprintln!("{e}");
        process::exit(2);
    }
    set_error_reporter(Arc::new(TracingErrorReporter::new()));

    if let Err(error) = run(args, config) {
        let context = ErrorContext::new(error, "cli");
        report_error(&context);
        process::exit(1);
    }
}
