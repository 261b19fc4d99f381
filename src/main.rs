//! Word Matcher - CLI
//!
//! Loads a newline-delimited word list and runs anagram, subword, and
//! blank-aware pattern queries against it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordmatch::{
    commands::{
        BenchmarkConfig, SearchConfig, SubwordsConfig, list_anagrams, list_subwords,
        run_benchmark, search_patterns,
    },
    index::{Dictionary, QueryOptions},
    logging::init_logger,
    output::{
        print_anagram_result, print_benchmark_result, print_search_result, print_subwords_result,
    },
    wordlists::{load_dictionary, load_from_reader},
};

#[derive(Parser)]
#[command(
    name = "wordmatch",
    about = "Anagrams, subwords, and blank-aware pattern search over a word list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list: path to a newline-delimited file, or '-' for stdin
    #[arg(short = 'w', long, global = true, default_value = "words.txt")]
    words: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List anagrams of a word
    Anagrams {
        /// The word to rearrange
        word: String,
    },

    /// List words spellable from a set of letters
    Subwords {
        /// Available letters
        letters: String,

        /// Minimum word length
        #[arg(short = 'm', long, default_value = "0")]
        min_length: usize,

        /// Leave out the letters themselves if they form a word
        #[arg(short = 'x', long)]
        exclude_self: bool,
    },

    /// Search patterns for a rack, grouped by blanks needed
    Pattern {
        /// Rack letters; '_', '?' or '*' are blank tiles
        rack: String,

        /// Regular expressions tested against each word (default: any word)
        patterns: Vec<String>,

        /// Minimum word length
        #[arg(short = 'm', long, default_value = "0")]
        min_length: usize,

        /// Letters every result must contain
        #[arg(short = 'u', long, default_value = "")]
        must_use: String,
    },

    /// Benchmark query performance on random racks
    Bench {
        /// Number of racks to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Blank tiles per rack
        #[arg(short, long, default_value = "1")]
        blanks: usize,

        /// Random seed for reproducible racks
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn load_words(source: &str) -> Result<Dictionary> {
    if source == "-" {
        let words = load_from_reader(io::stdin().lock())
            .context("failed to read word list from stdin")?;
        Ok(Dictionary::new(words))
    } else {
        Ok(load_dictionary(source)?)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let dictionary = load_words(&cli.words)?;
    log::info!(
        "Loaded {} words ({} keys)",
        dictionary.word_count(),
        dictionary.len()
    );

    match cli.command {
        Commands::Anagrams { word } => {
            print_anagram_result(&list_anagrams(&dictionary, &word.to_ascii_lowercase()));
        }
        Commands::Subwords {
            letters,
            min_length,
            exclude_self,
        } => {
            let config = SubwordsConfig {
                min_length,
                exclude_self,
                ..SubwordsConfig::new(letters)
            };
            print_subwords_result(&list_subwords(&dictionary, &config));
        }
        Commands::Pattern {
            rack,
            patterns,
            min_length,
            must_use,
        } => {
            let config = SearchConfig {
                options: QueryOptions::new()
                    .with_min_length(min_length)
                    .with_must_use(must_use),
                ..SearchConfig::new(rack, patterns)
            };
            let result = search_patterns(&dictionary, &config)
                .map_err(|e| anyhow::anyhow!(e.display_detailed()))?;
            print_search_result(&result);
        }
        Commands::Bench {
            count,
            blanks,
            seed,
        } => {
            println!("Running benchmark on {count} random racks...");
            let config = BenchmarkConfig {
                racks: count,
                blanks,
                seed,
                ..BenchmarkConfig::default()
            };
            print_benchmark_result(&run_benchmark(&dictionary, &config)?);
        }
    }

    Ok(())
}
