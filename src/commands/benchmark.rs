//! Benchmark command
//!
//! Draws random racks from the dictionary and times subword and pattern
//! queries against them.

use crate::core::TileSet;
use crate::errors::WordMatchError;
use crate::index::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
pub struct BenchmarkConfig {
    pub racks: usize,
    pub rack_size: usize,
    pub blanks: usize,
    pub seed: Option<u64>,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            racks: 100,
            rack_size: 7,
            blanks: 1,
            seed: None,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub racks: usize,
    pub total_subwords: usize,
    pub total_pattern_words: usize,
    pub total_groups: usize,
    pub duration: Duration,
    pub queries_per_second: f64,
}

/// Run subword and pattern queries for randomly drawn racks
///
/// Each rack is seeded from a random dictionary word, padded with random
/// letters to `rack_size`, and searched with a pattern anchored on the seed
/// word's first letter.
///
/// # Errors
///
/// Returns an error if a generated pattern fails to match.
pub fn run_benchmark(
    dictionary: &Dictionary,
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult, WordMatchError> {
    let mut rng = config
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    let mut words: Vec<&str> = dictionary.words().collect();
    words.sort_unstable();
    let racks = if words.is_empty() { 0 } else { config.racks };

    let pb = if config.show_progress {
        ProgressBar::new(racks as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut total_subwords = 0;
    let mut total_pattern_words = 0;
    let mut total_groups = 0;
    let start = Instant::now();

    for _ in 0..racks {
        let Some(&seed_word) = words.choose(&mut rng) else {
            break;
        };
        let letters = draw_rack(seed_word, config.rack_size, &mut rng);
        let pattern = seed_word
            .chars()
            .next()
            .map_or_else(String::new, |first| format!("^{first}"));

        total_subwords += dictionary.find_subwords(&letters).count();

        let tiles = TileSet::new(letters.clone(), config.blanks);
        for group in dictionary.find_subwords_for_pattern(&tiles, &pattern)? {
            let group = group?;
            total_groups += 1;
            total_pattern_words += group.words.len();
        }

        pb.set_message(letters);
        pb.inc(1);
    }

    pb.finish_and_clear();
    let duration = start.elapsed();

    Ok(BenchmarkResult {
        racks,
        total_subwords,
        total_pattern_words,
        total_groups,
        duration,
        queries_per_second: (racks * 2) as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Shuffle the seed word's letters and pad or trim to `size`
fn draw_rack<R: Rng>(seed_word: &str, size: usize, rng: &mut R) -> String {
    let mut letters: Vec<char> = seed_word.chars().collect();
    while letters.len() < size {
        letters.push(char::from(rng.random_range(b'a'..=b'z')));
    }
    letters.shuffle(rng);
    letters.truncate(size);
    letters.into_iter().collect()
}
