//! Command implementations

pub mod anagrams;
pub mod benchmark;
pub mod search;
pub mod subwords;

pub use anagrams::{AnagramResult, list_anagrams};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use search::{SearchConfig, SearchResult, search_patterns};
pub use subwords::{SubwordsConfig, SubwordsResult, list_subwords};
