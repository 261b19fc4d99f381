//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_anagram_result, print_benchmark_result, print_search_result, print_subwords_result,
};
