//! Formatting utilities for terminal output

use crate::core::WordKey;

/// Describe a blank cost, e.g. `no blanks` or `2 blanks (?e ?s)`
#[must_use]
pub fn blank_cost_label(cost: &WordKey) -> String {
    match cost.len() {
        0 => "no blanks".to_string(),
        n => {
            let letters: Vec<String> = cost.as_str().chars().map(|l| format!("?{l}")).collect();
            let noun = if n == 1 { "blank" } else { "blanks" };
            format!("{n} {noun} ({})", letters.join(" "))
        }
    }
}

/// Join words into lines no wider than `width`
#[must_use]
pub fn wrap_words(words: &[&str], width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in words {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
