//! Word patterns
//!
//! A pattern is a regular expression tested against the literal spelling of a
//! candidate word with search semantics: it only anchors when the caller writes
//! `^` or `$`. Letters the pattern fixes (e.g. the `c` and `t` in `^c.t$`) are
//! already on the board, so they join the pool of available letters.

use super::WordKey;
use crate::errors::WordMatchError;
use fancy_regex::Regex;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;

/// A compiled word pattern together with its literal letters
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
    literals: String,
}

impl Pattern {
    /// Compile a pattern
    ///
    /// # Errors
    ///
    /// Returns `WordMatchError::PatternSyntax` if the regex does not compile.
    ///
    /// # Examples
    /// ```
    /// use wordmatch::core::Pattern;
    ///
    /// let pattern = Pattern::new("^c.t$").unwrap();
    /// assert_eq!(pattern.literal_letters(), "ct");
    /// assert!(pattern.is_match("cat").unwrap());
    /// assert!(!pattern.is_match("coat").unwrap());
    /// ```
    pub fn new(source: &str) -> Result<Self, WordMatchError> {
        let regex = Regex::new(source).map_err(|e| WordMatchError::PatternSyntax {
            pattern: source.to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
            literals: literal_letters(source),
        })
    }

    /// The pattern as written by the caller
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Lowercase letters the pattern matches literally, in pattern order
    #[inline]
    #[must_use]
    pub fn literal_letters(&self) -> &str {
        &self.literals
    }

    /// Canonical key of the literal letters
    #[must_use]
    pub fn literal_key(&self) -> WordKey {
        WordKey::new(&self.literals)
    }

    /// Test a word against the pattern
    ///
    /// # Errors
    ///
    /// Returns `WordMatchError::PatternMatch` if the regex engine hits its
    /// backtrack limit on this word.
    pub fn is_match(&self, word: &str) -> Result<bool, WordMatchError> {
        self.regex
            .is_match(word)
            .map_err(|e| WordMatchError::PatternMatch {
                pattern: self.source.clone(),
                word: word.to_string(),
                source: Box::new(e),
            })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

/// Collect the letters a pattern fixes
///
/// Skips escapes (`\w`, `\x{61}`), character classes, repetition braces and
/// group headers such as `(?i)` or `(?P<name>`. Lookaround bodies are scanned
/// like any other subexpression.
fn literal_letters(source: &str) -> String {
    let mut letters = String::new();
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => skip_escape(&mut chars),
            '[' => skip_class(&mut chars),
            '{' => skip_through(&mut chars, '}'),
            '(' if chars.peek() == Some(&'?') => {
                chars.next();
                skip_group_header(&mut chars);
            }
            c if c.is_ascii_lowercase() => letters.push(c),
            _ => {}
        }
    }

    letters
}

fn skip_escape(chars: &mut Peekable<Chars<'_>>) {
    // `\x{...}`, `\p{...}` and friends carry a braced argument; `\xNN` two hex digits.
    // `\k<name>`, `\k{name}` and `\g<name>` refer to a group by name.
    match chars.next() {
        Some('x' | 'u' | 'p' | 'P') if chars.peek() == Some(&'{') => skip_through(chars, '}'),
        Some('x') => {
            chars.next();
            chars.next();
        }
        Some('k' | 'g') => match chars.peek() {
            Some('<') => skip_through(chars, '>'),
            Some('{') => skip_through(chars, '}'),
            Some('\'') => {
                chars.next();
                skip_through(chars, '\'');
            }
            _ => {}
        },
        _ => {}
    }
}

fn skip_class(chars: &mut Peekable<Chars<'_>>) {
    // A `]` right after `[` or `[^` is a literal member, not the close
    if chars.peek() == Some(&'^') {
        chars.next();
    }
    if chars.peek() == Some(&']') {
        chars.next();
    }

    let mut depth = 1;
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return;
                }
            }
            _ => {}
        }
    }
}

fn skip_group_header(chars: &mut Peekable<Chars<'_>>) {
    match chars.peek().copied() {
        Some('=' | '!' | ':' | '>') => {
            chars.next();
        }
        // `(?P<name>` names a group, `(?P=name)` refers back to one
        Some('P') => {
            chars.next();
            let close = if chars.peek() == Some(&'=') { ')' } else { '>' };
            skip_through(chars, close);
        }
        Some('<') => {
            chars.next();
            if matches!(chars.peek(), Some('=' | '!')) {
                chars.next();
            } else {
                skip_through(chars, '>');
            }
        }
        // inline flags: `(?i)` or `(?x-i:...)`
        _ => {
            for ch in chars.by_ref() {
                if ch == ':' || ch == ')' {
                    break;
                }
            }
        }
    }
}

fn skip_through(chars: &mut Peekable<Chars<'_>>, close: char) {
    for ch in chars.by_ref() {
        if ch == close {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_skip_dot_and_anchors() {
        assert_eq!(literal_letters("^c.t$"), "ct");
        assert_eq!(literal_letters("qu"), "qu");
    }

    #[test]
    fn literals_skip_escapes() {
        assert_eq!(literal_letters(r"\w+ing\b"), "ing");
        assert_eq!(literal_letters(r"\x{61}b\d"), "b");
        assert_eq!(literal_letters(r"\p{L}z"), "z");
        assert_eq!(literal_letters(r"\xabc"), "c");
        assert_eq!(literal_letters(r"^(?<z>.)\k<z>$"), "");
        assert_eq!(literal_letters(r"(?<name>.)\k{name}s"), "s");
        assert_eq!(literal_letters(r"(?<v>.)\g<v>e"), "e");
        assert_eq!(literal_letters(r"(?<v>.)\k'v'e"), "e");
    }

    #[test]
    fn literals_skip_classes() {
        assert_eq!(literal_letters("^[aeiou]t$"), "t");
        assert_eq!(literal_letters("[^xyz]s"), "s");
        assert_eq!(literal_letters("[]a]b"), "b");
        assert_eq!(literal_letters(r"[a\]b]c"), "c");
    }

    #[test]
    fn literals_skip_quantifier_braces() {
        assert_eq!(literal_letters("a{2,3}b"), "ab");
    }

    #[test]
    fn literals_skip_group_headers() {
        assert_eq!(literal_letters("(?i)cat"), "cat");
        assert_eq!(literal_letters("(?P<first>s)t"), "st");
        assert_eq!(literal_letters("(?<name>p)"), "p");
        assert_eq!(literal_letters("(?:ab)c"), "abc");
        assert_eq!(literal_letters("^(?>ab)c$"), "abc");
        assert_eq!(literal_letters("q(?=u)"), "qu");
        assert_eq!(literal_letters("(?<!x)y"), "xy");
        assert_eq!(literal_letters("(?P<v>[aeiou])s(?P=v)"), "s");
    }

    #[test]
    fn pattern_compiles_and_matches() {
        let pattern = Pattern::new("ing$").unwrap();
        assert_eq!(pattern.as_str(), "ing$");
        assert_eq!(pattern.literal_key().as_str(), "gin");
        assert!(pattern.is_match("singing").unwrap());
        assert!(!pattern.is_match("singe").unwrap());
    }

    #[test]
    fn pattern_uses_search_semantics() {
        let pattern = Pattern::new("at").unwrap();
        assert!(pattern.is_match("cat").unwrap());
        assert!(pattern.is_match("atom").unwrap());
        assert!(pattern.is_match("batch").unwrap());
    }

    #[test]
    fn pattern_supports_backreferences() {
        let pattern = Pattern::new(r"^(.)(.).?\2\1$").unwrap();
        assert!(pattern.is_match("level").unwrap());
        assert!(!pattern.is_match("lever").unwrap());
    }

    #[test]
    fn malformed_pattern_is_syntax_error() {
        let err = Pattern::new("^c[at$").unwrap_err();
        assert!(matches!(err, WordMatchError::PatternSyntax { .. }));
        assert_eq!(err.code(), "W001");
    }
}
