//! The callable capability behind address-book filtering: anything that can
//! answer yes/no for a single entry.
//!
//! Closures, function pointers and hand-written callable structs all
//! qualify through one trait, so call sites never care which kind they were
//! handed. The trait stays dyn-compatible: the book exposes both a generic
//! filter (static dispatch) and a trait-object filter (dynamic dispatch)
//! over the same contract.

use regex::Regex;

/// A yes/no test over one entry.
///
/// Blanket-implemented for every `Fn(&str) -> bool`, so most callers just
/// write a closure. Implement it by hand when the predicate carries state
/// worth naming, as [`Pattern`] does.
pub trait Predicate {
    /// Returns `true` if `entry` should be kept.
    fn matches(&self, entry: &str) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(&str) -> bool,
{
    fn matches(&self, entry: &str) -> bool {
        self(entry)
    }
}

/// Keep entries containing `needle` anywhere.
pub fn contains(needle: impl Into<String>) -> impl Predicate {
    let needle = needle.into();
    move |entry: &str| entry.contains(&needle)
}

/// Keep entries ending with `suffix`.
pub fn has_suffix(suffix: impl Into<String>) -> impl Predicate {
    let suffix = suffix.into();
    move |entry: &str| entry.ends_with(&suffix)
}

/// A compiled-pattern predicate.
///
/// The struct form exists so the pattern is compiled once and then reused
/// across every entry of a filter pass.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compiles `pattern`. Invalid syntax is reported to the caller rather
    /// than panicking at first use.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Pattern {
            regex: Regex::new(pattern)?,
        })
    }
}

impl Predicate for Pattern {
    fn matches(&self, entry: &str) -> bool {
        self.regex.is_match(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn non_empty(entry: &str) -> bool {
        !entry.is_empty()
    }

    #[test]
    fn test_closures_are_predicates() {
        let pred = |entry: &str| entry.len() > 3;
        assert!(pred.matches("long enough"));
        assert!(!pred.matches("no"));
    }

    #[test]
    fn test_function_pointers_are_predicates() {
        assert!(non_empty.matches("x"));
        assert!(!non_empty.matches(""));
    }

    #[test]
    fn test_contains_finds_substring_anywhere() {
        let pred = contains(".org");
        assert!(pred.matches("a@x.org"));
        assert!(pred.matches(".org-prefixed"));
        assert!(!pred.matches("b@y.com"));
    }

    #[test]
    fn test_has_suffix_only_matches_the_end() {
        let pred = has_suffix(".org");
        assert!(pred.matches("a@x.org"));
        assert!(!pred.matches(".org-prefixed"));
    }

    #[test]
    fn test_pattern_compiles_once_and_matches() {
        let pred = Pattern::new(r"\.org$").unwrap();
        assert!(pred.matches("somebody@some.org"));
        assert!(!pred.matches("somebody@some.org.old"));
    }

    #[test]
    fn test_pattern_reports_bad_syntax() {
        assert!(Pattern::new("[unclosed").is_err());
    }

    #[test]
    fn test_every_kind_works_through_a_trait_object() {
        let needle = contains("@");
        let pattern = Pattern::new("@").unwrap();
        let pointer: fn(&str) -> bool = non_empty;
        let kinds: Vec<&dyn Predicate> = vec![&needle, &pattern, &pointer];
        for pred in kinds {
            assert!(pred.matches("a@x.org"));
        }
    }
}
