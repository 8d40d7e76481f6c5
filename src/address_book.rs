//! An ordered, append-only collection of string entries with
//! predicate-based filtering.
//!
//! The book never validates or rewrites entries; the only mutation is
//! appending. Filtering walks the entries in insertion order, asks the
//! predicate once per entry, and keeps the matches.

use crate::predicate::Predicate;

/// An append-only list of address entries, queried with caller-supplied
/// predicates.
///
/// Entries keep insertion order and duplicates are allowed. The same
/// filter contract is offered twice: [`find_matching`](Self::find_matching)
/// resolves the predicate at compile time, while
/// [`find_matching_dyn`](Self::find_matching_dyn) takes a trait object.
/// The two are interchangeable; pick whichever the call site reads better
/// with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    entries: Vec<String>,
}

impl AddressBook {
    /// Creates an empty book.
    pub fn new() -> Self {
        AddressBook {
            entries: Vec::new(),
        }
    }

    /// Creates an empty book with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        AddressBook {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Appends `entry` to the end of the book.
    ///
    /// Any string is accepted; there is nothing to validate and the call
    /// cannot fail.
    pub fn add(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Iterates the entries in insertion order without copying them.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the entries matching `predicate`, in insertion order.
    ///
    /// The predicate is asked exactly once per entry, front to back, and
    /// the book itself is left untouched. An empty book yields an empty
    /// result for every predicate.
    pub fn find_matching<P: Predicate>(&self, predicate: P) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| predicate.matches(entry))
            .cloned()
            .collect()
    }

    /// Same contract as [`find_matching`](Self::find_matching), resolved
    /// through dynamic dispatch.
    ///
    /// Useful when the predicate is chosen at run time or stored behind a
    /// trait object.
    pub fn find_matching_dyn(&self, predicate: &dyn Predicate) -> Vec<String> {
        // Mirrors find_matching; the generic path keeps static dispatch.
        self.entries
            .iter()
            .filter(|entry| predicate.matches(entry))
            .cloned()
            .collect()
    }

    /// Lazy, borrowing variant of the filter.
    ///
    /// Yields `&str` slices instead of owned strings; collecting it equals
    /// [`find_matching`](Self::find_matching) on the same predicate.
    pub fn matching<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a str> + 'a
    where
        P: Predicate + 'a,
    {
        self.entries
            .iter()
            .map(String::as_str)
            .filter(move |entry| predicate.matches(entry))
    }
}

// =============================================================================
// Iterator integration
// =============================================================================

impl Extend<String> for AddressBook {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'a> Extend<&'a str> for AddressBook {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        self.entries.extend(iter.into_iter().map(str::to_owned));
    }
}

impl FromIterator<String> for AddressBook {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        AddressBook {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for AddressBook {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        AddressBook {
            entries: iter.into_iter().map(str::to_owned).collect(),
        }
    }
}

impl IntoIterator for AddressBook {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
