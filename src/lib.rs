//! A small address book: append string entries, filter them with
//! predicates.
//!
//! The library is two modules. [`address_book`] holds the collection
//! itself, an ordered append-only list of strings with eager and lazy
//! filter passes. [`predicate`] defines the [`Predicate`] trait the
//! filters consume, with a blanket impl that lets plain closures and
//! function pointers stand in wherever a predicate is expected, plus a
//! few ready-made predicates for the common searches.
//!
//! ```
//! use address_book::{contains, AddressBook};
//!
//! let mut book = AddressBook::new();
//! book.add("a@x.org");
//! book.add("b@y.com");
//! book.add("c@z.org");
//!
//! assert_eq!(book.find_matching(contains(".org")), ["a@x.org", "c@z.org"]);
//! ```
//!
//! The binaries under `src/` are worked walkthroughs of the idioms the
//! library leans on: type inference, struct initialization, closures,
//! iterators, moves, shared ownership and radix formatting. Run one with
//! `cargo run --bin p3_closures`.

pub mod address_book;
pub mod predicate;

pub use address_book::AddressBook;
pub use predicate::{contains, has_suffix, Pattern, Predicate};
