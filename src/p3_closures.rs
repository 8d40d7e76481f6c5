//! Pattern 3: Closures as Predicates
//! Searching the address book with closures, captures, and function pointers
//!
//! Run with: cargo run --bin p3_closures

use address_book::{contains, AddressBook, Pattern, Predicate};
use colored::Colorize;

fn main() {
    println!("=== Closure Basics ===\n");

    let greet = || println!("Hello world");
    greet();

    let double = |n: i32| n * 2;
    println!("double(21) = {}", double(21));

    println!("\n=== Searching with a Closure ===\n");

    let mut book = AddressBook::new();
    book.add("sales@widgets.com");
    book.add("somebody@some.org");

    println!("entries:");
    book.iter().for_each(|addr| println!("  {}", addr));

    let orgs = org_addresses(&book);
    println!("\n.org entries:");
    for addr in &orgs {
        println!("  {}", addr.green());
    }

    println!("\n=== Capturing Variables ===\n");

    // The closure borrows `name` from the enclosing scope.
    let by_name = addresses_with_name(&book, "widgets");
    println!("entries mentioning 'widgets': {:?}", by_name);

    // A move closure takes ownership of what it captures.
    let domain = String::from(".com");
    let from_com = move |addr: &str| addr.ends_with(domain.as_str());
    println!("entries ending in .com:      {:?}", book.find_matching(from_com));
    // println!("{}", domain); // moved into the closure above

    println!("\n=== One Predicate Trait, Many Callables ===\n");

    let org_pattern = Pattern::new(r"\.org$").unwrap();

    println!("closure:     {:?}", search(&book, &|addr: &str| addr.contains(".org")));
    println!("fn pointer:  {:?}", search(&book, &looks_like_email));
    println!("pattern:     {:?}", search(&book, &org_pattern));
    println!("ready-made:  {:?}", search(&book, &contains(".org")));

    let static_path = book.find_matching(org_pattern.clone());
    let dynamic_path = book.find_matching_dyn(&org_pattern);
    println!(
        "\nstatic and dynamic dispatch agree: {}",
        if static_path == dynamic_path {
            "yes".green()
        } else {
            "no".red()
        }
    );

    println!("\n=== Is a Callback Wired Up? ===\n");

    let mut callback: Option<Box<dyn Fn() -> i32>> = None;
    println!("before wiring: callback present? {}", callback.is_some());

    callback = Some(Box::new(|| 2));
    if let Some(callback) = &callback {
        println!("after wiring:  callback() = {}", callback());
    }

    println!("\n=== Key Points ===");
    println!("1. Closures, fn pointers, and predicate structs all satisfy one trait");
    println!("2. Plain closures borrow their captures; move closures own them");
    println!("3. Generic and trait-object dispatch filter identically");
    println!("4. Option<Box<dyn Fn>> models a callback that may not be set yet");
}

fn org_addresses(book: &AddressBook) -> Vec<String> {
    book.find_matching(|addr: &str| addr.contains(".org"))
}

// `name` is captured by reference for the duration of the search.
fn addresses_with_name(book: &AddressBook, name: &str) -> Vec<String> {
    book.find_matching(|addr: &str| addr.contains(name))
}

// Picking the predicate at run time is the trait object's job.
fn search(book: &AddressBook, predicate: &dyn Predicate) -> Vec<String> {
    book.find_matching_dyn(predicate)
}

fn looks_like_email(addr: &str) -> bool {
    addr.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_entry_book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add("sales@widgets.com");
        book.add("somebody@some.org");
        book
    }

    #[test]
    fn org_search_finds_only_the_org_entry() {
        let found = org_addresses(&two_entry_book());
        assert_eq!(found, ["somebody@some.org"]);
    }

    #[test]
    fn name_search_uses_the_captured_needle() {
        let found = addresses_with_name(&two_entry_book(), "widgets");
        assert_eq!(found, ["sales@widgets.com"]);
    }

    #[test]
    fn search_accepts_every_callable_kind() {
        let book = two_entry_book();
        let pattern = Pattern::new(r"\.org$").unwrap();

        assert_eq!(search(&book, &looks_like_email).len(), 2);
        assert_eq!(search(&book, &pattern), ["somebody@some.org"]);
        assert_eq!(
            search(&book, &|addr: &str| addr.starts_with("sales")),
            ["sales@widgets.com"]
        );
    }

    #[test]
    fn absent_callback_is_detectable() {
        let mut callback: Option<Box<dyn Fn() -> i32>> = None;
        assert!(callback.is_none());

        callback = Some(Box::new(|| 2));
        match &callback {
            Some(callback) => assert_eq!(callback(), 2),
            None => panic!("callback was just wired up"),
        }
    }
}
