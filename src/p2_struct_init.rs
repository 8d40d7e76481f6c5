//! Pattern 2: Struct and Collection Initialization
//! One literal syntax from scalars to nested structs
//!
//! Run with: cargo run --bin p2_struct_init

fn main() {
    println!("=== Scalars and Strings ===\n");

    let count = 42;
    let ratio = 12.2;
    let name = String::from("Jeff");
    println!("count = {}, ratio = {}, name = {}", count, ratio, name);

    println!("\n=== Arrays and Vectors ===\n");

    let names = vec!["alpha", "beta", "gamma"];
    let fibs = [1, 1, 2, 3, 5, 8];
    println!("names = {:?}", names);
    println!("fibs  = {:?}", fibs);

    // Repeat-element form
    let zeroes = [0u8; 4];
    println!("zeroes = {:?}", zeroes);

    println!("\n=== Struct Literals ===\n");

    let contact = Contact {
        email: String::from("jeff@example.org"),
        display_name: String::from("Jeff"),
        starred: true,
    };
    println!("full literal:     {:?}", contact);

    // Field init shorthand when locals already carry the field names
    let email = String::from("mara@example.com");
    let display_name = String::from("Mara");
    let shorthand = Contact {
        email,
        display_name,
        starred: false,
    };
    println!("shorthand:        {:?}", shorthand);

    println!("\n=== Filling In the Rest ===\n");

    // Update syntax takes the remaining fields from another value
    let starred_copy = Contact {
        starred: true,
        ..shorthand.clone()
    };
    println!("update syntax:    {:?}", starred_copy);

    let blank = Contact::default();
    println!("Default::default: {:?}", blank);

    println!("\n=== Nested Initialization ===\n");

    let roster = Roster {
        label: String::from("on call"),
        contacts: vec![contact, shorthand, starred_copy],
    };
    println!("roster '{}' with {} contacts:", roster.label, roster.contacts.len());
    for contact in &roster.contacts {
        println!("  {:?}", contact);
    }

    println!("\n=== Key Points ===");
    println!("1. Struct literals name every field; the compiler rejects missing ones");
    println!("2. Shorthand drops the repetition when locals match field names");
    println!("3. ..other fills the remaining fields from an existing value");
    println!("4. #[derive(Default)] gives a zero/empty starting point for free");
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Contact {
    email: String,
    display_name: String,
    starred: bool,
}

#[derive(Debug, Default)]
struct Roster {
    label: String,
    contacts: Vec<Contact>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_fields_land_where_written() {
        let contact = Contact {
            email: String::from("a@x.org"),
            display_name: String::from("A"),
            starred: true,
        };
        assert_eq!(contact.email, "a@x.org");
        assert_eq!(contact.display_name, "A");
        assert!(contact.starred);
    }

    #[test]
    fn update_syntax_keeps_the_untouched_fields() {
        let base = Contact {
            email: String::from("a@x.org"),
            display_name: String::from("A"),
            starred: false,
        };
        let starred = Contact {
            starred: true,
            ..base.clone()
        };
        assert_eq!(starred.email, base.email);
        assert_eq!(starred.display_name, base.display_name);
        assert!(starred.starred);
    }

    #[test]
    fn default_is_empty_and_unstarred() {
        let blank = Contact::default();
        assert_eq!(blank, Contact {
            email: String::new(),
            display_name: String::new(),
            starred: false,
        });
    }

    #[test]
    fn collection_literals_keep_order() {
        let names = vec!["alpha", "beta", "gamma"];
        let fibs = [1, 1, 2, 3, 5, 8];
        assert_eq!(names, ["alpha", "beta", "gamma"]);
        assert_eq!(fibs.len(), 6);
        assert_eq!(fibs[4] + fibs[5], 13);
    }
}
