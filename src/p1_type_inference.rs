//! Pattern 1: Type Inference and Deduced Return Types
//! Builders whose product the caller never has to name
//!
//! Run with: cargo run --bin p1_type_inference

fn main() {
    println!("=== Inference on Bindings ===\n");

    let x = 3;
    let y = x; // y takes x's type, nothing to spell out
    println!("x = {}, y = {}", x, y);

    // Annotate only where the expression leaves the type open, like collect()
    let doubled: Vec<i32> = [1, 2, 3].iter().map(|n| n * 2).collect();
    let tripled = [1, 2, 3].iter().map(|n| n * 3).collect::<Vec<i32>>();
    println!("doubled = {:?}, tripled = {:?}", doubled, tripled);

    println!("\n=== A Builder Without Naming the Product ===\n");

    let builder = WidgetBuilder::new(600, 400);

    // Spelled out, the old way:
    let spelled: Widget = builder.build();
    println!("spelled:  {:?}", spelled);

    // Inferred, the binding takes whatever build() returns:
    let inferred = builder.build();
    println!("inferred: {:?}", inferred);

    // Generic code gets the same freedom through the associated type.
    let measured = build_and_measure(&builder);
    println!("generic:  {:?}", measured);

    println!("\n=== Deduced Categories ===\n");

    let people = [
        Person::new("ada", 36),
        Person::new("finn", 9),
        Person::new("opa", 71),
    ];
    for person in &people {
        println!("{:>4} ({:2}) -> {:?}", person.name(), person.age(), person.kind());
    }

    println!("\n=== Returning a Type Only the Compiler Knows ===\n");

    let add_ten = make_adder(10);
    println!("add_ten(5) = {}", add_ten(5));

    println!("\n=== Key Points ===");
    println!("1. let bindings take the type of their initializer");
    println!("2. Annotate or turbofish only where the expression is underdetermined");
    println!("3. An associated Output type lets generic code return what a builder makes");
    println!("4. impl Trait returns a concrete type the caller never writes down");
}

/// What a builder makes, expressed as an associated type so generic
/// callers can handle the product without naming it.
trait Build {
    type Output;
    fn build(&self) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq)]
struct Widget {
    width: u32,
    height: u32,
}

struct WidgetBuilder {
    width: u32,
    height: u32,
}

impl WidgetBuilder {
    fn new(width: u32, height: u32) -> Self {
        WidgetBuilder { width, height }
    }
}

impl Build for WidgetBuilder {
    type Output = Widget;

    fn build(&self) -> Widget {
        Widget {
            width: self.width,
            height: self.height,
        }
    }
}

// The return type follows the builder; callers stay generic end to end.
fn build_and_measure<B: Build>(builder: &B) -> B::Output {
    builder.build()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PersonKind {
    Child,
    Adult,
    Senior,
}

struct Person {
    name: String,
    age: u32,
}

impl Person {
    fn new(name: impl Into<String>, age: u32) -> Self {
        Person {
            name: name.into(),
            age,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> u32 {
        self.age
    }

    fn kind(&self) -> PersonKind {
        match self.age {
            0..=17 => PersonKind::Child,
            18..=64 => PersonKind::Adult,
            _ => PersonKind::Senior,
        }
    }
}

fn make_adder(offset: i32) -> impl Fn(i32) -> i32 {
    move |x| x + offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_produces_the_configured_widget() {
        let widget = WidgetBuilder::new(600, 400).build();
        assert_eq!(
            widget,
            Widget {
                width: 600,
                height: 400
            }
        );
    }

    #[test]
    fn generic_callers_receive_the_associated_output() {
        let builder = WidgetBuilder::new(2, 3);
        assert_eq!(build_and_measure(&builder), builder.build());
    }

    #[test]
    fn kind_follows_age_boundaries() {
        assert_eq!(Person::new("a", 17).kind(), PersonKind::Child);
        assert_eq!(Person::new("b", 18).kind(), PersonKind::Adult);
        assert_eq!(Person::new("c", 64).kind(), PersonKind::Adult);
        assert_eq!(Person::new("d", 65).kind(), PersonKind::Senior);
    }

    #[test]
    fn adder_keeps_its_captured_offset() {
        let add_ten = make_adder(10);
        assert_eq!(add_ten(5), 15);
        assert_eq!(add_ten(-10), 0);
    }
}
