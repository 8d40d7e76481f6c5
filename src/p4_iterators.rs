//! Pattern 4: Iteration Without Indexes
//! for loops, iterator chains, and fold over a list of items
//!
//! Run with: cargo run --bin p4_iterators

fn main() {
    println!("=== Three Ways to Walk a Vec ===\n");

    let values = vec![1, 2];

    // Index loop: works, but the index is noise
    let mut total = 0;
    for i in 0..values.len() {
        total += values[i];
    }
    println!("index loop total:    {}", total);

    // Explicit iterator
    let mut total = 0;
    let mut iter = values.iter();
    while let Some(value) = iter.next() {
        total += value;
    }
    println!("explicit iter total: {}", total);

    // for consumes the iterator for you
    let mut total = 0;
    for value in &values {
        total += value;
    }
    println!("for loop total:      {}", total);

    println!("\n=== Totalling Item Costs ===\n");

    let items = vec![Item::new(5), Item::new(10), Item::new(15)];
    println!("loop: total cost of {:?} = {}", items, total_cost(&items));

    let pricey = vec![Item::new(55), Item::new(510), Item::new(515)];
    println!("fold: total cost of {:?} = {}", pricey, fold_cost(&pricey));
    println!("sum:  same via map().sum() = {}", sum_cost(&pricey));

    println!("\n=== Transforming with map ===\n");

    let originals = vec![1, 2, 3, 50];
    let twice = doubled(&originals);
    println!("{:?} doubled -> {:?}", originals, twice);

    // In place, when allocating a new Vec is not wanted
    let mut in_place = originals.clone();
    for value in &mut in_place {
        *value *= 2;
    }
    println!("{:?} doubled in place -> {:?}", originals, in_place);

    println!("\n=== enumerate for the Occasional Index ===\n");

    for (position, item) in items.iter().enumerate() {
        println!("  item {} costs {}", position, item.cost());
    }

    println!("\n=== Key Points ===");
    println!("1. for item in &collection borrows; no index bookkeeping, no copies");
    println!("2. fold and sum express a total as data flow instead of mutation");
    println!("3. map().collect() builds the transformed Vec in one pass");
    println!("4. enumerate() brings the index back only where it earns its keep");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Item {
    cost: i64,
}

impl Item {
    fn new(cost: i64) -> Self {
        Item { cost }
    }

    fn cost(&self) -> i64 {
        self.cost
    }
}

fn total_cost(items: &[Item]) -> i64 {
    let mut total = 0;
    for item in items {
        total += item.cost();
    }
    total
}

fn fold_cost(items: &[Item]) -> i64 {
    items.iter().fold(0, |total, item| total + item.cost())
}

fn sum_cost(items: &[Item]) -> i64 {
    items.iter().map(Item::cost).sum()
}

fn doubled(values: &[i32]) -> Vec<i32> {
    values.iter().map(|value| value * 2).collect()
}
