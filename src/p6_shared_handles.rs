//! Pattern 6: Shared Ownership with Rc
//! Counted handles to one window, and a shared read-only address book
//!
//! Run with: cargo run --bin p6_shared_handles

use address_book::{contains, AddressBook};
use std::rc::Rc;

struct Window {
    width: u32,
    height: u32,
}

impl Window {
    fn new(width: u32, height: u32) -> Self {
        Window { width, height }
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        println!("  [window {}x{} closed]", self.width, self.height);
    }
}

fn main() {
    println!("=== One Window, Many Handles ===\n");

    let window = Rc::new(Window::new(600, 400));
    println!("dimensions: {:?}", window.dimensions());
    println!("handles after creation: {}", Rc::strong_count(&window));

    let second = Rc::clone(&window);
    println!("handles after cloning:  {}", Rc::strong_count(&window));
    println!("second sees the same:   {}", Rc::strong_count(&second));

    drop(window);
    println!("handles after drop:     {}", Rc::strong_count(&second));

    println!("\n=== Handles Into Functions ===\n");

    let shared = Rc::new(Window::new(800, 600));
    println!("inside hold():   {} handles", hold(Rc::clone(&shared)));
    println!("back outside:    {} handles", Rc::strong_count(&shared));
    println!("inside peek():   {} handles", peek(&shared));

    println!("\n=== A Shared Address Book ===\n");

    let mut book = AddressBook::new();
    book.add("sales@widgets.com");
    book.add("somebody@some.org");

    // Sharing replaces ownership questions: both handles read, nobody copies.
    let book = Rc::new(book);
    let for_reports = Rc::clone(&book);

    println!("ui view:      {:?}", book.find_matching(contains(".org")));
    println!("reports view: {:?}", for_reports.find_matching(contains(".com")));
    println!("book handles: {}", Rc::strong_count(&book));

    println!("\n=== The Last Handle Cleans Up ===\n");

    {
        let inner = Rc::new(Window::new(320, 200));
        let _held = Rc::clone(&inner);
        println!("two handles in scope: {}", Rc::strong_count(&inner));
    } // both handles gone; the window drops here
    println!("scope closed");

    println!("\n=== Key Points ===");
    println!("1. Rc::clone copies the handle, never the window behind it");
    println!("2. strong_count rises with every clone and falls with every drop");
    println!("3. Rc hands out shared reads; mutation needs interior mutability");
    println!("4. The value drops exactly once, when the last handle goes");
}

// Takes its own handle; the count inside includes it.
fn hold(window: Rc<Window>) -> usize {
    Rc::strong_count(&window)
}

// Borrows an existing handle; the count is unchanged.
fn peek(window: &Rc<Window>) -> usize {
    Rc::strong_count(window)
}
