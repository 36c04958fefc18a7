//! Pipeline Example
//!
//! Demonstrates OptionalBox combinators on a small config-parsing flow.
//! Shows practical patterns including:
//! - Wrapping values that may be missing
//! - Filtering and mapping without presence checks
//! - Reacting when a present value is rejected or maps to nothing
//! - Falling back eagerly or lazily
//! - Iterating a box as a zero-or-one sequence

use std::cell::RefCell;

use optional_box::{AbsentError, OptionalBox};

// ==================== Basic Combinators ====================

/// Example 1: Wrapping, mapping and falling back
fn example_basic() {
    println!("\n=== Example 1: Basic Combinators ===");

    let doubled = OptionalBox::of(20_071_226).map(|x| x * 2);
    println!("of(20071226).map(x * 2): {}", doubled);

    let missing: OptionalBox<i32> = OptionalBox::new(None);
    println!("new(None): {}", missing);
    println!("  get_or(0): {}", missing.get_or(0));
    println!("  get_or_compute: {}", missing.get_or_compute(|| -1));
}

// ==================== Other-Branch Callbacks ====================

/// Example 2: Parsing ports and recording every value that was lost
fn example_port_pipeline() {
    println!("\n=== Example 2: Port Pipeline ===");

    let rejected = RefCell::new(Vec::new());
    let unparsable = RefCell::new(Vec::new());

    let parse_port = |raw: Option<&'static str>| -> u16 {
        OptionalBox::new(raw)
            .filter_or_else(|s| !s.trim().is_empty(), |s| rejected.borrow_mut().push(s))
            .map_partial_or_else(|s| s.trim().parse::<u16>().ok(), |s| {
                unparsable.borrow_mut().push(s)
            })
            .for_each(|port| println!("  parsed port {}", port))
            .get_or(8080)
    };

    for raw in [Some("443"), None, Some("  "), Some("http"), Some("8443")] {
        println!("{:?} -> {}", raw, parse_port(raw));
    }

    println!("\nRejected (blank): {:?}", rejected.borrow());
    println!("Unparsable: {:?}", unparsable.borrow());
}

// ==================== Errors ====================

/// Example 3: Treating absence as an error
fn example_require() -> Result<(), AbsentError> {
    println!("\n=== Example 3: Require ===");

    let host = OptionalBox::of("localhost").require_with("host")?;
    println!("host: {}", host);

    match OptionalBox::<u16>::absent().require_with("port") {
        Ok(port) => println!("port: {}", port),
        Err(e) => println!("error: {}", e),
    }

    Ok(())
}

// ==================== Iteration ====================

/// Example 4: A box as a zero-or-one sequence
fn example_iteration() {
    println!("\n=== Example 4: Iteration ===");

    let boxes = [OptionalBox::of(1), OptionalBox::absent(), OptionalBox::of(3)];
    let values: Vec<i32> = boxes.iter().flat_map(|b| b.iter().copied()).collect();
    println!("present values: {:?}", values);
}

// ==================== Main ====================

fn main() -> Result<(), AbsentError> {
    println!("OptionalBox Examples");
    println!("====================");

    example_basic();
    example_port_pipeline();
    example_require()?;
    example_iteration();

    println!("\n=== All examples completed! ===");
    Ok(())
}
