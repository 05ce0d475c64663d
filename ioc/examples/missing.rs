use tether_ioc::{global, resolve, Error};
use std::panic;

struct UnregisteredService;

fn main() {
  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(|| {
    let _service = resolve!(UnregisteredService);
  });

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the fallible `get()` method ---
  println!("\nNow, attempting to resolve using the fallible `get()` method...");

  match global().get::<UnregisteredService>(None) {
    Ok(_) => panic!("Should not have found the service!"),
    Err(Error::UnboundCapability { key }) => println!("Correctly received an error for {}", key),
    Err(other) => panic!("Unexpected error: {}", other),
  }
}
