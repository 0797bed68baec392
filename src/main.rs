// This binary crate is intentionally minimal.
// All trainer logic lives in the library (src/lib.rs and its modules).
// Run demos with:
//   cargo run --example separable
fn main() {
    println!("ember-mlp: a configurable feed-forward MLP trainer in Rust.");
    println!("Run `cargo run --example separable` to see the decision-region demo.");
}
