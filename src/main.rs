// This binary crate is intentionally minimal.
// All matrix and network logic lives in the library (src/lib.rs and its modules).
// Run the demo with:
//   cargo run --example xor
fn main() {
    println!("magnetite-nn: a tiny neural network library trained by finite differences.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}
