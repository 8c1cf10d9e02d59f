// This binary crate is intentionally minimal.
// All dataset and model logic lives in the library (src/lib.rs and its modules).
// Run the pipeline with:
//   cargo run --example train -- <sample-dir> [target-index]
fn main() {
    println!("hysteresis-nn: hysteresis-curve datasets and a small dense regressor.");
    println!("Run `cargo run --example train -- <sample-dir>` for the full pipeline.");
}
