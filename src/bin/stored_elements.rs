//! Dense-matrix smoke test
//!
//! Queries the library version, creates a host executor, allocates a 3x4
//! dense f32 matrix on it, and prints the number of stored elements.
//!
//! Run with:
//! ```sh
//! cargo run --bin stored-elements
//! ```

use densor::prelude::*;

fn main() -> Result<()> {
    // Version goes to stderr so stdout stays a single line.
    eprintln!("densor {}", densor::version());

    let exec = HostExecutor::new();
    let size = Dim2::new(3, 4);
    let mat = Dense::<HostExecutor>::try_new(size, DType::F32, &exec)?;

    println!("Number of stored elements: {}", mat.num_stored_elements());
    Ok(())
}
