//! Basic Sparse Tensor Example
//!
//! This example walks through the everyday operations:
//! - Building tensors from boxes, rows and nested sequences
//! - Rendering with holes and axis markers
//! - Slicing, stacking and reducing
//! - Working through the vector and matrix views
//!
//! Run with: cargo run --example basic_usage --features tracing

use sparten_core::index;
use sparten_core::tracing_support::{init_tracing, TracingConfig};
use sparten_sparse::{Matrix, Nested, Tensor, Vector};

fn main() -> anyhow::Result<()> {
    init_tracing(TracingConfig::default())?;

    println!("=== sparten: Basic Usage Example ===\n");

    // 1. A sparse tensor grows its bounding box as entries arrive
    println!("1. Populating a sparse 3-axis tensor...");
    let mut cube = Tensor::empty();
    cube.set(index![1, 1, 1], 100)?;
    println!("   dimensions: {:?}", cube.dimensions().as_slice());
    println!("   rendered:   \"{}\"", cube.to_string_or("."));
    cube.backfill(0);
    println!("   backfilled: \"{}\"\n", cube);

    // 2. Ragged rows leave holes
    println!("2. Building from ragged rows...");
    let ragged = Tensor::of(Nested::matrix(vec![vec![1, 2, 3], vec![4], vec![5, 6]]))?;
    println!("   rendered: \"{}\"", ragged.to_string_or("_"));
    let matrix = ragged.to_matrix()?;
    println!("   grid:\n{}\n", matrix.to_formatted_string());

    // 3. Structural operations
    println!("3. Transposing, slicing and stacking...");
    let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]]);
    let transposed = m.transpose();
    println!("   transpose: \"{}\"", *transposed);
    let second_row = m.slice_axis(1, 1)?;
    println!("   row 1:     \"{}\"", second_row);
    let stacked = Tensor::combine(&[second_row.clone(), second_row])?;
    println!("   stacked:   \"{}\"\n", stacked);

    // 4. Reductions
    println!("4. Reducing along axes...");
    let row_sums = m.reduce(0, |a, b| a + b, 0)?;
    let column_products = m.reduce(1, |a, b| a * b, 1)?;
    println!("   row sums:        \"{}\"", row_sums);
    println!("   column products: \"{}\"\n", column_products);

    // 5. Vector view
    println!("5. Using the vector view...");
    let mut queue = Vector::from(vec!["b", "c"]);
    queue.unshift("a")?;
    queue.push("d")?;
    println!("   queue: \"{}\"", *queue);
    let first = queue.shift();
    println!("   shift -> {:?}, now \"{}\"", first, queue.to_string_or("-"));

    Ok(())
}
