use nanorand::{Rng, WyRand};
use selsort::SelectionSort;

fn main() -> Result<(), selsort::SortError> {
    let mut inputs = Vec::new();
    inputs.extend_from_slice(&[55, 22, 73, 4, 89, 0, 100, 3]);

    selsort::sort_and_print(&mut inputs)?;
    println!();

    let mut rng = WyRand::new();
    let mut inputs: Vec<i64> = (0..16).map(|_| rng.generate_range(-50i64..=50)).collect();

    // Only the first half is sorted and printed
    inputs
        .selection_sort_builder()
        .with_len(8)
        .sort_and_print()?;
    println!();
    println!("{:?}", &inputs[..]);

    Ok(())
}
