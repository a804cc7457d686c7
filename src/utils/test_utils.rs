use block_pseudorand::block_rand;
use rayon::prelude::*;
use std::fmt::Debug;
use std::ops::{Shl, ShlAssign, Shr, ShrAssign};

pub trait NumericTest<T>:
    Sized
    + Copy
    + Debug
    + PartialEq
    + Ord
    + Send
    + Sync
    + Shl<Output = T>
    + Shr<Output = T>
    + ShrAssign
    + ShlAssign
{
}

impl<T> NumericTest<T> for T where
    T: Sized
        + Copy
        + Debug
        + PartialEq
        + Ord
        + Send
        + Sync
        + Shl<Output = T>
        + Shr<Output = T>
        + ShrAssign
        + ShlAssign
{
}

pub fn gen_inputs<T>(n: usize, shift: T) -> Vec<T>
where
    T: NumericTest<T>,
{
    let mut inputs: Vec<T> = block_rand(n);

    inputs[0..(n / 2)].par_iter_mut().for_each(|v| *v >>= shift);
    inputs[(n / 2)..n].par_iter_mut().for_each(|v| *v <<= shift);

    inputs
}

pub fn gen_input_set<T>(shift: T) -> Vec<Vec<T>>
where
    T: NumericTest<T>,
{
    let n = 4_000;
    let half = n / 2;
    let inputs = gen_inputs(n, shift);

    // Middle values are used for the case where shift is provided
    let mut out = vec![
        vec![],
        inputs[..1].to_vec(),
        inputs[(half - 1)..(half + 1)].to_vec(),
        inputs[(half - 5)..(half + 5)].to_vec(),
        inputs[(half - 50)..(half + 50)].to_vec(),
        inputs[(half - 250)..(half + 250)].to_vec(),
        inputs[(half - 1_000)..(half + 1_000)].to_vec(),
        inputs,
    ];

    out.reverse();

    out
}

/// Runs `sort_fn` over `inputs` and checks the output is both ordered and a permutation of the
/// input, then that sorting again changes nothing.
pub fn validate_sort<T, F>(mut inputs: Vec<T>, sort_fn: F)
where
    T: NumericTest<T>,
    F: Fn(&mut [T]),
{
    let mut expected = inputs.clone();
    expected.sort_unstable();

    sort_fn(&mut inputs);
    assert_eq!(inputs, expected);

    sort_fn(&mut inputs);
    assert_eq!(inputs, expected);
}

pub fn sort_comparison_suite<T, F>(shift: T, sort_fn: F)
where
    F: Fn(&mut [T]),
    T: NumericTest<T>,
{
    let input_set = gen_input_set(shift);

    for s in input_set {
        validate_sort(s, &sort_fn);
    }
}

pub fn validate_u32_patterns<F>(sort_fn: F)
where
    F: Fn(&mut [u32]),
{
    let input_sets: Vec<Vec<u32>> = vec![
        vec![u32::MAX; 128],
        (0..128).collect(),
        (0..128).rev().collect(),
        block_rand(128),
        block_rand(4),
    ];

    for inputs in input_sets.iter() {
        validate_sort(inputs.clone(), &sort_fn);

        // Few distinct values
        validate_sort(
            inputs.iter().map(|v| *v & 0b11).collect::<Vec<u32>>(),
            &sort_fn,
        );
        validate_sort(
            inputs
                .iter()
                .map(|v| *v & 0b10000000000000000000000000000000)
                .collect::<Vec<u32>>(),
            &sort_fn,
        );
        validate_sort(
            inputs
                .iter()
                .map(|v| *v & 0b10101010101010101010101010101010)
                .collect::<Vec<u32>>(),
            &sort_fn,
        );
    }
}
