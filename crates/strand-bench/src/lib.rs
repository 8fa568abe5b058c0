//! Benchmark profiles and utilities for the strand container workspace.
//!
//! Provides deterministic workload builders shared by the criterion
//! benches so that growth, shifting, and copy costs are measured against
//! identical inputs.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strand_array::DynArray;
use strand_core::InitStrategy;

/// Build an array of `n` sequential values by repeated back-append,
/// exercising the doubling growth path from an empty buffer.
pub fn grown_sequential(n: usize) -> DynArray<u64> {
    let mut arr = DynArray::new();
    for i in 0..n {
        arr.push_back(i as u64).expect("benchmark allocation failed");
    }
    arr
}

/// Build an array of `n` sequential values with the buffer reserved up
/// front, so no benchmark iteration pays for reallocation.
pub fn reserved_sequential(n: usize) -> DynArray<u64> {
    let mut arr = DynArray::with_capacity(n).expect("benchmark allocation failed");
    for i in 0..n {
        arr.push_back(i as u64).expect("capacity was reserved");
    }
    arr
}

/// Build an `n`-element zero-filled array via the filling constructor.
pub fn zero_filled(n: usize) -> DynArray<u64> {
    DynArray::with_len(n, InitStrategy::zeroed()).expect("benchmark allocation failed")
}
