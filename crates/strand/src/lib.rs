//! Strand: a value-semantic growable array on an exclusively owned buffer.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the strand sub-crates. For most users, adding `strand` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strand::prelude::*;
//!
//! // Three zero-filled slots, then grow from the back.
//! let mut arr: DynArray<u32> = DynArray::with_len(3, InitStrategy::zeroed())?;
//! arr.push_back(5)?;
//! assert_eq!(arr.len(), 4);
//! assert_eq!(*arr.back()?, 5);
//!
//! // Front removal shifts the remainder down.
//! assert_eq!(arr.pop_front()?, 0);
//! assert_eq!(arr.as_slice(), &[0, 0, 5]);
//!
//! // Bidirectional iteration over the live range.
//! let doubled: Vec<u32> = arr.iter().map(|v| v * 2).collect();
//! assert_eq!(doubled, vec![0, 0, 10]);
//! # Ok::<(), strand::types::ArrayError>(())
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `strand-array` | [`array::DynArray`] and its iterators |
//! | [`types`] | `strand-core` | Error types and [`types::InitStrategy`] |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The container and its iterators (`strand-array`).
pub use strand_array as array;

/// Error types and initialization strategies (`strand-core`).
pub use strand_core as types;

/// Common imports for typical strand usage.
///
/// ```rust
/// use strand::prelude::*;
/// ```
pub mod prelude {
    // Container and iterators
    pub use strand_array::{DynArray, IntoIter, Iter, IterMut};

    // Errors and construction
    pub use strand_core::{AllocError, ArrayError, InitStrategy};
}
