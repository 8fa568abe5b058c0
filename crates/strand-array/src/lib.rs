//! A value-semantic growable array on an exclusively owned buffer.
//!
//! # Architecture
//!
//! ```text
//! DynArray<T> (live prefix tracking, access contracts, mutators)
//! ├── RawBuf<T> (allocation lifecycle: acquire, move-realloc, release)
//! └── Iter / IterMut / IntoIter (bidirectional iteration over [0, len))
//! ```
//!
//! # Safety
//!
//! This is the only crate in the workspace that contains `unsafe` code.
//! It is confined to the buffer lifecycle and to reads/writes of the live
//! prefix, and every unsafe block carries a `// SAFETY:` comment tying it
//! to the container invariants.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod array;
pub mod iter;
mod raw;

pub use array::DynArray;
pub use iter::{IntoIter, Iter, IterMut};
