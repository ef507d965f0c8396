//! A set of shingle strings stored in a fixed table of buckets with separate chaining.
//!
//! Buckets are selected by the [djb2](http://www.cse.yorku.ca/~oz/hash.html) string hash
//! and every chain is searched by full string equality, so hash collisions only cost time.
//! The bucket count never changes after construction; very large sets therefore degrade
//! into long chains (see [`ShingleSet::max_chain_len`]).
#![deny(missing_docs)]

pub mod errors;
mod set;

pub use errors::{Result, ShingleSetError};
pub use set::{djb2, intersection_size, union_size, Iter, ShingleSet, DEFAULT_NUM_BUCKETS};
