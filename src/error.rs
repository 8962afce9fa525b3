/*!
# Errors

All fallible operations of the graph container, the bounded collections, and
the algorithms report through a single [`GraphError`] enum. A failing
operation never leaves a partial mutation behind: validation happens before
any state is touched.
*/

use thiserror::Error;

use crate::{Node, NumNodes};

/// The error conditions raised by this crate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A constructor was handed a zero capacity or vertex count
    #[error("capacity must be positive")]
    ZeroCapacity,

    /// A vertex or element index lies outside its valid domain `[0, bound)`
    #[error("vertex {vertex} out of bounds for size {bound}")]
    VertexOutOfBounds { vertex: Node, bound: NumNodes },

    /// An insertion hit the fixed capacity of a bounded collection
    #[error("collection is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// An extraction was attempted on an empty collection
    #[error("collection is empty")]
    EmptyCollection,
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, GraphError>;
