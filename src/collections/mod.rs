/*!
# Supporting data structures

The fixed-capacity collections backing the graph algorithms: a circular FIFO
queue for the breadth-first search, a binary min-heap for Dijkstra and Prim,
and a union-find for Kruskal's cycle detection. All of them report failures
through [`GraphError`](crate::GraphError) instead of growing or panicking.
*/

mod heap;
mod queue;
mod union_find;

pub use heap::*;
pub use queue::*;
pub use union_find::*;
