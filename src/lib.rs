/*!
`wgraphs` is a graph data structure & algorithms library designed for graphs that are
- **w**eighted : every edge carries a signed integer weight,
- **u**nlabelled and **u**nsigned : Nodes are numbered `0` to `n - 1`,
- **u**ndirected : inserting `{u, v}` makes `v` a neighbor of `u` and vice versa.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph,
fixed at construction time. For **edges**, we use a simple tuple-struct `Edge(Node, Node, Weight)`.

The adjacency lists are multisets: inserting the same endpoint pair twice records two parallel
edges, and a self-loop stores both of its directions in the same list. Every mutation keeps the
two stored directions of an edge in sync.

# Design

Graph functionality is split into small operation traits (see [`ops`]) that the representations
in [`repr`] implement. The algorithms in [`algo`] are in turn blanket-implemented on top of those
traits, so they are available as plain methods on every representation. Each algorithm consumes
its input read-only and returns a freshly built graph of the same vertex count.

Fallible operations return a [`GraphError`] instead of panicking; the panicking variants
(`new`, `add_edge`, ...) are thin convenience wrappers for code that has already validated its
inputs.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and the standard graph representations,
- [`algo`] includes the algorithm traits implemented on graphs itself: BFS/DFS spanning trees (`graph.bfs_tree(start)`), Dijkstra's shortest-path tree, and the Prim & Kruskal minimum spanning trees,
- [`collections`] includes the bounded queue, bounded min-heap, and union-find backing the algorithms,
- [`io`] includes handlers for writing a graph as its textual adjacency-list dump and reading it back.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs:

```
use wgraphs::{prelude::*, algo::*};

let g = AdjArray::from_edges(5, [(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8), (3, 4, 3)]);

let mst = g.prim_mst().unwrap();
assert_eq!(mst.number_of_edges(), 4);
println!("{mst}");
```
*/

pub mod algo;
pub mod collections;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes, edges, and errors, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
