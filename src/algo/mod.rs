/*!
# Graph Algorithms

The five classic routines this crate ships: breadth- and depth-first
spanning trees, Dijkstra's shortest-path tree, and the two minimum spanning
tree constructions (Prim, Kruskal). All of them are provided as traits that
are blanket-implemented for every graph representation, consume their input
read-only, and build a fresh graph of the same vertex count:

```
use wgraphs::{prelude::*, algo::*};

let g = AdjArray::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 5)]);

let mst = g.kruskal_mst().unwrap();
assert_eq!(mst.number_of_edges(), 2);
```
*/

mod mst;
mod shortest_path;
mod traversal;

use crate::{collections::*, prelude::*};

pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;

/// Upper bound on live heap entries under relax-by-reinsertion: one per
/// directed adjacency entry plus the seed. Every successful relaxation
/// strictly improves its target's priority, so each entry can trigger at
/// most one insertion.
pub(crate) fn relaxation_bound<G: GraphEdgeOrder>(graph: &G) -> usize {
    2 * graph.number_of_edges() as usize + 1
}
