use std::fmt::{self, Display};

use crate::{ops::*, *};

use super::*;

/// An undirected weighted multigraph over a fixed vertex set.
///
/// Every inserted edge is stored in both endpoints' neighborhoods; a
/// self-loop stores both of its directions in the same neighborhood. The
/// vertex count is fixed at construction.
#[derive(Clone, Debug)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using a growable Adjacency-Array per vertex
pub type AdjArray = UndirectedGraph<ArrNeighborhood>;

/// Representation using inline storage for small neighborhoods
pub type SparseAdjArray = UndirectedGraph<SparseNeighborhood>;

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> WeightedAdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Neighbor> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }

    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight> {
        self.nbs[u as usize].weight_to(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn try_new(n: NumNodes) -> Result<Self> {
        if n == 0 {
            return Err(GraphError::ZeroCapacity);
        }
        Ok(Self {
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        })
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()> {
        self.require_vertex(u)?;
        self.require_vertex(v)?;

        self.nbs[u as usize].add_neighbor(Neighbor { node: v, weight });
        self.nbs[v as usize].add_neighbor(Neighbor { node: u, weight });
        self.num_edges += 1;
        Ok(())
    }

    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<bool> {
        self.require_vertex(u)?;
        self.require_vertex(v)?;

        // Remove the first copy on u's side; the mirrored entry on v's side
        // is matched by weight so parallel edges stay symmetric.
        let Some(weight) = self.nbs[u as usize].remove_neighbor(v) else {
            return Ok(false);
        };
        let removed = self.nbs[v as usize].remove_neighbor_with_weight(u, weight);
        debug_assert!(removed);
        self.num_edges -= 1;
        Ok(true)
    }
}

impl<Nbs: Neighborhood> Display for UndirectedGraph<Nbs> {
    /// Renders the adjacency lists, one `Vertex {i}:` line per vertex
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices() {
            write!(f, "Vertex {u}:")?;
            for nb in self.neighbors_of(u) {
                write!(f, " -> ({}, weight: {})", nb.node, nb.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

crate::testing::test_graph_ops!(
    test_adj_array,
    AdjArray,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);

crate::testing::test_graph_ops!(
    test_sparse_adj_array,
    SparseAdjArray,
    (GraphNew, AdjacencyList, GraphEdgeEditing)
);
