use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    /// The range does not borrow self and may be used where additional
    /// references of self are needed.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns an empty bitset with one entry per vertex
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Checks a vertex index against the graph's domain
    fn require_vertex(&self, u: Node) -> Result<()> {
        if u < self.number_of_nodes() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex: u,
                bound: self.number_of_nodes(),
            })
        }
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of undirected edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Traits pertaining getters for weighted neighborhoods & edges
pub trait WeightedAdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighborhood of a given vertex.
    /// Parallel edges yield one entry each; the order is the (deterministic)
    /// insertion order of the underlying storage.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Neighbor> + '_;

    /// Returns the number of adjacency entries of `u`, parallel edges included.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an owned snapshot of the neighborhood of a given vertex.
    /// Later mutations of the graph leave the snapshot untouched.
    fn try_neighbors_of(&self, u: Node) -> Result<Vec<Neighbor>> {
        self.require_vertex(u)?;
        Ok(self.neighbors_of(u).collect())
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |nb| Edge(u, nb.node, nb.weight))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph.
    ///
    /// The adjacency stores both directions of every edge; with
    /// `only_normalized`, each undirected edge is yielded exactly once.
    /// Self-loops are stored (and thus yielded) twice per inserted loop.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }
}

/// Trait to test existence of certain edges in a graph.
pub trait AdjacencyTest: WeightedAdjacencyList {
    /// Returns *true* if at least one edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns the weight of the first stored (u,v) entry, if any.
    /// ** Panics if `u >= n` **
    fn edge_weight(&self, u: Node, v: Node) -> Option<Weight>;
}

/// Trait for creating a new empty graph
pub trait GraphNew: Sized {
    /// Creates an empty graph with `n` singleton vertices.
    /// The vertex count is fixed for the lifetime of the graph.
    fn try_new(n: NumNodes) -> Result<Self>;

    /// Creates an empty graph with `n` singleton vertices.
    /// ** Panics if `n == 0` **
    fn new(n: NumNodes) -> Self {
        Self::try_new(n).expect("vertex count must be positive")
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphNew {
    /// Inserts the undirected edge {u, v} with the given weight into both
    /// endpoints' adjacencies. Parallel edges accumulate: repeated calls
    /// with the same endpoints insert new entries rather than updating
    /// weights. Both endpoints are validated before either side is touched.
    fn try_add_edge(&mut self, u: Node, v: Node, weight: Weight) -> Result<()>;

    /// Inserts the undirected edge {u, v} with the given weight.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, weight: Weight) {
        self.try_add_edge(u, v, weight)
            .expect("edge endpoints must be in bounds")
    }

    /// Adds all edges in the collection.
    /// ** Panics if any endpoint is out of bounds **
    fn add_edges(&mut self, edges: impl IntoIterator<Item = impl Into<Edge>>) {
        for Edge(u, v, w) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v, w);
        }
    }

    /// Removes at most one stored copy of the undirected edge {u, v} from
    /// both endpoints' adjacencies. Returns `Ok(true)` exactly if a copy was
    /// removed; an absent edge is a silent no-op.
    fn try_remove_edge(&mut self, u: Node, v: Node) -> Result<bool>;

    /// Removes one copy of the undirected edge {u, v}.
    /// Returns *true* exactly if a copy was removed.
    /// ** Panics if `u >= n || v >= n` **
    fn remove_edge(&mut self, u: Node, v: Node) -> bool {
        self.try_remove_edge(u, v)
            .expect("edge endpoints must be in bounds")
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: Sized {
    /// Create a graph from a number of nodes and a collection of edges.
    /// Plain `(u, v)` pairs are accepted as unit-weight edges.
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }
}
