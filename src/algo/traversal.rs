/*!
Spanning-tree traversals.

Both searches consume the input graph read-only and materialize their
discovery edges into a fresh graph of the same vertex count: every first
transition into an undiscovered vertex contributes the connecting edge with
its original weight. Vertices the search never reaches keep an empty
neighborhood in the result.
*/

use super::*;

/// Provides tree-building breadth- and depth-first searches.
pub trait Traversal: WeightedAdjacencyList + GraphEdgeEditing {
    /// Returns the BFS discovery tree rooted at `start`.
    ///
    /// Vertices are marked when they enter the queue, so every reachable
    /// vertex receives exactly one incoming tree edge.
    ///
    /// Fails with [`GraphError::VertexOutOfBounds`] before any working
    /// storage is allocated if `start` is no vertex of the graph.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1, 4), (1, 2, 2)]);
    ///
    /// let tree = g.bfs_tree(0).unwrap();
    /// assert_eq!(tree.number_of_edges(), 2);
    /// ```
    fn bfs_tree(&self, start: Node) -> Result<Self> {
        self.require_vertex(start)?;

        let mut tree = Self::try_new(self.number_of_nodes())?;
        let mut visited = self.vertex_bitset_unset();
        let mut queue = BoundedQueue::with_capacity(self.len())?;

        visited.set_bit(start);
        queue.enqueue(start)?;

        while !queue.is_empty() {
            let u = queue.dequeue()?;
            for nb in self.neighbors_of(u) {
                if !visited.set_bit(nb.node) {
                    tree.try_add_edge(u, nb.node, nb.weight)?;
                    queue.enqueue(nb.node)?;
                }
            }
        }

        Ok(tree)
    }

    /// Returns the DFS discovery tree rooted at `start`.
    ///
    /// The exploration recurses in neighborhood order and marks vertices on
    /// entry. On disconnected graphs the result spans `start`'s component
    /// only, all other vertices staying edge-less — the same contract as
    /// [`Traversal::bfs_tree`].
    ///
    /// Fails with [`GraphError::VertexOutOfBounds`] before any working
    /// storage is allocated if `start` is no vertex of the graph.
    fn dfs_tree(&self, start: Node) -> Result<Self> {
        self.require_vertex(start)?;

        let mut tree = Self::try_new(self.number_of_nodes())?;
        let mut visited = self.vertex_bitset_unset();
        dfs_visit(self, start, &mut visited, &mut tree)?;

        Ok(tree)
    }
}

impl<G> Traversal for G where G: WeightedAdjacencyList + GraphEdgeEditing {}

/// Recursive expansion step: `u` is marked on entry, every transition into
/// an unmarked neighbor contributes a tree edge and recurses.
fn dfs_visit<G>(graph: &G, u: Node, visited: &mut NodeBitSet, tree: &mut G) -> Result<()>
where
    G: WeightedAdjacencyList + GraphEdgeEditing,
{
    visited.set_bit(u);
    for nb in graph.neighbors_of(u) {
        if !visited.get_bit(nb.node) {
            tree.try_add_edge(u, nb.node, nb.weight)?;
            dfs_visit(graph, nb.node, visited, tree)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    fn demo_graph() -> AdjArray {
        AdjArray::from_edges(
            5,
            [(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8), (3, 4, 3)],
        )
    }

    #[test]
    fn bfs_tree_edges() {
        let tree = demo_graph().bfs_tree(0).unwrap();

        assert_eq!(tree.number_of_nodes(), 5);
        assert_eq!(
            tree.edges(true).sorted().collect_vec(),
            vec![Edge(0, 1, 4), Edge(0, 2, 1), Edge(1, 3, 5), Edge(3, 4, 3)]
        );
    }

    #[test]
    fn bfs_tree_from_inner_vertex() {
        let tree = demo_graph().bfs_tree(4).unwrap();

        // one incoming edge per reachable vertex
        assert_eq!(tree.number_of_edges(), 4);
        assert!(tree.has_edge(4, 3));
    }

    #[test]
    fn bfs_skips_unreachable_vertices() {
        //  0 - 1    2 - 3
        let graph = AdjArray::from_edges(4, [(0, 1, 1), (2, 3, 1)]);
        let tree = graph.bfs_tree(0).unwrap();

        assert_eq!(tree.number_of_edges(), 1);
        assert_eq!(tree.degree_of(2), 0);
        assert_eq!(tree.degree_of(3), 0);
    }

    #[test]
    fn bfs_ignores_parallel_edges_and_loops() {
        let graph = AdjArray::from_edges(3, [(0, 0, 9), (0, 1, 4), (0, 1, 2), (1, 2, 1)]);
        let tree = graph.bfs_tree(0).unwrap();

        // discovery keeps the first stored copy, loops never discover
        assert_eq!(
            tree.edges(true).sorted().collect_vec(),
            vec![Edge(0, 1, 4), Edge(1, 2, 1)]
        );
    }

    #[test]
    fn bfs_rejects_invalid_start() {
        assert_eq!(
            demo_graph().bfs_tree(9).unwrap_err(),
            GraphError::VertexOutOfBounds { vertex: 9, bound: 5 }
        );
    }

    #[test]
    fn dfs_tree_edges() {
        let tree = demo_graph().dfs_tree(0).unwrap();

        // the walk dives 0 -> 1 -> 2 -> 3 -> 4 along the insertion order
        assert_eq!(
            tree.edges(true).sorted().collect_vec(),
            vec![Edge(0, 1, 4), Edge(1, 2, 2), Edge(2, 3, 8), Edge(3, 4, 3)]
        );
    }

    #[test]
    fn dfs_spans_component_of_start() {
        let graph = AdjArray::from_edges(6, [(0, 1, 1), (1, 2, 1), (2, 0, 1), (3, 4, 1)]);

        let tree = graph.dfs_tree(0).unwrap();
        assert_eq!(tree.number_of_edges(), 2);
        assert_eq!(tree.degree_of(3), 0);
        assert_eq!(tree.degree_of(4), 0);
        assert_eq!(tree.degree_of(5), 0);

        let tree = graph.dfs_tree(4).unwrap();
        assert_eq!(
            tree.edges(true).collect_vec(),
            vec![Edge(3, 4, 1).normalized()]
        );
    }

    #[test]
    fn dfs_rejects_invalid_start() {
        assert_eq!(
            demo_graph().dfs_tree(5).unwrap_err(),
            GraphError::VertexOutOfBounds { vertex: 5, bound: 5 }
        );
    }
}
