use super::*;

/// Provides Dijkstra's single-source shortest-path tree.
pub trait ShortestPaths: WeightedAdjacencyList + GraphEdgeOrder + GraphEdgeEditing {
    /// Returns the shortest-path tree rooted at `start`.
    ///
    /// Distances are relaxed with the lazy-reinsertion pattern: an improved
    /// distance is pushed as a fresh heap entry, and the superseded entry is
    /// relaxed again without effect when it eventually surfaces. Each tree
    /// edge is reconstructed from the distance delta of its endpoints, so a
    /// bundle of parallel edges contributes its cheapest copy.
    ///
    /// Edge weights are assumed non-negative; negative weights are not
    /// detected and leave the result unspecified.
    ///
    /// Fails with [`GraphError::VertexOutOfBounds`] before any working
    /// storage is allocated if `start` is no vertex of the graph.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjArray::from_edges(3, [(0, 1, 4), (0, 2, 1), (1, 2, 2)]);
    ///
    /// // 0 reaches 1 cheaper through 2
    /// let tree = g.dijkstra_tree(0).unwrap();
    /// assert!(tree.has_edge(2, 1));
    /// ```
    fn dijkstra_tree(&self, start: Node) -> Result<Self> {
        self.require_vertex(start)?;

        let mut tree = Self::try_new(self.number_of_nodes())?;
        let mut dist = vec![Weight::MAX; self.len()];
        let mut prev = vec![INVALID_NODE; self.len()];
        let mut heap = BoundedMinHeap::with_capacity(relaxation_bound(self))?;

        dist[start as usize] = 0;
        heap.insert(start, 0)?;

        while !heap.is_empty() {
            let u = heap.extract_min()?;
            for nb in self.neighbors_of(u) {
                let candidate = dist[u as usize] + nb.weight;
                if candidate < dist[nb.node as usize] {
                    dist[nb.node as usize] = candidate;
                    prev[nb.node as usize] = u;
                    heap.insert(nb.node, candidate)?;
                }
            }
        }

        for v in self.vertices() {
            let p = prev[v as usize];
            if p != INVALID_NODE {
                tree.try_add_edge(p, v, dist[v as usize] - dist[p as usize])?;
            }
        }

        Ok(tree)
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList + GraphEdgeOrder + GraphEdgeEditing {}

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
    fn shortest_path_tree_edges() {
        // distances from 0: [0, 3, 1, 8, 11]
        let tree = demo_graph().dijkstra_tree(0).unwrap();

        assert_eq!(
            tree.edges(true).sorted().collect_vec(),
            vec![Edge(0, 2, 1), Edge(1, 2, 2), Edge(1, 3, 5), Edge(3, 4, 3)]
        );
    }

    #[test]
    fn tree_edges_reconstruct_original_weights() {
        let graph = demo_graph();
        let tree = graph.dijkstra_tree(0).unwrap();

        // every tree edge carries the weight of an input edge
        for Edge(u, v, w) in tree.edges(true) {
            assert!(graph
                .neighbors_of(u)
                .any(|nb| nb.node == v && nb.weight == w));
        }
    }

    #[test]
    fn parallel_edges_collapse_onto_cheapest() {
        let graph = AdjArray::from_edges(2, [(0, 1, 5), (0, 1, 2), (0, 1, 7)]);
        let tree = graph.dijkstra_tree(0).unwrap();

        assert_eq!(tree.edges(true).collect_vec(), vec![Edge(0, 1, 2)]);
    }

    #[test]
    fn unreachable_vertices_stay_edgeless() {
        let graph = AdjArray::from_edges(4, [(0, 1, 1), (2, 3, 1)]);
        let tree = graph.dijkstra_tree(0).unwrap();

        assert_eq!(tree.number_of_edges(), 1);
        assert_eq!(tree.degree_of(2), 0);
        assert_eq!(tree.degree_of(3), 0);
    }

    #[test]
    fn start_vertex_alone_yields_empty_tree() {
        let graph = AdjArray::try_new(1).unwrap();
        let tree = graph.dijkstra_tree(0).unwrap();

        assert_eq!(tree.number_of_nodes(), 1);
        assert!(tree.is_singleton());
    }

    #[test]
    fn rejects_invalid_start() {
        assert_eq!(
            demo_graph().dijkstra_tree(7).unwrap_err(),
            GraphError::VertexOutOfBounds { vertex: 7, bound: 5 }
        );
    }
}
