use itertools::Itertools;

use super::*;

/// Provides minimum-spanning-tree construction.
///
/// On disconnected inputs [`MinimumSpanningTree::kruskal_mst`] yields the
/// minimum spanning forest, whereas [`MinimumSpanningTree::prim_mst`] only
/// spans the component of vertex 0.
pub trait MinimumSpanningTree: WeightedAdjacencyList + GraphEdgeOrder + GraphEdgeEditing {
    /// Returns the minimum spanning tree grown from vertex 0 (Prim).
    ///
    /// The growth frontier lives in a lazy-deletion heap: a cheaper
    /// connection is reinserted rather than decreased in place, and entries
    /// for already-settled vertices are consumed without effect. The start
    /// vertex is fixed at 0.
    fn prim_mst(&self) -> Result<Self> {
        let mut tree = Self::try_new(self.number_of_nodes())?;
        let mut in_tree = self.vertex_bitset_unset();
        let mut key = vec![Weight::MAX; self.len()];
        let mut parent = vec![INVALID_NODE; self.len()];
        let mut heap = BoundedMinHeap::with_capacity(relaxation_bound(self))?;

        key[0] = 0;
        heap.insert(0, 0)?;

        while !heap.is_empty() {
            let u = heap.extract_min()?;
            in_tree.set_bit(u);

            for nb in self.neighbors_of(u) {
                if !in_tree.get_bit(nb.node) && nb.weight < key[nb.node as usize] {
                    key[nb.node as usize] = nb.weight;
                    parent[nb.node as usize] = u;
                    heap.insert(nb.node, nb.weight)?;
                }
            }
        }

        for v in 1..self.number_of_nodes() {
            let p = parent[v as usize];
            if p != INVALID_NODE {
                tree.try_add_edge(p, v, key[v as usize])?;
            }
        }

        Ok(tree)
    }

    /// Returns the minimum spanning tree built by Kruskal's edge scan.
    ///
    /// Every undirected edge is collected exactly once through the
    /// normalized-edge iterator, sorted ascending by weight (ties in
    /// unspecified order), and accepted whenever its endpoints are not yet
    /// connected. The scan always considers every edge rather than stopping
    /// at `n - 1` acceptances.
    fn kruskal_mst(&self) -> Result<Self> {
        let mut tree = Self::try_new(self.number_of_nodes())?;
        let mut forest = UnionFind::new(self.number_of_nodes())?;

        let mut edges = self.edges(true).filter(|e| !e.is_loop()).collect_vec();
        edges.sort_by_key(|e| e.weight());

        for Edge(u, v, w) in edges {
            if forest.find(u)? != forest.find(v)? {
                tree.try_add_edge(u, v, w)?;
                forest.unite(u, v)?;
            }
        }

        Ok(tree)
    }
}

impl<G> MinimumSpanningTree for G where
    G: WeightedAdjacencyList + GraphEdgeOrder + GraphEdgeEditing
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn demo_graph() -> AdjArray {
        AdjArray::from_edges(
            5,
            [(0, 1, 4), (0, 2, 1), (1, 2, 2), (1, 3, 5), (2, 3, 8), (3, 4, 3)],
        )
    }

    fn total_weight<G: WeightedAdjacencyList>(graph: &G) -> Weight {
        graph.edges(true).map(|e| e.weight()).sum()
    }

    /// A connected random graph: a random spanning tree plus extra edges
    fn random_connected_graph<R: Rng>(rng: &mut R, n: NumNodes, extra: NumEdges) -> AdjArray {
        let mut graph = AdjArray::new(n);
        for v in 1..n {
            let u = rng.random_range(0..v);
            graph.add_edge(u, v, rng.random_range(1..1000));
        }
        for _ in 0..extra {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            graph.add_edge(u, v, rng.random_range(1..1000));
        }
        graph
    }

    #[test]
    fn triangle_drops_heaviest_edge() {
        let graph = AdjArray::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 5)]);
        let expected = vec![Edge(0, 1, 1), Edge(1, 2, 2)];

        for tree in [graph.prim_mst().unwrap(), graph.kruskal_mst().unwrap()] {
            assert_eq!(tree.edges(true).sorted().collect_vec(), expected);
            assert_eq!(
                (0..3).map(|u| tree.degree_of(u)).sum::<NumNodes>(),
                4 // 2 undirected edges, stored from both sides
            );
        }
    }

    #[test]
    fn demo_graph_mst() {
        let expected = vec![Edge(0, 2, 1), Edge(1, 2, 2), Edge(1, 3, 5), Edge(3, 4, 3)];

        for tree in [
            demo_graph().prim_mst().unwrap(),
            demo_graph().kruskal_mst().unwrap(),
        ] {
            assert_eq!(tree.edges(true).sorted().collect_vec(), expected);
            assert_eq!(total_weight(&tree), 11);
        }
    }

    #[test]
    fn spanning_tree_has_n_minus_one_edges() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [2 as NumNodes, 10, 40] {
            let graph = random_connected_graph(rng, n, n * 2);

            for tree in [graph.prim_mst().unwrap(), graph.kruskal_mst().unwrap()] {
                assert_eq!(tree.number_of_edges(), n - 1);
                assert_eq!(tree.edges(false).count(), 2 * (n as usize - 1));
            }
        }
    }

    #[test]
    fn prim_and_kruskal_agree_on_total_weight() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in [5 as NumNodes, 20, 50] {
            let graph = random_connected_graph(rng, n, n * 3);
            assert_eq!(
                total_weight(&graph.prim_mst().unwrap()),
                total_weight(&graph.kruskal_mst().unwrap())
            );
        }
    }

    #[test]
    fn parallel_edges_and_loops_do_not_disturb_the_mst() {
        let mut graph = AdjArray::from_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 5)]);
        graph.add_edge(0, 1, 10); // parallel, heavier
        graph.add_edge(2, 2, 0); // loop, lightest of all

        for tree in [graph.prim_mst().unwrap(), graph.kruskal_mst().unwrap()] {
            assert_eq!(
                tree.edges(true).sorted().collect_vec(),
                vec![Edge(0, 1, 1), Edge(1, 2, 2)]
            );
        }
    }

    #[test]
    fn kruskal_spans_forest_on_disconnected_input() {
        //  0 - 1 - 2    3 - 4
        let graph = AdjArray::from_edges(5, [(0, 1, 3), (1, 2, 1), (0, 2, 2), (3, 4, 9)]);

        let forest = graph.kruskal_mst().unwrap();
        assert_eq!(forest.number_of_edges(), 3);
        assert!(forest.has_edge(3, 4));
        assert!(!forest.has_edge(0, 1));

        // prim only reaches vertex 0's component
        let tree = graph.prim_mst().unwrap();
        assert_eq!(tree.number_of_edges(), 2);
        assert_eq!(tree.degree_of(3), 0);
        assert_eq!(tree.degree_of(4), 0);
    }
}
