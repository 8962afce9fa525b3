use crate::{GraphError, Node, NumNodes, Result};

/// Disjoint-set structure with full path compression and union by rank.
///
/// The universe size is fixed at construction; every element starts as its
/// own singleton root of rank zero. The rank of a root is an upper bound on
/// the height of its tree and is consulted only to pick the union direction.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    rank: Vec<u32>,
}

impl UnionFind {
    /// Creates `size` singleton sets.
    /// Fails with [`GraphError::ZeroCapacity`] for an empty universe.
    pub fn new(size: NumNodes) -> Result<Self> {
        if size == 0 {
            return Err(GraphError::ZeroCapacity);
        }

        Ok(Self {
            parent: (0..size).collect(),
            rank: vec![0; size as usize],
        })
    }

    /// Returns the representative of `a`'s set, compressing every visited
    /// parent pointer directly to the root.
    /// Fails with [`GraphError::VertexOutOfBounds`] for an invalid element.
    pub fn find(&mut self, a: Node) -> Result<Node> {
        self.require_element(a)?;
        Ok(self.find_root(a))
    }

    /// Merges the sets of `a` and `b`; a no-op when both already share a
    /// root. The lower-rank root attaches below the higher-rank one; on
    /// ties `a`'s root survives and its rank grows by one.
    /// Fails with [`GraphError::VertexOutOfBounds`] for an invalid element.
    pub fn unite(&mut self, a: Node, b: Node) -> Result<()> {
        self.require_element(a)?;
        self.require_element(b)?;

        let root_a = self.find_root(a);
        let root_b = self.find_root(b);
        if root_a == root_b {
            return Ok(());
        }

        if self.rank[root_a as usize] < self.rank[root_b as usize] {
            self.parent[root_a as usize] = root_b;
        } else if self.rank[root_a as usize] > self.rank[root_b as usize] {
            self.parent[root_b as usize] = root_a;
        } else {
            self.parent[root_b as usize] = root_a;
            self.rank[root_a as usize] += 1;
        }
        Ok(())
    }

    /// Returns the number of elements in the universe
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    fn require_element(&self, a: Node) -> Result<()> {
        if (a as usize) < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfBounds {
                vertex: a,
                bound: self.parent.len() as NumNodes,
            })
        }
    }

    fn find_root(&mut self, a: Node) -> Node {
        let parent = self.parent[a as usize];
        if parent == a {
            return a;
        }

        let root = self.find_root(parent);
        self.parent[a as usize] = root;
        root
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let mut uf = UnionFind::new(5).unwrap();
        for i in 0..5 {
            assert_eq!(uf.find(i).unwrap(), i);
        }
    }

    #[test]
    fn unite_merges_sets() {
        let mut uf = UnionFind::new(5).unwrap();

        uf.unite(0, 1).unwrap();
        uf.unite(2, 3).unwrap();
        assert_eq!(uf.find(0).unwrap(), uf.find(1).unwrap());
        assert_eq!(uf.find(2).unwrap(), uf.find(3).unwrap());
        assert_ne!(uf.find(0).unwrap(), uf.find(2).unwrap());

        uf.unite(1, 2).unwrap();
        let root = uf.find(0).unwrap();
        for i in 1..4 {
            assert_eq!(uf.find(i).unwrap(), root);
        }
        assert_ne!(uf.find(4).unwrap(), root);
    }

    #[test]
    fn redundant_unite_is_a_noop() {
        let mut uf = UnionFind::new(3).unwrap();
        uf.unite(0, 1).unwrap();
        let root = uf.find(0).unwrap();

        uf.unite(1, 0).unwrap();
        assert_eq!(uf.find(0).unwrap(), root);
        assert_eq!(uf.find(1).unwrap(), root);
    }

    #[test]
    fn path_compression_flattens_chains() {
        let mut uf = UnionFind::new(8).unwrap();
        for i in 1..8 {
            uf.unite(0, i).unwrap();
        }

        let root = uf.find(7).unwrap();
        for i in 0..8 {
            assert_eq!(uf.find(i).unwrap(), root);
        }
    }

    #[test]
    fn rejects_invalid_input() {
        assert_eq!(UnionFind::new(0).unwrap_err(), GraphError::ZeroCapacity);

        let mut uf = UnionFind::new(3).unwrap();
        assert_eq!(
            uf.find(3).unwrap_err(),
            GraphError::VertexOutOfBounds { vertex: 3, bound: 3 }
        );
        assert_eq!(
            uf.unite(0, 9).unwrap_err(),
            GraphError::VertexOutOfBounds { vertex: 9, bound: 3 }
        );
    }
}
