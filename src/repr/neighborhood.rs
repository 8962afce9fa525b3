use std::{iter::Copied, slice::Iter};

use itertools::Itertools;
use smallvec::{Array, SmallVec};

use crate::*;

/// Trait for methods on the Neighborhood of a specified Node.
///
/// A Neighborhood is a multiset of [`Neighbor`] entries: the same vertex may
/// appear several times with equal or distinct weights (parallel edges).
/// Entries keep a deterministic order.
pub trait Neighborhood: Clone {
    fn new(n: NumNodes) -> Self;

    /// Returns the number of entries in the Neighborhood, parallel edges included
    fn num_of_neighbors(&self) -> NumNodes;

    type NeighborhoodIter<'a>: Iterator<Item = Neighbor> + 'a
    where
        Self: 'a;

    /// Returns an iterator over all entries in the Neighborhood
    fn neighbors(&self) -> Self::NeighborhoodIter<'_>;

    /// Returns *true* if at least one entry for `v` exists
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|nb| nb.node == v)
    }

    /// Returns the weight of the first entry for `v`, if any
    fn weight_to(&self, v: Node) -> Option<Weight> {
        self.neighbors().find(|nb| nb.node == v).map(|nb| nb.weight)
    }

    /// Appends an entry to the Neighborhood. Never deduplicates: a second
    /// entry for the same vertex records a parallel edge.
    fn add_neighbor(&mut self, nb: Neighbor);

    /// Removes the first entry for `v` and returns its weight.
    /// Returns `None` if no entry for `v` exists.
    fn remove_neighbor(&mut self, v: Node) -> Option<Weight>;

    /// Removes one entry matching `v` with exactly the given weight.
    /// Returns *true* if such an entry existed.
    fn remove_neighbor_with_weight(&mut self, v: Node, weight: Weight) -> bool;

    /// Removes all entries in the Neighborhood
    fn clear(&mut self);
}

/// Basic Neighborhood-Impl. using `Vec<Neighbor>`
#[derive(Default, Clone, Debug)]
pub struct ArrNeighborhood(pub Vec<Neighbor>);

impl Neighborhood for ArrNeighborhood {
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Neighbor>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, nb: Neighbor) {
        self.0.push(nb);
    }

    fn remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        let (pos, nb) = self.0.iter().find_position(|nb| nb.node == v)?;
        let weight = nb.weight;
        self.0.swap_remove(pos);
        Some(weight)
    }

    fn remove_neighbor_with_weight(&mut self, v: Node, weight: Weight) -> bool {
        if let Some((pos, _)) = self
            .0
            .iter()
            .find_position(|nb| nb.node == v && nb.weight == weight)
        {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

/// Like [`ArrNeighborhood`] but uses `SmallVec<[Neighbor; N]>` instead.
/// Prefer this if the graph is known to be sparse.
#[derive(Default, Clone, Debug)]
pub struct SparseNeighborhood<const N: usize = 8>(pub SmallVec<[Neighbor; N]>)
where
    [Neighbor; N]: Array<Item = Neighbor>;

impl<const N: usize> Neighborhood for SparseNeighborhood<N>
where
    [Neighbor; N]: Array<Item = Neighbor>,
{
    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    type NeighborhoodIter<'a>
        = Copied<Iter<'a, Neighbor>>
    where
        Self: 'a;

    fn neighbors(&self) -> Self::NeighborhoodIter<'_> {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, nb: Neighbor) {
        self.0.push(nb);
    }

    fn remove_neighbor(&mut self, v: Node) -> Option<Weight> {
        let (pos, nb) = self.0.iter().find_position(|nb| nb.node == v)?;
        let weight = nb.weight;
        self.0.swap_remove(pos);
        Some(weight)
    }

    fn remove_neighbor_with_weight(&mut self, v: Node, weight: Weight) -> bool {
        if let Some((pos, _)) = self
            .0
            .iter()
            .find_position(|nb| nb.node == v && nb.weight == weight)
        {
            self.0.swap_remove(pos);
            true
        } else {
            false
        }
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}
