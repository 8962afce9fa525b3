/*!
# Representations

The adjacency-list storage backing every graph in this crate. A graph is a
vector of [`Neighborhood`]s, one per vertex; each neighborhood is a multiset
of weighted entries so that parallel edges and self-loops survive insertion
unchanged.

Two storage backends are provided:
- [`ArrNeighborhood`] keeps each neighborhood in a plain `Vec`,
- [`SparseNeighborhood`] inlines small neighborhoods via `SmallVec`.
*/

mod neighborhood;
mod undirected;

pub use neighborhood::*;
pub use undirected::*;
