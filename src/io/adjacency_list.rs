//! Writer and reader for the textual adjacency-list dump.

use std::io::{BufRead, ErrorKind, Result, Write};

use itertools::Itertools;

use super::*;

/// Trait for writing a graph as its adjacency-list dump.
pub trait AdjacencyListWrite {
    /// Writes one `Vertex {i}:` line per vertex to `writer`, neighbors in
    /// snapshot order.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_adjacency_list<W>(&self, writer: W) -> Result<()>
    where
        W: Write;
}

impl<G> AdjacencyListWrite for G
where
    G: WeightedAdjacencyList,
{
    fn try_write_adjacency_list<W>(&self, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for u in self.vertices() {
            write!(writer, "Vertex {u}:")?;
            for nb in self.neighbors_of(u) {
                write!(writer, " -> ({}, weight: {})", nb.node, nb.weight)?;
            }
            writeln!(writer)?;
        }
        Ok(())
    }
}

/// Trait for reading a graph back from its adjacency-list dump.
pub trait AdjacencyListRead: Sized {
    /// Parses the dump produced by [`AdjacencyListWrite`].
    ///
    /// Vertex lines must be complete and in ascending order. Both stored
    /// directions of every edge must be present; the reader folds them back
    /// so the undirected edge multiset of the source graph is reproduced
    /// exactly (self-loop entries are counted in pairs as well).
    ///
    /// # Errors
    /// Returns an error if the input is not a valid dump.
    fn try_read_adjacency_list<R>(reader: R) -> Result<Self>
    where
        R: BufRead;
}

impl<G> AdjacencyListRead for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn try_read_adjacency_list<R>(reader: R) -> Result<Self>
    where
        R: BufRead,
    {
        let mut entries: Vec<Edge> = Vec::new();
        let mut num_vertices: NumNodes = 0;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end();
            if line.is_empty() {
                continue;
            }

            let header = line.strip_prefix("Vertex ").and_then(|r| r.split_once(':'));
            raise_error_unless!(
                header.is_some(),
                ErrorKind::InvalidData,
                format!("Missing vertex header in line {:?}.", line)
            );
            let (vertex_str, tail) = header.unwrap();

            let vertex = vertex_str.parse::<Node>();
            raise_error_unless!(
                vertex.is_ok(),
                ErrorKind::InvalidData,
                format!("Cannot parse vertex index {vertex_str:?}.")
            );
            let vertex = vertex.unwrap();

            raise_error_unless!(
                vertex == num_vertices,
                ErrorKind::InvalidData,
                format!("Expected line for vertex {num_vertices}, found {vertex}.")
            );
            num_vertices += 1;

            for segment in tail.split(" -> ").skip(1) {
                let inner = segment
                    .strip_prefix('(')
                    .and_then(|s| s.strip_suffix(')'))
                    .and_then(|s| s.split_once(", weight: "));
                raise_error_unless!(
                    inner.is_some(),
                    ErrorKind::InvalidData,
                    format!("Malformed neighbor entry {segment:?}.")
                );
                let (node_str, weight_str) = inner.unwrap();

                let node = node_str.parse::<Node>();
                let weight = weight_str.parse::<Weight>();
                raise_error_unless!(
                    node.is_ok() && weight.is_ok(),
                    ErrorKind::InvalidData,
                    format!("Malformed neighbor entry {segment:?}.")
                );

                entries.push(Edge(vertex, node.unwrap(), weight.unwrap()).normalized());
            }
        }

        raise_error_unless!(
            num_vertices > 0,
            ErrorKind::InvalidData,
            "Input contains no vertex lines."
        );

        let mut graph = Self::try_new(num_vertices)
            .map_err(|e| io_error!(ErrorKind::InvalidData, e.to_string()))?;

        // each undirected edge was written from both sides
        for (edge, count) in entries.into_iter().counts().into_iter().sorted_unstable() {
            raise_error_unless!(
                count % 2 == 0,
                ErrorKind::InvalidData,
                format!("Edge {edge} is missing its mirrored entry.")
            );
            for _ in 0..count / 2 {
                graph
                    .try_add_edge(edge.0, edge.1, edge.2)
                    .map_err(|e| io_error!(ErrorKind::InvalidData, e.to_string()))?;
            }
        }

        Ok(graph)
    }
}
