use std::{fs, path::Path};

use crate::error::{Error, Result};

use self::{edge::WeightedEdge, matrix_graph::MatrixGraph};

pub mod edge;
pub mod matrix_graph;

pub type Vertex = u32;
pub type Weight = u32;
pub type Distance = u32;

/// A weighted graph whose edges can be re-weighted in place.
///
/// A weight of `None` means there is no edge. Implementations are read by the
/// shortest path search and written by the weight dynamics, never both at the
/// same time.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        self.vertices()
            .map(|vertex| self.out_edges(vertex).len() as u32)
            .sum::<u32>()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = Vertex> + Send + '_> {
        Box::new(0..self.number_of_vertices())
    }

    /// Edges leaving `tail`, ordered by head.
    fn out_edges(
        &self,
        tail: Vertex,
    ) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    /// `None` if there is no edge or either vertex is out of range.
    fn get_weight(&self, tail: Vertex, head: Vertex) -> Option<Weight>;

    /// # Panics
    ///
    /// Panics if `tail` or `head` is not a vertex of the graph.
    fn set_weight(&mut self, tail: Vertex, head: Vertex, weight: Option<Weight>);
}

/// Reads an adjacency matrix description from `path`.
pub fn read_adjacency_matrix_file(path: &Path) -> Result<MatrixGraph> {
    let content = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
    parse_adjacency_matrix(&content)
}

/// Parses an adjacency matrix description.
///
/// The first token of the first line is the number of vertices `n`. It is
/// followed by `n` rows of `n` digits each; whitespace inside a row is
/// ignored. Every digit is used as the initial weight, `0` meaning no edge.
pub fn parse_adjacency_matrix(content: &str) -> Result<MatrixGraph> {
    let mut lines = content.lines().enumerate().map(|(index, line)| (index + 1, line));

    let (header_number, header) = lines
        .next()
        .ok_or_else(|| Error::format(1, "missing dimension header"))?;
    let dimension_token = header
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::format(header_number, "missing dimension header"))?;
    let number_of_vertices = dimension_token
        .parse::<Vertex>()
        .ok()
        .filter(|&number| number < Vertex::MAX)
        .ok_or_else(|| {
            Error::format(
                header_number,
                format!("unable to parse dimension '{}'", dimension_token),
            )
        })? as usize;
    if number_of_vertices == 0 {
        return Err(Error::format(header_number, "graph needs at least one vertex"));
    }

    // Rows are collected before the graph is allocated, so a large header
    // with missing rows fails without reserving the whole matrix.
    let mut matrix: Vec<Vec<Weight>> = Vec::new();
    while matrix.len() < number_of_vertices {
        let (line_number, line) = lines.next().ok_or_else(|| {
            Error::format(
                header_number + matrix.len() + 1,
                format!("expected {} rows, found {}", number_of_vertices, matrix.len()),
            )
        })?;

        let digits = line
            .chars()
            .filter(|character| !character.is_whitespace())
            .map(|character| {
                character.to_digit(10).ok_or_else(|| {
                    Error::format(line_number, format!("unexpected character '{}'", character))
                })
            })
            .collect::<Result<Vec<Weight>>>()?;

        if digits.len() != number_of_vertices {
            return Err(Error::format(
                line_number,
                format!(
                    "expected {} digits, found {}",
                    number_of_vertices,
                    digits.len()
                ),
            ));
        }

        matrix.push(digits);
    }

    if let Some((line_number, _)) = lines.find(|(_, line)| !line.trim().is_empty()) {
        return Err(Error::format(
            line_number,
            format!("expected {} rows, found more", number_of_vertices),
        ));
    }

    MatrixGraph::from_matrix(&matrix)
        .ok_or_else(|| Error::format(header_number, "adjacency matrix is not square"))
}
