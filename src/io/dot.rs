//! Graphviz "dot" output for edge lists. Write-only.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::store::MultiGraph;

use super::FormatResult;

/// Write a graph in Graphviz digraph syntax: a `digraph G {` header, one
/// `<start> -> <end>;` line per edge in edge-index iteration order, and a
/// closing `}`.
///
/// Isolated vertices are not emitted; the format carries edges only.
///
/// # Errors
///
/// Returns [`FormatError::Io`](super::FormatError::Io) if writing fails.
pub fn write_dot<W: Write>(graph: &MultiGraph, mut writer: W) -> FormatResult<()> {
    writeln!(writer, "digraph G {{")?;
    for edge in graph.edges().values() {
        writeln!(writer, "{} -> {};", edge.source, edge.target)?;
    }
    writeln!(writer, "}}")?;
    debug!(edges = graph.edge_count(), "wrote dot digraph");
    Ok(())
}

/// Write a graph as a dot file.
///
/// # Errors
///
/// See [`write_dot`].
pub fn write_dot_to_path(graph: &MultiGraph, path: impl AsRef<Path>) -> FormatResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_dot(graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}
