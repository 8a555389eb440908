//! The simple edge-list format: one `"<start> -> <end>"` line per edge.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::store::MultiGraph;
use crate::types::VertexId;

use super::{FormatError, FormatResult};

/// Read a graph from simple edge-list text.
///
/// One edge is inserted per line, in input order, so edge numbers ascend
/// with line numbers. A single trailing empty line (from a final newline)
/// is tolerated; any other empty or malformed line is an error.
///
/// # Errors
///
/// Returns [`FormatError::Io`] if reading fails and [`FormatError::Parse`]
/// for the first line that does not match `"<start> -> <end>"`.
pub fn read_simple<R: Read>(mut reader: R) -> FormatResult<MultiGraph> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let mut graph = MultiGraph::new();
    for (index, line) in lines.iter().enumerate() {
        let (source, target) = parse_edge_line(line)
            .ok_or_else(|| FormatError::Parse { line: index + 1, content: (*line).to_owned() })?;
        graph.add_edge(source, target);
    }

    debug!(edges = graph.edge_count(), "read simple edge list");
    Ok(graph)
}

/// Read a graph from a simple edge-list file.
///
/// # Errors
///
/// See [`read_simple`].
pub fn read_simple_from_path(path: impl AsRef<Path>) -> FormatResult<MultiGraph> {
    read_simple(BufReader::new(File::open(path)?))
}

/// Write a graph as simple edge-list text, one line per edge in edge-index
/// iteration order.
///
/// # Errors
///
/// Returns [`FormatError::Io`] if writing fails.
pub fn write_simple<W: Write>(graph: &MultiGraph, mut writer: W) -> FormatResult<()> {
    for edge in graph.edges().values() {
        writeln!(writer, "{} -> {}", edge.source, edge.target)?;
    }
    debug!(edges = graph.edge_count(), "wrote simple edge list");
    Ok(())
}

/// Write a graph as a simple edge-list file.
///
/// # Errors
///
/// See [`write_simple`].
pub fn write_simple_to_path(graph: &MultiGraph, path: impl AsRef<Path>) -> FormatResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_simple(graph, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Parse one `"<start> -> <end>"` line. Whitespace around either number is
/// accepted.
fn parse_edge_line(line: &str) -> Option<(VertexId, VertexId)> {
    let (start, end) = line.split_once("->")?;
    let source: u64 = start.trim().parse().ok()?;
    let target: u64 = end.trim().parse().ok()?;
    Some((VertexId::new(source), VertexId::new(target)))
}
