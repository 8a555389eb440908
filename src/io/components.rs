//! Persisting component partitions, one line per component.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::types::VertexId;

use super::FormatResult;

/// Write a component partition as text, one `component <n>: <members>`
/// line per component with members sorted by vertex number.
///
/// Pairs with the SCC decomposition: pass
/// [`SccResult::components`](crate::analytics::SccResult).
///
/// # Errors
///
/// Returns [`FormatError::Io`](super::FormatError::Io) if writing fails.
pub fn write_components<W: Write>(
    components: &[Vec<VertexId>],
    mut writer: W,
) -> FormatResult<()> {
    for (number, component) in components.iter().enumerate() {
        let mut members: Vec<u64> = component.iter().map(|id| id.as_u64()).collect();
        members.sort_unstable();
        let rendered: Vec<String> = members.iter().map(u64::to_string).collect();
        writeln!(writer, "component {}: {}", number, rendered.join(" "))?;
    }
    Ok(())
}

/// Write a component partition to a file.
///
/// # Errors
///
/// See [`write_components`].
pub fn write_components_to_path(
    components: &[Vec<VertexId>],
    path: impl AsRef<Path>,
) -> FormatResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_components(components, &mut writer)?;
    writer.flush()?;
    Ok(())
}
