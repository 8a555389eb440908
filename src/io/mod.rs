//! Line-oriented text formats for edge lists.
//!
//! Two formats are supported:
//!
//! - **simple** - one `"<start> -> <end>"` line per edge; read and write
//! - **dot** - Graphviz digraph syntax; write-only
//!
//! Reading builds a fresh [`MultiGraph`](crate::store::MultiGraph) by
//! inserting one edge per line in file order, so edge numbers ascend with
//! line numbers. Writing emits edges in edge-index iteration order; that
//! order is not a format guarantee.
//!
//! Parse failures surface as [`FormatError`], deliberately separate from
//! the store's [`GraphError`](crate::store::GraphError): a malformed file
//! is not a graph-consistency fault.

mod components;
mod dot;
mod edge_list;

use thiserror::Error;

pub use components::{write_components, write_components_to_path};
pub use dot::{write_dot, write_dot_to_path};
pub use edge_list::{
    read_simple, read_simple_from_path, write_simple, write_simple_to_path,
};

/// Errors that can occur reading or writing edge-list files.
#[derive(Debug, Error)]
pub enum FormatError {
    /// An underlying I/O operation failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A line did not match the expected edge pattern. Line numbers are
    /// 1-based.
    #[error("malformed edge on line {line}: {content:?}")]
    Parse {
        /// 1-based number of the offending line.
        line: usize,
        /// The offending line, verbatim.
        content: String,
    },
}

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;
