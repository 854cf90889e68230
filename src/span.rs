use serde::{Deserialize, Serialize};

/// Source position attached to a syntax-tree node by the parser.
///
/// Offsets are byte indices into the parsed file. The engine never
/// interprets these values; it only carries them over when a node is rebuilt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: u32,

    /// End byte offset (exclusive).
    pub end: u32,

    /// 1-based line the node starts on.
    pub line: u32,
}
