//! Structural editor for plain-text outlines.
//!
//! An outline is indented UTF-8 text, one note per line, two spaces of
//! indentation per nesting level. Notes are addressed positionally with
//! dotted paths: `.0.2` is the third child of the first top-level note.
//! Each invocation parses the whole input stream into an arena-backed
//! forest, applies exactly one structural operation (add, edit, move,
//! delete, or the show pass-through), and serializes the result.
//!
//! Addresses are transient: they index siblings by position and go stale
//! after any mutation, so every operation re-resolves against the current
//! tree.

pub mod address;
pub mod arena;
pub mod cli;
pub mod edit;
pub mod errors;
pub mod exitcode;
pub mod parser;
pub mod util;

pub use address::Address;
pub use arena::OutlineArena;
pub use edit::Placement;
pub use errors::{OutlineError, OutlineResult};
pub use parser::{serialize, OutlineParser, ParseOptions};
