//! Line-oriented outline parsing and serialization.
//!
//! One node per line, nesting encoded as two spaces of indentation per
//! level. `serialize(parse(t)) == t` for any well-formed `t` under the
//! default options.

use generational_arena::Index;
use tracing::instrument;

use crate::arena::{NodeData, OutlineArena};
use crate::errors::{OutlineError, OutlineResult};

/// Spaces per nesting level.
pub const INDENT_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Keep whitespace-only lines as empty-text leaf nodes at the depth their
    /// indentation encodes. When false, blank lines are dropped and the
    /// round-trip guarantee only covers blank-free text.
    pub preserve_blank_lines: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            preserve_blank_lines: true,
        }
    }
}

pub struct OutlineParser {
    options: ParseOptions,
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OutlineParser {
    pub fn new() -> Self {
        Self {
            options: ParseOptions::default(),
        }
    }

    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Builds an outline from indented text.
    ///
    /// A line at depth D becomes a child of the most recent line at depth
    /// D-1. A line indented more than one level past its predecessor has no
    /// parent to attach to and fails with the offending 1-based line number.
    #[instrument(level = "debug", skip(self, text))]
    pub fn parse(&self, text: &str) -> OutlineResult<OutlineArena> {
        let mut outline = OutlineArena::new();
        // Most recent node at each depth, truncated as indentation retreats
        let mut last_at_depth: Vec<Index> = Vec::new();

        for (number, line) in text.lines().enumerate() {
            let number = number + 1;
            if !self.options.preserve_blank_lines && line.trim().is_empty() {
                continue;
            }
            let depth = indent_depth(line, number)?;
            if depth > last_at_depth.len() {
                return Err(OutlineError::Parse {
                    line: number,
                    reason: format!(
                        "indented to depth {} but no preceding line at depth {}",
                        depth,
                        depth - 1
                    ),
                });
            }
            let data = NodeData {
                text: line[depth * INDENT_WIDTH..].to_string(),
            };
            let parent = if depth == 0 {
                None
            } else {
                Some(last_at_depth[depth - 1])
            };
            let node_idx = outline.insert_node(data, parent);
            last_at_depth.truncate(depth);
            last_at_depth.push(node_idx);
        }
        Ok(outline)
    }
}

fn indent_depth(line: &str, number: usize) -> OutlineResult<usize> {
    let mut spaces = 0;
    for c in line.chars() {
        match c {
            ' ' => spaces += 1,
            '\t' => {
                return Err(OutlineError::Parse {
                    line: number,
                    reason: "tab in indentation, expected spaces".to_string(),
                })
            }
            _ => break,
        }
    }
    if spaces % INDENT_WIDTH != 0 {
        return Err(OutlineError::Parse {
            line: number,
            reason: format!(
                "indentation of {} spaces is not a multiple of {}",
                spaces, INDENT_WIDTH
            ),
        });
    }
    Ok(spaces / INDENT_WIDTH)
}

/// Inverse of [`OutlineParser::parse`]: pre-order traversal, each node's text
/// prefixed by its depth worth of indentation, trailing newline per line.
#[instrument(level = "debug", skip(outline))]
pub fn serialize(outline: &OutlineArena) -> String {
    let mut out = String::new();
    for (_, depth, node) in outline.iter() {
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&node.data.text);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_builds_sibling_and_child_links() {
        let outline = OutlineParser::new().parse("A\n  B\n  C\nD\n").unwrap();
        assert_eq!(outline.roots().len(), 2);
        assert_eq!(outline.len(), 4);

        let a = outline.get_node(outline.roots()[0]).unwrap();
        assert_eq!(a.data.text, "A");
        assert_eq!(a.children.len(), 2);
    }

    #[test]
    fn test_parse_rejects_orphaned_over_indent() {
        let result = OutlineParser::new().parse("A\n    B\n");
        let err = result.err().unwrap();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_serialize_empty_outline() {
        assert_eq!(serialize(&OutlineArena::new()), "");
    }
}
