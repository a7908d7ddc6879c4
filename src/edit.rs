//! Address resolution and structural edit operations.
//!
//! Each operation is a single atomic transform: all resolution and
//! validation happens before the first mutation, so a failed operation
//! leaves the outline untouched.

use std::fmt;

use generational_arena::Index;
use tracing::instrument;

use crate::address::Address;
use crate::arena::{NodeData, OutlineArena};
use crate::errors::{OutlineError, OutlineResult};

/// Where a new or relocated subtree lands relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Sibling immediately before the anchor
    Before,
    /// Sibling immediately after the anchor
    After,
    /// First child of the anchor
    Prepend,
    /// Last child of the anchor
    Append,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Placement::Before => "before",
            Placement::After => "after",
            Placement::Prepend => "prepend",
            Placement::Append => "append",
        };
        write!(f, "{}", name)
    }
}

/// Resolves a positional address to a node handle.
///
/// The empty address `.` names the root anchor, not a node; it is only
/// accepted by [`add`] and [`move_subtree`] with prepend/append placement.
#[instrument(level = "debug", skip(outline))]
pub fn resolve(outline: &OutlineArena, address: &Address) -> OutlineResult<Index> {
    let mut current: Option<Index> = None;
    for (level, &component) in address.components().iter().enumerate() {
        let siblings = outline.sibling_list(current);
        let node_idx = siblings.get(component).copied().ok_or_else(|| {
            out_of_range(
                address,
                format!(
                    "component {} at level {} exceeds {} sibling(s)",
                    component,
                    level,
                    siblings.len()
                ),
            )
        })?;
        current = Some(node_idx);
    }
    current.ok_or_else(|| out_of_range(address, "the empty address does not name a node"))
}

/// Pre-order list of every node's address, parallel to the document order.
pub fn enumerate_addresses(outline: &OutlineArena) -> Vec<(Address, Index)> {
    let mut addresses = Vec::new();
    collect_addresses(outline, None, &Address::root(), &mut addresses);
    addresses
}

fn collect_addresses(
    outline: &OutlineArena,
    parent: Option<Index>,
    prefix: &Address,
    out: &mut Vec<(Address, Index)>,
) {
    for (position, &node_idx) in outline.sibling_list(parent).iter().enumerate() {
        let address = prefix.child(position);
        out.push((address.clone(), node_idx));
        collect_addresses(outline, Some(node_idx), &address, out);
    }
}

/// Inserts a new leaf with `text` relative to the node at `target`.
///
/// `before`/`after` insert a sibling of the target; `prepend`/`append`
/// insert a first/last child. The root anchor `.` is valid with
/// prepend/append and inserts at the start/end of the top-level list.
#[instrument(level = "debug", skip(outline))]
pub fn add(
    outline: &mut OutlineArena,
    target: &Address,
    placement: Placement,
    text: &str,
) -> OutlineResult<()> {
    let anchor = resolve_anchor(outline, target)?;
    let slot = slot_for_anchor(outline, target, anchor, placement)?;
    let node_idx = outline.insert_detached(NodeData {
        text: text.to_string(),
    });
    outline.attach(node_idx, slot.parent, slot.position);
    Ok(())
}

/// Replaces the text of the node at `target`; children and position stay.
#[instrument(level = "debug", skip(outline))]
pub fn edit(outline: &mut OutlineArena, target: &Address, text: &str) -> OutlineResult<()> {
    let node_idx = resolve(outline, target)?;
    if let Some(node) = outline.get_node_mut(node_idx) {
        node.data.text = text.to_string();
    }
    Ok(())
}

/// Detaches the subtree at `source` and re-inserts it relative to
/// `destination`, with the same placement semantics as [`add`].
///
/// Fails with `InvalidMove` when the destination is the source itself or
/// lies inside the source's subtree; the check walks the parent chain
/// because addresses go stale mid-operation.
#[instrument(level = "debug", skip(outline))]
pub fn move_subtree(
    outline: &mut OutlineArena,
    source: &Address,
    placement: Placement,
    destination: &Address,
) -> OutlineResult<()> {
    let source_idx = resolve(outline, source)?;
    let anchor = resolve_anchor(outline, destination)?;
    if let Some(dest_idx) = anchor {
        if outline.is_in_subtree(dest_idx, source_idx) {
            return Err(OutlineError::InvalidMove(format!(
                "cannot move {} {} {}: destination is the source or inside its subtree",
                source, placement, destination
            )));
        }
    }
    // Validate the anchor/placement combination before touching the tree
    slot_for_anchor(outline, destination, anchor, placement)?;

    outline.detach(source_idx);
    // Recomputed after detaching: removing the source can shift sibling
    // positions in the destination list
    let slot = slot_for_anchor(outline, destination, anchor, placement)?;
    outline.attach(source_idx, slot.parent, slot.position);
    Ok(())
}

/// Removes the subtree at `target`, node and all descendants.
#[instrument(level = "debug", skip(outline))]
pub fn delete(outline: &mut OutlineArena, target: &Address) -> OutlineResult<()> {
    let node_idx = resolve(outline, target)?;
    outline.remove_subtree(node_idx);
    Ok(())
}

/// Insertion point: a sibling list (parent) and a position within it.
#[derive(Debug, Clone, Copy)]
struct Slot {
    parent: Option<Index>,
    position: usize,
}

/// None for the root anchor, Some(node) for a resolved target.
fn resolve_anchor(outline: &OutlineArena, address: &Address) -> OutlineResult<Option<Index>> {
    if address.is_root() {
        Ok(None)
    } else {
        resolve(outline, address).map(Some)
    }
}

fn slot_for_anchor(
    outline: &OutlineArena,
    address: &Address,
    anchor: Option<Index>,
    placement: Placement,
) -> OutlineResult<Slot> {
    match (anchor, placement) {
        (None, Placement::Prepend) => Ok(Slot {
            parent: None,
            position: 0,
        }),
        (None, Placement::Append) => Ok(Slot {
            parent: None,
            position: outline.roots().len(),
        }),
        (None, Placement::Before | Placement::After) => {
            Err(out_of_range(address, "the root anchor has no siblings"))
        }
        (Some(node_idx), Placement::Prepend) => Ok(Slot {
            parent: Some(node_idx),
            position: 0,
        }),
        (Some(node_idx), Placement::Append) => Ok(Slot {
            parent: Some(node_idx),
            position: outline.sibling_list(Some(node_idx)).len(),
        }),
        (Some(node_idx), Placement::Before | Placement::After) => {
            let (parent, position) = outline
                .position_in_siblings(node_idx)
                .ok_or_else(|| OutlineError::Internal("anchor node is not attached".to_string()))?;
            let position = if placement == Placement::After {
                position + 1
            } else {
                position
            };
            Ok(Slot { parent, position })
        }
    }
}

fn out_of_range(address: &Address, reason: impl Into<String>) -> OutlineError {
    OutlineError::AddressOutOfRange {
        address: address.clone(),
        reason: reason.into(),
    }
}
