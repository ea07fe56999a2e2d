//! Per-frame hit-test nodes, rebuilt on every paint.

use super::geom::{Pos, Rect};
use super::id::Id;

/// What a node stands for. `row` indexes the rendered grid rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Swallows clicks without meaning anything, e.g. a popup's backdrop.
    Unknown,
    SectionHeader { row: usize },
    FieldRow { row: usize },
    Toggle { row: usize },
    PairSlot { row: usize, slot: usize },
    MenuItem { menu_id: u32, index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: Id,
    pub rect: Rect,
    pub layer: u8,
    /// Stacking within a layer; 0 is replaced by the insertion index.
    pub z: u32,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: Id, rect: Rect, kind: NodeKind) -> Self {
        Self { id, rect, layer: 0, z: 0, kind }
    }

    pub fn on_layer(mut self, layer: u8) -> Self {
        self.layer = layer;
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiTree {
    nodes: Vec<Node>,
}

impl UiTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn push(&mut self, node: Node) {
        let z = match node.z {
            0 => u32::try_from(self.nodes.len()).unwrap_or(u32::MAX),
            z => z,
        };
        self.nodes.push(Node { z, ..node });
    }

    /// The node drawn on top at `p`.
    pub fn hit_test(&self, p: Pos) -> Option<&Node> {
        self.nodes
            .iter()
            .filter(|n| n.rect.contains(p))
            .max_by_key(|n| (n.layer, n.z))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/tree.rs"]
mod tests;
