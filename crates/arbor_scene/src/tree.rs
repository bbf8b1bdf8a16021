//! Scene tree management
//!
//! Nodes live in a slotmap arena and refer to each other by [`NodeId`], so
//! parent back-references are plain ids resolved at call time, never owning
//! links. Operations on stale ids are silent no-ops, matching the
//! permissive-widget model: a widget should degrade, not fail.

use arbor_core::{Dimension, Position};
use arbor_paint::Color;
use slotmap::{new_key_type, Key, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    pub struct NodeId;
}

/// Stable `u64` form of a node id, used as an event target
pub fn target_id(id: NodeId) -> u64 {
    id.data().as_ffi()
}

/// What a node is, expressed as a capability variant rather than a subclass
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NodeKind {
    /// Pure container, draws nothing of its own
    Group,
    /// Solid colored rectangle
    Rect,
    /// Clips child rendering to its own bounds; `fade` is the optional
    /// maximum length of the cosmetic edge-fade strips
    Viewport { fade: Option<f32> },
    /// Slider track carrying the scalar range; `value` is kept in sync with
    /// the handle position by `Slider::on_slide`
    SliderTrack {
        min: f32,
        max: f32,
        value: f32,
        render_value: bool,
    },
    /// Draggable slider handle, drawn as a rounded pill
    SliderHandle { rounding: f32, rounding_fixed: bool },
}

/// One scene node: geometry, child list, flags, and a capability variant
#[derive(Clone, Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub position: Position,
    pub dimension: Dimension,
    pub color: Color,
    pub visible: bool,
    pub traversable: bool,
    pub clickable: bool,
    pub draggable: bool,
    pub resizable: bool,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            position: Position::default(),
            dimension: Dimension::default(),
            color: Color::TRANSPARENT,
            visible: true,
            traversable: true,
            clickable: false,
            draggable: false,
            resizable: false,
            parent: None,
            children: SmallVec::new(),
        }
    }

    pub fn group() -> Self {
        Self::new(NodeKind::Group)
    }

    pub fn rect(width: f32, height: f32, color: Color) -> Self {
        Self::new(NodeKind::Rect)
            .sized(width, height)
            .colored(color)
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn sized(mut self, width: f32, height: f32) -> Self {
        self.dimension = Dimension::new(width, height);
        self
    }

    pub fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// Arena-backed scene graph
#[derive(Default)]
pub struct SceneTree {
    nodes: SlotMap<NodeId, Node>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: Node) -> NodeId {
        self.nodes.insert(node)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Attach `child` under `parent`, detaching it from any previous parent
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || !self.nodes.contains_key(parent) || !self.nodes.contains_key(child) {
            return;
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    /// Detach `child` from `parent`; the node stays alive in the arena
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        let is_child = self
            .nodes
            .get(child)
            .is_some_and(|n| n.parent == Some(parent));
        if is_child {
            self.detach(child);
        }
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.nodes.get(child).and_then(|n| n.parent) else {
            return;
        };
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = None;
        }
    }

    /// Delete a node and all of its descendants from the arena
    pub fn remove_subtree(&mut self, root: NodeId) {
        if !self.nodes.contains_key(root) {
            return;
        }
        self.detach(root);
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            if let Some(node) = self.nodes.remove(id) {
                stack.extend(node.children);
            }
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|n| n.children()).unwrap_or(&[])
    }

    // === Geometry ===

    pub fn position(&self, id: NodeId) -> Option<Position> {
        self.nodes.get(id).map(|n| n.position)
    }

    pub fn dimension(&self, id: NodeId) -> Option<Dimension> {
        self.nodes.get(id).map(|n| n.dimension)
    }

    pub fn dimension_mut(&mut self, id: NodeId) -> Option<&mut Dimension> {
        self.nodes.get_mut(id).map(|n| &mut n.dimension)
    }

    pub fn translate_to(&mut self, id: NodeId, x: f32, y: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.position.translate_to(x, y);
        }
    }

    pub fn translate_with(&mut self, id: NodeId, dx: f32, dy: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.position.translate_with(dx, dy);
        }
    }

    pub fn resize_to(&mut self, id: NodeId, width: f32, height: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.dimension.resize_to(width, height);
        }
    }

    pub fn resize_by(&mut self, id: NodeId, width_factor: f32, height_factor: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.dimension.resize_by(width_factor, height_factor);
        }
    }

    pub fn resize_with(&mut self, id: NodeId, delta_width: f32, delta_height: f32) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.dimension.resize_with(delta_width, delta_height);
        }
    }

    // === Flags ===

    pub fn set_visible(&mut self, id: NodeId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.visible = visible;
        }
    }

    pub fn set_traversable(&mut self, id: NodeId, traversable: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.traversable = traversable;
        }
    }

    pub fn set_draggable(&mut self, id: NodeId, draggable: bool) {
        if let Some(node) = self.nodes.get_mut(id) {
            node.draggable = draggable;
        }
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.visible)
    }

    pub fn is_traversable(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.traversable)
    }
}
