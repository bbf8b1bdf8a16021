//! Scene render traversal
//!
//! Depth-first replay of the tree into a [`Canvas`]. Invisible nodes are
//! skipped entirely, subtree included; each node draws in its own translated
//! coordinate space so siblings never see its transform.

use arbor_core::events::{event_types, Event, EventData, EventDispatcher};
use arbor_paint::{Canvas, Rect};

use crate::tree::{target_id, NodeId, NodeKind, SceneTree};
use crate::{slider, viewport};

/// Render the whole tree, then publish `AFTER_RENDER` for subscribers
pub fn render_tree(
    tree: &SceneTree,
    root: NodeId,
    canvas: &mut Canvas,
    dispatcher: &EventDispatcher,
) {
    render_node(tree, root, canvas);
    let mut event = Event::new(event_types::AFTER_RENDER, target_id(root), EventData::None);
    dispatcher.dispatch(&mut event);
}

/// Render one node and its visible descendants
pub fn render_node(tree: &SceneTree, id: NodeId, canvas: &mut Canvas) {
    let Some(node) = tree.get(id) else {
        return;
    };
    if !node.visible {
        return;
    }

    let mut scope = canvas.translate_scope(node.position.x, node.position.y);
    match node.kind {
        NodeKind::Group => {}
        NodeKind::Rect => {
            let (w, h) = (node.dimension.width(), node.dimension.height());
            scope.fill_rect(Rect::new(0.0, 0.0, w, h), node.color);
        }
        NodeKind::Viewport { fade } => {
            // children are drawn inside the clip, not by the loop below
            viewport::render_viewport(tree, id, &mut scope, fade);
            return;
        }
        NodeKind::SliderTrack { .. } => slider::paint_track(tree, id, &mut scope),
        NodeKind::SliderHandle { .. } => slider::paint_handle(tree, id, &mut scope),
    }

    for &child in tree.children(id) {
        render_node(tree, child, &mut scope);
    }
}
