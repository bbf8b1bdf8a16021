//! Viewport clipping
//!
//! A viewport node hard-clips its children to `[0,0]-[width,height]`. The
//! clip is held by an RAII scope, so it is released on every exit path even
//! when no child is visible. Optionally, translucent gradient strips are
//! painted along edges the content has scrolled past - a purely cosmetic
//! hint that more content lies beyond the window.

use arbor_paint::{Canvas, Color, FadeEdge, LinearGradient, Rect};

use crate::render::render_node;
use crate::tree::{NodeId, SceneTree};

const FADE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.18);

/// Render a viewport's children through its clip region
pub(crate) fn render_viewport(
    tree: &SceneTree,
    id: NodeId,
    canvas: &mut Canvas,
    fade: Option<f32>,
) {
    let Some(dim) = tree.dimension(id) else {
        return;
    };
    let mut clip = canvas.clip_scope(Rect::new(0.0, 0.0, dim.width(), dim.height()));
    for &child in tree.children(id) {
        render_node(tree, child, &mut clip);
    }
    if let Some(max_len) = fade {
        paint_edge_fades(tree, id, &mut clip, max_len);
    }
}

/// Strip length for a given scrolled distance: grows with the distance,
/// capped at `max_len`
fn strip_len(scrolled: f32, max_len: f32) -> f32 {
    scrolled.clamp(0.0, max_len)
}

fn paint_edge_fades(tree: &SceneTree, viewport: NodeId, canvas: &mut Canvas, max_len: f32) {
    let Some(vp) = tree.dimension(viewport) else {
        return;
    };
    let Some(contained) = tree
        .children(viewport)
        .iter()
        .copied()
        .find(|&c| tree.is_visible(c))
    else {
        return;
    };
    let (Some(pos), Some(content)) = (tree.position(contained), tree.dimension(contained)) else {
        return;
    };

    let (vw, vh) = (vp.width(), vp.height());
    let scroll_x = -pos.x;
    let scroll_y = -pos.y;

    let left = strip_len(scroll_x, max_len);
    if left > 0.0 {
        canvas.fill_gradient_rect(
            Rect::new(0.0, 0.0, left, vh),
            LinearGradient::fade(FadeEdge::Left, left, FADE_COLOR),
        );
    }
    let right = strip_len(content.width() - vw - scroll_x, max_len);
    if right > 0.0 {
        canvas.fill_gradient_rect(
            Rect::new(vw - right, 0.0, right, vh),
            LinearGradient::fade(FadeEdge::Right, right, FADE_COLOR),
        );
    }
    let top = strip_len(scroll_y, max_len);
    if top > 0.0 {
        canvas.fill_gradient_rect(
            Rect::new(0.0, 0.0, vw, top),
            LinearGradient::fade(FadeEdge::Top, top, FADE_COLOR),
        );
    }
    let bottom = strip_len(content.height() - vh - scroll_y, max_len);
    if bottom > 0.0 {
        canvas.fill_gradient_rect(
            Rect::new(0.0, vh - bottom, vw, bottom),
            LinearGradient::fade(FadeEdge::Bottom, bottom, FADE_COLOR),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Node, NodeKind};
    use arbor_paint::PaintCommand;

    fn viewport_with_content(
        tree: &mut SceneTree,
        fade: Option<f32>,
        content_pos: (f32, f32),
    ) -> NodeId {
        let viewport = tree.insert(Node::new(NodeKind::Viewport { fade }).sized(100.0, 100.0));
        let content = tree.insert(
            Node::rect(300.0, 300.0, Color::WHITE).at(content_pos.0, content_pos.1),
        );
        tree.add_child(viewport, content);
        viewport
    }

    fn gradient_count(canvas: &Canvas) -> usize {
        canvas
            .commands()
            .iter()
            .filter(|c| matches!(c, PaintCommand::FillGradientRect { .. }))
            .count()
    }

    #[test]
    fn clip_wraps_children() {
        let mut tree = SceneTree::new();
        let viewport = viewport_with_content(&mut tree, None, (0.0, 0.0));
        let mut canvas = Canvas::new();
        render_viewport(&tree, viewport, &mut canvas, None);

        assert!(canvas.is_balanced());
        assert!(matches!(
            canvas.commands().first(),
            Some(PaintCommand::PushClip { .. })
        ));
        assert_eq!(canvas.commands().last(), Some(&PaintCommand::PopClip));
    }

    #[test]
    fn clip_balanced_with_no_visible_children() {
        let mut tree = SceneTree::new();
        let viewport = viewport_with_content(&mut tree, Some(10.0), (0.0, 0.0));
        let content = tree.children(viewport)[0];
        tree.set_visible(content, false);

        let mut canvas = Canvas::new();
        render_viewport(&tree, viewport, &mut canvas, Some(10.0));
        assert!(canvas.is_balanced());
        // push + pop only: invisible child skipped entirely, no fades
        assert_eq!(canvas.commands().len(), 2);
    }

    #[test]
    fn no_fades_at_origin() {
        let mut tree = SceneTree::new();
        let viewport = viewport_with_content(&mut tree, Some(10.0), (0.0, 0.0));
        let mut canvas = Canvas::new();
        render_viewport(&tree, viewport, &mut canvas, Some(10.0));
        // content extends past the right and bottom edges only
        assert_eq!(gradient_count(&canvas), 2);
    }

    #[test]
    fn all_fades_mid_scroll() {
        let mut tree = SceneTree::new();
        let viewport = viewport_with_content(&mut tree, Some(10.0), (-50.0, -50.0));
        let mut canvas = Canvas::new();
        render_viewport(&tree, viewport, &mut canvas, Some(10.0));
        assert_eq!(gradient_count(&canvas), 4);
    }

    #[test]
    fn strip_grows_then_caps() {
        assert_eq!(strip_len(3.0, 10.0), 3.0);
        assert_eq!(strip_len(50.0, 10.0), 10.0);
        assert_eq!(strip_len(-2.0, 10.0), 0.0);
    }
}
