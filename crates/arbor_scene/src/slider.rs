//! Axis slider and its draggable handle
//!
//! A slider is a track node plus one handle node; the scalar state
//! (`min`/`max`/`value`) lives on the track node and `value` is always
//! re-derived from the handle position in [`Slider::on_slide`], never
//! mutated independently of it. The [`Slider`] itself is just a pair of ids,
//! so panes can hold it by value and resolve geometry at call time.

use arbor_paint::{Canvas, Color, Path, Rect};

use crate::tree::{Node, NodeId, NodeKind, SceneTree};

const TRACK_COLOR: Color = Color::new(0.85, 0.85, 0.85, 1.0);

/// Fraction of the track the handle occupies along its long axis
const HANDLE_FRACTION: f32 = 5.0;

/// Inset, in units, between the handle and each track edge
const HANDLE_INSET: f32 = 1.0;

#[derive(Clone, Copy, Debug)]
pub struct Slider {
    track: NodeId,
    handle: NodeId,
}

impl Slider {
    /// Build a track with a fresh handle attached at the track origin
    pub fn new(
        tree: &mut SceneTree,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        rounding: f32,
    ) -> Self {
        let track = tree.insert(
            Node::new(NodeKind::SliderTrack {
                min: 0.0,
                max: 1.0,
                value: 0.0,
                render_value: false,
            })
            .at(x, y)
            .sized(width, height)
            .colored(TRACK_COLOR),
        );
        let mut handle_node =
            Node::new(NodeKind::SliderHandle {
                rounding,
                rounding_fixed: true,
            })
            .colored(Color::HANDLE_GRAY);
        handle_node.draggable = true;
        let handle = tree.insert(handle_node);
        tree.add_child(track, handle);

        let slider = Self { track, handle };
        slider.on_slide(tree);
        slider
    }

    pub fn track(&self) -> NodeId {
        self.track
    }

    /// The handle id, for external event binding
    pub fn handle(&self) -> NodeId {
        self.handle
    }

    /// Attach a different handle node at a track-relative offset, replacing
    /// (and detaching) the current one. Ignored unless `handle` is a
    /// slider-handle node.
    pub fn set_handle(
        &mut self,
        tree: &mut SceneTree,
        handle: NodeId,
        offset_x: f32,
        offset_y: f32,
    ) {
        let is_handle = tree
            .get(handle)
            .is_some_and(|n| matches!(n.kind, NodeKind::SliderHandle { .. }));
        if !is_handle {
            tracing::warn!("set_handle ignored: node is not a slider handle");
            return;
        }
        tree.remove_child(self.track, self.handle);
        tree.add_child(self.track, handle);
        tree.translate_to(handle, offset_x, offset_y);
        self.handle = handle;
        self.on_slide(tree);
    }

    // === Scalar range ===

    pub fn min(&self, tree: &SceneTree) -> f32 {
        match tree.get(self.track).map(|n| n.kind) {
            Some(NodeKind::SliderTrack { min, .. }) => min,
            _ => 0.0,
        }
    }

    pub fn max(&self, tree: &SceneTree) -> f32 {
        match tree.get(self.track).map(|n| n.kind) {
            Some(NodeKind::SliderTrack { max, .. }) => max,
            _ => 0.0,
        }
    }

    pub fn value(&self, tree: &SceneTree) -> f32 {
        match tree.get(self.track).map(|n| n.kind) {
            Some(NodeKind::SliderTrack { value, .. }) => value,
            _ => 0.0,
        }
    }

    /// No bounds validation: callers set coherent ranges
    pub fn set_min(&self, tree: &mut SceneTree, v: f32) {
        if let Some(Node {
            kind: NodeKind::SliderTrack { min, .. },
            ..
        }) = tree.get_mut(self.track)
        {
            *min = v;
        }
    }

    pub fn set_max(&self, tree: &mut SceneTree, v: f32) {
        if let Some(Node {
            kind: NodeKind::SliderTrack { max, .. },
            ..
        }) = tree.get_mut(self.track)
        {
            *max = v;
        }
    }

    pub fn set_value(&self, tree: &mut SceneTree, v: f32) {
        if let Some(Node {
            kind: NodeKind::SliderTrack { value, .. },
            ..
        }) = tree.get_mut(self.track)
        {
            *value = v;
        }
    }

    /// Toggle the numeric readout painted on the track
    pub fn set_render_value(&self, tree: &mut SceneTree, on: bool) {
        if let Some(Node {
            kind: NodeKind::SliderTrack { render_value, .. },
            ..
        }) = tree.get_mut(self.track)
        {
            *render_value = on;
        }
    }

    // === Geometry and visibility ===

    pub fn set_geometry(&self, tree: &mut SceneTree, x: f32, y: f32, width: f32, height: f32) {
        tree.translate_to(self.track, x, y);
        tree.resize_to(self.track, width, height);
    }

    pub fn is_visible(&self, tree: &SceneTree) -> bool {
        tree.is_visible(self.track)
    }

    /// Visibility and traversability always toggle together
    pub fn set_visible(&self, tree: &mut SceneTree, visible: bool) {
        tree.set_visible(self.track, visible);
        tree.set_traversable(self.track, visible);
    }

    // === Slide ===

    /// Re-derive handle geometry and the slider value from the handle
    /// position. Invoked after every drag step and after any track resize.
    ///
    /// The handle's long side spans a fifth of the track, so its travel is
    /// the remaining four fifths; the scale factor maps that travel back
    /// onto the full `[min, max]` range, hitting both ends exactly at the
    /// clamp limits.
    pub fn on_slide(&self, tree: &mut SceneTree) {
        let Some(track_dim) = tree.dimension(self.track) else {
            return;
        };
        let (tw, th) = (track_dim.width(), track_dim.height());
        let horizontal = tw > th;

        if horizontal {
            tree.resize_to(
                self.handle,
                tw / HANDLE_FRACTION - 2.0 * HANDLE_INSET,
                th - 2.0 * HANDLE_INSET,
            );
        } else {
            tree.resize_to(
                self.handle,
                tw - 2.0 * HANDLE_INSET,
                th / HANDLE_FRACTION - 2.0 * HANDLE_INSET,
            );
        }

        let track_len = if horizontal { tw } else { th };
        let travel = track_len - track_len / HANDLE_FRACTION;
        let Some(pos) = tree.position(self.handle) else {
            return;
        };
        let raw = if horizontal { pos.x } else { pos.y };
        let clamped = raw.clamp(0.0, travel);
        // off-axis coordinate locked to the track centerline
        if horizontal {
            tree.translate_to(self.handle, clamped, 0.0);
        } else {
            tree.translate_to(self.handle, 0.0, clamped);
        }

        let min = self.min(tree);
        let range = self.max(tree) - min;
        let value = if travel > 0.0 {
            let scale = track_len / travel;
            clamped * (range / track_len) * scale + min
        } else {
            // degenerate track: no room to move, pin to the range start
            min
        };
        self.set_value(tree, value);
        tracing::trace!(
            "slide: pos={clamped:.1}/{travel:.1} value={value:.1} range={range:.1}"
        );
    }
}

/// Paint the track background and optional value readout
pub(crate) fn paint_track(tree: &SceneTree, id: NodeId, canvas: &mut Canvas) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let NodeKind::SliderTrack {
        value, render_value, ..
    } = node.kind
    else {
        return;
    };
    let (w, h) = (node.dimension.width(), node.dimension.height());
    canvas.fill_rect(Rect::new(0.0, 0.0, w, h), node.color);
    if render_value {
        canvas.draw_text(format!("{value:.0}"), w / 2.0, h / 2.0, h - 4.0, Color::BLACK);
    }
}

/// Paint the handle as a rounded pill, sized from the parent track
pub(crate) fn paint_handle(tree: &SceneTree, id: NodeId, canvas: &mut Canvas) {
    let Some(node) = tree.get(id) else {
        return;
    };
    let NodeKind::SliderHandle {
        rounding,
        rounding_fixed,
    } = node.kind
    else {
        return;
    };
    let Some(track_dim) = node.parent().and_then(|p| tree.dimension(p)) else {
        return;
    };

    let (tw, th) = (track_dim.width(), track_dim.height());
    let (w, h) = if tw > th {
        (tw / HANDLE_FRACTION - 2.0 * HANDLE_INSET, th - 2.0 * HANDLE_INSET)
    } else {
        (tw - 2.0 * HANDLE_INSET, th / HANDLE_FRACTION - 2.0 * HANDLE_INSET)
    };
    if w <= 0.0 || h <= 0.0 {
        // degenerate track: nothing to draw, but never an error
        return;
    }

    let cap = w.min(h) / 2.0;
    let radius = if !rounding_fixed || rounding > cap {
        cap
    } else {
        rounding
    };
    let mut inset = canvas.translate_scope(HANDLE_INSET, HANDLE_INSET);
    inset.fill_path(Path::rounded_rect(w, h, radius), node.color);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_slider(tree: &mut SceneTree, len: f32) -> Slider {
        let slider = Slider::new(tree, 0.0, 0.0, len, 15.0, 0.0);
        slider.set_min(tree, 0.0);
        slider.set_max(tree, 315.0);
        slider
    }

    #[test]
    fn value_hits_min_at_origin() {
        let mut tree = SceneTree::new();
        let slider = horizontal_slider(&mut tree, 100.0);
        tree.translate_to(slider.handle(), 0.0, 0.0);
        slider.on_slide(&mut tree);
        assert_eq!(slider.value(&tree), 0.0);
    }

    #[test]
    fn value_hits_max_at_far_clamp() {
        let mut tree = SceneTree::new();
        let slider = horizontal_slider(&mut tree, 100.0);
        // way past the end of the track; clamp pulls it back to the travel
        tree.translate_to(slider.handle(), 1000.0, 0.0);
        slider.on_slide(&mut tree);
        let travel = 100.0 - 100.0 / 5.0;
        assert_eq!(tree.position(slider.handle()).unwrap().x, travel);
        assert!((slider.value(&tree) - 315.0).abs() < 1e-3);
    }

    #[test]
    fn unit_length_track_still_reaches_max() {
        let mut tree = SceneTree::new();
        let slider = Slider::new(&mut tree, 0.0, 0.0, 1.0, 0.5, 0.0);
        slider.set_max(&mut tree, 40.0);
        tree.translate_to(slider.handle(), 1.0, 0.0);
        slider.on_slide(&mut tree);
        assert!((slider.value(&tree) - 40.0).abs() < 1e-3);
    }

    #[test]
    fn off_axis_coordinate_locked_to_zero() {
        let mut tree = SceneTree::new();
        let slider = horizontal_slider(&mut tree, 100.0);
        tree.translate_to(slider.handle(), 30.0, 9.0);
        slider.on_slide(&mut tree);
        assert_eq!(tree.position(slider.handle()).unwrap().y, 0.0);
    }

    #[test]
    fn vertical_orientation_uses_height() {
        let mut tree = SceneTree::new();
        let slider = Slider::new(&mut tree, 0.0, 0.0, 15.0, 200.0, 0.0);
        slider.set_max(&mut tree, 60.0);
        tree.translate_to(slider.handle(), 0.0, 160.0); // travel is exactly 160
        slider.on_slide(&mut tree);
        assert!((slider.value(&tree) - 60.0).abs() < 1e-3);
        let dim = tree.dimension(slider.handle()).unwrap();
        assert_eq!(dim.width(), 13.0);
        assert_eq!(dim.height(), 38.0);
    }

    #[test]
    fn degenerate_track_pins_value_to_min() {
        let mut tree = SceneTree::new();
        let slider = Slider::new(&mut tree, 0.0, 0.0, 0.0, 0.0, 0.0);
        slider.set_min(&mut tree, 7.0);
        slider.set_max(&mut tree, 3.0); // max < min is representable
        slider.on_slide(&mut tree);
        assert_eq!(slider.value(&tree), 7.0);
    }

    #[test]
    fn handle_is_draggable_and_replaceable() {
        let mut tree = SceneTree::new();
        let mut slider = horizontal_slider(&mut tree, 100.0);
        assert!(tree.get(slider.handle()).unwrap().draggable);

        let other = tree.insert(Node::new(NodeKind::SliderHandle {
            rounding: 4.0,
            rounding_fixed: true,
        }));
        let old = slider.handle();
        slider.set_handle(&mut tree, other, 10.0, 0.0);
        assert_eq!(slider.handle(), other);
        assert_eq!(tree.parent(other), Some(slider.track()));
        assert_eq!(tree.parent(old), None);

        // non-handle nodes are rejected
        let plain = tree.insert(Node::group());
        slider.set_handle(&mut tree, plain, 0.0, 0.0);
        assert_eq!(slider.handle(), other);
    }

    #[test]
    fn degenerate_handle_paints_nothing() {
        let mut tree = SceneTree::new();
        let slider = Slider::new(&mut tree, 0.0, 0.0, 4.0, 2.0, 0.0);
        let mut canvas = Canvas::new();
        paint_handle(&tree, slider.handle(), &mut canvas);
        assert!(canvas.commands().is_empty());
        assert!(canvas.is_balanced());
    }

    #[test]
    fn readout_painted_when_enabled() {
        let mut tree = SceneTree::new();
        let slider = horizontal_slider(&mut tree, 100.0);
        slider.set_render_value(&mut tree, true);
        slider.set_value(&mut tree, 42.0);
        let mut canvas = Canvas::new();
        paint_track(&tree, slider.track(), &mut canvas);
        use arbor_paint::PaintCommand;
        let readout = canvas.commands().iter().any(
            |c| matches!(c, PaintCommand::DrawText { text, .. } if text == "42"),
        );
        assert!(readout);
    }
}
