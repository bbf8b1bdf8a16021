//! Scroll pane: viewport + two axis sliders
//!
//! The pane owns a clipping viewport and an X/Y slider pair, and holds a
//! non-owning id to the single contained node it pans. All geometry
//! synchronization funnels through [`ScrollPane::update_view_port`], which
//! runs per axis in a fixed order: visibility transition, slider
//! repositioning, range reset, handle resync. Showing a slider steals
//! exactly `slider_thickness` from the viewport's cross axis and hiding it
//! gives the same amount back, so total pane size never changes.

use arbor_core::events::{event_types, Event, EventData};
use arbor_core::Dimension;

use crate::slider::Slider;
use crate::tree::{target_id, Node, NodeId, NodeKind, SceneTree};

/// Pane construction parameters
#[derive(Clone, Copy, Debug)]
pub struct ScrollPaneConfig {
    /// Track width of both sliders
    pub slider_thickness: f32,
    /// Corner radius propagated to the slider handles
    pub rounding: f32,
    /// Maximum length of the viewport's cosmetic edge-fade strips;
    /// `None` disables the effect
    pub edge_fade: Option<f32>,
}

impl Default for ScrollPaneConfig {
    fn default() -> Self {
        Self {
            slider_thickness: 15.0,
            rounding: 0.0,
            edge_fade: None,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Axis {
    X,
    Y,
}

/// Scrollable viewport widget
pub struct ScrollPane {
    root: NodeId,
    viewport: NodeId,
    x_slider: Slider,
    y_slider: Slider,
    contained: Option<NodeId>,
    config: ScrollPaneConfig,
    on_scroll_end: Option<Box<dyn FnMut(f32, f32) + Send>>,
}

impl ScrollPane {
    pub fn new(tree: &mut SceneTree, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::with_config(tree, x, y, width, height, ScrollPaneConfig::default())
    }

    /// Build the pane root, viewport, and both sliders eagerly; sliders
    /// start hidden and non-traversable until content overflows.
    pub fn with_config(
        tree: &mut SceneTree,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        config: ScrollPaneConfig,
    ) -> Self {
        let root = tree.insert(Node::group().at(x, y).sized(width, height));
        let viewport = tree.insert(
            Node::new(NodeKind::Viewport {
                fade: config.edge_fade,
            })
            .sized(width, height),
        );
        tree.add_child(root, viewport);

        // horizontal track hugs the bottom edge, vertical the right edge
        let thickness = config.slider_thickness;
        let x_slider = Slider::new(tree, 0.0, height, width, thickness, config.rounding);
        let y_slider = Slider::new(tree, width, 0.0, thickness, height, config.rounding);
        tree.add_child(root, x_slider.track());
        tree.add_child(root, y_slider.track());
        x_slider.set_visible(tree, false);
        y_slider.set_visible(tree, false);

        Self {
            root,
            viewport,
            x_slider,
            y_slider,
            contained: None,
            config,
            on_scroll_end: None,
        }
    }

    /// Register the scroll-gesture-end extension point at construction
    pub fn on_scroll_end<F>(mut self, handler: F) -> Self
    where
        F: FnMut(f32, f32) + Send + 'static,
    {
        self.on_scroll_end = Some(Box::new(handler));
        self
    }

    // === Accessors ===

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn viewport(&self) -> NodeId {
        self.viewport
    }

    pub fn x_slider(&self) -> Slider {
        self.x_slider
    }

    pub fn y_slider(&self) -> Slider {
        self.y_slider
    }

    pub fn contained(&self) -> Option<NodeId> {
        self.contained
    }

    pub fn slider_thickness(&self) -> f32 {
        self.config.slider_thickness
    }

    /// True when `id` is one of the pane's slider handles
    pub fn is_handle(&self, id: NodeId) -> bool {
        id == self.x_slider.handle() || id == self.y_slider.handle()
    }

    // === Content ===

    /// Hand the pane a node to scroll. Stale ids are ignored; handing over a
    /// new node while occupied clears the previous content first, so the
    /// viewport never holds two contained subtrees.
    pub fn add_to_view_port(&mut self, tree: &mut SceneTree, node: NodeId) {
        if !tree.contains(node) {
            tracing::warn!("add_to_view_port ignored: stale node id");
            return;
        }
        if self.contained.is_some() {
            self.clear(tree);
        }
        self.contained = Some(node);
        tree.add_child(self.viewport, node);
        self.update_view_port(tree);
    }

    /// Detach all viewport children; the nodes stay alive, owned by the
    /// application. Safe to call when already empty.
    pub fn clear(&mut self, tree: &mut SceneTree) {
        while let Some(&child) = tree.children(self.viewport).first() {
            tree.remove_child(self.viewport, child);
        }
        self.contained = None;
    }

    // === Geometry synchronization ===

    /// Re-derive slider visibility, slider geometry, and scroll ranges from
    /// the current viewport and content extents. No-op without content.
    ///
    /// Ranges and scroll position reset to the origin on every structural
    /// change; that guarantees the content is fully in-bounds after a
    /// shrink.
    pub fn update_view_port(&mut self, tree: &mut SceneTree) {
        let Some(contained) = self.contained else {
            return;
        };
        let Some(content) = tree.dimension(contained) else {
            return;
        };

        // vertical slider first: it steals viewport width that the
        // horizontal comparison below must see
        let Some(vp) = tree.dimension(self.viewport) else {
            return;
        };
        if content.height() > vp.height() {
            self.show_slider(tree, Axis::Y);
        } else {
            self.hide_slider(tree, Axis::Y);
        }
        let Some(vp) = tree.dimension(self.viewport) else {
            return;
        };
        if content.width() > vp.width() {
            self.show_slider(tree, Axis::X);
        } else {
            self.hide_slider(tree, Axis::X);
        }

        let Some(vp) = tree.dimension(self.viewport) else {
            return;
        };
        let thickness = self.config.slider_thickness;
        if self.x_slider.is_visible(tree) {
            self.x_slider
                .set_geometry(tree, 0.0, vp.height(), vp.width(), thickness);
            self.reset_range(tree, self.x_slider, content.width() - vp.width());
            self.x_slider.on_slide(tree);
        }
        if self.y_slider.is_visible(tree) {
            self.y_slider
                .set_geometry(tree, vp.width(), 0.0, thickness, vp.height());
            self.reset_range(tree, self.y_slider, content.height() - vp.height());
            self.y_slider.on_slide(tree);
        }

        self.on_slider_translate(tree);
        tracing::debug!(
            "viewport update: content {:.0}x{:.0} viewport {:.0}x{:.0} sliders x={} y={}",
            content.width(),
            content.height(),
            vp.width(),
            vp.height(),
            self.x_slider.is_visible(tree),
            self.y_slider.is_visible(tree),
        );
    }

    /// Reset a slider to `[0, span]` with the handle re-homed at the origin
    fn reset_range(&self, tree: &mut SceneTree, slider: Slider, span: f32) {
        slider.set_min(tree, 0.0);
        slider.set_max(tree, span);
        tree.translate_to(slider.handle(), 0.0, 0.0);
        slider.set_value(tree, 0.0);
    }

    fn slider(&self, axis: Axis) -> Slider {
        match axis {
            Axis::X => self.x_slider,
            Axis::Y => self.y_slider,
        }
    }

    fn show_slider(&self, tree: &mut SceneTree, axis: Axis) {
        let slider = self.slider(axis);
        if slider.is_visible(tree) {
            return;
        }
        slider.set_visible(tree, true);
        let t = self.config.slider_thickness;
        match axis {
            Axis::X => tree.resize_with(self.viewport, 0.0, -t),
            Axis::Y => tree.resize_with(self.viewport, -t, 0.0),
        }
        tracing::debug!("slider {axis:?} shown, viewport compensated by {t}");
    }

    fn hide_slider(&self, tree: &mut SceneTree, axis: Axis) {
        let slider = self.slider(axis);
        if !slider.is_visible(tree) {
            return;
        }
        slider.set_visible(tree, false);
        let t = self.config.slider_thickness;
        match axis {
            Axis::X => tree.resize_with(self.viewport, 0.0, t),
            Axis::Y => tree.resize_with(self.viewport, t, 0.0),
        }
        // a hidden axis contributes no pan
        self.reset_range(tree, slider, 0.0);
        tracing::debug!("slider {axis:?} hidden, viewport restored by {t}");
    }

    // === Resizing ===

    pub fn resize_to(&mut self, tree: &mut SceneTree, width: f32, height: f32) {
        self.resize(tree, |d| d.resize_to(width, height));
    }

    pub fn resize_by(&mut self, tree: &mut SceneTree, width_factor: f32, height_factor: f32) {
        self.resize(tree, |d| d.resize_by(width_factor, height_factor));
    }

    pub fn resize_with(&mut self, tree: &mut SceneTree, delta_width: f32, delta_height: f32) {
        self.resize(tree, |d| d.resize_with(delta_width, delta_height));
    }

    /// All resize flavors funnel through here: drop slider compensation so
    /// pane and viewport re-enter lockstep, apply the same dimension op to
    /// both in one transaction, resynchronize, and force both handles to
    /// re-derive their geometry against the new track sizes.
    fn resize(&mut self, tree: &mut SceneTree, op: impl Fn(&mut Dimension)) {
        self.hide_slider(tree, Axis::X);
        self.hide_slider(tree, Axis::Y);
        if let Some(d) = tree.dimension_mut(self.root) {
            op(d);
        }
        if let Some(d) = tree.dimension_mut(self.viewport) {
            op(d);
        }
        self.update_view_port(tree);
        self.y_slider.on_slide(tree);
        self.x_slider.on_slide(tree);
    }

    // === Input ===

    /// Route a drag event to the pane. Returns `true` when the event
    /// targeted one of the pane's handles and was consumed.
    pub fn handle_event(&mut self, tree: &mut SceneTree, event: &Event) -> bool {
        let handle_target = event.target == target_id(self.x_slider.handle())
            || event.target == target_id(self.y_slider.handle());
        if !handle_target {
            return false;
        }
        match event.event_type {
            event_types::DRAG => {
                let slider = if event.target == target_id(self.x_slider.handle()) {
                    self.x_slider
                } else {
                    self.y_slider
                };
                // hidden sliders are non-traversable; never scroll through one
                if !slider.is_visible(tree) {
                    return false;
                }
                if let EventData::Drag { dx, dy } = event.data {
                    tree.translate_with(slider.handle(), dx, dy);
                    slider.on_slide(tree);
                    self.on_slider_translate(tree);
                }
                true
            }
            event_types::DRAG_END => {
                self.on_slider_translate_end(tree);
                true
            }
            _ => false,
        }
    }

    /// Keep the contained node's position bound to the slider values:
    /// scrolling right/down moves content left/up by exactly the scalar.
    fn on_slider_translate(&self, tree: &mut SceneTree) {
        let Some(contained) = self.contained else {
            return;
        };
        let x = self.x_slider.value(tree);
        let y = self.y_slider.value(tree);
        tree.translate_to(contained, -x, -y);
    }

    fn on_slider_translate_end(&mut self, tree: &mut SceneTree) {
        let x = self.x_slider.value(tree);
        let y = self.y_slider.value(tree);
        tracing::debug!("scroll gesture ended at ({x:.1}, {y:.1})");
        if let Some(handler) = self.on_scroll_end.as_mut() {
            handler(x, y);
        }
    }
}
