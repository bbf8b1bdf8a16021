//! Arbor scene graph
//!
//! A retained tree of 2D nodes stored in a slotmap arena, a render traversal
//! that replays the tree into an [`arbor_paint::Canvas`], and the scroll-pane
//! widget family: a clipping viewport plus two axis sliders that pan an
//! oversized contained subtree.
//!
//! # Example
//!
//! ```rust
//! use arbor_scene::prelude::*;
//!
//! let mut tree = SceneTree::new();
//! let mut pane = ScrollPane::new(&mut tree, 0.0, 0.0, 200.0, 200.0);
//!
//! let content = tree.insert(Node::rect(500.0, 500.0, Color::from_hex(0x2266AA)));
//! pane.add_to_view_port(&mut tree, content);
//!
//! // Content overflows on both axes, so both sliders are up.
//! assert!(pane.x_slider().is_visible(&tree));
//! assert_eq!(pane.x_slider().max(&tree), 315.0);
//! ```

pub mod render;
pub mod scroll_pane;
pub mod slider;
pub mod tree;
pub mod viewport;

pub use render::{render_node, render_tree};
pub use scroll_pane::{ScrollPane, ScrollPaneConfig};
pub use slider::Slider;
pub use tree::{target_id, Node, NodeId, NodeKind, SceneTree};

pub mod prelude {
    pub use crate::render::{render_node, render_tree};
    pub use crate::scroll_pane::{ScrollPane, ScrollPaneConfig};
    pub use crate::slider::Slider;
    pub use crate::tree::{target_id, Node, NodeId, NodeKind, SceneTree};
    pub use arbor_core::{Dimension, Position};
    pub use arbor_paint::{Canvas, Color};
}
