//! Arbor core
//!
//! Foundational primitives shared by the scene crates:
//!
//! - **Geometry**: mutable [`Dimension`] and [`Position`] value objects, one
//!   owned pair per scene node
//! - **Events**: pointer/drag event types and a registration-based
//!   [`EventDispatcher`]

pub mod events;
pub mod geometry;

pub use events::{Event, EventData, EventDispatcher, EventType};
pub use geometry::{Dimension, Position};
