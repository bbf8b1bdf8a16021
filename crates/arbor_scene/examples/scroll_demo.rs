//! Scroll-pane demo: a 200x200 pane over a 500x500 grid of colored squares.
//!
//! Run with `RUST_LOG=debug` to watch the viewport synchronization.

use arbor_core::events::{event_types, Event, EventData, EventDispatcher};
use arbor_scene::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut tree = SceneTree::new();
    let mut pane = ScrollPane::with_config(
        &mut tree,
        10.0,
        10.0,
        200.0,
        200.0,
        ScrollPaneConfig {
            rounding: 6.0,
            edge_fade: Some(12.0),
            ..Default::default()
        },
    )
    .on_scroll_end(|x, y| println!("scrolled to ({x:.0}, {y:.0})"));

    // a 5x5 grid of squares, 500x500 overall
    let content = tree.insert(Node::group().sized(500.0, 500.0));
    for row in 0..5 {
        for col in 0..5 {
            let hue = (row * 5 + col) as f32 / 25.0;
            let square = tree.insert(
                Node::rect(90.0, 90.0, Color::new(hue, 0.4, 1.0 - hue, 1.0))
                    .at(col as f32 * 100.0, row as f32 * 100.0),
            );
            tree.add_child(content, square);
        }
    }
    pane.add_to_view_port(&mut tree, content);

    println!(
        "viewport {}x{}, x range 0..{}, y range 0..{}",
        tree.dimension(pane.viewport()).unwrap().width(),
        tree.dimension(pane.viewport()).unwrap().height(),
        pane.x_slider().max(&tree),
        pane.y_slider().max(&tree),
    );

    // drag the horizontal handle a few steps, then release
    for _ in 0..4 {
        let step = Event::new(
            event_types::DRAG,
            target_id(pane.x_slider().handle()),
            EventData::Drag { dx: 25.0, dy: 0.0 },
        );
        pane.handle_event(&mut tree, &step);
        println!(
            "x value {:.1}, content at {:.1}",
            pane.x_slider().value(&tree),
            tree.position(content).unwrap().x
        );
    }
    let release = Event::new(
        event_types::DRAG_END,
        target_id(pane.x_slider().handle()),
        EventData::None,
    );
    pane.handle_event(&mut tree, &release);

    // render one frame and report the recorded command stream
    let dispatcher = EventDispatcher::new();
    let mut canvas = Canvas::new();
    render_tree(&tree, pane.root(), &mut canvas, &dispatcher);
    println!("frame recorded {} paint commands", canvas.take_commands().len());
}
