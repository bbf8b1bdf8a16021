//! Command-recording canvas
//!
//! Drawing is recorded, not rasterized: every call appends a [`PaintCommand`]
//! to the canvas. Clip and translation state are scoped through RAII guards,
//! so the matching pop is emitted on every exit path, including early
//! returns while a scope is open.

use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::gradient::LinearGradient;
use crate::path::{Path, Rect};

/// One entry in the recorded command stream
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect { rect: Rect, color: Color },
    FillPath { path: Path, color: Color },
    FillGradientRect { rect: Rect, gradient: LinearGradient },
    DrawText { text: String, x: f32, y: f32, size: f32, color: Color },
    PushClip { rect: Rect },
    PopClip,
    PushTranslate { x: f32, y: f32 },
    PopTranslate,
}

/// Records paint commands for one frame
#[derive(Default)]
pub struct Canvas {
    commands: Vec<PaintCommand>,
    clip_depth: usize,
    translate_depth: usize,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, leaving the canvas empty
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        tracing::trace!("canvas frame: {} commands", self.commands.len());
        std::mem::take(&mut self.commands)
    }

    /// Current clip nesting depth
    pub fn clip_depth(&self) -> usize {
        self.clip_depth
    }

    /// True when every push has been matched by a pop
    pub fn is_balanced(&self) -> bool {
        self.clip_depth == 0 && self.translate_depth == 0
    }

    // === Shape drawing ===

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    pub fn fill_path(&mut self, path: Path, color: Color) {
        if path.is_empty() {
            return;
        }
        self.commands.push(PaintCommand::FillPath { path, color });
    }

    pub fn fill_gradient_rect(&mut self, rect: Rect, gradient: LinearGradient) {
        if rect.is_empty() {
            return;
        }
        self.commands
            .push(PaintCommand::FillGradientRect { rect, gradient });
    }

    pub fn draw_text(&mut self, text: impl Into<String>, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(PaintCommand::DrawText {
            text: text.into(),
            x,
            y,
            size,
            color,
        });
    }

    // === Scoped state ===

    /// Constrain subsequent drawing to `rect`. The clip is released when the
    /// returned scope drops.
    pub fn clip_scope(&mut self, rect: Rect) -> ClipScope<'_> {
        self.clip_depth += 1;
        self.commands.push(PaintCommand::PushClip { rect });
        ClipScope { canvas: self }
    }

    /// Offset subsequent drawing by `(x, y)` until the returned scope drops.
    pub fn translate_scope(&mut self, x: f32, y: f32) -> TranslateScope<'_> {
        self.translate_depth += 1;
        self.commands.push(PaintCommand::PushTranslate { x, y });
        TranslateScope { canvas: self }
    }
}

/// Active clip region; pops the clip on drop
pub struct ClipScope<'a> {
    canvas: &'a mut Canvas,
}

impl Drop for ClipScope<'_> {
    fn drop(&mut self) {
        self.canvas.clip_depth -= 1;
        self.canvas.commands.push(PaintCommand::PopClip);
    }
}

impl Deref for ClipScope<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for ClipScope<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

/// Active translation; pops the transform on drop
pub struct TranslateScope<'a> {
    canvas: &'a mut Canvas,
}

impl Drop for TranslateScope<'_> {
    fn drop(&mut self) {
        self.canvas.translate_depth -= 1;
        self.canvas.commands.push(PaintCommand::PopTranslate);
    }
}

impl Deref for TranslateScope<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for TranslateScope<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_scope_pops_on_drop() {
        let mut canvas = Canvas::new();
        {
            let mut clip = canvas.clip_scope(Rect::new(0.0, 0.0, 10.0, 10.0));
            assert_eq!(clip.clip_depth(), 1);
            clip.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::BLACK);
        }
        assert!(canvas.is_balanced());
        assert_eq!(
            canvas.commands().last(),
            Some(&PaintCommand::PopClip)
        );
    }

    #[test]
    fn clip_pops_on_early_exit() {
        fn draw(canvas: &mut Canvas, bail: bool) {
            let mut clip = canvas.clip_scope(Rect::new(0.0, 0.0, 1.0, 1.0));
            if bail {
                return;
            }
            clip.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        }
        let mut canvas = Canvas::new();
        draw(&mut canvas, true);
        assert!(canvas.is_balanced());
        assert_eq!(canvas.commands().len(), 2); // push + pop, nothing drawn
    }

    #[test]
    fn nested_scopes_unwind_in_order() {
        let mut canvas = Canvas::new();
        {
            let mut clip = canvas.clip_scope(Rect::new(0.0, 0.0, 10.0, 10.0));
            let _shift = clip.translate_scope(2.0, 3.0);
        }
        let cmds = canvas.commands();
        assert!(matches!(cmds[0], PaintCommand::PushClip { .. }));
        assert!(matches!(cmds[1], PaintCommand::PushTranslate { .. }));
        assert_eq!(cmds[2], PaintCommand::PopTranslate);
        assert_eq!(cmds[3], PaintCommand::PopClip);
    }

    #[test]
    fn empty_shapes_are_skipped() {
        let mut canvas = Canvas::new();
        canvas.fill_rect(Rect::new(0.0, 0.0, 0.0, 10.0), Color::BLACK);
        canvas.fill_path(Path::new(), Color::BLACK);
        assert!(canvas.commands().is_empty());
    }
}
