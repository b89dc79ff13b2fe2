//! View rendering seam
//!
//! Controllers re-render after every change by handing their current state to
//! a [`Render`] implementation. The state types carry everything a view needs,
//! so the same core can back a terminal, a GUI or a test recorder.

/// Draws a view of `T`
pub trait Render<T: ?Sized> {
    fn render(&mut self, state: &T);
}

/// A view that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoView;

impl<T: ?Sized> Render<T> for NoView {
    fn render(&mut self, _state: &T) {}
}
