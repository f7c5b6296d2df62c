use crate::surface::Surface;
use crate::viewport::Viewport;

/// A self-contained animation driven one frame at a time.
///
/// The browser loop calls `tick` from `requestAnimationFrame`; tests call it
/// a fixed number of times against a recording surface.
pub trait Field {
    fn viewport(&self) -> Viewport;
    /// Adopt new bounds. Collection sizes never change.
    fn resize(&mut self, viewport: Viewport);
    /// Advance every entity once and draw the frame.
    fn tick(&mut self, surface: &mut dyn Surface);

    /// Resize only if `viewport` differs from the current bounds.
    /// Returns true when a resize happened.
    fn fit(&mut self, viewport: Viewport) -> bool {
        if viewport == self.viewport() {
            return false;
        }
        self.resize(viewport);
        true
    }
}
