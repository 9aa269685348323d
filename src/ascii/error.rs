//! Render precondition failures.

/// Errors returned by [`Renderer::render`](super::Renderer::render).
///
/// Both variants are raised before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(
        "image of {width}x{height} is too small for {mode} rendering \
         (needs width >= 1 and height >= {min_height})"
    )]
    InsufficientImageSize {
        /// Renderer that rejected the grid
        mode: &'static str,
        width: usize,
        height: usize,
        /// Cell height of the renderer
        min_height: usize,
    },

    #[error("image of {width}x{height} is too small for braille rendering (no complete 2x4 cell)")]
    ImageTooSmall { width: usize, height: usize },
}
