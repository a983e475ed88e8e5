//! Document assembly.
//!
//! The register core only produces [`DrawInstruction`]s; placing them onto
//! the template pages is the job of a [`DocumentAssembler`]. [`PdfTemplate`]
//! is the production implementation backed by `lopdf`.

mod overlay;
mod template;

use crate::error::EngineResult;
use crate::models::DrawInstruction;

pub use overlay::{FONT_RESOURCE, encode_text, overlay_content, text_matrix};
pub use template::{DEFAULT_MEDIA_BOX, PdfTemplate, partial_path};

/// Places text labels onto the pages of a template.
pub trait DocumentAssembler {
    /// Number of pages in the template.
    fn page_count(&self) -> usize;

    /// Draws `draws` on the page at `page_index` (zero-based).
    ///
    /// An empty `draws` slice leaves the page untouched.
    fn overlay_page(&mut self, page_index: usize, draws: &[DrawInstruction]) -> EngineResult<()>;
}
