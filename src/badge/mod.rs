//! Badge rendering
//!
//! Turns a `(logo, label, content)` triple into a self-contained SVG badge in
//! the shields.io "flat" style:
//!
//! - [`char_widths`]: Verdana 110px advance widths
//! - [`text_width`]: width measurement on the 11px odd grid
//! - [`layout`]: box widths and text anchors
//! - [`svg`]: document assembly
//!
//! Rendering is pure; identical requests always produce identical bytes.

pub mod char_widths;
pub mod layout;
pub mod logo;
pub mod svg;
pub mod text_width;

pub use layout::BadgeLayout;
pub use text_width::{TextWidthCalculator, measure};

use sha2::{Digest, Sha256};

/// A single badge to render.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BadgeRequest {
    pub logo: bool,
    pub label: String,
    pub content: String,
}

impl BadgeRequest {
    pub fn new(logo: bool, label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            logo,
            label: label.into(),
            content: content.into(),
        }
    }

    /// Accessible title, `"{label}: {content}"` even when a side is empty.
    pub fn title(&self) -> String {
        format!("{}: {}", self.label, self.content)
    }

    /// Stable cache key for this request.
    ///
    /// SHA-256 over a length-prefixed encoding, so `("a:b", "c")` and
    /// `("a", "b:c")` never collide.
    pub fn cache_key(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update([u8::from(self.logo)]);
        hasher.update((self.label.len() as u64).to_le_bytes());
        hasher.update(self.label.as_bytes());
        hasher.update((self.content.len() as u64).to_le_bytes());
        hasher.update(self.content.as_bytes());
        hex::encode(hasher.finalize())
    }
}

/// Renders badge documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadgeRenderer {
    calculator: TextWidthCalculator,
}

impl BadgeRenderer {
    pub fn new(calculator: TextWidthCalculator) -> Self {
        Self { calculator }
    }

    pub fn layout(&self, request: &BadgeRequest) -> BadgeLayout {
        BadgeLayout::compute(request, &self.calculator)
    }

    pub fn render(&self, request: &BadgeRequest) -> String {
        svg::render_document(request, &self.layout(request))
    }
}

/// Render a badge with the default Verdana metrics.
pub fn generate_badge(logo: bool, label: &str, content: &str) -> String {
    BadgeRenderer::default().render(&BadgeRequest::new(logo, label, content))
}
