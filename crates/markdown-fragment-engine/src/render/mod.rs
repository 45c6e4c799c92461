//! # Rendering
//!
//! Markdown to HTML fragment conversion as a fixed sequence of whole-buffer
//! stages.
//!
//! ## Pipeline
//!
//! 1. **Line splitting** (`lines`): raw text becomes the initial buffer
//! 2. **Block stages** (`blocks`): headings, blockquotes, rules, emphasis,
//!    fenced code, lists, tables, paragraphs
//! 3. **Span stages** (`spans`): line breaks, images, links, code spans
//! 4. **Sentinel resolution** (`sentinel`): restores fenced-code newlines
//!
//! The order is load-bearing: every stage assumes earlier stages have turned
//! their syntax into literal HTML. See [`Stage::STANDARD_ORDER`].
//!
//! ## Key Invariants
//!
//! - Each stage is a pure function of the buffer (and [`RenderOptions`])
//! - Nesting state lives on a [`stack::ConstructStack`] local to one stage run
//! - Malformed input never fails; it degrades into best-effort HTML
//! - The output is not sanitised; callers escape or sandbox it as needed

pub mod blocks;
pub mod lines;
pub mod options;
pub mod pipeline;
pub mod sentinel;
pub mod spans;
pub mod stack;

pub use options::RenderOptions;
pub use pipeline::{Pipeline, Stage, StageOutput, Trace};

/// Renders markdown to an HTML fragment with the standard stage order.
pub fn render(markdown: &str, options: &RenderOptions) -> String {
    pipeline::run_stages(&Stage::STANDARD_ORDER, options, markdown)
}
