//! # Span Stages
//!
//! Pure substitutions over the whole buffer once block structure is settled.
//! Emphasis is the exception: it is line-based and runs among the block
//! stages, before fenced code is turned into `<pre>`.
//!
//! - **`emphasis`**: `**`, `__`, `*`, `_`, `~~`
//! - **`line_break`**: remaining `\n` to `<br />`
//! - **`image`**: `![alt](url "title" =WxH)`
//! - **`link`**: `[text](url)`
//! - **`code_span`**: `` `code` ``

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod line_break;
pub mod link;

pub use code_span::CodeSpan;
