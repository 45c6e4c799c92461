//! # Block Stages
//!
//! Line-oriented stages that turn whole-line constructs into HTML. Each one
//! splits the buffer on `\n`, walks the lines once, and joins its output
//! back into a single buffer for the next stage.
//!
//! ## Modules
//!
//! - **`heading`**: `#`..`######` lines
//! - **`block_quote`**: `>` runs, a stack machine keyed by `>` count
//! - **`thematic_break`**: `---` rules
//! - **`code_fence`**: fenced code, one bit of state plus the line sentinel
//! - **`list`**: `-` and `1.` items, a stack machine keyed by indentation
//! - **`table`**: `| `-prefixed rows collected into a table
//! - **`paragraph`**: `<p>` chunks split on blank-line pairs
//!
//! ## Key Invariants
//!
//! - Nesting stages close every tag they open, at the latest at end of input
//! - A stage given text with none of its triggers returns it unchanged

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod paragraph;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceEvent, FenceSig, FenceState};
pub use heading::Heading;
pub use list::{ListKind, ListLine};
pub use table::Table;
