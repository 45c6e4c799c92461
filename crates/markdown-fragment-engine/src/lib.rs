pub mod io;
pub mod models;
pub mod render;


// Re-export key types for easier usage
pub use io::*;
pub use models::markdown_file::*;
pub use render::{Pipeline, RenderOptions, Stage, StageOutput, Trace, render};
