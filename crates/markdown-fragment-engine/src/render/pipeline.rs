use serde::Serialize;

use super::{
    RenderOptions,
    blocks::{block_quote, code_fence, heading, list, paragraph, table, thematic_break},
    lines::split_lines,
    sentinel,
    spans::{code_span, emphasis, image, line_break, link},
};

/// One substitution pass over the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Headings,
    BlockQuotes,
    HorizontalRules,
    Emphasis,
    CodeFences,
    Lists,
    Tables,
    Paragraphs,
    LineBreaks,
    Images,
    Links,
    CodeSpans,
    Sentinels,
}

impl Stage {
    /// The order the stages must run in. Later stages rely on earlier ones
    /// having already turned their syntax into literal HTML.
    pub const STANDARD_ORDER: [Stage; 13] = [
        Stage::Headings,
        Stage::BlockQuotes,
        Stage::HorizontalRules,
        Stage::Emphasis,
        Stage::CodeFences,
        Stage::Lists,
        Stage::Tables,
        Stage::Paragraphs,
        Stage::LineBreaks,
        Stage::Images,
        Stage::Links,
        Stage::CodeSpans,
        Stage::Sentinels,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Stage::Headings => "headings",
            Stage::BlockQuotes => "block_quotes",
            Stage::HorizontalRules => "horizontal_rules",
            Stage::Emphasis => "emphasis",
            Stage::CodeFences => "code_fences",
            Stage::Lists => "lists",
            Stage::Tables => "tables",
            Stage::Paragraphs => "paragraphs",
            Stage::LineBreaks => "line_breaks",
            Stage::Images => "images",
            Stage::Links => "links",
            Stage::CodeSpans => "code_spans",
            Stage::Sentinels => "sentinels",
        }
    }

    pub fn apply(self, buffer: &str, options: &RenderOptions) -> String {
        match self {
            Stage::Headings => heading::transform(buffer),
            Stage::BlockQuotes => block_quote::transform(buffer, &options.blockquote_class),
            Stage::HorizontalRules => thematic_break::transform(buffer),
            Stage::Emphasis => emphasis::transform(buffer),
            Stage::CodeFences => code_fence::transform(buffer),
            Stage::Lists => list::transform(buffer),
            Stage::Tables => table::transform(buffer, &options.table_class),
            Stage::Paragraphs => paragraph::transform(buffer),
            Stage::LineBreaks => line_break::transform(buffer),
            Stage::Images => image::transform(buffer),
            Stage::Links => link::transform(buffer),
            Stage::CodeSpans => code_span::transform(buffer),
            Stage::Sentinels => sentinel::resolve(buffer),
        }
    }
}

/// Buffer contents right after one stage ran.
#[derive(Debug, Clone, Serialize)]
pub struct StageOutput {
    pub stage: Stage,
    pub buffer: String,
}

/// Every intermediate buffer of one run, for debugging stage interactions.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    /// The buffer the line splitter produced.
    pub input: String,
    pub stages: Vec<StageOutput>,
    pub html: String,
}

/// An ordered list of stages plus the options they render with.
///
/// All state lives in locals of a single run, so one pipeline can be shared
/// between threads and run any number of times.
#[derive(Debug, Clone)]
pub struct Pipeline {
    stages: Vec<Stage>,
    options: RenderOptions,
}

impl Pipeline {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_stages(Stage::STANDARD_ORDER.to_vec(), options)
    }

    pub fn standard() -> Self {
        Self::new(RenderOptions::default())
    }

    /// A pipeline with a custom stage order. Mostly useful for showing what
    /// a different order would break.
    pub fn with_stages(stages: Vec<Stage>, options: RenderOptions) -> Self {
        Self { stages, options }
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn run(&self, markdown: &str) -> String {
        run_stages(&self.stages, &self.options, markdown)
    }

    pub fn run_traced(&self, markdown: &str) -> Trace {
        let input = split_lines(markdown).join("\n");
        let mut buffer = input.clone();
        let mut stages = Vec::with_capacity(self.stages.len());

        for &stage in &self.stages {
            buffer = stage.apply(&buffer, &self.options);
            stages.push(StageOutput {
                stage,
                buffer: buffer.clone(),
            });
        }

        Trace {
            input,
            stages,
            html: buffer,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

pub(crate) fn run_stages(stages: &[Stage], options: &RenderOptions, markdown: &str) -> String {
    let mut buffer = split_lines(markdown).join("\n");
    log::debug!(
        "rendering {} bytes through {} stages",
        buffer.len(),
        stages.len()
    );

    for &stage in stages {
        buffer = stage.apply(&buffer, options);
        log::trace!("{}: {} bytes", stage.name(), buffer.len());
    }

    buffer
}
