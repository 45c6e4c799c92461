use std::sync::LazyLock;

use regex::Regex;

use crate::render::{lines::LineBuffer, sentinel::CODE_LINE_SENTINEL};

/// What a line starting with a fence looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig<'a> {
    /// Only the backticks.
    Bare,
    /// Backticks followed by a language tag.
    Tagged(&'a str),
    /// Backticks followed by something that is not a language tag.
    Untagged,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn sig(line: &str) -> Option<FenceSig<'_>> {
        let rest = line.trim().strip_prefix(Self::BACKTICKS)?;
        if rest.trim().is_empty() {
            return Some(FenceSig::Bare);
        }
        match LANG.captures(rest).and_then(|caps| caps.get(1)) {
            Some(lang) => Some(FenceSig::Tagged(lang.as_str())),
            None => Some(FenceSig::Untagged),
        }
    }

    /// Only a bare fence closes an open block.
    pub fn closes(sig: Option<FenceSig<'_>>) -> bool {
        matches!(sig, Some(FenceSig::Bare))
    }

    pub fn open_tag(lang: Option<&str>) -> String {
        match lang {
            Some(lang) => format!("<pre><code class=\"lang-{lang}\">"),
            None => "<pre><code>".to_string(),
        }
    }

    pub const CLOSE_TAG: &'static str = "</code></pre>";
}

static LANG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)").expect("Invalid fence language regex"));

/// Role of a line relative to fenced code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceEvent<'a> {
    Open { lang: Option<&'a str> },
    Close,
    /// A line inside an open block.
    Content,
    /// A line outside any block.
    Outside,
}

/// The one bit of state fenced code needs: are we inside a block.
///
/// Shared by every stage that must know which lines are fenced content.
#[derive(Debug, Default, Clone, Copy)]
pub struct FenceState {
    in_code: bool,
}

impl FenceState {
    pub fn in_code(&self) -> bool {
        self.in_code
    }

    pub fn advance<'l>(&mut self, line: &'l str) -> FenceEvent<'l> {
        let sig = CodeFence::sig(line);
        if self.in_code {
            if CodeFence::closes(sig) {
                self.in_code = false;
                FenceEvent::Close
            } else {
                FenceEvent::Content
            }
        } else {
            match sig {
                Some(sig) => {
                    self.in_code = true;
                    let lang = match sig {
                        FenceSig::Tagged(lang) => Some(lang),
                        FenceSig::Bare | FenceSig::Untagged => None,
                    };
                    FenceEvent::Open { lang }
                }
                None => FenceEvent::Outside,
            }
        }
    }
}

/// Converts fenced blocks to `<pre><code>`.
///
/// Lines inside a block end with [`CODE_LINE_SENTINEL`] rather than a
/// newline marker so the line-break stage leaves them alone. A fence left
/// open at the end of input stays open.
pub fn transform(buffer: &str) -> String {
    let mut state = FenceState::default();
    let mut out = LineBuffer::new();

    for line in buffer.split('\n') {
        match state.advance(line) {
            FenceEvent::Open { lang } => out.push(CodeFence::open_tag(lang)),
            FenceEvent::Close => out.push(CodeFence::CLOSE_TAG),
            FenceEvent::Content => {
                out.push(line);
                out.push(CODE_LINE_SENTINEL);
            }
            FenceEvent::Outside => out.push_line(line),
        }
    }

    out.trim_trailing_break();
    out.finish()
}
