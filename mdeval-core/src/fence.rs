//! Fenced code block context classification.
//!
//! Decides whether a given line of a document sits inside an open
//! triple-backtick fence. The answer drives how an evaluation result is
//! spliced back: annotated in place when inside an existing fence, wrapped
//! in a fresh fenced block when not.

use crate::editor::Editor;

/// Line prefix that opens or closes a fenced code block. Language tags after
/// the backticks (e.g. \`\`\`ruby) do not affect marker detection. Tilde
/// fences are not recognized.
pub const FENCE_MARKER: &str = "```";

/// Classification of a line relative to fenced code blocks.
///
/// Note the polarity: a document containing no fence markers at all
/// classifies as `Inside`. Bare text therefore gets the annotation form of a
/// result rather than a synthesized block, which matches how results read in
/// prose-free scratch documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FenceContext {
    Inside,
    Outside,
}

impl FenceContext {
    /// State transition taken on every fence marker line encountered.
    fn flip(self) -> Self {
        match self {
            FenceContext::Inside => FenceContext::Outside,
            FenceContext::Outside => FenceContext::Inside,
        }
    }

    pub fn is_inside(self) -> bool {
        self == FenceContext::Inside
    }
}

/// Whether a line's trimmed text starts with the fence marker.
fn is_fence_marker(line: &str) -> bool {
    line.trim().starts_with(FENCE_MARKER)
}

/// Classify `cursor_line` as inside or outside a fenced code block.
///
/// Scans backward from `cursor_line` to line 0 inclusive, flipping state on
/// every fence marker, which establishes fence parity up to the cursor. A
/// forward scan from `cursor_line + 1` then flips once on the nearest marker
/// below and stops. The order is fixed: all backward flips, then at most one
/// forward flip. A cursor sitting on a marker line flips during the backward
/// pass.
///
/// Total for any `cursor_line < editor.line_count()`; out-of-range lines are
/// a caller contract violation.
pub fn classify<E: Editor + ?Sized>(editor: &E, cursor_line: usize) -> FenceContext {
    let mut state = FenceContext::Inside;

    for i in (0..=cursor_line).rev() {
        if is_fence_marker(&editor.line(i)) {
            state = state.flip();
        }
    }

    for i in (cursor_line + 1)..editor.line_count() {
        if is_fence_marker(&editor.line(i)) {
            state = state.flip();
            break;
        }
    }

    state
}
