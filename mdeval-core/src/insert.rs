//! Rendering an evaluation result into replacement text.

use crate::fence::{FenceContext, FENCE_MARKER};

/// Comment-style prefix put in front of a result inserted inside an
/// existing fence.
pub const RESULT_PREFIX: &str = "# => ";

/// Build the text that replaces the selection: the original source followed
/// by its result, formatted for the fence context at the cursor.
///
/// Inside an existing fence the result rides along as an annotation line;
/// no new fence is added since the surrounding one already provides the
/// code styling. Outside, a fresh fenced block is synthesized under the
/// source to keep the output visually separate. Exactly one of the two
/// forms is produced.
pub fn render_replacement(source: &str, result: &str, ctx: FenceContext) -> String {
    match ctx {
        FenceContext::Inside => format!("{source}\n{RESULT_PREFIX}{result}"),
        FenceContext::Outside => {
            format!("{source}\n{FENCE_MARKER}\n{result}\n{FENCE_MARKER}")
        }
    }
}
