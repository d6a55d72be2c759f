//! Evaluation session: the pipeline tying runtime, classifier, and
//! formatter together.
//!
//! Each request runs straight through: take the selection, evaluate it,
//! classify the cursor's fence context, render the replacement, apply it as
//! one `replace_selection` call. No retries, no cancellation; a failed
//! evaluation flows through the same path with the failure text as the
//! result.

use anyhow::{bail, Result};

use crate::editor::Editor;
use crate::fence;
use crate::insert;
use crate::runtime::Runtime;

/// Code and result pair for a transient view; the host decides how to
/// display it. Nothing is written to the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preview {
    pub code: String,
    pub result: String,
}

/// One runtime bound to a sequence of evaluation requests.
pub struct Session<R: Runtime> {
    runtime: R,
}

impl<R: Runtime> Session<R> {
    pub fn new(runtime: R) -> Self {
        Self { runtime }
    }

    /// Evaluate the selection and return the code/result pair for display.
    ///
    /// Errors only on a missing selection, which is a host bug rather than
    /// a user-facing condition.
    pub fn eval_preview<E: Editor>(&mut self, editor: &E) -> Result<Preview> {
        let code = match editor.selection() {
            Some(code) => code,
            None => bail!("No active selection"),
        };

        let outcome = self.runtime.evaluate(&code);
        if outcome.is_failure() {
            log::debug!("evaluation failed: {}", outcome.render());
        }

        Ok(Preview {
            result: outcome.render().to_string(),
            code,
        })
    }

    /// Evaluate the selection and splice the result into the document.
    ///
    /// The fence context at the cursor line picks the output form; the
    /// selection is replaced exactly once. Returns the replacement text
    /// that was applied.
    pub fn eval_in_place<E: Editor>(&mut self, editor: &mut E) -> Result<String> {
        let code = match editor.selection() {
            Some(code) => code,
            None => bail!("No active selection"),
        };

        let outcome = self.runtime.evaluate(&code);

        let ctx = fence::classify(editor, editor.cursor_line());
        log::debug!("cursor line {} classified {:?}", editor.cursor_line(), ctx);

        let replacement = insert::render_replacement(&code, outcome.render(), ctx);
        editor.replace_selection(&replacement);

        Ok(replacement)
    }
}
