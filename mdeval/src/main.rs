//! mdeval - evaluate script snippets inside markdown files

use anyhow::{Context, Result};
use clap::Parser;
use mdeval_core::{CommandRuntime, Config, Document, DocumentEditor, LineSelection, Session};
use std::path::PathBuf;

/// Evaluate a snippet of script text inside a markdown file
#[derive(Parser, Debug)]
#[command(name = "mdeval")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to markdown file
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Lines to evaluate, 1-based: START or START:END
    #[arg(short, long, value_name = "LINES")]
    lines: String,

    /// Cursor line for fence classification (1-based, defaults to the
    /// selection's end line)
    #[arg(short, long, value_name = "LINE")]
    cursor: Option<usize>,

    /// Splice the result into the file instead of printing a preview
    #[arg(short, long)]
    write: bool,

    /// Interpreter command override
    #[arg(long, value_name = "CMD")]
    command: Option<String>,

    /// Extra interpreter argument (repeatable)
    #[arg(long = "arg", value_name = "ARG")]
    args: Vec<String>,
}

/// Build the selection from the command line and check it against the
/// document before the pipeline runs; out-of-range lines are a usage error
/// here, not a core concern.
fn resolve_selection(args: &Args, line_count: usize) -> Result<LineSelection> {
    let mut selection = LineSelection::parse(&args.lines)?;

    if let Some(cursor) = args.cursor {
        if cursor == 0 {
            anyhow::bail!("Cursor line is 1-based");
        }
        selection.cursor = cursor - 1;
    }

    let (_, end) = selection.range();
    let last = end.max(selection.cursor);
    if last >= line_count {
        anyhow::bail!(
            "Line {} is past the end of the document ({} lines)",
            last + 1,
            line_count
        );
    }

    Ok(selection)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(command) = &args.command {
        config.runtime.command = command.clone();
    }
    if !args.args.is_empty() {
        config.runtime.args = args.args.clone();
    }

    // Load document
    let doc = Document::load(&args.file)
        .with_context(|| format!("Failed to load document: {}", args.file.display()))?;

    let selection = resolve_selection(&args, doc.line_count())?;
    log::info!(
        "evaluating lines {:?} of {}",
        selection.range(),
        args.file.display()
    );

    let runtime = CommandRuntime::new(&config.runtime);
    runtime
        .check_available()
        .with_context(|| format!("Runtime '{}' is not usable", config.runtime.command))?;

    let mut editor = DocumentEditor::new(doc, selection);
    let mut session = Session::new(runtime);

    if args.write {
        session.eval_in_place(&mut editor)?;
        let mut doc = editor.into_document();
        doc.save()?;
    } else {
        let preview = session.eval_preview(&editor)?;
        println!("{}", preview.code);
        println!();
        println!("=> {}", preview.result);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(lines: &str, cursor: Option<usize>) -> Args {
        Args {
            file: PathBuf::from("doc.md"),
            lines: lines.to_string(),
            cursor,
            write: false,
            command: None,
            args: Vec::new(),
        }
    }

    #[test]
    fn test_resolve_selection_in_range() {
        let sel = resolve_selection(&args("2:3", None), 5).unwrap();
        assert_eq!(sel.range(), (1, 2));
        assert_eq!(sel.cursor, 2);
    }

    #[test]
    fn test_resolve_selection_cursor_override() {
        let sel = resolve_selection(&args("2", Some(4)), 5).unwrap();
        assert_eq!(sel.cursor, 3);
    }

    #[test]
    fn test_resolve_selection_past_end() {
        assert!(resolve_selection(&args("9", None), 5).is_err());
        assert!(resolve_selection(&args("1", Some(9)), 5).is_err());
    }

    #[test]
    fn test_resolve_selection_zero_cursor() {
        assert!(resolve_selection(&args("1", Some(0)), 5).is_err());
    }
}
