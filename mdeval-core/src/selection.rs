//! Linewise selection model

use anyhow::{bail, Result};

/// A linewise selection: the lines whose text is submitted for evaluation.
/// The cursor end doubles as the line the fence classifier is asked about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineSelection {
    pub anchor: usize,
    pub cursor: usize,
}

impl LineSelection {
    /// Create a new selection at a single line
    pub fn new(line: usize) -> Self {
        Self {
            anchor: line,
            cursor: line,
        }
    }

    /// Get the selection range as (min, max) inclusive
    pub fn range(&self) -> (usize, usize) {
        let a = self.anchor.min(self.cursor);
        let b = self.anchor.max(self.cursor);
        (a, b)
    }

    /// Number of lines covered (always at least one)
    pub fn line_span(&self) -> usize {
        let (a, b) = self.range();
        b - a + 1
    }

    /// Parse a 1-based `START[:END]` range as passed on the command line.
    /// The cursor lands on END.
    pub fn parse(spec: &str) -> Result<Self> {
        let (start_str, end_str) = match spec.split_once(':') {
            Some((s, e)) => (s, e),
            None => (spec, spec),
        };

        let start: usize = start_str
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid line number: {start_str}"))?;
        let end: usize = end_str
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid line number: {end_str}"))?;

        if start == 0 || end == 0 {
            bail!("Line numbers are 1-based");
        }
        if end < start {
            bail!("Range end {end} is before start {start}");
        }

        Ok(Self {
            anchor: start - 1,
            cursor: end - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_forward_selection() {
        let sel = LineSelection {
            anchor: 5,
            cursor: 10,
        };
        assert_eq!(sel.range(), (5, 10));
        assert_eq!(sel.line_span(), 6);
    }

    #[test]
    fn test_range_backward_selection() {
        let sel = LineSelection {
            anchor: 10,
            cursor: 5,
        };
        assert_eq!(sel.range(), (5, 10));
    }

    #[test]
    fn test_range_single_line() {
        let sel = LineSelection::new(7);
        assert_eq!(sel.range(), (7, 7));
        assert_eq!(sel.line_span(), 1);
    }

    #[test]
    fn test_parse_single_line() {
        let sel = LineSelection::parse("3").unwrap();
        assert_eq!(sel, LineSelection { anchor: 2, cursor: 2 });
    }

    #[test]
    fn test_parse_range() {
        let sel = LineSelection::parse("2:5").unwrap();
        assert_eq!(sel, LineSelection { anchor: 1, cursor: 4 });
    }

    #[test]
    fn test_parse_rejects_zero() {
        assert!(LineSelection::parse("0").is_err());
        assert!(LineSelection::parse("0:3").is_err());
    }

    #[test]
    fn test_parse_rejects_reversed_range() {
        assert!(LineSelection::parse("5:2").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(LineSelection::parse("abc").is_err());
        assert!(LineSelection::parse("1:x").is_err());
    }
}
