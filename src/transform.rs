use crate::{CharExt, StringExt};

/// How a raw block of text is normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Transform {
    /// Strip the common leading indentation from every line.
    Unindent,
    /// Unindent, then join single line breaks with a space while keeping
    /// paragraph boundaries as one line break.
    Fold,
}

impl Transform {
    #[inline]
    pub fn apply(self, raw: &str) -> String {
        match self {
            Transform::Unindent => unindent(raw),
            Transform::Fold => fold(raw),
        }
    }
}

/// Strip the common leading indentation from every line of `raw`.
///
/// Leading newlines and any trailing run of spaces and newlines are removed
/// first. The common indentation is the smallest number of leading spaces
/// across the non-empty lines; that many leading spaces are removed from
/// every line that is long enough. Empty lines are preserved as paragraph
/// boundaries.
///
/// ```
/// let raw = "
///     def foo():
///       print(\"Hello\")
///       print(\"World\")
///   ";
/// assert_eq!(
///     deindent::unindent(raw),
///     "def foo():\n  print(\"Hello\")\n  print(\"World\")",
/// );
/// ```
pub fn unindent(raw: &str) -> String {
    let trimmed = raw.trim_outer();

    // Lines consisting solely of spaces are not empty; they take part in
    // the minimum with their full length.
    let indent = trimmed
        .split('\n')
        .filter(|line| !line.is_empty())
        .map(StringExt::indentation)
        .min()
        .unwrap_or(0);

    let mut out = String::with_capacity(trimmed.len());
    for (i, line) in trimmed.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.strip_indentation(indent));
    }
    out
}

/// Unindent `raw`, then fold its lines into paragraphs: a single line break
/// becomes a space, a run of two or more becomes one line break.
///
/// ```
/// let raw = "
///     cmake
///     -DCMAKE_BUILD_TYPE=Release
///     -B build
///     -S .
///   ";
/// assert_eq!(deindent::fold(raw), "cmake -DCMAKE_BUILD_TYPE=Release -B build -S .");
/// ```
pub fn fold(raw: &str) -> String {
    let unindented = unindent(raw);

    let mut out = String::with_capacity(unindented.len());
    let mut pending_breaks = 0usize;
    for c in unindented.chars() {
        if c.is_linebreak() {
            pending_breaks += 1;
            continue;
        }
        if pending_breaks == 1 {
            out.push(' ');
        } else if pending_breaks > 1 {
            out.push('\n');
        }
        pending_breaks = 0;
        out.push(c);
    }
    // A trailing run of breaks is dropped, not flushed.
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn assert_unindents_to(raw: &str, expected: &str) {
        assert_eq!(unindent(raw), expected);
    }

    #[track_caller]
    fn assert_folds_to(raw: &str, expected: &str) {
        assert_eq!(fold(raw), expected);
    }

    #[test]
    fn unindent_code_block() {
        assert_unindents_to(
            "\n    def foo():\n      print(\"Hello\")\n      print(\"World\")\n  ",
            "def foo():\n  print(\"Hello\")\n  print(\"World\")",
        );
    }

    #[test]
    fn unindent_preserves_empty_lines() {
        assert_unindents_to("\n    line1\n\n    line2\n  ", "line1\n\nline2");
    }

    #[test]
    fn unindent_empty_line_between_statements() {
        // A blank line inside the block must survive without picking up or
        // losing spaces.
        assert_unindents_to(
            "\n    def foo():\n      print(\"Hello\")\n\n      print(\"World\")\n  ",
            "def foo():\n  print(\"Hello\")\n\n  print(\"World\")",
        );
    }

    #[test]
    fn unindent_space_only_line_keeps_excess() {
        // Space-only lines are non-empty, so they count toward the minimum
        // and are stripped like any other line.
        assert_unindents_to("  a\n    \n  b", "a\n  \nb");
        // A shallower space-only line lowers the minimum for the whole
        // block.
        assert_unindents_to("  a\n \n  b", " a\n\n b");
    }

    #[test]
    fn unindent_without_leading_newline() {
        assert_unindents_to("    a\n      b\n", "a\n  b");
    }

    #[test]
    fn unindent_single_line() {
        assert_unindents_to("plain", "plain");
        assert_unindents_to("  indented  ", "indented");
    }

    #[test]
    fn unindent_blank_input() {
        assert_unindents_to("", "");
        assert_unindents_to("\n \n  \n", "");
    }

    #[test]
    fn unindent_trailing_margin_mixture() {
        assert_unindents_to("  text  \n  \n \n", "text");
    }

    #[test]
    fn unindent_tabs_are_ordinary_characters() {
        assert_unindents_to("\n\tfoo\n\tbar\n", "\tfoo\n\tbar");
        assert_unindents_to("\n  \tfoo\n  bar\n", "\tfoo\nbar");
    }

    #[test]
    fn unindent_uneven_indentation() {
        assert_unindents_to("\n      deeper\n    shallow\n  ", "  deeper\nshallow");
    }

    #[test]
    fn unindent_is_idempotent() {
        let inputs = [
            "\n    def foo():\n      print(\"Hello\")\n      print(\"World\")\n  ",
            "\n    line1\n\n    line2\n  ",
            "no indent at all",
            "",
        ];
        for raw in inputs {
            let once = unindent(raw);
            assert_eq!(unindent(&once), once);
        }
    }

    #[test]
    fn unindent_leaves_a_zero_indent_line() {
        let inputs = [
            "\n    def foo():\n      print(\"Hello\")\n  ",
            "\n      deeper\n    shallow\n  ",
            "  a\n    \n  b",
        ];
        for raw in inputs {
            let out = unindent(raw);
            assert!(out
                .split('\n')
                .filter(|line| !line.is_empty())
                .any(|line| line.indentation() == 0));
        }
    }

    #[test]
    fn fold_joins_lines() {
        assert_folds_to("\n    first\n    second\n  ", "first second");
    }

    #[test]
    fn fold_keeps_paragraph_breaks() {
        assert_folds_to("\n    first\n\n    second\n  ", "first\nsecond");
        assert_folds_to("a\n\n\nb", "a\nb");
    }

    #[test]
    fn fold_keeps_residual_indentation() {
        // Indentation beyond the minimum survives the join as literal
        // spaces, so the folded line carries three spaces here: one from
        // the join, two from the continuation line.
        assert_folds_to(
            "\n    This is the first line.\n    This line is appended to the first.\n\n    This line follows a line break.\n      This line ends up indented by two spaces.\n  ",
            "This is the first line. This line is appended to the first.\nThis line follows a line break.   This line ends up indented by two spaces.",
        );
    }

    #[test]
    fn fold_single_line() {
        assert_folds_to("  just one line  ", "just one line");
    }

    #[test]
    fn fold_blank_input() {
        assert_folds_to("", "");
        assert_folds_to("\n\n  \n", "");
    }

    #[test]
    fn fold_discards_leading_and_trailing_breaks() {
        assert_folds_to("\n\n\nword\n\n\n", "word");
    }

    #[test]
    fn fold_maps_break_runs() {
        let unindented = unindent("\n    a\n    b\n\n    c\n\n\n    d\n  ");
        assert_eq!(unindented, "a\nb\n\nc\n\n\nd");
        // Runs of length one become a space, longer runs one break.
        assert_folds_to("\n    a\n    b\n\n    c\n\n\n    d\n  ", "a b\nc\nd");
    }

    #[test]
    fn transform_dispatch() {
        let raw = "\n    first\n    second\n  ";
        assert_eq!(Transform::Unindent.apply(raw), "first\nsecond");
        assert_eq!(Transform::Fold.apply(raw), "first second");
    }
}
