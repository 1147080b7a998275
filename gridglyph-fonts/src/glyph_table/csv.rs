//! Minimal comma-separated row reader for glyph definition files.
//!
//! Fields are never trimmed: a header cell holding a single space defines
//! the space glyph, and trailing empty fields are kept as empty cells.

/// Split `text` into rows of fields, skipping blank lines.
///
/// A quoted field may span lines; `\r\n` and `\r` line endings are accepted.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut chars = text.chars().peekable();
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut line_has_content = false;

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    // Escaped quote inside quoted field.
                    field.push('"');
                    chars.next();
                }
                '"' => in_quotes = false,
                other => field.push(other),
            }
            continue;
        }

        match c {
            '"' if at_field_start => {
                in_quotes = true;
                at_field_start = false;
                line_has_content = true;
            }
            ',' => {
                row.push(std::mem::take(&mut field));
                at_field_start = true;
                line_has_content = true;
            }
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                if line_has_content {
                    row.push(std::mem::take(&mut field));
                    rows.push(std::mem::take(&mut row));
                }
                at_field_start = true;
                line_has_content = false;
            }
            other => {
                field.push(other);
                at_field_start = false;
                line_has_content = true;
            }
        }
    }

    if line_has_content {
        row.push(field);
        rows.push(row);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rows() {
        let rows = parse_rows("A,,\n#,#,#\n");
        assert_eq!(rows, vec![vec!["A", "", ""], vec!["#", "#", "#"]]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let rows = parse_rows("A\n\n\r\n#\n");
        assert_eq!(rows, vec![vec!["A"], vec!["#"]]);
    }

    #[test]
    fn test_quoted_fields() {
        let rows = parse_rows("\",\",x\n\"\"\"\",y\n");
        assert_eq!(rows, vec![vec![",", "x"], vec!["\"", "y"]]);
    }

    #[test]
    fn test_fields_not_trimmed() {
        let rows = parse_rows(" ,#\n");
        assert_eq!(rows, vec![vec![" ", "#"]]);
    }

    #[test]
    fn test_crlf_and_missing_final_newline() {
        let rows = parse_rows("B,\r\n,#");
        assert_eq!(rows, vec![vec!["B", ""], vec!["", "#"]]);
    }

    #[test]
    fn test_quoted_newline_stays_in_field() {
        let rows = parse_rows("\"a\nb\",c\n");
        assert_eq!(rows, vec![vec!["a\nb", "c"]]);
    }
}
