//! Line counting.

use crate::models::LinesOfCode;

/// Source, comment-only and blank lines of `text`.
pub fn lines_of_code(text: &str) -> LinesOfCode {
    let mut loc = LinesOfCode::default();
    let mut in_block_comment = false;
    for line in text.lines() {
        let trimmed = line.trim();
        if in_block_comment {
            loc.commented_lines += 1;
            if trimmed.contains("*/") {
                in_block_comment = false;
            }
            continue;
        }
        if trimmed.is_empty() {
            loc.empty_lines += 1;
        } else if trimmed.starts_with("//") {
            loc.commented_lines += 1;
        } else if trimmed.starts_with("/*") {
            loc.commented_lines += 1;
            in_block_comment = !trimmed.contains("*/");
        } else {
            loc.source_lines += 1;
            if let Some(open) = trimmed.rfind("/*") {
                in_block_comment = !trimmed[open..].contains("*/");
            }
        }
    }
    loc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_line_kind() {
        let text = "class A\n{\n\n    // note\n    /* block\n       still block */\n    int x; /* trailing\n    */\n}\n";
        let loc = lines_of_code(text);
        assert_eq!(loc.source_lines, 4);
        assert_eq!(loc.commented_lines, 4);
        assert_eq!(loc.empty_lines, 1);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(lines_of_code(""), LinesOfCode::default());
    }
}
