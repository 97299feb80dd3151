//! Fenced code block extraction
//!
//! Finds *completed* fenced code blocks in text. The code-annotation
//! step re-runs this over the cumulative response content after every
//! chunk and compares counts, so only blocks whose closing fence has
//! arrived are reported.

use crate::context::CodeSnippet;

/// A completed snippet plus where its closing fence ends in the text
#[derive(Debug, Clone)]
pub struct ExtractedSnippet {
    /// The snippet itself
    pub snippet: CodeSnippet,
    /// Byte offset just past the closing fence line (including its
    /// newline, when present)
    pub end_offset: usize,
}

/// Extract all completed fenced code blocks from the text.
///
/// An opening fence is a line starting with ```` ``` ```` followed by an
/// optional info string; a closing fence is a line consisting solely of
/// the fence marker. Unterminated blocks are ignored.
pub fn extract_snippets(text: &str) -> Vec<ExtractedSnippet> {
    let mut snippets = Vec::new();
    let mut open: Option<(String, Vec<&str>)> = None;
    let mut pos = 0usize;

    for line in text.split_inclusive('\n') {
        let line_end = pos + line.len();
        let trimmed = line.trim_end_matches(['\n', '\r']);

        match &mut open {
            None => {
                if let Some(info) = trimmed.strip_prefix("```") {
                    open = Some((info.trim().to_string(), Vec::new()));
                }
            }
            Some((info, lines)) => {
                if trimmed == "```" {
                    let (filepath, language) = parse_info_string(info);
                    snippets.push(ExtractedSnippet {
                        snippet: CodeSnippet {
                            filepath,
                            language,
                            code: lines.join(""),
                        },
                        end_offset: line_end,
                    });
                    open = None;
                } else {
                    lines.push(line);
                }
            }
        }

        pos = line_end;
    }

    snippets
}

/// Split a fence info string into (filepath, language).
///
/// An info string containing a path separator or an extension is taken
/// as a file path with the language inferred from the extension;
/// otherwise it is the language name itself.
fn parse_info_string(info: &str) -> (Option<String>, Option<String>) {
    let token = match info.split_whitespace().next() {
        Some(t) => t,
        None => return (None, None),
    };

    if token.contains('/') || token.contains('.') {
        let language = token
            .rsplit_once('.')
            .and_then(|(_, ext)| language_for_extension(ext));
        (Some(token.to_string()), language)
    } else {
        (None, Some(token.to_lowercase()))
    }
}

fn language_for_extension(ext: &str) -> Option<String> {
    let language = match ext.to_lowercase().as_str() {
        "rs" => "rust",
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "go" => "go",
        "java" => "java",
        "rb" => "ruby",
        "c" | "h" => "c",
        "cpp" | "cc" | "hpp" => "cpp",
        "sh" | "bash" => "bash",
        "json" => "json",
        "yaml" | "yml" => "yaml",
        "toml" => "toml",
        _ => return None,
    };
    Some(language.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_completed_block() {
        let text = "before\n```rust\nfn main() {}\n```\nafter";
        let snippets = extract_snippets(text);

        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].snippet.language.as_deref(), Some("rust"));
        assert_eq!(snippets[0].snippet.code, "fn main() {}\n");
        // end_offset points past the closing fence's newline
        assert_eq!(&text[..snippets[0].end_offset], "before\n```rust\nfn main() {}\n```\n");
    }

    #[test]
    fn test_unterminated_block_ignored() {
        let text = "```python\nprint('hi')\n";
        assert!(extract_snippets(text).is_empty());
    }

    #[test]
    fn test_multiple_blocks() {
        let text = "```rust\na\n```\ntext\n```python\nb\n```\n";
        let snippets = extract_snippets(text);

        assert_eq!(snippets.len(), 2);
        assert_eq!(snippets[0].snippet.language.as_deref(), Some("rust"));
        assert_eq!(snippets[1].snippet.language.as_deref(), Some("python"));
    }

    #[test]
    fn test_filepath_info_string() {
        let text = "```src/main.rs\nfn main() {}\n```\n";
        let snippets = extract_snippets(text);

        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].snippet.filepath.as_deref(), Some("src/main.rs"));
        assert_eq!(snippets[0].snippet.language.as_deref(), Some("rust"));
    }

    #[test]
    fn test_bare_fence_has_no_language() {
        let text = "```\nplain\n```\n";
        let snippets = extract_snippets(text);

        assert_eq!(snippets.len(), 1);
        assert!(snippets[0].snippet.language.is_none());
        assert!(snippets[0].snippet.filepath.is_none());
    }

    #[test]
    fn test_closing_fence_without_trailing_newline() {
        let text = "```rust\nlet x = 1;\n```";
        let snippets = extract_snippets(text);

        assert_eq!(snippets.len(), 1);
        assert_eq!(snippets[0].end_offset, text.len());
    }
}
