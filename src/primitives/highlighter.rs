//! Keyword-table syntax highlighting
//!
//! # Design
//! - **Per-row classification**: every rendered byte of a row gets exactly one [`Highlight`]
//! - **Carried state**: the only state crossing a row boundary is "inside a block comment",
//!   which the document feeds forward until it stops changing
//!
//! The classifier works on the rendered (tab-expanded) bytes, so highlight indices line up
//! with screen columns.

use crate::primitives::syntax::SyntaxProfile;

/// Marker that tags a keyword table entry as a secondary keyword (e.g. `int|`).
pub const KEYWORD2_MARKER: char = '|';

/// Highlight class of a single rendered byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    #[default]
    Default,
    Comment,
    BlockComment,
    Keyword1,
    Keyword2,
    String,
    Number,
    SearchMatch,
}

/// Result of classifying one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHighlight {
    /// One class per rendered byte
    pub classes: Vec<Highlight>,
    /// True if a block comment is still open at the end of the row
    pub open_block_comment: bool,
}

/// Whether `c` terminates a token (for keyword and number detection).
pub fn is_separator(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c | 0) || b",.()+-/*=~%<>[];".contains(&c)
}

/// Classify one rendered row.
///
/// `in_block_comment` is the exit state of the previous row. Without a profile every byte is
/// [`Highlight::Default`] and no comment state is carried.
pub fn highlight_row(
    render: &[u8],
    in_block_comment: bool,
    profile: Option<&SyntaxProfile>,
) -> RowHighlight {
    let mut classes = vec![Highlight::Default; render.len()];
    let Some(profile) = profile else {
        return RowHighlight {
            classes,
            open_block_comment: false,
        };
    };

    let line_comment = profile.single_line_comment.as_bytes();
    let block_markers = profile
        .block_comment
        .as_ref()
        .map(|(start, end)| (start.as_bytes(), end.as_bytes()))
        .filter(|(start, end)| !start.is_empty() && !end.is_empty());

    let mut prev_sep = true;
    let mut in_string: u8 = 0;
    let mut in_comment = in_block_comment;

    let mut i = 0;
    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 {
            classes[i - 1]
        } else {
            Highlight::Default
        };

        if !line_comment.is_empty()
            && in_string == 0
            && !in_comment
            && render[i..].starts_with(line_comment)
        {
            classes[i..].fill(Highlight::Comment);
            break;
        }

        if let Some((start, end)) = block_markers {
            if in_string == 0 {
                if in_comment {
                    classes[i] = Highlight::BlockComment;
                    if render[i..].starts_with(end) {
                        classes[i..i + end.len()].fill(Highlight::BlockComment);
                        i += end.len();
                        in_comment = false;
                        prev_sep = true;
                    } else {
                        i += 1;
                    }
                    continue;
                } else if render[i..].starts_with(start) {
                    classes[i..i + start.len()].fill(Highlight::BlockComment);
                    i += start.len();
                    in_comment = true;
                    continue;
                }
            }
        }

        if profile.highlight_strings {
            if in_string != 0 {
                classes[i] = Highlight::String;
                if c == b'\\' && i + 1 < render.len() {
                    classes[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == in_string {
                    in_string = 0;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = c;
                classes[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if profile.highlight_numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            classes[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            if let Some((len, class)) = match_keyword(&render[i..], &profile.keywords) {
                classes[i..i + len].fill(class);
                i += len;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    RowHighlight {
        classes,
        open_block_comment: in_comment,
    }
}

/// Match a keyword at the start of `rest`; it must be followed by a separator or the row end.
fn match_keyword(rest: &[u8], keywords: &[String]) -> Option<(usize, Highlight)> {
    keywords.iter().find_map(|keyword| {
        let (word, class) = match keyword.strip_suffix(KEYWORD2_MARKER) {
            Some(word) => (word, Highlight::Keyword2),
            None => (keyword.as_str(), Highlight::Keyword1),
        };
        let word = word.as_bytes();
        if word.is_empty() || !rest.starts_with(word) {
            return None;
        }
        let next = rest.get(word.len()).copied().unwrap_or(0);
        is_separator(next).then_some((word.len(), class))
    })
}
