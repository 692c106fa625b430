//! Syntax profiles and filename-based profile resolution

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Per-filetype classification rules.
///
/// Keywords ending in [`KEYWORD2_MARKER`](crate::primitives::highlighter::KEYWORD2_MARKER)
/// are secondary keywords; the marker itself is not part of the matched text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntaxProfile {
    /// Label shown in the status bar (e.g. "c")
    pub filetype: String,

    /// Patterns matched against the file name. A pattern starting with `.` must equal the
    /// file extension (including the dot); any other pattern matches as a substring.
    pub file_match: Vec<String>,

    /// Keyword table
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Single-line comment marker, empty to disable
    #[serde(default)]
    pub single_line_comment: String,

    /// Block comment start/end markers
    #[serde(default)]
    pub block_comment: Option<(String, String)>,

    #[serde(default = "default_true")]
    pub highlight_numbers: bool,

    #[serde(default = "default_true")]
    pub highlight_strings: bool,
}

fn default_true() -> bool {
    true
}

impl SyntaxProfile {
    /// Whether this profile applies to `filename`.
    pub fn matches(&self, filename: &str) -> bool {
        let extension = filename.rfind('.').map(|dot| &filename[dot..]);
        self.file_match.iter().any(|pattern| {
            if pattern.starts_with('.') {
                extension == Some(pattern.as_str())
            } else {
                filename.contains(pattern.as_str())
            }
        })
    }
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Profiles shipped with the editor.
pub fn builtin_profiles() -> Vec<SyntaxProfile> {
    vec![
        SyntaxProfile {
            filetype: "c".to_string(),
            file_match: words(&[".c", ".h", ".cpp"]),
            keywords: words(&[
                "switch", "if", "while", "for", "break", "continue", "return", "else", "struct",
                "union", "typedef", "static", "enum", "class", "case", "sizeof", "const",
                "int|", "long|", "double|", "float|", "char|", "unsigned|", "signed|", "void|",
            ]),
            single_line_comment: "//".to_string(),
            block_comment: Some(("/*".to_string(), "*/".to_string())),
            highlight_numbers: true,
            highlight_strings: true,
        },
        SyntaxProfile {
            filetype: "py".to_string(),
            file_match: words(&[".py"]),
            keywords: words(&[
                "def", "for", "while", "return", "if", "elif", "else", "break", "continue",
                "True", "False", "None", "self", "try", "except", "finally", "class", "import",
                "from", "as", "with", "lambda", "yield", "pass", "in", "not", "and", "or",
                "int|", "str|", "float|", "bool|", "list|", "dict|",
            ]),
            single_line_comment: "#".to_string(),
            block_comment: Some(("\"\"\"".to_string(), "\"\"\"".to_string())),
            highlight_numbers: true,
            highlight_strings: true,
        },
        SyntaxProfile {
            filetype: "rs".to_string(),
            file_match: words(&[".rs"]),
            keywords: words(&[
                "fn", "let", "mut", "if", "else", "match", "while", "loop", "for", "in",
                "return", "break", "continue", "struct", "enum", "impl", "trait", "pub", "use",
                "mod", "const", "static", "where", "self", "Self", "true", "false", "as", "ref",
                "i8|", "i16|", "i32|", "i64|", "isize|", "u8|", "u16|", "u32|", "u64|", "usize|",
                "f32|", "f64|", "bool|", "char|", "str|",
            ]),
            single_line_comment: "//".to_string(),
            block_comment: Some(("/*".to_string(), "*/".to_string())),
            highlight_numbers: true,
            highlight_strings: true,
        },
    ]
}

/// Ordered table of known profiles; the first match wins.
#[derive(Debug, Clone)]
pub struct SyntaxRegistry {
    profiles: Vec<Arc<SyntaxProfile>>,
}

impl Default for SyntaxRegistry {
    fn default() -> Self {
        Self::with_user_profiles(Vec::new())
    }
}

impl SyntaxRegistry {
    /// Built-in profiles overlaid with user-defined ones.
    ///
    /// User profiles are consulted first; one sharing a built-in's `filetype` replaces it.
    pub fn with_user_profiles(user: Vec<SyntaxProfile>) -> Self {
        let mut profiles: Vec<Arc<SyntaxProfile>> = Vec::new();
        for profile in user {
            profiles.push(Arc::new(profile));
        }
        for builtin in builtin_profiles() {
            if !profiles.iter().any(|p| p.filetype == builtin.filetype) {
                profiles.push(Arc::new(builtin));
            }
        }
        Self { profiles }
    }

    /// Find the profile for a file, matching on its file name.
    pub fn resolve(&self, path: &Path) -> Option<Arc<SyntaxProfile>> {
        let filename = path.file_name()?.to_str()?;
        let found = self.profiles.iter().find(|p| p.matches(filename)).cloned();
        tracing::debug!(
            "resolved syntax for {:?}: {:?}",
            filename,
            found.as_ref().map(|p| p.filetype.as_str())
        );
        found
    }

    pub fn profiles(&self) -> &[Arc<SyntaxProfile>] {
        &self.profiles
    }
}
