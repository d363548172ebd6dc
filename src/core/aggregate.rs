//! Content aggregation
//!
//! Consumes the filtered sequence of candidate paths, reads each file as text
//! and assembles the combined document. Input order is preserved exactly;
//! files that cannot be decoded are skipped with a recorded warning and the
//! run continues.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::core::matcher::CandidatePath;

/// Banner rule drawn above and below each section header
pub const SECTION_RULE: &str =
    "================================================================================";

/// One source file's contribution to the aggregated document
#[derive(Debug, Clone)]
pub struct Section {
    /// Root-relative source path with '/' separators
    pub path: String,
    pub content: String,
}

/// A file that was matched but could not be read as text
#[derive(Debug, Clone, Serialize)]
pub struct SkipWarning {
    pub path: String,
    pub reason: String,
}

/// The final ordered artifact handed to the writer
#[derive(Debug, Clone, Default)]
pub struct AggregatedDocument {
    pub sections: Vec<Section>,
}

impl AggregatedDocument {
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Render one section: a banner identifying the source file, then its content
    pub fn render_section(index: usize, section: &Section) -> String {
        format!(
            "{rule}\nSource File {n}: {path}\n{rule}\n\n{content}\n",
            rule = SECTION_RULE,
            n = index + 1,
            path = section.path,
            content = section.content,
        )
    }

    /// Render the whole document, sections in input order
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, s)| Self::render_section(i, s))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Read every path under `root` and assemble the document
///
/// Sections appear in exactly the order the paths were received; no
/// re-sorting happens here.
pub fn aggregate<I>(paths: I, root: &Path) -> (AggregatedDocument, Vec<SkipWarning>)
where
    I: IntoIterator<Item = CandidatePath>,
{
    let mut document = AggregatedDocument::default();
    let mut skipped = Vec::new();

    for candidate in paths {
        let full_path = root.join(candidate.relative());
        let bytes = match fs::read(&full_path) {
            Ok(b) => b,
            Err(e) => {
                skipped.push(SkipWarning {
                    path: candidate.relative().to_string(),
                    reason: format!("cannot read file: {}", e),
                });
                continue;
            }
        };
        match String::from_utf8(bytes) {
            Ok(content) => document.sections.push(Section {
                path: candidate.relative().to_string(),
                content,
            }),
            Err(_) => skipped.push(SkipWarning {
                path: candidate.relative().to_string(),
                reason: "content is not valid UTF-8".to_string(),
            }),
        }
    }

    (document, skipped)
}
