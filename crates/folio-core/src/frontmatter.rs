//! Front-matter splitting and schema decoding for content files.
//!
//! A content file is a delimited metadata block followed by free-form markup.
//! YAML blocks are fenced with `---`, TOML blocks with `+++`. The metadata is
//! decoded into a per-category typed schema; a record that fails its schema is
//! an error for that single file, reported with its path.

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{CoreError, Result};

/// Delimiter types for front matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    /// YAML front matter delimited by `---`.
    Yaml,
    /// TOML front matter delimited by `+++`.
    Toml,
}

impl FrontmatterFormat {
    /// Get the delimiter string for this format.
    pub fn delimiter(&self) -> &'static str {
        match self {
            Self::Yaml => "---",
            Self::Toml => "+++",
        }
    }
}

/// Split content into front matter and body.
///
/// Returns `None` when the file does not start with a recognized delimiter.
pub fn split_frontmatter(content: &str) -> Option<(FrontmatterFormat, &str, &str)> {
    let content = content.trim_start();

    let format = if content.starts_with("---") {
        FrontmatterFormat::Yaml
    } else if content.starts_with("+++") {
        FrontmatterFormat::Toml
    } else {
        return None;
    };

    let delimiter = format.delimiter();

    let after_first = &content[delimiter.len()..];
    let closing_pos = after_first.find(delimiter)?;

    let frontmatter = after_first[..closing_pos].trim();
    let body = after_first[closing_pos + delimiter.len()..].trim_start();

    Some((format, frontmatter, body))
}

/// Decode a file's front matter into a typed schema, returning the schema and
/// the remaining body text.
///
/// Missing required fields, unknown enum values, and unparseable dates all
/// surface as a [`CoreError::Frontmatter`] tagged with the file's path. A file
/// with no front-matter block at all fails the same way, since a typed schema
/// cannot be satisfied by an empty record.
pub fn decode<T: DeserializeOwned>(content: &str, path: &Path) -> Result<(T, String)> {
    let Some((format, block, body)) = split_frontmatter(content) else {
        return Err(CoreError::frontmatter(path, "missing front-matter block"));
    };

    let meta: T = match format {
        FrontmatterFormat::Yaml => serde_yaml::from_str(block)
            .map_err(|e| CoreError::frontmatter(path, e.to_string()))?,
        FrontmatterFormat::Toml => {
            toml::from_str(block).map_err(|e| CoreError::frontmatter(path, e.to_string()))?
        }
    };

    Ok((meta, body.to_string()))
}
