//! Content schemas and parsed content items.
//!
//! Each category (projects, writing, uses) has its own metadata schema.
//! Category membership is determined by file location alone, so the schemas
//! carry no category discriminator.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::frontmatter;
use crate::stats::ReadingStats;

/// File extensions recognized as content files.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// Whether a path carries a recognized content extension.
pub fn is_content_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_lowercase();
            CONTENT_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Publication status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Not yet ready; hidden from listings.
    Draft,
    /// Work in progress, but publicly visible.
    Wip,
    /// Shipped and live.
    Shipped,
}

/// Outbound links for a project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub demo: Option<String>,

    #[serde(default)]
    pub repo: Option<String>,

    #[serde(default, rename = "caseStudy")]
    pub case_study: Option<String>,
}

/// Cover image reference for a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    pub src: String,
    pub alt: String,
}

/// Metadata schema for the projects category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    /// Project title.
    pub title: String,

    /// URL-safe identifier, unique within the category.
    pub slug: String,

    /// Short description for listings and meta tags.
    pub description: String,

    /// Publication status; drafts are excluded from listings.
    pub status: ProjectStatus,

    /// Technology tags.
    #[serde(default)]
    pub tech: Vec<String>,

    /// Category tags.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Whether to surface this project in featured slots.
    #[serde(default)]
    pub featured: bool,

    /// Optional outbound links.
    #[serde(default)]
    pub links: Option<ProjectLinks>,

    /// Optional cover image.
    #[serde(default)]
    pub cover: Option<CoverImage>,

    /// Publication date (ISO-8601 calendar date).
    pub date: NaiveDate,
}

/// Metadata schema for the writing category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMeta {
    /// Post title.
    pub title: String,

    /// URL-safe identifier, unique within the category.
    pub slug: String,

    /// Short description for listings and meta tags.
    pub description: String,

    /// Tags for the post.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Publication date (ISO-8601 calendar date).
    pub date: NaiveDate,

    /// Visibility flag; absent means published.
    #[serde(default = "default_true")]
    pub published: bool,
}

fn default_true() -> bool {
    true
}

/// The singleton uses document. Only its front matter is meaningful; the body
/// of the file is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsesDoc {
    /// Ordered sections of the uses page.
    #[serde(default)]
    pub sections: Vec<UsesSection>,
}

/// A titled section of the uses document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsesSection {
    pub title: String,

    #[serde(default)]
    pub items: Vec<UsesItem>,
}

/// A single entry within a uses section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsesItem {
    pub name: String,

    #[serde(default)]
    pub note: Option<String>,

    #[serde(default)]
    pub link: Option<String>,
}

/// A parsed content unit: typed metadata, the raw body source, and reading
/// statistics derived from the body.
///
/// Items are values reconstructed on every read; they are never cached or
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct ContentItem<M> {
    /// Decoded front-matter metadata.
    pub meta: M,

    /// Raw markup body, rendered later by an external renderer.
    pub body: String,

    /// Reading statistics computed from the body.
    pub stats: ReadingStats,
}

impl<M: serde::de::DeserializeOwned> ContentItem<M> {
    /// Decode a raw file into a content item for the schema `M`.
    pub fn decode(content: &str, path: &Path) -> Result<Self> {
        let (meta, body) = frontmatter::decode::<M>(content, path)?;
        let stats = ReadingStats::from_body(&body);
        Ok(Self { meta, body, stats })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_content_file() {
        assert!(is_content_file(Path::new("projects/folio.mdx")));
        assert!(is_content_file(Path::new("writing/post.md")));
        assert!(is_content_file(Path::new("writing/POST.MD")));
        assert!(!is_content_file(Path::new("writing/notes.txt")));
        assert!(!is_content_file(Path::new("writing/no-extension")));
    }

    #[test]
    fn test_decode_project() {
        let content = r#"---
title: "Folio"
slug: folio
description: "A portfolio content index"
status: shipped
tech: [rust, serde]
tags: [tooling]
featured: true
links:
  repo: "https://example.com/folio"
  caseStudy: "/projects/folio-case-study"
cover:
  src: "/images/folio.png"
  alt: "Folio screenshot"
date: 2024-03-15
---

Two words."#;

        let item =
            ContentItem::<ProjectMeta>::decode(content, Path::new("folio.mdx")).expect("decode");
        assert_eq!(item.meta.slug, "folio");
        assert_eq!(item.meta.status, ProjectStatus::Shipped);
        assert!(item.meta.featured);
        let links = item.meta.links.expect("links");
        assert_eq!(links.repo.as_deref(), Some("https://example.com/folio"));
        assert_eq!(
            links.case_study.as_deref(),
            Some("/projects/folio-case-study")
        );
        assert!(links.demo.is_none());
        assert_eq!(item.meta.date, NaiveDate::from_ymd_opt(2024, 3, 15).expect("date"));
        assert_eq!(item.body, "Two words.");
        assert_eq!(item.stats.words, 2);
    }

    #[test]
    fn test_decode_project_unknown_status() {
        let content = r#"---
title: "Bad"
slug: bad
description: "Bad status"
status: abandoned
date: 2024-01-01
---

Body"#;

        let result = ContentItem::<ProjectMeta>::decode(content, Path::new("bad.mdx"));
        assert!(result.is_err());
    }

    #[test]
    fn test_decode_project_invalid_date() {
        let content = r#"---
title: "Bad"
slug: bad
description: "Bad date"
status: shipped
date: not-a-date
---

Body"#;

        let result = ContentItem::<ProjectMeta>::decode(content, Path::new("bad.mdx"));
        assert!(result.is_err());
    }

    #[test]
    fn test_post_published_defaults_true() {
        let content = r#"---
title: "No flag"
slug: no-flag
description: "Omits the published key"
date: 2024-02-02
---

Body"#;

        let item =
            ContentItem::<PostMeta>::decode(content, Path::new("no-flag.mdx")).expect("decode");
        assert!(item.meta.published);
    }

    #[test]
    fn test_post_published_explicit_false() {
        let content = r#"---
title: "Hidden"
slug: hidden
description: "Explicitly unpublished"
date: 2024-02-02
published: false
---

Body"#;

        let item =
            ContentItem::<PostMeta>::decode(content, Path::new("hidden.mdx")).expect("decode");
        assert!(!item.meta.published);
    }

    #[test]
    fn test_decode_uses_doc() {
        let content = r#"---
sections:
  - title: "Hardware"
    items:
      - name: "Laptop"
        note: "Daily driver"
  - title: "Software"
    items:
      - name: "Editor"
        link: "https://example.com/editor"
---
"#;

        let (doc, _body) =
            frontmatter::decode::<UsesDoc>(content, Path::new("index.mdx")).expect("decode");
        assert_eq!(doc.sections.len(), 2);
        assert_eq!(doc.sections[0].title, "Hardware");
        assert_eq!(doc.sections[0].items[0].note.as_deref(), Some("Daily driver"));
        assert_eq!(
            doc.sections[1].items[0].link.as_deref(),
            Some("https://example.com/editor")
        );
    }
}
