//! Folio Core Library
//!
//! Content schemas, front-matter decoding, reading statistics, configuration,
//! and error handling for the Folio content index.

pub mod config;
pub mod content;
pub mod error;
pub mod frontmatter;
pub mod stats;

pub use config::{Config, ContentConfig};
pub use content::{
    ContentItem, CoverImage, PostMeta, ProjectLinks, ProjectMeta, ProjectStatus, UsesDoc,
    UsesItem, UsesSection,
};
pub use error::{CoreError, Result};
pub use stats::ReadingStats;
