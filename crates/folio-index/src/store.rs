//! File-backed content store.
//!
//! Each category lives in its own flat directory under the content root.
//! Every operation is a fresh read of the source files: items are decoded,
//! filtered, and sorted per call, with no cache in between. A file that fails
//! its schema is skipped with a warning and never aborts the rest of the
//! category.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use folio_core::{
    Config, ContentConfig, ContentItem, PostMeta, ProjectMeta, ProjectStatus, Result, UsesDoc,
    content::is_content_file, frontmatter,
};

/// Read-only store over the content directory tree.
#[derive(Debug, Clone)]
pub struct ContentStore {
    content: ContentConfig,
}

impl ContentStore {
    /// Create a store rooted at `root`, using the default category
    /// subdirectory names.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            content: ContentConfig {
                root: root.into(),
                ..ContentConfig::default()
            },
        }
    }

    /// Create a store from loaded site configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            content: config.content.clone(),
        }
    }

    /// List all non-draft projects, most recent first.
    pub fn list_projects(&self) -> Result<Vec<ContentItem<ProjectMeta>>> {
        let mut items = self.collect::<ProjectMeta>(&self.content.projects_path())?;

        items.retain(|item| {
            if item.meta.status == ProjectStatus::Draft {
                debug!(slug = %item.meta.slug, "skipping draft project");
                false
            } else {
                true
            }
        });

        // Stable sort keeps enumeration order for equal dates
        items.sort_by(|a, b| b.meta.date.cmp(&a.meta.date));

        info!(count = items.len(), "listed projects");
        Ok(items)
    }

    /// Look up a single project by slug. Drafts are returned; listing is the
    /// only filter point.
    pub fn get_project(&self, slug: &str) -> Result<Option<ContentItem<ProjectMeta>>> {
        let items = self.collect::<ProjectMeta>(&self.content.projects_path())?;
        Ok(items.into_iter().find(|item| item.meta.slug == slug))
    }

    /// List all published posts, most recent first. A post is excluded only
    /// when its `published` flag is explicitly false.
    pub fn list_posts(&self) -> Result<Vec<ContentItem<PostMeta>>> {
        let mut items = self.collect::<PostMeta>(&self.content.writing_path())?;

        items.retain(|item| {
            if item.meta.published {
                true
            } else {
                debug!(slug = %item.meta.slug, "skipping unpublished post");
                false
            }
        });

        items.sort_by(|a, b| b.meta.date.cmp(&a.meta.date));

        info!(count = items.len(), "listed posts");
        Ok(items)
    }

    /// Look up a single post by slug, regardless of its `published` flag.
    pub fn get_post(&self, slug: &str) -> Result<Option<ContentItem<PostMeta>>> {
        let items = self.collect::<PostMeta>(&self.content.writing_path())?;
        Ok(items.into_iter().find(|item| item.meta.slug == slug))
    }

    /// Read the singleton uses document.
    ///
    /// Returns `Ok(None)` when the file is missing or fails to decode;
    /// callers substitute their own default. Storage faults other than
    /// "not found" propagate.
    pub fn get_uses(&self) -> Result<Option<UsesDoc>> {
        let dir = self.content.uses_path();

        for ext in folio_core::content::CONTENT_EXTENSIONS {
            let path = dir.join(format!("index.{ext}"));
            let raw = match fs::read_to_string(&path) {
                Ok(raw) => raw,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(e.into()),
            };

            return match frontmatter::decode::<UsesDoc>(&raw, &path) {
                Ok((doc, _body)) => Ok(Some(doc)),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to decode uses document");
                    Ok(None)
                }
            };
        }

        Ok(None)
    }

    /// Parse every content file in a category directory.
    ///
    /// Directory entries are visited in file-name order so enumeration (and
    /// therefore sort tie-breaking) is deterministic across platforms. Files
    /// that fail to decode are skipped with a warning.
    fn collect<M: DeserializeOwned>(&self, dir: &Path) -> Result<Vec<ContentItem<M>>> {
        if !dir.exists() {
            debug!(dir = %dir.display(), "category directory missing, returning empty");
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && is_content_file(path))
            .collect();
        paths.sort();

        let mut items = Vec::with_capacity(paths.len());
        for path in paths {
            match self.load::<M>(&path) {
                Ok(item) => items.push(item),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping content file");
                }
            }
        }

        Ok(items)
    }

    /// Read and decode a single content file.
    fn load<M: DeserializeOwned>(&self, path: &Path) -> Result<ContentItem<M>> {
        let raw = fs::read_to_string(path)?;
        ContentItem::decode(&raw, path)
    }
}
