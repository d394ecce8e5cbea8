//! Folio Index Library
//!
//! File-backed content store for the portfolio categories (projects, writing,
//! uses) and the renderer component registry consumed by the presentation
//! layer.

pub mod render;
pub mod store;

pub use render::{CalloutKind, ComponentRegistry, ElementKind, RenderContext};
pub use store::ContentStore;
