//! Renderer component registry.
//!
//! The markup renderer itself lives outside this crate; what it needs from us
//! is a mapping from element kind to render handler. Callers register
//! overrides on top of the built-in handlers, last writer wins per kind.

use std::collections::HashMap;
use std::fmt;

/// Element kinds the presentation layer can override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Heading,
    Link,
    Image,
    CodeBlock,
    /// Highlighted aside with a severity variant.
    Callout,
    /// Badge list of technology names.
    TechStack,
}

/// Severity variant for callout blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalloutKind {
    #[default]
    Default,
    Warning,
    Error,
}

impl CalloutKind {
    /// CSS class suffix for this severity.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Input to a render handler: the element's inner content plus whatever
/// attributes its kind carries.
#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    /// Inner text or already-rendered children markup.
    pub text: String,

    /// Kind-specific attributes: `href`, `src`, `alt`, `lang`, `level`.
    pub attrs: HashMap<String, String>,

    /// Severity for callout elements.
    pub callout: CalloutKind,

    /// Badge items for tech-stack elements.
    pub items: Vec<String>,
}

impl RenderContext {
    /// Context carrying only inner text.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Add an attribute, builder-style.
    pub fn with_attr(mut self, key: &str, value: impl Into<String>) -> Self {
        self.attrs.insert(key.to_string(), value.into());
        self
    }

    fn attr(&self, key: &str) -> &str {
        self.attrs.get(key).map(String::as_str).unwrap_or("")
    }
}

/// A render handler for one element kind.
pub type RenderFn = Box<dyn Fn(&RenderContext) -> String + Send + Sync>;

/// Mapping from element kind to render handler, with override-merge
/// semantics: later registrations win per kind.
#[derive(Default)]
pub struct ComponentRegistry {
    handlers: HashMap<ElementKind, RenderFn>,
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("kinds", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ComponentRegistry {
    /// Empty registry with no handlers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with the built-in plain-HTML handlers.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.set(ElementKind::Heading, |ctx: &RenderContext| {
            let level = ctx.attr("level");
            let level = if level.is_empty() { "1" } else { level };
            format!("<h{level}>{}</h{level}>", ctx.text)
        });

        registry.set(ElementKind::Link, |ctx: &RenderContext| {
            let href = ctx.attr("href");
            // External links open in a new tab; internal and anchor links
            // render plain.
            if href.starts_with("http://") || href.starts_with("https://") {
                format!(
                    "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    ctx.text
                )
            } else {
                format!("<a href=\"{href}\">{}</a>", ctx.text)
            }
        });

        registry.set(ElementKind::Image, |ctx: &RenderContext| {
            format!("<img src=\"{}\" alt=\"{}\">", ctx.attr("src"), ctx.attr("alt"))
        });

        registry.set(ElementKind::CodeBlock, |ctx: &RenderContext| {
            let lang = ctx.attr("lang");
            let class = if lang.is_empty() {
                String::new()
            } else {
                format!(" class=\"language-{lang}\"")
            };
            format!("<pre><code{class}>{}</code></pre>", escape_html(&ctx.text))
        });

        registry.set(ElementKind::Callout, |ctx: &RenderContext| {
            format!(
                "<aside class=\"callout callout-{}\">{}</aside>",
                ctx.callout.class(),
                ctx.text
            )
        });

        registry.set(ElementKind::TechStack, |ctx: &RenderContext| {
            let badges: String = ctx
                .items
                .iter()
                .map(|item| format!("<li class=\"badge\">{item}</li>"))
                .collect();
            format!("<ul class=\"tech-stack\">{badges}</ul>")
        });

        registry
    }

    /// Register a handler for a kind, replacing any existing one.
    pub fn set<F>(&mut self, kind: ElementKind, handler: F)
    where
        F: Fn(&RenderContext) -> String + Send + Sync + 'static,
    {
        self.handlers.insert(kind, Box::new(handler));
    }

    /// Merge another registry's handlers over this one's. The other
    /// registry's handlers win on conflict.
    pub fn merge(&mut self, overrides: ComponentRegistry) {
        self.handlers.extend(overrides.handlers);
    }

    /// Render one element. Kinds without a registered handler fall back to
    /// passing the inner text through unchanged.
    pub fn render(&self, kind: ElementKind, ctx: &RenderContext) -> String {
        match self.handlers.get(&kind) {
            Some(handler) => handler(ctx),
            None => ctx.text.clone(),
        }
    }
}

/// Escape the characters that would break out of an HTML text node.
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
