//! HTML transformation hook applied to synthesized pages.
//!
//! The router hands every generated shell to an [`HtmlTransform`] before
//! responding, so tooling that the host injects into regular pages (client
//! scripts, shared stylesheets) also lands in synthesized ones.

use crate::config::InjectConfig;
use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by an [`HtmlTransform`].
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TransformError(pub String);

/// Hook that rewrites an HTML document before it is served.
#[async_trait]
pub trait HtmlTransform: Send + Sync {
    /// Transform `html`, served under the virtual `url`.
    async fn transform(&self, url: &str, html: String) -> Result<String, TransformError>;
}

/// Transform that leaves documents untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passthrough;

#[async_trait]
impl HtmlTransform for Passthrough {
    async fn transform(&self, _url: &str, html: String) -> Result<String, TransformError> {
        Ok(html)
    }
}

/// Transform that injects raw tags before `</head>` and `</body>`.
#[derive(Debug, Clone, Default)]
pub struct TagInjector {
    head: Vec<String>,
    body: Vec<String>,
}

impl TagInjector {
    pub fn new(head: Vec<String>, body: Vec<String>) -> Self {
        Self { head, body }
    }

    pub fn from_config(config: &InjectConfig) -> Self {
        Self::new(config.head.clone(), config.body.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_empty() && self.body.is_empty()
    }
}

#[async_trait]
impl HtmlTransform for TagInjector {
    async fn transform(&self, url: &str, html: String) -> Result<String, TransformError> {
        if self.is_empty() {
            return Ok(html);
        }

        tracing::trace!("Injecting {} tag(s) into {}", self.head.len() + self.body.len(), url);
        let html = inject_before(html, "</head>", &self.head);
        Ok(inject_before(html, "</body>", &self.body))
    }
}

/// Insert `tags` before the last occurrence of `closing_tag`.
///
/// Falls back to appending at the end when the tag is missing.
fn inject_before(html: String, closing_tag: &str, tags: &[String]) -> String {
    if tags.is_empty() {
        return html;
    }

    let mut snippet = String::new();
    for tag in tags {
        snippet.push_str("  ");
        snippet.push_str(tag);
        snippet.push('\n');
    }

    match html.rfind(closing_tag) {
        Some(pos) => {
            let mut result = String::with_capacity(html.len() + snippet.len());
            result.push_str(&html[..pos]);
            result.push_str(&snippet);
            result.push_str(&html[pos..]);
            result
        }
        None => {
            let mut result = html;
            if !result.ends_with('\n') {
                result.push('\n');
            }
            result.push_str(&snippet);
            result
        }
    }
}
