//! Sandbox routing middleware.
//!
//! Sits in front of the static file service and decides, per request,
//! whether the first path segment names a sandbox folder. Sandbox requests
//! are either answered directly (canonical redirect, synthesized page) or
//! forwarded with a rewritten URI that points into the examples mount.
//! Everything else is forwarded untouched.
//!
//! The router holds no cache: every request re-probes the filesystem.

use crate::dev::convention::{is_synthetic_entry, EntryConvention};
use crate::dev::entry::write_entry;
use crate::dev::shell::render_shell;
use crate::dev::transform::HtmlTransform;
use crate::error::RouterError;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, uri::PathAndQuery, HeaderValue, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// First segment reserved for the landing page.
pub const LANDING_ALIAS: &str = "index";

/// Prefix of internal module routes that are never sandbox names.
pub const INTERNAL_MARKER: char = '@';

/// Classification of a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// Not a sandbox request
    Passthrough,
    /// Candidate sandbox `name`; `rest` is empty or starts with `/`
    Sandbox { name: &'a str, rest: &'a str },
}

/// Split a request path into sandbox name and remainder.
///
/// The first segment must be non-empty, contain no `.` (root-level files such
/// as `/favicon.ico` are never sandboxes), not equal [`LANDING_ALIAS`] and not
/// start with [`INTERNAL_MARKER`]. No filesystem check happens here.
pub fn classify_path(path: &str) -> Route<'_> {
    let Some(trimmed) = path.strip_prefix('/') else {
        return Route::Passthrough;
    };

    let (name, rest) = match trimmed.find('/') {
        Some(pos) => (&trimmed[..pos], &trimmed[pos..]),
        None => (trimmed, ""),
    };

    if name.is_empty()
        || name.contains('.')
        || name == LANDING_ALIAS
        || name.starts_with(INTERNAL_MARKER)
    {
        return Route::Passthrough;
    }

    Route::Sandbox { name, rest }
}

/// What the middleware does with a request.
#[derive(Debug)]
pub enum Outcome {
    /// Answer without reaching the file service
    Respond(Response),
    /// Hand the (possibly rewritten) request downstream
    Forward(Request),
}

/// Shared router state.
#[derive(Clone)]
pub struct SandboxRouter {
    examples_root: PathBuf,
    mount: String,
    lang: String,
    transform: Arc<dyn HtmlTransform>,
}

impl SandboxRouter {
    /// Create a router serving folders under `examples_root`, which the file
    /// service exposes at the URL prefix `mount` (for example `/examples`).
    pub fn new(
        examples_root: impl Into<PathBuf>,
        mount: impl Into<String>,
        lang: impl Into<String>,
        transform: Arc<dyn HtmlTransform>,
    ) -> Self {
        Self {
            examples_root: examples_root.into(),
            mount: mount.into().trim_end_matches('/').to_string(),
            lang: lang.into(),
            transform,
        }
    }

    pub fn examples_root(&self) -> &Path {
        &self.examples_root
    }

    pub fn mount(&self) -> &str {
        &self.mount
    }

    /// Route a single request.
    pub async fn handle(&self, request: Request) -> Result<Outcome, RouterError> {
        let path = request.uri().path().to_string();
        let query = request
            .uri()
            .query()
            .map(|q| format!("?{}", q))
            .unwrap_or_default();

        let (name, rest) = match classify_path(&path) {
            Route::Passthrough => return Ok(Outcome::Forward(request)),
            Route::Sandbox { name, rest } => (name, rest),
        };
        let folder = self.examples_root.join(name);

        // Relative asset references inside the page need a directory-like base URL.
        if rest.is_empty() && !path.ends_with('/') {
            let location = format!("/{}/{}", name, query);
            tracing::debug!("Redirecting {} -> {}", path, location);
            return Ok(Outcome::Respond(redirect(&location)));
        }

        if !rest.is_empty() && rest != "/" {
            return Ok(self.route_asset(request, &folder, name, rest, &query).await);
        }

        let Some(convention) = EntryConvention::detect(&folder).await else {
            tracing::debug!("No entry file in {}, passing {} through", folder.display(), path);
            return Ok(Outcome::Forward(request));
        };

        let Some(entry_file) = convention.entry_file() else {
            let target = format!("{}/{}/index.html{}", self.mount, name, query);
            tracing::debug!("Serving static page for {} via {}", name, target);
            return Ok(Outcome::Forward(rewrite(request, &target)));
        };

        write_entry(&folder, convention).await?;

        let html = render_shell(name, entry_file, &self.lang);
        let url = format!("{}/{}/index.html", self.mount, name);
        let html = self
            .transform
            .transform(&url, html)
            .await
            .map_err(|e| RouterError::Transform {
                url: url.clone(),
                message: e.to_string(),
            })?;

        tracing::debug!("Synthesized {} page for {}", convention, name);
        Ok(Outcome::Respond(html_response(html)))
    }

    /// Rewrite `/<name>/<rest>` into the examples mount when the file exists
    /// or is a synthetic entry; otherwise forward it untouched.
    async fn route_asset(
        &self,
        request: Request,
        folder: &Path,
        name: &str,
        rest: &str,
        query: &str,
    ) -> Outcome {
        let relative = Path::new(rest.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Outcome::Forward(request);
        }

        let synthetic = relative
            .file_name()
            .and_then(|f| f.to_str())
            .is_some_and(is_synthetic_entry);
        let exists = tokio::fs::try_exists(folder.join(relative))
            .await
            .unwrap_or(false);

        if synthetic || exists {
            let target = format!("{}/{}{}{}", self.mount, name, rest, query);
            tracing::trace!("Rewriting asset request to {}", target);
            return Outcome::Forward(rewrite(request, &target));
        }

        Outcome::Forward(request)
    }
}

/// Middleware entry point, used with `axum::middleware::from_fn_with_state`.
pub async fn route_sandbox(
    State(router): State<SandboxRouter>,
    request: Request,
    next: Next,
) -> Response {
    match router.handle(request).await {
        Ok(Outcome::Respond(response)) => response,
        Ok(Outcome::Forward(request)) => next.run(request).await,
        Err(err) => err.into_response(),
    }
}

/// Replace the path and query of `request`, keeping scheme and authority.
fn rewrite(mut request: Request, path_and_query: &str) -> Request {
    let Ok(pq) = PathAndQuery::try_from(path_and_query) else {
        tracing::warn!("Cannot rewrite request to invalid path {}", path_and_query);
        return request;
    };

    let mut parts = request.uri().clone().into_parts();
    parts.path_and_query = Some(pq);
    match Uri::from_parts(parts) {
        Ok(uri) => *request.uri_mut() = uri,
        Err(e) => tracing::warn!("Cannot rewrite request to {}: {}", path_and_query, e),
    }
    request
}

fn redirect(location: &str) -> Response {
    match HeaderValue::try_from(location) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(_) => StatusCode::BAD_REQUEST.into_response(),
    }
}

fn html_response(html: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from(html),
    )
        .into_response()
}
