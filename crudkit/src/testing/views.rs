//! JSON renderer and pattern-based URL resolver

use std::collections::HashMap;

use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::CrudError;
use crate::render::{ViewData, ViewRenderer};
use crate::routes::UrlResolver;

/// Renders view data as a JSON body tagged with the view identifier.
///
/// The response shape is `{"view": "<id>", "data": {...}}`, which makes
/// controller output assertable without a template engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl ViewRenderer for JsonRenderer {
    fn render(&self, view: &str, data: &ViewData) -> Result<Response, CrudError> {
        let data = serde_json::to_value(data)?;
        Ok(Json(json!({ "view": view, "data": data })).into_response())
    }
}

/// Pattern-based [`UrlResolver`].
///
/// Routes map to URL patterns with `{name}` placeholders:
///
/// ```rust
/// use crudkit::routes::UrlResolver;
/// use crudkit::testing::StaticUrls;
///
/// let urls = StaticUrls::new()
///     .route("index", "/widgets")
///     .route("edit", "/widgets/{id}/edit");
///
/// assert_eq!(urls.url_for("edit", &[("id", "7")]).unwrap(), "/widgets/7/edit");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticUrls {
    routes: HashMap<String, String>,
}

impl StaticUrls {
    /// Create a resolver with no routes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `pattern` under the logical name `route`.
    #[must_use]
    pub fn route(mut self, route: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.routes.insert(route.into(), pattern.into());
        self
    }
}

impl UrlResolver for StaticUrls {
    fn url_for(&self, route: &str, params: &[(&str, &str)]) -> Result<String, CrudError> {
        let pattern = self
            .routes
            .get(route)
            .ok_or_else(|| CrudError::UnknownRoute(route.to_string()))?;
        let mut url = pattern.clone();
        for (key, value) in params {
            url = url.replace(&format!("{{{key}}}"), value);
        }
        Ok(url)
    }
}
