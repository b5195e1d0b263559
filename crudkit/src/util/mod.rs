//! Utility surface: module-name introspection and JSON responses
//!
//! Small helpers that sit next to the CRUD core the way a base controller
//! would: deriving a logical module name from a fully-qualified type path,
//! and wrapping arbitrary data into a JSON response.

pub mod ident;

use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use serde_json::{Map, Value};

/// Derive a logical module name from a `::`-separated type path.
///
/// Segments are concatenated up to and including the first segment that
/// contains `marker` (case-sensitive substring match). A segment that
/// *starts* with the marker is skipped rather than concatenated. When no
/// segment contains the marker past its first character, the scan yields an
/// empty string — prefer configuring the module name explicitly
/// (see [`CrudConfig::new`](crate::controller::CrudConfig::new)) over relying
/// on this inference.
///
/// # Examples
///
/// ```rust
/// use crudkit::util::module_name;
///
/// assert_eq!(module_name("acme::ShopModule::WidgetController", "Module"), "acmeShopModule");
/// assert_eq!(module_name("acme::widgets::Controller", "Module"), "");
/// ```
#[must_use]
pub fn module_name(type_path: &str, marker: &str) -> String {
    let mut name = String::new();
    for segment in type_path.split("::") {
        match segment.find(marker) {
            Some(0) => {}
            Some(_) => {
                name.push_str(segment);
                return name;
            }
            None => name.push_str(segment),
        }
    }
    String::new()
}

/// [`module_name`] applied to the compile-time path of `T`.
///
/// # Examples
///
/// ```rust
/// use crudkit::util::module_name_of;
///
/// struct Widget;
/// // The exact result depends on the crate and module the type lives in.
/// let _ = module_name_of::<Widget>("Module");
/// ```
#[must_use]
pub fn module_name_of<T>(marker: &str) -> String {
    module_name(std::any::type_name::<T>(), marker)
}

/// Wrap `value` into an `application/json` response with `status`.
///
/// `None` (or an explicit JSON null) is normalized to an empty object rather
/// than a literal `null` body.
#[must_use]
pub fn json_response(value: Option<Value>, status: StatusCode) -> Response {
    let body = match value {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(value) => value,
    };
    (status, Json(body)).into_response()
}

/// [`json_response`] with status 200.
#[must_use]
pub fn json_ok(value: Option<Value>) -> Response {
    json_response(value, StatusCode::OK)
}
