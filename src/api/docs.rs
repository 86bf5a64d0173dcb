//! API documentation endpoints.
//!
//! Both documents are compiled into the binary; nothing here touches the
//! database.

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

/// Path of the OpenAPI document, referenced by the viewer page
pub const OPENAPI_PATH: &str = "/static/openapi.yaml";
/// Prefix of the interactive viewer
pub const DOCS_PATH: &str = "/api-docs";

const OPENAPI_SPEC: &str = include_str!("../../static/openapi.yaml");
const SWAGGER_UI_PAGE: &str = include_str!("../../static/swagger.html");

pub async fn openapi_spec() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/yaml")], OPENAPI_SPEC)
}

pub async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_PAGE)
}

/// Routes serving the OpenAPI document and the Swagger UI page
pub fn router() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_spec))
        .route(DOCS_PATH, get(swagger_ui))
        .route("/api-docs/", get(swagger_ui))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_yaml::Value;

    #[test]
    fn openapi_document_describes_every_route() {
        let doc: Value = serde_yaml::from_str(OPENAPI_SPEC).unwrap();
        let paths = doc["paths"].as_mapping().unwrap();

        for path in ["/health", "/shipments", "/shipments/{id}"] {
            assert!(paths.contains_key(path), "missing {path}");
        }
        assert!(doc["paths"]["/shipments"]["post"]["responses"]["201"].is_mapping());
    }

    #[test]
    fn viewer_points_at_openapi_document() {
        assert!(SWAGGER_UI_PAGE.contains(OPENAPI_PATH));
    }
}
