/// Static API description and interactive viewer
pub mod docs;
/// API error types and handling
pub mod errors;
/// HTTP handlers for health and shipment endpoints
pub mod handlers;
/// Success envelope returned by every handler
pub mod response;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
/// Create-request validation
pub mod validation;
