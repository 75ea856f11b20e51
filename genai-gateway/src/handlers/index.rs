use crate::dtos::{EndpointsResponse, ENDPOINTS};
use axum::Json;

/// List the routes this gateway serves.
pub async fn list_endpoints() -> Json<EndpointsResponse> {
    Json(EndpointsResponse {
        endpoints: ENDPOINTS,
    })
}
