use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{drone, medication},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Drone Fleet API", description = "Drone registration, loading and medication inventory"),
    tags(
        (name = "drone", description = "Drone registration, loading and lifecycle"),
        (name = "medication", description = "Medication inventory")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI docs at `/docs` and static files at `/static`.
pub fn router(static_dir: &Path) -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(drone::list_drones, drone::create_drone))
        .routes(routes!(drone::get_drone))
        .routes(routes!(drone::get_available_drones))
        .routes(routes!(drone::load_drone))
        .routes(routes!(drone::get_drone_loads))
        .routes(routes!(drone::update_drone_state))
        .routes(routes!(medication::list_medications, medication::create_medication))
        .routes(routes!(medication::get_medication))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .nest_service("/static", ServeDir::new(static_dir))
}
