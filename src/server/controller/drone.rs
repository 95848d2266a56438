use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        drone::{CreateDroneDto, DroneDto, DroneLoadingDto, DroneLoadsDto, LoadDroneDto, UpdateDroneStateDto},
    },
    server::{
        error::AppError,
        model::{drone::CreateDroneParams, load::LoadDroneParams},
        service::{drone::DroneService, loading::LoadingService},
        state::AppState,
    },
};

/// Tag for grouping drone endpoints in OpenAPI documentation
pub static DRONE_TAG: &str = "drone";

/// List every registered drone.
///
/// # Returns
/// - `200 OK` - All drones ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drones/",
    tag = DRONE_TAG,
    responses(
        (status = 200, description = "All registered drones", body = Vec<DroneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_drones(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let drones = DroneService::new(&state.db).get_all().await?;

    let dtos: Vec<DroneDto> = drones.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Register a new drone.
///
/// Weight limit, battery and state default to 500g, 100% and IDLE when omitted.
///
/// # Returns
/// - `200 OK` - The registered drone
/// - `400 Bad Request` - Serial number already registered
/// - `422 Unprocessable Entity` - Field out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/drones/",
    tag = DRONE_TAG,
    request_body = CreateDroneDto,
    responses(
        (status = 200, description = "Drone registered", body = DroneDto),
        (status = 400, description = "Serial number already registered", body = ErrorDto),
        (status = 422, description = "Invalid drone data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_drone(
    State(state): State<AppState>,
    Json(payload): Json<CreateDroneDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateDroneParams::from_dto(payload)?;

    let drone = DroneService::new(&state.db).create(params).await?;

    Ok((StatusCode::OK, Json(drone.into_dto())))
}

/// Get a drone by id.
///
/// # Returns
/// - `200 OK` - The drone
/// - `404 Not Found` - No drone with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drones/{drone_id}",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "The drone", body = DroneDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let drone = DroneService::new(&state.db).get_by_id(drone_id).await?;

    Ok((StatusCode::OK, Json(drone.into_dto())))
}

/// List drones that can be loaded right now.
///
/// A drone is available when it is IDLE with at least 25% battery.
#[utoipa::path(
    get,
    path = "/drones/available/",
    tag = DRONE_TAG,
    responses(
        (status = 200, description = "Drones available for loading", body = Vec<DroneDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_drones(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let drones = DroneService::new(&state.db).get_available().await?;

    let dtos: Vec<DroneDto> = drones.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Load medications onto a drone.
///
/// Medications are taken first-fit in the order given; ids that do not exist are
/// skipped. On success the drone is LOADED and the new load is returned with it.
///
/// # Returns
/// - `200 OK` - Drone and the created load
/// - `404 Not Found` - No drone with that id
/// - `405 Method Not Allowed` - Drone not IDLE or battery below 25%
/// - `406 Not Acceptable` - No medication could be loaded
/// - `409 Conflict` - Another request is loading the drone
/// - `422 Unprocessable Entity` - Origin or destination longer than 100 characters
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/drones/{drone_id}/loading/",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    request_body = LoadDroneDto,
    responses(
        (status = 200, description = "Drone loaded", body = DroneLoadingDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 405, description = "Drone not IDLE or battery too low", body = ErrorDto),
        (status = 406, description = "No medication could be loaded", body = ErrorDto),
        (status = 409, description = "Drone claimed by another request", body = ErrorDto),
        (status = 422, description = "Origin or destination too long", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn load_drone(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
    Json(payload): Json<LoadDroneDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = LoadDroneParams::from_dto(payload)?;

    let loaded = LoadingService::new(&state.db)
        .load(drone_id, params)
        .await?;

    Ok((StatusCode::OK, Json(loaded.into_dto(state.images.dir()))))
}

/// List every load a drone has carried, newest first.
///
/// # Returns
/// - `200 OK` - Drone with its loads
/// - `404 Not Found` - No drone with that id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/drones/{drone_id}/loaded/",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    responses(
        (status = 200, description = "Drone with its loads", body = DroneLoadsDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drone_loads(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let (drone, loads) = DroneService::new(&state.db).get_loads(drone_id).await?;

    let image_dir = state.images.dir();

    Ok((
        StatusCode::OK,
        Json(DroneLoadsDto {
            drone: drone.into_dto(),
            loads: loads.into_iter().map(|l| l.into_dto(image_dir)).collect(),
        }),
    ))
}

/// Move a drone one step along the delivery cycle.
///
/// Covers LOADED -> DELIVERING -> DELIVERED -> RETURNING -> IDLE. Transitions
/// into or out of LOADING only happen through the loading endpoint.
///
/// # Returns
/// - `200 OK` - Drone in its new state
/// - `404 Not Found` - No drone with that id
/// - `409 Conflict` - Not an allowed transition, or the state changed concurrently
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/drones/{drone_id}/state",
    tag = DRONE_TAG,
    params(
        ("drone_id" = i32, Path, description = "Drone ID")
    ),
    request_body = UpdateDroneStateDto,
    responses(
        (status = 200, description = "State updated", body = DroneDto),
        (status = 404, description = "Drone not found", body = ErrorDto),
        (status = 409, description = "Transition not allowed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_drone_state(
    State(state): State<AppState>,
    Path(drone_id): Path<i32>,
    Json(payload): Json<UpdateDroneStateDto>,
) -> Result<impl IntoResponse, AppError> {
    let drone = DroneService::new(&state.db)
        .update_state(drone_id, payload.state.into())
        .await?;

    Ok((StatusCode::OK, Json(drone.into_dto())))
}
