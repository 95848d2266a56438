use axum::{
    body::Body,
    extract::{FromRequest, Multipart, Path, State},
    http::{header::CONTENT_TYPE, Request, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::api::ErrorDto,
    server::{service::image::ImageStore, state::AppState},
};

mod medication;

const BOUNDARY: &str = "drone-fleet-boundary";

/// Builds application state around a fresh in-memory database and a temporary
/// static directory. The returned directory must outlive the state.
async fn test_state() -> (AppState, tempfile::TempDir) {
    let test = TestBuilder::new()
        .with_fleet_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.unwrap();

    let static_dir = tempfile::tempdir().unwrap();
    let images = ImageStore::init(static_dir.path()).await.unwrap();

    (AppState::new(db, images), static_dir)
}

async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn error_detail(response: Response) -> String {
    body_json::<ErrorDto>(response).await.detail
}

/// Image part of a multipart form: file name, content type and bytes.
type FilePart<'a> = (&'a str, &'a str, &'a [u8]);

async fn multipart(fields: &[(&str, &str)], image: Option<FilePart<'_>>) -> Multipart {
    let mut body = Vec::new();

    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
    }

    if let Some((file_name, content_type, bytes)) = image {
        body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                BOUNDARY, file_name, content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());

    let request = Request::builder()
        .method("POST")
        .uri("/medications/")
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap();

    Multipart::from_request(request, &()).await.unwrap()
}
