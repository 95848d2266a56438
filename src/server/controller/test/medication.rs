use super::*;
use crate::{
    model::medication::MedicationDto,
    server::controller::medication::{create_medication, get_medication, list_medications},
};

/// Tests registering a medication with a PNG image.
///
/// Expected: 200 and the image reported as an absolute path in the image directory
#[tokio::test]
async fn registers_medication_with_image() {
    let (state, _static_dir) = test_state().await;

    let form = multipart(
        &[("name", "Morphine"), ("weight", "15"), ("code", "MORPH_10")],
        Some(("box.png", "image/png", b"\x89PNG")),
    )
    .await;
    let response = create_medication(State(state.clone()), form)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let medication: MedicationDto = body_json(response).await;
    assert_eq!(medication.name, "Morphine");
    assert_eq!(medication.weight, 15);
    assert_eq!(medication.code, "MORPH_10");

    let image = medication.image.unwrap();
    let image_path = std::path::Path::new(&image);
    assert!(image_path.is_absolute());
    assert!(image_path.starts_with(state.images.dir()));
    assert!(image.ends_with(".png"));
    assert_eq!(std::fs::read(image_path).unwrap(), b"\x89PNG");

    let response = get_medication(State(state), Path(medication.id))
        .await
        .into_response();
    let fetched: MedicationDto = body_json(response).await;
    assert_eq!(fetched.image.as_deref(), Some(image.as_str()));
}

/// Expected: 200 with no image when the form has none
#[tokio::test]
async fn registers_medication_without_image() {
    let (state, _static_dir) = test_state().await;

    let form = multipart(
        &[("name", "Saline"), ("weight", "250"), ("code", "SAL_1")],
        None,
    )
    .await;
    let response = create_medication(State(state.clone()), form)
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::OK);
    let medication: MedicationDto = body_json(response).await;
    assert!(medication.image.is_none());

    let response = list_medications(State(state)).await.into_response();
    let all: Vec<MedicationDto> = body_json(response).await;
    assert_eq!(all.len(), 1);
}

/// Expected: 406 with the image type detail for a GIF upload
#[tokio::test]
async fn gif_image_is_not_acceptable() {
    let (state, _static_dir) = test_state().await;

    let form = multipart(
        &[("name", "Morphine"), ("weight", "15"), ("code", "MORPH_20")],
        Some(("anim.gif", "image/gif", b"GIF89a")),
    )
    .await;
    let response = create_medication(State(state), form).await.into_response();

    assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
    assert_eq!(
        error_detail(response).await,
        "Only .jpeg or .png files allowed"
    );
}

/// Expected: 400 with the duplicate code detail
#[tokio::test]
async fn duplicate_code_is_bad_request() {
    let (state, _static_dir) = test_state().await;

    factory::medication::MedicationFactory::new(&state.db)
        .code("MORPH_30")
        .build()
        .await
        .unwrap();

    let form = multipart(
        &[("name", "Morphine"), ("weight", "15"), ("code", "MORPH_30")],
        None,
    )
    .await;
    let response = create_medication(State(state), form).await.into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(error_detail(response).await, "Code already registered");
}

/// Tests form validation failures.
///
/// Expected: 422 for a bad name, a lower case code, a zero weight and a missing weight
#[tokio::test]
async fn invalid_form_is_unprocessable() {
    let (state, _static_dir) = test_state().await;

    let forms: [&[(&str, &str)]; 4] = [
        &[("name", "Morphine 10"), ("weight", "15"), ("code", "M_1")],
        &[("name", "Morphine"), ("weight", "15"), ("code", "m_1")],
        &[("name", "Morphine"), ("weight", "0"), ("code", "M_1")],
        &[("name", "Morphine"), ("code", "M_1")],
    ];

    for fields in forms {
        let response = create_medication(State(state.clone()), multipart(fields, None).await)
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

/// Expected: 404 for an unknown medication
#[tokio::test]
async fn unknown_medication_is_not_found() {
    let (state, _static_dir) = test_state().await;

    let response = get_medication(State(state), Path(404))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
