//! Rental request handlers.
//!
//! Create and update take `multipart/form-data` (the picture rides along
//! with the fields), so the form is decoded by hand here and validated in
//! the service.

use axum::Json;
use axum::extract::multipart::Field;
use axum::extract::{Multipart, Path, State};

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::middleware::auth::CurrentUser;
use crate::models::{RentalForm, RentalListResponse, RentalResponse, StatusMessage, UploadedFile};
use crate::services::rentals;

/// `GET /rentals` — every rental, oldest first.
pub async fn list_rentals_handler(
    State(state): State<AppState>,
    _user: CurrentUser,
) -> ApiResult<Json<RentalListResponse>> {
    let rentals = state.rentals.list().await?;
    Ok(Json(RentalListResponse {
        rentals: rentals.into_iter().map(RentalResponse::from).collect(),
    }))
}

/// `GET /rentals/{id}` — a single rental.
pub async fn get_rental_handler(
    State(state): State<AppState>,
    _user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiResult<Json<RentalResponse>> {
    let rental = state
        .rentals
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Rental {id} not found")))?;
    Ok(Json(RentalResponse::from(rental)))
}

/// `POST /rentals` — create a rental owned by the caller.
pub async fn create_rental_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    multipart: Multipart,
) -> ApiResult<Json<StatusMessage>> {
    let form = parse_rental_form(multipart).await?;
    rentals::create(&state, &user.0, form).await?;
    Ok(Json(StatusMessage {
        message: "Rental created".into(),
    }))
}

/// `PUT /rentals/{id}` — update a rental's mutable fields; owner only.
pub async fn update_rental_handler(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> ApiResult<Json<StatusMessage>> {
    let form = parse_rental_form(multipart).await?;
    rentals::update(&state, &user.0, id, form).await?;
    Ok(Json(StatusMessage {
        message: "Rental updated".into(),
    }))
}

/// Decode the multipart form. Unknown parts are skipped; an empty or
/// nameless picture part counts as no picture.
async fn parse_rental_form(mut multipart: Multipart) -> ApiResult<RentalForm> {
    let mut form = RentalForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        match name.as_str() {
            "name" => form.name = Some(text_field(&name, field).await?),
            "surface" => form.surface = Some(number_field(&name, field).await?),
            "price" => form.price = Some(number_field(&name, field).await?),
            "description" => form.description = Some(text_field(&name, field).await?),
            "picture" => {
                let filename = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::Validation(format!("Unreadable picture part: {e}")))?;
                if let Some(filename) = filename
                    && !bytes.is_empty()
                {
                    form.picture = Some(UploadedFile {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            _ => {}
        }
    }
    Ok(form)
}

async fn text_field(name: &str, field: Field<'_>) -> ApiResult<String> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Validation(format!("Unreadable field '{name}': {e}")))
}

async fn number_field(name: &str, field: Field<'_>) -> ApiResult<f64> {
    let raw = text_field(name, field).await?;
    raw.trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("Field '{name}' must be a number, got '{raw}'")))
}
