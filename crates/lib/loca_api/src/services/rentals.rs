//! Rental service — creation and owner-gated updates, with best-effort
//! picture attachment.

use tracing::warn;

use loca_core::models::rental::{NewRental, Rental};
use loca_core::models::user::User;
use loca_core::ownership;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::models::{RentalForm, UploadedFile};

/// Create a rental owned by `owner`.
pub async fn create(state: &AppState, owner: &User, form: RentalForm) -> ApiResult<Rental> {
    let new = NewRental {
        name: required(form.name, "name")?,
        surface: required(form.surface, "surface")?,
        price: required(form.price, "price")?,
        description: form.description.unwrap_or_default(),
        owner_id: owner.id,
    };
    let rental = state.rentals.create(new).await?;
    attach_picture(state, rental, form.picture).await
}

/// Update a rental's mutable fields. Only the owner gets through; everyone
/// else sees 403 regardless of what they send.
pub async fn update(
    state: &AppState,
    actor: &User,
    id: i64,
    form: RentalForm,
) -> ApiResult<Rental> {
    let mut rental = state
        .rentals
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Rental {id} not found")))?;
    ownership::authorize_mutation(&rental, actor.id)?;

    rental.name = required(form.name, "name")?;
    rental.surface = required(form.surface, "surface")?;
    rental.price = required(form.price, "price")?;
    rental.description = form.description.unwrap_or_default();
    let rental = state.rentals.save(&rental).await?;
    attach_picture(state, rental, form.picture).await
}

/// Store the uploaded picture and record its URL on the rental.
///
/// The rental row is already committed when this runs. A storage failure is
/// logged and swallowed, leaving the rental valid without a picture.
async fn attach_picture(
    state: &AppState,
    rental: Rental,
    picture: Option<UploadedFile>,
) -> ApiResult<Rental> {
    let Some(picture) = picture else {
        return Ok(rental);
    };
    match state
        .files
        .store(rental.id, &picture.filename, &picture.bytes)
        .await
    {
        Ok(url) => {
            state.rentals.set_picture(rental.id, &url).await?;
            Ok(Rental {
                picture: Some(url),
                ..rental
            })
        }
        Err(e) => {
            warn!(rental_id = rental.id, error = %e, "picture not stored; rental kept without it");
            Ok(rental)
        }
    }
}

fn required<T>(value: Option<T>, field: &str) -> ApiResult<T> {
    value.ok_or_else(|| ApiError::Validation(format!("Missing field '{field}'")))
}
