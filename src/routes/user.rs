use axum::body::Bytes;
use axum::extract::{Extension, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use axum_macros::debug_handler;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::UpdateUserData;
use crate::types::response;
use crate::utils::auth::Claims;
use crate::utils::bind::bind_and_validate;

#[instrument(skip_all)]
pub(crate) async fn get(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, Error> {
    let user = state
        .user_controller
        .get_by_id(&claims.id)
        .await?
        .ok_or(Error::UserNotFound)?;

    Ok(Json(response::UserData::new(&user)))
}

// #[debug_handler]
#[instrument(skip_all)]
pub(crate) async fn update(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let data: UpdateUserData = bind_and_validate(&state.validator, &headers, &body)?;

    let mut user = state
        .user_controller
        .get_by_id(&claims.id)
        .await?
        .ok_or(Error::UserNotFound)?;

    if let Some(phone_number) = data.trimmed_phone_number() {
        if phone_number != user.phone_number
            && state
                .user_controller
                .get_by_phone_number(&phone_number)
                .await?
                .is_some()
        {
            return Err(Error::PhoneNumberTaken);
        }
    }

    user.apply_update(&data);
    state.user_controller.update(&user).await?;

    Ok(Json(response::UserData::new(&user)))
}
