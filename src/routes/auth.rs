use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::instrument;

use crate::core::error::Error;
use crate::core::state::AppState;
use crate::types::request::{LoginData, RegisterData};
use crate::types::response;
use crate::utils::bind::bind_and_validate;
use crate::utils::password;

#[instrument(skip_all)]
pub(crate) async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let data: RegisterData = bind_and_validate(&state.validator, &headers, &body)?;

    let full_name = data.full_name.as_deref().unwrap_or_default();
    let password = data.password.as_deref().unwrap_or_default();
    let phone_number = data.phone_number.as_deref().unwrap_or_default();

    if state
        .user_controller
        .get_by_phone_number(phone_number)
        .await?
        .is_some()
    {
        return Err(Error::PhoneNumberTaken);
    }

    let (password_hash, salt) = password::salt_and_hash(password);

    let id = state
        .user_controller
        .insert(phone_number, full_name, &password_hash, &salt)
        .await?;

    Ok((StatusCode::CREATED, Json(response::Registered::new(&id))))
}

#[instrument(skip_all)]
pub(crate) async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let data: LoginData = bind_and_validate(&state.validator, &headers, &body)?;

    let user = state
        .user_controller
        .get_by_phone_number(data.phone_number.as_deref().unwrap_or_default())
        .await?
        .ok_or(Error::IncorrectCredentials)?;

    if !password::verify(
        data.password.as_deref().unwrap_or_default(),
        &user.password_hash,
        &user.salt,
    ) {
        return Err(Error::IncorrectCredentials);
    }

    let token = state.token_signer.issue(&user)?;

    // Login bookkeeping never blocks a successful login.
    if let Err(e) = state.user_controller.increment_login_count(&user).await {
        tracing::info!("failed to increment login count for {}: {:?}", user.id, e);
    }

    Ok(Json(response::LoggedIn::new(&user.id, &token)))
}
