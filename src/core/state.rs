use sqlx::postgres::PgPool;
use std::sync::Arc;

use crate::controllers::user::UserController;
use crate::core::error::ConfigError;
use crate::utils::auth::TokenSigner;
use crate::utils::password;
use crate::utils::validate::Validator;

#[derive(Clone, Debug)]
pub(crate) struct AppState {
    pub(crate) validator: Arc<Validator>,
    pub(crate) token_signer: TokenSigner,
    pub(crate) user_controller: UserController,
}

impl AppState {
    pub(crate) fn new(
        pool: PgPool,
        rsa_private_pem: &str,
        rsa_public_pem: &str,
    ) -> Result<Self, ConfigError> {
        Ok(AppState {
            validator: Arc::new(build_validator()?),
            token_signer: TokenSigner::new(rsa_private_pem, rsa_public_pem)?,
            user_controller: UserController::new(pool),
        })
    }
}

/// The validator used by every request handler. On top of the built-in rules
/// this registers the password strength rule and the messages for the rules
/// that do not carry a default.
pub(crate) fn build_validator() -> Result<Validator, ConfigError> {
    let mut validator = Validator::new()?;

    validator.register_message("startswith", "{0} should start with {1}");
    validator.register_message(
        "required_without_all",
        "{0} is a required field when {1} not present",
    );
    password::register_strength_rule(&mut validator);

    Ok(validator)
}
