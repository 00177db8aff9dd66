pub(crate) mod auth;
pub(crate) mod bind;
pub(crate) mod password;
pub(crate) mod validate;
