use serde::Serialize;

use crate::types::user::User;

pub(crate) const REGISTRATION_SUCCESS_MSG: &str = "user registration success";

/// Wire shape of every error response: `{"messages":[...]}`.
#[derive(Debug, Serialize)]
pub(crate) struct Errors {
    pub(crate) messages: Vec<String>,
}

impl Errors {
    pub(crate) fn new(messages: Vec<String>) -> Self {
        Self { messages }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct Registered {
    pub(crate) id: String,
    pub(crate) message: String,
}

impl Registered {
    pub(crate) fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            message: REGISTRATION_SUCCESS_MSG.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoggedIn {
    pub(crate) id: String,
    pub(crate) token: String,
}

impl LoggedIn {
    pub(crate) fn new(id: &str, token: &str) -> Self {
        Self {
            id: id.to_string(),
            token: token.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserData {
    pub(crate) full_name: String,
    pub(crate) phone_number: String,
}

impl UserData {
    pub(crate) fn new(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            phone_number: user.phone_number.clone(),
        }
    }
}
