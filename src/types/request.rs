use serde::Deserialize;

use crate::utils::validate::{Field, Rule, Validate};

pub(crate) const UPDATE_NEEDS_ONE_FIELD_MSG: &str =
    "request need to have either fullName or phoneNumber";

const FULL_NAME_RULES: &[Rule] = &[
    Rule::new("required"),
    Rule::with_param("min", "3"),
    Rule::with_param("max", "60"),
];

const PASSWORD_RULES: &[Rule] = &[
    Rule::new("required"),
    Rule::with_param("min", "6"),
    Rule::with_param("max", "64"),
    Rule::new("password"),
];

const PHONE_NUMBER_RULES: &[Rule] = &[
    Rule::new("required"),
    Rule::with_param("min", "10"),
    Rule::with_param("max", "13"),
    Rule::with_param("startswith", "+62"),
    Rule::new("e164"),
];

const PASSWORD_PRESENT_RULES: &[Rule] = &[Rule::new("required")];

const OPTIONAL_FULL_NAME_RULES: &[Rule] =
    &[Rule::with_param("min", "3"), Rule::with_param("max", "60")];

const OPTIONAL_PHONE_NUMBER_RULES: &[Rule] = &[
    Rule::with_param("min", "10"),
    Rule::with_param("max", "13"),
    Rule::with_param("startswith", "+62"),
    Rule::new("e164"),
];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RegisterData {
    pub(crate) full_name: Option<String>,
    pub(crate) password: Option<String>,
    pub(crate) phone_number: Option<String>,
}

impl Validate for RegisterData {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("fullName", self.full_name.as_deref(), FULL_NAME_RULES),
            Field::new("password", self.password.as_deref(), PASSWORD_RULES),
            Field::new("phoneNumber", self.phone_number.as_deref(), PHONE_NUMBER_RULES),
        ]
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LoginData {
    pub(crate) password: Option<String>,
    pub(crate) phone_number: Option<String>,
}

impl Validate for LoginData {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("password", self.password.as_deref(), PASSWORD_PRESENT_RULES),
            Field::new("phoneNumber", self.phone_number.as_deref(), PHONE_NUMBER_RULES),
        ]
    }
}

/// Both fields optional; present values still have to satisfy the same
/// format rules as at registration.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateUserData {
    pub(crate) full_name: Option<String>,
    pub(crate) phone_number: Option<String>,
}

impl Validate for UpdateUserData {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field::new("fullName", self.full_name.as_deref(), OPTIONAL_FULL_NAME_RULES),
            Field::new(
                "phoneNumber",
                self.phone_number.as_deref(),
                OPTIONAL_PHONE_NUMBER_RULES,
            ),
        ]
    }

    fn cross_field_checks(&self) -> Vec<String> {
        if self.full_name.is_none() && self.phone_number.is_none() {
            return vec![UPDATE_NEEDS_ONE_FIELD_MSG.to_string()];
        }

        Vec::new()
    }
}

impl UpdateUserData {
    pub(crate) fn trimmed_full_name(&self) -> Option<String> {
        trimmed(self.full_name.as_deref())
    }

    pub(crate) fn trimmed_phone_number(&self) -> Option<String> {
        trimmed(self.phone_number.as_deref())
    }
}

fn trimmed(value: Option<&str>) -> Option<String> {
    let value = value?.trim();

    if value.is_empty() {
        return None;
    }

    Some(value.to_string())
}
