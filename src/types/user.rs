use crate::types::request::UpdateUserData;

#[derive(Clone, Debug)]
pub(crate) struct User {
    pub(crate) id: String,
    pub(crate) phone_number: String,
    pub(crate) full_name: String,
    pub(crate) password_hash: String,
    pub(crate) salt: String,
}

impl User {
    /// Applies the trimmed, non-empty fields of an update request.
    /// Whitespace-only values are ignored.
    pub(crate) fn apply_update(&mut self, update: &UpdateUserData) {
        if let Some(full_name) = update.trimmed_full_name() {
            self.full_name = full_name;
        }

        if let Some(phone_number) = update.trimmed_phone_number() {
            self.phone_number = phone_number;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "5339ee38-534d-4e42-8eec-1a8121334b06".to_string(),
            phone_number: "+628123456789".to_string(),
            full_name: "Jane Doe".to_string(),
            password_hash: "hash".to_string(),
            salt: "salt".to_string(),
        }
    }

    #[test]
    fn test_apply_update_trims_values() {
        let mut user = user();

        user.apply_update(&UpdateUserData {
            full_name: Some("  Jane Smith  ".to_string()),
            phone_number: None,
        });

        assert_eq!(user.full_name, "Jane Smith");
        assert_eq!(user.phone_number, "+628123456789");
    }

    #[test]
    fn test_apply_update_ignores_blank_values() {
        let mut user = user();

        user.apply_update(&UpdateUserData {
            full_name: Some("   ".to_string()),
            phone_number: Some(String::new()),
        });

        assert_eq!(user.full_name, "Jane Doe");
        assert_eq!(user.phone_number, "+628123456789");
    }

    #[test]
    fn test_apply_update_both_fields() {
        let mut user = user();

        user.apply_update(&UpdateUserData {
            full_name: Some("Jane Smith".to_string()),
            phone_number: Some("+628999999999".to_string()),
        });

        assert_eq!(user.full_name, "Jane Smith");
        assert_eq!(user.phone_number, "+628999999999");
    }
}
