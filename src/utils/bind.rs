use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;

use crate::core::error::Error;
use crate::utils::validate::{Validate, Validator};

/// Decodes a request body and runs its validation schema. An empty body
/// binds as the payload's default (every field absent) so that presence
/// rules produce their messages instead of a decode error. Decode failures
/// and validation messages never mix.
pub(crate) fn bind_and_validate<T>(
    validator: &Validator,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<T, Error>
where
    T: DeserializeOwned + Default + Validate,
{
    let payload = if body.is_empty() {
        T::default()
    } else {
        if !has_json_content_type(headers) {
            return Err(Error::UnsupportedMediaType);
        }

        serde_json::from_slice(body).map_err(|e| Error::MalformedBody(e.to_string()))?
    };

    let messages = validator.validate(&payload)?;

    if !messages.is_empty() {
        return Err(Error::Validation(messages));
    }

    Ok(payload)
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };

    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .eq_ignore_ascii_case("application/json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::build_validator;
    use crate::types::request::RegisterData;
    use axum::http::HeaderValue;

    fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );

        headers
    }

    #[test]
    fn test_empty_body_binds_default_and_validates() {
        let validator = build_validator().unwrap();

        let err = bind_and_validate::<RegisterData>(&validator, &HeaderMap::new(), b"")
            .unwrap_err();

        let Error::Validation(messages) = err else {
            panic!("expected validation messages");
        };
        assert_eq!(
            messages,
            [
                "fullName is a required field",
                "password is a required field",
                "phoneNumber is a required field",
            ]
        );
    }

    #[test]
    fn test_rejects_missing_content_type() {
        let validator = build_validator().unwrap();

        let err = bind_and_validate::<RegisterData>(&validator, &HeaderMap::new(), b"{}")
            .unwrap_err();

        assert!(matches!(err, Error::UnsupportedMediaType));
    }

    #[test]
    fn test_rejects_non_json_content_type() {
        let validator = build_validator().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let err = bind_and_validate::<RegisterData>(&validator, &headers, b"{}").unwrap_err();

        assert!(matches!(err, Error::UnsupportedMediaType));
    }

    #[test]
    fn test_accepts_content_type_with_parameters() {
        let validator = build_validator().unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );

        let body = br#"{"fullName":"Jane Doe","password":"aB3$efg","phoneNumber":"+628123456789"}"#;
        let payload: RegisterData = bind_and_validate(&validator, &headers, body).unwrap();

        assert_eq!(payload.full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_malformed_json_is_a_single_decode_error() {
        let validator = build_validator().unwrap();

        let err = bind_and_validate::<RegisterData>(&validator, &json_headers(), b"{not json")
            .unwrap_err();

        assert!(matches!(err, Error::MalformedBody(_)));
    }

    #[test]
    fn test_valid_payload_binds() {
        let validator = build_validator().unwrap();

        let body = br#"{"fullName":"Jane Doe","password":"aB3$efg","phoneNumber":"+628123456789"}"#;
        let payload: RegisterData = bind_and_validate(&validator, &json_headers(), body).unwrap();

        assert_eq!(payload.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(payload.password.as_deref(), Some("aB3$efg"));
        assert_eq!(payload.phone_number.as_deref(), Some("+628123456789"));
    }
}
