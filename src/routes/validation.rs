use axum::extract::FromRequest;
use serde::{de, Deserialize, Deserializer};

use crate::error::AppError;

/// JSON body extractor whose rejections become `400 Bad Request`
///
/// Malformed JSON, missing fields and wrong field types are all
/// validation failures.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Reject with `400` unless `valid` holds
pub fn ensure(valid: bool, message: &str) -> Result<(), AppError> {
    if valid {
        Ok(())
    } else {
        Err(AppError::InvalidInput(message.to_string()))
    }
}

/// Deserialize an integer, also accepting integral floats such as `1.0`
pub fn integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = serde_json::Number::deserialize(deserializer)?;

    if let Some(n) = number.as_i64() {
        return Ok(n);
    }

    match number.as_f64() {
        Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        _ => Err(de::Error::custom(format!("expected an integer, found {number}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct WithId {
        #[serde(deserialize_with = "integer")]
        id: i64,
    }

    fn parse_id(json: &str) -> Option<i64> {
        serde_json::from_str::<WithId>(json).ok().map(|w| w.id)
    }

    #[test]
    fn test_integer_accepts_integral_numbers() {
        assert_eq!(parse_id(r#"{"id": 2}"#), Some(2));
        assert_eq!(parse_id(r#"{"id": -7}"#), Some(-7));
        assert_eq!(parse_id(r#"{"id": 1.0}"#), Some(1));
        assert_eq!(parse_id(r#"{"id": 3e0}"#), Some(3));
    }

    #[test]
    fn test_integer_rejects_everything_else() {
        assert_eq!(parse_id(r#"{"id": 1.5}"#), None);
        assert_eq!(parse_id(r#"{"id": "2"}"#), None);
        assert_eq!(parse_id(r#"{"id": 1e300}"#), None);
        assert_eq!(parse_id(r#"{"id": null}"#), None);
        assert_eq!(parse_id(r#"{}"#), None);
    }

    #[test]
    fn test_ensure() {
        assert!(ensure(true, "unused").is_ok());

        match ensure(false, "Name is required") {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, "Name is required"),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
