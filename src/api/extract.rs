//! Extractors that report bad parameters as 422 with a `detail` body.

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;

use crate::api::error::ApiError;

pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Accepts the usual query-string spellings of a boolean.
pub fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_bool(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid boolean value `{raw}`")))
}

/// Integer query value that clamps to the `i64` range instead of rejecting
/// digit strings too long to fit.
pub fn saturating_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_saturating(&raw)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid integer value `{raw}`")))
}

fn parse_saturating(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<i64>() {
        return Some(value);
    }
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(if negative { i64::MIN } else { i64::MAX })
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Flags {
        #[serde(default, deserialize_with = "lenient_bool")]
        grouped: bool,
    }

    #[derive(Debug, Deserialize)]
    struct Paging {
        #[serde(default, deserialize_with = "saturating_limit")]
        limit: Option<i64>,
    }

    #[test]
    fn test_parse_bool_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("1"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_lenient_bool_in_struct() {
        let flags: Flags = serde_json::from_str(r#"{"grouped": "yes"}"#).unwrap();
        assert!(flags.grouped);

        let flags: Flags = serde_json::from_str("{}").unwrap();
        assert!(!flags.grouped);

        assert!(serde_json::from_str::<Flags>(r#"{"grouped": "sometimes"}"#).is_err());
    }

    #[test]
    fn test_parse_saturating_clamps_overflow() {
        assert_eq!(parse_saturating("25"), Some(25));
        assert_eq!(parse_saturating("-4"), Some(-4));
        assert_eq!(parse_saturating("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_saturating("-99999999999999999999"), Some(i64::MIN));
        assert_eq!(parse_saturating("ten"), None);
        assert_eq!(parse_saturating(""), None);
        assert_eq!(parse_saturating("-"), None);
    }

    #[test]
    fn test_saturating_limit_in_struct() {
        let paging: Paging = serde_json::from_str(r#"{"limit": "99999999999999999999"}"#).unwrap();
        assert_eq!(paging.limit, Some(i64::MAX));

        let paging: Paging = serde_json::from_str("{}").unwrap();
        assert_eq!(paging.limit, None);

        assert!(serde_json::from_str::<Paging>(r#"{"limit": "lots"}"#).is_err());
    }
}
