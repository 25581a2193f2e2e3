//! Serde helpers for integer fields that clients send either as JSON numbers
//! or as numeric strings (HTML select values arrive as `"3"`).
//!
//! Text that does not parse as an integer is still a deserialization error.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrInt {
    String(String),
    Int(i64),
}

fn convert<T, E>(raw: StringOrInt) -> Result<T, E>
where
    T: FromStr + TryFrom<i64>,
    <T as FromStr>::Err: Display,
    <T as TryFrom<i64>>::Error: Display,
    E: Error,
{
    match raw {
        StringOrInt::String(s) => s.trim().parse::<T>().map_err(E::custom),
        StringOrInt::Int(i) => T::try_from(i).map_err(E::custom),
    }
}

/// `#[serde(deserialize_with = "int_or_string::deserialize")]`
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<i64>,
    <T as FromStr>::Err: Display,
    <T as TryFrom<i64>>::Error: Display,
{
    convert(StringOrInt::deserialize(deserializer)?)
}

/// Same as [`deserialize`] for optional fields; `null` becomes `None`.
/// Pair with `#[serde(default)]` so an absent field is also `None`.
pub fn deserialize_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + TryFrom<i64>,
    <T as FromStr>::Err: Display,
    <T as TryFrom<i64>>::Error: Display,
{
    Option::<StringOrInt>::deserialize(deserializer)?
        .map(convert)
        .transpose()
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Rating {
        #[serde(deserialize_with = "super::deserialize")]
        id: i64,
        #[serde(default, deserialize_with = "super::deserialize_option")]
        rating: Option<i32>,
    }

    fn parse(json: &str) -> Result<Rating, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_accepts_numbers_and_numeric_strings() {
        let p = parse(r#"{"id": 4, "rating": 2}"#).unwrap();
        assert_eq!((p.id, p.rating), (4, Some(2)));

        let p = parse(r#"{"id": "4", "rating": " 2 "}"#).unwrap();
        assert_eq!((p.id, p.rating), (4, Some(2)));
    }

    #[test]
    fn test_absent_or_null_optional_is_none() {
        assert_eq!(parse(r#"{"id": 1}"#).unwrap().rating, None);
        assert_eq!(parse(r#"{"id": 1, "rating": null}"#).unwrap().rating, None);
    }

    #[test]
    fn test_rejects_non_numeric_values() {
        assert!(parse(r#"{"id": "one"}"#).is_err());
        assert!(parse(r#"{"id": 1.5}"#).is_err());
        assert!(parse(r#"{"id": true}"#).is_err());
        assert!(parse(r#"{"id": 1, "rating": "hard"}"#).is_err());
    }

    #[test]
    fn test_rejects_out_of_range_narrow_integer() {
        assert!(parse(r#"{"id": 1, "rating": 4294967296}"#).is_err());
    }
}
