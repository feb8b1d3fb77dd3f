//! Exact rational quantum numbers.
//!
//! Tables write rationals either as JSON integers (`1`, `-1`) or as
//! `"p/q"` strings (`"2/3"`, `"-1/3"`). Serialization emits the integer form
//! whenever the denominator is one.

use num_rational::Rational64;

/// Parse `"p/q"` or `"n"` into an exact rational.
pub fn parse_rational(text: &str) -> Option<Rational64> {
    let text = text.trim();
    match text.split_once('/') {
        Some((numer, denom)) => {
            let numer: i64 = numer.trim().parse().ok()?;
            let denom: i64 = denom.trim().parse().ok()?;
            if denom == 0 {
                return None;
            }
            Some(Rational64::new(numer, denom))
        }
        None => text.parse::<i64>().ok().map(Rational64::from_integer),
    }
}

/// Zero, used as the serde default for omitted quantum numbers.
pub fn zero() -> Rational64 {
    Rational64::from_integer(0)
}

/// `#[serde(with = "...")]` adapter for [`Rational64`] fields.
pub mod serde_rational {
    use num_rational::Rational64;
    use serde::{de, Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RationalRepr {
        Integer(i64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Rational64, serializer: S) -> Result<S::Ok, S::Error> {
        if *value.denom() == 1 {
            serializer.serialize_i64(*value.numer())
        } else {
            serializer.serialize_str(&value.to_string())
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rational64, D::Error> {
        match RationalRepr::deserialize(deserializer)? {
            RationalRepr::Integer(n) => Ok(Rational64::from_integer(n)),
            RationalRepr::Text(text) => super::parse_rational(&text)
                .ok_or_else(|| de::Error::custom(format!("invalid rational '{}'", text))),
        }
    }
}
