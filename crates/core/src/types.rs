/// All primary keys are 64-bit integers.
pub type DbId = i64;

/// Timestamps carry no zone; the service reports local wall-clock times.
pub type Timestamp = chrono::NaiveDateTime;

/// Lenient (de)serialization for [`Timestamp`] fields.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` and RFC 3339 on input.
/// Always writes `YYYY-MM-DDTHH:MM:SS`.
pub mod datetime {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    use super::Timestamp;

    const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    /// Parse any of the accepted input shapes.
    pub fn parse(raw: &str) -> Option<Timestamp> {
        let raw = raw.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt);
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    pub fn serialize<S: Serializer>(value: &Timestamp, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&value.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Timestamp, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("unrecognized date-time `{raw}`")))
    }

    /// Same rules for `Option<Timestamp>`; pair with `#[serde(default)]`.
    pub mod option {
        use serde::{de, Deserialize, Deserializer, Serializer};

        use super::{parse, FORMAT};
        use crate::types::Timestamp;

        pub fn serialize<S: Serializer>(
            value: &Option<Timestamp>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(ts) => serializer.collect_str(&ts.format(FORMAT)),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Timestamp>, D::Error> {
            match Option::<String>::deserialize(deserializer)? {
                Some(raw) => parse(&raw)
                    .map(Some)
                    .ok_or_else(|| de::Error::custom(format!("unrecognized date-time `{raw}`"))),
                None => Ok(None),
            }
        }
    }

    /// Calendar dates written as `YYYY-MM-DD`; a full date-time on input is
    /// truncated to its date.
    pub mod date {
        use chrono::NaiveDate;
        use serde::{de, Deserialize, Deserializer, Serializer};

        use super::parse;

        pub fn serialize<S: Serializer>(value: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(&value.format("%Y-%m-%d"))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
            let raw = String::deserialize(deserializer)?;
            parse(&raw)
                .map(|dt| dt.date())
                .ok_or_else(|| de::Error::custom(format!("unrecognized date `{raw}`")))
        }
    }
}
