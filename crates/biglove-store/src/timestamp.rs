//! Millisecond RFC 3339 timestamps, e.g. `2024-01-15T08:30:00.000Z`.
//!
//! Use with `#[serde(with = "biglove_store::timestamp")]` on
//! `DateTime<Utc>` fields. Parsing accepts any RFC 3339 precision.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// The current time cut to whole milliseconds, so it survives a
/// serialize/parse cycle unchanged.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    DateTime::<Utc>::deserialize(deserializer)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Stamped {
        #[serde(with = "super")]
        at: chrono::DateTime<chrono::Utc>,
    }

    #[test]
    fn test_whole_seconds_get_millis() {
        let at = chrono::Utc.with_ymd_and_hms(2023, 12, 1, 10, 0, 0).unwrap();
        let json = serde_json::to_value(Stamped { at }).unwrap();
        assert_eq!(json["at"], "2023-12-01T10:00:00.000Z");
    }

    #[test]
    fn test_now_round_trips() {
        let stamped = Stamped { at: super::now() };
        let text = serde_json::to_string(&stamped).unwrap();
        let back: Stamped = serde_json::from_str(&text).unwrap();
        assert_eq!(back, stamped);
    }

    #[test]
    fn test_parses_second_precision() {
        let stamped: Stamped = serde_json::from_str(r#"{"at":"2024-01-15T08:30:00Z"}"#).unwrap();
        assert_eq!(
            stamped.at,
            chrono::Utc.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap()
        );
    }
}
