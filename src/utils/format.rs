use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{self, de::Error, Deserialize, Deserializer, Serializer};

// On-disk timestamp layout: ISO-8601 without an offset, fractional seconds
// included. Matches what the catalog has historically stored.
const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&date.format(FORMAT).to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    // First, try the naive layout we write ourselves.
    if let Ok(naive_dt) = NaiveDateTime::parse_from_str(&s, PARSE_FORMAT) {
        Ok(naive_dt.and_utc())
    } else {
        // Fall back to RFC 3339 for externally produced files.
        s.parse::<DateTime<Utc>>().map_err(Error::custom)
    }
}

pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.format(DISPLAY_FORMAT).to_string()
}

pub fn format_tags_comma(tags: &[String]) -> String {
    tags.join(", ")
}

/// "4.5 (2 votes)", or "unrated" while no votes have been cast.
pub fn format_rating(rating: f64, votes: u32) -> String {
    if votes == 0 {
        "unrated".to_string()
    } else {
        format!(
            "{:.1} ({} vote{})",
            rating,
            votes,
            if votes == 1 { "" } else { "s" }
        )
    }
}

/// Single-line preview, cut at a character boundary.
pub fn truncate_string(s: &str, max_chars: usize) -> String {
    let flat = s.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let truncated: String = flat.chars().take(max_chars).collect();
        format!("{}...", truncated.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Stamp {
        #[serde(with = "crate::utils::format")]
        at: DateTime<Utc>,
    }

    #[test]
    fn timestamps_round_trip_through_json() {
        let at = Utc.with_ymd_and_hms(2026, 8, 8, 10, 30, 0).unwrap();
        let json = serde_json::to_string(&Stamp { at }).unwrap();
        assert!(json.contains("2026-08-08T10:30:00"));

        let back: Stamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back.at, at);
    }

    #[test]
    fn rfc3339_timestamps_are_accepted() {
        let back: Stamp = serde_json::from_str(r#"{"at":"2026-08-08T10:30:00Z"}"#).unwrap();
        assert_eq!(back.at, Utc.with_ymd_and_hms(2026, 8, 8, 10, 30, 0).unwrap());
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_string("Jährling", 4), "Jähr...");
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("two\nlines", 20), "two lines");
    }

    #[test]
    fn rating_display_handles_the_unrated_state() {
        assert_eq!(format_rating(0.0, 0), "unrated");
        assert_eq!(format_rating(4.5, 2), "4.5 (2 votes)");
        assert_eq!(format_rating(5.0, 1), "5.0 (1 vote)");
    }
}
