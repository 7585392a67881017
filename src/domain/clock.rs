//! Timestamp source for record lifecycle transitions.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::Serializer;

/// Current UTC time, truncated to millisecond precision.
///
/// Stored timestamps are serialized as ISO-8601 with milliseconds, so
/// truncating here keeps `expiry - created_at` an exact whole number of
/// minutes after a round trip through JSON.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Formats `ts` as `YYYY-MM-DDTHH:MM:SS.mmmZ`, always with three fraction digits.
pub fn to_iso_millis(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `serialize_with` adapter for [`to_iso_millis`].
pub fn serialize_iso_millis<S>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_iso_millis(ts))
}
