//! # イベント日時
//!
//! カレンダーイベントの発生時点。API からは ISO-8601 文字列で、
//! プログラム内では `DateTime<Utc>` / `NaiveDate` として受け取る。
//!
//! ## 受け付ける文字列形式
//!
//! | 形式 | 例 | 解釈 |
//! |------|----|------|
//! | RFC 3339 日時 | `2024-05-01T09:30:00+09:00` | UTC に正規化 |
//! | 秒なし（拡張形式） | `2024-05-01T09:30Z`, `2024-05-01T09:30+09:00` | UTC に正規化 |
//! | コロンなしオフセット | `2024-05-01T09:30:00+0900` | UTC に正規化 |
//! | 基本形式 | `20240501T093000Z`, `20240501T0930+0900` | UTC に正規化 |
//! | 日付のみ | `2024-05-01`, `20240501` | その日の 00:00 UTC |
//!
//! 日時部分にはオフセット（`Z` / `±HH:MM` / `±HHMM`）が必須。
//! オフセットなしの日時（`2024-05-01T09:30:00`）はタイムゾーンが曖昧なため拒否する。
//! シリアライズは常に UTC の RFC 3339 形式で行う。

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// オフセット付き日時の書式（`Z` は `+0000` に置き換えてから照合する）
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y%m%dT%H%M%S%.f%z",
    "%Y%m%dT%H%M%z",
];

/// 日付のみの書式
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d"];

/// イベント日時（値オブジェクト）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EventDate(DateTime<Utc>);

impl EventDate {
    /// ISO-8601 文字列からイベント日時を作成する
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        let s = s.trim();

        if let Ok(datetime) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(datetime.with_timezone(&Utc)));
        }

        let with_offset = match s.strip_suffix(['Z', 'z']) {
            Some(local) => format!("{local}+0000"),
            None => s.to_string(),
        };
        let datetime = DATETIME_FORMATS
            .iter()
            .find_map(|format| DateTime::parse_from_str(&with_offset, format).ok());
        if let Some(datetime) = datetime {
            return Ok(Self(datetime.with_timezone(&Utc)));
        }

        let date = DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(s, format).ok());
        if let Some(date) = date {
            return Ok(Self::from(date));
        }

        Err(DomainError::Validation(format!(
            "日時として解釈できません: {s:?}"
        )))
    }

    /// UTC の日時を取得する
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }
}

impl From<DateTime<Utc>> for EventDate {
    fn from(datetime: DateTime<Utc>) -> Self {
        Self(datetime)
    }
}

impl From<NaiveDate> for EventDate {
    fn from(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl FromStr for EventDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EventDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<EventDate> for String {
    fn from(date: EventDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Timelike};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_rfc3339のオフセット付き日時をutcに正規化する() {
        let date = EventDate::parse("2024-05-01T09:30:00+09:00").unwrap();

        assert_eq!(
            *date.as_datetime(),
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_日付のみはその日の0時utcになる() {
        let date = EventDate::parse("2024-05-01").unwrap();

        assert_eq!(
            *date.as_datetime(),
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap()
        );
    }

    #[rstest]
    #[case("2024-05-01T09:30Z", (2024, 5, 1, 9, 30, 0))]
    #[case("2024-05-01T09:30+09:00", (2024, 5, 1, 0, 30, 0))]
    #[case("2024-05-01T09:30+0900", (2024, 5, 1, 0, 30, 0))]
    #[case("2024-05-01T09:30:15+0900", (2024, 5, 1, 0, 30, 15))]
    #[case("2024-05-01T09:30:15.250-0500", (2024, 5, 1, 14, 30, 15))]
    #[case("20240501T093000Z", (2024, 5, 1, 9, 30, 0))]
    #[case("20240501T0930+0900", (2024, 5, 1, 0, 30, 0))]
    #[case("20240501", (2024, 5, 1, 0, 0, 0))]
    fn test_iso8601の各形式をutcに正規化する(
        #[case] input: &str,
        #[case] expected: (i32, u32, u32, u32, u32, u32),
    ) {
        let (year, month, day, hour, min, sec) = expected;

        let date = EventDate::parse(input).unwrap();

        assert_eq!(
            date.as_datetime().with_nanosecond(0).unwrap(),
            Utc.with_ymd_and_hms(year, month, day, hour, min, sec).unwrap()
        );
    }

    #[test]
    fn test_秒なし日時のイベントもjsonから読める() {
        let date: EventDate = serde_json::from_str(r#""2024-05-01T09:30Z""#).unwrap();

        assert_eq!(date.to_string(), "2024-05-01T09:30:00Z");
    }

    #[rstest]
    #[case("")]
    #[case("not a date")]
    #[case("2024-13-01")]
    #[case("2024-05-01T09:30:00")]
    #[case("2024-05-01T09:30")]
    #[case("20240501T093000")]
    fn test_解釈できない文字列を拒否する(#[case] input: &str) {
        assert!(matches!(
            EventDate::parse(input),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_メモリ上の日時からも作成できる() {
        let datetime = Utc.with_ymd_and_hms(2024, 6, 10, 13, 0, 0).unwrap();

        assert_eq!(*EventDate::from(datetime).as_datetime(), datetime);
    }

    #[test]
    fn test_displayはutcのrfc3339形式() {
        let date = EventDate::parse("2024-05-01T09:30:00+09:00").unwrap();

        assert_eq!(date.to_string(), "2024-05-01T00:30:00Z");
    }

    #[test]
    fn test_jsonでは文字列として表現される() {
        let date: EventDate = serde_json::from_str(r#""2024-05-01""#).unwrap();
        let json = serde_json::to_value(date).unwrap();

        assert_eq!(json, serde_json::json!("2024-05-01T00:00:00Z"));
    }
}
