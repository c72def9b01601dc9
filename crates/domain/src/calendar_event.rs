//! # カレンダーイベント
//!
//! ダッシュボードの期限一覧・期日一覧に表示するイベントのモデル。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`CalendarEvent`] | カレンダーイベント | バックエンド API から取得する読み取り専用モデル |
//! | [`CalendarEventType`] | イベント種別 | 期限（`deadline`）/ 期日（`hearing`） |
//! | [`MatterId`] | 案件 ID | 案件はバックエンド側が所有する |
//!
//! ## 設計方針
//!
//! - **読み取り専用**: クライアント側でライフサイクルを管理しない
//! - **`status` は自由文字列**: 取りうる値はバックエンドが定義する
//! - **`location` は null を保持する**: 未設定でもキーを省略せず `null` で出力する

use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::event_date::EventDate;

define_string_id! {
    /// カレンダーイベント ID
    pub struct CalendarEventId;
}

define_string_id! {
    /// 案件 ID（外部キー）
    pub struct MatterId;
}

/// イベント種別
///
/// JSON・クエリパラメータともに lowercase で表現する。
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    IntoStaticStr,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CalendarEventType {
    /// 期限（書面提出期限など）
    Deadline,
    /// 期日（口頭弁論期日など）
    Hearing,
}

/// カレンダーイベント
///
/// ## JSON 形式
///
/// ```json
/// {
///   "id": "evt-1",
///   "title": "準備書面提出期限",
///   "date": "2024-05-01T00:00:00Z",
///   "type": "deadline",
///   "status": "pending",
///   "matterId": "matter-42",
///   "matterTitle": "損害賠償請求事件",
///   "location": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id:           CalendarEventId,
    pub title:        String,
    pub date:         EventDate,
    #[serde(rename = "type")]
    pub event_type:   CalendarEventType,
    pub status:       String,
    pub matter_id:    MatterId,
    /// 案件名の表示用コピー
    pub matter_title: String,
    pub location:     Option<String>,
}

impl CalendarEvent {
    pub fn is_deadline(&self) -> bool {
        self.event_type == CalendarEventType::Deadline
    }

    pub fn is_hearing(&self) -> bool {
        self.event_type == CalendarEventType::Hearing
    }
}
