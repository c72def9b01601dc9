//! # DocketFlow ドメイン層
//!
//! 法律事務所向けダッシュボードが扱う読み取り専用モデルを定義する。
//!
//! ## 設計方針
//!
//! - **表示用モデル**: バックエンド API から取得した値をそのまま保持する。
//!   期日計算などの業務ルールはバックエンドの責務であり、ここには置かない
//! - **値オブジェクト**: ID や日時は Newtype で包み、デシリアライズ時に検証する
//!
//! ## モジュール構成
//!
//! - [`calendar_event`] - 期限（締切）と期日（口頭弁論等）のカレンダーイベント
//! - [`event_date`] - イベント日時
//! - [`error`] - ドメイン層で発生するエラーの定義
//!
//! ## 使用例
//!
//! ```rust
//! use docketflow_domain::calendar_event::{CalendarEventType, MatterId};
//!
//! let matter_id = MatterId::new("matter-42").unwrap();
//! assert_eq!(matter_id.as_str(), "matter-42");
//! assert_eq!(CalendarEventType::Hearing.to_string(), "hearing");
//! ```

#[macro_use]
mod macros;

pub mod calendar_event;
pub mod error;
pub mod event_date;

pub use error::DomainError;
