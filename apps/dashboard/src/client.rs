//! # バックエンド API クライアント
//!
//! バックエンド API との通信を担当する。

pub mod api_client;
pub mod calendar_client;
pub mod error;
pub mod fetch;
pub mod response;

pub use api_client::ApiClientImpl;
pub use calendar_client::{CalendarEventClient, CalendarEventQuery};
pub use error::FetchError;
pub use fetch::fetch_json;
pub use response::{decode_response, is_json_content_type};
