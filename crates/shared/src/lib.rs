//! # DocketFlow 共有ユーティリティ
//!
//! このクレートは、DocketFlow
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, dashboard）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod error_response;
pub mod observability;
pub mod paginated_response;

pub use error_response::ErrorResponse;
pub use paginated_response::{PaginatedResponse, Pagination, PaginationError};
