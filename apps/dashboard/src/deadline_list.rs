//! # 期限一覧
//!
//! ダッシュボードに並べる期限の行データを組み立てる。
//! 並び順はサーバーが返した順序をそのまま使う。

use std::fmt;

use docketflow_domain::calendar_event::CalendarEvent;
use docketflow_shared::{PaginatedResponse, Pagination};

use crate::client::{CalendarEventClient, FetchError};

/// 場所が未設定のときの表示
const NO_LOCATION: &str = "-";

/// 期限一覧の 1 行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineRow {
    pub title:        String,
    pub matter_title: String,
    /// `YYYY-MM-DD HH:MM`（UTC）
    pub date:         String,
    pub status:       String,
    pub location:     String,
}

impl From<CalendarEvent> for DeadlineRow {
    fn from(event: CalendarEvent) -> Self {
        Self {
            date:         event.date.as_datetime().format("%Y-%m-%d %H:%M").to_string(),
            title:        event.title,
            matter_title: event.matter_title,
            status:       event.status,
            location:     event.location.unwrap_or_else(|| NO_LOCATION.to_string()),
        }
    }
}

impl fmt::Display for DeadlineRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}",
            self.date, self.title, self.matter_title, self.status, self.location
        )
    }
}

/// 1 ページ分の期限一覧
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineListing {
    rows:       Vec<DeadlineRow>,
    pagination: Pagination,
}

impl DeadlineListing {
    /// 期限一覧を取得する
    pub async fn load(
        client: &dyn CalendarEventClient,
        page: u32,
        page_size: u32,
    ) -> Result<Self, FetchError> {
        let response = client.list_deadlines(page, page_size).await?;
        tracing::debug!(
            count = response.data.len(),
            total = response.pagination.total(),
            "期限一覧を取得しました"
        );
        Ok(Self::from_response(response))
    }

    pub fn from_response(response: PaginatedResponse<CalendarEvent>) -> Self {
        let PaginatedResponse { data, pagination } = response.map(DeadlineRow::from);
        Self {
            rows: data,
            pagination,
        }
    }

    pub fn rows(&self) -> &[DeadlineRow] {
        &self.rows
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// ページ位置の要約（例: `page 1/3 (25 items)`）
    ///
    /// 0 件でも総ページ数は 1 と表示する（`page 1/0` にはしない）。
    pub fn summary(&self) -> String {
        format!(
            "page {}/{} ({} items)",
            self.pagination.page(),
            self.pagination.page_count().max(1),
            self.pagination.total()
        )
    }
}
