//! カレンダーイベント関連の API クライアント
//!
//! ## エンドポイント
//!
//! - `GET /api/calendar-events?page=&pageSize=&type=` - イベント一覧（ページネーション付き）
//! - `GET /api/calendar-events/{id}` - イベント詳細

use async_trait::async_trait;
use docketflow_domain::calendar_event::{CalendarEvent, CalendarEventId, CalendarEventType};
use docketflow_shared::PaginatedResponse;
use reqwest::Method;

use super::{api_client::ApiClientImpl, error::FetchError, fetch::fetch_json};

/// イベント一覧 API のパス
pub const CALENDAR_EVENTS_PATH: &str = "/api/calendar-events";

/// 一覧取得のデフォルトページサイズ
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// イベント一覧の検索条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarEventQuery {
    /// ページ番号（1 始まり）
    pub page:       u32,
    pub page_size:  u32,
    /// `None` なら種別で絞り込まない
    pub event_type: Option<CalendarEventType>,
}

impl Default for CalendarEventQuery {
    fn default() -> Self {
        Self {
            page:       1,
            page_size:  DEFAULT_PAGE_SIZE,
            event_type: None,
        }
    }
}

impl CalendarEventQuery {
    /// 期限のみを対象とする検索条件
    pub fn deadlines(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            event_type: Some(CalendarEventType::Deadline),
        }
    }

    /// クエリパラメータに変換する
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ];
        if let Some(event_type) = self.event_type {
            pairs.push(("type", event_type.to_string()));
        }
        pairs
    }
}

/// カレンダーイベント API クライアントトレイト
///
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait CalendarEventClient: Send + Sync {
    /// イベント一覧を取得する
    ///
    /// `GET /api/calendar-events` を呼び出す。
    async fn list_calendar_events(
        &self,
        query: &CalendarEventQuery,
    ) -> Result<PaginatedResponse<CalendarEvent>, FetchError>;

    /// 期限の一覧を取得する
    async fn list_deadlines(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<PaginatedResponse<CalendarEvent>, FetchError> {
        self.list_calendar_events(&CalendarEventQuery::deadlines(page, page_size))
            .await
    }

    /// イベント詳細を取得する
    ///
    /// `GET /api/calendar-events/{id}` を呼び出す。
    async fn get_calendar_event(&self, id: &CalendarEventId)
    -> Result<CalendarEvent, FetchError>;
}

#[async_trait]
impl CalendarEventClient for ApiClientImpl {
    #[tracing::instrument(skip_all, fields(page = query.page, page_size = query.page_size))]
    async fn list_calendar_events(
        &self,
        query: &CalendarEventQuery,
    ) -> Result<PaginatedResponse<CalendarEvent>, FetchError> {
        let request = self
            .request(Method::GET, CALENDAR_EVENTS_PATH)
            .query(&query.to_query_pairs());

        fetch_json(request).await.inspect_err(|e| {
            tracing::warn!(error = %e, status = ?e.status(), "イベント一覧の取得に失敗しました");
        })
    }

    #[tracing::instrument(skip_all, fields(%id))]
    async fn get_calendar_event(
        &self,
        id: &CalendarEventId,
    ) -> Result<CalendarEvent, FetchError> {
        let path = format!(
            "{}/{}",
            CALENDAR_EVENTS_PATH,
            urlencoding::encode(id.as_str())
        );

        fetch_json(self.request(Method::GET, &path))
            .await
            .inspect_err(|e| {
                tracing::warn!(error = %e, status = ?e.status(), "イベント詳細の取得に失敗しました");
            })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_デフォルトの検索条件() {
        let query = CalendarEventQuery::default();

        assert_eq!(
            query.to_query_pairs(),
            vec![("page", "1".to_string()), ("pageSize", "20".to_string())]
        );
    }

    #[test]
    fn test_期限の検索条件はtypeを付与する() {
        let query = CalendarEventQuery::deadlines(2, 10);

        assert_eq!(
            query.to_query_pairs(),
            vec![
                ("page", "2".to_string()),
                ("pageSize", "10".to_string()),
                ("type", "deadline".to_string()),
            ]
        );
    }

    #[test]
    fn test_期日で絞り込む検索条件() {
        let query = CalendarEventQuery {
            event_type: Some(CalendarEventType::Hearing),
            ..CalendarEventQuery::default()
        };

        assert_eq!(query.to_query_pairs()[2], ("type", "hearing".to_string()));
    }
}
