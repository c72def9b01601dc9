//! # ページネーション付きレスポンス
//!
//! ページ番号ベースのページネーションに対応した API レスポンス型。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ページネーションメタデータの不正
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// ページ番号が 0（1 始まり）
    #[error("page は 1 以上である必要があります")]
    InvalidPage,

    /// ページサイズが 0
    #[error("pageSize は 1 以上である必要があります")]
    InvalidPageSize,

    /// `pageCount` が `ceil(total / pageSize)` と一致しない
    #[error("pageCount が不整合です: 期待値 {expected}, 実際 {actual}")]
    PageCountMismatch { expected: u64, actual: u64 },
}

/// ページネーションメタデータ
///
/// `page_count` は常に `ceil(total / page_size)` と一致する。
/// デシリアライズ時にもこの不変条件を検証し、不整合なペイロードは拒否する。
///
/// ## JSON 形式
///
/// ```json
/// { "page": 1, "pageSize": 10, "total": 25, "pageCount": 3 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPagination")]
pub struct Pagination {
    page:       u32,
    page_size:  u32,
    total:      u64,
    page_count: u64,
}

/// 検証前のワイヤ形式
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPagination {
    page:       u32,
    page_size:  u32,
    total:      u64,
    page_count: u64,
}

impl TryFrom<RawPagination> for Pagination {
    type Error = PaginationError;

    fn try_from(raw: RawPagination) -> Result<Self, Self::Error> {
        let pagination = Self::new(raw.page, raw.page_size, raw.total)?;
        if pagination.page_count != raw.page_count {
            return Err(PaginationError::PageCountMismatch {
                expected: pagination.page_count,
                actual:   raw.page_count,
            });
        }
        Ok(pagination)
    }
}

impl Pagination {
    /// ページネーションメタデータを作成する
    ///
    /// `page_count` は `total` と `page_size` から導出する。
    ///
    /// ```
    /// use docketflow_shared::Pagination;
    ///
    /// let pagination = Pagination::new(1, 10, 25).unwrap();
    /// assert_eq!(pagination.page_count(), 3);
    /// ```
    pub fn new(page: u32, page_size: u32, total: u64) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::InvalidPage);
        }
        if page_size == 0 {
            return Err(PaginationError::InvalidPageSize);
        }

        Ok(Self {
            page,
            page_size,
            total,
            page_count: Self::page_count_for(total, page_size),
        })
    }

    /// 総件数とページサイズから総ページ数を計算する
    ///
    /// `page_size` が 0 の場合は 0 を返す。
    pub fn page_count_for(total: u64, page_size: u32) -> u64 {
        if page_size == 0 {
            return 0;
        }
        total.div_ceil(u64::from(page_size))
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn page_count(&self) -> u64 {
        self.page_count
    }

    /// 次のページが存在するか
    pub fn has_next_page(&self) -> bool {
        u64::from(self.page) < self.page_count
    }

    /// 前のページが存在するか
    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// 最終ページ（またはそれ以降）か
    pub fn is_last_page(&self) -> bool {
        u64::from(self.page) >= self.page_count
    }

    /// このページ先頭要素の 0 始まりの通し番号
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }
}

/// ページネーション付きレスポンス
///
/// `data` の順序はサーバーが決定したものをそのまま保持する。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "pagination": { "page": 1, "pageSize": 10, "total": 25, "pageCount": 3 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data:       Vec<T>,
    pub pagination: Pagination,
}

impl<T> PaginatedResponse<T> {
    /// 新しい `PaginatedResponse` を作成する
    pub fn new(data: Vec<T>, pagination: Pagination) -> Self {
        Self { data, pagination }
    }

    /// メタデータを保ったまま要素を変換する
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            data:       self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }

    /// このページに要素が 1 件もないか
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 10, 0)]
    #[case(25, 10, 3)]
    #[case(20, 10, 2)]
    #[case(1, 10, 1)]
    #[case(7, 1, 7)]
    fn test_page_countはtotalをpage_sizeで切り上げ除算する(
        #[case] total: u64,
        #[case] page_size: u32,
        #[case] expected: u64,
    ) {
        let pagination = Pagination::new(1, page_size, total).unwrap();

        assert_eq!(pagination.page_count(), expected);
    }

    #[test]
    fn test_page_count_forはpage_size0で0を返す() {
        assert_eq!(Pagination::page_count_for(25, 0), 0);
    }

    #[test]
    fn test_newはpage0を拒否する() {
        assert_eq!(Pagination::new(0, 10, 5), Err(PaginationError::InvalidPage));
    }

    #[test]
    fn test_newはpage_size0を拒否する() {
        assert_eq!(
            Pagination::new(1, 0, 5),
            Err(PaginationError::InvalidPageSize)
        );
    }

    #[test]
    fn test_ページ位置の判定() {
        let first = Pagination::new(1, 10, 25).unwrap();
        assert!(first.has_next_page());
        assert!(!first.has_previous_page());
        assert!(!first.is_last_page());
        assert_eq!(first.offset(), 0);

        let last = Pagination::new(3, 10, 25).unwrap();
        assert!(!last.has_next_page());
        assert!(last.has_previous_page());
        assert!(last.is_last_page());
        assert_eq!(last.offset(), 20);
    }

    #[test]
    fn test_空の結果は1ページ目が最終ページになる() {
        let pagination = Pagination::new(1, 10, 0).unwrap();

        assert!(pagination.is_last_page());
        assert!(!pagination.has_next_page());
    }

    #[test]
    fn test_serializeでcamel_caseのjson形状にする() {
        let response = PaginatedResponse::new(vec!["a", "b"], Pagination::new(2, 2, 5).unwrap());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "data": ["a", "b"],
                "pagination": { "page": 2, "pageSize": 2, "total": 5, "pageCount": 3 }
            })
        );
    }

    #[test]
    fn test_deserializeで整合したペイロードを受け入れる() {
        let json = r#"{
            "data": [3, 1, 2],
            "pagination": { "page": 1, "pageSize": 10, "total": 3, "pageCount": 1 }
        }"#;
        let response: PaginatedResponse<i32> = serde_json::from_str(json).unwrap();

        // サーバーの順序を保持する
        assert_eq!(response.data, vec![3, 1, 2]);
        assert_eq!(response.pagination.total(), 3);
    }

    #[test]
    fn test_deserializeでpage_countの不整合を拒否する() {
        let json = r#"{ "page": 1, "pageSize": 10, "total": 25, "pageCount": 2 }"#;
        let result: Result<Pagination, _> = serde_json::from_str(json);

        let err = result.unwrap_err();
        assert!(
            err.to_string().contains("pageCount が不整合です"),
            "不整合エラーであること: {err}"
        );
    }

    #[test]
    fn test_deserializeでpage_size0を拒否する() {
        let json = r#"{ "page": 1, "pageSize": 0, "total": 0, "pageCount": 0 }"#;
        let result: Result<Pagination, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_deserializeで負のtotalを拒否する() {
        let json = r#"{ "page": 1, "pageSize": 10, "total": -1, "pageCount": 0 }"#;
        let result: Result<Pagination, _> = serde_json::from_str(json);

        assert!(result.is_err());
    }

    #[test]
    fn test_mapはメタデータを保持する() {
        let pagination = Pagination::new(1, 10, 2).unwrap();
        let response = PaginatedResponse::new(vec![1, 2], pagination);

        let mapped = response.map(|n| n.to_string());

        assert_eq!(mapped.data, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.pagination, pagination);
    }
}
