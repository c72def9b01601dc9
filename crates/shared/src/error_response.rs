//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! バックエンド API が返す構造化エラーペイロードの典型形。
//!
//! ## 設計
//!
//! - `ErrorResponse` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - API クライアントはエラーボディを生の JSON として受け取り、
//!   必要な呼び出し元だけがこの型として解釈する
//! - `type` が省略された場合は RFC 9457 に従い `about:blank` とみなす

use serde::{Deserialize, Serialize};

/// `type` 省略時のデフォルト値
pub const ABOUT_BLANK: &str = "about:blank";

fn default_error_type() -> String {
    ABOUT_BLANK.to_string()
}

/// エラーレスポンス（RFC 9457 Problem Details）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(rename = "type", default = "default_error_type")]
    pub error_type: String,
    pub title:      String,
    pub status:     u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail:     Option<String>,
}

impl ErrorResponse {
    /// ユーザー向けに表示するメッセージ
    ///
    /// `detail` があればそれを、なければ `title` を返す。
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn problem(title: &str, status: u16, detail: Option<&str>) -> ErrorResponse {
        ErrorResponse {
            error_type: ABOUT_BLANK.to_string(),
            title: title.to_string(),
            status,
            detail: detail.map(str::to_string),
        }
    }

    #[test]
    fn test_jsonデシリアライズが正しく動作する() {
        let json = r#"{
            "type": "https://docketflow.example.com/errors/not-found",
            "title": "Not Found",
            "status": 404,
            "detail": "案件が見つかりません"
        }"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            error,
            ErrorResponse {
                error_type: "https://docketflow.example.com/errors/not-found".to_string(),
                ..problem("Not Found", 404, Some("案件が見つかりません"))
            }
        );
    }

    #[test]
    fn test_type省略時はabout_blankになる() {
        let json = r#"{ "title": "Bad Request", "status": 400 }"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();

        assert_eq!(error.error_type, ABOUT_BLANK);
        assert_eq!(error.detail, None);
    }

    #[test]
    fn test_jsonシリアライズでtypeフィールド名が正しい() {
        let error = problem("Forbidden", 403, None);
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json["type"], "about:blank");
        assert!(json.get("error_type").is_none());
        assert!(json.get("detail").is_none());
    }

    #[test]
    fn test_messageはdetailを優先しなければtitleを返す() {
        let with_detail = problem("Conflict", 409, Some("期日が重複しています"));
        let without_detail = problem("Conflict", 409, None);

        assert_eq!(with_detail.message(), "期日が重複しています");
        assert_eq!(without_detail.message(), "Conflict");
    }
}
