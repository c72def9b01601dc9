//! JSON API 呼び出しの共通ラッパー

use serde::de::DeserializeOwned;

use super::{error::FetchError, response::decode_response};

/// リクエストを送信し、レスポンスボディを `T` として返す
///
/// `request` に設定されたメソッド・ヘッダー・ボディ・クエリはそのまま送信される。
/// リトライ・タイムアウト・キャッシュは行わない（必要なら呼び出し側で包む）。
///
/// # エラー
///
/// - 通信自体の失敗: [`FetchError::Network`]
/// - それ以外は [`decode_response`] の規則に従う
///
/// # 使用例
///
/// ```no_run
/// use docketflow_dashboard::client::{FetchError, fetch_json};
///
/// # async fn run() -> Result<(), FetchError> {
/// let client = reqwest::Client::new();
/// let body: serde_json::Value =
///     fetch_json(client.get("http://localhost:13000/api/calendar-events")).await?;
/// # Ok(())
/// # }
/// ```
pub async fn fetch_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, FetchError> {
    let response = request.send().await?;
    decode_response(response).await
}
