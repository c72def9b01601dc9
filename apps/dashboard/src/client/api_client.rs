//! バックエンド API クライアント実装の構造体

use reqwest::{Method, RequestBuilder};

/// バックエンド API クライアント実装
///
/// `reqwest::Client` は内部でコネクションプールを共有するため、clone は安価。
#[derive(Debug, Clone)]
pub struct ApiClientImpl {
    base_url: String,
    client:   reqwest::Client,
}

impl ApiClientImpl {
    /// 新しい ApiClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: バックエンド API のベース URL（例: `http://localhost:13000`）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// ベース URL とパスを結合した URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// リクエストビルダーを作成する
    ///
    /// ヘッダーやボディは返り値のビルダーに対して設定し、
    /// [`fetch_json`](super::fetch_json) に渡す。
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }
}
