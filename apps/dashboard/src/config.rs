//! # ダッシュボード設定
//!
//! 環境変数からダッシュボードの設定を読み込む。

use std::env;

use thiserror::Error;

use crate::client::calendar_client::DEFAULT_PAGE_SIZE;

/// 設定読み込みエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("{0} が設定されていません（.env を確認してください）")]
    Missing(&'static str),

    /// 値が不正
    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// ダッシュボードの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// バックエンド API のベース URL
    pub api_url:   String,
    /// 表示するページ番号（1 始まり）
    pub page:      u32,
    /// 1 ページあたりの件数
    pub page_size: u32,
}

impl DashboardConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の取得関数から設定を読み込む
    ///
    /// テスト時に環境変数を汚さずに検証するための入口。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_url = lookup("DOCKETFLOW_API_URL").ok_or(ConfigError::Missing("DOCKETFLOW_API_URL"))?;
        // `localhost:13000` はスキーム `localhost` の URL として解釈されてしまう
        let is_http = reqwest::Url::parse(&api_url)
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https"));
        if !is_http {
            return Err(ConfigError::Invalid {
                name:  "DOCKETFLOW_API_URL",
                value: api_url,
            });
        }

        Ok(Self {
            api_url,
            page: parse_positive("DEADLINE_PAGE", lookup("DEADLINE_PAGE"), 1)?,
            page_size: parse_positive(
                "DEADLINE_PAGE_SIZE",
                lookup("DEADLINE_PAGE_SIZE"),
                DEFAULT_PAGE_SIZE,
            )?,
        })
    }
}

/// 正の整数をパースする（未設定ならデフォルト値）
fn parse_positive(
    name: &'static str,
    value: Option<String>,
    default: u32,
) -> Result<u32, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };

    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::Invalid { name, value }),
    }
}
