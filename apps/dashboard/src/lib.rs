//! # DocketFlow ダッシュボード
//!
//! 期限一覧ダッシュボードのデータ取得層。
//!
//! ## モジュール構成
//!
//! - `client`: バックエンド API クライアント（`fetch_json` とカレンダーイベント API）
//! - `config`: 環境変数からの設定読み込み
//! - `deadline_list`: 期限一覧の行データ組み立て

pub mod client;
pub mod config;
pub mod deadline_list;
