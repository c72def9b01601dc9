//! # 期限一覧ダッシュボード
//!
//! バックエンド API から期限を 1 ページ分取得し、タブ区切りで標準出力に書き出す。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `DOCKETFLOW_API_URL` | **Yes** | バックエンド API のベース URL |
//! | `DEADLINE_PAGE` | No | ページ番号（デフォルト: `1`） |
//! | `DEADLINE_PAGE_SIZE` | No | 1 ページあたりの件数（デフォルト: `20`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログレベル |
//!
//! ## 起動方法
//!
//! ```bash
//! DOCKETFLOW_API_URL=http://localhost:13000 cargo run -p docketflow-dashboard
//! ```

use anyhow::Context as _;
use docketflow_dashboard::{
    client::{ApiClientImpl, FetchError},
    config::DashboardConfig,
    deadline_list::DeadlineListing,
};
use docketflow_shared::observability::{TracingConfig, init_tracing};

/// エントリーポイント
///
/// 以下の順序で処理する:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. 設定の読み込み
/// 4. 期限一覧の取得と出力
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("dashboard");
    init_tracing(&tracing_config);
    let _tracing_guard = tracing::info_span!("app", app = %tracing_config.app_name).entered();

    let config = DashboardConfig::from_env().context("設定の読み込みに失敗しました")?;
    let client = ApiClientImpl::new(&config.api_url);
    tracing::debug!(api_url = client.base_url(), page = config.page, "期限一覧を取得します");

    let listing = DeadlineListing::load(&client, config.page, config.page_size)
        .await
        .inspect_err(log_api_problem)
        .context("期限一覧の取得に失敗しました")?;

    for row in listing.rows() {
        println!("{row}");
    }
    println!("{}", listing.summary());

    let pagination = listing.pagination();
    if pagination.has_next_page() {
        tracing::info!(
            next_page = pagination.page() + 1,
            "続きがあります（DEADLINE_PAGE で次のページを指定）"
        );
    }

    Ok(())
}

/// API エラーが Problem Details なら詳細をログに残す
fn log_api_problem(err: &FetchError) {
    if let Some(problem) = err.problem() {
        tracing::error!(
            status = problem.status,
            error_type = %problem.error_type,
            "{}",
            problem.message()
        );
    }
}
