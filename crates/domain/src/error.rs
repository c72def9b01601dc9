//! # ドメイン層エラー定義
//!
//! 値オブジェクトの生成時やデシリアライズ時の検証失敗を表現するエラー型。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 入力値が値オブジェクトの不変条件に違反している場合に使用する。
    ///
    /// # 例
    ///
    /// - 空の ID
    /// - 日時として解釈できない文字列
    #[error("バリデーションエラー: {0}")]
    Validation(String),
}
