//! Lock Key - composite "scope:identifier" keys
//!
//! ユーザーロックのキーは `user:E0012` のような複合キー、IP ロックの
//! キーは素の IP アドレス。複合キーの組み立てはサーバー側の責務で、
//! ここでは識別子の取り出しのみを扱う。

/// 複合キーから識別子部分 (社員番号など) を取り出す
///
/// 最初のコロンで分割して残りを返す。コロンが無い、または残りが空の
/// 場合はキー全体をそのまま返す。
pub fn bare_identifier(key: &str) -> &str {
    match key.split_once(':') {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => key,
    }
}
