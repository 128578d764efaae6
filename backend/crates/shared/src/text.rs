//! Text Sanitation - input boundary rules
//!
//! 入力境界で適用する文字列整形ルール。パスワード候補は評価や保持の前に
//! 必ずここを通す。

/// 印字可能 ASCII (0x20-0x7E) のみで構成されているかどうか
pub fn is_printable_ascii(s: &str) -> bool {
    s.chars().all(|c| ('\x20'..='\x7e').contains(&c))
}

/// 印字可能 ASCII 以外の文字をすべて取り除く
///
/// 全角文字・日本語入力・制御文字はここで落ちる。冪等:
/// `sanitize(sanitize(s)) == sanitize(s)`。
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| ('\x20'..='\x7e').contains(c))
        .collect()
}
