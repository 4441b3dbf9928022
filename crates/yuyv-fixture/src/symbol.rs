//! C言語の識別子の生成

use std::path::Path;

/// 配列名の末尾
pub const SYMBOL_SUFFIX: &str = "_yuyv";

/// 識別子にできない名前の代替
const FALLBACK: &str = "image";

/// 任意の文字列をCの識別子として使える形にする
///
/// `[A-Za-z0-9_]` 以外は `_` に置き換え、数字で始まる場合は `_` を前置する。
pub fn sanitize(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    match ident.chars().next() {
        None => FALLBACK.to_string(),
        Some(c) if c.is_ascii_digit() => {
            ident.insert(0, '_');
            ident
        }
        Some(_) => ident,
    }
}

/// ファイルパスから配列名を作る
///
/// 拡張子を除いたファイル名に `_yuyv` を付ける。
/// 除くのは最後の拡張子だけなので `a.b.png` は `a_b_yuyv` になる
pub fn from_path(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    format!("{}{SYMBOL_SUFFIX}", sanitize(&stem))
}
