//! YUYVバイト列をC言語の配列定義に変換する

/// 1行あたりの要素数
pub const VALUES_PER_LINE: usize = 12;

const HEADER: &str = "#include <stdint.h>\n\n";

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

#[inline]
fn push_hex(dst: &mut String, value: u8) {
    dst.push_str("0x");
    dst.push(HEX_DIGITS[(value >> 4) as usize] as char);
    dst.push(HEX_DIGITS[(value & 0x0f) as usize] as char);
}

/// `const unsigned char <symbol>[] = { ... };` を含むCソースを生成する
///
/// 各要素は `0x%02x` 形式で、12要素ごとに改行する。
/// 最後の要素の後ろにはカンマを付けない。
pub fn generate(symbol: &str, data: &[u8]) -> String {
    // "0xNN, " で1要素6文字
    let mut src = String::with_capacity(HEADER.len() + symbol.len() + 64 + data.len() * 6);
    src.push_str(HEADER);
    src.push_str(&format!("const unsigned char {symbol}[] = {{\n"));
    let last = data.len().saturating_sub(1);
    for (i, value) in data.iter().enumerate() {
        push_hex(&mut src, *value);
        if i == last {
            src.push('\n');
        } else if (i + 1) % VALUES_PER_LINE == 0 {
            src.push_str(",\n");
        } else {
            src.push_str(", ");
        }
    }
    src.push_str("};\n");
    src
}
