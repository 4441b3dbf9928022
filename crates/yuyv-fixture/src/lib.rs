//! 静止画からYUYV 4:2:2のテストフィクスチャを生成する
//!
//! 読み込み → BT.601変換 → YUYVパッキング → {RAWファイル, C配列ソース} の順に処理する

use std::path::{Path, PathBuf};

pub mod codegen;
pub mod color;
pub mod error;
pub mod loader;
pub mod output;
pub mod pack;
pub mod preview;
pub mod symbol;

pub use error::{Error, Result};
pub use output::OutputPaths;
pub use pack::OddWidthPolicy;

/// 変換オプション
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub odd_width: OddWidthPolicy,
    /// 出力先ディレクトリ。Noneなら入力と同じ場所
    pub out_dir: Option<PathBuf>,
    /// 確認用PNGを出力する
    pub preview: bool,
}

/// 変換結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// 出力上の幅(Padした場合は元画像+1)
    pub width: u32,
    pub height: u32,
    pub symbol: String,
    pub yuyv: PathBuf,
    pub c_source: PathBuf,
    pub preview: Option<PathBuf>,
    pub bytes: usize,
}

/// 画像をYUYVバイト列に変換する
///
/// 戻り値は(出力上の幅, 高さ, バイト列)
pub fn encode(input: &Path, policy: OddWidthPolicy) -> Result<(u32, u32, Vec<u8>)> {
    let rgb = loader::load(input)?;
    let yuv = color::convert(&rgb);
    let width = policy.packed_width(yuv.width())?;
    let buf = pack::pack(&yuv, policy)?;
    Ok((width, yuv.height(), buf))
}

/// 画像ファイルを変換して `.yuyv` と `.c` を書き出す
///
/// デコードに失敗した場合は何も書き出さない。
/// C配列の書き込みに失敗しても先に書いた `.yuyv` は残る。
pub fn convert_file(input: &Path, opts: &Options) -> Result<Report> {
    let (width, height, buf) = encode(input, opts.odd_width)?;
    let paths = OutputPaths::new(input, opts.out_dir.as_deref());

    output::write_bytes(&paths.yuyv, &buf)?;

    let symbol = symbol::from_path(&paths.c_source);
    let src = codegen::generate(&symbol, &buf);
    output::write_bytes(&paths.c_source, src.as_bytes())?;

    let preview = if opts.preview {
        preview::save(&paths.preview, &buf, width, height)?;
        Some(paths.preview)
    } else {
        None
    };

    Ok(Report {
        width,
        height,
        symbol,
        yuyv: paths.yuyv,
        c_source: paths.c_source,
        preview,
        bytes: buf.len(),
    })
}
