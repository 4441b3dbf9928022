//! 出力ファイルのパス決定と書き込み

use std::path::{Path, PathBuf};

use fs_err as fs;

use crate::error::{Error, Result};

pub const YUYV_EXTENSION: &str = "yuyv";
pub const C_EXTENSION: &str = "c";
pub const PREVIEW_SUFFIX: &str = "preview.png";

/// 入力パスから導出した出力先
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// RAWのYUYVデータ
    pub yuyv: PathBuf,
    /// C配列のソース
    pub c_source: PathBuf,
    /// 確認用のPNG
    pub preview: PathBuf,
}

impl OutputPaths {
    /// 入力ファイルと同じディレクトリに出力する
    pub fn beside(input: &Path) -> Self {
        Self {
            yuyv: input.with_extension(YUYV_EXTENSION),
            c_source: input.with_extension(C_EXTENSION),
            preview: input.with_extension(PREVIEW_SUFFIX),
        }
    }

    /// 指定ディレクトリに出力する。ファイル名は `beside` と同じ
    pub fn in_dir(input: &Path, dir: &Path) -> Self {
        let name = input.file_name().map(Path::new).unwrap_or(input);
        Self::beside(&dir.join(name))
    }

    pub fn new(input: &Path, dir: Option<&Path>) -> Self {
        match dir {
            Some(dir) => Self::in_dir(input, dir),
            None => Self::beside(input),
        }
    }
}

/// ファイルへそのまま書き込む
pub fn write_bytes(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(|e| Error::write(path, e))?;
    tracing::info!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
