//! 入力画像の読み込み

use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};

/// 画像ファイルを読み込んで8bit RGBのピクセル配列にする
///
/// アルファチャンネルは捨て、16bit画像は8bitに丸める。
/// パスが存在しない場合もデコード失敗として扱う。
pub fn load(path: impl AsRef<Path>) -> Result<RgbImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(img.into_rgb8())
}
