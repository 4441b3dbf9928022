//! 変換結果の目視確認用にYUYVをRGBへ戻す

use std::path::Path;

use image::RgbImage;
use yuvutils_rs::{YuvPackedImage, YuvRange, YuvStandardMatrix};

use crate::error::{Error, Result};

/// RGB24のバッファ長。u32では大きな画像で桁あふれする
#[inline]
fn rgb_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 3
}

/// YUYV422をRGB24に変換する
///
/// 変換時と同じBT.601リミテッドレンジを使う
pub fn yuyv422_to_rgb(buf: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let src = YuvPackedImage {
        width,
        height,
        yuy: buf,
        yuy_stride: width * 2,
    };
    let rgb_stride = width * 3;
    let mut rgb = vec![0; rgb_len(width, height)];
    let range = YuvRange::Limited;
    let matrix = YuvStandardMatrix::Bt601;
    yuvutils_rs::yuyv422_to_rgb(&src, &mut rgb, rgb_stride, range, matrix)
        .map_err(|e| Error::Preview(e.to_string()))?;
    Ok(rgb)
}

/// YUYVバイト列をPNGとして保存する
pub fn save(path: &Path, buf: &[u8], width: u32, height: u32) -> Result<()> {
    let rgb = yuyv422_to_rgb(buf, width, height)?;
    let img = RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| Error::Preview(format!("buffer does not match {width}x{height}")))?;
    img.save(path).map_err(|e| match e {
        image::ImageError::IoError(e) => Error::write(path, e),
        e => Error::Preview(e.to_string()),
    })?;
    tracing::info!("wrote preview to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::Rgb;

    use super::*;
    use crate::{
        color::convert,
        pack::{pack, OddWidthPolicy},
    };

    fn near(a: u8, b: u8) -> bool {
        a.abs_diff(b) <= 3
    }

    #[test]
    fn test_rgb_len() {
        assert_eq!(rgb_len(4, 2), 24);
        // 幅×高さ×3がu32を超える
        assert_eq!(rgb_len(40_000, 40_000), 4_800_000_000);
    }

    #[test]
    fn test_decode_back() {
        let mut src = RgbImage::new(4, 2);
        for x in 0..4 {
            src.put_pixel(x, 1, Rgb([255, 255, 255]));
        }
        let buf = pack(&convert(&src), OddWidthPolicy::Reject).unwrap();

        let rgb = yuyv422_to_rgb(&buf, 4, 2).unwrap();
        assert_eq!(rgb.len(), 4 * 2 * 3);
        // 1行目は黒、2行目は白に戻る
        assert!(rgb[..12].iter().all(|&v| near(v, 0)), "{rgb:?}");
        assert!(rgb[12..].iter().all(|&v| near(v, 255)), "{rgb:?}");
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("black.preview.png");
        let buf = pack(&convert(&RgbImage::new(2, 2)), OddWidthPolicy::Reject).unwrap();
        save(&path, &buf, 2, 2).unwrap();

        let img = image::open(&path).unwrap().into_rgb8();
        assert_eq!(img.dimensions(), (2, 2));
        assert!(img.pixels().all(|p| p.0.iter().all(|&v| near(v, 0))));
    }
}
