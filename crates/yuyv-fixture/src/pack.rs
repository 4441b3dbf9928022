//! YUYV 4:2:2へのパッキング
//!
//! 横に隣接する2画素を `[Y0, U0, Y1, V0]` の4byteにまとめる。
//! 2画素目の色差は捨てる。

use crate::{
    color::{Yuv, YuvImage},
    error::{Error, Result},
};

/// 1ピクセルペアあたりのバイト数
pub const BYTES_PER_PAIR: usize = 4;

/// 幅が奇数の画像の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OddWidthPolicy {
    /// エラーにする
    #[default]
    Reject,
    /// 最終列を複製して偶数幅にする
    Pad,
}

impl OddWidthPolicy {
    /// 出力上の幅
    pub fn packed_width(&self, width: u32) -> Result<u32> {
        match (width % 2, self) {
            (0, _) => Ok(width),
            (_, OddWidthPolicy::Reject) => Err(Error::OddWidth { width }),
            (_, OddWidthPolicy::Pad) => Ok(width + 1),
        }
    }
}

/// パッキング後のバイト数
pub fn packed_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 2
}

#[inline]
fn pack_pair(p0: Yuv, p1: Yuv) -> [u8; BYTES_PER_PAIR] {
    [p0.y, p0.u, p1.y, p0.v]
}

/// YUV画像をYUYVのバイト列にする
pub fn pack(img: &YuvImage, policy: OddWidthPolicy) -> Result<Vec<u8>> {
    let width = policy.packed_width(img.width())?;
    let mut buf = Vec::with_capacity(packed_len(width, img.height()));
    for row in img.rows() {
        let mut pairs = row.chunks_exact(2);
        for pair in &mut pairs {
            buf.extend_from_slice(&pack_pair(pair[0], pair[1]));
        }
        // Padの場合だけ残りが出る
        if let [last] = pairs.remainder() {
            buf.extend_from_slice(&pack_pair(*last, *last));
        }
    }
    tracing::debug!(
        "packed {}x{} into {} bytes",
        width,
        img.height(),
        buf.len()
    );
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::*;
    use crate::color::convert;

    #[test]
    fn test_pack_black_2x2() {
        let img = convert(&RgbImage::new(2, 2));
        let buf = pack(&img, OddWidthPolicy::Reject).unwrap();
        assert_eq!(buf, [0x10, 0x80, 0x10, 0x80, 0x10, 0x80, 0x10, 0x80]);
    }

    #[test]
    fn test_pack_uses_first_pixel_chroma() {
        // 赤と青のペア: 色差は赤のものだけ残る
        let mut src = RgbImage::new(2, 1);
        src.put_pixel(0, 0, Rgb([255, 0, 0]));
        src.put_pixel(1, 0, Rgb([0, 0, 255]));
        let buf = pack(&convert(&src), OddWidthPolicy::Reject).unwrap();
        assert_eq!(buf, [82, 90, 41, 240]);
    }

    #[test]
    fn test_pack_size() {
        for (w, h) in [(2, 1), (4, 3), (16, 9), (640, 2)] {
            let img = convert(&RgbImage::new(w, h));
            let buf = pack(&img, OddWidthPolicy::Reject).unwrap();
            assert_eq!(buf.len(), (w * h * 2) as usize);
            assert_eq!(buf.len(), packed_len(w, h));
        }
    }

    #[test]
    fn test_pack_odd_width() {
        let mut src = RgbImage::new(3, 2);
        src.put_pixel(2, 0, Rgb([255, 255, 255]));
        let img = convert(&src);

        let res = pack(&img, OddWidthPolicy::Reject);
        assert!(matches!(res, Err(Error::OddWidth { width: 3 })));

        let buf = pack(&img, OddWidthPolicy::Pad).unwrap();
        assert_eq!(buf.len(), packed_len(4, 2));
        // 1行目の末尾は白の複製
        assert_eq!(&buf[4..8], &[235, 128, 235, 128]);
        // 2行目は黒のみ
        assert_eq!(&buf[8..], &[16, 128, 16, 128, 16, 128, 16, 128]);
    }
}
