//! BT.601による色空間変換
//!
//! 8bit固定小数点、スタジオレンジ(Y:16-235, UV:16-240)で計算する

use image::RgbImage;

/// 1画素分の輝度と色差
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Yuv {
    pub y: u8,
    pub u: u8,
    pub v: u8,
}

impl Yuv {
    /// RGBからBT.601の整数近似で変換する
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let (r, g, b) = (r as i32, g as i32, b as i32);
        let y = ((66 * r + 129 * g + 25 * b + 128) >> 8) + 16;
        let u = ((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128;
        let v = ((112 * r - 94 * g - 18 * b + 128) >> 8) + 128;
        Self {
            y: clamp_u8(y),
            u: clamp_u8(u),
            v: clamp_u8(v),
        }
    }
}

#[inline]
const fn clamp_u8(x: i32) -> u8 {
    if x < 0 {
        0
    } else if x > 255 {
        255
    } else {
        x as u8
    }
}

/// 画素ごとにYUVへ変換した画像
///
/// 行優先で並び、サイズは元画像と同じ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YuvImage {
    width: u32,
    height: u32,
    pixels: Vec<Yuv>,
}

impl YuvImage {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Yuv]> {
        // 幅0のときchunks_exactはパニックするので1にしておく(画素も0個)
        self.pixels.chunks_exact((self.width as usize).max(1))
    }
}

/// RGB画像全体をYUVに変換する
pub fn convert(img: &RgbImage) -> YuvImage {
    let pixels = img
        .pixels()
        .map(|p| {
            let [r, g, b] = p.0;
            Yuv::from_rgb(r, g, b)
        })
        .collect();
    YuvImage {
        width: img.width(),
        height: img.height(),
        pixels,
    }
}
