use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 入力画像が存在しない、もしくはデコードできない
    #[error("Image file '{}' not found or unreadable", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// YUYVはピクセルペア単位なので奇数幅は扱えない
    #[error("Image width {width} is odd, YUYV 4:2:2 requires an even width")]
    OddWidth { width: u32 },
    #[error("Failed to write '{}'", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Preview error: {0}")]
    Preview(String),
}

impl Error {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
