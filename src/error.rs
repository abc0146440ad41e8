use thiserror::Error;

/// Failures at the output boundary. Rendering itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("pixel buffer of {len} bytes does not fit a {width}x{height} RGB image")]
    BufferSize { width: u32, height: u32, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
