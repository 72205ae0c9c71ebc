use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolymaskError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("At least 3 points required to create a polygon (have {count})")]
    TooFewVertices { count: usize },
}

pub type Result<T> = std::result::Result<T, PolymaskError>;
