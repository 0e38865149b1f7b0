/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open or read the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] aida_image::ImageError),

    /// Error to decode the image.
    #[error("Failed to decode the image. {0}")]
    ImageDecodeError(#[from] image::ImageError),

    /// The image location uses a scheme no loader can serve.
    #[error("Unsupported image location scheme: {0}")]
    UnsupportedScheme(String),

    /// The background decoding task did not complete.
    #[error("Image decoding task failed. {0}")]
    TaskJoinError(#[from] tokio::task::JoinError),
}
