use thiserror::Error;

use crate::media::Coordinate;

#[derive(Error, Debug)]
pub enum PixelVeilError {
    /// Represents an unsupported media file. For example, a WAV file or a GIF image
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    /// Two images were compared that do not share the same dimensions
    #[error(
        "Dimension mismatch: {left_width}x{left_height} cannot be compared to {right_width}x{right_height}"
    )]
    DimensionMismatch {
        left_width: u32,
        left_height: u32,
        right_width: u32,
        right_height: u32,
    },

    /// A rectangle starting at `origin` does not fit into the host image
    #[error(
        "Out of bounds: a {width}x{height} area at {origin} does not fit into a {host_width}x{host_height} image"
    )]
    OutOfBounds {
        origin: Coordinate,
        width: u32,
        height: u32,
        host_width: u32,
        host_height: u32,
    },

    /// A text message contains a character outside of `A-Z` and space
    #[error("Unsupported character {0:?}, only letters A-Z and space can be hidden")]
    UnsupportedCharacter(char),

    /// A code that does not belong to the text alphabet, usually the image carries no text
    #[error("Invalid symbol {0} found, the image does not carry a text message")]
    InvalidSymbol(u8),

    #[error(
        "Capacity Error: the message needs {required} pixels but the image only has {available}"
    )]
    CapacityExceeded { required: usize, available: usize },

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    #[error("API Error: Missing message or secret image")]
    MissingPayload,

    #[error("API Error: Either a message or a secret image can be hidden, not both")]
    AmbiguousPayload,
}
