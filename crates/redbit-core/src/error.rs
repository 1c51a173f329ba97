use thiserror::Error;

#[derive(Error, Debug)]
pub enum SteganoError {
    /// Represents an unsupported carrier media. For example, a GIF or a movie file
    #[error("Media format is not supported")]
    UnsupportedMedia,

    /// Represents an invalid carrier image media. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a target format that would not preserve the hidden bits, for example JPEG
    #[error("Output format '{0}' is not supported, only lossless PNG keeps the hidden message intact")]
    UnsupportedOutputFormat(String),

    /// Represents a sample buffer that does not match the dimensions of a pixel grid
    #[error("Invalid pixel grid: expected {expected} samples but got {actual}")]
    InvalidGrid { expected: usize, actual: usize },

    /// Represents a message character that does not fit into a single byte
    #[error("Invalid input: character {character:?} at position {position} does not fit into one byte")]
    InvalidInput { character: char, position: usize },

    /// Represents a message that carries the terminator as data
    #[error("Invalid input: the reserved terminator '$' was found at position {0}")]
    ReservedTerminator(usize),

    /// Represents an unveil that ran out of pixels before the terminator showed up
    #[error("Malformed payload: no terminator found after {0} decoded bytes")]
    MalformedPayload(usize),

    /// Represents a failure to write target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents a failure when encoding an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,

    /// Represents a message that needs more pixels than the carrier offers, one pixel per bit
    #[error("Capacity Error: the image with the dimensions {width}x{height} is too small for the message, it offers {available} pixels but {required} are required")]
    CapacityExceeded {
        width: u32,
        height: u32,
        required: usize,
        available: usize,
    },

    #[error("API Error: Missing message")]
    MissingMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_render_the_capacity_error_on_one_line() {
        let e = SteganoError::CapacityExceeded {
            width: 4,
            height: 5,
            required: 24,
            available: 20,
        };

        assert_eq!(
            e.to_string(),
            "Capacity Error: the image with the dimensions 4x5 is too small for the message, it offers 20 pixels but 24 are required"
        );
    }
}
