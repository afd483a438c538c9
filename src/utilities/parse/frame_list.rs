use crate::FrameNumber;
use thiserror_no_std::Error;

/// Errors that can occur when parsing a textual list of frames.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameListParseError {
    /// A token could not be read as a signed integer.
    #[error("Invalid frame '{token}' at position {position}")]
    InvalidFrame { token: String, position: usize },

    /// The input contained no frames at all.
    #[error("No frames were provided")]
    Empty,
}

/// Parses frames separated by commas and/or whitespace.
///
/// `"1, 2,3  -5"` yields `[1, 2, 3, -5]`. Empty tokens between repeated
/// separators are skipped. `position` in errors is the zero based index of
/// the offending token among the non-empty tokens.
pub fn parse_frame_list(text: &str) -> Result<Vec<FrameNumber>, FrameListParseError> {
    let frames = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token
                .parse::<FrameNumber>()
                .map_err(|_| FrameListParseError::InvalidFrame {
                    token: token.to_string(),
                    position,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if frames.is_empty() {
        return Err(FrameListParseError::Empty);
    }

    Ok(frames)
}
