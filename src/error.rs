use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatLineError {
    #[error("{stat} line is missing segments: expected {expected}, found {found}")]
    MissingSegment {
        stat: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{stat} line has a non-numeric segment: '{segment}'")]
    InvalidNumber {
        stat: &'static str,
        segment: String,
    },
}

pub type Result<T> = std::result::Result<T, StatLineError>;
