use std::error;
use std::fmt;




#[derive(Clone, Debug, PartialEq, Eq)]


/**
 * Error to represent a vector operation whose validity can only be decided at
 * runtime: a dynamic index, or a conversion from data of unknown length.
 */
pub enum Error {
    IndexOutOfRange { index: usize, dim: usize },
    LengthMismatch { expected: usize, found: usize },
    InvalidComponent { index: usize, text: String },
}




// ============================================================================
impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        use Error::*;

        match self {
            IndexOutOfRange { index, dim } => write!(fmt, "index {} out of range for vector of dimension {}", index, dim),
            LengthMismatch { expected, found } => write!(fmt, "expected {} components, found {}", expected, found),
            InvalidComponent { index, text } => write!(fmt, "component {} is not a valid scalar: '{}'", index, text),
        }
    }
}

impl error::Error for Error {}




// ============================================================================
#[cfg(test)]
mod test {

    use super::Error;

    #[test]
    fn error_messages_name_the_offending_values() {
        assert_eq!(
            Error::IndexOutOfRange { index: 4, dim: 3 }.to_string(),
            "index 4 out of range for vector of dimension 3");
        assert_eq!(
            Error::LengthMismatch { expected: 3, found: 2 }.to_string(),
            "expected 3 components, found 2");
        assert_eq!(
            Error::InvalidComponent { index: 1, text: "abc".to_string() }.to_string(),
            "component 1 is not a valid scalar: 'abc'");
    }
}
