use crate::FormatError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("{0}")]
    Custom(String),
}

impl PartialEq<FormatError> for Error {
    fn eq(&self, other: &FormatError) -> bool {
        if let Error::Format(err) = self {
            *err == *other
        } else {
            false
        }
    }
}
