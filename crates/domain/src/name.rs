use derive_more::{AsRef, Display};

/// Name of an exercise recovered from a document.
///
/// A valid name has at least three characters and contains no remains of a video link.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseName(String);

impl ExerciseName {
    pub const MIN_LEN: usize = 3;

    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        let len = trimmed_name.chars().count();

        if len < Self::MIN_LEN {
            return Err(NameError::TooShort(len));
        }

        let lowercase_name = trimmed_name.to_lowercase();

        if lowercase_name.contains("http") || lowercase_name.contains("youtu") {
            return Err(NameError::UrlFragment);
        }

        Ok(ExerciseName(trimmed_name.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum NameError {
    #[error("Name must be 3 characters or more ({0} < 3)")]
    TooShort(usize),
    #[error("Name must not contain a URL")]
    UrlFragment,
}
