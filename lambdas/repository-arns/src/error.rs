use std::error::Error;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug)]
pub enum RepositoryArnsError {
    MissingFilters,
    MalformedFilter,
}

impl Error for RepositoryArnsError {}

impl Display for RepositoryArnsError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match *self {
            RepositoryArnsError::MissingFilters => {
                write!(f, "Event is missing the filters list!")
            }
            RepositoryArnsError::MalformedFilter => {
                write!(f, "Filters have to be strings!")
            }
        }
    }
}
