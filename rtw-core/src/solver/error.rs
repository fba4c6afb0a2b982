use crate::utils::GenericError;
use std::fmt::{Display, Formatter};

/// Specifies failures of the route search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverError {
    /// Origin city has no continent, so the continents to visit cannot be determined.
    MissingContinent {
        /// Origin city id.
        city_id: String,
    },

    /// None of continent orders produced a qualifying path.
    NoQualifyingPath,
}

impl Display for SolverError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SolverError::MissingContinent { city_id } => {
                write!(f, "cannot determine continent of origin city '{city_id}'")
            }
            SolverError::NoQualifyingPath => write!(f, "no qualifying path found"),
        }
    }
}

impl std::error::Error for SolverError {}

impl From<SolverError> for GenericError {
    fn from(value: SolverError) -> Self {
        value.to_string().into()
    }
}
