use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Hiring status of a position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionStatus {
    #[serde(rename = "Abierto")]
    Open,
    #[serde(rename = "Contratado")]
    Hired,
    #[serde(rename = "Borrador")]
    Draft,
}

impl fmt::Display for PositionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Hired => write!(f, "Hired"),
            Self::Draft => write!(f, "Draft"),
        }
    }
}

/// A job position candidates apply to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: u64,
    pub title: String,
    pub manager: String,
    pub deadline: NaiveDate,
    pub status: PositionStatus,
}
