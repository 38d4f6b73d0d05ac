use crate::domain::stage::StageId;
use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Interview score on a 0 to 5 scale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Result<Self, KanbanError> {
        if value > Self::MAX {
            return Err(KanbanError::InvalidScore(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = KanbanError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// A candidate applying to a position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    /// Display label of the stage the candidate is in
    pub current_interview_step: String,
    pub score: Score,
    /// Identifier of the stage the candidate is in
    pub status: StageId,
    #[serde(rename = "applicationId")]
    pub application_id: u64,
}

impl Candidate {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        score: Score,
        application_id: u64,
    ) -> Self {
        Self {
            id: CandidateId::new(id),
            name: name.into(),
            current_interview_step: String::new(),
            score,
            status: StageId::new(""),
            application_id,
        }
    }

    /// Places the candidate in a stage, updating both status and step label
    pub fn in_stage(mut self, status: StageId, step: impl Into<String>) -> Self {
        self.move_to(status, step);
        self
    }

    /// Moves the candidate to another stage
    pub fn move_to(&mut self, status: StageId, step: impl Into<String>) {
        self.status = status;
        self.current_interview_step = step.into();
    }

    /// Summary shown when a candidate card is selected
    pub fn details(&self) -> CandidateDetails {
        CandidateDetails {
            name: self.name.clone(),
            application_id: self.application_id,
            stage: self.current_interview_step.clone(),
            score: self.score.to_string(),
        }
    }
}

/// Display fields of a selected candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateDetails {
    pub name: String,
    pub application_id: u64,
    pub stage: String,
    pub score: String,
}
