use crate::{
    domain::{Candidate, CandidateId, Position, Stage, StageId},
    error::Result,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod file_source;
pub mod fixture;
pub mod memory;

pub use file_source::FileSource;
pub use fixture::Fixture;
pub use memory::InMemorySource;

/// Interview pipeline of a position
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewFlow {
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// Backing store the board reads from and persists moves to
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Loads a position by ID
    async fn get_position(&self, position_id: &str) -> Result<Position>;

    /// Loads the interview stages of a position
    async fn get_interview_flow(&self, position_id: &str) -> Result<InterviewFlow>;

    /// Lists the candidates applying to a position
    /// Returns an empty list for unknown positions
    async fn get_candidates_by_position(&self, position_id: &str) -> Result<Vec<Candidate>>;

    /// Persists a candidate's new status
    async fn update_candidate_status(
        &self,
        candidate_id: &CandidateId,
        new_status: &StageId,
    ) -> Result<()>;
}
