use crate::{
    domain::{Candidate, CandidateId, Position, StageId},
    error::Result,
    source::{DataSource, Fixture, InterviewFlow},
};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory data source seeded from a fixture
pub struct InMemorySource {
    data: RwLock<Fixture>,
}

impl InMemorySource {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            data: RwLock::new(fixture),
        }
    }

    /// Creates a source holding the demo positions and candidates
    pub fn demo() -> Self {
        Self::new(Fixture::demo())
    }

    /// Returns a copy of the current data
    pub async fn snapshot(&self) -> Fixture {
        self.data.read().await.clone()
    }
}

impl Default for InMemorySource {
    fn default() -> Self {
        Self::demo()
    }
}

#[async_trait]
impl DataSource for InMemorySource {
    async fn get_position(&self, position_id: &str) -> Result<Position> {
        debug!(position_id, "fetching position");
        self.data.read().await.position(position_id)
    }

    async fn get_interview_flow(&self, position_id: &str) -> Result<InterviewFlow> {
        debug!(position_id, "fetching interview flow");
        Ok(self.data.read().await.interview_flow())
    }

    async fn get_candidates_by_position(&self, position_id: &str) -> Result<Vec<Candidate>> {
        debug!(position_id, "fetching candidates");
        Ok(self.data.read().await.candidates_for(position_id))
    }

    async fn update_candidate_status(
        &self,
        candidate_id: &CandidateId,
        new_status: &StageId,
    ) -> Result<()> {
        debug!(%candidate_id, %new_status, "updating candidate status");
        self.data
            .write()
            .await
            .update_candidate_status(candidate_id, new_status)
    }
}
