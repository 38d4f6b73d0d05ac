use crate::{
    domain::{Candidate, CandidateId, Position, PositionStatus, Score, Stage, StageId},
    error::{KanbanError, Result},
    source::InterviewFlow,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Seed data for a data source, keyed by position ID
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub positions: BTreeMap<String, Position>,
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub candidates: BTreeMap<String, Vec<Candidate>>,
}

impl Fixture {
    /// Demo data: three positions sharing a four-stage pipeline
    pub fn demo() -> Self {
        let stages = vec![
            Stage::new("new", "Nuevos", "#3498db", 0),
            Stage::new("technical", "Entrevista Técnica", "#2ecc71", 1),
            Stage::new("hr", "Entrevista RRHH", "#e74c3c", 2),
            Stage::new("offer", "Oferta", "#f1c40f", 3),
        ];

        let mut positions = BTreeMap::new();
        for (id, title, manager, (y, m, d), status) in [
            (1, "Senior Backend Engineer", "John Doe", (2024, 12, 31), PositionStatus::Open),
            (2, "Junior Android Engineer", "Jane Smith", (2024, 11, 15), PositionStatus::Hired),
            (3, "Product Manager", "Alex Jones", (2024, 7, 31), PositionStatus::Draft),
        ] {
            positions.insert(
                id.to_string(),
                Position {
                    id,
                    title: title.to_string(),
                    manager: manager.to_string(),
                    deadline: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
                    status,
                },
            );
        }

        let mut candidates = BTreeMap::new();
        for (position, id, name, stage, score) in [
            ("1", "1", "John Doe", 0, 2),
            ("1", "2", "Jane Smith", 1, 3),
            ("2", "3", "Alice Johnson", 2, 4),
            ("3", "4", "Bob Wilson", 3, 5),
        ] {
            let stage: &Stage = &stages[stage];
            let score = Score::new(score).unwrap_or_default();
            let candidate = Candidate::new(id, name, score, id.parse().unwrap_or_default())
                .in_stage(stage.id.clone(), stage.name.clone());
            candidates
                .entry(position.to_string())
                .or_insert_with(Vec::new)
                .push(candidate);
        }

        Self {
            positions,
            stages,
            candidates,
        }
    }

    pub fn position(&self, position_id: &str) -> Result<Position> {
        self.positions
            .get(position_id)
            .cloned()
            .ok_or_else(|| KanbanError::PositionNotFound(position_id.to_string()))
    }

    /// Every position shares the same pipeline
    pub fn interview_flow(&self) -> InterviewFlow {
        InterviewFlow {
            stages: self.stages.clone(),
            candidates: Vec::new(),
        }
    }

    pub fn candidates_for(&self, position_id: &str) -> Vec<Candidate> {
        self.candidates
            .get(position_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Sets a candidate's status in every position it applied to
    ///
    /// The step label follows the matching stage name, or the raw status when
    /// no stage has that ID.
    pub fn update_candidate_status(
        &mut self,
        candidate_id: &CandidateId,
        new_status: &StageId,
    ) -> Result<()> {
        let step = self
            .stages
            .iter()
            .find(|s| &s.id == new_status)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| new_status.to_string());

        let mut found = false;
        for candidate in self
            .candidates
            .values_mut()
            .flat_map(|list| list.iter_mut())
            .filter(|c| &c.id == candidate_id)
        {
            candidate.move_to(new_status.clone(), step.clone());
            found = true;
        }

        if !found {
            return Err(KanbanError::CandidateNotFound(candidate_id.to_string()));
        }
        Ok(())
    }
}
