use crate::domain::{
    candidate::{Candidate, CandidateId},
    stage::{Stage, StageId},
};
use serde::{Deserialize, Serialize};

/// How candidates are matched to stage columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketBy {
    /// Match `candidate.current_interview_step` against the stage name
    #[default]
    StepLabel,
    /// Match `candidate.status` against the stage id; the step label is derived
    StageId,
}

/// How columns are ordered on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnOrder {
    /// Keep the order the data source returned
    #[default]
    SourceOrder,
    /// Sort by the stage `order` field
    StageOrder,
}

/// Board configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    #[serde(default)]
    pub bucket_by: BucketBy,
    #[serde(default)]
    pub column_order: ColumnOrder,
}

/// A kanban column: one interview stage and the candidates currently in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: StageId,
    pub title: String,
    pub color: String,
    pub order: u32,
    pub candidates: Vec<Candidate>,
}

impl Column {
    /// Creates an empty column for a stage
    pub fn for_stage(stage: &Stage) -> Self {
        Self {
            id: stage.id.clone(),
            title: stage.name.clone(),
            color: stage.color.clone(),
            order: stage.order,
            candidates: Vec::new(),
        }
    }

    pub fn find_candidate(&self, id: &CandidateId) -> Option<&Candidate> {
        self.candidates.iter().find(|c| &c.id == id)
    }

    pub fn contains(&self, id: &CandidateId) -> bool {
        self.find_candidate(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Kanban board state for one position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub position_title: String,
    pub columns: Vec<Column>,
}

impl Board {
    pub fn new(position_title: String, columns: Vec<Column>) -> Self {
        Self {
            position_title,
            columns,
        }
    }

    /// Gets the column for a stage
    pub fn column(&self, id: &StageId) -> Option<&Column> {
        find_column(&self.columns, id)
    }

    /// Gets the column currently holding a candidate
    pub fn column_of(&self, candidate: &CandidateId) -> Option<&Column> {
        column_of(&self.columns, candidate)
    }

    pub fn total_candidates(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}

pub(crate) fn find_column<'a>(columns: &'a [Column], id: &StageId) -> Option<&'a Column> {
    columns.iter().find(|col| &col.id == id)
}

pub(crate) fn column_of<'a>(columns: &'a [Column], candidate: &CandidateId) -> Option<&'a Column> {
    columns.iter().find(|col| col.contains(candidate))
}
