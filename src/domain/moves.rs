//! Candidate moves between columns.
//!
//! A move is planned against the current columns and produces a
//! [`PendingMove`] carrying both the tentative columns and the columns it
//! replaced. The caller shows the tentative view, persists the change, and
//! then either commits or reverts.

use crate::domain::{
    board::{find_column, Column},
    candidate::CandidateId,
    stage::StageId,
};
use std::fmt;

/// A request to move a candidate from one column to another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRequest {
    pub candidate: CandidateId,
    pub source: StageId,
    pub destination: StageId,
}

impl MoveRequest {
    pub fn new(
        candidate: impl Into<CandidateId>,
        source: impl Into<StageId>,
        destination: impl Into<StageId>,
    ) -> Self {
        Self {
            candidate: candidate.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Why a move was dropped without touching any state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    SourceColumnNotFound(StageId),
    DestinationColumnNotFound(StageId),
    SameColumn,
    CandidateNotInSource(CandidateId),
    /// Drag ended outside any column
    NoDropTarget,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceColumnNotFound(id) => write!(f, "source column {} not found", id),
            Self::DestinationColumnNotFound(id) => {
                write!(f, "destination column {} not found", id)
            }
            Self::SameColumn => write!(f, "source and destination are the same column"),
            Self::CandidateNotInSource(id) => {
                write!(f, "candidate {} is not in the source column", id)
            }
            Self::NoDropTarget => write!(f, "no drop target"),
        }
    }
}

/// A move applied tentatively, awaiting confirmation from the data source
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "a pending move must be committed or reverted"]
pub struct PendingMove {
    candidate: CandidateId,
    new_status: StageId,
    previous: Vec<Column>,
    tentative: Vec<Column>,
}

impl PendingMove {
    pub fn candidate(&self) -> &CandidateId {
        &self.candidate
    }

    /// Status to persist for the moved candidate
    pub fn new_status(&self) -> &StageId {
        &self.new_status
    }

    /// Optimistic view to display while persistence is in flight
    pub fn tentative(&self) -> &[Column] {
        &self.tentative
    }

    pub fn previous(&self) -> &[Column] {
        &self.previous
    }

    /// Keeps the optimistic view
    pub fn commit(self) -> Vec<Column> {
        self.tentative
    }

    /// Restores the columns as they were before the move
    pub fn revert(self) -> Vec<Column> {
        self.previous
    }
}

/// Result of planning a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Ignored(IgnoreReason),
    Planned(PendingMove),
}

/// Validates a move and builds the tentative columns
///
/// The candidate is removed from the source column and appended to the end
/// of the destination column with its status set to the destination id and
/// its step label set to the destination title. All other columns are left
/// untouched.
pub fn plan_move(columns: &[Column], request: &MoveRequest) -> MoveOutcome {
    let Some(source) = find_column(columns, &request.source) else {
        return MoveOutcome::Ignored(IgnoreReason::SourceColumnNotFound(request.source.clone()));
    };
    let Some(destination) = find_column(columns, &request.destination) else {
        return MoveOutcome::Ignored(IgnoreReason::DestinationColumnNotFound(
            request.destination.clone(),
        ));
    };
    if source.id == destination.id {
        return MoveOutcome::Ignored(IgnoreReason::SameColumn);
    }
    let Some(candidate) = source.find_candidate(&request.candidate) else {
        return MoveOutcome::Ignored(IgnoreReason::CandidateNotInSource(
            request.candidate.clone(),
        ));
    };

    let moved = candidate
        .clone()
        .in_stage(destination.id.clone(), destination.title.clone());

    let tentative = columns
        .iter()
        .map(|col| {
            if col.id == source.id {
                let mut col = col.clone();
                // Only the first match moves; the destination receives one copy
                let index = col.candidates.iter().position(|c| c.id == request.candidate);
                if let Some(index) = index {
                    col.candidates.remove(index);
                }
                col
            } else if col.id == destination.id {
                let mut col = col.clone();
                col.candidates.push(moved.clone());
                col
            } else {
                col.clone()
            }
        })
        .collect();

    MoveOutcome::Planned(PendingMove {
        candidate: request.candidate.clone(),
        new_status: destination.id.clone(),
        previous: columns.to_vec(),
        tentative,
    })
}
