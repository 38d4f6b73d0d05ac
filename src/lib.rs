//! # Recruit Kanban
//!
//! Core logic for a recruiting pipeline kanban board.
//!
//! Candidates applying to a position are bucketed into one column per
//! interview stage. Dragging a candidate to another column is applied
//! optimistically, persisted through a [`DataSource`], and rolled back if
//! the data source rejects it.

pub mod domain;
pub mod error;
pub mod service;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use domain::{
    board::{Board, BoardConfig, Column},
    candidate::{Candidate, CandidateId, Score},
    moves::{MoveOutcome, MoveRequest, PendingMove},
    stage::{Stage, StageId},
};
pub use error::{KanbanError, Result};
pub use service::{KanbanService, MoveResult};
pub use session::{BoardSession, DragEnd};
pub use source::DataSource;
