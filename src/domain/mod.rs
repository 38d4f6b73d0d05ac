pub mod board;
pub mod candidate;
pub mod moves;
pub mod position;
pub mod projection;
pub mod stage;

pub use board::{Board, BoardConfig, BucketBy, Column, ColumnOrder};
pub use candidate::{Candidate, CandidateDetails, CandidateId, Score};
pub use moves::{plan_move, IgnoreReason, MoveOutcome, MoveRequest, PendingMove};
pub use position::{Position, PositionStatus};
pub use projection::project;
pub use stage::{Stage, StageId};
