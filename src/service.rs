use crate::{
    domain::{
        plan_move, project, Board, BoardConfig, Column, IgnoreReason, MoveOutcome, MoveRequest,
        PendingMove,
    },
    error::{KanbanError, Result},
    source::DataSource,
};
use tracing::{debug, error, info, warn};

/// Final state of a move after persistence resolved
#[derive(Debug)]
pub enum MoveResult {
    /// Preconditions failed; nothing changed and nothing was persisted
    Ignored(IgnoreReason),
    /// The data source accepted the move
    Committed(Vec<Column>),
    /// The data source rejected the move; `columns` is the pre-move view
    RolledBack {
        columns: Vec<Column>,
        error: KanbanError,
    },
}

impl MoveResult {
    /// Columns to display after the move, if they changed or were restored
    pub fn columns(&self) -> Option<&[Column]> {
        match self {
            Self::Ignored(_) => None,
            Self::Committed(columns) | Self::RolledBack { columns, .. } => Some(columns),
        }
    }

    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// Loads boards and coordinates candidate moves against a data source
pub struct KanbanService<S> {
    source: S,
    config: BoardConfig,
}

impl<S: DataSource> KanbanService<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, BoardConfig::default())
    }

    pub fn with_config(source: S, config: BoardConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Fetches position, stages and candidates and projects them into columns
    ///
    /// Any fetch failure is reported as [`KanbanError::LoadFailed`].
    pub async fn load_board(&self, position_id: &str) -> Result<Board> {
        match self.fetch_board(position_id).await {
            Ok(board) => {
                debug!(
                    position_id,
                    columns = board.columns.len(),
                    candidates = board.total_candidates(),
                    "board loaded"
                );
                Ok(board)
            }
            Err(e) => {
                error!(position_id, error = %e, "error fetching kanban data");
                Err(KanbanError::load_failed(e))
            }
        }
    }

    async fn fetch_board(&self, position_id: &str) -> Result<Board> {
        let position = self.source.get_position(position_id).await?;
        let flow = self.source.get_interview_flow(position_id).await?;
        let candidates = self.source.get_candidates_by_position(position_id).await?;

        let columns = project(&flow.stages, &candidates, &self.config);
        Ok(Board::new(position.title, columns))
    }

    /// Plans a move, persists it and commits or rolls back
    pub async fn move_candidate(&self, columns: &[Column], request: &MoveRequest) -> MoveResult {
        match plan_move(columns, request) {
            MoveOutcome::Ignored(reason) => {
                debug!(candidate_id = %request.candidate, %reason, "move ignored");
                MoveResult::Ignored(reason)
            }
            MoveOutcome::Planned(pending) => self.persist(pending).await,
        }
    }

    /// Persists a pending move
    ///
    /// Callers that render the tentative view while the update is in flight
    /// plan the move themselves and hand it over here.
    pub async fn persist(&self, pending: PendingMove) -> MoveResult {
        let result = self
            .source
            .update_candidate_status(pending.candidate(), pending.new_status())
            .await;

        match result {
            Ok(()) => {
                info!(
                    candidate_id = %pending.candidate(),
                    new_status = %pending.new_status(),
                    "candidate moved"
                );
                MoveResult::Committed(pending.commit())
            }
            Err(e) => {
                warn!(
                    candidate_id = %pending.candidate(),
                    new_status = %pending.new_status(),
                    error = %e,
                    "error updating candidate status, rolling back"
                );
                MoveResult::RolledBack {
                    columns: pending.revert(),
                    error: KanbanError::update_failed(e),
                }
            }
        }
    }
}
