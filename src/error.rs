use thiserror::Error;

pub type Result<T> = std::result::Result<T, KanbanError>;

#[derive(Debug, Error)]
pub enum KanbanError {
    #[error("Position not found: {0}")]
    PositionNotFound(String),

    #[error("Candidate not found: {0}")]
    CandidateNotFound(String),

    #[error("Invalid score {0}: must be between 0 and 5")]
    InvalidScore(u8),

    /// Any of the board fetches failed. The message is shown to the user.
    #[error("Error loading the kanban board data. Please try again.")]
    LoadFailed(#[source] Box<KanbanError>),

    /// Persisting a candidate move failed. The message is shown to the user.
    #[error("Error updating the candidate status. Please try again.")]
    UpdateFailed(#[source] Box<KanbanError>),

    #[error("Storage error: {0}")]
    StorageError(String),

    /// Failure reported by an external data source implementation
    #[error("Data source error: {0}")]
    Backend(#[from] anyhow::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl KanbanError {
    /// Wraps an error raised while fetching board data
    pub fn load_failed(cause: KanbanError) -> Self {
        Self::LoadFailed(Box::new(cause))
    }

    /// Wraps an error raised while persisting a move
    pub fn update_failed(cause: KanbanError) -> Self {
        Self::UpdateFailed(Box::new(cause))
    }

    /// Returns true for the two errors the board recovers from
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::LoadFailed(_) | Self::UpdateFailed(_))
    }
}
