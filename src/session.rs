use crate::{
    domain::{
        board::column_of, Candidate, CandidateDetails, CandidateId, Column, IgnoreReason,
        MoveRequest, StageId,
    },
    service::{KanbanService, MoveResult},
    source::DataSource,
};
use tracing::debug;

/// Drag gesture that finished over a column, or over nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd {
    pub active: CandidateId,
    pub over: Option<StageId>,
}

impl DragEnd {
    pub fn new(active: impl Into<CandidateId>, over: Option<&str>) -> Self {
        Self {
            active: active.into(),
            over: over.map(StageId::from),
        }
    }
}

/// Board state owned by the UI for one position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSession {
    pub position_id: String,
    pub columns: Vec<Column>,
    pub position_title: String,
    pub is_loading: bool,
    /// User-facing message of the last recoverable failure
    pub error: Option<String>,
    pub selected: Option<Candidate>,
}

impl BoardSession {
    pub fn new(position_id: impl Into<String>) -> Self {
        Self {
            position_id: position_id.into(),
            columns: Vec::new(),
            position_title: String::new(),
            is_loading: true,
            error: None,
            selected: None,
        }
    }

    /// Loads the board, storing a user-facing message on failure
    ///
    /// A failed load leaves the board empty, even after an earlier success.
    pub async fn load<S: DataSource>(&mut self, service: &KanbanService<S>) {
        self.is_loading = true;
        self.error = None;

        match service.load_board(&self.position_id).await {
            Ok(board) => {
                self.columns = board.columns;
                self.position_title = board.position_title;
                self.refresh_selection();
            }
            Err(e) => {
                self.columns.clear();
                self.position_title.clear();
                self.selected = None;
                self.error = Some(e.to_string());
            }
        }

        self.is_loading = false;
    }

    /// Handles a finished drag gesture
    ///
    /// The source column is whichever column currently holds the dragged
    /// candidate. On rollback the previous columns are restored and the error
    /// message is stored.
    pub async fn handle_drag_end<S: DataSource>(
        &mut self,
        service: &KanbanService<S>,
        event: DragEnd,
    ) -> MoveResult {
        let Some(destination) = event.over else {
            debug!(candidate_id = %event.active, "drag ended outside any column");
            return MoveResult::Ignored(IgnoreReason::NoDropTarget);
        };
        let Some(source) = column_of(&self.columns, &event.active).map(|col| col.id.clone())
        else {
            debug!(candidate_id = %event.active, "dragged candidate is not on the board");
            return MoveResult::Ignored(IgnoreReason::CandidateNotInSource(event.active));
        };

        self.error = None;
        let request = MoveRequest {
            candidate: event.active,
            source,
            destination,
        };

        let result = service.move_candidate(&self.columns, &request).await;
        match &result {
            MoveResult::Ignored(_) => {}
            MoveResult::Committed(columns) => {
                self.columns = columns.clone();
                self.refresh_selection();
            }
            MoveResult::RolledBack { columns, error } => {
                self.columns = columns.clone();
                self.refresh_selection();
                self.error = Some(error.to_string());
            }
        }
        result
    }

    /// Selects a candidate card; returns false when it is not on the board
    pub fn select_candidate(&mut self, id: &CandidateId) -> bool {
        self.selected = column_of(&self.columns, id)
            .and_then(|col| col.find_candidate(id))
            .cloned();
        self.selected.is_some()
    }

    /// Re-reads the selected candidate from the current columns
    fn refresh_selection(&mut self) {
        if let Some(id) = self.selected.as_ref().map(|c| c.id.clone()) {
            self.select_candidate(&id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_details(&self) -> Option<CandidateDetails> {
        self.selected.as_ref().map(Candidate::details)
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn column(&self, id: &StageId) -> Option<&Column> {
        self.columns.iter().find(|col| &col.id == id)
    }

    pub fn total_candidates(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}
