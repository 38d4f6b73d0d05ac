use crate::{
    domain::{Candidate, CandidateId, Position, StageId},
    error::{KanbanError, Result},
    source::{DataSource, Fixture, InterviewFlow},
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::{fs, sync::RwLock};
use tracing::debug;

/// Data source backed by a JSON fixture file
pub struct FileSource {
    path: PathBuf,
    /// Readers share the file; updates hold it for the whole read-modify-write
    lock: RwLock<()>,
}

impl FileSource {
    pub const DEFAULT_FILE: &'static str = "kanban.json";

    /// Creates a source reading the fixture at `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        }
    }

    /// Creates a source for the default fixture file inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(Self::DEFAULT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the demo fixture if no file exists yet
    pub async fn initialize(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }

        let _guard = self.lock.write().await;
        if !self.path.exists() {
            self.save(&Fixture::demo()).await?;
        }
        Ok(())
    }

    pub async fn is_initialized(&self) -> bool {
        self.path.exists()
    }

    async fn load(&self) -> Result<Fixture> {
        let _guard = self.lock.read().await;
        self.read_file().await
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_file(&self) -> Result<Fixture> {
        if !self.path.exists() {
            return Err(KanbanError::StorageError(format!(
                "fixture file not found: {}",
                self.path.display()
            )));
        }

        let contents = fs::read_to_string(&self.path).await?;
        let fixture: Fixture = serde_json::from_str(&contents)?;
        Ok(fixture)
    }

    /// Writes the fixture to a sibling temp file and renames it into place
    async fn save(&self, fixture: &Fixture) -> Result<()> {
        let json = serde_json::to_string_pretty(fixture)?;
        let temp = self.temp_path();
        fs::write(&temp, json).await?;
        fs::rename(&temp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn get_position(&self, position_id: &str) -> Result<Position> {
        debug!(position_id, path = %self.path.display(), "fetching position");
        self.load().await?.position(position_id)
    }

    async fn get_interview_flow(&self, position_id: &str) -> Result<InterviewFlow> {
        debug!(position_id, "fetching interview flow");
        Ok(self.load().await?.interview_flow())
    }

    async fn get_candidates_by_position(&self, position_id: &str) -> Result<Vec<Candidate>> {
        debug!(position_id, "fetching candidates");
        Ok(self.load().await?.candidates_for(position_id))
    }

    async fn update_candidate_status(
        &self,
        candidate_id: &CandidateId,
        new_status: &StageId,
    ) -> Result<()> {
        debug!(%candidate_id, %new_status, "updating candidate status");

        let _guard = self.lock.write().await;
        let mut fixture = self.read_file().await?;
        fixture.update_candidate_status(candidate_id, new_status)?;
        self.save(&fixture).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_initialization_writes_demo_fixture() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::in_dir(temp_dir.path());

        assert!(!source.is_initialized().await);
        source.initialize().await.unwrap();
        assert!(source.is_initialized().await);

        let position = source.get_position("2").await.unwrap();
        assert_eq!(position.title, "Junior Android Engineer");
    }

    #[tokio::test]
    async fn test_initialize_keeps_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::in_dir(temp_dir.path());
        source.initialize().await.unwrap();
        source
            .update_candidate_status(&"3".into(), &"offer".into())
            .await
            .unwrap();

        source.initialize().await.unwrap();

        let candidates = source.get_candidates_by_position("2").await.unwrap();
        assert_eq!(candidates[0].status.as_str(), "offer");
    }

    #[tokio::test]
    async fn test_creates_missing_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::new(temp_dir.path().join("data").join("board.json"));

        source.initialize().await.unwrap();
        assert!(source.path().exists());
    }

    #[tokio::test]
    async fn test_update_persists_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::in_dir(temp_dir.path());
        source.initialize().await.unwrap();

        source
            .update_candidate_status(&"1".into(), &"technical".into())
            .await
            .unwrap();

        let reopened = FileSource::in_dir(temp_dir.path());
        let candidates = reopened.get_candidates_by_position("1").await.unwrap();
        let john = candidates.iter().find(|c| c.id.as_str() == "1").unwrap();
        assert_eq!(john.status.as_str(), "technical");
        assert_eq!(john.current_interview_step, "Entrevista Técnica");
    }

    #[tokio::test]
    async fn test_missing_file_is_a_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::in_dir(temp_dir.path());

        let result = source.get_interview_flow("1").await;
        assert!(matches!(result, Err(KanbanError::StorageError(_))));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::in_dir(temp_dir.path());
        tokio::fs::write(source.path(), "{ not json").await.unwrap();

        let result = source.get_candidates_by_position("1").await;
        assert!(matches!(result, Err(KanbanError::SerializationError(_))));
    }

    #[tokio::test]
    async fn test_update_unknown_candidate_leaves_file_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::in_dir(temp_dir.path());
        source.initialize().await.unwrap();
        let before = tokio::fs::read_to_string(source.path()).await.unwrap();

        let result = source
            .update_candidate_status(&"404".into(), &"hr".into())
            .await;

        assert!(matches!(result, Err(KanbanError::CandidateNotFound(_))));
        let after = tokio::fs::read_to_string(source.path()).await.unwrap();
        assert_eq!(before, after);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reads_never_see_a_partial_write() {
        let temp_dir = TempDir::new().unwrap();
        let source = Arc::new(FileSource::in_dir(temp_dir.path()));
        source.initialize().await.unwrap();

        let writer = {
            let source = Arc::clone(&source);
            tokio::spawn(async move {
                for i in 0..50 {
                    let status = if i % 2 == 0 { "hr" } else { "new" };
                    source
                        .update_candidate_status(&"1".into(), &status.into())
                        .await
                        .unwrap();
                }
            })
        };

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let source = Arc::clone(&source);
                tokio::spawn(async move {
                    for _ in 0..50 {
                        let candidates = source.get_candidates_by_position("1").await.unwrap();
                        assert_eq!(candidates.len(), 2);
                    }
                })
            })
            .collect();

        writer.await.unwrap();
        for reader in readers {
            reader.await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = FileSource::in_dir(temp_dir.path());
        source.initialize().await.unwrap();
        source
            .update_candidate_status(&"2".into(), &"hr".into())
            .await
            .unwrap();

        assert!(!source.temp_path().exists());
        assert_eq!(
            source.temp_path().file_name().unwrap().to_str().unwrap(),
            "kanban.json.tmp"
        );
    }
}
