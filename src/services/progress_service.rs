use std::sync::Arc;
use uuid::Uuid;

use crate::models::{CreateProgressEntryRequest, ProgressEntry};
use crate::repository::ProgressRepository;
use crate::services::ServiceError;

#[derive(Clone)]
pub struct ProgressService {
    progress: Arc<dyn ProgressRepository>,
}

impl ProgressService {
    pub fn new(progress: Arc<dyn ProgressRepository>) -> Self {
        Self { progress }
    }

    pub async fn track(
        &self,
        user_id: Uuid,
        request: CreateProgressEntryRequest,
    ) -> Result<ProgressEntry, ServiceError> {
        let entry = request.validate(user_id)?;
        let entry = self.progress.insert(entry).await?;

        tracing::debug!("Tracked progress entry {} for user {}", entry.id, user_id);
        Ok(entry)
    }

    /// The caller's entries, oldest first
    pub async fn history(&self, user_id: Uuid) -> Result<Vec<ProgressEntry>, ServiceError> {
        Ok(self.progress.list_for_user(user_id).await?)
    }
}
