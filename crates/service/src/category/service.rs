use std::sync::Arc;
use tracing::{info, instrument};

use models::category::{self, CategoryInput};

use crate::category::repository::CategoryRepository;
use crate::errors::ServiceError;

/// Application service for categories; delegation only.
#[derive(Clone)]
pub struct CategoryService {
    repo: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn CategoryRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        self.repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<category::Model, ServiceError> {
        self.repo.get_by_id(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "category_created");
        Ok(created)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn update(
        &self,
        id: i32,
        input: CategoryInput,
    ) -> Result<category::Model, ServiceError> {
        let updated = self.repo.update(id, input).await?;
        info!(id, "category_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "category_deleted");
        Ok(())
    }
}
