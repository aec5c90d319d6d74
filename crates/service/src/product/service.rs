use std::sync::Arc;
use tracing::{info, instrument};

use models::product::{self, ProductInput};

use crate::errors::ServiceError;
use crate::product::repository::ProductRepository;

/// Application service for products.
///
/// Delegates to the repository; price or stock rules would live here.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        self.repo.get_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<product::Model, ServiceError> {
        self.repo.get_by_id(id).await
    }

    #[instrument(skip(self, input), fields(name = %input.name, category_id = input.category_id))]
    pub async fn create(&self, input: ProductInput) -> Result<product::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "product_created");
        Ok(created)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn update(
        &self,
        id: i32,
        input: ProductInput,
    ) -> Result<product::Model, ServiceError> {
        let updated = self.repo.update(id, input).await?;
        info!(id, "product_updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(id, "product_deleted");
        Ok(())
    }
}
