use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use models::category::{self, CategoryInput};

use crate::errors::ServiceError;

const ENTITY: &str = "category";

fn db_err(e: DbErr) -> ServiceError {
    ServiceError::from_db(ENTITY, e)
}

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<category::Model>, ServiceError>;
    async fn get_by_id(&self, id: i32) -> Result<category::Model, ServiceError>;
    async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError>;
    async fn update(&self, id: i32, input: CategoryInput) -> Result<category::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

pub struct SeaOrmCategoryRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for SeaOrmCategoryRepository {
    async fn get_all(&self) -> Result<Vec<category::Model>, ServiceError> {
        category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)
    }

    async fn get_by_id(&self, id: i32) -> Result<category::Model, ServiceError> {
        category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| ServiceError::not_found(ENTITY))
    }

    async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
        input.into_new_active_model().insert(&self.db).await.map_err(db_err)
    }

    async fn update(&self, id: i32, input: CategoryInput) -> Result<category::Model, ServiceError> {
        input.into_active_model_for(id).update(&self.db).await.map_err(db_err)
    }

    /// Fails with `InvalidInput` while products still reference the category.
    async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let res = category::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        if res.rows_affected == 0 {
            return Err(ServiceError::not_found(ENTITY));
        }
        Ok(())
    }
}

#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    #[derive(Default)]
    struct Rows {
        last_id: i32,
        by_id: BTreeMap<i32, category::Model>,
    }

    /// Single-lock in-memory store; ids are never reused.
    #[derive(Default)]
    pub struct InMemoryCategoryRepository {
        rows: Mutex<Rows>,
    }

    impl InMemoryCategoryRepository {
        fn rows(&self) -> MutexGuard<'_, Rows> {
            self.rows.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }

    #[async_trait]
    impl CategoryRepository for InMemoryCategoryRepository {
        async fn get_all(&self) -> Result<Vec<category::Model>, ServiceError> {
            Ok(self.rows().by_id.values().cloned().collect())
        }

        async fn get_by_id(&self, id: i32) -> Result<category::Model, ServiceError> {
            self.rows().by_id.get(&id).cloned().ok_or_else(|| ServiceError::not_found(ENTITY))
        }

        async fn create(&self, input: CategoryInput) -> Result<category::Model, ServiceError> {
            let mut rows = self.rows();
            rows.last_id += 1;
            let model = input.with_id(rows.last_id);
            rows.by_id.insert(model.id, model.clone());
            Ok(model)
        }

        async fn update(
            &self,
            id: i32,
            input: CategoryInput,
        ) -> Result<category::Model, ServiceError> {
            let mut rows = self.rows();
            let slot = rows.by_id.get_mut(&id).ok_or_else(|| ServiceError::not_found(ENTITY))?;
            *slot = input.with_id(id);
            Ok(slot.clone())
        }

        async fn delete(&self, id: i32) -> Result<(), ServiceError> {
            self.rows().by_id.remove(&id).map(|_| ()).ok_or_else(|| ServiceError::not_found(ENTITY))
        }
    }
}
