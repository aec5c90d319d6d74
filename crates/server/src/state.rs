use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::category::{repository::SeaOrmCategoryRepository, CategoryService};
use service::product::{repository::SeaOrmProductRepository, ProductService};

/// Per-entity services shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub categories: CategoryService,
}

impl AppState {
    pub fn new(products: ProductService, categories: CategoryService) -> Self {
        Self { products, categories }
    }

    /// Wire the SeaORM repositories over one shared pool.
    pub fn from_db(db: DatabaseConnection) -> Self {
        let products = ProductService::new(Arc::new(SeaOrmProductRepository::new(db.clone())));
        let categories = CategoryService::new(Arc::new(SeaOrmCategoryRepository::new(db)));
        Self::new(products, categories)
    }
}
