//! Categories: repository contract, SeaORM implementation and service.

pub mod repository;
pub mod service;

pub use service::CategoryService;
