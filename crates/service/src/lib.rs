//! Service layer providing CRUD operations over products and categories.
//! - Repositories translate entity operations into single SQL statements.
//! - Services delegate to a repository and are the home for business rules.
//! - Every layer reports failures through [`errors::ServiceError`].

pub mod errors;
pub mod category;
pub mod product;
#[cfg(test)]
pub mod test_support;
