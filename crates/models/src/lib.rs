//! Entity definitions for the point-of-sale store plus connection helpers.

pub mod db;
pub mod category;
pub mod product;

#[cfg(test)]
mod tests;
