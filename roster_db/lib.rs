pub mod mapping;
pub mod uow;

mod connection;
mod models;
mod repository;

pub use connection::{DbPool, establish_connection_pool, establish_test_connection_pool, run_migrations};
pub use repository::*;
