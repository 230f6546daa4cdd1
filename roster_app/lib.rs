pub mod app;
pub mod command_handlers;
pub mod config;
pub mod cqrs;
pub mod paging;
pub mod params;
pub mod queries_handlers;
pub mod repository;
pub mod specification;
pub mod uow;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
