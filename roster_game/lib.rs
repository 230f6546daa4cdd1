pub mod models;
pub mod progression;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
