mod helpers;
mod players;

pub use helpers::error_response;
pub use players::*;
