use dotenvy::dotenv;
use std::env;

pub struct Config {
    /// Page size used when a listing doesn't ask for one.
    pub default_page_size: u32,
    pub server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let default_page_size = match env::var("ROSTER_DEFAULT_PAGE_SIZE") {
            Ok(val) => val.parse::<u32>().unwrap_or(3).max(1),
            Err(_) => 3,
        };

        let server_port = match env::var("ROSTER_SERVER_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        Self {
            default_page_size,
            server_port,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_page_size: 3,
            server_port: 8080,
        }
    }
}
