use roster_types::{Result, player::PlayerOrder};

use crate::params::{Params, invalid_param, parse_param};

/// Sort field and page window for a player listing.
///
/// Sorting is ascending on a single field. Players sharing the same sort key
/// come back in whatever order the store yields them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub order: PlayerOrder,
    /// Zero-based page index.
    pub page_number: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page_number) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// Reads `order`, `pageNumber` and `pageSize` from the request parameters.
///
/// Only an absent `order` falls back to ordering by id; a present but
/// unknown token is rejected.
pub fn build_page_request(params: &Params, default_page_size: u32) -> Result<PageRequest> {
    let order = parse_param::<PlayerOrder>(params, "order")?.unwrap_or_default();

    let page_number = match parse_param::<i32>(params, "pageNumber")? {
        None => 0,
        Some(n) => u32::try_from(n).map_err(|_| invalid_param("pageNumber", &n.to_string()))?,
    };

    let page_size = match parse_param::<i32>(params, "pageSize")? {
        None => default_page_size,
        Some(n) if n >= 1 => n as u32,
        Some(n) => return Err(invalid_param("pageSize", &n.to_string())),
    };

    Ok(PageRequest {
        order,
        page_number,
        page_size,
    })
}
