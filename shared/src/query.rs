//! Pagination envelope

use serde::{Deserialize, Serialize};

/// One page of a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Records on this page
    pub data: Vec<T>,
    /// Total records matching the query
    pub total: u64,
    /// Current page number (1-based)
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Total page count
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            total.div_ceil(limit as u64) as u32
        } else {
            1
        };

        Self {
            data,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Single-page response for unpaginated results.
    pub fn single(data: Vec<T>) -> Self {
        let total = data.len() as u64;
        Self {
            data,
            total,
            page: 1,
            limit: total as u32,
            total_pages: 1,
        }
    }
}
