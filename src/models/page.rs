use crate::errors::{AppError, AppResult};
use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub index: usize,
    pub size: usize,
}

impl Page {
    pub fn new(index: usize, size: usize) -> AppResult<Self> {
        if index == 0 {
            return Err(AppError::InvalidPage(index));
        }
        if size == 0 {
            return Err(AppError::InvalidPageSize(size));
        }
        Ok(Self { index, size })
    }
}
