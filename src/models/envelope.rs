//! 后端响应外壳
//!
//! 单条数据为 `{ "data": T }`，分页列表额外带 `pagination`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub total: u64,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default, alias = "totalPages")]
    pub pages: u32,
    #[serde(default)]
    pub limit: u32,
}

fn first_page() -> u32 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            pages: 0,
            limit: 0,
        }
    }
}

/// 一页数据
#[derive(Debug, Clone, Deserialize)]
pub struct Paged<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Pagination,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            pagination: Pagination::default(),
        }
    }
}

/// 错误响应体
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default, alias = "error")]
    pub message: Option<String>,
}
