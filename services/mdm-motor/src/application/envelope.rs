//! 列表响应信封
//!
//! `request` 回显生效的分页参数，`response.count` 是本页条数。

use electra_common::OffsetPagination;
use serde::{Deserialize, Serialize};

use crate::domain::entities::Material;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialListEnvelope {
    pub request: RequestEcho,
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestEcho {
    pub limit: usize,
    pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    pub count: usize,
    pub success: bool,
    pub data: Vec<Material>,
}

impl MaterialListEnvelope {
    /// 用已分页的数据组装响应
    pub fn assemble(pagination: OffsetPagination, page: Vec<Material>) -> Self {
        Self {
            request: RequestEcho {
                limit: pagination.limit,
                offset: pagination.offset,
            },
            response: ResponseBody {
                count: page.len(),
                success: true,
                data: page,
            },
        }
    }
}
