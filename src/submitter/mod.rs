// ==========================================
// 供应商批量导入工具 - 提交层
// ==========================================
// 依据: Vend API 0.x - POST /api/supplier
// ==========================================
// 职责: 构造请求体,逐行派发到创建接口,归类并汇总结果
// ==========================================

// 模块声明
pub mod endpoint;
pub mod error;
pub mod payload;
pub mod supplier_submitter_impl;
pub mod supplier_submitter_trait;

// 重导出核心类型
pub use endpoint::{HttpSupplierEndpoint, USER_AGENT};
pub use error::{TransportError, TransportResult};
pub use payload::{ContactPayload, SupplierPayload};
pub use supplier_submitter_impl::SupplierSubmitterImpl;

// 重导出 Trait 接口
pub use supplier_submitter_trait::{EndpointResponse, SupplierEndpoint, SupplierSubmitter};
