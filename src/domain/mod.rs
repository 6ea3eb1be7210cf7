// ==========================================
// 供应商批量导入工具 - 领域模型层
// ==========================================
// 依据: Vend API 0.x - POST /api/supplier 资源结构
// ==========================================
// 职责: 定义领域实体与结果类型
// 红线: 不含文件解析逻辑,不含网络逻辑
// ==========================================

pub mod supplier;

// 重导出核心类型
pub use supplier::{
    ContactRecord, DispatchOutcome, SubmissionEntry, SubmissionReport, SubmissionSummary,
    SupplierRecord,
};
