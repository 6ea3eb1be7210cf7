// ==========================================
// 供应商批量导入工具 - 核心库
// ==========================================
// 依据: Vend API 0.x - POST /api/supplier
// 技术栈: Rust + reqwest + csv
// 系统定位: 支持工具 (CSV 批量创建供应商)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 记录与结果类型
pub mod domain;

// 加载层 - CSV 读取与校验
pub mod loader;

// 提交层 - 请求体构造与派发
pub mod submitter;

// 结果层 - 批次结果落盘
pub mod report;

// 配置层 - 运行参数
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    ContactRecord, DispatchOutcome, SubmissionEntry, SubmissionReport, SubmissionSummary,
    SupplierRecord,
};

// 加载层
pub use loader::{CsvSupplierLoader, LoadError, LoadResult, SupplierLoader};

// 提交层
pub use submitter::{
    HttpSupplierEndpoint, SupplierEndpoint, SupplierPayload, SupplierSubmitter,
    SupplierSubmitterImpl, TransportError,
};

// 结果层
pub use report::{JsonlOutcomeSink, OutcomeSink};

// 配置
pub use config::{ConfigError, RunOptions};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "供应商批量导入工具";

// ==========================================
// 预编译检查
// ==========================================
