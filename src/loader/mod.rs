// ==========================================
// 供应商批量导入工具 - 加载层
// ==========================================
// 依据: 供应商 CSV 模板（25 列，定序）
// ==========================================
// 职责: 读取 CSV 文件,校验表头与行宽,产出定序的供应商记录
// ==========================================

// 模块声明
pub mod csv_loader;
pub mod error;
pub mod schema;
pub mod supplier_loader_trait;

// 重导出核心类型
pub use csv_loader::CsvSupplierLoader;
pub use error::{LoadError, LoadResult};
pub use schema::{canonical_header, ColumnSpec, COLUMN_COUNT, SUPPLIER_COLUMNS};

// 重导出 Trait 接口
pub use supplier_loader_trait::SupplierLoader;
