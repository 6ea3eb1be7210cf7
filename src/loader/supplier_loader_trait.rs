// ==========================================
// 供应商批量导入工具 - 加载 Trait
// ==========================================
// 职责: 定义供应商文件加载接口（不包含实现）
// ==========================================

use crate::domain::SupplierRecord;
use crate::loader::error::LoadResult;
use std::path::Path;

// ==========================================
// SupplierLoader Trait
// ==========================================
// 用途: 供应商文件加载主接口
// 实现者: CsvSupplierLoader
pub trait SupplierLoader: Send + Sync {
    /// 加载供应商文件为定序记录列表
    ///
    /// # 参数
    /// - file_path: 供应商文件路径
    ///
    /// # 返回
    /// - Ok(Vec<SupplierRecord>): 按文件行序排列的记录（提交顺序以此为准）
    /// - Err(LoadError): 文件缺失、表头不匹配、行宽不符等致命错误
    fn load(&self, file_path: &Path) -> LoadResult<Vec<SupplierRecord>>;
}
