// ==========================================
// 供应商批量导入工具 - CSV 加载器实现
// ==========================================
// 依据: 供应商 CSV 模板（25 列，定序）
// 职责: 打开文件 → 表头校验 → 行宽校验 → 位置映射
// ==========================================

use crate::domain::SupplierRecord;
use crate::loader::error::{LoadError, LoadResult};
use crate::loader::schema;
use crate::loader::supplier_loader_trait::SupplierLoader;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

// ==========================================
// CsvSupplierLoader 实现
// ==========================================
pub struct CsvSupplierLoader;

impl SupplierLoader for CsvSupplierLoader {
    fn load(&self, file_path: &Path) -> LoadResult<Vec<SupplierRecord>> {
        // 检查文件存在
        if !file_path.exists() {
            return Err(LoadError::FileNotFound(file_path.display().to_string()));
        }

        // 打开 CSV 文件
        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 行宽校验由下方显式完成
            .from_reader(file);

        // 表头按位置逐列校验
        let headers = reader.headers()?.clone();
        verify_header(&headers)?;

        // 读取数据行并按列序映射
        let mut records = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let row = result?;
            let row_number = idx + 1;

            // 行宽必须与模板一致,否则按位置取值无定义
            if row.len() < schema::COLUMN_COUNT {
                return Err(LoadError::RowTooShort {
                    row_number,
                    expected: schema::COLUMN_COUNT,
                    got: row.len(),
                });
            }
            if row.len() > schema::COLUMN_COUNT {
                return Err(LoadError::RowTooLong {
                    row_number,
                    expected: schema::COLUMN_COUNT,
                    got: row.len(),
                });
            }

            records.push(schema::map_row(row.iter(), row_number));
        }

        Ok(records)
    }
}

/// 按位置校验表头与规范列表一致
///
/// # 说明
/// - 列名必须逐字相等,不做 TRIM 或大小写归一
/// - 首个不匹配的列即失败,列序号从 1 起
fn verify_header(headers: &csv::StringRecord) -> LoadResult<()> {
    if headers.is_empty() {
        return Err(LoadError::EmptyFile);
    }

    for (idx, spec) in schema::SUPPLIER_COLUMNS.iter().enumerate() {
        let got = headers.get(idx).unwrap_or("");
        if got != spec.name {
            return Err(LoadError::SchemaMismatch {
                column: idx + 1,
                expected: spec.name.to_string(),
                got: got.to_string(),
            });
        }
    }

    // 多出的表头列同样视为模板不符
    if headers.len() > schema::COLUMN_COUNT {
        return Err(LoadError::SchemaMismatch {
            column: schema::COLUMN_COUNT + 1,
            expected: "（无）".to_string(),
            got: headers.get(schema::COLUMN_COUNT).unwrap_or("").to_string(),
        });
    }

    Ok(())
}
