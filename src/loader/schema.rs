// ==========================================
// 供应商批量导入工具 - CSV 列映射表
// ==========================================
// 依据: 供应商 CSV 模板（25 列，定序）
// 职责: 列名 → 字段赋值的单一事实来源
// ==========================================
// 红线: 表头校验与行映射都只依据本表,列序变更只改这里
// ==========================================

use crate::domain::SupplierRecord;

// ==========================================
// ColumnSpec - 单列规格
// ==========================================
// 用途: 声明式 (列名, 赋值函数) 对,消除隐式下标约定
pub struct ColumnSpec {
    pub name: &'static str,                    // 规范列名
    pub assign: fn(&mut SupplierRecord, String), // 将该列的值写入记录
}

// 规范列表（定序,与 CSV 模板一一对应）
pub const SUPPLIER_COLUMNS: &[ColumnSpec] = &[
    ColumnSpec { name: "name", assign: |r, v| r.name = v },
    ColumnSpec { name: "description", assign: |r, v| r.description = v },
    ColumnSpec { name: "first_name", assign: |r, v| r.contact.first_name = v },
    ColumnSpec { name: "last_name", assign: |r, v| r.contact.last_name = v },
    ColumnSpec { name: "company_name", assign: |r, v| r.contact.company_name = v },
    ColumnSpec { name: "phone", assign: |r, v| r.contact.phone = v },
    ColumnSpec { name: "mobile", assign: |r, v| r.contact.mobile = v },
    ColumnSpec { name: "fax", assign: |r, v| r.contact.fax = v },
    ColumnSpec { name: "email", assign: |r, v| r.contact.email = v },
    ColumnSpec { name: "twitter", assign: |r, v| r.contact.twitter = v },
    ColumnSpec { name: "website", assign: |r, v| r.contact.website = v },
    ColumnSpec { name: "physical_address1", assign: |r, v| r.contact.physical_address1 = v },
    ColumnSpec { name: "physical_address2", assign: |r, v| r.contact.physical_address2 = v },
    ColumnSpec { name: "physical_suburb", assign: |r, v| r.contact.physical_suburb = v },
    ColumnSpec { name: "physical_city", assign: |r, v| r.contact.physical_city = v },
    ColumnSpec { name: "physical_postcode", assign: |r, v| r.contact.physical_postcode = v },
    ColumnSpec { name: "physical_state", assign: |r, v| r.contact.physical_state = v },
    ColumnSpec { name: "physical_country_id", assign: |r, v| r.contact.physical_country_id = v },
    ColumnSpec { name: "postal_address1", assign: |r, v| r.contact.postal_address1 = v },
    ColumnSpec { name: "postal_address2", assign: |r, v| r.contact.postal_address2 = v },
    ColumnSpec { name: "postal_suburb", assign: |r, v| r.contact.postal_suburb = v },
    ColumnSpec { name: "postal_city", assign: |r, v| r.contact.postal_city = v },
    ColumnSpec { name: "postal_postcode", assign: |r, v| r.contact.postal_postcode = v },
    ColumnSpec { name: "postal_state", assign: |r, v| r.contact.postal_state = v },
    ColumnSpec { name: "postal_country_id", assign: |r, v| r.contact.postal_country_id = v },
];

/// 规范列数
pub const COLUMN_COUNT: usize = SUPPLIER_COLUMNS.len();

/// 规范表头（按列序）
pub fn canonical_header() -> Vec<&'static str> {
    SUPPLIER_COLUMNS.iter().map(|c| c.name).collect()
}

/// 按列序将一行字段写入供应商记录
///
/// # 参数
/// - fields: 行字段迭代器（调用方已保证个数等于 COLUMN_COUNT）
/// - row_number: 数据行号（表头后第 1 行为 1）
///
/// # 说明
/// - 字段值原样写入,不做 TRIM 或任何内容校验
pub fn map_row<'a, I>(fields: I, row_number: usize) -> SupplierRecord
where
    I: Iterator<Item = &'a str>,
{
    let mut record = SupplierRecord {
        row_number,
        ..SupplierRecord::default()
    };
    for (spec, value) in SUPPLIER_COLUMNS.iter().zip(fields) {
        (spec.assign)(&mut record, value.to_string());
    }
    record
}
