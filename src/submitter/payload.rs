// ==========================================
// 供应商批量导入工具 - 请求体构造
// ==========================================
// 依据: Vend API 0.x - POST /api/supplier 资源结构
// 职责: 供应商记录 → 创建接口 JSON 请求体
// 红线: 空串字段整体省略,不得输出 null 或 "";非空字段逐字保留
// ==========================================

use crate::domain::SupplierRecord;
use serde::Serialize;

// ==========================================
// SupplierPayload - 创建供应商请求体
// ==========================================
// contact 子对象始终存在,即使全部字段为空(序列化为 {})
#[derive(Debug, Serialize)]
pub struct SupplierPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub contact: ContactPayload,
}

// ==========================================
// ContactPayload - 联系人子对象
// ==========================================
#[derive(Debug, Serialize)]
pub struct ContactPayload {
    // ===== 身份 =====
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    // ===== 联系渠道 =====
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    // ===== 实际地址 =====
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_country_id: Option<String>,

    // ===== 邮寄地址 =====
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_suburb: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_postcode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_country_id: Option<String>,
}

/// 空串视为未提供
fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl SupplierPayload {
    /// 由导入记录构造请求体,空串字段转为省略
    pub fn from_record(record: &SupplierRecord) -> Self {
        let c = &record.contact;
        SupplierPayload {
            name: non_empty(&record.name),
            description: non_empty(&record.description),
            contact: ContactPayload {
                first_name: non_empty(&c.first_name),
                last_name: non_empty(&c.last_name),
                company_name: non_empty(&c.company_name),
                phone: non_empty(&c.phone),
                mobile: non_empty(&c.mobile),
                fax: non_empty(&c.fax),
                email: non_empty(&c.email),
                twitter: non_empty(&c.twitter),
                website: non_empty(&c.website),
                physical_address1: non_empty(&c.physical_address1),
                physical_address2: non_empty(&c.physical_address2),
                physical_suburb: non_empty(&c.physical_suburb),
                physical_city: non_empty(&c.physical_city),
                physical_postcode: non_empty(&c.physical_postcode),
                physical_state: non_empty(&c.physical_state),
                physical_country_id: non_empty(&c.physical_country_id),
                postal_address1: non_empty(&c.postal_address1),
                postal_address2: non_empty(&c.postal_address2),
                postal_suburb: non_empty(&c.postal_suburb),
                postal_city: non_empty(&c.postal_city),
                postal_postcode: non_empty(&c.postal_postcode),
                postal_state: non_empty(&c.postal_state),
                postal_country_id: non_empty(&c.postal_country_id),
            },
        }
    }

    /// 序列化为带缩进的 JSON 字节
    pub fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(self)
    }
}
