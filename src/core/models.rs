//! 核心数据模型定义
//!
//! 包含分页信封、API响应包装、报关单与税费单记录，以及应用配置。

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// 分页数据
///
/// 不变量：`pages = ceil(total / page_size)`，`items.len() <= page_size`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationData<T> {
    /// 当前页的记录
    pub items: Vec<T>,
    /// 记录总数
    pub total: u32,
    /// 当前页码（从1开始）
    pub page: u32,
    /// 每页条数
    pub page_size: u32,
    /// 总页数
    pub pages: u32,
}

impl<T> PaginationData<T> {
    /// 构造分页数据，总页数由 `total` 与 `page_size` 推导
    pub fn new(items: Vec<T>, total: u32, page: u32, page_size: u32) -> Self {
        Self {
            items,
            total,
            page,
            page_size,
            pages: crate::core::pagination::page_count(total, page_size),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 后端统一响应包装
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 业务状态码，200 表示成功
    pub code: i32,
    /// 状态描述
    pub message: String,
    /// 负载
    pub data: T,
    /// 服务端时间戳（ISO 8601，可不带时区）
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// 解析时间戳：带偏移量按 RFC 3339 解析，不带偏移量的视为 UTC
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(ts.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|e| serde::de::Error::custom(format!("无效的时间戳 {raw:?}: {e}")))
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == 200
    }
}

/// 记录种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Declaration,
    Tax,
}

/// 可分页拉取的业务记录
///
/// 每种记录声明自己的接口路径、模拟数据与模拟延迟。
pub trait Record: Clone + Send + Sync + DeserializeOwned + 'static {
    /// 记录种类
    const KIND: RecordKind;
    /// REST 接口路径（`/sw/api/v1/` 之后的部分）
    const ENDPOINT: &'static str;
    /// 模拟网络延迟
    const MOCK_DELAY: Duration;
    /// 模拟数据声明的记录总数
    const MOCK_TOTAL: u32;

    /// 模拟数据源
    fn mock_records() -> Vec<Self>;
}

/// 报关单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomsDeclaration {
    /// 统一编号
    pub cus_ciq_no: String,
    /// 报关单号
    pub entry_id: String,
    /// 海关状态
    pub cus_dec_status_name: String,
    /// 申报单位
    pub agent_name: String,
    /// 境内收发货人
    pub owner_name: String,
    /// 进出口日期
    #[serde(rename = "iEDate")]
    pub ie_date: String,
    /// 申报日期
    pub d_date: String,
}

impl Record for CustomsDeclaration {
    const KIND: RecordKind = RecordKind::Declaration;
    const ENDPOINT: &'static str = "declarations";
    const MOCK_DELAY: Duration = Duration::from_millis(1000);
    const MOCK_TOTAL: u32 = 25;

    fn mock_records() -> Vec<Self> {
        crate::core::mock_data::mock_declarations()
    }
}

/// 海关税费单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomsTax {
    /// 税单序号
    pub tax_head_seq_no: String,
    /// 单一窗口税费单ID
    pub sw_tax_id: String,
    /// 报关单号
    pub entry_id: String,
    /// 税票号
    pub taxvou_no: String,
    /// 应缴金额
    pub tra_amt: f64,
    /// 支付状态
    pub trans_status_name: String,
    /// 缴款期限
    pub limit_date_str: String,
}

impl CustomsTax {
    /// 金额显示：保留两位小数
    pub fn amount_display(&self) -> String {
        format!("¥{:.2}", self.tra_amt)
    }
}

impl Record for CustomsTax {
    const KIND: RecordKind = RecordKind::Tax;
    const ENDPOINT: &'static str = "customs-tax";
    const MOCK_DELAY: Duration = Duration::from_millis(800);
    const MOCK_TOTAL: u32 = 30;

    fn mock_records() -> Vec<Self> {
        crate::core::mock_data::mock_customs_taxes()
    }
}

/// 数据源类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceKind {
    /// 内存模拟数据
    #[default]
    Mock,
    /// 后端 REST 接口
    Http,
}

/// 模拟数据的总数来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TotalMode {
    /// 使用记录类型声明的固定总数（与模拟数组长度不一致）
    #[default]
    Configured,
    /// 使用模拟数组的实际长度
    Derived,
}

/// 模拟数据源配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MockConfig {
    /// 总数来源
    pub total_mode: TotalMode,
    /// 覆盖默认模拟延迟（毫秒）
    pub delay_ms_override: Option<u64>,
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 每页条数
    pub page_size: u32,
    /// 启动时打开的页面ID
    pub start_page: String,
    /// 数据源
    pub data_source: DataSourceKind,
    /// 后端地址
    pub api_base_url: String,
    /// 请求超时（秒）
    pub request_timeout_secs: u64,
    /// 模拟数据配置
    pub mock: MockConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            start_page: "declarations".to_string(),
            data_source: DataSourceKind::Mock,
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout_secs: 10,
            mock: MockConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_wire_names() {
        let json = r#"{
            "cusCiqNo": "223320240000012345",
            "entryId": "123456789012345678",
            "cusDecStatusName": "已放行",
            "agentName": "上海东方报关有限公司",
            "ownerName": "XX国际贸易有限公司",
            "iEDate": "2024-05-20",
            "dDate": "2024-05-21"
        }"#;

        let dec: CustomsDeclaration = serde_json::from_str(json).unwrap();
        assert_eq!(dec.ie_date, "2024-05-20");
        assert_eq!(dec.d_date, "2024-05-21");
        assert_eq!(dec.cus_ciq_no, "223320240000012345");
    }

    #[test]
    fn test_paginated_api_response_decodes() {
        let json = r#"{
            "code": 200,
            "message": "Success",
            "data": {
                "items": [{
                    "taxHeadSeqNo": "SEQ1", "swTaxId": "SW1", "entryId": "E1",
                    "taxvouNo": "V1", "traAmt": 12.5, "transStatusName": "已支付",
                    "limitDateStr": "2024-06-15"
                }],
                "total": 30, "page": 2, "page_size": 5, "pages": 6
            },
            "timestamp": "2024-06-01T08:00:00Z"
        }"#;

        let resp: ApiResponse<PaginationData<CustomsTax>> = serde_json::from_str(json).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.data.page, 2);
        assert_eq!(resp.data.items[0].amount_display(), "¥12.50");
    }

    #[test]
    fn test_timestamp_without_offset_is_utc() {
        let json = r#"{
            "code": 200,
            "message": "Success",
            "data": { "items": [], "total": 0, "page": 1, "page_size": 5, "pages": 0 },
            "timestamp": "2024-06-01T08:00:00.123456"
        }"#;

        let resp: ApiResponse<PaginationData<CustomsTax>> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.timestamp.to_rfc3339(), "2024-06-01T08:00:00.123456+00:00");
    }

    #[test]
    fn test_timestamp_with_offset_converts_to_utc() {
        let json = r#"{"code": 200, "message": "ok", "data": 1, "timestamp": "2024-06-01T16:00:00+08:00"}"#;
        let resp: ApiResponse<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.timestamp.to_rfc3339(), "2024-06-01T08:00:00+00:00");
    }

    #[test]
    fn test_malformed_timestamp_is_rejected() {
        let json = r#"{"code": 200, "message": "ok", "data": 1, "timestamp": "yesterday"}"#;
        assert!(serde_json::from_str::<ApiResponse<u8>>(json).is_err());
    }

    #[test]
    fn test_amount_display_rounds_to_cents() {
        let mut tax = CustomsTax::mock_records().remove(0);
        tax.tra_amt = 32400.75;
        assert_eq!(tax.amount_display(), "¥32400.75");
        tax.tra_amt = 8750.0;
        assert_eq!(tax.amount_display(), "¥8750.00");
    }

    #[test]
    fn test_pagination_data_derives_pages() {
        let data: PaginationData<u8> = PaginationData::new(vec![1, 2], 25, 1, 5);
        assert_eq!(data.pages, 5);
        let data: PaginationData<u8> = PaginationData::new(vec![], 26, 6, 5);
        assert_eq!(data.pages, 6);
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: AppConfig = serde_json::from_str(r#"{"data_source": "http"}"#).unwrap();
        assert_eq!(config.data_source, DataSourceKind::Http);
        assert_eq!(config.page_size, 5);
        assert_eq!(config.mock.total_mode, TotalMode::Configured);
    }
}
