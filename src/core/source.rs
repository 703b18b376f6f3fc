//! 记录数据源
//!
//! 一页数据的拉取入口，支持两种来源：
//! - 内存模拟数据（带人为延迟）
//! - 后端 REST 接口（`GET /sw/api/v1/{endpoint}?skip=&limit=`）

use crate::core::error::FetchError;
use crate::core::models::{
    ApiResponse, AppConfig, DataSourceKind, MockConfig, PaginationData, Record, TotalMode,
};
use crate::core::pagination::{page_slice, skip_for};
use anyhow::Result;
use std::time::Duration;

/// 数据源
#[derive(Debug, Clone)]
pub enum DataSource {
    Mock(MockSource),
    Http(HttpSource),
}

impl DataSource {
    /// 根据配置创建数据源
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let source = match config.data_source {
            DataSourceKind::Mock => DataSource::Mock(MockSource::new(config.mock.clone())),
            DataSourceKind::Http => DataSource::Http(HttpSource::new(
                &config.api_base_url,
                Duration::from_secs(config.request_timeout_secs),
            )?),
        };
        Ok(source)
    }

    /// 拉取第 `page` 页，每页 `limit` 条
    pub async fn fetch<T: Record>(&self, page: u32, limit: u32) -> Result<PaginationData<T>, FetchError> {
        if page == 0 || limit == 0 {
            return Err(FetchError::InvalidRequest { page, limit });
        }
        match self {
            DataSource::Mock(source) => Ok(source.fetch(page, limit).await),
            DataSource::Http(source) => source.fetch(page, limit).await,
        }
    }
}

/// 内存模拟数据源
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    config: MockConfig,
}

impl MockSource {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// 模拟延迟：配置覆盖优先，否则使用记录类型的默认值
    pub fn delay_for<T: Record>(&self) -> Duration {
        self.config
            .delay_ms_override
            .map(Duration::from_millis)
            .unwrap_or(T::MOCK_DELAY)
    }

    async fn fetch<T: Record>(&self, page: u32, limit: u32) -> PaginationData<T> {
        let delay = self.delay_for::<T>();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.slice(page, limit)
    }

    /// 同步切片，不含延迟
    pub fn slice<T: Record>(&self, page: u32, limit: u32) -> PaginationData<T> {
        let records = T::mock_records();
        let total = match self.config.total_mode {
            TotalMode::Configured => T::MOCK_TOTAL,
            TotalMode::Derived => records.len() as u32,
        };
        let items = page_slice(&records, page, limit).to_vec();
        PaginationData::new(items, total, page, limit)
    }
}

/// 后端 REST 数据源
#[derive(Debug, Clone)]
pub struct HttpSource {
    /// HTTP客户端
    client: reqwest::Client,
    /// 后端地址（不含 `/sw/api/v1`）
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// 使用已构建好的客户端
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 接口完整地址
    pub fn endpoint_url<T: Record>(&self) -> String {
        format!("{}/sw/api/v1/{}", self.base_url, T::ENDPOINT)
    }

    async fn fetch<T: Record>(&self, page: u32, limit: u32) -> Result<PaginationData<T>, FetchError> {
        let url = self.endpoint_url::<T>();
        let skip = skip_for(page, limit);

        let response = self
            .client
            .get(&url)
            .query(&[("skip", skip), ("limit", u64::from(limit))])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.json::<ApiResponse<PaginationData<T>>>().await?;
        if !body.is_success() {
            return Err(FetchError::Api {
                code: body.code,
                message: body.message,
            });
        }

        Ok(body.data)
    }
}
