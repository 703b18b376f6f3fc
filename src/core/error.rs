//! 数据拉取错误

use thiserror::Error;

/// 拉取一页数据时可能出现的错误
#[derive(Error, Debug)]
pub enum FetchError {
    /// 页码或每页条数非法
    #[error("无效的分页参数: page={page}, limit={limit}")]
    InvalidRequest { page: u32, limit: u32 },

    /// 网络错误
    #[error("网络错误: {0}")]
    Network(String),

    /// HTTP状态码非成功
    #[error("HTTP {0}")]
    Status(u16),

    /// 响应体解析失败
    #[error("响应解析失败: {0}")]
    Decode(String),

    /// 后端返回业务错误
    #[error("接口错误 {code}: {message}")]
    Api { code: i32, message: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_displayable() {
        let err = FetchError::Api {
            code: 500,
            message: "internal".to_string(),
        };
        assert_eq!(err.to_string(), "接口错误 500: internal");
        assert_eq!(
            FetchError::InvalidRequest { page: 0, limit: 5 }.to_string(),
            "无效的分页参数: page=0, limit=5"
        );
    }
}
