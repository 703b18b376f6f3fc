//! Core模块 - 包含所有核心业务逻辑

pub mod models;
pub mod error;
pub mod mock_data;
pub mod pagination;
pub mod source;
pub mod loader;
pub mod status;
pub mod navigation;
pub mod table;
