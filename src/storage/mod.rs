//! 存储模块

pub mod config;
