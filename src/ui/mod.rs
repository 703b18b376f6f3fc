//! UI模块 - 界面组件

pub mod app;
pub mod dialogs;
pub mod records_page;
pub mod sidebar;
pub mod styles;
