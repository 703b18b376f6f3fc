//! Customs Admin - 报关单与海关税费单管理后台
//!
//! 侧边栏切换页面，列表页面分页拉取记录：
//! - 默认使用内存模拟数据
//! - 可配置为后端 REST 接口

pub mod core;
pub mod ui;
pub mod storage;

use crate::core::source::DataSource;
use crate::storage::config::ConfigManager;
use anyhow::Result;
use eframe::egui::{self, FontData, FontDefinitions, FontFamily};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// 配置中文字体
fn setup_custom_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();

    // 尝试加载系统中文字体
    let font_paths = [
        "C:/Windows/Fonts/msyh.ttc",      // 微软雅黑
        "C:/Windows/Fonts/simhei.ttf",    // 黑体
        "/System/Library/Fonts/PingFang.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    ];

    let mut font_loaded = false;
    for path in &font_paths {
        if let Ok(font_data) = std::fs::read(path) {
            fonts.font_data.insert(
                "chinese_font".to_owned(),
                FontData::from_owned(font_data).into(),
            );

            // 将中文字体设为首选
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "chinese_font".to_owned());

            // 等宽字体保留英文字形，中文字体作为后备
            fonts.families
                .entry(FontFamily::Monospace)
                .or_default()
                .push("chinese_font".to_owned());

            font_loaded = true;
            tracing::info!("已加载中文字体: {}", path);
            break;
        }
    }

    if !font_loaded {
        tracing::warn!("未能加载中文字体，界面可能显示乱码");
    }

    ctx.set_fonts(fonts);
}

fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("启动 Customs Admin v{}", env!("CARGO_PKG_VERSION"));

    let config_path = ConfigManager::default_path();
    let manager = ConfigManager::new(config_path.clone());
    let config = manager.load_or_default();
    if !config_path.exists() {
        // 首次启动写出默认配置，便于手动修改
        if let Err(e) = manager.save(&config) {
            tracing::warn!("写入默认配置失败: {}", e);
        }
    }
    tracing::info!(
        "配置: {}，数据源 {:?}，每页 {} 条",
        config_path.display(),
        config.data_source,
        config.page_size
    );

    let source = DataSource::from_config(&config)?;

    // 请求在后台运行时中执行，界面线程只轮询结果
    let runtime = tokio::runtime::Runtime::new()?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Customs Admin - 报关单管理后台"),
        ..Default::default()
    };

    eframe::run_native(
        "CustomsAdmin",
        options,
        Box::new(move |cc| {
            setup_custom_fonts(&cc.egui_ctx);
            Ok(Box::new(ui::app::CustomsAdminApp::new(cc, config, source, handle)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI启动失败: {}", e))?;

    drop(runtime);
    Ok(())
}
