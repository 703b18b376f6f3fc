//! 主应用程序
//!
//! 持有当前页面，组合侧边栏、顶栏、页面主体与状态栏。

use crate::core::loader::{Notifier, PageLoader};
use crate::core::models::{AppConfig, CustomsDeclaration, CustomsTax};
use crate::core::navigation::{resolve_start_page, Page, PageBody};
use crate::core::source::DataSource;
use crate::ui::records_page::{PageEvent, RecordsPage};
use crate::ui::sidebar::Sidebar;
use eframe::egui::{self, RichText};
use std::sync::Arc;
use tokio::runtime::Handle;

/// 当前挂载的页面主体
enum MountedPage {
    Declarations(RecordsPage<CustomsDeclaration>),
    CustomsTax(RecordsPage<CustomsTax>),
    NotImplemented(Page),
}

/// 主应用程序
pub struct CustomsAdminApp {
    /// 配置
    config: AppConfig,
    /// 数据源
    source: DataSource,
    /// 异步运行时
    runtime: Handle,
    /// 请求完成后触发重绘
    notifier: Notifier,
    /// 当前页面
    active_page: Page,
    /// 当前页面主体
    mounted: MountedPage,
    /// 侧边栏
    sidebar: Sidebar,
    /// 是否显示侧边栏
    show_sidebar: bool,
    /// 搜索关键字
    search: String,
    /// 状态消息
    status_message: String,
}

impl CustomsAdminApp {
    /// 创建新的应用实例
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        source: DataSource,
        runtime: Handle,
    ) -> Self {
        let repaint_ctx = cc.egui_ctx.clone();
        let notifier: Notifier = Arc::new(move || repaint_ctx.request_repaint());
        Self::with_notifier(config, source, runtime, notifier)
    }

    fn with_notifier(config: AppConfig, source: DataSource, runtime: Handle, notifier: Notifier) -> Self {
        let active_page = resolve_start_page(&config.start_page);
        let mut app = Self {
            config,
            source,
            runtime,
            notifier,
            active_page,
            mounted: MountedPage::NotImplemented(active_page),
            sidebar: Sidebar::new(),
            show_sidebar: true,
            search: String::new(),
            status_message: "就绪".to_string(),
        };
        app.mounted = app.mount(active_page);
        app
    }

    /// 为页面创建全新的主体（页码回到第1页）
    fn mount(&self, page: Page) -> MountedPage {
        match page.body() {
            PageBody::Declarations => MountedPage::Declarations(RecordsPage::declarations(self.loader())),
            PageBody::CustomsTax => MountedPage::CustomsTax(RecordsPage::customs_tax(self.loader())),
            PageBody::NotImplemented(page) => MountedPage::NotImplemented(page),
        }
    }

    fn loader<T: crate::core::table::TableRecord>(&self) -> PageLoader<T> {
        PageLoader::new(self.source.clone(), self.runtime.clone(), self.config.page_size)
            .with_notifier(self.notifier.clone())
    }

    /// 切换页面
    pub fn navigate(&mut self, page: Page) {
        if page == self.active_page {
            return;
        }
        tracing::info!("切换页面: {} -> {}", self.active_page.id(), page.id());
        self.active_page = page;
        self.mounted = self.mount(page);
        self.status_message = page.title().to_string();
    }

    pub fn active_page(&self) -> Page {
        self.active_page
    }

    /// 渲染顶栏
    fn render_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("☰").on_hover_text("显示/隐藏侧边栏").clicked() {
                self.show_sidebar = !self.show_sidebar;
            }
            ui.separator();
            ui.label(
                RichText::new(format!("Crawler v{}", env!("CARGO_PKG_VERSION")))
                    .small()
                    .weak(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.search)
                        .hint_text("搜索...")
                        .desired_width(220.0),
                );
                ui.label("🔍");
            });
        });
    }

    /// 渲染页面主体
    fn render_body(&mut self, ui: &mut egui::Ui) {
        let event = match &mut self.mounted {
            MountedPage::Declarations(page) => page.render(ui, &self.search),
            MountedPage::CustomsTax(page) => page.render(ui, &self.search),
            MountedPage::NotImplemented(page) => {
                render_placeholder(ui, *page);
                PageEvent::None
            }
        };

        match event {
            PageEvent::Status(message) => self.status_message = message,
            PageEvent::None => {}
        }
    }
}

/// 未实现页面的占位
fn render_placeholder(ui: &mut egui::Ui, page: Page) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.heading(RichText::new(page.title()).weak());
        ui.add_space(8.0);
        ui.label("该页面暂未实现，请从侧边栏选择页面。");
    });
}

impl eframe::App for CustomsAdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 顶栏
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_header(ui);
            ui.add_space(4.0);
        });

        // 底部状态栏
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(RichText::new(self.active_page.id()).small().weak());
                });
            });
        });

        // 左侧导航
        if self.show_sidebar {
            let mut clicked = None;
            egui::SidePanel::left("sidebar")
                .default_width(200.0)
                .resizable(false)
                .show(ctx, |ui| {
                    clicked = self.sidebar.render(ui, self.active_page);
                });
            if let Some(page) = clicked {
                self.navigate(page);
            }
        }

        // 主内容区域
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_body(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::MockConfig;
    use crate::core::source::MockSource;
    use tokio::runtime::Runtime;

    fn app_with(rt: &Runtime, start_page: &str) -> CustomsAdminApp {
        let config = AppConfig {
            start_page: start_page.to_string(),
            ..AppConfig::default()
        };
        let source = DataSource::Mock(MockSource::new(MockConfig {
            delay_ms_override: Some(3_600_000),
            ..MockConfig::default()
        }));
        CustomsAdminApp::with_notifier(config, source, rt.handle().clone(), Arc::new(|| {}))
    }

    #[test]
    fn test_starts_on_declarations() {
        let rt = Runtime::new().unwrap();
        let app = app_with(&rt, "declarations");
        assert_eq!(app.active_page(), Page::Declarations);
        assert!(matches!(app.mounted, MountedPage::Declarations(_)));
    }

    #[test]
    fn test_dashboard_shows_placeholder() {
        let rt = Runtime::new().unwrap();
        let mut app = app_with(&rt, "declarations");
        app.navigate(Page::from_id("dashboard").unwrap());
        assert!(matches!(app.mounted, MountedPage::NotImplemented(Page::Dashboard)));
    }

    #[test]
    fn test_unknown_start_page_falls_back() {
        let rt = Runtime::new().unwrap();
        let app = app_with(&rt, "reports");
        assert_eq!(app.active_page(), Page::Declarations);
    }

    #[test]
    fn test_switching_back_remounts_on_first_page() {
        let rt = Runtime::new().unwrap();
        let mut app = app_with(&rt, "customs-tax");

        if let MountedPage::CustomsTax(page) = &mut app.mounted {
            page.trigger_action();
            assert!(page.loader().is_loading());
        } else {
            panic!("expected tax page");
        }

        app.navigate(Page::Logs);
        app.navigate(Page::CustomsTax);

        match &app.mounted {
            MountedPage::CustomsTax(page) => {
                assert_eq!(page.loader().page(), 1);
                assert!(!page.loader().is_loading());
            }
            _ => panic!("expected tax page"),
        }
    }

    #[test]
    fn test_navigate_to_same_page_keeps_state() {
        let rt = Runtime::new().unwrap();
        let mut app = app_with(&rt, "customs-tax");
        if let MountedPage::CustomsTax(page) = &mut app.mounted {
            page.trigger_action();
        }
        app.navigate(Page::CustomsTax);
        match &app.mounted {
            MountedPage::CustomsTax(page) => assert!(page.loader().is_loading()),
            _ => panic!("expected tax page"),
        }
    }
}
