//! 记录列表页面
//!
//! 报关单与税费单共用的分页列表：
//! - 标题与操作按钮
//! - 加载中 / 加载失败 / 空数据提示
//! - 数据表格与翻页

use crate::core::loader::{LoadState, PageLoader};
use crate::core::models::{CustomsDeclaration, CustomsTax};
use crate::core::status::classify;
use crate::core::table::{filter_rows, CellKind, TableRecord};
use crate::ui::dialogs::{DetailDialog, DetailDialogResult};
use crate::ui::styles::{self, Theme};
use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

/// 标题栏操作按钮的行为
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderAction {
    /// 新建（暂未实现）
    Create,
    /// 重新同步当前页
    Sync,
}

/// 页面文案
pub struct RecordsPageText {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub card_title: &'static str,
    pub empty_message: &'static str,
    pub detail_title: &'static str,
    pub action_label: &'static str,
    pub action: HeaderAction,
}

/// 页面产生的事件
#[derive(Debug, PartialEq)]
pub enum PageEvent {
    None,
    /// 更新状态栏
    Status(String),
}

/// 翻页栏显示的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub pages: u32,
    pub total: u32,
    pub can_prev: bool,
    pub can_next: bool,
}

/// 翻页栏点击
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagerAction {
    None,
    Prev,
    Next,
}

/// 记录列表页面
pub struct RecordsPage<T: TableRecord> {
    text: RecordsPageText,
    loader: PageLoader<T>,
    theme: Theme,
    detail_dialog: DetailDialog,
    /// 同步请求尚未结束
    syncing: bool,
}

impl RecordsPage<CustomsDeclaration> {
    /// 报关单列表
    pub fn declarations(loader: PageLoader<CustomsDeclaration>) -> Self {
        Self::new(
            RecordsPageText {
                heading: "报关单列表",
                subtitle: "查看、搜索和管理所有的海关报关单。",
                card_title: "最近的报关单",
                empty_message: "未找到任何报关单数据。",
                detail_title: "报关单详情",
                action_label: "新建报关单",
                action: HeaderAction::Create,
            },
            loader,
        )
    }
}

impl RecordsPage<CustomsTax> {
    /// 税费单列表
    pub fn customs_tax(loader: PageLoader<CustomsTax>) -> Self {
        Self::new(
            RecordsPageText {
                heading: "海关税费单",
                subtitle: "查看、搜索和管理所有的海关税费单。",
                card_title: "最近的税费单",
                empty_message: "未找到任何税费单数据。",
                detail_title: "税费单详情",
                action_label: "同步税费单",
                action: HeaderAction::Sync,
            },
            loader,
        )
    }
}

impl<T: TableRecord> RecordsPage<T> {
    pub fn new(text: RecordsPageText, loader: PageLoader<T>) -> Self {
        Self {
            text,
            loader,
            theme: Theme::default(),
            detail_dialog: DetailDialog::default(),
            syncing: false,
        }
    }

    pub fn loader(&self) -> &PageLoader<T> {
        &self.loader
    }

    /// 标题栏按钮
    pub fn trigger_action(&mut self) -> PageEvent {
        match self.text.action {
            HeaderAction::Create => {
                PageEvent::Status(format!("{}功能暂未实现", self.text.action_label))
            }
            HeaderAction::Sync => {
                self.loader.reload();
                self.syncing = true;
                PageEvent::Status(format!("正在{}...", self.text.action_label))
            }
        }
    }

    /// 取回请求结果；同步结束时报告结果
    pub fn poll(&mut self) -> PageEvent {
        self.loader.poll();

        if !self.syncing || self.loader.is_loading() {
            return PageEvent::None;
        }
        self.syncing = false;
        match self.loader.error() {
            Some(reason) => PageEvent::Status(format!("{}失败: {}", self.text.action_label, reason)),
            None => PageEvent::Status(format!("{}完成", self.text.action_label)),
        }
    }

    /// 当前页的翻页栏，未加载成功时为 `None`
    pub fn pager(&self) -> Option<Pager> {
        self.loader.data().map(|data| Pager {
            page: data.page,
            pages: data.pages,
            total: data.total,
            can_prev: self.loader.can_prev(),
            can_next: self.loader.can_next(),
        })
    }

    /// 渲染页面，`search` 过滤当前页的行
    pub fn render(&mut self, ui: &mut Ui, search: &str) -> PageEvent {
        self.loader.ensure_loaded();
        let mut event = self.poll();

        // 标题栏
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading(RichText::new(self.text.heading).strong());
                ui.label(RichText::new(self.text.subtitle).small().weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(self.text.action_label).clicked() {
                    event = self.trigger_action();
                }
            });
        });

        ui.add_space(12.0);

        let pager = self.pager();
        let mut pager_action = PagerAction::None;
        let mut detail = None;

        egui::Frame::group(ui.style())
            .stroke(styles::panel_stroke())
            .rounding(styles::default_rounding())
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(RichText::new(self.text.card_title).strong());
                ui.separator();

                match self.loader.state() {
                    LoadState::Idle | LoadState::Loading => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(24.0);
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(RichText::new("数据加载中...").weak());
                            });
                            ui.add_space(24.0);
                        });
                    }
                    LoadState::Failure(reason) => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(24.0);
                            ui.label(
                                RichText::new(format!("⚠ 加载失败: {}", reason))
                                    .color(self.theme.error),
                            );
                            ui.add_space(24.0);
                        });
                    }
                    LoadState::Success(data) if data.is_empty() => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(24.0);
                            ui.label(RichText::new(self.text.empty_message).italics().weak());
                            ui.add_space(24.0);
                        });
                        if let Some(pager) = &pager {
                            ui.separator();
                            pager_action = render_pager(ui, pager);
                        }
                    }
                    LoadState::Success(data) => {
                        let rows = filter_rows(&data.items, search);
                        if rows.is_empty() {
                            ui.label(
                                RichText::new(format!("当前页没有匹配 \"{}\" 的记录", search.trim()))
                                    .italics()
                                    .weak(),
                            );
                        } else if let Some(index) = render_table(ui, &self.theme, &rows) {
                            detail = Some(rows[index].detail_fields());
                        }

                        if let Some(pager) = &pager {
                            ui.separator();
                            pager_action = render_pager(ui, pager);
                        }
                    }
                }
            });

        match pager_action {
            PagerAction::Prev => {
                self.loader.prev_page();
            }
            PagerAction::Next => {
                self.loader.next_page();
            }
            PagerAction::None => {}
        }
        if let Some(fields) = detail {
            self.detail_dialog.show(self.text.detail_title, fields);
        }

        let ctx = ui.ctx().clone();
        if self.detail_dialog.render(&ctx) == DetailDialogResult::Close {
            self.detail_dialog.clear();
        }

        event
    }
}

/// 绘制翻页栏
fn render_pager(ui: &mut Ui, pager: &Pager) -> PagerAction {
    let mut action = PagerAction::None;
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!(
                "第 {} / {} 页 (共 {} 条)",
                pager.page, pager.pages, pager.total
            ))
            .weak(),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(pager.can_next, egui::Button::new("下一页"))
                .clicked()
            {
                action = PagerAction::Next;
            }
            if ui
                .add_enabled(pager.can_prev, egui::Button::new("上一页"))
                .clicked()
            {
                action = PagerAction::Prev;
            }
        });
    });
    action
}

/// 绘制数据表格，返回点击了“详情”的行号
fn render_table<T: TableRecord>(ui: &mut Ui, theme: &Theme, rows: &[&T]) -> Option<usize> {
    let mut clicked = None;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for _ in T::COLUMNS {
        table = table.column(TableColumn::auto().at_least(80.0));
    }
    table = table.column(TableColumn::remainder().at_least(60.0));

    table
        .header(24.0, |mut header| {
            for column in T::COLUMNS {
                header.col(|ui| {
                    ui.strong(column.title);
                });
            }
            header.col(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.strong("操作");
                });
            });
        })
        .body(|mut body| {
            for (index, record) in rows.iter().enumerate() {
                let cells = record.cells();
                body.row(28.0, |mut row| {
                    for (column, cell) in T::COLUMNS.iter().zip(&cells) {
                        row.col(|ui| match column.kind {
                            CellKind::Mono => {
                                ui.label(RichText::new(cell).monospace().small());
                            }
                            CellKind::Small => {
                                ui.label(RichText::new(cell).small());
                            }
                            CellKind::Text => {
                                ui.label(cell);
                            }
                            CellKind::Badge => {
                                let category = classify(T::KIND, record.status_label());
                                styles::badge(ui, theme, cell, category);
                            }
                        });
                    }
                    row.col(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("详情").clicked() {
                                clicked = Some(index);
                            }
                        });
                    });
                });
            }
        });

    clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{MockConfig, TotalMode};
    use crate::core::source::{DataSource, MockSource};
    use std::time::{Duration, Instant};
    use tokio::runtime::Runtime;

    fn stalled<T: TableRecord>(rt: &Runtime) -> PageLoader<T> {
        let source = DataSource::Mock(MockSource::new(MockConfig {
            total_mode: TotalMode::Configured,
            delay_ms_override: Some(3_600_000),
        }));
        PageLoader::new(source, rt.handle().clone(), 5)
    }

    fn instant<T: TableRecord>(rt: &Runtime) -> PageLoader<T> {
        let source = DataSource::Mock(MockSource::new(MockConfig {
            total_mode: TotalMode::Configured,
            delay_ms_override: Some(0),
        }));
        PageLoader::new(source, rt.handle().clone(), 5)
    }

    /// 轮询页面直到产生事件或加载结束
    fn poll_until_settled<T: TableRecord>(page: &mut RecordsPage<T>) -> PageEvent {
        let deadline = Instant::now() + Duration::from_secs(5);
        loop {
            let event = page.poll();
            if event != PageEvent::None || !page.loader().is_loading() {
                return event;
            }
            assert!(Instant::now() < deadline, "page did not settle");
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_create_action_is_not_implemented() {
        let rt = Runtime::new().unwrap();
        let mut page = RecordsPage::declarations(stalled(&rt));
        assert_eq!(
            page.trigger_action(),
            PageEvent::Status("新建报关单功能暂未实现".to_string())
        );
        assert!(!page.loader().is_loading());
    }

    #[test]
    fn test_sync_action_reloads() {
        let rt = Runtime::new().unwrap();
        let mut page = RecordsPage::customs_tax(stalled(&rt));
        let event = page.trigger_action();
        assert_eq!(event, PageEvent::Status("正在同步税费单...".to_string()));
        assert!(page.loader().is_loading());
        assert_eq!(page.loader().page(), 1);
    }

    #[test]
    fn test_first_render_starts_loading() {
        let rt = Runtime::new().unwrap();
        let mut page = RecordsPage::declarations(stalled(&rt));
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                page.render(ui, "");
            });
        });
        assert!(page.loader().is_loading());
    }

    #[test]
    fn test_sync_reports_completion() {
        let rt = Runtime::new().unwrap();
        let mut page = RecordsPage::customs_tax(instant(&rt));

        assert_eq!(page.trigger_action(), PageEvent::Status("正在同步税费单...".to_string()));
        assert_eq!(
            poll_until_settled(&mut page),
            PageEvent::Status("同步税费单完成".to_string())
        );
        // 只报告一次
        assert_eq!(page.poll(), PageEvent::None);
    }

    #[test]
    fn test_plain_load_reports_nothing() {
        let rt = Runtime::new().unwrap();
        let mut page = RecordsPage::customs_tax(instant(&rt));
        page.loader.ensure_loaded();
        assert_eq!(poll_until_settled(&mut page), PageEvent::None);
        assert!(page.loader().data().is_some());
    }

    #[test]
    fn test_empty_page_keeps_pager() {
        let rt = Runtime::new().unwrap();
        let mut page = RecordsPage::declarations(instant(&rt));
        assert_eq!(page.pager(), None);

        // 固定总数25，模拟数据只有5条：第5页为空
        page.loader.load(5);
        poll_until_settled(&mut page);
        assert!(page.loader().data().unwrap().is_empty());

        let pager = page.pager().unwrap();
        assert_eq!(pager.page, 5);
        assert_eq!(pager.pages, 5);
        assert!(pager.can_prev);
        assert!(!pager.can_next);
    }
}
