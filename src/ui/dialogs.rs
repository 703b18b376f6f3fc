//! 对话框组件

use eframe::egui::{self, RichText};

/// 记录详情对话框
#[derive(Default)]
pub struct DetailDialog {
    /// 是否显示
    pub visible: bool,
    /// 标题
    pub title: String,
    /// 字段列表
    pub fields: Vec<(&'static str, String)>,
}

impl DetailDialog {
    /// 显示对话框
    pub fn show(&mut self, title: &str, fields: Vec<(&'static str, String)>) {
        self.visible = true;
        self.title = title.to_string();
        self.fields = fields;
    }

    /// 关闭并清空内容
    pub fn clear(&mut self) {
        self.visible = false;
        self.title.clear();
        self.fields.clear();
    }

    /// 渲染对话框
    pub fn render(&mut self, ctx: &egui::Context) -> DetailDialogResult {
        let mut result = DetailDialogResult::None;

        if !self.visible {
            return result;
        }

        egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                egui::Grid::new("detail_fields")
                    .num_columns(2)
                    .spacing([24.0, 6.0])
                    .striped(true)
                    .show(ui, |ui| {
                        for (name, value) in &self.fields {
                            ui.label(RichText::new(*name).color(egui::Color32::GRAY));
                            ui.label(RichText::new(value).monospace());
                            ui.end_row();
                        }
                    });

                ui.separator();

                if ui.button("关闭").clicked() {
                    result = DetailDialogResult::Close;
                    self.visible = false;
                }
            });

        result
    }
}

/// 详情对话框结果
#[derive(Debug, PartialEq)]
pub enum DetailDialogResult {
    None,
    Close,
}
