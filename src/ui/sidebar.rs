//! 侧边栏导航

use crate::core::navigation::{NavItem, Page, BOTTOM_ITEMS, TOP_ITEMS};
use crate::ui::styles::Theme;
use eframe::egui::{self, RichText, Ui};

/// 侧边栏
#[derive(Default)]
pub struct Sidebar {
    theme: Theme,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// 渲染侧边栏，返回被点击的页面
    pub fn render(&self, ui: &mut Ui, active: Page) -> Option<Page> {
        let mut clicked = None;

        ui.add_space(8.0);
        ui.label(RichText::new("Crawler Admin").strong().color(self.theme.primary));
        ui.add_space(8.0);

        for item in &TOP_ITEMS {
            if self.render_item(ui, item, active) {
                clicked = Some(item.page);
            }
        }

        // 底部分组贴底显示
        ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
            ui.add_space(8.0);
            for item in BOTTOM_ITEMS.iter().rev() {
                if self.render_item(ui, item, active) {
                    clicked = Some(item.page);
                }
            }
        });

        clicked
    }

    fn render_item(&self, ui: &mut Ui, item: &NavItem, active: Page) -> bool {
        let current = item.page == active;
        let fill = if current {
            self.theme.active_nav_bg
        } else {
            egui::Color32::TRANSPARENT
        };

        egui::Frame::none()
            .fill(fill)
            .rounding(crate::ui::styles::default_rounding())
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.selectable_label(current, format!("{}  {}", item.icon, item.title))
                    .clicked()
            })
            .inner
    }
}
