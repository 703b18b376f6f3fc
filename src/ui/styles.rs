//! 样式定义

use crate::core::status::StatusCategory;
use eframe::egui::{self, Color32, Rounding, Stroke};

/// 颜色主题
pub struct Theme {
    pub primary: Color32,
    pub secondary: Color32,
    pub success: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub info: Color32,
    pub active_nav_bg: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color32::from_rgb(66, 133, 244),      // 蓝色
            secondary: Color32::from_rgb(156, 156, 156),   // 灰色
            success: Color32::from_rgb(52, 168, 83),       // 绿色
            warning: Color32::from_rgb(251, 188, 4),       // 黄色
            error: Color32::from_rgb(234, 67, 53),         // 红色
            info: Color32::from_rgb(26, 115, 232),         // 深蓝
            active_nav_bg: Color32::from_rgba_unmultiplied(66, 133, 244, 30),
        }
    }
}

impl Theme {
    /// 徽章的背景色与文字色
    pub fn badge_colors(&self, category: StatusCategory) -> (Color32, Color32) {
        let fg = match category {
            StatusCategory::Success => self.success,
            StatusCategory::Warning => self.warning,
            StatusCategory::Danger => self.error,
            StatusCategory::Info => self.info,
            StatusCategory::Neutral | StatusCategory::Unknown => self.secondary,
        };
        let bg = match category {
            StatusCategory::Unknown => Color32::from_gray(60),
            _ => fg.gamma_multiply(0.2),
        };
        (bg, fg)
    }
}

/// 圆角设置
pub fn default_rounding() -> Rounding {
    Rounding::same(4.0)
}

/// 卡片边框
pub fn panel_stroke() -> Stroke {
    Stroke::new(1.0, Color32::from_gray(90))
}

/// 绘制状态徽章
pub fn badge(ui: &mut egui::Ui, theme: &Theme, label: &str, category: StatusCategory) {
    let (bg, fg) = theme.badge_colors(category);
    egui::Frame::none()
        .fill(bg)
        .rounding(default_rounding())
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(label).small().color(fg));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_badge_uses_fallback_colors() {
        let theme = Theme::default();
        let (bg, fg) = theme.badge_colors(StatusCategory::Unknown);
        assert_eq!(fg, theme.secondary);
        assert_eq!(bg, Color32::from_gray(60));
        assert_ne!(theme.badge_colors(StatusCategory::Success).1, fg);
    }
}
