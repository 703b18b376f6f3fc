//! 状态标签分类
//!
//! 把已知的状态文字映射到徽章类别，未知文字落到 `Unknown`。

use crate::core::models::RecordKind;

/// 徽章类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
    /// 未识别的状态，使用默认样式
    Unknown,
}

/// 报关单海关状态
pub fn declaration_status(label: &str) -> StatusCategory {
    match label {
        "已放行" => StatusCategory::Success,
        "查验中" => StatusCategory::Warning,
        "已结关" => StatusCategory::Info,
        "审结" => StatusCategory::Neutral,
        _ => StatusCategory::Unknown,
    }
}

/// 税费单支付状态
pub fn payment_status(label: &str) -> StatusCategory {
    match label {
        "已支付" => StatusCategory::Success,
        "未支付" => StatusCategory::Warning,
        "支付失败" => StatusCategory::Danger,
        _ => StatusCategory::Unknown,
    }
}

/// 按记录种类分类
pub fn classify(kind: RecordKind, label: &str) -> StatusCategory {
    match kind {
        RecordKind::Declaration => declaration_status(label),
        RecordKind::Tax => payment_status(label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_declaration_labels() {
        assert_eq!(declaration_status("已放行"), StatusCategory::Success);
        assert_eq!(declaration_status("查验中"), StatusCategory::Warning);
        assert_eq!(declaration_status("已结关"), StatusCategory::Info);
        assert_eq!(declaration_status("审结"), StatusCategory::Neutral);
    }

    #[test]
    fn test_known_payment_labels() {
        assert_eq!(payment_status("已支付"), StatusCategory::Success);
        assert_eq!(payment_status("未支付"), StatusCategory::Warning);
        assert_eq!(payment_status("支付失败"), StatusCategory::Danger);
    }

    #[test]
    fn test_unknown_labels_fall_back() {
        for label in ["", "退单", "已支付 ", "PAID"] {
            assert_eq!(payment_status(label), StatusCategory::Unknown);
            assert_eq!(declaration_status(label), StatusCategory::Unknown);
        }
        // 税费单的状态不适用于报关单
        assert_eq!(classify(RecordKind::Declaration, "已支付"), StatusCategory::Unknown);
        assert_eq!(classify(RecordKind::Tax, "已支付"), StatusCategory::Success);
    }
}
