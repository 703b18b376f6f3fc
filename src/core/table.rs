//! 表格列定义与行过滤

use crate::core::models::{CustomsDeclaration, CustomsTax, Record};

/// 单元格显示方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// 等宽小字（单号类）
    Mono,
    /// 普通文字
    Text,
    /// 小号文字
    Small,
    /// 状态徽章
    Badge,
}

/// 表格列
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub kind: CellKind,
}

/// 可在列表页展示的记录
pub trait TableRecord: Record {
    /// 数据列（不含操作列）
    const COLUMNS: &'static [Column];

    /// 与 `COLUMNS` 一一对应的单元格文字
    fn cells(&self) -> Vec<String>;

    /// 状态文字
    fn status_label(&self) -> &str;

    /// 详情窗口中展示的全部字段
    fn detail_fields(&self) -> Vec<(&'static str, String)>;

    /// 任一显示列包含关键字（忽略大小写）
    fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.cells()
            .iter()
            .any(|cell| cell.to_lowercase().contains(&query))
    }
}

/// 过滤当前页中匹配关键字的行
pub fn filter_rows<'a, T: TableRecord>(items: &'a [T], query: &str) -> Vec<&'a T> {
    items.iter().filter(|item| item.matches(query)).collect()
}

impl TableRecord for CustomsDeclaration {
    const COLUMNS: &'static [Column] = &[
        Column { title: "报关单号", kind: CellKind::Mono },
        Column { title: "海关状态", kind: CellKind::Badge },
        Column { title: "申报单位", kind: CellKind::Small },
        Column { title: "境内货主", kind: CellKind::Small },
        Column { title: "申报日期", kind: CellKind::Text },
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.entry_id.clone(),
            self.cus_dec_status_name.clone(),
            self.agent_name.clone(),
            self.owner_name.clone(),
            self.d_date.clone(),
        ]
    }

    fn status_label(&self) -> &str {
        &self.cus_dec_status_name
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("统一编号", self.cus_ciq_no.clone()),
            ("报关单号", self.entry_id.clone()),
            ("海关状态", self.cus_dec_status_name.clone()),
            ("申报单位", self.agent_name.clone()),
            ("境内货主", self.owner_name.clone()),
            ("进出口日期", self.ie_date.clone()),
            ("申报日期", self.d_date.clone()),
        ]
    }
}

impl TableRecord for CustomsTax {
    const COLUMNS: &'static [Column] = &[
        Column { title: "报关单号", kind: CellKind::Mono },
        Column { title: "税票号", kind: CellKind::Mono },
        Column { title: "应缴金额", kind: CellKind::Text },
        Column { title: "支付状态", kind: CellKind::Badge },
        Column { title: "缴款期限", kind: CellKind::Text },
    ];

    fn cells(&self) -> Vec<String> {
        vec![
            self.entry_id.clone(),
            self.taxvou_no.clone(),
            self.amount_display(),
            self.trans_status_name.clone(),
            self.limit_date_str.clone(),
        ]
    }

    fn status_label(&self) -> &str {
        &self.trans_status_name
    }

    fn detail_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("税单序号", self.tax_head_seq_no.clone()),
            ("税费单ID", self.sw_tax_id.clone()),
            ("报关单号", self.entry_id.clone()),
            ("税票号", self.taxvou_no.clone()),
            ("应缴金额", self.amount_display()),
            ("支付状态", self.trans_status_name.clone()),
            ("缴款期限", self.limit_date_str.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_match_columns() {
        for dec in CustomsDeclaration::mock_records() {
            assert_eq!(dec.cells().len(), CustomsDeclaration::COLUMNS.len());
        }
        for tax in CustomsTax::mock_records() {
            assert_eq!(tax.cells().len(), CustomsTax::COLUMNS.len());
        }
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let taxes = CustomsTax::mock_records();
        let rows = filter_rows(&taxes, "tax-voucher-003");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sw_tax_id, "SWTAX003");
    }

    #[test]
    fn test_filter_matches_formatted_amount() {
        let taxes = CustomsTax::mock_records();
        let rows = filter_rows(&taxes, "¥8750.00");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_empty_query_keeps_all_rows() {
        let decs = CustomsDeclaration::mock_records();
        assert_eq!(filter_rows(&decs, "  ").len(), decs.len());
        assert_eq!(filter_rows(&decs, "已放行").len(), 3);
        assert!(filter_rows(&decs, "不存在").is_empty());
    }

    #[test]
    fn test_hidden_fields_are_not_searched() {
        // 统一编号不在列表列中
        let decs = CustomsDeclaration::mock_records();
        assert!(filter_rows(&decs, "223320240000012345").is_empty());
    }
}
