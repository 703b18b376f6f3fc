//! 模拟数据
//!
//! 后端接入之前，页面使用这里的固定记录。

use crate::core::models::{CustomsDeclaration, CustomsTax};

fn declaration(
    cus_ciq_no: &str,
    entry_id: &str,
    status: &str,
    owner_name: &str,
    ie_date: &str,
    d_date: &str,
) -> CustomsDeclaration {
    CustomsDeclaration {
        cus_ciq_no: cus_ciq_no.to_string(),
        entry_id: entry_id.to_string(),
        cus_dec_status_name: status.to_string(),
        agent_name: "上海东方报关有限公司".to_string(),
        owner_name: owner_name.to_string(),
        ie_date: ie_date.to_string(),
        d_date: d_date.to_string(),
    }
}

fn tax(
    tax_head_seq_no: &str,
    sw_tax_id: &str,
    entry_id: &str,
    taxvou_no: &str,
    tra_amt: f64,
    status: &str,
    limit_date: &str,
) -> CustomsTax {
    CustomsTax {
        tax_head_seq_no: tax_head_seq_no.to_string(),
        sw_tax_id: sw_tax_id.to_string(),
        entry_id: entry_id.to_string(),
        taxvou_no: taxvou_no.to_string(),
        tra_amt,
        trans_status_name: status.to_string(),
        limit_date_str: limit_date.to_string(),
    }
}

/// 模拟报关单
pub fn mock_declarations() -> Vec<CustomsDeclaration> {
    vec![
        declaration("223320240000012345", "123456789012345678", "已放行", "XX国际贸易有限公司", "2024-05-20", "2024-05-21"),
        declaration("223320240000012346", "123456789012345679", "查验中", "YY商贸发展有限公司", "2024-05-20", "2024-05-21"),
        declaration("223320240000012347", "123456789012345680", "已结关", "ZZ进出口集团", "2024-05-19", "2024-05-20"),
        declaration("223320240000012348", "123456789012345681", "已放行", "AA贸易", "2024-05-18", "2024-05-19"),
        declaration("223320240000012349", "123456789012345682", "已放行", "BB科技有限公司", "2024-05-18", "2024-05-19"),
    ]
}

/// 模拟税费单
pub fn mock_customs_taxes() -> Vec<CustomsTax> {
    vec![
        tax("SEQ987654321", "SWTAX001", "123456789012345678", "TAX-VOUCHER-001", 15230.50, "已支付", "2024-06-15"),
        tax("SEQ987654322", "SWTAX002", "123456789012345679", "TAX-VOUCHER-002", 8750.00, "未支付", "2024-06-18"),
        tax("SEQ987654323", "SWTAX003", "123456789012345680", "TAX-VOUCHER-003", 32400.75, "支付失败", "2024-06-20"),
        tax("SEQ987654324", "SWTAX004", "123456789012345681", "TAX-VOUCHER-004", 1200.00, "已支付", "2024-06-21"),
        tax("SEQ987654325", "SWTAX005", "123456789012345682", "TAX-VOUCHER-005", 5600.20, "已支付", "2024-06-22"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_records_link_to_declarations() {
        let entries: Vec<String> = mock_declarations().into_iter().map(|d| d.entry_id).collect();
        for t in mock_customs_taxes() {
            assert!(entries.contains(&t.entry_id), "dangling entry id {}", t.entry_id);
        }
    }
}
