// ==========================================
// BOM 合并工具 - 数据清洗器实现
// ==========================================
// 职责: TRIM / 数量归一化
// 数量解析失败降级为 0，不中断合并
// ==========================================

use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn clean_text(&self, value: &str) -> String {
        value.trim().to_string()
    }

    fn parse_qty(&self, raw: &str) -> f64 {
        parse_qty(raw)
    }
}

/// 数量归一化（空值/非法值 → 0.0）
pub fn parse_qty(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    // 去除千分位分隔符
    let normalized: String = trimmed.chars().filter(|&c| c != ',').collect();
    normalized.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_basic() {
        assert_eq!(DataCleaner.clean_text("  10k \t"), "10k");
        assert_eq!(DataCleaner.clean_text("   "), "");
    }

    #[test]
    fn test_parse_qty_examples() {
        assert_eq!(parse_qty("1,234"), 1234.0);
        assert_eq!(parse_qty(""), 0.0);
        assert_eq!(parse_qty("abc"), 0.0);
        assert_eq!(parse_qty("12.5"), 12.5);
    }

    #[test]
    fn test_parse_qty_whitespace_and_separators() {
        assert_eq!(parse_qty("  7 "), 7.0);
        assert_eq!(parse_qty("   "), 0.0);
        assert_eq!(parse_qty("1,000,000"), 1_000_000.0);
        assert_eq!(parse_qty("-3"), -3.0);
        // 内部空白不是合法数字
        assert_eq!(parse_qty("1 000"), 0.0);
    }

    #[test]
    fn test_trait_delegates_to_parse_qty() {
        assert_eq!(DataCleaner.parse_qty(" 2,5 "), 25.0);
    }
}
