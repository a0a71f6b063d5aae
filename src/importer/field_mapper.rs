// ==========================================
// BOM 合并工具 - 字段过滤器实现
// ==========================================
// 职责: 原始行 → SourceRow（仅保留四个允许字段）
// ==========================================

use crate::domain::bom::SourceRow;
use crate::importer::importer_trait::FieldMapper as FieldMapperTrait;
use std::collections::HashMap;

pub struct FieldMapper;

impl FieldMapperTrait for FieldMapper {
    fn map_to_source_row(&self, row: &HashMap<String, String>) -> SourceRow {
        SourceRow {
            description: self.get_string(row, "Description"),
            qty: self.get_string(row, "Qty"),
            value: self.get_string(row, "Value"),
            lcsc: self.get_string(row, "LCSC"),
        }
    }
}

impl FieldMapper {
    /// 提取字段原值，缺失时为空串（不做清洗）
    fn get_string(&self, row: &HashMap<String, String>, key: &str) -> String {
        row.get(key).cloned().unwrap_or_default()
    }
}
