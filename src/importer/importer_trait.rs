// ==========================================
// BOM 合并工具 - 导入组件 Trait
// ==========================================
// 职责: 定义导入管道各阶段的接口（不包含实现）
// 阶段: 文件解析 → 字段过滤 → 数据清洗
// ==========================================

use crate::domain::bom::SourceRow;
use crate::importer::error::MergeResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始行记录（HashMap<列名, 值>）
    ///
    /// # 返回
    /// - Ok(Vec<HashMap<String, String>>): 行记录列表（文件顺序）
    /// - Err: 文件读取错误、编码错误、格式错误
    fn parse_to_raw_records(&self, file_path: &Path) -> MergeResult<Vec<HashMap<String, String>>>;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段过滤接口（阶段 1）
// 实现者: FieldMapper
pub trait FieldMapper: Send + Sync {
    /// 仅保留 Description / Qty / Value / LCSC，缺失列为空串
    fn map_to_source_row(&self, row: &HashMap<String, String>) -> SourceRow;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 2）
// 实现者: DataCleaner
pub trait DataCleaner: Send + Sync {
    /// 清洗文本字段（TRIM）
    fn clean_text(&self, value: &str) -> String;

    /// 数量归一化
    ///
    /// # 规则
    /// 1. 空值 → 0.0
    /// 2. 去除首尾空白
    /// 3. 删除千分位逗号
    /// 4. 十进制解析，失败 → 0.0
    fn parse_qty(&self, raw: &str) -> f64;
}
