// ==========================================
// BOM 合并工具 - 合并结果写出
// ==========================================
// 列顺序: Description, Qty, Value, LCSC（含表头）
// 行结束符: CRLF
// 行顺序: 合并键首次出现顺序
// ==========================================

use crate::domain::bom::{MergeEntry, MergedBom, MergedOutputRow};
use crate::importer::error::{MergeError, MergeResult};
use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::path::Path;

/// 判定"整数"的容差
const INTEGER_EPSILON: f64 = 1e-9;

/// 数量文本化: 接近整数时输出整数形式，否则输出默认小数形式
pub fn format_qty(total: f64) -> String {
    let whole = total.trunc();
    if total.is_finite() && (total - whole).abs() < INTEGER_EPSILON {
        // 加 0.0 把 -0.0 规范为 0
        format!("{}", whole + 0.0)
    } else {
        total.to_string()
    }
}

/// 单个合并条目对应的输出行
pub fn to_output_row(key: &str, entry: &MergeEntry) -> MergedOutputRow {
    MergedOutputRow {
        description: entry.representative_description().to_string(),
        qty: format_qty(entry.total_qty),
        value: entry.representative_value().to_string(),
        lcsc: key.to_string(),
    }
}

// ==========================================
// OutputWriter - CSV 写出器
// ==========================================
pub struct OutputWriter;

impl OutputWriter {
    /// 写出合并结果；失败时可能残留部分文件
    pub fn write(&self, output_csv: &Path, merged: &MergedBom) -> MergeResult<()> {
        let to_error = |message: String| MergeError::OutputWrite {
            path: output_csv.to_path_buf(),
            message,
        };

        let file = File::create(output_csv).map_err(|e| to_error(e.to_string()))?;
        self.write_to(file, merged)
            .map_err(|e| to_error(e.to_string()))
    }

    /// 写入任意 writer（表头由 MergedOutputRow 的字段名生成）
    pub fn write_to<W: std::io::Write>(&self, sink: W, merged: &MergedBom) -> csv::Result<()> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(sink);
        if merged.is_empty() {
            // serialize 只在首行时写表头，空结果需手动写
            writer.write_record(crate::domain::bom::ALLOWED_KEYS)?;
        }
        for (key, entry) in merged.iter() {
            writer.serialize(to_output_row(key, entry))?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bom::Contribution;

    fn merged_with(rows: &[(&str, f64, &str, &str)]) -> MergedBom {
        let mut merged = MergedBom::new();
        for (key, qty, desc, value) in rows {
            merged.entry_mut(key).absorb(Contribution {
                file: "a.csv".to_string(),
                qty: *qty,
                desc: desc.to_string(),
                value: value.to_string(),
            });
        }
        merged
    }

    fn render(merged: &MergedBom) -> String {
        let mut buf = Vec::new();
        OutputWriter.write_to(&mut buf, merged).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_format_qty() {
        assert_eq!(format_qty(5.0), "5");
        assert_eq!(format_qty(5.3), "5.3");
        assert_eq!(format_qty(0.0), "0");
        assert_eq!(format_qty(-0.0), "0");
        assert_eq!(format_qty(-2.0), "-2");
        assert_eq!(format_qty(1234.0), "1234");
        assert_eq!(format_qty(2.0000000000001), "2");
        assert_eq!(format_qty(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_write_header_and_rows_in_first_seen_order() {
        let merged = merged_with(&[
            ("C2", 1.0, "Cap", "100nF"),
            ("C1", 2.5, "Resistor", "10k"),
            ("C2", 2.0, "Cap", "100nF"),
        ]);

        assert_eq!(
            render(&merged),
            "Description,Qty,Value,LCSC\r\nCap,3,100nF,C2\r\nResistor,2.5,10k,C1\r\n"
        );
    }

    #[test]
    fn test_write_quotes_special_fields() {
        let merged = merged_with(&[("", 1.0, "Header, 2.54mm \"male\"", "")]);

        assert_eq!(
            render(&merged),
            "Description,Qty,Value,LCSC\r\n\"Header, 2.54mm \"\"male\"\"\",1,,\r\n"
        );
    }

    #[test]
    fn test_write_empty_result_has_header_only() {
        assert_eq!(render(&MergedBom::new()), "Description,Qty,Value,LCSC\r\n");
    }

    #[test]
    fn test_write_to_unwritable_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("missing").join("merged.csv");

        let result = OutputWriter.write(&target, &MergedBom::new());

        assert!(matches!(result, Err(MergeError::OutputWrite { .. })));
    }
}
