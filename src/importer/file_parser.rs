// ==========================================
// BOM 合并工具 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: CSV (.csv)，首行为表头，可带 UTF-8 BOM
// ==========================================

use crate::importer::error::MergeResult;
use crate::importer::importer_trait::FileParser;
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// UTF-8 字节序标记
const UTF8_BOM: char = '\u{feff}';

// ==========================================
// CSV Parser 实现
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> MergeResult<Vec<HashMap<String, String>>> {
        // 打开 CSV 文件（句柄随 reader 一起释放）
        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        // 读取表头（列名精确匹配，仅剥离 BOM）
        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, h)| {
                if idx == 0 {
                    h.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    h.to_string()
                }
            })
            .collect();

        // 读取所有行；空行由 csv reader 跳过，全空单元格的行保留
        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.to_string());
                }
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_parser_valid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Designator,Description,Qty,LCSC").unwrap();
        writeln!(temp_file, "R1,Resistor,2,C25804").unwrap();
        writeln!(temp_file, "C1,\"Cap, 0402\",1,C1525").unwrap();

        let records = CsvParser.parse_to_raw_records(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("LCSC"), Some(&"C25804".to_string()));
        assert_eq!(records[1].get("Description"), Some(&"Cap, 0402".to_string()));
    }

    #[test]
    fn test_csv_parser_strips_bom() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all("\u{feff}LCSC,Qty\nC1,3\n".as_bytes()).unwrap();

        let records = CsvParser.parse_to_raw_records(temp_file.path()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("LCSC"), Some(&"C1".to_string()));
    }

    #[test]
    fn test_csv_parser_headers_are_exact() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "lcsc, Qty").unwrap();
        writeln!(temp_file, "C1,3").unwrap();

        let records = CsvParser.parse_to_raw_records(temp_file.path()).unwrap();

        assert!(records[0].get("LCSC").is_none());
        assert!(records[0].get("Qty").is_none());
        assert_eq!(records[0].get(" Qty"), Some(&"3".to_string()));
    }

    #[test]
    fn test_csv_parser_short_rows_and_blank_cells() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Description,Qty,Value,LCSC").unwrap();
        writeln!(temp_file, "Resistor,2").unwrap();
        writeln!(temp_file, ",,,").unwrap();

        let records = CsvParser.parse_to_raw_records(temp_file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records[0].get("LCSC").is_none());
        assert!(records[1].values().all(|v| v.is_empty()));
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvParser.parse_to_raw_records(Path::new("non_existent.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_csv_parser_rejects_invalid_utf8() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"LCSC,Qty\nC1,\xff\xfe\n").unwrap();

        let result = CsvParser.parse_to_raw_records(temp_file.path());
        assert!(result.is_err());
    }
}
