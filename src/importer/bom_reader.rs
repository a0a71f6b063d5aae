// ==========================================
// BOM 合并工具 - BOM 读取器
// ==========================================
// 流程: 发现文件 → 解析 → 字段过滤
// 单个文件失败只记日志，视为 0 行，不影响其他文件
// ==========================================

use crate::domain::bom::SourceRow;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_discovery::find_csv_files;
use crate::importer::file_parser::CsvParser;
use crate::importer::importer_trait::{FieldMapper as FieldMapperTrait, FileParser};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// 一个源文件的读取结果（文件名 + 过滤后的行）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceFile {
    pub file_name: String,
    pub rows: Vec<SourceRow>,
}

// ==========================================
// BomReader - 目录级 BOM 读取器
// ==========================================
pub struct BomReader {
    dir_path: PathBuf,

    // 导入组件
    file_parser: Box<dyn FileParser>,
    field_mapper: Box<dyn FieldMapperTrait>,
}

impl BomReader {
    /// 使用默认 CSV 组件创建读取器
    pub fn new(dir_path: impl Into<PathBuf>) -> Self {
        Self::with_components(dir_path, Box::new(CsvParser), Box::new(FieldMapper))
    }

    /// 注入自定义组件
    pub fn with_components(
        dir_path: impl Into<PathBuf>,
        file_parser: Box<dyn FileParser>,
        field_mapper: Box<dyn FieldMapperTrait>,
    ) -> Self {
        Self {
            dir_path: dir_path.into(),
            file_parser,
            field_mapper,
        }
    }

    /// 目录中的 CSV 文件；目录不可读时返回空列表（仅 debug 日志）
    pub fn find_csv_files(&self) -> Vec<PathBuf> {
        match find_csv_files(&self.dir_path) {
            Ok(files) => files,
            Err(e) => {
                debug!(error = %e, "源目录不可读，按空目录处理");
                Vec::new()
            }
        }
    }

    /// 读取单个文件的原始行；失败返回空列表，不写入运行日志
    pub fn read_csv(&self, file_path: &Path) -> Vec<HashMap<String, String>> {
        match self.file_parser.parse_to_raw_records(file_path) {
            Ok(rows) => rows,
            Err(e) => {
                debug!(file = %file_path.display(), error = %e, "文件读取失败，跳过");
                Vec::new()
            }
        }
    }

    /// 仅保留允许字段
    pub fn filter_row(&self, row: &HashMap<String, String>) -> SourceRow {
        self.field_mapper.map_to_source_row(row)
    }

    /// 读取全部文件（按发现顺序）
    pub fn read_all(&self) -> Vec<SourceFile> {
        let files = self.find_csv_files();
        debug!(dir = %self.dir_path.display(), count = files.len(), "发现源文件");

        files
            .iter()
            .map(|path| {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();
                let rows: Vec<SourceRow> = self
                    .read_csv(path)
                    .iter()
                    .map(|raw| self.filter_row(raw))
                    .collect();
                debug!(file = %file_name, rows = rows.len(), "文件解析完成");
                SourceFile { file_name, rows }
            })
            .collect()
    }
}
