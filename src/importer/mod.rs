// ==========================================
// BOM 合并工具 - 导入层
// ==========================================
// 职责: 源文件发现、CSV 解析、字段过滤、数据清洗
// ==========================================

// 模块声明
pub mod bom_reader;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_discovery;
pub mod file_parser;
pub mod importer_trait;

// 重导出核心类型
pub use bom_reader::{BomReader, SourceFile};
pub use data_cleaner::{parse_qty, DataCleaner as DataCleanerImpl};
pub use error::{MergeError, MergeResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_discovery::find_csv_files;
pub use file_parser::CsvParser;

// 重导出 Trait 接口
pub use importer_trait::{DataCleaner, FieldMapper, FileParser};
