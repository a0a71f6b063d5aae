// ==========================================
// BOM 合并工具 - 聚合引擎
// ==========================================
// 顺序: 文件按发现顺序，行按文件内顺序
// 分组: 合并键严格相等（不做模糊/大小写归并）
// ==========================================

use crate::domain::bom::{Contribution, MergedBom};
use crate::importer::bom_reader::SourceFile;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;
use tracing::debug;

// ==========================================
// Aggregator - 按 LCSC 汇总
// ==========================================
pub struct Aggregator {
    data_cleaner: Box<dyn DataCleanerTrait>,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Aggregator {
    pub fn new() -> Self {
        Self::with_cleaner(Box::new(DataCleaner))
    }

    pub fn with_cleaner(data_cleaner: Box<dyn DataCleanerTrait>) -> Self {
        Self { data_cleaner }
    }

    /// 聚合全部源文件
    pub fn aggregate(&self, files: &[SourceFile]) -> MergedBom {
        let mut merged = MergedBom::new();

        for file in files {
            for row in &file.rows {
                let key = self.data_cleaner.clean_text(&row.lcsc);
                let contribution = Contribution {
                    file: file.file_name.clone(),
                    qty: self.data_cleaner.parse_qty(&row.qty),
                    desc: self.data_cleaner.clean_text(&row.description),
                    value: self.data_cleaner.clean_text(&row.value),
                };
                merged.entry_mut(&key).absorb(contribution);
            }
        }

        debug!(keys = merged.len(), "聚合完成");
        merged
    }
}
