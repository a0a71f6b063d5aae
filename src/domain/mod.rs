// ==========================================
// BOM 合并工具 - 领域层
// ==========================================

pub mod bom;

pub use bom::{
    Contribution, MergeEntry, MergeKey, MergeSummary, MergedBom, MergedOutputRow, SourceRow,
    ALLOWED_KEYS,
};
