// ==========================================
// BOM 合并工具 - 核心库
// ==========================================
// 功能: 合并目录下多份 BOM CSV，按 LCSC 编号汇总数量
// 输出: 合并 CSV + 冲突日志（控制台与日志文件）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 文件发现/解析/过滤/清洗
pub mod importer;

// 引擎层 - 聚合/写出/诊断/编排
pub mod engine;

// 配置层 - 运行配置
pub mod config;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use config::MergeConfig;
pub use domain::{
    Contribution, MergeEntry, MergeKey, MergeSummary, MergedBom, MergedOutputRow, SourceRow,
};
pub use engine::{run, MergeOrchestrator};
pub use importer::{BomReader, MergeError, MergeResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
