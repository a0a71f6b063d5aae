// ==========================================
// BOM 合并工具 - 配置层
// ==========================================
// 职责: 源目录 / 输出文件 / 日志文件位置
// ==========================================

pub mod merge_config;

pub use merge_config::{defaults, MergeConfig};
