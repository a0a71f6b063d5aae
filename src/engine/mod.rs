// ==========================================
// BOM 合并工具 - 引擎层
// ==========================================
// 职责: 聚合、结果写出、冲突诊断、流程编排
// ==========================================

pub mod aggregator;
pub mod diagnostics;
pub mod orchestrator;
pub mod output_writer;

// 重导出核心引擎
pub use aggregator::Aggregator;
pub use diagnostics::{collision_line, shorten, Diagnostics, DISPLAY_MAX_LEN};
pub use orchestrator::{run, MergeOrchestrator};
pub use output_writer::{format_qty, OutputWriter};
