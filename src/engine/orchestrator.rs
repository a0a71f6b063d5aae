// ==========================================
// BOM 合并工具 - 合并编排器
// ==========================================
// 流程: 发现文件 → 解析 → 过滤 → 聚合 → 写出 → 冲突诊断
// 写出失败: 记录 ERROR 并提前返回，不输出冲突诊断
// ==========================================

use crate::config::MergeConfig;
use crate::domain::bom::MergeSummary;
use crate::engine::aggregator::Aggregator;
use crate::engine::diagnostics::Diagnostics;
use crate::engine::output_writer::OutputWriter;
use crate::importer::bom_reader::BomReader;
use crate::importer::error::MergeResult;
use crate::logging::RunLogger;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

// ==========================================
// MergeOrchestrator - 合并编排器
// ==========================================
pub struct MergeOrchestrator {
    reader: BomReader,
    aggregator: Aggregator,
    writer: OutputWriter,
    diagnostics: Diagnostics,
}

impl MergeOrchestrator {
    /// 使用默认组件创建编排器
    ///
    /// # 参数
    /// - input_dir: 源 BOM 目录
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self::with_components(BomReader::new(input_dir), Aggregator::new())
    }

    pub fn with_components(reader: BomReader, aggregator: Aggregator) -> Self {
        Self {
            reader,
            aggregator,
            writer: OutputWriter,
            diagnostics: Diagnostics,
        }
    }

    /// 执行完整合并流程
    ///
    /// 日志写入当前 tracing 订阅者；调用方负责日志汇的生命周期。
    ///
    /// # 返回
    /// - MergeSummary: 运行摘要（output_written = false 表示写出失败）
    pub fn merge_and_write(&self, output_csv: &Path) -> MergeSummary {
        // === 步骤 1: 读取源文件 ===
        let files = self.reader.read_all();
        let mut summary = MergeSummary {
            files_read: files.len(),
            rows_read: files.iter().map(|f| f.rows.len()).sum(),
            ..MergeSummary::default()
        };
        debug!(
            files = summary.files_read,
            rows = summary.rows_read,
            "源文件读取完成"
        );

        // === 步骤 2: 聚合 ===
        let merged = self.aggregator.aggregate(&files);
        summary.merged_keys = merged.len();

        // === 步骤 3: 写出 ===
        if let Err(e) = self.writer.write(output_csv, &merged) {
            error!("{}", e);
            return summary;
        }
        summary.output_written = true;
        debug!(output = %output_csv.display(), keys = merged.len(), "合并结果已写出");

        // === 步骤 4: 冲突诊断 ===
        summary.collisions = self.diagnostics.emit(&merged);
        summary
    }
}

/// 按配置执行一次合并（打开日志汇 → 合并 → 关闭日志汇）
///
/// # 返回
/// - Ok(MergeSummary): 合并已执行（写出失败时 output_written = false）
/// - Err(MergeError::LogSink): 日志文件无法打开，未执行合并
pub fn run(config: &MergeConfig) -> MergeResult<MergeSummary> {
    let logger = RunLogger::open(&config.log_path)?;
    let orchestrator = MergeOrchestrator::new(&config.input_dir);
    let summary = logger.run(|| orchestrator.merge_and_write(&config.output_csv));
    Ok(summary)
}
