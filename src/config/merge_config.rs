// ==========================================
// BOM 合并工具 - 运行配置
// ==========================================
// 配置项: 源目录 / 输出文件 / 日志文件
// 除此三项外不识别其他配置
// ==========================================

use std::path::PathBuf;

/// 配置默认值
pub mod defaults {
    pub const INPUT_DIR: &str = "./BOMs";
    pub const OUTPUT_CSV: &str = "merged.csv";
    pub const LOG_PATH: &str = "info.log";
}

// ==========================================
// MergeConfig - 单次合并的输入输出位置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeConfig {
    /// 源 BOM 目录（不递归）
    pub input_dir: PathBuf,
    /// 合并结果 CSV
    pub output_csv: PathBuf,
    /// 日志文件（每次运行覆盖）
    pub log_path: PathBuf,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(defaults::INPUT_DIR),
            output_csv: PathBuf::from(defaults::OUTPUT_CSV),
            log_path: PathBuf::from(defaults::LOG_PATH),
        }
    }
}

impl MergeConfig {
    pub fn with_input_dir(mut self, input_dir: impl Into<PathBuf>) -> Self {
        self.input_dir = input_dir.into();
        self
    }

    pub fn with_output_csv(mut self, output_csv: impl Into<PathBuf>) -> Self {
        self.output_csv = output_csv.into();
        self
    }

    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = log_path.into();
        self
    }
}
