// ==========================================
// BOM 合并工具 - 错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 合并流程错误类型
#[derive(Error, Debug)]
pub enum MergeError {
    // ===== 输入相关错误 =====
    #[error("目录读取失败: {path}: {message}")]
    DirectoryRead { path: PathBuf, message: String },

    #[error("文件读取失败: {0}")]
    FileRead(String),

    #[error("CSV 解析失败: {0}")]
    CsvParse(String),

    // ===== 输出相关错误 =====
    #[error("Failed to write merged CSV '{path}': {message}")]
    OutputWrite { path: PathBuf, message: String },

    #[error("日志文件打开失败: {path}: {message}")]
    LogSink { path: PathBuf, message: String },
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for MergeError {
    fn from(err: std::io::Error) -> Self {
        MergeError::FileRead(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for MergeError {
    fn from(err: csv::Error) -> Self {
        MergeError::CsvParse(err.to_string())
    }
}

/// Result 类型别名
pub type MergeResult<T> = Result<T, MergeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_file_read() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: MergeError = io.into();
        assert!(matches!(err, MergeError::FileRead(msg) if msg.contains("missing")));
    }

    #[test]
    fn test_output_write_message_names_path() {
        let err = MergeError::OutputWrite {
            path: PathBuf::from("out/merged.csv"),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to write merged CSV 'out/merged.csv': permission denied"
        );
    }
}
