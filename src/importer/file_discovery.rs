// ==========================================
// BOM 合并工具 - 源文件发现
// ==========================================
// 规则: 目录下（不递归）文件名以 .csv 结尾（不区分大小写）
// 顺序: 与目录列举顺序一致
// ==========================================

use crate::importer::error::{MergeError, MergeResult};
use std::fs;
use std::path::{Path, PathBuf};

const CSV_SUFFIX: &str = ".csv";

/// 列出目录中的 CSV 文件
pub fn find_csv_files(dir: &Path) -> MergeResult<Vec<PathBuf>> {
    let read_dir = fs::read_dir(dir).map_err(|e| MergeError::DirectoryRead {
        path: dir.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| MergeError::DirectoryRead {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;

        if !has_csv_suffix(&entry.file_name().to_string_lossy()) {
            continue;
        }

        // 跳过子目录（包括名字恰好以 .csv 结尾的目录）
        let is_file = entry.file_type().map(|t| !t.is_dir()).unwrap_or(false);
        if is_file {
            files.push(entry.path());
        }
    }

    Ok(files)
}

fn has_csv_suffix(name: &str) -> bool {
    name.len() >= CSV_SUFFIX.len()
        && name
            .get(name.len() - CSV_SUFFIX.len()..)
            .map(|tail| tail.eq_ignore_ascii_case(CSV_SUFFIX))
            .unwrap_or(false)
}
