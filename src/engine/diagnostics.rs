// ==========================================
// BOM 合并工具 - 冲突诊断
// ==========================================
// 仅对贡献行数 > 1 的合并键输出一行 INFO 日志
// 写入日志的每个文本字段截断到 DISPLAY_MAX_LEN
// ==========================================

use crate::domain::bom::{MergeEntry, MergedBom};
use tracing::info;

/// 日志字段最大显示长度（字符数）
pub const DISPLAY_MAX_LEN: usize = 10;

/// 截断标记
const ELLIPSIS: &str = "..";

/// 截断文本，超长时保留 max_len - 2 个字符并追加 ".."
pub fn shorten(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= ELLIPSIS.len() {
        return s.chars().take(max_len).collect();
    }
    let mut out: String = s.chars().take(max_len - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

/// 日志中的数量文本（整数也带一位小数，如 2.0）
pub fn format_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 {
        format!("{:.1}", v)
    } else {
        v.to_string()
    }
}

fn short(s: &str) -> String {
    shorten(s, DISPLAY_MAX_LEN)
}

fn join_short(items: &[String]) -> String {
    items
        .iter()
        .map(|item| short(item))
        .collect::<Vec<_>>()
        .join("; ")
}

/// 生成单个合并键的冲突日志行；单一来源返回 None
pub fn collision_line(key: &str, entry: &MergeEntry) -> Option<String> {
    if !entry.is_collision() {
        return None;
    }

    let contributors = entry
        .contributors
        .iter()
        .map(|c| {
            format!(
                "{}(qty={},desc='{}',val='{}')",
                short(&c.file),
                short(&format_float(c.qty)),
                short(&c.desc),
                short(&c.value)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    Some(format!(
        "Merged LCSC='{}' total_qty={} Values=[{}] Descriptions=[{}] Contributors=[{}]",
        short(key),
        short(&format_float(entry.total_qty)),
        join_short(&entry.values),
        join_short(&entry.descriptions),
        contributors
    ))
}

// ==========================================
// Diagnostics - 冲突日志输出
// ==========================================
pub struct Diagnostics;

impl Diagnostics {
    /// 按合并键首次出现顺序输出冲突日志，返回输出行数
    pub fn emit(&self, merged: &MergedBom) -> usize {
        let mut emitted = 0;
        for (key, entry) in merged.iter() {
            if let Some(line) = collision_line(key, entry) {
                info!("{}", line);
                emitted += 1;
            }
        }
        emitted
    }
}
