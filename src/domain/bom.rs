// ==========================================
// BOM 合并工具 - 物料清单领域模型
// ==========================================
// 职责: 源行 / 贡献记录 / 合并条目 / 输出行
// 合并键: 去除首尾空白后的 LCSC 编号（区分大小写，允许为空）
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 源文件中保留的四个字段（顺序即输出列顺序）
pub const ALLOWED_KEYS: [&str; 4] = ["Description", "Qty", "Value", "LCSC"];

/// 合并键（去空白后的 LCSC 文本）
pub type MergeKey = String;

// ==========================================
// SourceRow - 过滤后的源行
// ==========================================
/// 一条源记录，仅保留 Description / Qty / Value / LCSC
///
/// 源文件缺少的列一律为空字符串；Qty 保留原始文本，由清洗器归一化。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceRow {
    pub description: String,
    pub qty: String,
    pub value: String,
    pub lcsc: String,
}

// ==========================================
// Contribution - 单行贡献记录
// ==========================================
/// 某个合并键下一条源行的贡献（不去重）
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub file: String,
    pub qty: f64,
    pub desc: String,
    pub value: String,
}

// ==========================================
// MergeEntry - 合并键的聚合状态
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergeEntry {
    /// 数量累计
    pub total_qty: f64,
    /// 去重后的非空描述（按首次出现顺序）
    pub descriptions: Vec<String>,
    /// 去重后的非空值（按首次出现顺序）
    pub values: Vec<String>,
    /// 每条源行的贡献记录
    pub contributors: Vec<Contribution>,
}

impl MergeEntry {
    /// 累加一条贡献
    ///
    /// desc / value 须已去除首尾空白；空串不进入去重集合，
    /// 但贡献记录总是追加。
    pub fn absorb(&mut self, contribution: Contribution) {
        self.total_qty += contribution.qty;
        push_distinct(&mut self.descriptions, &contribution.desc);
        push_distinct(&mut self.values, &contribution.value);
        self.contributors.push(contribution);
    }

    /// 代表描述（首个出现的描述，没有则为空）
    pub fn representative_description(&self) -> &str {
        self.descriptions.first().map(String::as_str).unwrap_or("")
    }

    /// 代表值（首个出现的值，没有则为空）
    pub fn representative_value(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or("")
    }

    /// 是否有多条源行映射到同一合并键
    pub fn is_collision(&self) -> bool {
        self.contributors.len() > 1
    }
}

fn push_distinct(set: &mut Vec<String>, item: &str) {
    if !item.is_empty() && !set.iter().any(|existing| existing == item) {
        set.push(item.to_string());
    }
}

// ==========================================
// MergedBom - 按首次出现顺序保存的合并结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct MergedBom {
    entries: Vec<(MergeKey, MergeEntry)>,
    index: HashMap<MergeKey, usize>,
}

impl MergedBom {
    pub fn new() -> Self {
        Self::default()
    }

    /// 取得（或按需创建）合并键对应的条目
    pub fn entry_mut(&mut self, key: &str) -> &mut MergeEntry {
        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.entries.push((key.to_string(), MergeEntry::default()));
                let idx = self.entries.len() - 1;
                self.index.insert(key.to_string(), idx);
                idx
            }
        };
        &mut self.entries[idx].1
    }

    pub fn get(&self, key: &str) -> Option<&MergeEntry> {
        self.index.get(key).map(|&idx| &self.entries[idx].1)
    }

    /// 按合并键首次出现顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MergeEntry)> {
        self.entries.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    /// 仅遍历冲突键（贡献行数 > 1）
    pub fn collisions(&self) -> impl Iterator<Item = (&str, &MergeEntry)> {
        self.iter().filter(|(_, entry)| entry.is_collision())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 全部合并键的数量总和
    pub fn total_qty(&self) -> f64 {
        self.entries.iter().map(|(_, entry)| entry.total_qty).sum()
    }
}

// ==========================================
// MergedOutputRow - 输出 CSV 行
// ==========================================
/// 合并结果中的一行（列顺序: Description, Qty, Value, LCSC）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedOutputRow {
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Qty")]
    pub qty: String,
    #[serde(rename = "Value")]
    pub value: String,
    #[serde(rename = "LCSC")]
    pub lcsc: String,
}

// ==========================================
// MergeSummary - 单次合并运行摘要
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeSummary {
    pub files_read: usize,
    pub rows_read: usize,
    pub merged_keys: usize,
    pub collisions: usize,
    /// 输出文件是否完整写出
    pub output_written: bool,
}
