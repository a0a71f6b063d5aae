// ==========================================
// BOM 合并工具 - 命令行入口
// ==========================================
// 用法: bom-merge [--input-dir DIR] [--output FILE] [--log FILE]
// ==========================================

use bom_merge::config::{defaults, MergeConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "bom-merge",
    about = "Merge BOM CSV files by LCSC part number",
    version
)]
struct Cli {
    /// Directory containing the source BOM CSV files
    #[arg(short, long, default_value = defaults::INPUT_DIR)]
    input_dir: PathBuf,

    /// Merged CSV output path
    #[arg(short, long, default_value = defaults::OUTPUT_CSV)]
    output: PathBuf,

    /// Log file path (overwritten on each run)
    #[arg(short, long, default_value = defaults::LOG_PATH)]
    log: PathBuf,
}

impl From<Cli> for MergeConfig {
    fn from(cli: Cli) -> Self {
        MergeConfig::default()
            .with_input_dir(cli.input_dir)
            .with_output_csv(cli.output)
            .with_log_path(cli.log)
    }
}

fn main() {
    let config = MergeConfig::from(Cli::parse());

    if let Err(e) = run(&config) {
        eprintln!("{e:#}");
        process::exit(1);
    }
}

fn run(config: &MergeConfig) -> anyhow::Result<()> {
    // 写出失败已记入日志，进程仍正常退出
    bom_merge::engine::run(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = MergeConfig::from(Cli::parse_from(["bom-merge"]));
        assert_eq!(config, MergeConfig::default());
    }

    #[test]
    fn test_cli_overrides() {
        let config = MergeConfig::from(Cli::parse_from([
            "bom-merge",
            "--input-dir",
            "boards",
            "-o",
            "all.csv",
            "--log",
            "merge.log",
        ]));

        assert_eq!(config.input_dir, PathBuf::from("boards"));
        assert_eq!(config.output_csv, PathBuf::from("all.csv"));
        assert_eq!(config.log_path, PathBuf::from("merge.log"));
    }
}
