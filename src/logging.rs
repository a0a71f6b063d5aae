// ==========================================
// 日志系统初始化
// ==========================================
// 使用 tracing 和 tracing-subscriber
// 测试: init_test 输出到测试捕获
// 单次合并: RunLogger 同时输出到控制台和日志文件
// ==========================================

use crate::importer::error::{MergeError, MergeResult};
use chrono::Local;
use std::fmt;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Registry};

/// 初始化测试环境的日志系统
///
/// 使用更详细的日志级别，便于调试
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

// ==========================================
// LineFormat - "时间 - 级别 - 消息" 行格式
// ==========================================
/// 例: `2026-10-19 09:30:00,123 - INFO - Merged LCSC='C1' ...`
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: format::Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        write!(writer, "{} - {} - ", now, event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// ==========================================
// RunLogger - 单次合并的日志汇
// ==========================================
// 生命周期: open 时截断并打开日志文件，drop 时关闭
// 仅在 run 闭包内生效，不修改全局订阅者
pub struct RunLogger {
    dispatch: Dispatch,
}

impl RunLogger {
    /// 打开日志文件（覆盖旧内容），级别 INFO
    pub fn open(log_path: &Path) -> MergeResult<Self> {
        let file = File::create(log_path).map_err(|e| MergeError::LogSink {
            path: log_path.to_path_buf(),
            message: e.to_string(),
        })?;

        let console_layer = tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_writer(std::io::stdout);
        let file_layer = tracing_subscriber::fmt::layer()
            .event_format(LineFormat)
            .with_ansi(false)
            .with_writer(Mutex::new(file));

        let subscriber = Registry::default()
            .with(LevelFilter::INFO)
            .with(console_layer)
            .with(file_layer);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
        })
    }

    /// 在本日志汇下执行闭包
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_logger_writes_info_and_above() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("info.log");

        let logger = RunLogger::open(&log_path).unwrap();
        logger.run(|| {
            tracing::debug!("hidden");
            tracing::info!("merged one key");
            tracing::error!("write failed");
        });
        drop(logger);

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" - INFO - merged one key"));
        assert!(lines[1].ends_with(" - ERROR - write failed"));
        assert!(!content.contains("hidden"));
    }

    #[test]
    fn test_run_logger_truncates_previous_log() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("info.log");
        fs::write(&log_path, "stale line\n").unwrap();

        let logger = RunLogger::open(&log_path).unwrap();
        drop(logger);

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_run_logger_rejects_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let log_path = dir.path().join("missing").join("info.log");

        let result = RunLogger::open(&log_path);
        assert!(matches!(result, Err(MergeError::LogSink { .. })));
    }
}
