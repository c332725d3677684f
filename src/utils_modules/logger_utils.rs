use crate::common::*;
use std::io::Write;

#[doc = "Line format shared by the log files and the stdout duplicate"]
fn log_line_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[doc = r#"
    Installs the global logger.

    Log level comes from `RUST_LOG` (default `info`). Records are written to
    `logs/` with daily rotation, keeping the last 10 files, and INFO and above
    are duplicated to stdout.

    The returned handle must stay alive until the end of `main`.

    # Panics
    When the logger cannot be started (e.g. `logs/` is not writable).
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_directory)
                        .basename("retail_sales_analytics"),
                )
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .format_for_files(log_line_format)
                .format_for_stdout(log_line_format)
                .duplicate_to_stdout(Duplicate::Info)
                .start()
        })
        .unwrap_or_else(|e| {
            panic!("[set_global_logger] Logger initialization failed: {:?}", e);
        })
}
