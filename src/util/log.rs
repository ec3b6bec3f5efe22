use log::{LevelFilter, Log, Metadata, Record};

// "[LEVEL](file:line) message" 形式で標準エラーに出力するロガー
struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!("{}", format_record(record));
    }

    fn flush(&self) {}
}

fn format_record(record: &Record<'_>) -> String {
    format!(
        "[{}]({}:{}) {}",
        record.level(),
        record.file().unwrap_or("?"),
        record.line().unwrap_or(0),
        record.args()
    )
}

// 二重に初期化した場合は何もしない
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

pub fn level_from_flags(verbose: bool, quiet: bool) -> LevelFilter {
    match (verbose, quiet) {
        (true, _) => LevelFilter::Debug,
        (false, true) => LevelFilter::Warn,
        _ => LevelFilter::Info,
    }
}

#[test]
fn test_format_record() {
    use log::Level;
    let line = format_record(
        &Record::builder()
            .args(format_args!("mode not specified"))
            .level(Level::Error)
            .file(Some("src/main.rs"))
            .line(Some(12))
            .build(),
    );
    assert_eq!(line, "[ERROR](src/main.rs:12) mode not specified");
}

#[test]
fn test_level_from_flags() {
    assert_eq!(level_from_flags(true, true), LevelFilter::Debug);
    assert_eq!(level_from_flags(false, true), LevelFilter::Warn);
    assert_eq!(level_from_flags(false, false), LevelFilter::Info);
}
