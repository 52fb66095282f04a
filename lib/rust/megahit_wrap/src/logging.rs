use chrono::Local;
use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// Log level for a run; `RUST_LOG` can still override it.
pub fn level_filter(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Setup logging to stderr. Safe to call more than once, later calls are
/// ignored.
pub fn init_logging(debug: bool) {
    let _ = Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level_filter(debug))
        .parse_env("RUST_LOG")
        .try_init();
}
