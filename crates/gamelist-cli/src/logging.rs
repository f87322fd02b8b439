use crate::types::LogLevel;

/// Install the stderr logger. Stdout is reserved for rendered output.
pub fn init(level: LogLevel) {
    let result = env_logger::Builder::new()
        .filter_level(level.into())
        .parse_env("GAMELIST_LOG")
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .try_init();

    if result.is_err() {
        log::debug!("logger already initialized");
    }
}
