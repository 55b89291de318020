use env_logger::{Builder, Env, Target};

pub const LOG_ENV: &str = "SYNK_LOG";

/// Logs go to stderr; stdout carries protocol responses only.
pub fn init() {
    let env = Env::new().filter_or(LOG_ENV, "info");

    let result = Builder::from_env(env)
        .target(Target::Stderr)
        .format_timestamp_millis()
        .try_init();

    if result.is_err() {
        log::debug!("logger already initialised");
    }
}
