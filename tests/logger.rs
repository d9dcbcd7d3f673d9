#![cfg(feature = "log")]

use log::{Level, Log, Metadata, Record};
use print_ip::logger::CONSOLE_LOGGER;

#[test]
fn only_crate_records_are_enabled() {
    let own = Metadata::builder().level(Level::Debug).target("print_ip::render").build();
    let foreign = Metadata::builder().level(Level::Error).target("serde_yml::de").build();
    assert!(CONSOLE_LOGGER.enabled(&own));
    assert!(!CONSOLE_LOGGER.enabled(&foreign));
}

#[test]
fn level_is_padded() {
    let line = CONSOLE_LOGGER.format(
        &Record::builder()
            .args(format_args!("rendering tuple value"))
            .level(Level::Warn)
            .target("print_ip::render")
            .build(),
    );
    assert!(line.contains("   WARN"));
    assert!(line.ends_with(": rendering tuple value"));
}
