//! Fuzz target: `DoorConfig::from_json`
//!
//! Arbitrary documents must never panic the parser, and anything it
//! accepts must already satisfy `validate()`.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use coopdoor::config::DoorConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(doc) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = DoorConfig::from_json(doc) {
        assert!(config.validate().is_ok());
        assert!(config.evening_threshold < config.day_threshold);
        assert!(config.run_time_secs > 0);
    }
});
