#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate spinnaker;

use std::str;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = str::from_utf8(data) {
        if let Ok(sep) = spinnaker::determine_separator(text) {
            if let Ok(msg) = spinnaker::parse(text, sep) {
                let _ = spinnaker::GllParser::new(&msg).map(|gll| {
                    let _ = gll.latitude();
                    let _ = gll.utc_time();
                    let _ = gll.position();
                });
                let _ = spinnaker::MwvParser::new(&msg).map(|mwv| {
                    let _ = mwv.wind_angle();
                    let _ = mwv.wind_speed();
                });
            }
        }
    }
});
