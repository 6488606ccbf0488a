#![no_main]

use libfuzzer_sys::fuzz_target;
use magstripe_track::TrackRecord;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(record) = TrackRecord::parse(s) {
        assert_eq!(record.track_data(), s);

        let report = record.validate();
        if report.is_valid() {
            assert!(report.is_minimally_valid());
        }
        let _ = serde_json::to_string(&report);
        let _ = record.year();
        let _ = record.month();
    }
});
