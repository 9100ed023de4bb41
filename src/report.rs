/// NDJSON rendering of frame records and parser counters.
///
/// Each value becomes one JSON object terminated by `\n`, written into a
/// caller-provided buffer. Records are tagged with `"type"`.
use serde::Serialize;

use crate::parser::CounterSnapshot;
use crate::record::FrameRecord;

/// Large enough for any single record. The largest is a beacon or probe
/// response whose SSID is all control bytes (hidden networks send NULs),
/// each escaped to `\u0000`, with every number at its widest.
pub const MAX_RECORD_LEN: usize = 768;

fn serialize_line<T: Serialize>(value: &T, buf: &mut [u8]) -> Option<usize> {
    let len = serde_json_core::to_slice(value, buf).ok()?;
    // NDJSON terminator; a full buffer means the line does not fit
    *buf.get_mut(len)? = b'\n';
    Some(len + 1)
}

/// Serialize one record into `buf` as an NDJSON line.
/// Returns the number of bytes written, or `None` if `buf` is too small.
pub fn serialize_record(record: &FrameRecord, buf: &mut [u8]) -> Option<usize> {
    serialize_line(record, buf)
}

/// Serialize counter snapshots into `buf`, one NDJSON line each.
/// Returns the total number of bytes written, or `None` if `buf` is too small.
pub fn serialize_counters(
    snapshots: impl IntoIterator<Item = CounterSnapshot>,
    buf: &mut [u8],
) -> Option<usize> {
    let mut written = 0;
    for snapshot in snapshots {
        written += serialize_line(&snapshot, buf.get_mut(written..)?)?;
    }
    Some(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::dispatch::{counter_snapshots, parse_frame};
    use crate::header::tests::mgmt_frame;
    use crate::header::MacAddress;
    use crate::metadata::FrameMetadata;
    use crate::parsers::authentication::tests::lock_counters;
    use crate::parsers::control::tests::control_frame;
    use crate::record::{BeaconFrame, Capabilities, NameString};

    const META: FrameMetadata = FrameMetadata::new(1, 2412, -70);

    fn render(record: &FrameRecord) -> String {
        let mut buf = [0u8; MAX_RECORD_LEN];
        let len = serialize_record(record, &mut buf).unwrap();
        assert_eq!(buf[len - 1], b'\n');
        String::from_utf8(buf[..len - 1].to_vec()).unwrap()
    }

    fn parse(frame: &[u8]) -> FrameRecord {
        let record = parse_frame(frame, &META, &EngineConfig::default());
        record.unwrap().unwrap()
    }

    // ── Records ─────────────────────────────────────────────────────

    #[test]
    fn authentication_record() {
        let frame = mgmt_frame(11, &[0x01, 0x00, 0x01, 0x00, 0x01, 0x00]);
        let record = {
            let _guard = lock_counters();
            parse(&frame)
        };
        let json = render(&record);
        assert!(json.starts_with(r#"{"type":"authentication""#));
        assert!(json.contains(r#""algorithm":"shared_key""#));
        assert!(json.contains(r#""status":"FAILURE""#));
        assert!(json.contains(r#""transmitter":"B4:1E:52:AB:CD:EF""#));
        assert!(json.contains(r#""channel":1"#));
    }

    #[test]
    fn deauthentication_record() {
        let record = parse(&mgmt_frame(12, &[0x07, 0x00]));
        let json = render(&record);
        assert!(json.starts_with(r#"{"type":"deauthentication""#));
        assert!(json.contains(r#""reason_code":7"#));
    }

    #[test]
    fn control_record() {
        let record = parse(&control_frame(11, true));
        let json = render(&record);
        assert!(json.starts_with(r#"{"type":"rts""#));
        assert!(json.contains(r#""duration":44"#));
    }

    #[test]
    fn record_buffer_too_small() {
        let record = parse(&mgmt_frame(12, &[0x07, 0x00]));
        let mut buf = [0u8; 16];
        assert_eq!(serialize_record(&record, &mut buf), None);
    }

    // ── Worst-case size ─────────────────────────────────────────────

    #[test]
    fn hidden_ssid_record_fits_max_len() {
        let mut ssid = NameString::new();
        while ssid.push('\0').is_ok() {}
        let mac = MacAddress::BROADCAST.to_mac_string();
        let record = FrameRecord::ProbeResponse(BeaconFrame {
            destination: mac.clone(),
            transmitter: mac.clone(),
            bssid: mac,
            ssid,
            timestamp: u64::MAX,
            beacon_interval: u16::MAX,
            capabilities: Capabilities::from_raw(u16::MAX),
            channel: Some(u8::MAX),
            rsn: true,
            fingerprint: u32::MAX,
            meta: FrameMetadata {
                channel: u16::MAX,
                frequency: u16::MAX,
                signal: i8::MIN,
                mac_timestamp: u64::MAX,
                bad_fcs: true,
                wep: false,
            },
        });

        let mut buf = [0u8; MAX_RECORD_LEN];
        let len = serialize_record(&record, &mut buf).unwrap();
        assert!(len > 512, "escaped SSID should dominate, got {len}");
        assert!(buf[..len].windows(6).any(|w| w == b"\\u0000"));
    }

    #[test]
    fn parsed_hidden_ssid_beacon_fits_max_len() {
        let mut body = u64::MAX.to_le_bytes().to_vec();
        body.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        body.extend_from_slice(&[0, 32]);
        body.extend_from_slice(&[0; 32]);
        body.extend_from_slice(&[3, 1, 13]);
        let record = parse(&mgmt_frame(5, &body));

        let mut buf = [0u8; MAX_RECORD_LEN];
        assert!(serialize_record(&record, &mut buf).is_some());
    }

    // ── Counters ────────────────────────────────────────────────────

    #[test]
    fn counter_lines() {
        let mut buf = [0u8; 2048];
        let len = serialize_counters(counter_snapshots(), &mut buf).unwrap();
        let text = core::str::from_utf8(&buf[..len]).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        let first = r#"{"parser":"authentication","attempts":"#;
        assert!(lines[0].starts_with(first));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn counter_buffer_too_small() {
        let mut buf = [0u8; 64];
        assert_eq!(serialize_counters(counter_snapshots(), &mut buf), None);
    }
}
