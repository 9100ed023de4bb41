/// Beacon (subtype 8) and probe response (subtype 5) parsers.
///
/// Body layout after the 24-byte header:
///   [timestamp u64][beacon interval u16][capability u16] [elements...]
///
/// Only the fixed fields can make a frame malformed. The element list is
/// decoded best-effort.
use crate::elements;
use crate::error::DecodeError;
use crate::field::Field;
use crate::header::{FrameSubtype, MacHeader, MAC_HEADER_LEN};
use crate::metadata::FrameMetadata;
use crate::parser::{FrameParser, ParseCounters};
use crate::record::{BeaconFrame, Capabilities, FrameRecord};

const TIMESTAMP: Field<8> = Field::le(MAC_HEADER_LEN);
const BEACON_INTERVAL: Field<2> = Field::le(MAC_HEADER_LEN + 8);
const CAPABILITY: Field<2> = Field::le(MAC_HEADER_LEN + 10);
const ELEMENTS_START: usize = CAPABILITY.end();

static BEACON_COUNTERS: ParseCounters = ParseCounters::new();
static PROBE_RESPONSE_COUNTERS: ParseCounters = ParseCounters::new();

fn decode_beacon(
    payload: &[u8],
    header: &MacHeader,
    meta: &FrameMetadata,
) -> Result<BeaconFrame, DecodeError> {
    let timestamp = TIMESTAMP.read(payload)?;
    let beacon_interval = BEACON_INTERVAL.read(payload)?;
    let capability = CAPABILITY.read(payload)?;

    let summary = elements::summarize(payload.get(ELEMENTS_START..).unwrap_or(&[]));
    let ssid = elements::frame_ssid(payload).unwrap_or(summary.ssid);

    Ok(BeaconFrame {
        destination: header.destination(),
        transmitter: header.transmitter(),
        bssid: header.bssid(),
        ssid,
        timestamp,
        beacon_interval,
        capabilities: Capabilities::from_raw(capability),
        channel: summary.channel,
        rsn: summary.rsn,
        fingerprint: summary.fingerprint,
        meta: *meta,
    })
}

pub struct BeaconParser;

impl FrameParser for BeaconParser {
    const NAME: &'static str = "beacon";
    const SUBTYPE: FrameSubtype = FrameSubtype::Beacon;

    type Record = BeaconFrame;

    fn counters() -> &'static ParseCounters {
        &BEACON_COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<BeaconFrame, DecodeError> {
        decode_beacon(payload, header, meta)
    }

    fn wrap(record: BeaconFrame) -> FrameRecord {
        FrameRecord::Beacon(record)
    }
}

pub struct ProbeResponseParser;

impl FrameParser for ProbeResponseParser {
    const NAME: &'static str = "probe_response";
    const SUBTYPE: FrameSubtype = FrameSubtype::ProbeResponse;

    type Record = BeaconFrame;

    fn counters() -> &'static ParseCounters {
        &PROBE_RESPONSE_COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<BeaconFrame, DecodeError> {
        decode_beacon(payload, header, meta)
    }

    fn wrap(record: BeaconFrame) -> FrameRecord {
        FrameRecord::ProbeResponse(record)
    }
}
