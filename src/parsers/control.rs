/// RTS (11), CTS (12) and ACK (13) control frame parsers.
///
/// Control frames use a short header: [fc][duration][RA] plus [TA] for RTS.
/// There is no body.
use crate::error::DecodeError;
use crate::field::Field;
use crate::header::{FrameSubtype, MacAddress, MacHeader};
use crate::metadata::FrameMetadata;
use crate::parser::{FrameParser, ParseCounters};
use crate::record::{ControlFrame, FrameRecord, MacString};

const DURATION: Field<2> = Field::le(2);
const RECEIVER: Field<6> = Field::le(4);
const TRANSMITTER: Field<6> = Field::le(10);

static RTS_COUNTERS: ParseCounters = ParseCounters::new();
static CTS_COUNTERS: ParseCounters = ParseCounters::new();
static ACK_COUNTERS: ParseCounters = ParseCounters::new();

/// Duration and receiver, shared by all three subtypes.
fn decode_short(payload: &[u8], meta: &FrameMetadata) -> Result<ControlFrame, DecodeError> {
    let duration = DURATION.read(payload)?;
    let receiver = RECEIVER.read(payload)?;
    Ok(ControlFrame {
        receiver: MacAddress(receiver).to_mac_string(),
        transmitter: MacString::new(),
        duration,
        meta: *meta,
    })
}

pub struct RtsParser;

impl FrameParser for RtsParser {
    const NAME: &'static str = "rts";
    const SUBTYPE: FrameSubtype = FrameSubtype::Rts;

    type Record = ControlFrame;

    fn counters() -> &'static ParseCounters {
        &RTS_COUNTERS
    }

    fn decode(
        payload: &[u8],
        _header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<ControlFrame, DecodeError> {
        let transmitter = TRANSMITTER.read(payload)?;
        let mut frame = decode_short(payload, meta)?;
        frame.transmitter = MacAddress(transmitter).to_mac_string();
        Ok(frame)
    }

    fn wrap(record: ControlFrame) -> FrameRecord {
        FrameRecord::Rts(record)
    }
}

pub struct CtsParser;

impl FrameParser for CtsParser {
    const NAME: &'static str = "cts";
    const SUBTYPE: FrameSubtype = FrameSubtype::Cts;

    type Record = ControlFrame;

    fn counters() -> &'static ParseCounters {
        &CTS_COUNTERS
    }

    fn decode(
        payload: &[u8],
        _header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<ControlFrame, DecodeError> {
        decode_short(payload, meta)
    }

    fn wrap(record: ControlFrame) -> FrameRecord {
        FrameRecord::Cts(record)
    }
}

pub struct AckParser;

impl FrameParser for AckParser {
    const NAME: &'static str = "ack";
    const SUBTYPE: FrameSubtype = FrameSubtype::Ack;

    type Record = ControlFrame;

    fn counters() -> &'static ParseCounters {
        &ACK_COUNTERS
    }

    fn decode(
        payload: &[u8],
        _header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<ControlFrame, DecodeError> {
        decode_short(payload, meta)
    }

    fn wrap(record: ControlFrame) -> FrameRecord {
        FrameRecord::Ack(record)
    }
}
