/// Deauthentication (subtype 12) and disassociation (subtype 10) parsers.
///
/// Both bodies start with a 2-byte reason code. Reason codes are an
/// open list, so unknown values are labeled rather than rejected. These are
/// the frames deauth-flood detection counts.
use crate::codes::reason_label;
use crate::error::DecodeError;
use crate::field::Field;
use crate::header::{FrameSubtype, MacHeader, MAC_HEADER_LEN};
use crate::metadata::FrameMetadata;
use crate::parser::{FrameParser, ParseCounters};
use crate::record::{FrameRecord, ReasonFrame};

const REASON_CODE: Field<2> = Field::le(MAC_HEADER_LEN);

static DEAUTH_COUNTERS: ParseCounters = ParseCounters::new();
static DISASSOC_COUNTERS: ParseCounters = ParseCounters::new();

fn decode_reason(
    payload: &[u8],
    header: &MacHeader,
    meta: &FrameMetadata,
) -> Result<ReasonFrame, DecodeError> {
    let reason_code = REASON_CODE.read(payload)?;
    Ok(ReasonFrame {
        destination: header.destination(),
        transmitter: header.transmitter(),
        bssid: header.bssid(),
        reason_code,
        reason: reason_label(reason_code),
        meta: *meta,
    })
}

pub struct DeauthenticationParser;

impl FrameParser for DeauthenticationParser {
    const NAME: &'static str = "deauthentication";
    const SUBTYPE: FrameSubtype = FrameSubtype::Deauthentication;

    type Record = ReasonFrame;

    fn counters() -> &'static ParseCounters {
        &DEAUTH_COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<ReasonFrame, DecodeError> {
        decode_reason(payload, header, meta)
    }

    fn wrap(record: ReasonFrame) -> FrameRecord {
        FrameRecord::Deauthentication(record)
    }
}

pub struct DisassociationParser;

impl FrameParser for DisassociationParser {
    const NAME: &'static str = "disassociation";
    const SUBTYPE: FrameSubtype = FrameSubtype::Disassociation;

    type Record = ReasonFrame;

    fn counters() -> &'static ParseCounters {
        &DISASSOC_COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<ReasonFrame, DecodeError> {
        decode_reason(payload, header, meta)
    }

    fn wrap(record: ReasonFrame) -> FrameRecord {
        FrameRecord::Disassociation(record)
    }
}
