/// Probe request parser (management subtype 4).
///
/// The body is only an element list, so the frame is structurally sound as
/// soon as the full header is present.
use crate::elements;
use crate::error::DecodeError;
use crate::field::validate_bounds;
use crate::header::{FrameSubtype, MacHeader, MAC_HEADER_LEN};
use crate::metadata::FrameMetadata;
use crate::parser::{FrameParser, ParseCounters};
use crate::record::{FrameRecord, ProbeRequestFrame};

static COUNTERS: ParseCounters = ParseCounters::new();

pub struct ProbeRequestParser;

impl FrameParser for ProbeRequestParser {
    const NAME: &'static str = "probe_request";
    const SUBTYPE: FrameSubtype = FrameSubtype::ProbeRequest;

    type Record = ProbeRequestFrame;

    fn counters() -> &'static ParseCounters {
        &COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<ProbeRequestFrame, DecodeError> {
        validate_bounds(payload, 0, MAC_HEADER_LEN)?;

        let ssid = elements::frame_ssid(payload).unwrap_or_else(|| {
            elements::summarize(payload.get(MAC_HEADER_LEN..).unwrap_or(&[])).ssid
        });

        Ok(ProbeRequestFrame {
            destination: header.destination(),
            transmitter: header.transmitter(),
            broadcast: ssid.is_empty(),
            ssid,
            meta: *meta,
        })
    }

    fn wrap(record: ProbeRequestFrame) -> FrameRecord {
        FrameRecord::ProbeRequest(record)
    }
}
