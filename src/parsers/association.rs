/// Association request (0), association response (1), reassociation
/// request (2) and reassociation response (3) parsers.
///
/// Request bodies: [capability u16][listen interval u16] ([current AP 6B]
/// for reassociation) [elements...]. Both response bodies: [capability u16]
/// [status u16][association ID u16] [elements...].
use crate::codes::status_label;
use crate::elements;
use crate::error::DecodeError;
use crate::field::Field;
use crate::header::{FrameSubtype, MacAddress, MacHeader, MAC_HEADER_LEN};
use crate::metadata::FrameMetadata;
use crate::parser::{FrameParser, ParseCounters};
use crate::record::{AssociationRequestFrame, AssociationResponseFrame, Capabilities, FrameRecord};

const CAPABILITY: Field<2> = Field::le(MAC_HEADER_LEN);
const LISTEN_INTERVAL: Field<2> = Field::le(MAC_HEADER_LEN + 2);
const CURRENT_AP: Field<6> = Field::le(MAC_HEADER_LEN + 4);
const STATUS_CODE: Field<2> = Field::le(MAC_HEADER_LEN + 2);
const ASSOCIATION_ID: Field<2> = Field::le(MAC_HEADER_LEN + 4);

/// The two top bits of the AID field are always set on the wire
const AID_MASK: u16 = 0x3FFF;

static REQUEST_COUNTERS: ParseCounters = ParseCounters::new();
static RESPONSE_COUNTERS: ParseCounters = ParseCounters::new();
static REASSOC_COUNTERS: ParseCounters = ParseCounters::new();
static REASSOC_RESPONSE_COUNTERS: ParseCounters = ParseCounters::new();

fn decode_response(
    payload: &[u8],
    header: &MacHeader,
    meta: &FrameMetadata,
) -> Result<AssociationResponseFrame, DecodeError> {
    let capability = CAPABILITY.read(payload)?;
    let status_code = STATUS_CODE.read(payload)?;
    let association_id = ASSOCIATION_ID.read(payload)? & AID_MASK;

    Ok(AssociationResponseFrame {
        destination: header.destination(),
        transmitter: header.transmitter(),
        capabilities: Capabilities::from_raw(capability),
        status_code,
        status: status_label(status_code),
        association_id,
        meta: *meta,
    })
}

pub struct AssociationRequestParser;

impl FrameParser for AssociationRequestParser {
    const NAME: &'static str = "association_request";
    const SUBTYPE: FrameSubtype = FrameSubtype::AssociationRequest;

    type Record = AssociationRequestFrame;

    fn counters() -> &'static ParseCounters {
        &REQUEST_COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<AssociationRequestFrame, DecodeError> {
        let capability = CAPABILITY.read(payload)?;
        let listen_interval = LISTEN_INTERVAL.read(payload)?;
        let summary = elements::summarize(payload.get(LISTEN_INTERVAL.end()..).unwrap_or(&[]));

        Ok(AssociationRequestFrame {
            destination: header.destination(),
            transmitter: header.transmitter(),
            ssid: summary.ssid,
            capabilities: Capabilities::from_raw(capability),
            listen_interval,
            current_ap: None,
            meta: *meta,
        })
    }

    fn wrap(record: AssociationRequestFrame) -> FrameRecord {
        FrameRecord::AssociationRequest(record)
    }
}

pub struct ReassociationRequestParser;

impl FrameParser for ReassociationRequestParser {
    const NAME: &'static str = "reassociation_request";
    const SUBTYPE: FrameSubtype = FrameSubtype::ReassociationRequest;

    type Record = AssociationRequestFrame;

    fn counters() -> &'static ParseCounters {
        &REASSOC_COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<AssociationRequestFrame, DecodeError> {
        let capability = CAPABILITY.read(payload)?;
        let listen_interval = LISTEN_INTERVAL.read(payload)?;
        let current_ap = CURRENT_AP.read(payload)?;
        let summary = elements::summarize(payload.get(CURRENT_AP.end()..).unwrap_or(&[]));

        Ok(AssociationRequestFrame {
            destination: header.destination(),
            transmitter: header.transmitter(),
            ssid: summary.ssid,
            capabilities: Capabilities::from_raw(capability),
            listen_interval,
            current_ap: Some(MacAddress(current_ap).to_mac_string()),
            meta: *meta,
        })
    }

    fn wrap(record: AssociationRequestFrame) -> FrameRecord {
        FrameRecord::ReassociationRequest(record)
    }
}

pub struct AssociationResponseParser;

impl FrameParser for AssociationResponseParser {
    const NAME: &'static str = "association_response";
    const SUBTYPE: FrameSubtype = FrameSubtype::AssociationResponse;

    type Record = AssociationResponseFrame;

    fn counters() -> &'static ParseCounters {
        &RESPONSE_COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<AssociationResponseFrame, DecodeError> {
        decode_response(payload, header, meta)
    }

    fn wrap(record: AssociationResponseFrame) -> FrameRecord {
        FrameRecord::AssociationResponse(record)
    }
}

pub struct ReassociationResponseParser;

impl FrameParser for ReassociationResponseParser {
    const NAME: &'static str = "reassociation_response";
    const SUBTYPE: FrameSubtype = FrameSubtype::ReassociationResponse;

    type Record = AssociationResponseFrame;

    fn counters() -> &'static ParseCounters {
        &REASSOC_RESPONSE_COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<AssociationResponseFrame, DecodeError> {
        decode_response(payload, header, meta)
    }

    fn wrap(record: AssociationResponseFrame) -> FrameRecord {
        FrameRecord::ReassociationResponse(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MalformedFrame;
    use crate::header::tests::mgmt_frame;

    const META: FrameMetadata = FrameMetadata::new(6, 2437, -48);

    fn parse<P: FrameParser>(frame: &[u8]) -> Result<P::Record, MalformedFrame> {
        let header = MacHeader::parse(frame).unwrap();
        P::parse(frame, &header, &META)
    }

    // ── Requests ────────────────────────────────────────────────────

    #[test]
    fn association_request() {
        let mut body = vec![0x31, 0x04, 0x0A, 0x00, 0, 4];
        body.extend_from_slice(b"home");
        let frame = mgmt_frame(0, &body);
        let req = parse::<AssociationRequestParser>(&frame).unwrap();
        assert_eq!(req.capabilities.raw, 0x0431);
        assert_eq!(req.listen_interval, 10);
        assert_eq!(req.ssid.as_str(), "home");
        assert_eq!(req.current_ap, None);
    }

    #[test]
    fn association_request_missing_listen_interval() {
        let frame = mgmt_frame(0, &[0x31, 0x04, 0x0A]);
        let err = parse::<AssociationRequestParser>(&frame).unwrap_err();
        assert_eq!(err.reason(), "Payload out of bounds");
    }

    #[test]
    fn reassociation_request_current_ap() {
        let mut body = vec![0x01, 0x00, 0x05, 0x00];
        body.extend_from_slice(&[0xAA, 0xBB, 0xCC, 0x00, 0x11, 0x22]);
        body.extend_from_slice(&[0, 3, b'l', b'a', b'b']);
        let frame = mgmt_frame(2, &body);
        let req = parse::<ReassociationRequestParser>(&frame).unwrap();
        assert_eq!(req.current_ap.as_deref(), Some("AA:BB:CC:00:11:22"));
        assert_eq!(req.ssid.as_str(), "lab");
    }

    #[test]
    fn reassociation_request_truncated_current_ap() {
        let frame = mgmt_frame(2, &[0x01, 0x00, 0x05, 0x00, 0xAA, 0xBB]);
        assert!(parse::<ReassociationRequestParser>(&frame).is_err());
    }

    // ── Responses ───────────────────────────────────────────────────

    #[test]
    fn association_response() {
        let frame = mgmt_frame(1, &[0x11, 0x00, 0x00, 0x00, 0x01, 0xC0]);
        let resp = parse::<AssociationResponseParser>(&frame).unwrap();
        assert_eq!(resp.status.as_str(), "SUCCESS");
        assert_eq!(resp.association_id, 1);
    }

    #[test]
    fn association_response_unknown_status() {
        let frame = mgmt_frame(1, &[0x11, 0x00, 0x11, 0x00, 0x00, 0xC0]);
        let resp = parse::<AssociationResponseParser>(&frame).unwrap();
        assert_eq!(resp.status_code, 17);
        assert_eq!(resp.status.as_str(), "Invalid/Unknown (17)");
    }

    #[test]
    fn reassociation_response_shares_layout() {
        let frame = mgmt_frame(3, &[0x11, 0x04, 0x00, 0x00, 0x2A, 0xC0]);
        let resp = parse::<ReassociationResponseParser>(&frame).unwrap();
        assert_eq!(resp.capabilities.raw, 0x0411);
        assert_eq!(resp.status.as_str(), "SUCCESS");
        assert_eq!(resp.association_id, 42);
        let record = ReassociationResponseParser::wrap(resp);
        assert!(matches!(record, FrameRecord::ReassociationResponse(_)));
    }

    #[test]
    fn reassociation_response_truncated_aid() {
        let frame = mgmt_frame(3, &[0x11, 0x04, 0x00, 0x00, 0x2A]);
        let err = parse::<ReassociationResponseParser>(&frame).unwrap_err();
        assert_eq!(err.parser(), "reassociation_response");
        assert_eq!(err.reason(), "Payload out of bounds");
    }
}
