/// Data frame parser (all 16 data subtypes).
///
/// The header grows with the frame: address 4 follows sequence control when
/// both DS bits are set, QoS subtypes add a 2-byte QoS control field, and
/// QoS frames with the order bit carry a 4-byte HT control field. Address
/// roles depend on the ToDS/FromDS bits.
use crate::error::DecodeError;
use crate::field::{self, Field};
use crate::header::{mac_or_empty, FrameSubtype, MacAddress, MacHeader, MAC_HEADER_LEN};
use crate::metadata::FrameMetadata;
use crate::parser::{FrameParser, ParseCounters};
use crate::record::{DataFrame, FrameRecord};

const SEQUENCE_CONTROL: Field<2> = Field::le(22);
const ADDRESS_4: Field<6> = Field::le(MAC_HEADER_LEN);

const QOS_SUBTYPE_BIT: u8 = 0x08;
const NULL_SUBTYPE_BIT: u8 = 0x04;
const QOS_CONTROL_LEN: usize = 2;
const HT_CONTROL_LEN: usize = 4;

/// LLC header announcing a SNAP extension (DSAP, SSAP, control)
const LLC_SNAP: [u8; 3] = [0xAA, 0xAA, 0x03];
const SNAP_HEADER_LEN: usize = 8;

static COUNTERS: ParseCounters = ParseCounters::new();

pub struct DataParser;

impl FrameParser for DataParser {
    const NAME: &'static str = "data";
    const SUBTYPE: FrameSubtype = FrameSubtype::Data;

    type Record = DataFrame;

    fn counters() -> &'static ParseCounters {
        &COUNTERS
    }

    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<DataFrame, DecodeError> {
        let fc = header.frame_control;
        let qos = fc.subtype_code & QOS_SUBTYPE_BIT != 0;
        let null_function = fc.subtype_code & NULL_SUBTYPE_BIT != 0;

        let sequence_control = SEQUENCE_CONTROL.read(payload)?;

        let mut offset = MAC_HEADER_LEN;
        let address4 = if fc.to_ds && fc.from_ds {
            offset = ADDRESS_4.end();
            Some(MacAddress(ADDRESS_4.read(payload)?))
        } else {
            None
        };

        let tid = if qos {
            let qos_control = Field::<2>::le(offset).read(payload)?;
            offset += QOS_CONTROL_LEN;
            if fc.order {
                field::validate_bounds(payload, offset, HT_CONTROL_LEN)?;
                offset += HT_CONTROL_LEN;
            }
            Some((qos_control & 0x000F) as u8)
        } else {
            None
        };

        let body = field::slice(payload, offset, payload.len().saturating_sub(offset))?;

        let ethertype = if !fc.protected && body.starts_with(&LLC_SNAP) {
            Field::<2>::be(SNAP_HEADER_LEN - 2).read(body).ok()
        } else {
            None
        };

        let (destination, source, bssid) = match (fc.to_ds, fc.from_ds) {
            (false, false) => (header.address1, header.address2, header.address3),
            (false, true) => (header.address1, header.address3, header.address2),
            (true, false) => (header.address3, header.address2, header.address1),
            (true, true) => (header.address3, address4, None),
        };

        Ok(DataFrame {
            destination: mac_or_empty(destination),
            source: mac_or_empty(source),
            bssid: mac_or_empty(bssid),
            to_ds: fc.to_ds,
            from_ds: fc.from_ds,
            protected: fc.protected,
            null_function,
            sequence_number: sequence_control >> 4,
            fragment_number: (sequence_control & 0x0F) as u8,
            tid,
            body_len: u16::try_from(body.len()).unwrap_or(u16::MAX),
            ethertype,
            meta: *meta,
        })
    }

    fn wrap(record: DataFrame) -> FrameRecord {
        FrameRecord::Data(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::tests::{BSSID, DEST, SRC};

    const META: FrameMetadata = FrameMetadata::new(6, 2437, -55);
    const ADDR4: [u8; 6] = [0x02, 0x00, 0x00, 0x00, 0x00, 0x04];

    fn data_frame(subtype: u8, flags: u8, extra_header: &[u8], body: &[u8]) -> Vec<u8> {
        let mut f = vec![(subtype << 4) | 0x08, flags, 0x00, 0x00];
        f.extend_from_slice(&DEST);
        f.extend_from_slice(&SRC);
        f.extend_from_slice(&BSSID);
        f.extend_from_slice(&[0x31, 0x04]);
        f.extend_from_slice(extra_header);
        f.extend_from_slice(body);
        f
    }

    // LLC/SNAP with EtherType IPv4, then the start of an IPv4 header
    const IPV4_BODY: &[u8] = &[
        0xAA, 0xAA, 0x03, 0x00, 0x00, 0x00, 0x08, 0x00, 0x45, 0x00,
    ];

    fn parse(frame: &[u8]) -> Result<DataFrame, crate::error::MalformedFrame> {
        let header = MacHeader::parse(frame).unwrap();
        DataParser::parse(frame, &header, &META)
    }

    #[test]
    fn from_ap_plain_data() {
        let frame = data_frame(0, 0x02, &[], IPV4_BODY);
        let data = parse(&frame).unwrap();
        assert_eq!(data.destination.as_str(), "11:22:33:44:55:66");
        assert_eq!(data.bssid.as_str(), "B4:1E:52:AB:CD:EF");
        assert_eq!(data.source.as_str(), "00:1C:27:01:02:03");
        assert_eq!(data.sequence_number, 0x043);
        assert_eq!(data.fragment_number, 1);
        assert_eq!(data.ethertype, Some(0x0800));
        assert_eq!(data.body_len, IPV4_BODY.len() as u16);
        assert_eq!(data.tid, None);
    }

    #[test]
    fn to_ap_roles() {
        let frame = data_frame(0, 0x01, &[], IPV4_BODY);
        let data = parse(&frame).unwrap();
        assert_eq!(data.bssid.as_str(), "11:22:33:44:55:66");
        assert_eq!(data.source.as_str(), "B4:1E:52:AB:CD:EF");
        assert_eq!(data.destination.as_str(), "00:1C:27:01:02:03");
    }

    #[test]
    fn ethertype_is_big_endian() {
        let body = [0xAA, 0xAA, 0x03, 0x00, 0x00, 0x00, 0x88, 0x8E];
        let data = parse(&data_frame(0, 0x00, &[], &body)).unwrap();
        assert_eq!(data.ethertype, Some(0x888E));
    }

    #[test]
    fn protected_body_is_opaque() {
        let data = parse(&data_frame(0, 0x42, &[], IPV4_BODY)).unwrap();
        assert!(data.protected);
        assert_eq!(data.ethertype, None);
    }

    #[test]
    fn qos_data_tid() {
        let frame = data_frame(8, 0x02, &[0x05, 0x00], IPV4_BODY);
        let data = parse(&frame).unwrap();
        assert_eq!(data.tid, Some(5));
        assert_eq!(data.ethertype, Some(0x0800));
    }

    #[test]
    fn qos_with_ht_control() {
        let mut extra = vec![0x06, 0x00];
        extra.extend_from_slice(&[0, 0, 0, 0]);
        let frame = data_frame(8, 0x82, &extra, IPV4_BODY);
        let data = parse(&frame).unwrap();
        assert_eq!(data.tid, Some(6));
        assert_eq!(data.ethertype, Some(0x0800));
    }

    #[test]
    fn wds_uses_address_four() {
        let frame = data_frame(0, 0x03, &ADDR4, IPV4_BODY);
        let data = parse(&frame).unwrap();
        assert_eq!(data.source.as_str(), "02:00:00:00:00:04");
        assert_eq!(data.destination.as_str(), "00:1C:27:01:02:03");
        assert_eq!(data.bssid.as_str(), "");
    }

    #[test]
    fn wds_missing_address_four_is_malformed() {
        let frame = data_frame(0, 0x03, &ADDR4[..3], &[]);
        assert_eq!(parse(&frame).unwrap_err().reason(), "Payload out of bounds");
    }

    #[test]
    fn qos_null_function() {
        let frame = data_frame(12, 0x01, &[0x00, 0x00], &[]);
        let data = parse(&frame).unwrap();
        assert!(data.null_function);
        assert_eq!(data.body_len, 0);
        assert_eq!(data.tid, Some(0));
    }

    #[test]
    fn qos_missing_control_is_malformed() {
        let frame = data_frame(8, 0x00, &[0x05], &[]);
        assert!(parse(&frame).is_err());
    }

    #[test]
    fn truncated_header_is_malformed() {
        let frame = data_frame(0, 0x00, &[], &[]);
        assert!(parse(&frame[..22]).is_err());
    }
}
