/// 802.11 MAC header: frame control, addresses and sequence control.
///
/// The header is read once per frame and shared by every subtype parser.
/// Reading is tolerant: any field the buffer does not cover is `None`, so
/// parsers decide for themselves which header fields they require.
use core::fmt;

use crate::field::Field;
use crate::record::MacString;

/// Length of the management/data MAC header without address 4 or QoS control.
pub const MAC_HEADER_LEN: usize = 24;

const FRAME_CONTROL: Field<2> = Field::le(0);
const DURATION: Field<2> = Field::le(2);
const ADDRESS_1: Field<6> = Field::le(4);
const ADDRESS_2: Field<6> = Field::le(10);
const ADDRESS_3: Field<6> = Field::le(16);
const SEQUENCE_CONTROL: Field<2> = Field::le(22);

/// A 6-byte IEEE MAC address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub const BROADCAST: MacAddress = MacAddress([0xFF; 6]);

    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// Group bit set (multicast or broadcast)
    pub fn is_multicast(&self) -> bool {
        self.0[0] & 0x01 != 0
    }

    /// Locally administered bit set, as used by randomized client MACs
    pub fn is_locally_administered(&self) -> bool {
        self.0[0] & 0x02 != 0
    }

    /// Render as "AA:BB:CC:DD:EE:FF".
    pub fn to_mac_string(&self) -> MacString {
        let mut buf = MacString::new();
        format_mac(&self.0, &mut buf);
        buf
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.0;
        write!(
            f,
            "{:02X}:{:02X}:{:02X}:{:02X}:{:02X}:{:02X}",
            m[0], m[1], m[2], m[3], m[4], m[5]
        )
    }
}

/// Format a 6-byte MAC address into "AA:BB:CC:DD:EE:FF" string
pub fn format_mac(mac: &[u8; 6], buf: &mut MacString) {
    use core::fmt::Write;
    let _ = write!(buf, "{}", MacAddress(*mac));
}

/// Render an optional address, falling back to the empty string.
pub fn mac_or_empty(addr: Option<MacAddress>) -> MacString {
    addr.map(|a| a.to_mac_string()).unwrap_or_default()
}

/// Frame type (frame control bits 2-3)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    Management,
    Control,
    Data,
    Extension,
}

impl FrameKind {
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => FrameKind::Management,
            1 => FrameKind::Control,
            2 => FrameKind::Data,
            _ => FrameKind::Extension,
        }
    }
}

/// Frame subtype, qualified by its frame type.
///
/// Only subtypes with a defined meaning are listed; reserved codes have no
/// variant and never reach the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSubtype {
    AssociationRequest,
    AssociationResponse,
    ReassociationRequest,
    ReassociationResponse,
    ProbeRequest,
    ProbeResponse,
    TimingAdvertisement,
    Beacon,
    Atim,
    Disassociation,
    Authentication,
    Deauthentication,
    Action,
    ActionNoAck,

    ControlWrapper,
    BlockAckRequest,
    BlockAck,
    PsPoll,
    Rts,
    Cts,
    Ack,
    CfEnd,
    CfEndCfAck,

    /// Any of the 16 data subtypes; the exact code stays in [`FrameControl`].
    Data,
}

impl FrameSubtype {
    /// Map a (type, 4-bit subtype) pair to a known subtype.
    pub fn from_raw(kind: FrameKind, code: u8) -> Option<Self> {
        use FrameSubtype::*;
        let subtype = match (kind, code & 0x0F) {
            (FrameKind::Management, 0) => AssociationRequest,
            (FrameKind::Management, 1) => AssociationResponse,
            (FrameKind::Management, 2) => ReassociationRequest,
            (FrameKind::Management, 3) => ReassociationResponse,
            (FrameKind::Management, 4) => ProbeRequest,
            (FrameKind::Management, 5) => ProbeResponse,
            (FrameKind::Management, 6) => TimingAdvertisement,
            (FrameKind::Management, 8) => Beacon,
            (FrameKind::Management, 9) => Atim,
            (FrameKind::Management, 10) => Disassociation,
            (FrameKind::Management, 11) => Authentication,
            (FrameKind::Management, 12) => Deauthentication,
            (FrameKind::Management, 13) => Action,
            (FrameKind::Management, 14) => ActionNoAck,
            (FrameKind::Control, 7) => ControlWrapper,
            (FrameKind::Control, 8) => BlockAckRequest,
            (FrameKind::Control, 9) => BlockAck,
            (FrameKind::Control, 10) => PsPoll,
            (FrameKind::Control, 11) => Rts,
            (FrameKind::Control, 12) => Cts,
            (FrameKind::Control, 13) => Ack,
            (FrameKind::Control, 14) => CfEnd,
            (FrameKind::Control, 15) => CfEndCfAck,
            (FrameKind::Data, _) => Data,
            _ => return None,
        };
        Some(subtype)
    }

    pub fn kind(&self) -> FrameKind {
        use FrameSubtype::*;
        match self {
            ControlWrapper | BlockAckRequest | BlockAck | PsPoll | Rts | Cts | Ack | CfEnd
            | CfEndCfAck => FrameKind::Control,
            Data => FrameKind::Data,
            _ => FrameKind::Management,
        }
    }
}

/// Decoded frame control field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameControl {
    pub protocol_version: u8,
    pub kind: FrameKind,
    /// Raw 4-bit subtype code
    pub subtype_code: u8,
    pub to_ds: bool,
    pub from_ds: bool,
    pub more_fragments: bool,
    pub retry: bool,
    pub power_management: bool,
    pub more_data: bool,
    pub protected: bool,
    pub order: bool,
}

impl FrameControl {
    pub fn from_raw(fc: u16) -> Self {
        let [fc0, fc1] = fc.to_le_bytes();
        Self {
            protocol_version: fc0 & 0x03,
            kind: FrameKind::from_bits(fc0 >> 2),
            subtype_code: (fc0 >> 4) & 0x0F,
            to_ds: fc1 & 0x01 != 0,
            from_ds: fc1 & 0x02 != 0,
            more_fragments: fc1 & 0x04 != 0,
            retry: fc1 & 0x08 != 0,
            power_management: fc1 & 0x10 != 0,
            more_data: fc1 & 0x20 != 0,
            protected: fc1 & 0x40 != 0,
            order: fc1 & 0x80 != 0,
        }
    }

    pub fn subtype(&self) -> Option<FrameSubtype> {
        FrameSubtype::from_raw(self.kind, self.subtype_code)
    }
}

/// The MAC header fields present in a captured buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MacHeader {
    pub frame_control: FrameControl,
    pub duration: Option<u16>,
    /// Receiver / destination
    pub address1: Option<MacAddress>,
    /// Transmitter / source
    pub address2: Option<MacAddress>,
    pub address3: Option<MacAddress>,
    pub sequence_control: Option<u16>,
}

impl MacHeader {
    /// Read the header from the start of `frame`.
    ///
    /// Returns `None` only when the 2-byte frame control field is missing.
    pub fn parse(frame: &[u8]) -> Option<Self> {
        let frame_control = FrameControl::from_raw(FRAME_CONTROL.read(frame).ok()?);
        Some(Self {
            frame_control,
            duration: DURATION.read(frame).ok(),
            address1: ADDRESS_1.read(frame).ok().map(MacAddress),
            address2: ADDRESS_2.read(frame).ok().map(MacAddress),
            address3: ADDRESS_3.read(frame).ok().map(MacAddress),
            sequence_control: SEQUENCE_CONTROL.read(frame).ok(),
        })
    }

    pub fn subtype(&self) -> Option<FrameSubtype> {
        self.frame_control.subtype()
    }

    /// Address 1 as a string, empty when absent.
    pub fn destination(&self) -> MacString {
        mac_or_empty(self.address1)
    }

    /// Address 2 as a string, empty when absent.
    pub fn transmitter(&self) -> MacString {
        mac_or_empty(self.address2)
    }

    /// Address 3 as a string, empty when absent.
    pub fn bssid(&self) -> MacString {
        mac_or_empty(self.address3)
    }

    /// 12-bit sequence number
    pub fn sequence_number(&self) -> Option<u16> {
        self.sequence_control.map(|sc| sc >> 4)
    }

    /// 4-bit fragment number
    pub fn fragment_number(&self) -> Option<u8> {
        self.sequence_control.map(|sc| (sc & 0x0F) as u8)
    }
}
