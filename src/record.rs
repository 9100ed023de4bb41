/// Decoded frame records handed to detection logic.
///
/// Records own all their data (no borrow of the capture buffer) and use
/// `heapless` strings, so they can be queued or serialized freely.
use heapless::String;
use serde::Serialize;

use crate::metadata::FrameMetadata;

/// Maximum length for MAC address strings ("AA:BB:CC:DD:EE:FF")
pub type MacString = String<18>;

/// Maximum length for SSID strings
pub type NameString = String<33>;

/// Decoded code labels and error reasons
pub type Label = String<64>;

/// Authentication algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthAlgorithm {
    OpenSystem,
    SharedKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthenticationFrame {
    pub algorithm: AuthAlgorithm,
    /// Raw wire value. The `status` label renders unknown codes signed,
    /// so 0x8000 reads "Invalid/Unknown (-32768)".
    pub status_code: u16,
    pub status: Label,
    pub transaction_sequence: u16,
    pub destination: MacString,
    pub transmitter: MacString,
    pub meta: FrameMetadata,
}

/// Deauthentication and disassociation share a body: one reason code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasonFrame {
    pub destination: MacString,
    pub transmitter: MacString,
    pub bssid: MacString,
    pub reason_code: u16,
    pub reason: Label,
    pub meta: FrameMetadata,
}

/// Capability information bits that detection rules look at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    pub raw: u16,
    pub ess: bool,
    pub ibss: bool,
    pub privacy: bool,
    pub short_preamble: bool,
}

impl Capabilities {
    pub fn from_raw(raw: u16) -> Self {
        Self {
            raw,
            ess: raw & 0x0001 != 0,
            ibss: raw & 0x0002 != 0,
            privacy: raw & 0x0010 != 0,
            short_preamble: raw & 0x0020 != 0,
        }
    }
}

/// Beacons and probe responses share a body layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BeaconFrame {
    pub destination: MacString,
    pub transmitter: MacString,
    pub bssid: MacString,
    pub ssid: NameString,
    pub timestamp: u64,
    /// Beacon interval in time units (1 TU = 1024 µs)
    pub beacon_interval: u16,
    pub capabilities: Capabilities,
    /// Channel advertised in the DS Parameter Set element
    pub channel: Option<u8>,
    pub rsn: bool,
    pub fingerprint: u32,
    pub meta: FrameMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeRequestFrame {
    pub destination: MacString,
    pub transmitter: MacString,
    pub ssid: NameString,
    /// Wildcard SSID: the client asks any network to answer
    pub broadcast: bool,
    pub meta: FrameMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssociationRequestFrame {
    pub destination: MacString,
    pub transmitter: MacString,
    pub ssid: NameString,
    pub capabilities: Capabilities,
    pub listen_interval: u16,
    /// Reassociation only: the AP the station is leaving
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_ap: Option<MacString>,
    pub meta: FrameMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssociationResponseFrame {
    pub destination: MacString,
    pub transmitter: MacString,
    pub capabilities: Capabilities,
    pub status_code: u16,
    pub status: Label,
    pub association_id: u16,
    pub meta: FrameMetadata,
}

/// RTS, CTS and ACK. CTS and ACK carry no transmitter address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlFrame {
    pub receiver: MacString,
    pub transmitter: MacString,
    pub duration: u16,
    pub meta: FrameMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataFrame {
    pub destination: MacString,
    pub source: MacString,
    pub bssid: MacString,
    pub to_ds: bool,
    pub from_ds: bool,
    pub protected: bool,
    /// Null-function subtypes carry no body (power-save signalling)
    pub null_function: bool,
    pub sequence_number: u16,
    pub fragment_number: u8,
    /// QoS subtypes only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<u8>,
    pub body_len: u16,
    /// From the LLC/SNAP header of unprotected bodies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ethertype: Option<u16>,
    pub meta: FrameMetadata,
}

/// One decoded frame, tagged by subtype
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FrameRecord {
    Authentication(AuthenticationFrame),
    Deauthentication(ReasonFrame),
    Disassociation(ReasonFrame),
    Beacon(BeaconFrame),
    ProbeRequest(ProbeRequestFrame),
    ProbeResponse(BeaconFrame),
    AssociationRequest(AssociationRequestFrame),
    AssociationResponse(AssociationResponseFrame),
    ReassociationRequest(AssociationRequestFrame),
    ReassociationResponse(AssociationResponseFrame),
    Rts(ControlFrame),
    Cts(ControlFrame),
    Ack(ControlFrame),
    Data(DataFrame),
}

impl FrameRecord {
    pub fn meta(&self) -> &FrameMetadata {
        match self {
            FrameRecord::Authentication(f) => &f.meta,
            FrameRecord::Deauthentication(f) | FrameRecord::Disassociation(f) => &f.meta,
            FrameRecord::Beacon(f) | FrameRecord::ProbeResponse(f) => &f.meta,
            FrameRecord::ProbeRequest(f) => &f.meta,
            FrameRecord::AssociationRequest(f) | FrameRecord::ReassociationRequest(f) => &f.meta,
            FrameRecord::AssociationResponse(f) | FrameRecord::ReassociationResponse(f) => &f.meta,
            FrameRecord::Rts(f) | FrameRecord::Cts(f) | FrameRecord::Ack(f) => &f.meta,
            FrameRecord::Data(f) => &f.meta,
        }
    }
}
