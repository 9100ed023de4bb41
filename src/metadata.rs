use serde::Serialize;

/// Per-frame radio metadata supplied by the capture layer.
///
/// Carried unchanged into every frame record. Nothing in this crate
/// validates or alters it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FrameMetadata {
    /// Channel number the frame was captured on
    pub channel: u16,
    /// Center frequency in MHz
    pub frequency: u16,
    /// Antenna signal in dBm
    pub signal: i8,
    /// MAC timestamp from the radiotap header, in microseconds
    pub mac_timestamp: u64,
    /// Capture layer saw a failed FCS check
    pub bad_fcs: bool,
    /// Frame body was WEP-protected when captured
    pub wep: bool,
}

impl FrameMetadata {
    pub const fn new(channel: u16, frequency: u16, signal: i8) -> Self {
        Self {
            channel,
            frequency,
            signal,
            mac_timestamp: 0,
            bad_fcs: false,
            wep: false,
        }
    }
}
