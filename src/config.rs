/// Runtime engine configuration.
///
/// Lets the capture pipeline narrow what the engine handles without
/// touching the parser registry.
use crate::header::FrameKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Parse management frames (beacons, probes, auth, deauth, ...)
    pub management: bool,
    /// Parse control frames (RTS, CTS, ACK)
    pub control: bool,
    /// Parse data frames
    pub data: bool,
}

impl EngineConfig {
    pub const fn new() -> Self {
        Self {
            management: true,
            control: true,
            data: true,
        }
    }

    /// Management frames only; what deauth and rogue-AP detection consume.
    pub const fn management_only() -> Self {
        Self {
            management: true,
            control: false,
            data: false,
        }
    }

    pub fn accepts(&self, kind: FrameKind) -> bool {
        match kind {
            FrameKind::Management => self.management,
            FrameKind::Control => self.control,
            FrameKind::Data => self.data,
            FrameKind::Extension => false,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}
