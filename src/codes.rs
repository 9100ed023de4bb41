/// Code tables for 802.11 fields with an open-ended code space.
///
/// Status and reason codes keep growing with each amendment, so an unseen
/// value is labeled rather than rejected.
use core::fmt::Write;

use crate::record::Label;

/// Status codes carried by authentication and association responses.
pub static STATUS_CODES: &[(u16, &str)] = &[(0, "SUCCESS"), (1, "FAILURE")];

/// Deauthentication / disassociation reason codes (IEEE 802.11-2020 Table 9-49).
pub static REASON_CODES: &[(u16, &str)] = &[
    (1, "Unspecified reason"),
    (2, "Previous authentication no longer valid"),
    (3, "Deauthenticated because sending STA is leaving"),
    (4, "Disassociated due to inactivity"),
    (5, "AP unable to handle all associated STAs"),
    (6, "Class 2 frame from nonauthenticated STA"),
    (7, "Class 3 frame from nonassociated STA"),
    (8, "Disassociated because sending STA is leaving"),
    (9, "STA not authenticated with responding STA"),
    (10, "Power Capability element unacceptable"),
    (11, "Supported Channels element unacceptable"),
    (12, "BSS transition management"),
    (13, "Invalid element"),
    (14, "MIC failure"),
    (15, "4-Way Handshake timeout"),
    (16, "Group Key Handshake timeout"),
    (17, "Element in 4-Way Handshake differs"),
    (18, "Invalid group cipher"),
    (19, "Invalid pairwise cipher"),
    (20, "Invalid AKMP"),
    (21, "Unsupported RSNE version"),
    (22, "Invalid RSNE capabilities"),
    (23, "IEEE 802.1X authentication failed"),
    (24, "Cipher suite rejected by security policy"),
];

/// Look up `code` in `table`, or produce "Invalid/Unknown (<code>)" with the
/// code shown as a signed 16-bit value.
pub fn label(table: &[(u16, &str)], code: u16) -> Label {
    let mut out = Label::new();
    match table.iter().find(|(c, _)| *c == code) {
        Some((_, name)) => {
            let _ = out.push_str(name);
        }
        None => {
            let _ = write!(out, "Invalid/Unknown ({})", code as i16);
        }
    }
    out
}

pub fn status_label(code: u16) -> Label {
    label(STATUS_CODES, code)
}

pub fn reason_label(code: u16) -> Label {
    label(REASON_CODES, code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_status_codes() {
        assert_eq!(status_label(0).as_str(), "SUCCESS");
        assert_eq!(status_label(1).as_str(), "FAILURE");
    }

    #[test]
    fn unknown_status_code_is_labeled() {
        assert_eq!(status_label(7).as_str(), "Invalid/Unknown (7)");
        assert_eq!(status_label(0x7FFF).as_str(), "Invalid/Unknown (32767)");
    }

    #[test]
    fn high_bit_codes_render_signed() {
        assert_eq!(status_label(0xFFFF).as_str(), "Invalid/Unknown (-1)");
        assert_eq!(status_label(0x8000).as_str(), "Invalid/Unknown (-32768)");
        assert_eq!(reason_label(0xFFFF).as_str(), "Invalid/Unknown (-1)");
    }

    #[test]
    fn reason_codes() {
        assert_eq!(
            reason_label(7).as_str(),
            "Class 3 frame from nonassociated STA"
        );
        assert_eq!(reason_label(0).as_str(), "Invalid/Unknown (0)");
        assert_eq!(reason_label(99).as_str(), "Invalid/Unknown (99)");
    }

    #[test]
    fn every_reason_fits_a_label() {
        for &(code, name) in REASON_CODES {
            assert_eq!(reason_label(code).as_str(), name, "reason {code} truncated");
        }
    }
}
