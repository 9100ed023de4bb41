/// Information element (tagged parameter) walking for management frame bodies.
///
/// Elements are free-form: a damaged element list never makes a frame
/// malformed, the walk simply stops at the first element that overruns
/// the buffer.
use ieee80211::match_frames;
use ieee80211::mgmt_frame::{BeaconFrame, ProbeRequestFrame, ProbeResponseFrame};

use crate::field;
use crate::record::NameString;

pub const ELEMENT_SSID: u8 = 0;
pub const ELEMENT_DS_PARAMETER: u8 = 3;
pub const ELEMENT_TIM: u8 = 5;
pub const ELEMENT_RSN: u8 = 48;

/// Elements whose content changes between beacons of the same AP
const VOLATILE_ELEMENTS: &[u8] = &[ELEMENT_SSID, ELEMENT_DS_PARAMETER, ELEMENT_TIM];

const FNV_OFFSET: u32 = 0x811C_9DC5;
const FNV_PRIME: u32 = 0x0100_0193;

/// One information element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<'a> {
    pub id: u8,
    pub data: &'a [u8],
}

/// Iterator over `[id][len][data...]` triples
pub struct Elements<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Elements<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl<'a> Iterator for Elements<'a> {
    type Item = Element<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let head = field::slice(self.buf, self.pos, 2).ok()?;
        let (id, len) = (head[0], head[1] as usize);
        match field::slice(self.buf, self.pos + 2, len) {
            Ok(data) => {
                self.pos += 2 + len;
                Some(Element { id, data })
            }
            Err(_) => {
                // Truncated element ends the list
                self.pos = self.buf.len();
                None
            }
        }
    }
}

/// What detection logic needs from a tagged parameter list
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementSummary {
    pub ssid: NameString,
    /// Channel from the DS Parameter Set element
    pub channel: Option<u8>,
    /// RSN element present (WPA2/WPA3)
    pub rsn: bool,
    /// Number of well-formed elements
    pub count: u16,
    /// FNV-1a over the non-volatile elements, stable across beacons of one AP
    pub fingerprint: u32,
}

/// Walk `buf` and collect the fields we decode.
pub fn summarize(buf: &[u8]) -> ElementSummary {
    let mut summary = ElementSummary {
        fingerprint: FNV_OFFSET,
        ..ElementSummary::default()
    };
    let mut seen_ssid = false;

    for element in Elements::new(buf) {
        summary.count = summary.count.saturating_add(1);
        match element.id {
            ELEMENT_SSID if !seen_ssid => {
                summary.ssid = name_string(element.data);
                seen_ssid = true;
            }
            ELEMENT_DS_PARAMETER => summary.channel = element.data.first().copied(),
            ELEMENT_RSN => summary.rsn = true,
            _ => {}
        }
        if !VOLATILE_ELEMENTS.contains(&element.id) {
            summary.fingerprint = fnv1a(summary.fingerprint, &[element.id]);
            summary.fingerprint = fnv1a(summary.fingerprint, element.data);
        }
    }

    summary
}

/// SSID of a beacon or probe frame as decoded by the `ieee80211` crate.
///
/// `None` when the frame is not one of those subtypes, does not parse, or
/// carries no SSID element.
pub fn frame_ssid(frame: &[u8]) -> Option<NameString> {
    let result = match_frames! {
        frame,
        beacon = BeaconFrame<'_> => {
            beacon.body.ssid().map(str_name)
        }
        probe_req = ProbeRequestFrame<'_> => {
            probe_req.body.ssid().map(str_name)
        }
        probe_resp = ProbeResponseFrame<'_> => {
            probe_resp.body.ssid().map(str_name)
        }
    };
    result.ok().flatten()
}

/// SSID bytes as text, keeping the longest valid UTF-8 prefix.
fn name_string(raw: &[u8]) -> NameString {
    let text = match core::str::from_utf8(raw) {
        Ok(s) => s,
        Err(e) => core::str::from_utf8(&raw[..e.valid_up_to()]).unwrap_or(""),
    };
    str_name(text)
}

fn str_name(s: &str) -> NameString {
    let mut out = NameString::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

fn fnv1a(mut hash: u32, bytes: &[u8]) -> u32 {
    for &b in bytes {
        hash ^= b as u32;
        hash = hash.wrapping_mul(FNV_PRIME);
    }
    hash
}
