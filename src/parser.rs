/// Shared parse contract for every subtype parser.
///
/// A subtype parser only implements [`FrameParser::decode`]. The provided
/// [`FrameParser::parse`] runs it through [`parse_with`], which owns outcome
/// counting and the translation of decode failures into [`MalformedFrame`].
use core::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::error::{DecodeError, MalformedFrame};
use crate::header::{FrameSubtype, MacHeader};
use crate::metadata::FrameMetadata;
use crate::record::FrameRecord;

/// Outcome counters for one parser. Safe to bump from any thread.
pub struct ParseCounters {
    attempts: AtomicU64,
    successes: AtomicU64,
    malformed: AtomicU64,
}

impl ParseCounters {
    pub const fn new() -> Self {
        Self {
            attempts: AtomicU64::new(0),
            successes: AtomicU64::new(0),
            malformed: AtomicU64::new(0),
        }
    }

    /// Point-in-time copy of the counters, labeled with the parser name.
    pub fn snapshot(&self, parser: &'static str) -> CounterSnapshot {
        CounterSnapshot {
            parser,
            attempts: self.attempts.load(Ordering::Relaxed),
            successes: self.successes.load(Ordering::Relaxed),
            malformed: self.malformed.load(Ordering::Relaxed),
        }
    }
}

impl Default for ParseCounters {
    fn default() -> Self {
        Self::new()
    }
}

/// Counter values exported to metrics collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterSnapshot {
    pub parser: &'static str,
    pub attempts: u64,
    pub successes: u64,
    pub malformed: u64,
}

/// Run `decode` over `payload` under the base contract.
///
/// `attempts` moves once per call, then exactly one of `successes` or
/// `malformed`. Decode failures never escape as anything but
/// [`MalformedFrame`].
pub fn parse_with<R>(
    parser: &'static str,
    counters: &ParseCounters,
    payload: &[u8],
    decode: impl FnOnce(&[u8]) -> Result<R, DecodeError>,
) -> Result<R, MalformedFrame> {
    counters.attempts.fetch_add(1, Ordering::Relaxed);
    match decode(payload) {
        Ok(record) => {
            counters.successes.fetch_add(1, Ordering::Relaxed);
            Ok(record)
        }
        Err(cause) => {
            counters.malformed.fetch_add(1, Ordering::Relaxed);
            log::debug!("{}: dropping malformed frame: {:?}", parser, cause);
            Err(MalformedFrame::new(parser, &cause))
        }
    }
}

/// One 802.11 subtype decoder.
///
/// `payload` is the whole frame starting at frame control; `header` is the
/// shared header read from that same buffer.
pub trait FrameParser {
    /// Counter label and error tag, e.g. "authentication"
    const NAME: &'static str;
    const SUBTYPE: FrameSubtype;

    type Record;

    /// Process-wide counters for this parser
    fn counters() -> &'static ParseCounters;

    /// Subtype-specific field validation and decoding.
    fn decode(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<Self::Record, DecodeError>;

    /// Tag a decoded record with its subtype.
    fn wrap(record: Self::Record) -> FrameRecord;

    fn parse(
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<Self::Record, MalformedFrame> {
        parse_with(Self::NAME, Self::counters(), payload, |p| {
            Self::decode(p, header, meta)
        })
    }
}
