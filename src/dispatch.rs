/// Subtype → parser registry and the top-level `parse_frame` entry point.
///
/// The registry is a `static` table built at compile time. Nothing registers
/// or removes parsers at runtime, so lookups need no synchronization.
use log::trace;

use crate::config::EngineConfig;
use crate::error::MalformedFrame;
use crate::header::{FrameSubtype, MacHeader};
use crate::metadata::FrameMetadata;
use crate::parser::{CounterSnapshot, FrameParser, ParseCounters};
use crate::parsers::*;
use crate::record::FrameRecord;

type ParseFn = fn(&[u8], &MacHeader, &FrameMetadata) -> Result<FrameRecord, MalformedFrame>;

/// A registered parser with its record type erased to [`FrameRecord`].
pub struct ParserHandle {
    name: &'static str,
    subtype: FrameSubtype,
    counters: fn() -> &'static ParseCounters,
    parse: ParseFn,
}

fn erased<P: FrameParser>(
    payload: &[u8],
    header: &MacHeader,
    meta: &FrameMetadata,
) -> Result<FrameRecord, MalformedFrame> {
    P::parse(payload, header, meta).map(P::wrap)
}

impl ParserHandle {
    pub const fn of<P: FrameParser>() -> Self {
        Self {
            name: P::NAME,
            subtype: P::SUBTYPE,
            counters: P::counters,
            parse: erased::<P>,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn subtype(&self) -> FrameSubtype {
        self.subtype
    }

    /// Decode `payload` (the whole frame) under the base parse contract.
    pub fn parse(
        &self,
        payload: &[u8],
        header: &MacHeader,
        meta: &FrameMetadata,
    ) -> Result<FrameRecord, MalformedFrame> {
        (self.parse)(payload, header, meta)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        (self.counters)().snapshot(self.name)
    }
}

impl core::fmt::Debug for ParserHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParserHandle")
            .field("name", &self.name)
            .field("subtype", &self.subtype)
            .finish()
    }
}

static PARSERS: [ParserHandle; 14] = [
    ParserHandle::of::<AuthenticationParser>(),
    ParserHandle::of::<DeauthenticationParser>(),
    ParserHandle::of::<DisassociationParser>(),
    ParserHandle::of::<BeaconParser>(),
    ParserHandle::of::<ProbeRequestParser>(),
    ParserHandle::of::<ProbeResponseParser>(),
    ParserHandle::of::<AssociationRequestParser>(),
    ParserHandle::of::<AssociationResponseParser>(),
    ParserHandle::of::<ReassociationRequestParser>(),
    ParserHandle::of::<ReassociationResponseParser>(),
    ParserHandle::of::<RtsParser>(),
    ParserHandle::of::<CtsParser>(),
    ParserHandle::of::<AckParser>(),
    ParserHandle::of::<DataParser>(),
];

/// Every registered parser, in registration order.
pub fn parsers() -> &'static [ParserHandle] {
    &PARSERS
}

/// Look up the parser for `subtype`. `None` means the subtype is not handled.
pub fn dispatch(subtype: FrameSubtype) -> Option<&'static ParserHandle> {
    PARSERS.iter().find(|h| h.subtype == subtype)
}

/// Current counters of every registered parser.
pub fn counter_snapshots() -> impl Iterator<Item = CounterSnapshot> {
    PARSERS.iter().map(ParserHandle::snapshot)
}

/// Parse one captured frame, starting at frame control.
///
/// Returns `None` when the frame is not handled: too short to carry frame
/// control, a kind disabled by `config`, or a subtype with no registered
/// parser. Otherwise returns the parser's outcome.
pub fn parse_frame(
    buffer: &[u8],
    meta: &FrameMetadata,
    config: &EngineConfig,
) -> Option<Result<FrameRecord, MalformedFrame>> {
    let header = MacHeader::parse(buffer)?;
    let fc = header.frame_control;

    if !config.accepts(fc.kind) {
        trace!("{:?} frames disabled, skipping", fc.kind);
        return None;
    }

    let Some(handle) = header.subtype().and_then(dispatch) else {
        trace!("unhandled subtype {:?}/{}", fc.kind, fc.subtype_code);
        return None;
    };

    Some(handle.parse(buffer, &header, meta))
}
