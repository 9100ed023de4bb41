//! dot11-frames: 802.11 frame parsing engine for wireless intrusion detection.
//!
//! Turns raw captured frames (starting at frame control, radiotap already
//! stripped) into typed, immutable frame records for the detection logic.
//! Every subtype parser runs under one shared contract: bounds-checked field
//! extraction, per-parser attempt/success/malformed counters, and a single
//! [`MalformedFrame`] error for anything structurally wrong.
//!
//! The crate is `no_std` with no allocator, so the same engine runs inside
//! firmware and in a host daemon. Text fields use fixed-capacity `heapless`
//! strings.
//!
//! - `field`, `header`, `elements` read bytes.
//! - `parser`, `parsers`, `dispatch` turn them into [`FrameRecord`]s.
//! - `report` renders records and counters as NDJSON.

#![cfg_attr(not(test), no_std)]

pub mod codes;
pub mod config;
pub mod dispatch;
pub mod elements;
pub mod error;
pub mod field;
pub mod header;
pub mod metadata;
pub mod parser;
pub mod parsers;
pub mod record;
pub mod report;

pub use config::EngineConfig;
pub use dispatch::{counter_snapshots, dispatch, parse_frame, ParserHandle};
pub use error::MalformedFrame;
pub use header::{FrameSubtype, MacHeader};
pub use metadata::FrameMetadata;
pub use parser::{CounterSnapshot, FrameParser};
pub use record::FrameRecord;
