//! Concrete subtype parsers. Each one implements [`crate::parser::FrameParser`]
//! and is registered in [`crate::dispatch`].

pub mod association;
pub mod authentication;
pub mod beacon;
pub mod control;
pub mod data;
pub mod probe_request;
pub mod reason;

pub use association::{
    AssociationRequestParser, AssociationResponseParser, ReassociationRequestParser,
    ReassociationResponseParser,
};
pub use authentication::AuthenticationParser;
pub use beacon::{BeaconParser, ProbeResponseParser};
pub use control::{AckParser, CtsParser, RtsParser};
pub use data::DataParser;
pub use probe_request::ProbeRequestParser;
pub use reason::{DeauthenticationParser, DisassociationParser};
