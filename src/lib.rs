//! # dapwire
//!
//! Rust implementation of the Debug Adapter Protocol wire format.
//!
//! The crate covers the three layers a DAP endpoint needs to talk to a
//! peer, and nothing above them:
//!
//! - **Framing** ([`framing`]): `Content-Length`-delimited envelopes over
//!   any byte stream, with strict validation and partial-read handling.
//! - **Types** ([`types`]): the schema-derived message variants and
//!   supporting structures, regenerated from `debugProtocol.json` by the
//!   bundled `gentypes` binary.
//! - **Codec** ([`codec`]): discriminator-directed decoding into the
//!   concrete variants, plus registration of custom commands and events.
//!
//! Transport management, debugger state and message ordering above
//! transport order are the application's concern.
//!
//! ## Example
//!
//! ```
//! use std::io::BufReader;
//!
//! use dapwire::{read_message, write_message, Event, Message, StoppedEvent, StoppedEventBody};
//!
//! let event = StoppedEvent {
//!     event: Event::new(2, "stopped"),
//!     body: StoppedEventBody {
//!         reason: "breakpoint".to_string(),
//!         thread_id: Some(1),
//!         all_threads_stopped: Some(true),
//!         ..Default::default()
//!     },
//! };
//!
//! let mut wire = Vec::new();
//! write_message(&mut wire, &event).unwrap();
//!
//! let mut reader = BufReader::new(wire.as_slice());
//! let decoded = read_message(&mut reader).unwrap();
//! let stopped = decoded.as_any().downcast_ref::<StoppedEvent>().unwrap();
//! assert_eq!(*stopped, event);
//! ```
//!
//! ## Concurrency
//!
//! The library is synchronous and owns no threads. One reader and one
//! writer per stream; a typical application runs them on two threads per
//! peer. The process-wide default codec is safe for concurrent reads once
//! all registrations have completed.

pub mod codec;
pub mod error;
pub mod framing;
pub mod message;
pub mod types;

pub use codec::{
    decode_message, encode_message, read_message, register_event, register_request, write_message,
    Codec,
};
pub use error::{DapError, MessageCategory, Result};
pub use framing::{read_envelope, write_envelope, EnvelopeBuffer};
pub use message::{EventMessage, LaunchAttachRequest, Message, RequestMessage, ResponseMessage};
pub use types::*;
