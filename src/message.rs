//! The shared message surface: polymorphic traits over the concrete
//! variants, and constructor helpers for the base protocol types.
//!
//! Every concrete variant produced by the codec implements [`Message`].
//! Consumers recover the concrete type by downcasting:
//!
//! ```
//! use dapwire::{decode_message, InitializeRequest, Message};
//!
//! let data = br#"{"seq":1,"type":"request","command":"initialize",
//!                 "arguments":{"adapterID":"go"}}"#;
//! let msg = decode_message(data).unwrap();
//! let req = msg.as_any().downcast_ref::<InitializeRequest>().unwrap();
//! assert_eq!(req.arguments.adapter_id, "go");
//! ```

use std::any::Any;
use std::fmt;

use serde_json::{Map, Value};

use crate::types::{Event, ProtocolMessage, Request, Response};

/// A decoded DAP message of any kind.
///
/// Implemented by every request, response and event variant, plus the four
/// base types themselves.
pub trait Message: fmt::Debug + Send {
    /// The message's sequence number, preserved verbatim from the wire.
    fn seq(&self) -> i64;

    /// Serializes the message to its JSON payload.
    fn to_json(&self) -> serde_json::Result<Vec<u8>>;

    /// Downcast hook.
    fn as_any(&self) -> &dyn Any;

    /// Owned downcast hook.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// A message that is some concrete request variant.
pub trait RequestMessage: Message {
    /// The embedded request header (`seq`, `type`, `command`).
    fn request(&self) -> &Request;
}

/// A message that is some concrete response variant.
pub trait ResponseMessage: Message {
    /// The embedded response header (`request_seq`, `success`, `command`, …).
    fn response(&self) -> &Response;
}

/// A message that is some concrete event variant.
pub trait EventMessage: Message {
    /// The embedded event header (`seq`, `type`, `event`).
    fn event(&self) -> &Event;
}

/// Common surface of `LaunchRequest` and `AttachRequest`.
///
/// Their arguments are debugger-specific and surface as an opaque JSON
/// object; only the keys shared by every adapter get typed accessors.
pub trait LaunchAttachRequest: RequestMessage {
    /// The raw, adapter-defined arguments object.
    fn arguments(&self) -> &Map<String, Value>;

    /// The `noDebug` flag, when present and boolean.
    fn no_debug(&self) -> Option<bool> {
        self.arguments().get("noDebug").and_then(Value::as_bool)
    }

    /// The opaque `__restart` value carried over from a restart sequence.
    fn restart_data(&self) -> Option<&Value> {
        self.arguments().get("__restart")
    }
}

impl Request {
    /// Builds a bare `Request` header with `type` populated.
    ///
    /// Sequence numbering is the application's concern; `seq` is stored
    /// verbatim.
    pub fn new(seq: i64, command: impl Into<String>) -> Self {
        Self {
            protocol_message: ProtocolMessage {
                seq,
                type_: "request".to_string(),
            },
            command: command.into(),
        }
    }
}

impl Event {
    /// Builds a bare `Event` header with `type` populated.
    pub fn new(seq: i64, event: impl Into<String>) -> Self {
        Self {
            protocol_message: ProtocolMessage {
                seq,
                type_: "event".to_string(),
            },
            event: event.into(),
        }
    }
}

impl Response {
    /// Builds a bare `Response` header with `type` populated.
    pub fn new(seq: i64, request_seq: i64, command: impl Into<String>, success: bool) -> Self {
        Self {
            protocol_message: ProtocolMessage {
                seq,
                type_: "response".to_string(),
            },
            request_seq,
            success,
            command: command.into(),
            message: None,
        }
    }
}

impl crate::types::ErrorResponse {
    /// Builds an `ErrorResponse` with `success` forced to `false` and the
    /// short error tag set.
    pub fn new(
        seq: i64,
        request_seq: i64,
        command: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut response = Response::new(seq, request_seq, command, false);
        response.message = Some(message.into());
        Self {
            response,
            body: Default::default(),
        }
    }
}

/// Implements [`Message`] plus [`RequestMessage`] for concrete request
/// variants (types embedding a `request` field).
macro_rules! impl_request_message {
    ($($t:ident),+ $(,)?) => {$(
        impl $crate::message::Message for $t {
            fn seq(&self) -> i64 {
                self.request.protocol_message.seq
            }
            fn to_json(&self) -> serde_json::Result<Vec<u8>> {
                serde_json::to_vec(self)
            }
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }
        impl $crate::message::RequestMessage for $t {
            fn request(&self) -> &$crate::types::Request {
                &self.request
            }
        }
    )+};
}

/// Implements [`Message`] plus [`ResponseMessage`] for concrete response
/// variants (types embedding a `response` field).
macro_rules! impl_response_message {
    ($($t:ident),+ $(,)?) => {$(
        impl $crate::message::Message for $t {
            fn seq(&self) -> i64 {
                self.response.protocol_message.seq
            }
            fn to_json(&self) -> serde_json::Result<Vec<u8>> {
                serde_json::to_vec(self)
            }
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }
        impl $crate::message::ResponseMessage for $t {
            fn response(&self) -> &$crate::types::Response {
                &self.response
            }
        }
    )+};
}

/// Implements [`Message`] plus [`EventMessage`] for concrete event
/// variants (types embedding an `event` field).
macro_rules! impl_event_message {
    ($($t:ident),+ $(,)?) => {$(
        impl $crate::message::Message for $t {
            fn seq(&self) -> i64 {
                self.event.protocol_message.seq
            }
            fn to_json(&self) -> serde_json::Result<Vec<u8>> {
                serde_json::to_vec(self)
            }
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }
        impl $crate::message::EventMessage for $t {
            fn event(&self) -> &$crate::types::Event {
                &self.event
            }
        }
    )+};
}

/// Implements [`Message`] for a base type with a direct path to `seq`.
macro_rules! impl_base_message {
    ($t:ident, $($seq:tt)+) => {
        impl $crate::message::Message for $t {
            fn seq(&self) -> i64 {
                self.$($seq)+
            }
            fn to_json(&self) -> serde_json::Result<Vec<u8>> {
                serde_json::to_vec(self)
            }
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            fn into_any(self: Box<Self>) -> Box<dyn ::std::any::Any> {
                self
            }
        }
    };
}

pub(crate) use impl_base_message;
pub(crate) use impl_event_message;
pub(crate) use impl_request_message;
pub(crate) use impl_response_message;

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::types::{ErrorMessage, ErrorResponse, ErrorResponseBody, LaunchRequest};

    fn make_error_response() -> ErrorResponse {
        let mut resp = ErrorResponse::new(
            199,
            9,
            "stackTrace",
            "Unable to produce stack trace: \"{e}\"",
        );
        resp.body = ErrorResponseBody {
            error: Some(ErrorMessage {
                id: 2004,
                format: "Unable to produce stack trace: \"{e}\"".to_string(),
                variables: Some(
                    [("e".to_string(), "Unknown goroutine 1".to_string())]
                        .into_iter()
                        .collect(),
                ),
                show_user: Some(true),
                ..Default::default()
            }),
        };
        resp
    }

    #[test]
    fn test_message_trait_object() {
        let resp = make_error_response();
        let f = |m: &dyn Message| m.seq();
        assert_eq!(f(&resp), 199);
    }

    #[test]
    fn test_response_message_trait_object() {
        let resp = make_error_response();
        let f = |rm: &dyn ResponseMessage| (rm.seq(), rm.response().request_seq);
        assert_eq!(f(&resp), (199, 9));
    }

    #[test]
    fn test_launch_attach_request_arguments() {
        let mut launch = LaunchRequest {
            request: Request::new(19, "launch"),
            ..Default::default()
        };
        launch
            .arguments
            .insert("noDebug".to_string(), json!(true));
        launch
            .arguments
            .insert("__restart".to_string(), json!({"port": 4711}));

        let f = |r: &dyn LaunchAttachRequest| {
            (
                r.seq(),
                r.request().command.clone(),
                r.no_debug(),
                r.restart_data().cloned(),
            )
        };
        let (seq, command, no_debug, restart) = f(&launch);

        assert_eq!(seq, 19);
        assert_eq!(command, "launch");
        assert_eq!(no_debug, Some(true));
        assert_eq!(restart, Some(json!({"port": 4711})));
    }

    #[test]
    fn test_constructors_populate_type() {
        assert_eq!(Request::new(1, "initialize").protocol_message.type_, "request");
        assert_eq!(Event::new(1, "stopped").protocol_message.type_, "event");

        let resp = Response::new(3, 1, "initialize", true);
        assert_eq!(resp.protocol_message.type_, "response");
        assert_eq!(resp.request_seq, 1);
        assert!(resp.success);
        assert_eq!(resp.message, None);

        let err = ErrorResponse::new(2, 1, "stackTrace", "Unable");
        assert!(!err.response.success);
        assert_eq!(err.response.message.as_deref(), Some("Unable"));
        assert_eq!(err.response.command, "stackTrace");
    }
}
