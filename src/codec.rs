//! Polymorphic message codec.
//!
//! A [`Codec`] owns two dispatch tables: command name to a
//! (request, response) decoder pair, and event name to an event decoder.
//! Decoding is two-pass: a partial parse extracts the discriminators
//! (`type`, then `command`/`event` plus `success`), then the resolved
//! variant is fully deserialized from the same payload. Guessing the
//! variant from field presence is ambiguous under the protocol's embedded
//! base types, so the discriminator peek is not optional.
//!
//! A process-wide default codec is pre-populated with every schema-defined
//! command and event. [`Codec::new`] copies its tables, so custom
//! registrations on an instance never leak into the default set.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::sync::RwLock;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use tracing::trace;

use crate::error::{DapError, MessageCategory, Result};
use crate::framing::{read_envelope, write_envelope};
use crate::message::Message;
use crate::types::{self, ErrorResponse, Event, ProtocolMessage, Request, Response};

/// Deserializes a payload into one concrete variant, boxed as a message.
type DecodeFn = fn(&[u8]) -> serde_json::Result<Box<dyn Message>>;

/// Decoder pair for one command name.
#[derive(Clone, Copy)]
struct RequestEntry {
    request: DecodeFn,
    response: DecodeFn,
}

/// The monomorphized decoder backing every table entry.
fn decode_as<T>(data: &[u8]) -> serde_json::Result<Box<dyn Message>>
where
    T: Message + DeserializeOwned + 'static,
{
    Ok(Box::new(serde_json::from_slice::<T>(data)?))
}

/// The process-wide default codec. Populated once, on first use.
static DEFAULT_CODEC: Lazy<RwLock<Codec>> = Lazy::new(|| {
    let mut codec = Codec::bare();
    types::register_defaults(&mut codec).expect("schema-defined names are unique");
    RwLock::new(codec)
});

/// Dispatch tables mapping discriminator values to variant decoders.
#[derive(Clone)]
pub struct Codec {
    requests: HashMap<String, RequestEntry>,
    events: HashMap<String, DecodeFn>,
}

impl Codec {
    /// Creates a codec with a copy of the default tables.
    ///
    /// Registrations on the returned instance are isolated from the
    /// process-wide default codec.
    pub fn new() -> Self {
        DEFAULT_CODEC
            .read()
            .expect("default codec lock poisoned")
            .clone()
    }

    /// Empty tables; only used to build the default codec.
    fn bare() -> Self {
        Self {
            requests: HashMap::new(),
            events: HashMap::new(),
        }
    }

    /// Registers a custom command with its request and response variants.
    ///
    /// Fails with [`DapError::AlreadyRegistered`] if `command` is taken;
    /// the existing registration stays intact. Registration is one-off:
    /// there is no way to unregister for the lifetime of the codec.
    pub fn register_request<Req, Resp>(&mut self, command: &str) -> Result<()>
    where
        Req: Message + DeserializeOwned + 'static,
        Resp: Message + DeserializeOwned + 'static,
    {
        if self.requests.contains_key(command) {
            return Err(DapError::AlreadyRegistered(command.to_string()));
        }
        self.requests.insert(
            command.to_string(),
            RequestEntry {
                request: decode_as::<Req>,
                response: decode_as::<Resp>,
            },
        );
        Ok(())
    }

    /// Registers a custom event with its variant.
    ///
    /// Fails with [`DapError::AlreadyRegistered`] if `event` is taken.
    pub fn register_event<Ev>(&mut self, event: &str) -> Result<()>
    where
        Ev: Message + DeserializeOwned + 'static,
    {
        if self.events.contains_key(event) {
            return Err(DapError::AlreadyRegistered(event.to_string()));
        }
        self.events.insert(event.to_string(), decode_as::<Ev>);
        Ok(())
    }

    /// Decodes a JSON payload into the concrete variant its
    /// discriminators select.
    ///
    /// JSON syntax errors surface as [`DapError::Json`]; unknown
    /// discriminator values as [`DapError::UnsupportedMessage`]. Neither
    /// poisons the stream the payload came from.
    pub fn decode_message(&self, data: &[u8]) -> Result<Box<dyn Message>> {
        let message: ProtocolMessage = serde_json::from_slice(data)?;
        match message.type_.as_str() {
            "request" => self.decode_request(data),
            "response" => self.decode_response(data),
            "event" => self.decode_event(data),
            _ => Err(DapError::UnsupportedMessage {
                seq: message.seq,
                category: MessageCategory::ProtocolMessage,
                field: "type",
                value: message.type_,
            }),
        }
    }

    fn decode_request(&self, data: &[u8]) -> Result<Box<dyn Message>> {
        let request: Request = serde_json::from_slice(data)?;
        trace!(
            command = %request.command,
            seq = request.protocol_message.seq,
            "decoding request"
        );
        match self.requests.get(&request.command) {
            Some(entry) => Ok((entry.request)(data)?),
            None => Err(DapError::UnsupportedMessage {
                seq: request.protocol_message.seq,
                category: MessageCategory::Request,
                field: "command",
                value: request.command,
            }),
        }
    }

    fn decode_response(&self, data: &[u8]) -> Result<Box<dyn Message>> {
        let response: Response = serde_json::from_slice(data)?;
        trace!(
            command = %response.command,
            seq = response.protocol_message.seq,
            success = response.success,
            "decoding response"
        );
        // Failed responses all share the uniform error body, whatever the
        // command was.
        if !response.success {
            return Ok(Box::new(serde_json::from_slice::<ErrorResponse>(data)?));
        }
        match self.requests.get(&response.command) {
            Some(entry) => Ok((entry.response)(data)?),
            None => Err(DapError::UnsupportedMessage {
                seq: response.protocol_message.seq,
                category: MessageCategory::Response,
                field: "command",
                value: response.command,
            }),
        }
    }

    fn decode_event(&self, data: &[u8]) -> Result<Box<dyn Message>> {
        let event: Event = serde_json::from_slice(data)?;
        trace!(
            event = %event.event,
            seq = event.protocol_message.seq,
            "decoding event"
        );
        match self.events.get(&event.event) {
            Some(decode) => Ok(decode(data)?),
            None => Err(DapError::UnsupportedMessage {
                seq: event.protocol_message.seq,
                category: MessageCategory::Event,
                field: "event",
                value: event.event,
            }),
        }
    }

    /// Reads the next envelope from `r` and decodes it with this codec's
    /// tables.
    pub fn read_message<R: BufRead>(&self, r: &mut R) -> Result<Box<dyn Message>> {
        let payload = read_envelope(r)?;
        self.decode_message(&payload)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

/// Decodes a JSON payload with the process-wide default codec.
pub fn decode_message(data: &[u8]) -> Result<Box<dyn Message>> {
    DEFAULT_CODEC
        .read()
        .expect("default codec lock poisoned")
        .decode_message(data)
}

/// Serializes any message variant to its JSON payload.
pub fn encode_message(message: &dyn Message) -> Result<Vec<u8>> {
    Ok(message.to_json()?)
}

/// Registers a custom command on the process-wide default codec.
///
/// Complete all registrations before decoding concurrently; the default
/// codec is otherwise read-only.
pub fn register_request<Req, Resp>(command: &str) -> Result<()>
where
    Req: Message + DeserializeOwned + 'static,
    Resp: Message + DeserializeOwned + 'static,
{
    DEFAULT_CODEC
        .write()
        .expect("default codec lock poisoned")
        .register_request::<Req, Resp>(command)
}

/// Registers a custom event on the process-wide default codec.
pub fn register_event<Ev>(event: &str) -> Result<()>
where
    Ev: Message + DeserializeOwned + 'static,
{
    DEFAULT_CODEC
        .write()
        .expect("default codec lock poisoned")
        .register_event::<Ev>(event)
}

/// Reads the next envelope from `r` and decodes it with the default codec.
pub fn read_message<R: BufRead>(r: &mut R) -> Result<Box<dyn Message>> {
    let payload = read_envelope(r)?;
    decode_message(&payload)
}

/// Encodes `message` and writes it to `w` as one envelope.
pub fn write_message<W: Write>(w: &mut W, message: &dyn Message) -> Result<()> {
    let payload = message.to_json()?;
    write_envelope(w, &payload)
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;
    use crate::message::{impl_request_message, impl_response_message};
    use crate::types::{
        Capabilities, InitializeRequest, InitializeRequestArguments, InitializeResponse,
        InitializedEvent, LaunchRequest, LaunchResponse,
    };

    fn initialize_request() -> InitializeRequest {
        InitializeRequest {
            request: Request::new(1, "initialize"),
            arguments: InitializeRequestArguments {
                client_id: Some("vscode".to_string()),
                client_name: Some("Visual Studio Code".to_string()),
                adapter_id: "go".to_string(),
                locale: Some("en-us".to_string()),
                lines_start_at1: Some(true),
                columns_start_at1: Some(true),
                path_format: Some("path".to_string()),
                supports_variable_type: Some(true),
                supports_variable_paging: Some(true),
                supports_run_in_terminal_request: Some(true),
                supports_memory_references: None,
            },
        }
    }

    const INITIALIZE_REQUEST: &str = r#"{"command":"initialize","arguments":{"clientID":"vscode","clientName":"Visual Studio Code","adapterID":"go","pathFormat":"path","linesStartAt1":true,"columnsStartAt1":true,"supportsVariableType":true,"supportsVariablePaging":true,"supportsRunInTerminalRequest":true,"locale":"en-us"},"type":"request","seq":1}"#;

    const INITIALIZE_RESPONSE: &str = r#"{"seq":1,"type":"response","request_seq":2,"command":"initialize","success":true,"body":{"supportsConfigurationDoneRequest":true,"supportsSetVariable":true}}"#;

    #[test]
    fn test_decode_rejects_invalid_json() {
        assert!(matches!(decode_message(b""), Err(DapError::Json(_))));
        assert!(matches!(decode_message(b","), Err(DapError::Json(_))));
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        for (data, want_seq, want_value) in [
            (&b"{}"[..], 0, ""),
            (&br#"{"a": 1}"#[..], 0, ""),
            (&br#"{"type":"foo", "seq": 2}"#[..], 2, "foo"),
        ] {
            let got = decode_message(data);
            match got {
                Err(DapError::UnsupportedMessage {
                    seq,
                    category: MessageCategory::ProtocolMessage,
                    field: "type",
                    value,
                }) => {
                    assert_eq!(seq, want_seq);
                    assert_eq!(value, want_value);
                }
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_decode_rejects_unknown_command() {
        let got = decode_message(br#"{"type":"request"}"#);
        assert!(matches!(
            got,
            Err(DapError::UnsupportedMessage {
                seq: 0,
                category: MessageCategory::Request,
                field: "command",
                ..
            })
        ));

        let got = decode_message(br#"{"seq":3,"type":"request","command":"nosuch"}"#);
        match got {
            Err(DapError::UnsupportedMessage {
                seq,
                category: MessageCategory::Request,
                field: "command",
                value,
            }) => {
                assert_eq!(seq, 3);
                assert_eq!(value, "nosuch");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_unknown_response_command() {
        let got = decode_message(br#"{"type":"response","success":true}"#);
        assert!(matches!(
            got,
            Err(DapError::UnsupportedMessage {
                seq: 0,
                category: MessageCategory::Response,
                field: "command",
                ..
            })
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_event() {
        let got = decode_message(br#"{"type":"event"}"#);
        assert!(matches!(
            got,
            Err(DapError::UnsupportedMessage {
                seq: 0,
                category: MessageCategory::Event,
                field: "event",
                ..
            })
        ));
    }

    #[test]
    fn test_decode_initialize_request() {
        let msg = decode_message(INITIALIZE_REQUEST.as_bytes()).unwrap();
        let got = msg.as_any().downcast_ref::<InitializeRequest>().unwrap();
        assert_eq!(*got, initialize_request());
    }

    #[test]
    fn test_decode_initialize_response() {
        let msg = decode_message(INITIALIZE_RESPONSE.as_bytes()).unwrap();
        let got = msg.as_any().downcast_ref::<InitializeResponse>().unwrap();

        let want = InitializeResponse {
            response: Response::new(1, 2, "initialize", true),
            body: Some(Capabilities {
                supports_configuration_done_request: Some(true),
                supports_set_variable: Some(true),
                ..Default::default()
            }),
        };
        assert_eq!(*got, want);
    }

    #[test]
    fn test_decode_initialized_event() {
        let msg = decode_message(br#"{"seq":1,"type":"event","event":"initialized"}"#).unwrap();
        let got = msg.as_any().downcast_ref::<InitializedEvent>().unwrap();
        assert_eq!(got.event, Event::new(1, "initialized"));
    }

    #[test]
    fn test_failed_response_decodes_as_error_response() {
        let data = br#"{"seq":2,"type":"response","request_seq":1,"success":false,"command":"stackTrace","message":"Unable"}"#;
        let msg = decode_message(data).unwrap();
        let got = msg.as_any().downcast_ref::<ErrorResponse>().unwrap();

        assert_eq!(got.response.protocol_message.seq, 2);
        assert_eq!(got.response.request_seq, 1);
        assert!(!got.response.success);
        assert_eq!(got.response.command, "stackTrace");
        assert_eq!(got.response.message.as_deref(), Some("Unable"));
        assert_eq!(got.body.error, None);
    }

    #[test]
    fn test_duplicate_registration_keeps_first() {
        let mut codec = Codec::new();
        let got = codec.register_request::<LaunchRequest, LaunchResponse>("launch");
        assert!(matches!(got, Err(DapError::AlreadyRegistered(ref c)) if c == "launch"));

        // The built-in registration still dispatches.
        let msg = codec
            .decode_message(br#"{"seq":5,"type":"request","command":"launch","arguments":{}}"#)
            .unwrap();
        assert!(msg.as_any().is::<LaunchRequest>());
    }

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct PingRequest {
        #[serde(flatten)]
        request: Request,
        #[serde(skip_serializing_if = "Option::is_none")]
        arguments: Option<serde_json::Value>,
    }

    #[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct PongResponse {
        #[serde(flatten)]
        response: Response,
    }

    impl_request_message!(PingRequest);
    impl_response_message!(PongResponse);

    #[test]
    fn test_custom_registration_is_isolated() {
        let mut codec = Codec::new();
        codec
            .register_request::<PingRequest, PongResponse>("ping")
            .unwrap();

        let data = br#"{"seq":7,"type":"request","command":"ping"}"#;
        let msg = codec.decode_message(data).unwrap();
        assert_eq!(msg.seq(), 7);
        assert!(msg.as_any().is::<PingRequest>());

        // The default codec never saw the registration.
        assert!(matches!(
            decode_message(data),
            Err(DapError::UnsupportedMessage {
                category: MessageCategory::Request,
                ..
            })
        ));
    }

    const COMMANDS: &[&str] = &[
        "cancel",
        "runInTerminal",
        "initialize",
        "configurationDone",
        "launch",
        "attach",
        "restart",
        "disconnect",
        "terminate",
        "breakpointLocations",
        "setBreakpoints",
        "setFunctionBreakpoints",
        "setExceptionBreakpoints",
        "dataBreakpointInfo",
        "setDataBreakpoints",
        "continue",
        "next",
        "stepIn",
        "stepOut",
        "stepBack",
        "reverseContinue",
        "restartFrame",
        "goto",
        "pause",
        "stackTrace",
        "scopes",
        "variables",
        "setVariable",
        "source",
        "threads",
        "terminateThreads",
        "modules",
        "loadedSources",
        "evaluate",
        "setExpression",
        "stepInTargets",
        "gotoTargets",
        "completions",
        "exceptionInfo",
        "readMemory",
        "disassemble",
    ];

    const EVENTS: &[&str] = &[
        "initialized",
        "stopped",
        "continued",
        "exited",
        "terminated",
        "thread",
        "output",
        "breakpoint",
        "module",
        "loadedSource",
        "process",
        "capabilities",
    ];

    #[test]
    fn test_every_schema_command_dispatches() {
        for (n, command) in COMMANDS.iter().enumerate() {
            let seq = n as i64 + 1;

            let data = format!(r#"{{"seq":{seq},"type":"request","command":"{command}"}}"#);
            let msg = decode_message(data.as_bytes())
                .unwrap_or_else(|e| panic!("request '{command}': {e}"));
            assert_eq!(msg.seq(), seq, "request '{command}'");

            let data = format!(
                r#"{{"seq":{seq},"type":"response","request_seq":1,"success":true,"command":"{command}"}}"#
            );
            let msg = decode_message(data.as_bytes())
                .unwrap_or_else(|e| panic!("response '{command}': {e}"));
            assert_eq!(msg.seq(), seq, "response '{command}'");
            assert!(
                !msg.as_any().is::<ErrorResponse>(),
                "successful '{command}' response must not be an ErrorResponse"
            );
        }
    }

    #[test]
    fn test_every_schema_event_dispatches() {
        for (n, event) in EVENTS.iter().enumerate() {
            let seq = n as i64 + 1;
            let data = format!(r#"{{"seq":{seq},"type":"event","event":"{event}"}}"#);
            let msg = decode_message(data.as_bytes())
                .unwrap_or_else(|e| panic!("event '{event}': {e}"));
            assert_eq!(msg.seq(), seq, "event '{event}'");
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let original = initialize_request();
        let payload = encode_message(&original).unwrap();
        let decoded = decode_message(&payload).unwrap();
        let got = decoded.as_any().downcast_ref::<InitializeRequest>().unwrap();
        assert_eq!(*got, original);
    }
}
