// Code generated by gentypes from debugProtocol.json. DO NOT EDIT.
// DAP spec: https://microsoft.github.io/debug-adapter-protocol/specification

//! Message and structure types derived from the DAP schema.
//!
//! Field order inside each struct follows the schema's declaration order.
//! Properties the schema marks `required` are plain fields and always
//! serialized; the rest are `Option` and omitted when unset. Missing
//! fields decode to their defaults.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::Codec;
use crate::error::Result;
use crate::message::{
    impl_base_message, impl_event_message, impl_request_message, impl_response_message,
    EventMessage, LaunchAttachRequest, RequestMessage, ResponseMessage,
};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolMessage {
    pub seq: i64,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    #[serde(flatten)]
    pub protocol_message: ProtocolMessage,
    pub command: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(flatten)]
    pub protocol_message: ProtocolMessage,
    pub event: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Response {
    #[serde(flatten)]
    pub protocol_message: ProtocolMessage,
    pub request_seq: i64,
    pub success: bool,
    pub command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: ErrorResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponseBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorMessage>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelRequest {
    #[serde(flatten)]
    pub request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<CancelArguments>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelArguments {
    #[serde(rename = "requestId", skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancelResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitializedEvent {
    #[serde(flatten)]
    pub event: Event,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoppedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: StoppedEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoppedEventBody {
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "threadId", skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<i64>,
    #[serde(rename = "preserveFocusHint", skip_serializing_if = "Option::is_none")]
    pub preserve_focus_hint: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "allThreadsStopped", skip_serializing_if = "Option::is_none")]
    pub all_threads_stopped: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: ContinuedEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinuedEventBody {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
    #[serde(rename = "allThreadsContinued", skip_serializing_if = "Option::is_none")]
    pub all_threads_continued: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExitedEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: ExitedEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExitedEventBody {
    #[serde(rename = "exitCode")]
    pub exit_code: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminatedEvent {
    #[serde(flatten)]
    pub event: Event,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<TerminatedEventBody>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminatedEventBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<Value>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: ThreadEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadEventBody {
    pub reason: String,
    #[serde(rename = "threadId")]
    pub thread_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: OutputEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputEventBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub output: String,
    #[serde(rename = "variablesReference", skip_serializing_if = "Option::is_none")]
    pub variables_reference: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: BreakpointEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointEventBody {
    pub reason: String,
    pub breakpoint: Breakpoint,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: ModuleEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModuleEventBody {
    pub reason: String,
    pub module: Module,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadedSourceEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: LoadedSourceEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadedSourceEventBody {
    pub reason: String,
    pub source: Source,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: ProcessEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessEventBody {
    pub name: String,
    #[serde(rename = "systemProcessId", skip_serializing_if = "Option::is_none")]
    pub system_process_id: Option<i64>,
    #[serde(rename = "isLocalProcess", skip_serializing_if = "Option::is_none")]
    pub is_local_process: Option<bool>,
    #[serde(rename = "startMethod", skip_serializing_if = "Option::is_none")]
    pub start_method: Option<String>,
    #[serde(rename = "pointerSize", skip_serializing_if = "Option::is_none")]
    pub pointer_size: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilitiesEvent {
    #[serde(flatten)]
    pub event: Event,
    pub body: CapabilitiesEventBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilitiesEventBody {
    pub capabilities: Capabilities,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInTerminalRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: RunInTerminalRequestArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInTerminalRequestArguments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub cwd: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub env: Option<HashMap<String, String>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInTerminalResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: RunInTerminalResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunInTerminalResponseBody {
    #[serde(rename = "processId", skip_serializing_if = "Option::is_none")]
    pub process_id: Option<i64>,
    #[serde(rename = "shellProcessId", skip_serializing_if = "Option::is_none")]
    pub shell_process_id: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitializeRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: InitializeRequestArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitializeRequestArguments {
    #[serde(rename = "clientID", skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(rename = "clientName", skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    #[serde(rename = "adapterID")]
    pub adapter_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(rename = "linesStartAt1", skip_serializing_if = "Option::is_none")]
    pub lines_start_at1: Option<bool>,
    #[serde(rename = "columnsStartAt1", skip_serializing_if = "Option::is_none")]
    pub columns_start_at1: Option<bool>,
    #[serde(rename = "pathFormat", skip_serializing_if = "Option::is_none")]
    pub path_format: Option<String>,
    #[serde(rename = "supportsVariableType", skip_serializing_if = "Option::is_none")]
    pub supports_variable_type: Option<bool>,
    #[serde(rename = "supportsVariablePaging", skip_serializing_if = "Option::is_none")]
    pub supports_variable_paging: Option<bool>,
    #[serde(
        rename = "supportsRunInTerminalRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_run_in_terminal_request: Option<bool>,
    #[serde(
        rename = "supportsMemoryReferences",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_memory_references: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitializeResponse {
    #[serde(flatten)]
    pub response: Response,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Capabilities>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationDoneRequest {
    #[serde(flatten)]
    pub request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<ConfigurationDoneArguments>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationDoneArguments {}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationDoneResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: LaunchRequestArguments,
}

/// Launch arguments are adapter-defined; the schema gives them no fixed
/// shape, so they surface as an opaque JSON object.
pub type LaunchRequestArguments = Map<String, Value>;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: AttachRequestArguments,
}

/// Attach arguments are adapter-defined; the schema gives them no fixed
/// shape, so they surface as an opaque JSON object.
pub type AttachRequestArguments = Map<String, Value>;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttachResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartRequest {
    #[serde(flatten)]
    pub request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<RestartArguments>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartArguments {}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisconnectRequest {
    #[serde(flatten)]
    pub request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<DisconnectArguments>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisconnectArguments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<bool>,
    #[serde(rename = "terminateDebuggee", skip_serializing_if = "Option::is_none")]
    pub terminate_debuggee: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisconnectResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateRequest {
    #[serde(flatten)]
    pub request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<TerminateArguments>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateArguments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointLocationsRequest {
    #[serde(flatten)]
    pub request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<BreakpointLocationsArguments>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointLocationsArguments {
    pub source: Source,
    pub line: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
    #[serde(rename = "endLine", skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
    #[serde(rename = "endColumn", skip_serializing_if = "Option::is_none")]
    pub end_column: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointLocationsResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: BreakpointLocationsResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointLocationsResponseBody {
    pub breakpoints: Vec<BreakpointLocation>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetBreakpointsRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: SetBreakpointsArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetBreakpointsArguments {
    pub source: Source,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakpoints: Option<Vec<SourceBreakpoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<i64>>,
    #[serde(rename = "sourceModified", skip_serializing_if = "Option::is_none")]
    pub source_modified: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetBreakpointsResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: SetBreakpointsResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetBreakpointsResponseBody {
    pub breakpoints: Vec<Breakpoint>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetFunctionBreakpointsRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: SetFunctionBreakpointsArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetFunctionBreakpointsArguments {
    pub breakpoints: Vec<FunctionBreakpoint>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetFunctionBreakpointsResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: SetFunctionBreakpointsResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetFunctionBreakpointsResponseBody {
    pub breakpoints: Vec<Breakpoint>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetExceptionBreakpointsRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: SetExceptionBreakpointsArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetExceptionBreakpointsArguments {
    pub filters: Vec<String>,
    #[serde(rename = "exceptionOptions", skip_serializing_if = "Option::is_none")]
    pub exception_options: Option<Vec<ExceptionOptions>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetExceptionBreakpointsResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataBreakpointInfoRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: DataBreakpointInfoArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataBreakpointInfoArguments {
    #[serde(rename = "variablesReference", skip_serializing_if = "Option::is_none")]
    pub variables_reference: Option<i64>,
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataBreakpointInfoResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: DataBreakpointInfoResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataBreakpointInfoResponseBody {
    #[serde(rename = "dataId")]
    pub data_id: Value,
    pub description: String,
    #[serde(rename = "accessTypes", skip_serializing_if = "Option::is_none")]
    pub access_types: Option<Vec<DataBreakpointAccessType>>,
    #[serde(rename = "canPersist", skip_serializing_if = "Option::is_none")]
    pub can_persist: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetDataBreakpointsRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: SetDataBreakpointsArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetDataBreakpointsArguments {
    pub breakpoints: Vec<DataBreakpoint>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetDataBreakpointsResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: SetDataBreakpointsResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetDataBreakpointsResponseBody {
    pub breakpoints: Vec<Breakpoint>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinueRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: ContinueArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinueArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinueResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: ContinueResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContinueResponseBody {
    #[serde(rename = "allThreadsContinued", skip_serializing_if = "Option::is_none")]
    pub all_threads_continued: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: NextArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NextResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: StepInArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
    #[serde(rename = "targetId", skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepOutRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: StepOutArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepOutArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepOutResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepBackRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: StepBackArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepBackArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepBackResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseContinueRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: ReverseContinueArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseContinueArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverseContinueResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartFrameRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: RestartFrameArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartFrameArguments {
    #[serde(rename = "frameId")]
    pub frame_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestartFrameResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GotoRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: GotoArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GotoArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
    #[serde(rename = "targetId")]
    pub target_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GotoResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: PauseArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackTraceRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: StackTraceArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackTraceArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
    #[serde(rename = "startFrame", skip_serializing_if = "Option::is_none")]
    pub start_frame: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub levels: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<StackFrameFormat>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackTraceResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: StackTraceResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackTraceResponseBody {
    #[serde(rename = "stackFrames")]
    pub stack_frames: Vec<StackFrame>,
    #[serde(rename = "totalFrames", skip_serializing_if = "Option::is_none")]
    pub total_frames: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopesRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: ScopesArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopesArguments {
    #[serde(rename = "frameId")]
    pub frame_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopesResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: ScopesResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopesResponseBody {
    pub scopes: Vec<Scope>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariablesRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: VariablesArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariablesArguments {
    #[serde(rename = "variablesReference")]
    pub variables_reference: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ValueFormat>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariablesResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: VariablesResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariablesResponseBody {
    pub variables: Vec<Variable>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetVariableRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: SetVariableArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetVariableArguments {
    #[serde(rename = "variablesReference")]
    pub variables_reference: i64,
    pub name: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ValueFormat>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetVariableResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: SetVariableResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetVariableResponseBody {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(rename = "variablesReference", skip_serializing_if = "Option::is_none")]
    pub variables_reference: Option<i64>,
    #[serde(rename = "namedVariables", skip_serializing_if = "Option::is_none")]
    pub named_variables: Option<i64>,
    #[serde(rename = "indexedVariables", skip_serializing_if = "Option::is_none")]
    pub indexed_variables: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: SourceArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceArguments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(rename = "sourceReference")]
    pub source_reference: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: SourceResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceResponseBody {
    pub content: String,
    #[serde(rename = "mimeType", skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadsRequest {
    #[serde(flatten)]
    pub request: Request,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadsResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: ThreadsResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadsResponseBody {
    pub threads: Vec<Thread>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateThreadsRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: TerminateThreadsArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateThreadsArguments {
    #[serde(rename = "threadIds", skip_serializing_if = "Option::is_none")]
    pub thread_ids: Option<Vec<i64>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminateThreadsResponse {
    #[serde(flatten)]
    pub response: Response,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: ModulesArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesArguments {
    #[serde(rename = "startModule", skip_serializing_if = "Option::is_none")]
    pub start_module: Option<i64>,
    #[serde(rename = "moduleCount", skip_serializing_if = "Option::is_none")]
    pub module_count: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: ModulesResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesResponseBody {
    pub modules: Vec<Module>,
    #[serde(rename = "totalModules", skip_serializing_if = "Option::is_none")]
    pub total_modules: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadedSourcesRequest {
    #[serde(flatten)]
    pub request: Request,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<LoadedSourcesArguments>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadedSourcesArguments {}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadedSourcesResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: LoadedSourcesResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadedSourcesResponseBody {
    pub sources: Vec<Source>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: EvaluateArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateArguments {
    pub expression: String,
    #[serde(rename = "frameId", skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ValueFormat>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: EvaluateResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateResponseBody {
    pub result: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(rename = "presentationHint", skip_serializing_if = "Option::is_none")]
    pub presentation_hint: Option<VariablePresentationHint>,
    #[serde(rename = "variablesReference")]
    pub variables_reference: i64,
    #[serde(rename = "namedVariables", skip_serializing_if = "Option::is_none")]
    pub named_variables: Option<i64>,
    #[serde(rename = "indexedVariables", skip_serializing_if = "Option::is_none")]
    pub indexed_variables: Option<i64>,
    #[serde(rename = "memoryReference", skip_serializing_if = "Option::is_none")]
    pub memory_reference: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetExpressionRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: SetExpressionArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetExpressionArguments {
    pub expression: String,
    pub value: String,
    #[serde(rename = "frameId", skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ValueFormat>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetExpressionResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: SetExpressionResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetExpressionResponseBody {
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(rename = "presentationHint", skip_serializing_if = "Option::is_none")]
    pub presentation_hint: Option<VariablePresentationHint>,
    #[serde(rename = "variablesReference", skip_serializing_if = "Option::is_none")]
    pub variables_reference: Option<i64>,
    #[serde(rename = "namedVariables", skip_serializing_if = "Option::is_none")]
    pub named_variables: Option<i64>,
    #[serde(rename = "indexedVariables", skip_serializing_if = "Option::is_none")]
    pub indexed_variables: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInTargetsRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: StepInTargetsArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInTargetsArguments {
    #[serde(rename = "frameId")]
    pub frame_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInTargetsResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: StepInTargetsResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInTargetsResponseBody {
    pub targets: Vec<StepInTarget>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GotoTargetsRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: GotoTargetsArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GotoTargetsArguments {
    pub source: Source,
    pub line: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GotoTargetsResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: GotoTargetsResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GotoTargetsResponseBody {
    pub targets: Vec<GotoTarget>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionsRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: CompletionsArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionsArguments {
    #[serde(rename = "frameId", skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<i64>,
    pub text: String,
    pub column: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionsResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: CompletionsResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionsResponseBody {
    pub targets: Vec<CompletionItem>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionInfoRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: ExceptionInfoArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionInfoArguments {
    #[serde(rename = "threadId")]
    pub thread_id: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionInfoResponse {
    #[serde(flatten)]
    pub response: Response,
    pub body: ExceptionInfoResponseBody,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionInfoResponseBody {
    #[serde(rename = "exceptionId")]
    pub exception_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "breakMode")]
    pub break_mode: ExceptionBreakMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ExceptionDetails>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadMemoryRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: ReadMemoryArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadMemoryArguments {
    #[serde(rename = "memoryReference")]
    pub memory_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    pub count: i64,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadMemoryResponse {
    #[serde(flatten)]
    pub response: Response,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<ReadMemoryResponseBody>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadMemoryResponseBody {
    pub address: String,
    #[serde(rename = "unreadableBytes", skip_serializing_if = "Option::is_none")]
    pub unreadable_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisassembleRequest {
    #[serde(flatten)]
    pub request: Request,
    pub arguments: DisassembleArguments,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisassembleArguments {
    #[serde(rename = "memoryReference")]
    pub memory_reference: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<i64>,
    #[serde(rename = "instructionOffset", skip_serializing_if = "Option::is_none")]
    pub instruction_offset: Option<i64>,
    #[serde(rename = "instructionCount")]
    pub instruction_count: i64,
    #[serde(rename = "resolveSymbols", skip_serializing_if = "Option::is_none")]
    pub resolve_symbols: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisassembleResponse {
    #[serde(flatten)]
    pub response: Response,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<DisassembleResponseBody>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisassembleResponseBody {
    pub instructions: Vec<DisassembledInstruction>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    #[serde(
        rename = "supportsConfigurationDoneRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_configuration_done_request: Option<bool>,
    #[serde(
        rename = "supportsFunctionBreakpoints",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_function_breakpoints: Option<bool>,
    #[serde(
        rename = "supportsConditionalBreakpoints",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_conditional_breakpoints: Option<bool>,
    #[serde(
        rename = "supportsHitConditionalBreakpoints",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_hit_conditional_breakpoints: Option<bool>,
    #[serde(
        rename = "supportsEvaluateForHovers",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_evaluate_for_hovers: Option<bool>,
    #[serde(
        rename = "exceptionBreakpointFilters",
        skip_serializing_if = "Option::is_none"
    )]
    pub exception_breakpoint_filters: Option<Vec<ExceptionBreakpointsFilter>>,
    #[serde(rename = "supportsStepBack", skip_serializing_if = "Option::is_none")]
    pub supports_step_back: Option<bool>,
    #[serde(rename = "supportsSetVariable", skip_serializing_if = "Option::is_none")]
    pub supports_set_variable: Option<bool>,
    #[serde(rename = "supportsRestartFrame", skip_serializing_if = "Option::is_none")]
    pub supports_restart_frame: Option<bool>,
    #[serde(
        rename = "supportsGotoTargetsRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_goto_targets_request: Option<bool>,
    #[serde(
        rename = "supportsStepInTargetsRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_step_in_targets_request: Option<bool>,
    #[serde(
        rename = "supportsCompletionsRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_completions_request: Option<bool>,
    #[serde(
        rename = "completionTriggerCharacters",
        skip_serializing_if = "Option::is_none"
    )]
    pub completion_trigger_characters: Option<Vec<String>>,
    #[serde(
        rename = "supportsModulesRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_modules_request: Option<bool>,
    #[serde(
        rename = "additionalModuleColumns",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_module_columns: Option<Vec<ColumnDescriptor>>,
    #[serde(
        rename = "supportedChecksumAlgorithms",
        skip_serializing_if = "Option::is_none"
    )]
    pub supported_checksum_algorithms: Option<Vec<ChecksumAlgorithm>>,
    #[serde(
        rename = "supportsRestartRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_restart_request: Option<bool>,
    #[serde(
        rename = "supportsExceptionOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_exception_options: Option<bool>,
    #[serde(
        rename = "supportsValueFormattingOptions",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_value_formatting_options: Option<bool>,
    #[serde(
        rename = "supportsExceptionInfoRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_exception_info_request: Option<bool>,
    #[serde(
        rename = "supportTerminateDebuggee",
        skip_serializing_if = "Option::is_none"
    )]
    pub support_terminate_debuggee: Option<bool>,
    #[serde(
        rename = "supportsDelayedStackTraceLoading",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_delayed_stack_trace_loading: Option<bool>,
    #[serde(
        rename = "supportsLoadedSourcesRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_loaded_sources_request: Option<bool>,
    #[serde(rename = "supportsLogPoints", skip_serializing_if = "Option::is_none")]
    pub supports_log_points: Option<bool>,
    #[serde(
        rename = "supportsTerminateThreadsRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_terminate_threads_request: Option<bool>,
    #[serde(
        rename = "supportsSetExpression",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_set_expression: Option<bool>,
    #[serde(
        rename = "supportsTerminateRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_terminate_request: Option<bool>,
    #[serde(
        rename = "supportsDataBreakpoints",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_data_breakpoints: Option<bool>,
    #[serde(
        rename = "supportsReadMemoryRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_read_memory_request: Option<bool>,
    #[serde(
        rename = "supportsDisassembleRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_disassemble_request: Option<bool>,
    #[serde(
        rename = "supportsCancelRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_cancel_request: Option<bool>,
    #[serde(
        rename = "supportsBreakpointLocationsRequest",
        skip_serializing_if = "Option::is_none"
    )]
    pub supports_breakpoint_locations_request: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionBreakpointsFilter {
    pub filter: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessage {
    pub id: i64,
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<HashMap<String, String>>,
    #[serde(rename = "sendTelemetry", skip_serializing_if = "Option::is_none")]
    pub send_telemetry: Option<bool>,
    #[serde(rename = "showUser", skip_serializing_if = "Option::is_none")]
    pub show_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "urlLabel", skip_serializing_if = "Option::is_none")]
    pub url_label: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Module {
    pub id: Value,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "isOptimized", skip_serializing_if = "Option::is_none")]
    pub is_optimized: Option<bool>,
    #[serde(rename = "isUserCode", skip_serializing_if = "Option::is_none")]
    pub is_user_code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "symbolStatus", skip_serializing_if = "Option::is_none")]
    pub symbol_status: Option<String>,
    #[serde(rename = "symbolFilePath", skip_serializing_if = "Option::is_none")]
    pub symbol_file_path: Option<String>,
    #[serde(rename = "dateTimeStamp", skip_serializing_if = "Option::is_none")]
    pub date_time_stamp: Option<String>,
    #[serde(rename = "addressRange", skip_serializing_if = "Option::is_none")]
    pub address_range: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnDescriptor {
    #[serde(rename = "attributeName")]
    pub attribute_name: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModulesViewDescriptor {
    pub columns: Vec<ColumnDescriptor>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thread {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Source {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(rename = "sourceReference", skip_serializing_if = "Option::is_none")]
    pub source_reference: Option<i64>,
    #[serde(rename = "presentationHint", skip_serializing_if = "Option::is_none")]
    pub presentation_hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
    #[serde(rename = "adapterData", skip_serializing_if = "Option::is_none")]
    pub adapter_data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksums: Option<Vec<Checksum>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackFrame {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    pub line: i64,
    pub column: i64,
    #[serde(rename = "endLine", skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
    #[serde(rename = "endColumn", skip_serializing_if = "Option::is_none")]
    pub end_column: Option<i64>,
    #[serde(
        rename = "instructionPointerReference",
        skip_serializing_if = "Option::is_none"
    )]
    pub instruction_pointer_reference: Option<String>,
    #[serde(rename = "moduleId", skip_serializing_if = "Option::is_none")]
    pub module_id: Option<Value>,
    #[serde(rename = "presentationHint", skip_serializing_if = "Option::is_none")]
    pub presentation_hint: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scope {
    pub name: String,
    #[serde(rename = "presentationHint", skip_serializing_if = "Option::is_none")]
    pub presentation_hint: Option<String>,
    #[serde(rename = "variablesReference")]
    pub variables_reference: i64,
    #[serde(rename = "namedVariables", skip_serializing_if = "Option::is_none")]
    pub named_variables: Option<i64>,
    #[serde(rename = "indexedVariables", skip_serializing_if = "Option::is_none")]
    pub indexed_variables: Option<i64>,
    pub expensive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
    #[serde(rename = "endLine", skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
    #[serde(rename = "endColumn", skip_serializing_if = "Option::is_none")]
    pub end_column: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variable {
    pub name: String,
    pub value: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(rename = "presentationHint", skip_serializing_if = "Option::is_none")]
    pub presentation_hint: Option<VariablePresentationHint>,
    #[serde(rename = "evaluateName", skip_serializing_if = "Option::is_none")]
    pub evaluate_name: Option<String>,
    #[serde(rename = "variablesReference")]
    pub variables_reference: i64,
    #[serde(rename = "namedVariables", skip_serializing_if = "Option::is_none")]
    pub named_variables: Option<i64>,
    #[serde(rename = "indexedVariables", skip_serializing_if = "Option::is_none")]
    pub indexed_variables: Option<i64>,
    #[serde(rename = "memoryReference", skip_serializing_if = "Option::is_none")]
    pub memory_reference: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariablePresentationHint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointLocation {
    pub line: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
    #[serde(rename = "endLine", skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
    #[serde(rename = "endColumn", skip_serializing_if = "Option::is_none")]
    pub end_column: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceBreakpoint {
    pub line: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "hitCondition", skip_serializing_if = "Option::is_none")]
    pub hit_condition: Option<String>,
    #[serde(rename = "logMessage", skip_serializing_if = "Option::is_none")]
    pub log_message: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionBreakpoint {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "hitCondition", skip_serializing_if = "Option::is_none")]
    pub hit_condition: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataBreakpointAccessType(pub String);

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataBreakpoint {
    #[serde(rename = "dataId")]
    pub data_id: String,
    #[serde(rename = "accessType", skip_serializing_if = "Option::is_none")]
    pub access_type: Option<DataBreakpointAccessType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(rename = "hitCondition", skip_serializing_if = "Option::is_none")]
    pub hit_condition: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
    #[serde(rename = "endLine", skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
    #[serde(rename = "endColumn", skip_serializing_if = "Option::is_none")]
    pub end_column: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepInTarget {
    pub id: i64,
    pub label: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GotoTarget {
    pub id: i64,
    pub label: String,
    pub line: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
    #[serde(rename = "endLine", skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
    #[serde(rename = "endColumn", skip_serializing_if = "Option::is_none")]
    pub end_column: Option<i64>,
    #[serde(
        rename = "instructionPointerReference",
        skip_serializing_if = "Option::is_none"
    )]
    pub instruction_pointer_reference: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompletionItem {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(rename = "sortText", skip_serializing_if = "Option::is_none")]
    pub sort_text: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<CompletionItemType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<i64>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItemType(pub String);

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecksumAlgorithm(pub String);

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Checksum {
    pub algorithm: ChecksumAlgorithm,
    pub checksum: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackFrameFormat {
    #[serde(flatten)]
    pub value_format: ValueFormat,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<bool>,
    #[serde(rename = "parameterTypes", skip_serializing_if = "Option::is_none")]
    pub parameter_types: Option<bool>,
    #[serde(rename = "parameterNames", skip_serializing_if = "Option::is_none")]
    pub parameter_names: Option<bool>,
    #[serde(rename = "parameterValues", skip_serializing_if = "Option::is_none")]
    pub parameter_values: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<bool>,
    #[serde(rename = "includeAll", skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<ExceptionPathSegment>>,
    #[serde(rename = "breakMode")]
    pub break_mode: ExceptionBreakMode,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionBreakMode(pub String);

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionPathSegment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negate: Option<bool>,
    pub names: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExceptionDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(rename = "typeName", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(rename = "fullTypeName", skip_serializing_if = "Option::is_none")]
    pub full_type_name: Option<String>,
    #[serde(rename = "evaluateName", skip_serializing_if = "Option::is_none")]
    pub evaluate_name: Option<String>,
    #[serde(rename = "stackTrace", skip_serializing_if = "Option::is_none")]
    pub stack_trace: Option<String>,
    #[serde(rename = "innerException", skip_serializing_if = "Option::is_none")]
    pub inner_exception: Option<Vec<ExceptionDetails>>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisassembledInstruction {
    pub address: String,
    #[serde(rename = "instructionBytes", skip_serializing_if = "Option::is_none")]
    pub instruction_bytes: Option<String>,
    pub instruction: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<i64>,
    #[serde(rename = "endLine", skip_serializing_if = "Option::is_none")]
    pub end_line: Option<i64>,
    #[serde(rename = "endColumn", skip_serializing_if = "Option::is_none")]
    pub end_column: Option<i64>,
}

impl_base_message!(ProtocolMessage, seq);
impl_base_message!(Request, protocol_message.seq);
impl_base_message!(Response, protocol_message.seq);
impl_base_message!(Event, protocol_message.seq);

impl RequestMessage for Request {
    fn request(&self) -> &Request {
        self
    }
}

impl ResponseMessage for Response {
    fn response(&self) -> &Response {
        self
    }
}

impl EventMessage for Event {
    fn event(&self) -> &Event {
        self
    }
}

impl_request_message!(
    CancelRequest,
    RunInTerminalRequest,
    InitializeRequest,
    ConfigurationDoneRequest,
    LaunchRequest,
    AttachRequest,
    RestartRequest,
    DisconnectRequest,
    TerminateRequest,
    BreakpointLocationsRequest,
    SetBreakpointsRequest,
    SetFunctionBreakpointsRequest,
    SetExceptionBreakpointsRequest,
    DataBreakpointInfoRequest,
    SetDataBreakpointsRequest,
    ContinueRequest,
    NextRequest,
    StepInRequest,
    StepOutRequest,
    StepBackRequest,
    ReverseContinueRequest,
    RestartFrameRequest,
    GotoRequest,
    PauseRequest,
    StackTraceRequest,
    ScopesRequest,
    VariablesRequest,
    SetVariableRequest,
    SourceRequest,
    ThreadsRequest,
    TerminateThreadsRequest,
    ModulesRequest,
    LoadedSourcesRequest,
    EvaluateRequest,
    SetExpressionRequest,
    StepInTargetsRequest,
    GotoTargetsRequest,
    CompletionsRequest,
    ExceptionInfoRequest,
    ReadMemoryRequest,
    DisassembleRequest,
);

impl_response_message!(
    ErrorResponse,
    CancelResponse,
    RunInTerminalResponse,
    InitializeResponse,
    ConfigurationDoneResponse,
    LaunchResponse,
    AttachResponse,
    RestartResponse,
    DisconnectResponse,
    TerminateResponse,
    BreakpointLocationsResponse,
    SetBreakpointsResponse,
    SetFunctionBreakpointsResponse,
    SetExceptionBreakpointsResponse,
    DataBreakpointInfoResponse,
    SetDataBreakpointsResponse,
    ContinueResponse,
    NextResponse,
    StepInResponse,
    StepOutResponse,
    StepBackResponse,
    ReverseContinueResponse,
    RestartFrameResponse,
    GotoResponse,
    PauseResponse,
    StackTraceResponse,
    ScopesResponse,
    VariablesResponse,
    SetVariableResponse,
    SourceResponse,
    ThreadsResponse,
    TerminateThreadsResponse,
    ModulesResponse,
    LoadedSourcesResponse,
    EvaluateResponse,
    SetExpressionResponse,
    StepInTargetsResponse,
    GotoTargetsResponse,
    CompletionsResponse,
    ExceptionInfoResponse,
    ReadMemoryResponse,
    DisassembleResponse,
);

impl_event_message!(
    InitializedEvent,
    StoppedEvent,
    ContinuedEvent,
    ExitedEvent,
    TerminatedEvent,
    ThreadEvent,
    OutputEvent,
    BreakpointEvent,
    ModuleEvent,
    LoadedSourceEvent,
    ProcessEvent,
    CapabilitiesEvent,
);

impl LaunchAttachRequest for LaunchRequest {
    fn arguments(&self) -> &Map<String, Value> {
        &self.arguments
    }
}

impl LaunchAttachRequest for AttachRequest {
    fn arguments(&self) -> &Map<String, Value> {
        &self.arguments
    }
}

pub(crate) fn register_defaults(codec: &mut Codec) -> Result<()> {
    codec.register_request::<CancelRequest, CancelResponse>("cancel")?;
    codec.register_request::<RunInTerminalRequest, RunInTerminalResponse>("runInTerminal")?;
    codec.register_request::<InitializeRequest, InitializeResponse>("initialize")?;
    codec.register_request::<ConfigurationDoneRequest, ConfigurationDoneResponse>(
        "configurationDone",
    )?;
    codec.register_request::<LaunchRequest, LaunchResponse>("launch")?;
    codec.register_request::<AttachRequest, AttachResponse>("attach")?;
    codec.register_request::<RestartRequest, RestartResponse>("restart")?;
    codec.register_request::<DisconnectRequest, DisconnectResponse>("disconnect")?;
    codec.register_request::<TerminateRequest, TerminateResponse>("terminate")?;
    codec.register_request::<BreakpointLocationsRequest, BreakpointLocationsResponse>(
        "breakpointLocations",
    )?;
    codec.register_request::<SetBreakpointsRequest, SetBreakpointsResponse>("setBreakpoints")?;
    codec.register_request::<SetFunctionBreakpointsRequest, SetFunctionBreakpointsResponse>(
        "setFunctionBreakpoints",
    )?;
    codec.register_request::<SetExceptionBreakpointsRequest, SetExceptionBreakpointsResponse>(
        "setExceptionBreakpoints",
    )?;
    codec.register_request::<DataBreakpointInfoRequest, DataBreakpointInfoResponse>(
        "dataBreakpointInfo",
    )?;
    codec.register_request::<SetDataBreakpointsRequest, SetDataBreakpointsResponse>(
        "setDataBreakpoints",
    )?;
    codec.register_request::<ContinueRequest, ContinueResponse>("continue")?;
    codec.register_request::<NextRequest, NextResponse>("next")?;
    codec.register_request::<StepInRequest, StepInResponse>("stepIn")?;
    codec.register_request::<StepOutRequest, StepOutResponse>("stepOut")?;
    codec.register_request::<StepBackRequest, StepBackResponse>("stepBack")?;
    codec.register_request::<ReverseContinueRequest, ReverseContinueResponse>("reverseContinue")?;
    codec.register_request::<RestartFrameRequest, RestartFrameResponse>("restartFrame")?;
    codec.register_request::<GotoRequest, GotoResponse>("goto")?;
    codec.register_request::<PauseRequest, PauseResponse>("pause")?;
    codec.register_request::<StackTraceRequest, StackTraceResponse>("stackTrace")?;
    codec.register_request::<ScopesRequest, ScopesResponse>("scopes")?;
    codec.register_request::<VariablesRequest, VariablesResponse>("variables")?;
    codec.register_request::<SetVariableRequest, SetVariableResponse>("setVariable")?;
    codec.register_request::<SourceRequest, SourceResponse>("source")?;
    codec.register_request::<ThreadsRequest, ThreadsResponse>("threads")?;
    codec.register_request::<TerminateThreadsRequest, TerminateThreadsResponse>(
        "terminateThreads",
    )?;
    codec.register_request::<ModulesRequest, ModulesResponse>("modules")?;
    codec.register_request::<LoadedSourcesRequest, LoadedSourcesResponse>("loadedSources")?;
    codec.register_request::<EvaluateRequest, EvaluateResponse>("evaluate")?;
    codec.register_request::<SetExpressionRequest, SetExpressionResponse>("setExpression")?;
    codec.register_request::<StepInTargetsRequest, StepInTargetsResponse>("stepInTargets")?;
    codec.register_request::<GotoTargetsRequest, GotoTargetsResponse>("gotoTargets")?;
    codec.register_request::<CompletionsRequest, CompletionsResponse>("completions")?;
    codec.register_request::<ExceptionInfoRequest, ExceptionInfoResponse>("exceptionInfo")?;
    codec.register_request::<ReadMemoryRequest, ReadMemoryResponse>("readMemory")?;
    codec.register_request::<DisassembleRequest, DisassembleResponse>("disassemble")?;

    codec.register_event::<InitializedEvent>("initialized")?;
    codec.register_event::<StoppedEvent>("stopped")?;
    codec.register_event::<ContinuedEvent>("continued")?;
    codec.register_event::<ExitedEvent>("exited")?;
    codec.register_event::<TerminatedEvent>("terminated")?;
    codec.register_event::<ThreadEvent>("thread")?;
    codec.register_event::<OutputEvent>("output")?;
    codec.register_event::<BreakpointEvent>("breakpoint")?;
    codec.register_event::<ModuleEvent>("module")?;
    codec.register_event::<LoadedSourceEvent>("loadedSource")?;
    codec.register_event::<ProcessEvent>("process")?;
    codec.register_event::<CapabilitiesEvent>("capabilities")?;

    Ok(())
}
