//! gentypes generates the DAP schema types module from `debugProtocol.json`.
//!
//! Usage:
//!
//! ```text
//! $ gentypes <path to debugProtocol.json> > src/types.rs
//! ```
//!
//! The module is printed to stdout, piped through `rustfmt` when one is on
//! the `PATH`. Any schema violation exits nonzero with a diagnostic.
//!
//! Definition and property order in the output follow the schema's
//! declaration order (`serde_json`'s `preserve_order` feature keeps the
//! parsed tree ordered), so regenerating from the same schema is
//! byte-identical.

use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::{Map, Value};

/// Schema definitions renamed on emission. `Message` would collide with
/// the `Message` trait.
const RENAMES: &[(&str, &str)] = &[("Message", "ErrorMessage")];

/// Types that embed a base without declaring `allOf`, with the base's
/// duplicated properties to drop. The schema never states this rule, so it
/// stays a hand-maintained list.
const EMBED_OVERRIDES: &[(&str, &str, &[&str])] = &[("StackFrameFormat", "ValueFormat", &["hex"])];

/// Argument definitions with no fixed schema shape, emitted as opaque
/// JSON objects.
const OPAQUE_ARGUMENTS: &[&str] = &["LaunchRequestArguments", "AttachRequestArguments"];

const PREAMBLE: &str = "\
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

";

#[derive(Parser)]
#[command(
    name = "gentypes",
    about = "Generates the dapwire schema types module from debugProtocol.json"
)]
struct Args {
    /// Path to the upstream debugProtocol.json schema.
    schema: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let input = fs::read_to_string(&args.schema)
        .with_context(|| format!("reading {}", args.schema.display()))?;
    let schema: Value =
        serde_json::from_str(&input).context("parsing debugProtocol.json")?;

    let generated = generate(&schema)?;
    print!("{}", format_source(&generated));
    Ok(())
}

/// Emission state gathered while walking the definitions.
#[derive(Default)]
struct Generator {
    /// Emitted type names, for response pairing checks.
    names: HashSet<String>,
    /// Concrete request variants in emission order.
    request_variants: Vec<String>,
    /// Concrete response variants in emission order.
    response_variants: Vec<String>,
    /// Concrete event variants in emission order.
    event_variants: Vec<String>,
    /// Wire command name and request type, in schema order.
    commands: Vec<(String, String)>,
    /// Wire event name and event type, in schema order.
    events: Vec<(String, String)>,
    /// Request types whose arguments are opaque JSON objects.
    launch_attach: Vec<String>,
}

/// Generates the complete types module source from the parsed schema.
fn generate(schema: &Value) -> Result<String> {
    let definitions = schema
        .get("definitions")
        .and_then(Value::as_object)
        .context("schema has no top-level 'definitions' object")?;

    let mut gen = Generator::default();
    let mut out = String::from(PREAMBLE);

    for (name, desc) in definitions {
        let desc = desc
            .as_object()
            .with_context(|| format!("definition '{name}' is not an object"))?;
        let emitted = gen.emit_toplevel_type(name, desc)?;
        out.push_str(&emitted);
        out.push('\n');
    }

    gen.emit_trailer(&mut out)?;
    Ok(out)
}

/// Resolves a `"$ref"` value like `#/definitions/ProtocolMessage` to the
/// emitted type name.
fn parse_ref(ref_value: &Value) -> Result<String> {
    let reference = ref_value
        .as_str()
        .with_context(|| format!("$ref is not a string: {ref_value}"))?;
    let name = reference
        .strip_prefix("#/definitions/")
        .with_context(|| format!("want $ref to start with '#/definitions/', got {reference}"))?;
    Ok(rename(name).to_string())
}

fn rename(name: &str) -> &str {
    RENAMES
        .iter()
        .find(|(from, _)| *from == name)
        .map(|(_, to)| *to)
        .unwrap_or(name)
}

/// Converts a schema property name to a Rust field identifier:
/// `camelCase` (occasionally with leading underscores) to `snake_case`,
/// with a trailing underscore when the result is a Rust keyword.
fn field_ident(prop_name: &str) -> String {
    let mut ident = String::with_capacity(prop_name.len() + 4);
    let mut prev_lower = false;
    for c in prop_name.chars() {
        if c == '_' {
            // Leading underscores (`__restart`) carry no meaning in the
            // identifier; the wire name is preserved by the rename.
            continue;
        }
        if c.is_ascii_uppercase() {
            if prev_lower {
                ident.push('_');
            }
            ident.push(c.to_ascii_lowercase());
            prev_lower = false;
        } else {
            ident.push(c);
            prev_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    if is_keyword(&ident) {
        ident.push('_');
    }
    ident
}

fn is_keyword(ident: &str) -> bool {
    matches!(
        ident,
        "type" | "ref" | "box" | "move" | "use" | "mod" | "loop" | "match" | "else" | "if"
            | "in" | "fn" | "let" | "pub" | "return" | "self" | "super" | "trait" | "impl"
            | "enum" | "struct" | "static" | "const" | "continue" | "break" | "crate"
            | "where" | "while" | "for" | "dyn" | "async" | "await" | "true" | "false"
    )
}

/// Maps a property description to the emitted Rust type.
fn parse_property_type(prop: &Map<String, Value>) -> Result<String> {
    if let Some(reference) = prop.get("$ref") {
        return parse_ref(reference);
    }

    let prop_type = prop
        .get("type")
        .with_context(|| format!("property with no type or $ref: {prop:?}"))?;

    match prop_type {
        Value::String(s) => match s.as_str() {
            "string" => Ok("String".to_string()),
            "integer" => Ok("i64".to_string()),
            "boolean" => Ok("bool".to_string()),
            "array" => {
                let items = prop
                    .get("items")
                    .and_then(Value::as_object)
                    .with_context(|| format!("missing items for array property: {prop:?}"))?;
                Ok(format!("Vec<{}>", parse_property_type(items)?))
            }
            "object" => {
                let value_type = prop
                    .get("additionalProperties")
                    .and_then(Value::as_object)
                    .with_context(|| {
                        format!("missing additionalProperties for object property: {prop:?}")
                    })?;
                Ok(format!(
                    "HashMap<String, {}>",
                    parse_property_type(value_type)?
                ))
            }
            other => bail!("unknown property type value '{other}'"),
        },
        // A union of several types has no better rendering than an opaque
        // JSON value.
        Value::Array(_) => Ok("Value".to_string()),
        other => bail!("unknown property type: {other}"),
    }
}

/// First enum member of a discriminator refinement, e.g.
/// `{"type": "string", "enum": ["cancel"]}` gives `cancel`.
fn enum_value(prop: &Value) -> Option<&str> {
    prop.as_object()?.get("enum")?.as_array()?.first()?.as_str()
}

impl Generator {
    /// Emits one schema definition as Rust source, recording variant and
    /// registration metadata along the way.
    fn emit_toplevel_type(&mut self, name: &str, desc: &Map<String, Value>) -> Result<String> {
        let emitted_name = rename(name).to_string();
        self.names.insert(emitted_name.clone());

        if OPAQUE_ARGUMENTS.contains(&name) {
            let role = name.strip_suffix("RequestArguments").unwrap_or(name);
            return Ok(format!(
                "/// {role} arguments are adapter-defined; the schema gives them no fixed\n\
                 /// shape, so they surface as an opaque JSON object.\n\
                 pub type {emitted_name} = Map<String, Value>;\n"
            ));
        }

        // An allOf definition is a two-element list: a reference to the
        // base type, then the description of this type's own fields.
        let mut skip_props: &[&str] = &[];
        let (base, desc) = if let Some(all_of) = desc.get("allOf") {
            let list = all_of
                .as_array()
                .with_context(|| format!("allOf of '{name}' is not a list"))?;
            if list.len() != 2 {
                bail!("want 2 elements in allOf of '{name}', got {}", list.len());
            }
            let base_ref = list[0]
                .as_object()
                .and_then(|o| o.get("$ref"))
                .with_context(|| format!("first allOf element of '{name}' is not a $ref"))?;
            let own = list[1]
                .as_object()
                .with_context(|| format!("second allOf element of '{name}' is not an object"))?;
            (Some(parse_ref(base_ref)?), own)
        } else if let Some((_, base, skips)) =
            EMBED_OVERRIDES.iter().find(|(n, _, _)| *n == name)
        {
            skip_props = *skips;
            (Some(base.to_string()), desc)
        } else {
            (None, desc)
        };

        let desc_type = desc
            .get("type")
            .and_then(Value::as_str)
            .with_context(|| format!("definition '{name}' has no 'type'"))?;

        if desc_type == "string" {
            return Ok(format!(
                "#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]\n\
                 pub struct {emitted_name}(pub String);\n"
            ));
        }
        if desc_type != "object" {
            bail!("want definition '{name}' to be object or string, got '{desc_type}'");
        }

        match base.as_deref() {
            Some("Request") => self.request_variants.push(emitted_name.clone()),
            Some("Response") => self.response_variants.push(emitted_name.clone()),
            Some("Event") => self.event_variants.push(emitted_name.clone()),
            _ => {}
        }

        let mut b = String::new();
        writeln!(
            b,
            "#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]"
        )?;
        writeln!(b, "#[serde(default)]")?;
        writeln!(b, "pub struct {emitted_name} {{")?;
        if let Some(base) = &base {
            writeln!(b, "    #[serde(flatten)]")?;
            writeln!(b, "    pub {}: {},", field_ident(base), base)?;
        }

        let required: HashSet<&str> = desc
            .get("required")
            .and_then(Value::as_array)
            .map(|list| list.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        // An inline body is hoisted to its own `<Parent>Body` type and
        // emitted after the parent.
        let mut hoisted_body: Option<String> = None;

        if let Some(props) = desc.get("properties").and_then(Value::as_object) {
            for (prop_name, prop_value) in props {
                if skip_props.contains(&prop_name.as_str()) {
                    continue;
                }
                // The schema refines inherited discriminators with enum
                // values; each field may appear only once per hierarchy,
                // so the refinements are dropped and only recorded.
                if prop_name == "type"
                    && matches!(name, "Request" | "Response" | "Event")
                {
                    continue;
                }
                if prop_name == "command" && name != "Request" && name != "Response" {
                    if base.as_deref() == Some("Request") {
                        if let Some(command) = enum_value(prop_value) {
                            self.commands
                                .push((command.to_string(), emitted_name.clone()));
                        }
                    }
                    continue;
                }
                if prop_name == "event" && name != "Event" {
                    if base.as_deref() == Some("Event") {
                        if let Some(event) = enum_value(prop_value) {
                            self.events.push((event.to_string(), emitted_name.clone()));
                        }
                    }
                    continue;
                }
                if prop_name == "arguments" && name == "Request" {
                    continue;
                }

                if prop_name == "body" {
                    if name == "Response" || name == "Event" {
                        continue;
                    }
                    let body_desc = prop_value
                        .as_object()
                        .with_context(|| format!("body of '{name}' is not an object"))?;
                    let body_type = if let Some(reference) = body_desc.get("$ref") {
                        parse_ref(reference)?
                    } else {
                        if hoisted_body.is_some() {
                            bail!("'{name}' declares more than one inline body");
                        }
                        let body_name = format!("{emitted_name}Body");
                        hoisted_body = Some(self.emit_toplevel_type(&body_name, body_desc)?);
                        body_name
                    };
                    emit_field(&mut b, "body", &body_type, required.contains("body"))?;
                    continue;
                }

                let prop_desc = prop_value.as_object().with_context(|| {
                    format!("property '{prop_name}' of '{name}' is not an object")
                })?;
                let prop_type = parse_property_type(prop_desc)?;
                if prop_name == "arguments" && OPAQUE_ARGUMENTS.contains(&prop_type.as_str()) {
                    self.launch_attach.push(emitted_name.clone());
                }
                emit_field(&mut b, prop_name, &prop_type, required.contains(prop_name.as_str()))?;
            }
        }

        writeln!(b, "}}")?;

        if let Some(body) = hoisted_body {
            b.push('\n');
            b.push_str(&body);
        }

        Ok(b)
    }

    /// Emits the trait impls and the default registration table.
    fn emit_trailer(&self, out: &mut String) -> Result<()> {
        out.push_str(
            "impl_base_message!(ProtocolMessage, seq);\n\
             impl_base_message!(Request, protocol_message.seq);\n\
             impl_base_message!(Response, protocol_message.seq);\n\
             impl_base_message!(Event, protocol_message.seq);\n\n",
        );
        out.push_str(
            "impl RequestMessage for Request {\n    fn request(&self) -> &Request {\n        self\n    }\n}\n\n\
             impl ResponseMessage for Response {\n    fn response(&self) -> &Response {\n        self\n    }\n}\n\n\
             impl EventMessage for Event {\n    fn event(&self) -> &Event {\n        self\n    }\n}\n\n",
        );

        emit_macro_invocation(out, "impl_request_message", &self.request_variants)?;
        emit_macro_invocation(out, "impl_response_message", &self.response_variants)?;
        emit_macro_invocation(out, "impl_event_message", &self.event_variants)?;

        for parent in &self.launch_attach {
            writeln!(
                out,
                "impl LaunchAttachRequest for {parent} {{\n    fn arguments(&self) -> &Map<String, Value> {{\n        &self.arguments\n    }}\n}}\n"
            )?;
        }

        writeln!(
            out,
            "pub(crate) fn register_defaults(codec: &mut Codec) -> Result<()> {{"
        )?;
        for (command, request_type) in &self.commands {
            let stem = request_type
                .strip_suffix("Request")
                .with_context(|| format!("request type '{request_type}' lacks Request suffix"))?;
            let response_type = format!("{stem}Response");
            if !self.names.contains(&response_type) {
                bail!("command '{command}' has no '{response_type}' definition");
            }
            writeln!(
                out,
                "    codec.register_request::<{request_type}, {response_type}>(\"{command}\")?;"
            )?;
        }
        writeln!(out)?;
        for (event, event_type) in &self.events {
            writeln!(
                out,
                "    codec.register_event::<{event_type}>(\"{event}\")?;"
            )?;
        }
        writeln!(out, "\n    Ok(())\n}}")?;
        Ok(())
    }
}

/// Emits one struct field with its serde annotations.
fn emit_field(b: &mut String, wire_name: &str, prop_type: &str, required: bool) -> Result<()> {
    let ident = field_ident(wire_name);
    let mut attrs = Vec::new();
    if ident != wire_name {
        attrs.push(format!("rename = \"{wire_name}\""));
    }
    if !required {
        attrs.push("skip_serializing_if = \"Option::is_none\"".to_string());
    }
    if !attrs.is_empty() {
        writeln!(b, "    #[serde({})]", attrs.join(", "))?;
    }
    if required {
        writeln!(b, "    pub {ident}: {prop_type},")?;
    } else {
        writeln!(b, "    pub {ident}: Option<{prop_type}>,")?;
    }
    Ok(())
}

fn emit_macro_invocation(out: &mut String, name: &str, types: &[String]) -> Result<()> {
    if types.is_empty() {
        return Ok(());
    }
    writeln!(out, "{name}!(")?;
    for t in types {
        writeln!(out, "    {t},")?;
    }
    writeln!(out, ");\n")?;
    Ok(())
}

/// Pipes the generated source through `rustfmt` so the output is
/// diff-stable. Falls back to the unformatted source when `rustfmt` is
/// unavailable or rejects the input.
fn format_source(source: &str) -> String {
    let child = Command::new("rustfmt")
        .args(["--edition", "2021"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn();

    let mut child = match child {
        Ok(child) => child,
        Err(_) => {
            eprintln!("warning: rustfmt not found, emitting unformatted output");
            return source.to_string();
        }
    };

    let written = child
        .stdin
        .take()
        .map(|mut stdin| stdin.write_all(source.as_bytes()));
    if !matches!(written, Some(Ok(()))) {
        return source.to_string();
    }

    match child.wait_with_output() {
        Ok(output) if output.status.success() => {
            String::from_utf8(output.stdout).unwrap_or_else(|_| source.to_string())
        }
        _ => {
            eprintln!("warning: rustfmt failed, emitting unformatted output");
            source.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SCHEMA: &str = r##"{
        "definitions": {
            "ProtocolMessage": {
                "type": "object",
                "properties": {
                    "seq": {"type": "integer"},
                    "type": {"type": "string"}
                },
                "required": ["seq", "type"]
            },
            "Request": {
                "allOf": [{"$ref": "#/definitions/ProtocolMessage"}, {
                    "type": "object",
                    "properties": {
                        "type": {"type": "string", "enum": ["request"]},
                        "command": {"type": "string"},
                        "arguments": {"type": ["array", "boolean", "object", "string"]}
                    },
                    "required": ["command"]
                }]
            },
            "Event": {
                "allOf": [{"$ref": "#/definitions/ProtocolMessage"}, {
                    "type": "object",
                    "properties": {
                        "type": {"type": "string", "enum": ["event"]},
                        "event": {"type": "string"}
                    },
                    "required": ["event"]
                }]
            },
            "Response": {
                "allOf": [{"$ref": "#/definitions/ProtocolMessage"}, {
                    "type": "object",
                    "properties": {
                        "type": {"type": "string", "enum": ["response"]},
                        "request_seq": {"type": "integer"},
                        "success": {"type": "boolean"},
                        "command": {"type": "string"},
                        "message": {"type": "string"},
                        "body": {"type": ["array", "boolean", "object", "string"]}
                    },
                    "required": ["request_seq", "success", "command"]
                }]
            },
            "Message": {
                "type": "object",
                "properties": {
                    "id": {"type": "integer"},
                    "format": {"type": "string"},
                    "variables": {"type": "object", "additionalProperties": {"type": "string"}}
                },
                "required": ["id", "format"]
            },
            "ZigRequest": {
                "allOf": [{"$ref": "#/definitions/Request"}, {
                    "type": "object",
                    "properties": {
                        "command": {"type": "string", "enum": ["zig"]},
                        "arguments": {"$ref": "#/definitions/ZigArguments"}
                    },
                    "required": ["command", "arguments"]
                }]
            },
            "ZigArguments": {
                "type": "object",
                "properties": {
                    "threadId": {"type": "integer"},
                    "label": {"type": "string"},
                    "data": {"type": ["string", "integer"]},
                    "filters": {"type": "array", "items": {"type": "string"}}
                },
                "required": ["threadId"]
            },
            "ZigResponse": {
                "allOf": [{"$ref": "#/definitions/Response"}, {
                    "type": "object",
                    "properties": {
                        "body": {
                            "type": "object",
                            "properties": {
                                "ok": {"type": "boolean"},
                                "error": {"$ref": "#/definitions/Message"}
                            },
                            "required": ["ok"]
                        }
                    },
                    "required": ["body"]
                }]
            },
            "ZagEvent": {
                "allOf": [{"$ref": "#/definitions/Event"}, {
                    "type": "object",
                    "properties": {
                        "event": {"type": "string", "enum": ["zag"]}
                    },
                    "required": ["event"]
                }]
            },
            "LaunchRequest": {
                "allOf": [{"$ref": "#/definitions/Request"}, {
                    "type": "object",
                    "properties": {
                        "command": {"type": "string", "enum": ["launch"]},
                        "arguments": {"$ref": "#/definitions/LaunchRequestArguments"}
                    },
                    "required": ["command", "arguments"]
                }]
            },
            "LaunchRequestArguments": {
                "type": "object",
                "properties": {
                    "noDebug": {"type": "boolean"},
                    "__restart": {"type": ["array", "boolean", "object", "string"]}
                }
            },
            "LaunchResponse": {
                "allOf": [{"$ref": "#/definitions/Response"}, {"type": "object"}]
            },
            "ValueFormat": {
                "type": "object",
                "properties": {
                    "hex": {"type": "boolean"}
                }
            },
            "StackFrameFormat": {
                "type": "object",
                "properties": {
                    "hex": {"type": "boolean"},
                    "includeAll": {"type": "boolean"}
                }
            },
            "ZigKind": {
                "type": "string"
            }
        }
    }"##;

    fn generate_test_schema() -> String {
        let schema: Value = serde_json::from_str(TEST_SCHEMA).unwrap();
        generate(&schema).unwrap()
    }

    #[test]
    fn test_definitions_emitted_in_schema_order() {
        let out = generate_test_schema();
        let positions: Vec<usize> = [
            "pub struct ProtocolMessage {",
            "pub struct Request {",
            "pub struct Event {",
            "pub struct Response {",
            "pub struct ErrorMessage {",
            "pub struct ZigRequest {",
            "pub struct ZigArguments {",
            "pub struct ZagEvent {",
        ]
        .iter()
        .map(|needle| out.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
        .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
    }

    #[test]
    fn test_properties_emitted_in_schema_order() {
        let out = generate_test_schema();
        let thread_id = out.find("pub thread_id: i64,").unwrap();
        let label = out.find("pub label: Option<String>,").unwrap();
        let data = out.find("pub data: Option<Value>,").unwrap();
        let filters = out.find("pub filters: Option<Vec<String>>,").unwrap();
        assert!(thread_id < label && label < data && data < filters);
    }

    #[test]
    fn test_all_of_base_is_first_field() {
        let out = generate_test_schema();
        assert!(out.contains(
            "pub struct ZigRequest {\n    #[serde(flatten)]\n    pub request: Request,\n"
        ));
        assert!(out.contains(
            "pub struct Request {\n    #[serde(flatten)]\n    pub protocol_message: ProtocolMessage,\n"
        ));
    }

    #[test]
    fn test_inline_body_hoisted_exactly_once() {
        let out = generate_test_schema();
        assert_eq!(out.matches("pub struct ZigResponseBody {").count(), 1);
        assert!(out.contains("pub body: ZigResponseBody,"));
        // Referenced bodies resolve through the rename table.
        assert!(out.contains("pub error: Option<ErrorMessage>,"));
    }

    #[test]
    fn test_discriminator_refinements_suppressed() {
        let out = generate_test_schema();
        // The bare Request keeps command; the concrete variant only
        // records it for the dispatch table.
        assert_eq!(out.matches("pub command: String,").count(), 2);
        assert_eq!(out.matches("pub event: String,").count(), 1);
        assert_eq!(out.matches("pub type_: String,").count(), 1);
    }

    #[test]
    fn test_registration_table_emitted() {
        let out = generate_test_schema();
        assert!(out.contains("codec.register_request::<ZigRequest, ZigResponse>(\"zig\")?;"));
        assert!(out.contains("codec.register_request::<LaunchRequest, LaunchResponse>(\"launch\")?;"));
        assert!(out.contains("codec.register_event::<ZagEvent>(\"zag\")?;"));
    }

    #[test]
    fn test_opaque_arguments_alias() {
        let out = generate_test_schema();
        assert!(out.contains("pub type LaunchRequestArguments = Map<String, Value>;"));
        assert!(out.contains("impl LaunchAttachRequest for LaunchRequest {"));
    }

    #[test]
    fn test_embed_override_drops_duplicated_base_properties() {
        let out = generate_test_schema();
        assert!(out.contains(
            "pub struct StackFrameFormat {\n    #[serde(flatten)]\n    pub value_format: ValueFormat,\n"
        ));
        assert_eq!(out.matches("pub hex: Option<bool>,").count(), 1);
    }

    #[test]
    fn test_primitive_alias_is_newtype() {
        let out = generate_test_schema();
        assert!(out.contains("pub struct ZigKind(pub String);"));
    }

    #[test]
    fn test_regeneration_is_identical() {
        assert_eq!(generate_test_schema(), generate_test_schema());
    }

    #[test]
    fn test_malformed_all_of_is_an_error() {
        let schema: Value = serde_json::from_str(
            r##"{"definitions": {"Bad": {"allOf": [{"$ref": "#/definitions/X"}]}}}"##,
        )
        .unwrap();
        let err = generate(&schema).unwrap_err();
        assert!(err.to_string().contains("want 2 elements in allOf"));
    }

    #[test]
    fn test_missing_response_pair_is_an_error() {
        let schema: Value = serde_json::from_str(
            r##"{
                "definitions": {
                    "ProtocolMessage": {"type": "object", "properties": {"seq": {"type": "integer"}}},
                    "Request": {"allOf": [{"$ref": "#/definitions/ProtocolMessage"}, {
                        "type": "object",
                        "properties": {"command": {"type": "string"}},
                        "required": ["command"]
                    }]},
                    "LoneRequest": {"allOf": [{"$ref": "#/definitions/Request"}, {
                        "type": "object",
                        "properties": {"command": {"type": "string", "enum": ["lone"]}},
                        "required": ["command"]
                    }]}
                }
            }"##,
        )
        .unwrap();
        let err = generate(&schema).unwrap_err();
        assert!(err.to_string().contains("has no 'LoneResponse'"));
    }

    #[test]
    fn test_field_ident_conversion() {
        assert_eq!(field_ident("threadId"), "thread_id");
        assert_eq!(field_ident("adapterID"), "adapter_id");
        assert_eq!(field_ident("linesStartAt1"), "lines_start_at1");
        assert_eq!(field_ident("__restart"), "restart");
        assert_eq!(field_ident("type"), "type_");
        assert_eq!(field_ident("seq"), "seq");
    }
}
