// Licensed under the Apache-2.0 license

//! Structured-format (JSON) parser.
//!
//! Two document shapes are accepted. A bare list of entries:
//!
//! ```text
//! [ { "address": "0x10", "value": "0x60" },
//!   { "kind": "delay", "value": 5 } ]
//! ```
//!
//! and the sensor configuration document emitted by the vendor tools, where
//! the sensor whose `name` list contains the requested sensor id supplies
//! the entries:
//!
//! ```text
//! { "sensors": [ { "name": ["LSM6DSO"],
//!                  "configuration": [ { "type": "write", "address": "0x10", "data": "0x60" },
//!                                     { "comment": "..." } ],
//!                  "outputs": [ ... ] } ] }
//! ```

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ConvError, Location, Result};
use crate::model::{ConfigurationSequence, FileType, RegisterOperation};
use crate::ucf_entry::MemsUcfOp;
use crate::util::{byte_in_range, out_of_range, parse_byte, Radix};

#[derive(Deserialize)]
struct SensorDocument {
    sensors: Vec<Sensor>,
}

#[derive(Deserialize)]
struct Sensor {
    #[serde(default)]
    name: Vec<String>,
    configuration: Vec<Value>,
    #[serde(default)]
    outputs: Vec<Output>,
}

#[derive(Deserialize)]
struct Output {
    #[serde(default)]
    name: String,
    #[serde(default)]
    reg_name: String,
}

/// Parses JSON text into a sequence, one operation per non-comment entry.
///
/// `sensor_id` selects the sensor in a sensor configuration document and is
/// ignored for a bare entry list.
pub fn parse(content: &str, sensor_id: &str) -> Result<ConfigurationSequence> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let document: Value = serde_json::from_str(content).map_err(|e| {
        let message = e.to_string();
        // serde_json appends the position, which is carried separately.
        let reason = message
            .split(" at line ")
            .next()
            .unwrap_or(&message)
            .to_string();
        ConvError::parse(
            Location::Position {
                line: e.line(),
                column: e.column(),
            },
            reason,
        )
    })?;

    let entries = select_entries(document, sensor_id)?;
    let mut sequence = ConfigurationSequence::new(FileType::Json);
    for (index, entry) in entries.iter().enumerate() {
        if let Some(op) = parse_entry(index, entry)? {
            sequence.push(op);
        }
    }
    Ok(sequence)
}

/// Finds the entry list inside the document.
fn select_entries(document: Value, sensor_id: &str) -> Result<Vec<Value>> {
    match document {
        Value::Array(entries) => Ok(entries),
        Value::Object(map) if map.contains_key("sensors") => select_sensor(map, sensor_id),
        Value::Object(mut map) if map.contains_key("configuration") => {
            match map.remove("configuration") {
                Some(Value::Array(entries)) => Ok(entries),
                _ => Err(ConvError::schema(None, "`configuration` must be a list")),
            }
        }
        _ => Err(ConvError::schema(
            None,
            "expected a list of entries or a sensor configuration document",
        )),
    }
}

fn select_sensor(map: Map<String, Value>, sensor_id: &str) -> Result<Vec<Value>> {
    let document: SensorDocument = serde_json::from_value(Value::Object(map))
        .map_err(|e| ConvError::schema(None, format!("invalid sensor document: {e}")))?;

    if document.sensors.len() > 1 {
        warn!(
            "Document describes {} sensors, selecting `{sensor_id}`",
            document.sensors.len()
        );
    }

    for sensor in document.sensors {
        debug!("Sensor entry names: {}", sensor.name.join(", "));
        if !sensor
            .name
            .iter()
            .any(|name| name.eq_ignore_ascii_case(sensor_id))
        {
            continue;
        }
        for output in &sensor.outputs {
            debug!("Output {}: {}", output.name, output.reg_name);
        }
        return Ok(sensor.configuration);
    }

    Err(ConvError::InvalidArgument(format!(
        "no configuration found for sensor id `{sensor_id}`"
    )))
}

fn parse_entry(index: usize, entry: &Value) -> Result<Option<RegisterOperation>> {
    let obj = entry
        .as_object()
        .ok_or_else(|| ConvError::schema(Some(index), "entry is not an object"))?;

    if is_comment(obj) {
        return Ok(None);
    }
    let value = field(obj, &["value", "data"]);

    let kind = match field(obj, &["kind", "type"]) {
        None => MemsUcfOp::Write,
        Some(Value::String(kind)) => parse_kind(kind).ok_or_else(|| {
            ConvError::schema(Some(index), format!("unknown kind `{kind}`"))
        })?,
        Some(_) => return Err(ConvError::schema(Some(index), "`kind` must be a string")),
    };

    let value = value
        .ok_or_else(|| ConvError::schema(Some(index), "missing required field `value`"))?;
    let value = byte_field(index, "value", value)?;

    let address = match field(obj, &["address"]) {
        None | Some(Value::Null) if kind == MemsUcfOp::Delay => 0,
        None => {
            return Err(ConvError::schema(
                Some(index),
                "missing required field `address`",
            ))
        }
        Some(address) => byte_field(index, "address", address)?,
    };

    Ok(Some(RegisterOperation::new(kind, address, value)))
}

/// A comment entry holds a single string `comment` and nothing else.
fn is_comment(obj: &Map<String, Value>) -> bool {
    obj.len() == 1 && matches!(obj.get("comment"), Some(Value::String(_)))
}

/// Looks a field up under its name or any alias.
fn field<'a>(obj: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| obj.get(*name))
}

fn parse_kind(kind: &str) -> Option<MemsUcfOp> {
    let normalized: String = kind
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .collect::<String>()
        .to_ascii_lowercase();
    match normalized.as_str() {
        "write" => Some(MemsUcfOp::Write),
        "delay" => Some(MemsUcfOp::Delay),
        "read" => Some(MemsUcfOp::Read),
        "pollset" => Some(MemsUcfOp::PollSet),
        "pollreset" => Some(MemsUcfOp::PollReset),
        _ => None,
    }
}

/// Reads a byte from a JSON integer or a decimal/`0x` hex string.
fn byte_field(index: usize, name: &str, value: &Value) -> Result<u8> {
    let schema = |reason: String| ConvError::schema(Some(index), format!("`{name}` {reason}"));
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_i64() {
                byte_in_range(v).ok_or_else(|| schema(out_of_range(&n.to_string())))
            } else if n.as_u64().is_some() {
                Err(schema(out_of_range(&n.to_string())))
            } else {
                Err(schema(format!("`{n}` is not an integer")))
            }
        }
        Value::String(s) => parse_byte(s.trim(), Radix::Decimal).map_err(schema),
        _ => Err(schema("must be an integer or a string".to_string())),
    }
}
