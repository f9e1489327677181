//! Builds [`Value`] trees from the event stream of a property list reader.
//!
//! The container format (binary, XML) is detected by the `plist` crate. Binary
//! containers may reference one object from several places, and the reader
//! replays a shared object for every reference, so the number of events is
//! capped relative to the input size.
use std::collections::BTreeMap;
use std::io::Cursor;
use std::time::SystemTime;

use log::trace;
use plist::stream::{Event, Reader};

use super::{ArchiveError, Value};

/// Upper bound on events per input byte. Every value of an archive costs at
/// least one reference byte (binary) or one tag (XML) plus one closing event
/// per collection.
const EVENTS_PER_BYTE: usize = 4;
const MIN_EVENT_BUDGET: usize = 64;

enum Frame {
    Array(Vec<Value>),
    Dictionary {
        entries: BTreeMap<String, Value>,
        key: Option<String>,
    },
}

impl Frame {
    fn close(self) -> Result<Value, ArchiveError> {
        match self {
            Frame::Array(items) => Ok(Value::Array(items)),
            Frame::Dictionary { key: Some(_), .. } => Err(ArchiveError::MissingValue),
            Frame::Dictionary { entries, .. } => Ok(Value::Dictionary(entries)),
        }
    }
}

#[derive(Default)]
struct Builder {
    stack: Vec<Frame>,
    root: Option<Value>,
}

impl Builder {
    fn push(&mut self, value: Value) -> Result<(), ArchiveError> {
        match self.stack.last_mut() {
            None if self.root.is_some() => return Err(ArchiveError::TrailingValue),
            None => self.root = Some(value),
            Some(Frame::Array(items)) => items.push(value),
            Some(Frame::Dictionary { entries, key }) => match (key.take(), value) {
                (Some(name), value) => {
                    entries.insert(name, value);
                },
                (None, Value::String(name)) => *key = Some(name),
                (None, _) => return Err(ArchiveError::InvalidKey),
            },
        }
        Ok(())
    }

    fn close(&mut self) -> Result<(), ArchiveError> {
        let frame = self.stack.pop().ok_or(ArchiveError::UnbalancedCollection)?;
        let value = frame.close()?;
        self.push(value)
    }

    fn finish(self) -> Result<Value, ArchiveError> {
        if !self.stack.is_empty() {
            return Err(ArchiveError::UnbalancedCollection);
        }
        self.root.ok_or(ArchiveError::Empty)
    }
}

fn integer(value: plist::Integer) -> Result<Value, ArchiveError> {
    match (value.as_unsigned(), value.as_signed()) {
        (Some(value), _) => Ok(Value::Unsigned(value)),
        (None, Some(value)) => Ok(Value::Signed(value)),
        (None, None) => Err(ArchiveError::IntegerOverflow),
    }
}

/// Decodes a property list container into a [`Value`] tree.
pub fn from_bytes(bytes: &[u8]) -> Result<Value, ArchiveError> {
    let budget = bytes.len().saturating_mul(EVENTS_PER_BYTE).max(MIN_EVENT_BUDGET);
    let mut builder = Builder::default();

    for (count, event) in Reader::new(Cursor::new(bytes)).enumerate() {
        if count >= budget {
            return Err(ArchiveError::TooManyObjects(budget));
        }

        match event.map_err(|err| ArchiveError::Malformed(err.to_string()))? {
            Event::StartArray(_) => builder.stack.push(Frame::Array(Vec::new())),
            Event::StartDictionary(_) => builder.stack.push(Frame::Dictionary {
                entries: BTreeMap::new(),
                key: None,
            }),
            Event::EndCollection => builder.close()?,
            Event::Boolean(value) => builder.push(Value::Boolean(value))?,
            Event::Data(data) => builder.push(Value::Data(data.into_owned()))?,
            Event::Date(date) => builder.push(Value::Date(SystemTime::from(date)))?,
            Event::Integer(value) => builder.push(integer(value)?)?,
            Event::Real(value) => builder.push(Value::Real(value))?,
            Event::String(text) => builder.push(Value::String(text.into_owned()))?,
            Event::Uid(uid) => builder.push(Value::Uid(uid.get()))?,
            _ => return Err(ArchiveError::UnsupportedObject),
        }
    }

    let value = builder.finish()?;
    trace!("decoded property list, bytes={}", bytes.len());

    Ok(value)
}
