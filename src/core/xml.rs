//! Purpose: Decode service XML payloads into an ordered key-value tree.
//! Exports: `XmlValue`, `parse_document`, `wrap_root`.
//! Role: Pure decode layer between response text and API return values.
//! Invariants: Entry order mirrors the wire document exactly.
//! Invariants: Repeated sibling names collapse into a list at the first
//! occurrence; attributes become `@name` entries; empty elements are null.

use crate::core::error::{Error, ErrorKind};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One node of a parsed document. Fields pass through opaquely: values
/// stay strings, order stays as received, nothing is validated beyond
/// structure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum XmlValue {
    /// An element with no attributes, children, or text.
    Null,
    /// Character data of a leaf element.
    Text(String),
    /// Repeated sibling elements, in document order.
    List(Vec<XmlValue>),
    /// An element with children and/or attributes, in document order.
    Map(Vec<(String, XmlValue)>),
}

impl XmlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, XmlValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            XmlValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// First entry under `key`, for map nodes.
    pub fn get(&self, key: &str) -> Option<&XmlValue> {
        match self {
            XmlValue::Map(entries) => entries
                .iter()
                .find(|(name, _)| name == key)
                .map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn entries(&self) -> Option<&[(String, XmlValue)]> {
        match self {
            XmlValue::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// View this node as a sequence: a list yields its items, anything
    /// else yields itself. Smooths over the single-paste case, where
    /// the service emits one `<paste>` element instead of a list.
    pub fn as_slice(&self) -> &[XmlValue] {
        match self {
            XmlValue::List(items) => items,
            other => std::slice::from_ref(other),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            XmlValue::Null => serde_json::Value::Null,
            XmlValue::Text(text) => serde_json::Value::String(text.clone()),
            XmlValue::List(items) => {
                serde_json::Value::Array(items.iter().map(XmlValue::to_json).collect())
            }
            XmlValue::Map(entries) => {
                let mut map = serde_json::Map::new();
                for (key, value) in entries {
                    map.insert(key.clone(), value.to_json());
                }
                serde_json::Value::Object(map)
            }
        }
    }
}

impl Serialize for XmlValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            XmlValue::Null => serializer.serialize_unit(),
            XmlValue::Text(text) => serializer.serialize_str(text),
            XmlValue::List(items) => serializer.collect_seq(items),
            XmlValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

/// Wrap a root-less fragment in a synthetic enclosing element. The
/// service omits the root for list payloads; parsing such a fragment
/// without this step fails with a multiple-roots error.
pub fn wrap_root(root: &str, fragment: &str) -> String {
    format!("<{root}>{fragment}</{root}>")
}

/// Parse a complete document into a one-entry map keyed by the root
/// element name.
pub fn parse_document(xml: &str) -> Result<XmlValue, Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, XmlValue)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(Frame::open(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let (name, value) = Frame::open(&start)?.close();
                attach(&mut stack, &mut root, name, value)?;
            }
            Ok(Event::End(_)) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| parse_error("unmatched end tag"))?;
                let (name, value) = frame.close();
                attach(&mut stack, &mut root, name, value)?;
            }
            Ok(Event::Text(text)) => {
                let unescaped = text
                    .unescape()
                    .map_err(|err| parse_error("invalid character data").with_source(err))?;
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&unescaped),
                    None => return Err(parse_error("text outside the root element")),
                }
            }
            Ok(Event::CData(cdata)) => {
                let bytes = cdata.into_inner();
                let text = String::from_utf8_lossy(&bytes);
                match stack.last_mut() {
                    Some(frame) => frame.text.push_str(&text),
                    None => return Err(parse_error("text outside the root element")),
                }
            }
            Ok(Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(err) => return Err(parse_error("malformed xml").with_source(err)),
        }
    }

    if !stack.is_empty() {
        return Err(parse_error("unclosed element"));
    }
    let (name, value) = root.ok_or_else(|| parse_error("no root element"))?;
    Ok(XmlValue::Map(vec![(name, value)]))
}

struct Frame {
    name: String,
    entries: Vec<(String, XmlValue)>,
    text: String,
}

impl Frame {
    fn open(start: &BytesStart<'_>) -> Result<Self, Error> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut entries = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute
                .map_err(|err| parse_error("malformed attribute").with_source(err))?;
            let key = format!(
                "@{}",
                String::from_utf8_lossy(attribute.key.local_name().as_ref())
            );
            let value = attribute
                .unescape_value()
                .map_err(|err| parse_error("invalid attribute value").with_source(err))?
                .into_owned();
            insert_entry(&mut entries, key, XmlValue::Text(value));
        }
        Ok(Self {
            name,
            entries,
            text: String::new(),
        })
    }

    fn close(self) -> (String, XmlValue) {
        let Frame {
            name,
            mut entries,
            text,
        } = self;
        let value = if entries.is_empty() {
            if text.is_empty() {
                XmlValue::Null
            } else {
                XmlValue::Text(text)
            }
        } else {
            if !text.is_empty() {
                entries.push(("#text".to_string(), XmlValue::Text(text)));
            }
            XmlValue::Map(entries)
        };
        (name, value)
    }
}

fn attach(
    stack: &mut [Frame],
    root: &mut Option<(String, XmlValue)>,
    name: String,
    value: XmlValue,
) -> Result<(), Error> {
    match stack.last_mut() {
        Some(parent) => {
            insert_entry(&mut parent.entries, name, value);
            Ok(())
        }
        None => {
            if root.is_some() {
                return Err(parse_error("multiple root elements"));
            }
            *root = Some((name, value));
            Ok(())
        }
    }
}

fn insert_entry(entries: &mut Vec<(String, XmlValue)>, name: String, value: XmlValue) {
    match entries.iter_mut().find(|(key, _)| *key == name) {
        Some((_, existing)) => match existing {
            XmlValue::List(items) => items.push(value),
            _ => {
                let first = std::mem::replace(existing, XmlValue::Null);
                *existing = XmlValue::List(vec![first, value]);
            }
        },
        None => entries.push((name, value)),
    }
}

fn parse_error(message: &str) -> Error {
    Error::new(ErrorKind::Parse).with_message(message)
}
