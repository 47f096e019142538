use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

/// The JSON scene description of a container
///
/// Object keys keep the order they had in the file, so two renderings of the
/// same chunk are byte-identical and a reordering shows up as a change.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    value: Value,
}

impl JsonDocument {
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        let value = serde_json::from_str(text)?;

        Ok(JsonDocument { value })
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Pretty-prints the document with `indent` spaces per level and a trailing newline
    pub fn render(&self, indent: u8) -> serde_json::Result<String> {
        let indent = " ".repeat(usize::from(indent));
        let mut buffer = Vec::new();
        let mut serializer =
            Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(indent.as_bytes()));

        self.value.serialize(&mut serializer)?;
        buffer.push(b'\n');

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
