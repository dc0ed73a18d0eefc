use crate::traits::Serializer;
use checklist_core::{ChecklistError, ChecklistResult};
use serde_json::ser::PrettyFormatter;

const INDENT: &[u8] = b"    ";

/// Pretty JSON with four-space indentation, readable and hand-editable.
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync> Serializer<T>
    for JsonSerializer
{
    fn serialize(&self, data: &T) -> ChecklistResult<Vec<u8>> {
        let mut bytes = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(INDENT));
        serde::Serialize::serialize(data, &mut serializer)
            .map_err(|e| ChecklistError::Serialization(e.to_string()))?;
        Ok(bytes)
    }

    fn deserialize(&self, bytes: &[u8]) -> ChecklistResult<T> {
        serde_json::from_slice(bytes).map_err(|e| ChecklistError::Serialization(e.to_string()))
    }
}
