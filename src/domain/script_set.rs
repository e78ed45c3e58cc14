use serde::ser::{Serialize, SerializeMap, Serializer};

/// Generated scripts keyed by video label, in generation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptSet {
    entries: Vec<(String, String)>,
}

impl ScriptSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Label for the 1-based video index.
    pub fn label(index: u64) -> String {
        format!("Video {}", index)
    }

    pub(crate) fn push(&mut self, index: u64, script: String) {
        self.entries.push((Self::label(index), script));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.iter().find(|(key, _)| key == label).map(|(_, script)| script.as_str())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(label, script)| (label.as_str(), script.as_str()))
    }
}

impl Serialize for ScriptSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, script) in &self.entries {
            map.serialize_entry(label, script)?;
        }
        map.end()
    }
}
