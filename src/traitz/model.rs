use serde::{Deserialize, Deserializer, Serialize};

/// Name given to the placeholder record when nothing matches and no name is configured.
pub const DEFAULT_SENTINEL_NAME: &str = "NONE_SENTINEL";

/// One named facet of a record, e.g. `Color = Red`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attribute {
    pub trait_type: String,
    // Empty means "no attribute": it is never indexed.
    #[serde(default, deserialize_with = "deserialize_value")]
    pub value: String,
}

impl Attribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_pair(&self, trait_type: &str, value: &str) -> bool {
        self.trait_type == trait_type && self.value == value
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Record {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            attributes: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, trait_type: &str, value: &str) -> Self {
        self.attributes.push(Attribute::new(trait_type, value));
        self
    }

    /// The placeholder shown in place of results when nothing matches.
    pub fn sentinel(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// True if any attribute carries exactly this trait type and value.
    pub fn has_pair(&self, trait_type: &str, value: &str) -> bool {
        self.attributes.iter().any(|a| a.is_pair(trait_type, value))
    }
}

// Metadata files in the wild carry numeric and null values next to strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Null,
}

fn deserialize_value<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(s) => s,
        RawValue::Number(n) => n.to_string(),
        RawValue::Null => String::new(),
    })
}
