use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the OKVED tree as published upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkvedNode {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<OkvedNode>,
}

impl OkvedNode {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: Some(code.to_string()),
            name: Some(name.to_string()),
            items: Vec::new(),
        }
    }

    pub fn with_items(mut self, items: Vec<OkvedNode>) -> Self {
        self.items = items;
        self
    }

    /// Code and label, when both are present and non-empty.
    pub fn entry(&self) -> Option<(&str, &str)> {
        let code = self.code.as_deref().filter(|value| !value.is_empty())?;
        let name = self.name.as_deref().filter(|value| !value.is_empty())?;
        Some((code, name))
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<OkvedNode>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<OkvedNode>>::deserialize(deserializer)?.unwrap_or_default())
}
