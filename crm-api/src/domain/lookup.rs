use serde::{Deserialize, Serialize};

/// A reference to another record.
///
/// The service returns either the bare id of the referenced record or an
/// expanded object carrying the id together with the record's display name.
/// The name of an expanded reference may be missing or null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lookup {
    Id(i64),
    Expanded {
        #[serde(rename = "Id")]
        id: i64,
        #[serde(rename = "Name", default)]
        name: Option<String>,
    },
}

impl Lookup {
    pub fn id(&self) -> i64 {
        match self {
            Lookup::Id(id) => *id,
            Lookup::Expanded { id, .. } => *id,
        }
    }

    /// Display name carried by an expanded reference. Missing and empty
    /// names are both `None`.
    pub fn name(&self) -> Option<&str> {
        match self {
            Lookup::Id(_) => None,
            Lookup::Expanded { name, .. } => name.as_deref().filter(|n| !n.is_empty()),
        }
    }
}

impl From<i64> for Lookup {
    fn from(id: i64) -> Self {
        Lookup::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_bare_id() {
        let lookup: Lookup = serde_json::from_str("7").unwrap();
        assert_eq!(lookup, Lookup::Id(7));
        assert_eq!(lookup.id(), 7);
        assert_eq!(lookup.name(), None);
    }

    #[test]
    fn deserializes_expanded_reference() {
        let lookup: Lookup = serde_json::from_str(r#"{"Id": 3, "Name": "Ada Lovelace"}"#).unwrap();
        assert_eq!(lookup.id(), 3);
        assert_eq!(lookup.name(), Some("Ada Lovelace"));
    }

    #[test]
    fn expanded_reference_without_usable_name() {
        for raw in [r#"{"Id": 4}"#, r#"{"Id": 4, "Name": null}"#, r#"{"Id": 4, "Name": ""}"#] {
            let lookup: Lookup = serde_json::from_str(raw).unwrap();
            assert_eq!(lookup.id(), 4, "{raw}");
            assert_eq!(lookup.name(), None, "{raw}");
        }
    }
}
