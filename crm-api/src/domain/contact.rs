use serde::{Deserialize, Serialize};

use super::CrmRecord;

/// A person an activity can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "name_c", default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewContact {
    #[serde(rename = "name_c")]
    pub name: String,
}

impl CrmRecord for Contact {
    const PATH: &'static str = "contacts";
    type Payload = NewContact;
}
