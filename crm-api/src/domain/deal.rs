use serde::{Deserialize, Serialize};

use super::CrmRecord;

/// A sales opportunity an activity can optionally reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "name_c", default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewDeal {
    #[serde(rename = "name_c")]
    pub name: String,
}

impl CrmRecord for Deal {
    const PATH: &'static str = "deals";
    type Payload = NewDeal;
}
