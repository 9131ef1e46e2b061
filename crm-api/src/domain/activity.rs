use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{ActivityType, CrmRecord, Lookup};

/// A logged interaction with a contact, optionally tied to a deal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "type_c")]
    pub activity_type: ActivityType,
    #[serde(rename = "date_c", with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(rename = "description_c", default)]
    pub description: Option<String>,
    #[serde(rename = "contact_id_c")]
    pub contact: Lookup,
    #[serde(rename = "deal_id_c", default, skip_serializing_if = "Option::is_none")]
    pub deal: Option<Lookup>,
}

/// Write payload for creating or updating an activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewActivity {
    #[serde(rename = "type_c")]
    pub activity_type: ActivityType,
    #[serde(rename = "date_c", with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    #[serde(rename = "description_c")]
    pub description: String,
    #[serde(rename = "contact_id_c")]
    pub contact_id: i64,
    #[serde(rename = "deal_id_c", skip_serializing_if = "Option::is_none")]
    pub deal_id: Option<i64>,
}

impl CrmRecord for Activity {
    const PATH: &'static str = "activities";
    type Payload = NewActivity;
}
