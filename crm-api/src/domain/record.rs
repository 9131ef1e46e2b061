use serde::{de::DeserializeOwned, Serialize};

/// A record type exposed by the CRM service as a CRUD resource.
pub trait CrmRecord: DeserializeOwned + Send {
    /// Collection path relative to the service base URL.
    const PATH: &'static str;

    /// Body accepted by `create` and `update`.
    type Payload: Serialize + Sync;
}
