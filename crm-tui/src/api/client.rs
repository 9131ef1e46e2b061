use crm_api::domain::{Activity, Contact, Deal, NewActivity};
use crm_api::{CrmClient, CrmError};

use super::DevBackend;

/// Everything the activities page renders, fetched in one go.
#[derive(Debug, Clone, Default)]
pub struct PageData {
    pub activities: Vec<Activity>,
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,
}

/// Thin service layer used by the runtime. Talks to the CRM service, or to a
/// seeded in-memory store in dev mode.
#[derive(Debug, Clone)]
pub struct ApiClient {
    crm: CrmClient,
    dev_backend: Option<DevBackend>,
}

impl ApiClient {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, CrmError> {
        Ok(Self {
            crm: CrmClient::new(base_url, token)?,
            dev_backend: None,
        })
    }

    pub fn dev() -> Result<Self, CrmError> {
        Ok(Self {
            crm: CrmClient::new("http://localhost", None)?,
            dev_backend: Some(DevBackend::new()),
        })
    }

    #[cfg(test)]
    pub fn with_backend(backend: DevBackend) -> Self {
        Self {
            crm: CrmClient::new("http://localhost", None).expect("static URL is valid"),
            dev_backend: Some(backend),
        }
    }

    pub fn is_dev(&self) -> bool {
        self.dev_backend.is_some()
    }

    pub fn describe_target(&self) -> String {
        if self.is_dev() {
            "in-memory dev data".to_string()
        } else {
            self.crm.base_url().to_string()
        }
    }

    /// Fetch activities, contacts and deals concurrently.
    pub async fn load_all(&self) -> Result<PageData, CrmError> {
        if let Some(dev) = &self.dev_backend {
            return dev.page_data();
        }

        let activities = self.crm.activities();
        let contacts = self.crm.contacts();
        let deals = self.crm.deals();
        let (activities, contacts, deals) =
            tokio::try_join!(activities.get_all(), contacts.get_all(), deals.get_all())?;

        Ok(PageData {
            activities,
            contacts,
            deals,
        })
    }

    pub async fn create_activity(&self, payload: &NewActivity) -> Result<Activity, CrmError> {
        if let Some(dev) = &self.dev_backend {
            return dev.create_activity(payload);
        }
        self.crm.activities().create(payload).await
    }

    pub async fn update_activity(
        &self,
        id: i64,
        payload: &NewActivity,
    ) -> Result<Activity, CrmError> {
        if let Some(dev) = &self.dev_backend {
            return dev.update_activity(id, payload);
        }
        self.crm.activities().update(id, payload).await
    }

    pub async fn delete_activity(&self, id: i64) -> Result<(), CrmError> {
        if let Some(dev) = &self.dev_backend {
            return dev.delete_activity(id);
        }
        self.crm.activities().delete(id).await
    }
}
