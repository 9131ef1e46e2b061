use crm_api::domain::{Activity, ActivityType, Contact, Deal, Lookup, NewActivity};
use crm_api::CrmError;
use std::sync::{Arc, Mutex, MutexGuard};
use time::{Duration, OffsetDateTime};

use super::PageData;

/// In-memory stand-in for the CRM service used by `crm-tui dev` and tests.
#[derive(Debug, Clone)]
pub struct DevBackend {
    store: Arc<Mutex<DevStore>>,
}

#[derive(Debug, Clone, Default)]
struct DevStore {
    activities: Vec<Activity>,
    contacts: Vec<Contact>,
    deals: Vec<Deal>,
    next_id: i64,
    fail_next: Option<String>,
}

impl DevStore {
    fn take_failure(&mut self, call_name: &str) -> Result<(), CrmError> {
        match self.fail_next.take() {
            Some(reason) => Err(CrmError::Request(format!("{}: {}", call_name, reason))),
            None => Ok(()),
        }
    }
}

impl DevBackend {
    pub fn new() -> Self {
        Self::from_records(seed_activities(), seed_contacts(), seed_deals())
    }

    pub fn from_records(activities: Vec<Activity>, contacts: Vec<Contact>, deals: Vec<Deal>) -> Self {
        let next_id = activities.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            store: Arc::new(Mutex::new(DevStore {
                activities,
                contacts,
                deals,
                next_id,
                fail_next: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DevStore> {
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make the next call fail with a request error.
    #[cfg(test)]
    pub fn fail_next(&self, reason: &str) {
        self.lock().fail_next = Some(reason.to_string());
    }

    pub fn page_data(&self) -> Result<PageData, CrmError> {
        let mut store = self.lock();
        store.take_failure("GET /activities")?;
        Ok(PageData {
            activities: store.activities.clone(),
            contacts: store.contacts.clone(),
            deals: store.deals.clone(),
        })
    }

    pub fn create_activity(&self, payload: &NewActivity) -> Result<Activity, CrmError> {
        let mut store = self.lock();
        store.take_failure("POST /activities")?;
        let activity = Activity {
            id: store.next_id,
            activity_type: payload.activity_type,
            date: payload.date,
            description: Some(payload.description.clone()),
            contact: Lookup::Id(payload.contact_id),
            deal: payload.deal_id.map(Lookup::Id),
        };
        store.next_id += 1;
        store.activities.push(activity.clone());
        Ok(activity)
    }

    pub fn update_activity(&self, id: i64, payload: &NewActivity) -> Result<Activity, CrmError> {
        let mut store = self.lock();
        let call_name = format!("PUT /activities/{}", id);
        store.take_failure(&call_name)?;
        let activity = store
            .activities
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(CrmError::NotFound(call_name))?;

        activity.activity_type = payload.activity_type;
        activity.date = payload.date;
        activity.description = Some(payload.description.clone());
        activity.contact = Lookup::Id(payload.contact_id);
        activity.deal = payload.deal_id.map(Lookup::Id);
        Ok(activity.clone())
    }

    pub fn delete_activity(&self, id: i64) -> Result<(), CrmError> {
        let mut store = self.lock();
        let call_name = format!("DELETE /activities/{}", id);
        store.take_failure(&call_name)?;
        let before = store.activities.len();
        store.activities.retain(|a| a.id != id);
        if store.activities.len() == before {
            return Err(CrmError::NotFound(call_name));
        }
        Ok(())
    }
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_contacts() -> Vec<Contact> {
    [
        (1, "Ada Lovelace"),
        (2, "Grace Hopper"),
        (3, "Alan Turing"),
        (4, "Katherine Johnson"),
    ]
    .into_iter()
    .map(|(id, name)| Contact {
        id,
        name: name.to_string(),
    })
    .collect()
}

fn seed_deals() -> Vec<Deal> {
    [
        (1, "Analytical Engine Upgrade"),
        (2, "COBOL Migration"),
        (3, "Trajectory Consulting"),
    ]
    .into_iter()
    .map(|(id, name)| Deal {
        id,
        name: name.to_string(),
    })
    .collect()
}

fn seed_activities() -> Vec<Activity> {
    let now = OffsetDateTime::now_utc()
        .replace_second(0)
        .unwrap_or_else(|_| OffsetDateTime::now_utc());

    let entry = |id: i64,
                 activity_type: ActivityType,
                 hours_ago: i64,
                 description: &str,
                 contact: Lookup,
                 deal: Option<Lookup>| Activity {
        id,
        activity_type,
        date: now - Duration::hours(hours_ago),
        description: Some(description.to_string()),
        contact,
        deal,
    };

    vec![
        entry(
            1,
            ActivityType::Call,
            2,
            "Discussed pricing tiers for the engine upgrade",
            Lookup::Id(1),
            Some(Lookup::Id(1)),
        ),
        entry(
            2,
            ActivityType::Email,
            26,
            "Sent migration timeline and staffing plan",
            Lookup::Expanded {
                id: 2,
                name: Some("Grace Hopper".to_string()),
            },
            Some(Lookup::Expanded {
                id: 2,
                name: Some("COBOL Migration".to_string()),
            }),
        ),
        entry(
            3,
            ActivityType::Meeting,
            50,
            "On-site workshop\nAgenda: requirements, risks, next steps",
            Lookup::Id(3),
            None,
        ),
        entry(
            4,
            ActivityType::Note,
            75,
            "Prefers contact by email before noon",
            Lookup::Id(4),
            None,
        ),
        entry(
            5,
            ActivityType::Task,
            5,
            "Prepare proposal draft for trajectory work",
            Lookup::Id(4),
            Some(Lookup::Id(3)),
        ),
        entry(
            6,
            ActivityType::Call,
            120,
            "Follow-up call about punch card archive",
            Lookup::Id(2),
            Some(Lookup::Id(2)),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn payload(description: &str) -> NewActivity {
        NewActivity {
            activity_type: ActivityType::Note,
            date: datetime!(2024-05-01 10:00 UTC),
            description: description.to_string(),
            contact_id: 1,
            deal_id: None,
        }
    }

    #[test]
    fn create_assigns_fresh_ids() {
        let backend = DevBackend::new();
        let first = backend.create_activity(&payload("one")).unwrap();
        let second = backend.create_activity(&payload("two")).unwrap();
        assert_eq!(second.id, first.id + 1);
        assert_eq!(backend.page_data().unwrap().activities.len(), 8);
    }

    #[test]
    fn update_replaces_fields() {
        let backend = DevBackend::new();
        let updated = backend.update_activity(1, &payload("rewritten")).unwrap();
        assert_eq!(updated.description.as_deref(), Some("rewritten"));
        assert_eq!(updated.activity_type, ActivityType::Note);
        assert_eq!(updated.deal, None);
    }

    #[test]
    fn delete_unknown_id_is_not_found() {
        let backend = DevBackend::new();
        assert!(matches!(
            backend.delete_activity(999),
            Err(CrmError::NotFound(_))
        ));
        backend.delete_activity(1).unwrap();
        assert!(backend
            .page_data()
            .unwrap()
            .activities
            .iter()
            .all(|a| a.id != 1));
    }

    #[test]
    fn injected_failure_applies_once() {
        let backend = DevBackend::new();
        backend.fail_next("service unavailable");
        assert!(backend.page_data().is_err());
        assert!(backend.page_data().is_ok());
    }
}
