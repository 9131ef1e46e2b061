use crm_api::domain::{Activity, Contact, Deal};
use std::time::Instant;
use time::{OffsetDateTime, UtcOffset};

use crate::api::PageData;

mod filter;
mod form;
mod state;
pub use filter::visible_activities;
pub use form::{ActivityForm, FormField};
pub use state::{NotificationLevel, TextInput, TypeFilter, View};
use state::{DeleteContext, Notification};

pub const UNKNOWN_CONTACT: &str = "Unknown Contact";

pub struct App {
    pub running: bool,
    pub current_view: View,

    // Data fetched wholesale from the service
    pub activities: Vec<Activity>,
    pub contacts: Vec<Contact>,
    pub deals: Vec<Deal>,

    // Loading / error state of the last fetch
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    // Filters
    pub search_input: TextInput,
    pub search_focused: bool,
    pub type_filter: TypeFilter,

    // Index into the visible (filtered + sorted) list
    pub focused_index: usize,

    pub form: Option<ActivityForm>,
    pub delete_context: Option<DeleteContext>,
    pub notification: Option<Notification>,

    /// Offset used to display and enter timestamps.
    pub display_offset: UtcOffset,
}

impl App {
    pub fn new(display_offset: UtcOffset) -> Self {
        Self {
            running: true,
            current_view: View::List,
            activities: Vec::new(),
            contacts: Vec::new(),
            deals: Vec::new(),
            is_loading: true,
            load_error: None,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            search_input: TextInput::new(),
            search_focused: false,
            type_filter: TypeFilter::All,
            focused_index: 0,
            form: None,
            delete_context: None,
            notification: None,
            display_offset,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.load_error = None;
    }

    pub fn finish_loading(&mut self, result: Result<PageData, String>) {
        match result {
            Ok(data) => {
                self.activities = data.activities;
                self.contacts = data.contacts;
                self.deals = data.deals;
                self.clamp_focus();
            }
            Err(message) => self.load_error = Some(message),
        }
        self.is_loading = false;
    }

    pub fn visible_activities(&self) -> Vec<&Activity> {
        visible_activities(&self.activities, &self.search_input.value, self.type_filter)
    }

    pub fn focused_activity(&self) -> Option<&Activity> {
        self.visible_activities().get(self.focused_index).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_activities().len();
        if self.focused_index + 1 < len {
            self.focused_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.focused_index = self.focused_index.saturating_sub(1);
    }

    fn clamp_focus(&mut self) {
        let len = self.visible_activities().len();
        if self.focused_index >= len {
            self.focused_index = len.saturating_sub(1);
        }
    }

    /// Expanded lookup name, else the contact with the referenced id.
    pub fn contact_name(&self, activity: &Activity) -> String {
        if let Some(name) = activity.contact.name() {
            return name.to_string();
        }
        let id = activity.contact.id();
        self.contacts
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.clone())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_CONTACT.to_string())
    }

    /// `None` when the activity has no deal or the deal can't be resolved.
    pub fn deal_name(&self, activity: &Activity) -> Option<String> {
        let deal = activity.deal.as_ref()?;
        if let Some(name) = deal.name() {
            return Some(name.to_string());
        }
        let id = deal.id();
        self.deals
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.name.clone())
            .filter(|name| !name.is_empty())
    }

    pub fn has_active_filters(&self) -> bool {
        !self.search_input.value.is_empty() || self.type_filter.is_active()
    }

    pub fn empty_state_message(&self) -> &'static str {
        if self.has_active_filters() {
            "Try adjusting your filters"
        } else {
            "Get started by adding your first activity"
        }
    }

    pub fn clear_filters(&mut self) {
        self.type_filter = TypeFilter::All;
        self.search_input.clear();
        self.focused_index = 0;
    }

    pub fn cycle_type_filter(&mut self, forward: bool) {
        self.type_filter = if forward {
            self.type_filter.next()
        } else {
            self.type_filter.previous()
        };
        self.focused_index = 0;
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert(c);
        self.focused_index = 0;
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.backspace();
        self.focused_index = 0;
    }

    pub fn search_input_clear(&mut self) {
        self.search_input.clear();
        self.focused_index = 0;
    }

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
        if view != View::List {
            self.search_focused = false;
        }
    }

    pub fn open_create_form(&mut self, now: OffsetDateTime) {
        self.form = Some(ActivityForm::create(now.to_offset(self.display_offset)));
        self.navigate_to(View::Form);
    }

    /// Open the form for the focused activity. No-op when the list is empty.
    pub fn open_edit_form(&mut self) {
        let Some(activity) = self.focused_activity() else {
            return;
        };
        let form = ActivityForm::edit(activity, self.display_offset);
        self.form = Some(form);
        self.navigate_to(View::Form);
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.navigate_to(View::List);
    }

    /// Remember the focused activity and ask for confirmation.
    pub fn enter_delete_confirm(&mut self) {
        let Some(activity) = self.focused_activity() else {
            return;
        };
        let ctx = DeleteContext {
            activity_id: activity.id,
            display_label: format!(
                "{}  ·  {}",
                activity.activity_type.label(),
                self.contact_name(activity)
            ),
        };
        self.delete_context = Some(ctx);
        self.navigate_to(View::ConfirmDelete);
    }

    pub fn cancel_delete(&mut self) {
        self.delete_context = None;
        self.navigate_to(View::List);
    }

    pub fn notify_success(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, message.into());
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, message.into());
    }

    fn notify(&mut self, level: NotificationLevel, message: String) {
        self.notification = Some(Notification {
            level,
            message,
            shown_at: Instant::now(),
        });
    }

    pub fn expire_notification(&mut self, now: Instant) {
        if self
            .notification
            .as_ref()
            .is_some_and(|n| n.is_expired(now))
        {
            self.notification = None;
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crm_api::domain::{ActivityType, Lookup};
    use time::macros::datetime;

    pub(crate) fn sample_data() -> PageData {
        let activity = |id: i64, ty: ActivityType, date: OffsetDateTime, text: &str, contact: Lookup, deal: Option<Lookup>| Activity {
            id,
            activity_type: ty,
            date,
            description: Some(text.to_string()),
            contact,
            deal,
        };

        PageData {
            activities: vec![
                activity(1, ActivityType::Call, datetime!(2024-01-01 09:00 UTC), "Intro call", Lookup::Id(1), None),
                activity(2, ActivityType::Email, datetime!(2024-01-03 09:00 UTC), "Sent pricing", Lookup::Id(2), Some(Lookup::Id(1))),
                activity(
                    3,
                    ActivityType::Meeting,
                    datetime!(2024-01-02 09:00 UTC),
                    "Pricing workshop",
                    Lookup::Expanded { id: 9, name: Some("Expanded Name".to_string()) },
                    Some(Lookup::Expanded { id: 8, name: Some("Expanded Deal".to_string()) }),
                ),
                activity(4, ActivityType::Note, datetime!(2023-12-31 09:00 UTC), "Orphan", Lookup::Id(99), Some(Lookup::Id(99))),
            ],
            contacts: vec![
                Contact { id: 1, name: "Ada Lovelace".to_string() },
                Contact { id: 2, name: "Grace Hopper".to_string() },
            ],
            deals: vec![Deal { id: 1, name: "Engine Upgrade".to_string() }],
        }
    }

    pub(crate) fn loaded_app() -> App {
        let mut app = App::new(UtcOffset::UTC);
        app.finish_loading(Ok(sample_data()));
        app
    }

    fn find(app: &App, id: i64) -> Activity {
        app.activities.iter().find(|a| a.id == id).cloned().unwrap()
    }

    #[test]
    fn resolves_contact_and_deal_names() {
        let app = loaded_app();

        assert_eq!(app.contact_name(&find(&app, 1)), "Ada Lovelace");
        assert_eq!(app.deal_name(&find(&app, 1)), None);

        assert_eq!(app.contact_name(&find(&app, 2)), "Grace Hopper");
        assert_eq!(app.deal_name(&find(&app, 2)).as_deref(), Some("Engine Upgrade"));

        assert_eq!(app.contact_name(&find(&app, 3)), "Expanded Name");
        assert_eq!(app.deal_name(&find(&app, 3)).as_deref(), Some("Expanded Deal"));

        assert_eq!(app.contact_name(&find(&app, 4)), UNKNOWN_CONTACT);
        assert_eq!(app.deal_name(&find(&app, 4)), None);
    }

    #[test]
    fn blank_expanded_names_fall_back_to_lookup_lists() {
        let mut app = loaded_app();
        let activity = app.activities.iter_mut().find(|a| a.id == 2).unwrap();
        activity.contact = Lookup::Expanded { id: 2, name: Some(String::new()) };
        activity.deal = Some(Lookup::Expanded { id: 1, name: None });
        let activity = find(&app, 2);

        assert_eq!(app.contact_name(&activity), "Grace Hopper");
        assert_eq!(app.deal_name(&activity).as_deref(), Some("Engine Upgrade"));

        let orphan = Activity {
            contact: Lookup::Expanded { id: 99, name: None },
            ..activity
        };
        assert_eq!(app.contact_name(&orphan), UNKNOWN_CONTACT);
    }

    #[test]
    fn focus_follows_visible_order() {
        let mut app = loaded_app();
        assert_eq!(app.focused_activity().map(|a| a.id), Some(2));
        app.select_next();
        app.select_next();
        app.select_next();
        app.select_next();
        assert_eq!(app.focused_activity().map(|a| a.id), Some(4));
        app.select_previous();
        assert_eq!(app.focused_activity().map(|a| a.id), Some(1));
    }

    #[test]
    fn empty_state_message_depends_on_filters() {
        let mut app = loaded_app();
        assert_eq!(app.empty_state_message(), "Get started by adding your first activity");

        app.cycle_type_filter(true);
        assert_eq!(app.empty_state_message(), "Try adjusting your filters");

        app.clear_filters();
        app.search_input_char('z');
        assert_eq!(app.empty_state_message(), "Try adjusting your filters");
        assert!(app.visible_activities().is_empty());

        app.clear_filters();
        assert_eq!(app.type_filter, TypeFilter::All);
        assert!(app.search_input.value.is_empty());
        assert_eq!(app.visible_activities().len(), 4);
    }

    #[test]
    fn delete_confirm_targets_focused_activity() {
        let mut app = loaded_app();
        app.select_next();
        app.enter_delete_confirm();

        assert_eq!(app.current_view, View::ConfirmDelete);
        let ctx = app.delete_context.as_ref().unwrap();
        assert_eq!(ctx.activity_id, 3);
        assert_eq!(ctx.display_label, "Meeting  ·  Expanded Name");

        app.cancel_delete();
        assert_eq!(app.current_view, View::List);
        assert!(app.delete_context.is_none());
    }

    #[test]
    fn edit_and_delete_are_noops_on_empty_list() {
        let mut app = App::new(UtcOffset::UTC);
        app.finish_loading(Ok(PageData::default()));
        app.open_edit_form();
        app.enter_delete_confirm();
        assert_eq!(app.current_view, View::List);
        assert!(app.form.is_none());
        assert!(app.delete_context.is_none());
    }

    #[test]
    fn reload_clamps_focus_to_shorter_list() {
        let mut app = loaded_app();
        app.focused_index = 3;
        let mut data = sample_data();
        data.activities.truncate(2);
        app.finish_loading(Ok(data));
        assert_eq!(app.focused_index, 1);
    }

    #[test]
    fn failed_load_keeps_error_message() {
        let mut app = App::new(UtcOffset::UTC);
        app.begin_loading();
        app.finish_loading(Err("boom".to_string()));
        assert!(!app.is_loading);
        assert_eq!(app.load_error.as_deref(), Some("boom"));
    }
}
