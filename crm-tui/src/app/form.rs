use crm_api::domain::{Activity, ActivityType, Contact, Deal, NewActivity};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use time::{OffsetDateTime, UtcOffset};

use super::TextInput;
use crate::time_utils::{format_form_date, parse_form_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Type,
    Date,
    Description,
    Contact,
    Deal,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Type,
        FormField::Date,
        FormField::Description,
        FormField::Contact,
        FormField::Deal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Type => "Activity Type",
            FormField::Date => "Date & Time",
            FormField::Description => "Description",
            FormField::Contact => "Contact",
            FormField::Deal => "Deal (Optional)",
        }
    }

    pub fn is_required(&self) -> bool {
        *self != FormField::Deal
    }

    /// Select-style fields are changed with Left/Right instead of typing.
    pub fn is_select(&self) -> bool {
        matches!(self, FormField::Type | FormField::Contact | FormField::Deal)
    }
}

/// State of the create/edit modal.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityForm {
    /// `Some` when editing an existing activity.
    pub editing_id: Option<i64>,
    pub activity_type: Option<ActivityType>,
    pub date_input: TextInput,
    pub description_input: TextInput,
    pub contact_id: Option<i64>,
    pub deal_id: Option<i64>,
    pub focused_field: FormField,
    pub errors: HashMap<FormField, String>,
    pub is_submitting: bool,
}

impl ActivityForm {
    /// Blank form with the date preset to `now`.
    pub fn create(now: OffsetDateTime) -> Self {
        Self {
            editing_id: None,
            activity_type: None,
            date_input: TextInput::from_str(&format_form_date(now)),
            description_input: TextInput::new(),
            contact_id: None,
            deal_id: None,
            focused_field: FormField::Type,
            errors: HashMap::new(),
            is_submitting: false,
        }
    }

    /// Form prefilled from an existing activity. `offset` is the display offset.
    pub fn edit(activity: &Activity, offset: UtcOffset) -> Self {
        Self {
            editing_id: Some(activity.id),
            activity_type: Some(activity.activity_type),
            date_input: TextInput::from_str(&format_form_date(activity.date.to_offset(offset))),
            description_input: TextInput::from_str(
                activity.description.as_deref().unwrap_or_default(),
            ),
            contact_id: Some(activity.contact.id()),
            deal_id: activity.deal.as_ref().map(|d| d.id()),
            focused_field: FormField::Type,
            errors: HashMap::new(),
            is_submitting: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Activity"
        } else {
            "Add New Activity"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            "Saving..."
        } else if self.is_editing() {
            "Update"
        } else {
            "Create"
        }
    }

    pub fn error(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn focus_next(&mut self) {
        let pos = self.focus_position();
        self.focused_field = FormField::ALL[(pos + 1) % FormField::ALL.len()];
    }

    pub fn focus_previous(&mut self) {
        let pos = self.focus_position();
        let len = FormField::ALL.len();
        self.focused_field = FormField::ALL[(pos + len - 1) % len];
    }

    fn focus_position(&self) -> usize {
        FormField::ALL
            .iter()
            .position(|f| *f == self.focused_field)
            .unwrap_or(0)
    }

    fn focused_text_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            FormField::Date => Some(&mut self.date_input),
            FormField::Description => Some(&mut self.description_input),
            _ => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        let field = self.focused_field;
        if let Some(input) = self.focused_text_input() {
            input.insert(c);
            self.clear_error(field);
        }
    }

    pub fn input_backspace(&mut self) {
        let field = self.focused_field;
        if let Some(input) = self.focused_text_input() {
            input.backspace();
            self.clear_error(field);
        }
    }

    pub fn input_move_cursor(&mut self, left: bool) {
        if let Some(input) = self.focused_text_input() {
            if left {
                input.move_left();
            } else {
                input.move_right();
            }
        }
    }

    /// Line break inside the description.
    pub fn input_newline(&mut self) {
        if self.focused_field == FormField::Description {
            self.description_input.insert('\n');
            self.clear_error(FormField::Description);
        }
    }

    /// Step the focused select field through its options. The empty option
    /// sits before the first entry.
    pub fn cycle_option(&mut self, forward: bool, contacts: &[Contact], deals: &[Deal]) {
        match self.focused_field {
            FormField::Type => {
                let types: Vec<ActivityType> = ActivityType::iter().collect();
                self.activity_type = step(self.activity_type, &types, forward);
                self.clear_error(FormField::Type);
            }
            FormField::Contact => {
                let ids: Vec<i64> = contacts.iter().map(|c| c.id).collect();
                self.contact_id = step(self.contact_id, &ids, forward);
                self.clear_error(FormField::Contact);
            }
            FormField::Deal => {
                let ids: Vec<i64> = deals.iter().map(|d| d.id).collect();
                self.deal_id = step(self.deal_id, &ids, forward);
            }
            FormField::Date | FormField::Description => {}
        }
    }

    /// Reset the focused select field to its empty option.
    pub fn clear_option(&mut self) {
        match self.focused_field {
            FormField::Type => self.activity_type = None,
            FormField::Contact => self.contact_id = None,
            FormField::Deal => self.deal_id = None,
            FormField::Date | FormField::Description => return,
        }
        self.clear_error(self.focused_field);
    }

    fn clear_error(&mut self, field: FormField) {
        self.errors.remove(&field);
    }

    /// Check required fields. On success returns the payload to submit, with
    /// the date converted from `offset` to UTC and the description trimmed.
    /// On failure the per-field errors are stored on the form.
    pub fn validate(&mut self, offset: UtcOffset) -> Option<NewActivity> {
        let mut errors = HashMap::new();

        if self.activity_type.is_none() {
            errors.insert(FormField::Type, "Activity type is required".to_string());
        }

        let description = self.description_input.value.trim();
        if description.is_empty() {
            errors.insert(
                FormField::Description,
                "Description is required".to_string(),
            );
        }

        if self.contact_id.is_none() {
            errors.insert(FormField::Contact, "Contact is required".to_string());
        }

        let date = if self.date_input.value.trim().is_empty() {
            errors.insert(FormField::Date, "Date is required".to_string());
            None
        } else {
            let parsed = parse_form_date(&self.date_input.value, offset);
            if parsed.is_none() {
                errors.insert(
                    FormField::Date,
                    "Date must be YYYY-MM-DD HH:MM".to_string(),
                );
            }
            parsed
        };

        let payload = match (self.activity_type, date, self.contact_id) {
            (Some(activity_type), Some(date), Some(contact_id)) if errors.is_empty() => {
                Some(NewActivity {
                    activity_type,
                    date,
                    description: description.to_string(),
                    contact_id,
                    deal_id: self.deal_id,
                })
            }
            _ => None,
        };

        self.errors = errors;
        payload
    }
}

fn step<T: Copy + PartialEq>(current: Option<T>, options: &[T], forward: bool) -> Option<T> {
    if options.is_empty() {
        return None;
    }
    let pos = current.and_then(|c| options.iter().position(|o| *o == c));
    match (pos, forward) {
        (None, true) => options.first().copied(),
        (None, false) => options.last().copied(),
        (Some(i), true) => options.get(i + 1).copied(),
        (Some(0), false) => None,
        (Some(i), false) => options.get(i - 1).copied(),
    }
}
