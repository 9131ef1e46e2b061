use crm_api::domain::ActivityType;
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;

/// How long a notification stays on screen.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    List,
    Form,
    ConfirmDelete,
}

/// Type filter of the activities list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ActivityType),
}

impl TypeFilter {
    pub fn matches(&self, activity_type: ActivityType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(ty) => *ty == activity_type,
        }
    }

    pub fn is_active(&self) -> bool {
        *self != TypeFilter::All
    }

    pub fn label(&self) -> &'static str {
        match self {
            TypeFilter::All => "All Types",
            TypeFilter::Only(ty) => ty.label(),
        }
    }

    /// All, Call, Email, ... Task, then back to All.
    pub fn next(self) -> Self {
        let options = Self::options();
        let pos = options.iter().position(|f| *f == self).unwrap_or(0);
        options[(pos + 1) % options.len()]
    }

    pub fn previous(self) -> Self {
        let options = Self::options();
        let pos = options.iter().position(|f| *f == self).unwrap_or(0);
        options[(pos + options.len() - 1) % options.len()]
    }

    fn options() -> Vec<TypeFilter> {
        std::iter::once(TypeFilter::All)
            .chain(ActivityType::iter().map(TypeFilter::Only))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// Transient one-line message shown in the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub shown_at: Instant,
}

impl Notification {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= NOTIFICATION_TTL
    }
}

/// The record awaiting delete confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteContext {
    pub activity_id: i64,
    pub display_label: String,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }

    fn next_boundary(&self, pos: usize) -> usize {
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_filter_cycles_through_all_types() {
        let mut filter = TypeFilter::All;
        let mut seen = Vec::new();
        for _ in 0..6 {
            filter = filter.next();
            seen.push(filter.label());
        }
        assert_eq!(
            seen,
            ["Call", "Email", "Meeting", "Note", "Task", "All Types"]
        );
        assert_eq!(TypeFilter::All.previous(), TypeFilter::Only(ActivityType::Task));
    }

    #[test]
    fn text_input_handles_multibyte_chars() {
        let mut input = TextInput::from_str("café");
        input.backspace();
        assert_eq!(input.value, "caf");
        input.move_left();
        input.insert('é');
        assert_eq!(input.value, "caéf");
        assert_eq!(input.split_at_cursor(), ("caé", "f"));
    }

    #[test]
    fn notification_expires_after_ttl() {
        let shown_at = Instant::now();
        let notification = Notification {
            level: NotificationLevel::Success,
            message: "ok".to_string(),
            shown_at,
        };
        assert!(!notification.is_expired(shown_at));
        assert!(notification.is_expired(shown_at + NOTIFICATION_TTL));
    }
}
