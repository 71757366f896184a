//! Transient notification state.
//!
//! DESIGN
//! ======
//! Every outcome the user should see — success or raw backend error — lands
//! here as a toast. `ToastHost` renders the queue and schedules dismissal;
//! the queue logic itself is pure.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

/// A single transient notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    /// Raw detail line, e.g. a backend error body. Empty means title-only.
    pub detail: String,
    pub is_error: bool,
}

/// Queue of visible toasts.
#[derive(Clone, Debug, Default)]
pub struct ToastsState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastsState {
    /// Queue a success notification. Returns the toast id for dismissal.
    pub fn success(&mut self, title: &str) -> u64 {
        self.push(title, "", false)
    }

    /// Queue an error notification carrying the raw failure text.
    pub fn error(&mut self, title: &str, detail: &str) -> u64 {
        self.push(title, detail, true)
    }

    fn push(&mut self, title: &str, detail: &str, is_error: bool) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            title: title.to_owned(),
            detail: detail.to_owned(),
            is_error,
        });
        id
    }

    /// Remove a toast by id; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
