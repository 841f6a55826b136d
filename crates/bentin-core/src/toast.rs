//! # Toast Queue
//!
//! In-memory list of transient UI messages with auto-expiry.
//!
//! ## Lifecycle
//! ```text
//! push(variant, title, desc) ──► visible at the stack end
//!        │
//!        ├── remove(id)      ──► explicit dismissal
//!        │
//!        └── prune(now)      ──► dropped once expires_at <= now
//! ```
//!
//! Most recent toast sits at the end of the visible stack. There is no
//! priority and no coalescing of duplicate messages; a burst of identical
//! errors shows as a burst.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::TOAST_LIFETIME_MS;

// =============================================================================
// Toast
// =============================================================================

/// Visual variant of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Default,
    Success,
    Error,
    Warning,
    Info,
}

/// A transient UI message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    /// Unique identifier (UUID v4).
    pub id: String,

    pub variant: ToastVariant,

    pub title: String,

    pub description: Option<String>,

    /// When the toast was pushed.
    pub created_at: DateTime<Utc>,

    /// When the toast stops being visible.
    pub expires_at: DateTime<Utc>,
}

// =============================================================================
// Toast Queue
// =============================================================================

/// The visible toast stack.
///
/// Owned by the store; UI layers read it and dispatch dismissals back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        ToastQueue { toasts: Vec::new() }
    }

    /// Pushes a toast, appending it to the visible stack end.
    ///
    /// Expiry is fixed at [`TOAST_LIFETIME_MS`] after the push instant.
    ///
    /// ## Returns
    /// The generated toast id, usable for explicit dismissal.
    pub fn push(
        &mut self,
        variant: ToastVariant,
        title: impl Into<String>,
        description: Option<String>,
    ) -> String {
        self.push_at(Utc::now(), variant, title, description)
    }

    /// Pushes a toast with an explicit clock, for deterministic tests.
    pub fn push_at(
        &mut self,
        now: DateTime<Utc>,
        variant: ToastVariant,
        title: impl Into<String>,
        description: Option<String>,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            variant,
            title: title.into(),
            description,
            created_at: now,
            expires_at: now + Duration::milliseconds(TOAST_LIFETIME_MS),
        });
        id
    }

    /// Removes a toast by id.
    ///
    /// ## Returns
    /// `true` when a toast was dismissed, `false` for an unknown id.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drops every toast whose expiry has passed.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.toasts.retain(|t| t.expires_at > now);
    }

    /// Visible toasts in insertion order (most recent last).
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Number of visible toasts.
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Checks if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_appends_to_stack_end() {
        let mut queue = ToastQueue::new();
        queue.push(ToastVariant::Info, "primeiro", None);
        queue.push(ToastVariant::Success, "segundo", None);

        let titles: Vec<&str> = queue.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["primeiro", "segundo"]);
    }

    #[test]
    fn test_error_toast_visible_until_expiry() {
        let now = Utc::now();
        let mut queue = ToastQueue::new();
        queue.push_at(
            now,
            ToastVariant::Error,
            "Falha",
            Some("não foi possível salvar".to_string()),
        );

        // Visible immediately
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().unwrap().title, "Falha");

        // Still visible just before expiry
        queue.prune(now + Duration::milliseconds(TOAST_LIFETIME_MS - 1));
        assert_eq!(queue.len(), 1);

        // Gone at expiry
        queue.prune(now + Duration::milliseconds(TOAST_LIFETIME_MS));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_explicit_dismissal() {
        let mut queue = ToastQueue::new();
        let id = queue.push(ToastVariant::Warning, "atenção", None);

        assert!(queue.remove(&id));
        assert!(queue.is_empty());
        assert!(!queue.remove(&id));
    }

    #[test]
    fn test_duplicates_are_not_coalesced() {
        let mut queue = ToastQueue::new();
        queue.push(ToastVariant::Error, "Falha", None);
        queue.push(ToastVariant::Error, "Falha", None);

        assert_eq!(queue.len(), 2);
    }
}
