// src/view.rs
//! The display side the synchronizers write to and read from.

use crate::render::Markup;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Render target of one view. Exactly one synchronizer writes to a
/// container; any number of readers may observe it.
#[derive(Clone)]
pub struct Container {
    tx: Arc<watch::Sender<Markup>>,
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Container {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Markup::default());
        Self { tx: Arc::new(tx) }
    }

    /// Replaces the whole content. Returns `false` when the new markup is
    /// identical to what was already shown, in which case watchers are not
    /// woken.
    pub fn replace(&self, markup: Markup) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == markup {
                false
            } else {
                *current = markup;
                true
            }
        })
    }

    /// Current content.
    pub fn snapshot(&self) -> Markup {
        self.tx.borrow().clone()
    }

    /// Receiver that wakes on every content change.
    pub fn watch(&self) -> watch::Receiver<Markup> {
        self.tx.subscribe()
    }
}

/// Text the user has typed but not yet successfully submitted.
#[derive(Clone, Default)]
pub struct InputField {
    value: Arc<Mutex<String>>,
}

impl InputField {
    pub fn value(&self) -> String {
        self.value.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn set(&self, text: impl Into<String>) {
        if let Ok(mut value) = self.value.lock() {
            *value = text.into();
        }
    }

    pub fn clear(&self) {
        self.set(String::new());
    }
}

/// Blocking, user-facing error display.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Keeps the most recent alert until the page that shows it takes it.
#[derive(Clone, Default)]
pub struct AlertBuffer {
    pending: Arc<Mutex<Option<String>>>,
}

impl AlertBuffer {
    pub fn take(&self) -> Option<String> {
        self.pending.lock().ok().and_then(|mut p| p.take())
    }
}

impl Notifier for AlertBuffer {
    fn alert(&self, message: &str) {
        log::error!("{}", message);
        if let Ok(mut pending) = self.pending.lock() {
            *pending = Some(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, ListView};

    #[test]
    fn identical_replace_does_not_wake_watchers() {
        let container = Container::new();
        let rx = container.watch();

        assert!(!container.replace(Markup::default()));
        assert!(!rx.has_changed().unwrap());

        let records: Vec<crate::models::ExpressionRecord> = Vec::new();
        assert!(!container.replace(render(&ListView(&records))));
    }

    #[test]
    fn input_field_roundtrip() {
        let input = InputField::default();
        input.set("2+2");
        assert_eq!(input.value(), "2+2");
        input.clear();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn alert_buffer_is_taken_once() {
        let alerts = AlertBuffer::default();
        alerts.alert("Failed to submit expression");
        assert_eq!(alerts.take().as_deref(), Some("Failed to submit expression"));
        assert_eq!(alerts.take(), None);
    }
}
