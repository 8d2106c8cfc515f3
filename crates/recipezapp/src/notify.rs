//! # Notifications
//!
//! User-facing feedback ("Added to favorites", "Recipe Added", load failures) is
//! fire-and-forget: the library builds a [`Notification`] and hands it to whatever
//! [`Notifier`] the presentation layer plugged in. Nothing is returned and nothing
//! downstream depends on delivery.
//!
//! Commands never notify directly. They attach notifications to their
//! [`crate::commands::CmdResult`], and the API forwards them once the operation
//! (including persistence) is done.

use std::cell::RefCell;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotifyKind,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotifyKind::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind: NotifyKind::Destructive,
        }
    }
}

pub trait Notifier {
    fn notify(&self, notification: &Notification);
}

impl<F> Notifier for F
where
    F: Fn(&Notification),
{
    fn notify(&self, notification: &Notification) {
        self(notification)
    }
}

/// Forwards notifications to `tracing`, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, n: &Notification) {
        match n.kind {
            NotifyKind::Info => tracing::info!(title = %n.title, "{}", n.message),
            NotifyKind::Destructive => tracing::warn!(title = %n.title, "{}", n.message),
        }
    }
}

/// Keeps every notification it receives.
///
/// Uses `RefCell` since the API is single-threaded and `Notifier::notify` takes `&self`.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    received: RefCell<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn received(&self) -> Vec<Notification> {
        self.received.borrow().clone()
    }

    pub fn take(&self) -> Vec<Notification> {
        self.received.borrow_mut().drain(..).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: &Notification) {
        self.received.borrow_mut().push(notification.clone());
    }
}
