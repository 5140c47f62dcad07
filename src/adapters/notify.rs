use crate::domain::model::NotificationKind;
use crate::domain::ports::Notifier;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, PoisonError};

/// 把通知寫進日誌；CLI 也同時印到終端
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier {
    echo: bool,
}

impl TracingNotifier {
    pub fn new(echo: bool) -> Self {
        Self { echo }
    }
}

impl Notifier for TracingNotifier {
    fn on_pending(&self, message: &str) {
        tracing::info!("⏳ {}", message);
        if self.echo {
            println!("⏳ {}", message);
        }
    }

    fn on_success(&self, message: &str) {
        tracing::info!("✅ {}", message);
        if self.echo {
            println!("✅ {}", message);
        }
    }

    fn on_error(&self, message: &str) {
        tracing::error!("❌ {}", message);
        if self.echo {
            eprintln!("❌ {}", message);
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
    pub at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    records: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, kind: NotificationKind, message: &str) {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        records.push(Notification {
            kind,
            message: message.to_string(),
            at: Utc::now(),
        });
    }

    pub fn records(&self) -> Vec<Notification> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn kinds(&self) -> Vec<NotificationKind> {
        self.records().into_iter().map(|n| n.kind).collect()
    }

    pub fn last_message(&self) -> Option<String> {
        self.records().pop().map(|n| n.message)
    }
}

impl Notifier for RecordingNotifier {
    fn on_pending(&self, message: &str) {
        self.push(NotificationKind::Pending, message);
    }

    fn on_success(&self, message: &str) {
        self.push(NotificationKind::Success, message);
    }

    fn on_error(&self, message: &str) {
        self.push(NotificationKind::Error, message);
    }
}
