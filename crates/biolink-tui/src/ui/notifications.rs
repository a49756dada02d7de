// Short-lived status bar messages: theme changes, storage failures, audio problems

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Notification priority levels (higher = more important)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
}

impl NotificationLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationLevel::Info => "\u{2139}",    // ℹ
            NotificationLevel::Success => "\u{2713}", // ✓
            NotificationLevel::Warning => "\u{26a0}", // ⚠
        }
    }

    fn default_duration(&self) -> Duration {
        match self {
            NotificationLevel::Info | NotificationLevel::Success => Duration::from_secs(3),
            NotificationLevel::Warning => Duration::from_secs(4),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    pub duration: Duration,
    shown_at: Option<Instant>,
}

impl Notification {
    fn new(message: impl Into<String>, level: NotificationLevel) -> Self {
        Self {
            message: message.into(),
            level,
            duration: level.default_duration(),
            shown_at: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, NotificationLevel::Warning)
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.shown_at
            .is_some_and(|shown| now.duration_since(shown) >= self.duration)
    }

    fn mark_shown(&mut self, now: Instant) {
        self.shown_at.get_or_insert(now);
    }
}

/// One visible notification plus a priority-ordered backlog.
/// A higher-priority push replaces the visible one; the replaced one is dropped.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    queue: VecDeque<Notification>,
    current: Option<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.push_at(notification, Instant::now());
    }

    fn push_at(&mut self, mut notification: Notification, now: Instant) {
        // Same text already on screen or waiting
        let duplicate = self
            .current
            .iter()
            .chain(self.queue.iter())
            .any(|n| n.message == notification.message);
        if duplicate {
            return;
        }

        match &self.current {
            None => {
                notification.mark_shown(now);
                self.current = Some(notification);
            }
            Some(current) if notification.level > current.level => {
                notification.mark_shown(now);
                self.current = Some(notification);
            }
            Some(_) => {
                let pos = self
                    .queue
                    .iter()
                    .position(|n| n.level < notification.level)
                    .unwrap_or(self.queue.len());
                self.queue.insert(pos, notification);
            }
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.current = None;
        self.advance(Instant::now());
    }

    /// Drop the visible notification once its time is up
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.current = None;
            self.advance(now);
        }
    }

    fn advance(&mut self, now: Instant) {
        if self.current.is_none() {
            if let Some(mut next) = self.queue.pop_front() {
                next.mark_shown(now);
                self.current = Some(next);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_none() && self.queue.is_empty()
    }
}
