use crate::constants::{NOTIFY_DURATION, NOTIFY_FADE};

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NotifyKind {
    Info,
    Success,
    Error,
}

impl NotifyKind {
    /// Glyph shown in front of the message.
    pub fn icon(&self) -> &'static str {
        match self {
            NotifyKind::Info => "(i)",
            NotifyKind::Success => "[ok]",
            NotifyKind::Error => "[!]",
        }
    }
}

#[derive(Debug)]
pub struct Notice {
    pub message: String,
    pub kind: NotifyKind,
    age: f32,
}

/// Hosts at most one transient notification. Showing a new one replaces
/// whatever is on screen; the current one expires on the frame clock
/// after NOTIFY_DURATION, fading over the last NOTIFY_FADE seconds.
/// Manual dismissal drops the notification and its timer together.
pub struct Notifications {
    current: Option<Notice>,
}

impl Notifications {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn show(&mut self, message: impl Into<String>, kind: NotifyKind) {
        self.current = Some(Notice {
            message: message.into(),
            kind,
            age: 0.0,
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn update(&mut self, dt: f32) {
        if let Some(notice) = self.current.as_mut() {
            notice.age += dt;
            if notice.age >= NOTIFY_DURATION + NOTIFY_FADE {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Opacity of the current notification: 1.0 while it is live, then
    /// ramping to 0.0 across the fade window.
    pub fn alpha(&self) -> f32 {
        match &self.current {
            Some(notice) if notice.age > NOTIFY_DURATION => {
                1.0 - (notice.age - NOTIFY_DURATION) / NOTIFY_FADE
            }
            Some(_) => 1.0,
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_notification_replaces_the_old_one() {
        let mut notices = Notifications::new();
        notices.show("first", NotifyKind::Success);
        notices.show("second", NotifyKind::Success);
        let current = notices.current().unwrap();
        assert_eq!(current.message, "second");
    }

    #[test]
    fn expires_after_duration_plus_fade() {
        let mut notices = Notifications::new();
        notices.show("bye", NotifyKind::Info);
        notices.update(NOTIFY_DURATION - 0.1);
        assert!(notices.current().is_some());
        assert_eq!(notices.alpha(), 1.0);
        notices.update(0.2);
        assert!(notices.alpha() < 1.0); // fading
        notices.update(NOTIFY_FADE);
        assert!(notices.current().is_none());
    }

    #[test]
    fn dismiss_removes_immediately() {
        let mut notices = Notifications::new();
        notices.show("gone", NotifyKind::Error);
        notices.dismiss();
        assert!(notices.current().is_none());
        // No stale timer: a later tick must not panic or resurrect it
        notices.update(10.0);
        assert!(notices.current().is_none());
    }

    #[test]
    fn show_resets_the_clock() {
        let mut notices = Notifications::new();
        notices.show("a", NotifyKind::Info);
        notices.update(4.9);
        notices.show("b", NotifyKind::Info);
        notices.update(4.9);
        assert!(notices.current().is_some());
    }
}
