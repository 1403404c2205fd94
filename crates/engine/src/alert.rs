use std::time::Duration;

use storedesk_types::Severity;

/// Transient user-facing message with auto-dismiss.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertState {
    message: String,
    severity: Severity,
    visible: bool,
    age: Duration,
    /// Set by `show`; the first tick afterwards starts the clock instead of
    /// adding time that passed before the alert existed.
    fresh: bool,
}

impl AlertState {
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.message = message.into();
        self.severity = severity;
        self.visible = true;
        self.age = Duration::ZERO;
        self.fresh = true;
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
        self.message.clear();
        self.age = Duration::ZERO;
        self.fresh = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current message; empty while hidden.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Advance the alert's age, dismissing it once it reaches `timeout`.
    /// Returns `true` when this call dismissed the alert.
    ///
    /// `elapsed` is the time since the previous tick. The first tick after
    /// `show` only starts the clock, since that interval may predate the
    /// alert.
    pub fn tick(&mut self, elapsed: Duration, timeout: Duration) -> bool {
        if !self.visible {
            return false;
        }
        if self.fresh {
            self.fresh = false;
            return false;
        }
        self.age += elapsed;
        if self.age >= timeout {
            self.dismiss();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_dismisses_after_timeout() {
        let mut alert = AlertState::default();
        alert.show("Added", Severity::Success);
        let timeout = Duration::from_secs(4);
        assert!(!alert.tick(Duration::ZERO, timeout));
        assert!(!alert.tick(Duration::from_secs(3), timeout));
        assert!(alert.is_visible());
        assert!(alert.tick(Duration::from_secs(1), timeout));
        assert!(!alert.is_visible());
        assert_eq!(alert.message(), "");
    }

    #[test]
    fn showing_again_resets_age() {
        let mut alert = AlertState::default();
        let timeout = Duration::from_secs(2);
        alert.show("first", Severity::Warning);
        alert.tick(Duration::ZERO, timeout);
        alert.tick(Duration::from_millis(1500), timeout);
        alert.show("second", Severity::Error);
        alert.tick(Duration::ZERO, timeout);
        assert!(!alert.tick(Duration::from_millis(1500), timeout));
        assert_eq!(alert.message(), "second");
        assert_eq!(alert.severity(), Severity::Error);
    }

    #[test]
    fn time_before_show_does_not_count() {
        let mut alert = AlertState::default();
        let timeout = Duration::from_secs(4);
        alert.show("Product ID cannot be empty", Severity::Warning);
        assert!(!alert.tick(Duration::from_millis(4500), timeout));
        assert!(alert.is_visible());
        assert!(!alert.tick(Duration::from_millis(100), timeout));
        assert!(alert.tick(Duration::from_secs(4), timeout));
    }
}
