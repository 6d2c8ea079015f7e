//! Error banner state with generation-keyed expiry.
//!
//! The banner shows the most recent batch's error messages and clears
//! itself after [`ERROR_DISPLAY_MS`].  Rather than cancelling the
//! deferred clear when a newer batch arrives, every change bumps a
//! generation counter and the clear only applies if its generation is
//! still current — a stale timer can never erase a newer message.

/// How long error text stays visible before auto-clearing, in
/// milliseconds.
pub const ERROR_DISPLAY_MS: u32 = 5_000;

/// Displayed error text plus the generation it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    text: String,
    generation: u64,
}

impl ErrorBanner {
    /// The displayed text, or `None` when the banner is empty.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        (!self.text.is_empty()).then_some(self.text.as_str())
    }

    /// Show a batch of messages, newline-joined, and return the
    /// generation a deferred [`clear_expired`](Self::clear_expired)
    /// must present to clear them.
    pub fn show(&mut self, messages: &[String]) -> u64 {
        self.text = messages.join("\n");
        self.generation += 1;
        self.generation
    }

    /// Clear the banner immediately and retire any pending expiry.
    pub fn clear(&mut self) {
        self.text.clear();
        self.generation += 1;
    }

    /// Clear the banner only if `generation` is still the current one.
    ///
    /// Called by the deferred expiry; a no-op when newer messages (or
    /// a [`clear`](Self::clear)) superseded the generation the timer
    /// was armed for.
    pub fn clear_expired(&mut self, generation: u64) {
        if self.generation == generation {
            self.text.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        assert_eq!(ErrorBanner::default().text(), None);
    }

    #[test]
    fn show_joins_messages_with_newlines() {
        let mut banner = ErrorBanner::default();
        banner.show(&["first".into(), "second".into()]);
        assert_eq!(banner.text(), Some("first\nsecond"));
    }

    #[test]
    fn generations_increase_per_show() {
        let mut banner = ErrorBanner::default();
        let first = banner.show(&["a".into()]);
        let second = banner.show(&["b".into()]);
        assert!(second > first);
    }

    #[test]
    fn current_generation_expires_the_text() {
        let mut banner = ErrorBanner::default();
        let shown = banner.show(&["oops".into()]);
        banner.clear_expired(shown);
        assert_eq!(banner.text(), None);
    }

    #[test]
    fn stale_generation_cannot_erase_newer_text() {
        // A first batch's timer firing after a second batch was shown
        // must leave the second batch visible.
        let mut banner = ErrorBanner::default();
        let first = banner.show(&["old".into()]);
        let second = banner.show(&["new".into()]);
        banner.clear_expired(first);
        assert_eq!(banner.text(), Some("new"));
        banner.clear_expired(second);
        assert_eq!(banner.text(), None);
    }

    #[test]
    fn clear_retires_pending_expiry() {
        let mut banner = ErrorBanner::default();
        let shown = banner.show(&["oops".into()]);
        banner.clear();
        assert_eq!(banner.text(), None);
        // The old timer firing later must not clear text shown since.
        banner.show(&["fresh".into()]);
        banner.clear_expired(shown);
        assert_eq!(banner.text(), Some("fresh"));
    }
}
