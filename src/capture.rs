//! The one piece of real behavior on the page: the email capture state and
//! the syntactic check that gates it. Nothing here touches the network or
//! any storage; a "submission" is a validation pass and a view swap.

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address.";

/// Permissive shape check: some text, an `@`, more text containing a dot
/// with characters on both sides, and no whitespace anywhere. Not an RFC
/// address parser and not a deliverability check.
pub fn is_email_like(input: &str) -> bool {
    if input.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = input.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Everything the page remembers between input events. One value per page
/// load, owned by the capture form; nothing survives a reload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CaptureState {
    pub email: String,
    pub submitted: bool,
    pub error: Option<String>,
}

impl CaptureState {
    /// Keystroke transition: replaces the typed text and touches nothing
    /// else. No validation happens until submit.
    pub fn edit(&self, text: String) -> Self {
        if self.submitted {
            return self.clone();
        }
        Self {
            email: text,
            ..self.clone()
        }
    }

    /// Submit transition: an invalid address sets the inline message and
    /// keeps the text; a valid one locks the session into the confirmation
    /// view. Submitted is terminal, so later calls return the state as is.
    pub fn submit(&self) -> Self {
        if self.submitted {
            return self.clone();
        }
        if !is_email_like(&self.email) {
            return Self {
                error: Some(INVALID_EMAIL_MESSAGE.to_string()),
                ..self.clone()
            };
        }
        Self {
            email: self.email.clone(),
            submitted: true,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_strings_without_an_at_sign() {
        assert!(!is_email_like("not-an-email"));
        assert!(!is_email_like("plain"));
        assert!(!is_email_like("missing.domain.example"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(!is_email_like(""));
    }

    #[test]
    fn accepts_local_at_domain_dot_tld() {
        assert!(is_email_like("a@b.c"));
        assert!(is_email_like("hello@klaws.co"));
        assert!(is_email_like("first.last@studio.example"));
        assert!(is_email_like("päivi@koru.fi"));
    }

    #[test]
    fn rejects_domain_without_a_dot() {
        assert!(!is_email_like("a@b"));
        assert!(!is_email_like("someone@localhost"));
        assert!(!is_email_like("first.last@example"));
    }

    #[test]
    fn rejects_dots_with_a_missing_side_after_the_at() {
        assert!(!is_email_like("a@b."));
        assert!(!is_email_like("a@.b"));
        assert!(!is_email_like("a@."));
    }

    #[test]
    fn rejects_whitespace_anywhere() {
        assert!(!is_email_like(" a@b.c"));
        assert!(!is_email_like("a@b.c "));
        assert!(!is_email_like("a @b.c"));
        assert!(!is_email_like("a@b .c"));
        assert!(!is_email_like("a@b.c\n"));
    }

    #[test]
    fn rejects_more_than_one_at_sign() {
        assert!(!is_email_like("a@@b.c"));
        assert!(!is_email_like("a@b@c.d"));
    }

    #[test]
    fn rejects_an_empty_side_of_the_at_sign() {
        assert!(!is_email_like("@b.c"));
        assert!(!is_email_like("a@"));
    }

    #[test]
    fn starts_idle() {
        let state = CaptureState::default();
        assert_eq!(state.email, "");
        assert!(!state.submitted);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failed_submit_keeps_the_text_and_sets_the_message() {
        let state = CaptureState::default().edit("nope".into()).submit();
        assert_eq!(state.email, "nope");
        assert!(!state.submitted);
        assert_eq!(state.error.as_deref(), Some(INVALID_EMAIL_MESSAGE));
    }

    #[test]
    fn valid_submit_flips_the_flag_and_clears_the_error() {
        let state = CaptureState::default()
            .edit("bad".into())
            .submit()
            .edit("hello@klaws.co".into())
            .submit();
        assert!(state.submitted);
        assert_eq!(state.error, None);
        assert_eq!(state.email, "hello@klaws.co");
    }

    #[test]
    fn repeated_failures_overwrite_rather_than_accumulate() {
        let state = CaptureState::default()
            .edit("one".into())
            .submit()
            .edit("two".into())
            .submit();
        assert_eq!(state.error.as_deref(), Some(INVALID_EMAIL_MESSAGE));
        assert_eq!(state.email, "two");
    }

    #[test]
    fn keystrokes_never_touch_the_flag_or_the_message() {
        let failed = CaptureState::default().edit("bad".into()).submit();
        let edited = failed.edit("bad@".into());
        assert_eq!(edited.email, "bad@");
        assert_eq!(edited.error, failed.error);
        assert!(!edited.submitted);
    }

    #[test]
    fn submitted_is_terminal() {
        let done = CaptureState::default().edit("a@b.c".into()).submit();
        assert_eq!(done.submit(), done);
        assert_eq!(done.edit("other@text.example".into()), done);
    }
}
