use once_cell::sync::Lazy;
use regex::Regex;

// Where the mail hand-off lands. Shown on the page as well.
pub const RECIPIENT: &str = "contact@amr-echafaudage.fr";

// Form fields and status are wiped this long after a successful hand-off
pub const RESET_DELAY_MS: u32 = 3_000;

// Nav bar switches to its solid style past this scroll offset (px)
pub const SCROLL_THRESHOLD: f64 = 50.0;

// local-part@domain.tld, deliberately loose
pub static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.\S+$").expect("email pattern is a valid regex")
});

pub fn recipient_address() -> &'static str {
    RECIPIENT
}

#[cfg(debug_assertions)]
pub fn base_url() -> &'static str {
    "http://localhost:8080"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn base_url() -> &'static str {
    "https://amr-echafaudage.fr"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_resets_three_seconds_after_hand_off() {
        assert_eq!(RESET_DELAY_MS, 3_000);
    }

    #[test]
    fn email_pattern_needs_at_and_dot_in_domain() {
        assert!(EMAIL_PATTERN.is_match("jean@test.fr"));
        assert!(!EMAIL_PATTERN.is_match("jean@test"));
        assert!(!EMAIL_PATTERN.is_match("jean.test.fr"));
    }

    #[test]
    fn recipient_is_a_mail_address() {
        assert!(EMAIL_PATTERN.is_match(recipient_address()));
    }
}
