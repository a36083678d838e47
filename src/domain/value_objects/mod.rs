use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// E.164 numbering plan: a `+`, a non-zero leading digit and at most 15 digits in total.
pub const PHONE_NUMBER_PATTERN: &str = r"^\+[1-9]\d{1,14}$";

pub const E164_REFERENCE_URL: &str = "https://en.wikipedia.org/wiki/E.164";

// ASCII digits only; `\d` would otherwise accept any Unicode digit.
static PHONE_NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(PHONE_NUMBER_PATTERN)
        .unicode(false)
        .build()
        .expect("phone number pattern compiles")
});

pub struct PhoneNumber;

impl PhoneNumber {
    pub fn is_valid(value: &str) -> bool {
        PHONE_NUMBER_REGEX.is_match(value)
    }
}
