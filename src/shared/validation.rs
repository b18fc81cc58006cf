use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating page and listing slugs
    /// Must be lowercase alphanumeric with hyphens
    /// - Valid: "about-us", "runda-villa-4br", "process"
    /// - Invalid: "-about", "about-", "about--us", "About", "about_us"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Regex for phone numbers on lead forms
    /// Digits with optional leading +, spaces, dots, dashes and parentheses
    /// - Valid: "+254 722 000000", "0722-000-000", "(0)722.000.000"
    /// - Invalid: "call me", "07x2000000", ""
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\+?[0-9)(][0-9 .\-()]{5,24}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_regex_valid() {
        assert!(SLUG_REGEX.is_match("about-us"));
        assert!(SLUG_REGEX.is_match("runda-villa-4br"));
        assert!(SLUG_REGEX.is_match("process"));
        assert!(SLUG_REGEX.is_match("a"));
        assert!(SLUG_REGEX.is_match("2026-guide"));
    }

    #[test]
    fn test_slug_regex_invalid() {
        assert!(!SLUG_REGEX.is_match("-about")); // starts with hyphen
        assert!(!SLUG_REGEX.is_match("about-")); // ends with hyphen
        assert!(!SLUG_REGEX.is_match("about--us")); // double hyphen
        assert!(!SLUG_REGEX.is_match("About")); // uppercase
        assert!(!SLUG_REGEX.is_match("about_us")); // underscore
        assert!(!SLUG_REGEX.is_match("")); // empty
        assert!(!SLUG_REGEX.is_match("about us")); // space
    }

    #[test]
    fn test_phone_regex_valid() {
        assert!(PHONE_REGEX.is_match("+254722000000"));
        assert!(PHONE_REGEX.is_match("+254 722 000 000"));
        assert!(PHONE_REGEX.is_match("0722-000-000"));
        assert!(PHONE_REGEX.is_match("(0)722.000.000"));
    }

    #[test]
    fn test_phone_regex_invalid() {
        assert!(!PHONE_REGEX.is_match("call me"));
        assert!(!PHONE_REGEX.is_match("07x2000000"));
        assert!(!PHONE_REGEX.is_match(""));
        assert!(!PHONE_REGEX.is_match("+"));
        assert!(!PHONE_REGEX.is_match("12345")); // too short
    }
}
