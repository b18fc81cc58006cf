//! Small text helpers shared by the content features.

/// Build a URL slug from a title.
///
/// Lowercases, collapses every run of non-alphanumeric characters into a
/// single hyphen and trims hyphens from both ends.
/// - "The Grand Residence, Runda" -> "the-grand-residence-runda"
/// - "  4BR Villa!!" -> "4br-villa"
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Derive a human-readable label from an uploaded filename.
///
/// Strips the extension, turns underscores and hyphens into spaces and
/// title-cases each word.
/// - "nairobi_site_visit-2.jpg" -> "Nairobi Site Visit 2"
pub fn humanize_filename(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => filename,
    };

    let spaced: String = stem
        .chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect();

    title_case(spaced.trim())
}

/// Title-case each whitespace-separated word, lowercasing the rest of it.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if c.is_whitespace() {
            if !at_word_start {
                out.push(' ');
            }
            at_word_start = true;
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }

    while out.ends_with(' ') {
        out.pop();
    }

    out
}

/// Truncate to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("The Grand Residence, Runda"), "the-grand-residence-runda");
        assert_eq!(slugify("  4BR Villa!!"), "4br-villa");
        assert_eq!(slugify("process"), "process");
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("a -- b"), "a-b");
        assert_eq!(slugify("--a--"), "a");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_humanize_filename_strips_extension_and_titles() {
        assert_eq!(humanize_filename("nairobi_site_visit-2.jpg"), "Nairobi Site Visit 2");
        assert_eq!(humanize_filename("hero-banner.webp"), "Hero Banner");
        assert_eq!(humanize_filename("IMG_0042.JPG"), "Img 0042");
    }

    #[test]
    fn test_humanize_filename_without_extension() {
        assert_eq!(humanize_filename("site photo"), "Site Photo");
        // dotfile has no stem before the dot
        assert_eq!(humanize_filename(".env"), ".env".to_string());
    }

    #[test]
    fn test_truncate_chars_multibyte_safe() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 10), "ab");
        assert_eq!(truncate_chars("ééé", 2), "éé");
    }
}
