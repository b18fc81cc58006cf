/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Maximum usage rows returned with an image detail
pub const MAX_USAGE_LIST_SIZE: i64 = 50;

// =============================================================================
// IMAGE UPLOAD CONSTANTS
// =============================================================================

/// Maximum accepted size for an uploaded image payload (10MB)
pub const MAX_IMAGE_SIZE: usize = 10 * 1024 * 1024;

/// Content types accepted for image uploads, with the extension used
/// when building the storage key
pub const ALLOWED_IMAGE_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

/// Maximum length stored for alt text and captions
pub const IMAGE_TEXT_MAX_LEN: usize = 200;

/// Look up the storage extension for an allowed image content type
pub fn image_extension(content_type: &str) -> Option<&'static str> {
    ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(ct, _)| *ct == content_type)
        .map(|(_, ext)| *ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_extension_known_types() {
        assert_eq!(image_extension("image/jpeg"), Some("jpg"));
        assert_eq!(image_extension("image/webp"), Some("webp"));
    }

    #[test]
    fn test_usage_list_cap_is_a_sane_page_size() {
        assert!(MAX_USAGE_LIST_SIZE >= 1);
        assert!(MAX_USAGE_LIST_SIZE <= MAX_PAGE_SIZE);
    }

    #[test]
    fn test_image_extension_rejects_unknown() {
        assert_eq!(image_extension("application/pdf"), None);
        assert_eq!(image_extension("image/svg+xml"), None);
    }
}
