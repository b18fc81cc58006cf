//! Best-effort metadata extraction for uploaded image payloads.
//!
//! Reads pixel dimensions from the image header and a description from the
//! EXIF ImageDescription (0x010E) or UserComment (0x9286) tags, falling back
//! to a humanized filename. Nothing here fails an upload: every probe error
//! degrades to a missing value.

use std::io::Cursor;

use crate::shared::constants::IMAGE_TEXT_MAX_LEN;
use crate::shared::text::{humanize_filename, truncate_chars};

/// What could be read out of an uploaded payload.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImageMetadata {
    pub width: Option<i32>,
    pub height: Option<i32>,
    /// Candidate text for alt text and caption, truncated for storage
    pub description: Option<String>,
}

/// Probe an uploaded payload for dimensions and descriptive text.
pub fn extract(data: &[u8], filename: &str) -> ImageMetadata {
    let (width, height) = probe_dimensions(data);

    let description = exif_description(data)
        .or_else(|| {
            let humanized = humanize_filename(filename);
            if humanized.is_empty() {
                None
            } else {
                Some(humanized)
            }
        })
        .map(|text| truncate_chars(&text, IMAGE_TEXT_MAX_LEN));

    ImageMetadata {
        width,
        height,
        description,
    }
}

/// Read pixel dimensions from the image header without decoding pixels.
fn probe_dimensions(data: &[u8]) -> (Option<i32>, Option<i32>) {
    let reader = match image::ImageReader::new(Cursor::new(data)).with_guessed_format() {
        Ok(reader) => reader,
        Err(e) => {
            tracing::debug!("Image format probe failed: {}", e);
            return (None, None);
        }
    };

    match reader.into_dimensions() {
        Ok((w, h)) => (i32::try_from(w).ok(), i32::try_from(h).ok()),
        Err(e) => {
            tracing::debug!("Image dimension probe failed: {}", e);
            (None, None)
        }
    }
}

/// ImageDescription first, then UserComment, empty values skipped.
fn exif_description(data: &[u8]) -> Option<String> {
    let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(data)) {
        Ok(exif) => exif,
        Err(e) => {
            tracing::debug!("EXIF probe failed: {}", e);
            return None;
        }
    };

    exif.get_field(exif::Tag::ImageDescription, exif::In::PRIMARY)
        .and_then(field_text)
        .or_else(|| {
            exif.get_field(exif::Tag::UserComment, exif::In::PRIMARY)
                .and_then(field_text)
        })
}

/// Pull readable text out of an EXIF field, tolerating odd encodings.
fn field_text(field: &exif::Field) -> Option<String> {
    let text = match &field.value {
        exif::Value::Ascii(groups) => groups
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned()),
        // UserComment carries an 8-byte character-set header before the text
        exif::Value::Undefined(bytes, _) => {
            let body = if bytes.len() > 8
                && (bytes.starts_with(b"ASCII\0\0\0") || bytes.starts_with(b"UNICODE\0"))
            {
                &bytes[8..]
            } else {
                &bytes[..]
            };
            Some(String::from_utf8_lossy(body).into_owned())
        }
        _ => None,
    }?;

    let cleaned = text.trim_matches('\0').trim().to_string();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 transparent PNG
    const TINY_PNG: &[u8] = &[
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0A, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    #[test]
    fn test_extract_reads_png_dimensions() {
        let meta = extract(TINY_PNG, "pixel.png");
        assert_eq!(meta.width, Some(1));
        assert_eq!(meta.height, Some(1));
    }

    #[test]
    fn test_extract_falls_back_to_filename() {
        // no EXIF in a bare PNG, so the filename is the description source
        let meta = extract(TINY_PNG, "runda_show_home-exterior.png");
        assert_eq!(meta.description.as_deref(), Some("Runda Show Home Exterior"));
    }

    #[test]
    fn test_extract_swallows_garbage_payloads() {
        let meta = extract(b"definitely not an image", "brochure_cover.jpg");
        assert_eq!(meta.width, None);
        assert_eq!(meta.height, None);
        // filename fallback still applies
        assert_eq!(meta.description.as_deref(), Some("Brochure Cover"));
    }

    #[test]
    fn test_extract_empty_filename_yields_no_description() {
        let meta = extract(b"junk", "");
        assert_eq!(meta.description, None);
    }

    #[test]
    fn test_description_truncated_to_storage_limit() {
        let long_name = format!("{}.jpg", "a".repeat(300));
        let meta = extract(b"junk", &long_name);
        let description = meta.description.expect("filename fallback");
        assert_eq!(description.chars().count(), IMAGE_TEXT_MAX_LEN);
    }

    #[test]
    fn test_field_text_strips_user_comment_header() {
        let field = exif::Field {
            tag: exif::Tag::UserComment,
            ifd_num: exif::In::PRIMARY,
            value: exif::Value::Undefined(b"ASCII\0\0\0Site visit, Runda".to_vec(), 0),
        };
        assert_eq!(field_text(&field).as_deref(), Some("Site visit, Runda"));
    }

    #[test]
    fn test_field_text_skips_blank_values() {
        let field = exif::Field {
            tag: exif::Tag::ImageDescription,
            ifd_num: exif::In::PRIMARY,
            value: exif::Value::Ascii(vec![b"   ".to_vec()]),
        };
        assert_eq!(field_text(&field), None);
    }
}
