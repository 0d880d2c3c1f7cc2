use std::path::Path;

/// Maximum length of an extension, in characters
pub const MAX_EXTENSION_LENGTH: usize = 20;

/// Maximum length of a sanitized filename, in bytes
pub const MAX_FILENAME_LENGTH: usize = 255;

/// Checks extension syntax: present, not blank, at most 20 characters,
/// ASCII letters and digits only.
pub fn validate_extension(extension: Option<&str>) -> bool {
    let Some(extension) = extension else {
        return false;
    };

    if extension.trim().is_empty() {
        return false;
    }

    if extension.chars().count() > MAX_EXTENSION_LENGTH {
        return false;
    }

    extension.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Lower-cases an extension for storage and comparison.
pub fn normalize_extension(extension: &str) -> String {
    extension.to_lowercase()
}

/// Returns the lower-cased text after the last `.` of `filename`.
///
/// `None` when there is no dot or nothing follows it, so
/// `"archive.tar.gz"` yields `"gz"` and `"README"` yields `None`.
pub fn extract_extension(filename: &str) -> Option<String> {
    let (_, extension) = filename.rsplit_once('.')?;
    if extension.is_empty() {
        return None;
    }
    Some(normalize_extension(extension))
}

/// Strips path components and replaces control and reserved characters with `_`.
/// Surrounding whitespace is dropped. Returns `None` when nothing usable remains.
///
/// No length limit is applied, so the extension is always intact.
pub fn clean_filename(filename: &str) -> Option<String> {
    // Treat both separators as path boundaries regardless of platform
    let unified = filename.replace('\\', "/");
    let name = Path::new(&unified)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .trim();

    if name.is_empty() {
        return None;
    }

    if filename.contains("..") || filename.contains('/') || filename.contains('\\') {
        tracing::warn!("Path traversal attempt detected: {}", filename);
    }

    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_control()
                || c == ':'
                || c == '*'
                || c == '?'
                || c == '"'
                || c == '<'
                || c == '>'
                || c == '|'
                || c == ';'
            {
                '_'
            } else {
                c
            }
        })
        .collect();

    if cleaned.trim().is_empty() {
        return None;
    }

    Some(cleaned)
}

/// Sanitizes filename to prevent path traversal and injection attacks.
/// Long names keep their extension and lose the end of the stem.
pub fn sanitize_filename(filename: &str) -> Option<String> {
    let cleaned = clean_filename(filename)?;
    Some(truncate_preserving_extension(&cleaned, MAX_FILENAME_LENGTH))
}

/// Cuts `name` to at most `max` bytes, shortening the stem so the
/// `.ext` suffix survives. Falls back to a plain cut when the suffix alone
/// does not fit.
pub fn truncate_preserving_extension(name: &str, max: usize) -> String {
    if name.len() <= max {
        return name.to_string();
    }

    match name.rsplit_once('.') {
        Some((stem, extension)) if !stem.is_empty() && extension.len() + 1 < max => {
            let stem = truncate_to_bytes(stem, max - extension.len() - 1);
            format!("{}.{}", stem, extension)
        }
        _ => truncate_to_bytes(name, max).to_string(),
    }
}

/// Cuts `value` to at most `max` bytes without splitting a UTF-8 character.
pub fn truncate_to_bytes(value: &str, max: usize) -> &str {
    if value.len() <= max {
        return value;
    }
    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}
