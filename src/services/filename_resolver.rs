//! Filename resolution for intercepted downloads.
//!
//! Priority: quoted `Content-Disposition` filename, then the sanitized page
//! title, then the last URL path segment, then the configured default.
//! Every resolved name is reduced to a bare file name so it cannot escape the
//! download directory.

use std::path::Path;

/// Inputs available when naming a download.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilenameSources<'a> {
    pub content_disposition: Option<&'a str>,
    pub page_title: Option<&'a str>,
    pub url: &'a str,
}

/// Resolves the on-disk filename for a download.
///
/// A title-derived name gets `extension` appended, since a page title carries
/// no extension of its own.
pub fn resolve_filename(sources: FilenameSources<'_>, extension: &str, default_name: &str) -> String {
    if let Some(name) = sources
        .content_disposition
        .and_then(disposition_filename)
        .and_then(|n| bare_file_name(&n))
    {
        return name;
    }

    if let Some(base) = sources.page_title.map(sanitize_title).filter(|b| !b.is_empty()) {
        return format!("{}{}", base, extension);
    }

    if let Some(name) = last_path_segment(sources.url).and_then(|n| bare_file_name(&n)) {
        return name;
    }

    default_name.to_string()
}

/// Extracts and URL-decodes the quoted `filename="..."` parameter.
pub fn disposition_filename(header: &str) -> Option<String> {
    let lower = header.to_ascii_lowercase();
    let mut search_from = 0;
    // skip `filename*=` which carries an RFC 5987 value, not a quoted one
    while let Some(pos) = lower[search_from..].find("filename") {
        let start = search_from + pos + "filename".len();
        let rest = header[start..].trim_start();
        search_from = start;
        let Some(rest) = rest.strip_prefix('=') else {
            continue;
        };
        let rest = rest.trim_start();
        let Some(quoted) = rest.strip_prefix('"') else {
            continue;
        };
        let end = quoted.find('"')?;
        let raw = &quoted[..end];
        if raw.is_empty() {
            return None;
        }
        return Some(decode(raw));
    }
    None
}

/// Turns a page title into a filesystem-friendly base name.
///
/// Drops everything from the first `|`, replaces runs of `:`, `/`, `%` and
/// whitespace with one hyphen, collapses hyphens and trims them from both ends.
pub fn sanitize_title(title: &str) -> String {
    let head = title.split('|').next().unwrap_or_default();

    let mut out = String::with_capacity(head.len());
    for c in head.chars() {
        let replaced = if c == ':' || c == '/' || c == '%' || c.is_whitespace() {
            '-'
        } else {
            c
        };
        if replaced == '-' && out.ends_with('-') {
            continue;
        }
        out.push(replaced);
    }

    out.trim_matches('-').to_string()
}

/// URL-decodes the last non-empty path segment, ignoring query and fragment.
pub fn last_path_segment(url: &str) -> Option<String> {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let path = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    // first segment is the authority
    let last = path.split('/').skip(1).filter(|s| !s.is_empty()).last()?;
    let decoded = decode(last);
    if decoded.is_empty() {
        None
    } else {
        Some(decoded)
    }
}

/// Whether `filename` ends with `extension`, compared ASCII case-insensitively.
pub fn has_allowed_extension(filename: &str, extension: &str) -> bool {
    filename
        .to_ascii_lowercase()
        .ends_with(&extension.to_ascii_lowercase())
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

fn bare_file_name(name: &str) -> Option<String> {
    let normalized = name.replace('\\', "/");
    Path::new(&normalized)
        .file_name()
        .map(|n| n.to_string_lossy().trim().to_string())
        .filter(|n| !n.is_empty() && n != "." && n != "..")
}
