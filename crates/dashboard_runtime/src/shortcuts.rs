//! Shortcut list editing and icon resolution.

use platform_host::next_monotonic_timestamp_ms;
use url::Url;

use crate::model::{IconSource, ShortcutEntry};

/// Fallback glyph shown when a shortcut icon fails to load.
pub const PLACEHOLDER_ICON: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 24 24' fill='white'%3E%3Ccircle cx='12' cy='12' r='10' opacity='0.5'/%3E%3C/svg%3E";

const FAVICON_ENDPOINT: &str = "https://www.google.com/s2/favicons";
const DIRECT_IMAGE_EXTENSIONS: [&str; 7] = [".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg", ".ico"];

/// Returns the first-run launcher tiles.
pub fn default_shortcuts() -> Vec<ShortcutEntry> {
    [
        ("YouTube", "https://www.youtube.com"),
        ("GitHub", "https://github.com"),
        ("Gmail", "https://mail.google.com"),
        ("Reddit", "https://www.reddit.com"),
        ("Twitter", "https://twitter.com"),
        ("ChatGPT", "https://chat.openai.com"),
        ("Netflix", "https://netflix.com"),
        ("Figma", "https://figma.com"),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (title, url))| ShortcutEntry {
        id: (index + 1).to_string(),
        title: title.to_string(),
        url: url.to_string(),
        icon: None,
    })
    .collect()
}

fn has_explicit_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Trims `raw` and prefixes `https://` unless it already carries an explicit `scheme://`.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if has_explicit_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Returns the favicon-lookup URL for `host`.
pub fn favicon_url(host: &str) -> String {
    format!("{FAVICON_ENDPOINT}?domain={host}&sz=128")
}

fn host_of(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()?
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_string)
}

/// Returns `true` when the path of `url` ends with a known image extension.
///
/// Query strings and fragments are ignored.
pub fn is_direct_image_url(url: &str) -> bool {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url)
        .to_ascii_lowercase();
    DIRECT_IMAGE_EXTENSIONS
        .iter()
        .any(|extension| path.ends_with(extension))
}

/// Normalizes a typed icon URL.
///
/// Blank input yields `None`, `data:` URLs pass through, direct image links are kept (with a
/// scheme), and anything else becomes the favicon-lookup URL of its host.
pub fn normalize_icon_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("data:") {
        return Some(trimmed.to_string());
    }
    let with_scheme = normalize_url(trimmed);
    if is_direct_image_url(&with_scheme) {
        Some(with_scheme)
    } else {
        host_of(&with_scheme).map(|host| favicon_url(&host))
    }
}

/// Resolves the stored icon for an editor submission; uploaded data wins over a typed URL.
pub fn resolve_icon(source: &IconSource) -> Option<String> {
    if let Some(inline) = source
        .inline_data
        .as_deref()
        .map(str::trim)
        .filter(|data| !data.is_empty())
    {
        return Some(inline.to_string());
    }
    source.url.as_deref().and_then(normalize_icon_url)
}

/// Returns the icon the renderer should request for `entry`.
///
/// Entries without a custom icon use the favicon of their own host; if even that cannot be
/// derived the placeholder glyph is used.
pub fn display_icon(entry: &ShortcutEntry) -> String {
    if let Some(icon) = entry.icon.as_deref().filter(|icon| !icon.trim().is_empty()) {
        return icon.to_string();
    }
    host_of(&normalize_url(&entry.url))
        .map(|host| favicon_url(&host))
        .unwrap_or_else(|| PLACEHOLDER_ICON.to_string())
}

fn next_shortcut_id() -> String {
    format!("shortcut-{}", next_monotonic_timestamp_ms())
}

/// Appends a shortcut; blank titles or URLs are rejected.
///
/// Returns the new entry's id.
pub fn add(
    shortcuts: &mut Vec<ShortcutEntry>,
    title: &str,
    url: &str,
    icon: &IconSource,
) -> Option<String> {
    let title = title.trim();
    let url = url.trim();
    if title.is_empty() || url.is_empty() {
        return None;
    }
    let id = next_shortcut_id();
    shortcuts.push(ShortcutEntry {
        id: id.clone(),
        title: title.to_string(),
        url: normalize_url(url),
        icon: resolve_icon(icon),
    });
    Some(id)
}

/// Removes the shortcut with `id`.
pub fn remove(shortcuts: &mut Vec<ShortcutEntry>, id: &str) -> bool {
    let before = shortcuts.len();
    shortcuts.retain(|entry| entry.id != id);
    shortcuts.len() != before
}

/// Replaces the icon of the shortcut with `id`; an unresolvable source is ignored.
pub fn set_icon(shortcuts: &mut [ShortcutEntry], id: &str, source: &IconSource) -> bool {
    let Some(icon) = resolve_icon(source) else {
        return false;
    };
    match shortcuts.iter_mut().find(|entry| entry.id == id) {
        Some(entry) if entry.icon.as_deref() != Some(icon.as_str()) => {
            entry.icon = Some(icon);
            true
        }
        _ => false,
    }
}

/// Drops the custom icon of the shortcut with `id`.
pub fn clear_icon(shortcuts: &mut [ShortcutEntry], id: &str) -> bool {
    shortcuts
        .iter_mut()
        .find(|entry| entry.id == id)
        .and_then(|entry| entry.icon.take())
        .is_some()
}

/// Moves `dragged_id` to the current index of `target_id`.
pub fn reorder(shortcuts: &mut Vec<ShortcutEntry>, dragged_id: &str, target_id: &str) -> bool {
    if dragged_id == target_id {
        return false;
    }
    let from = shortcuts.iter().position(|entry| entry.id == dragged_id);
    let to = shortcuts.iter().position(|entry| entry.id == target_id);
    let (Some(from), Some(to)) = (from, to) else {
        return false;
    };
    let entry = shortcuts.remove(from);
    shortcuts.insert(to, entry);
    true
}
