/// Normalizes an image path from the data documents into something the
/// browser can load from the site root.
pub fn resolve_image_src(src: Option<&str>) -> Option<String> {
    let src = src?.trim();
    if src.is_empty() {
        return None;
    }

    if has_http_scheme(src) || src.starts_with('/') {
        return Some(src.to_string());
    }

    if let Some(rest) = src.strip_prefix("./") {
        return Some(format!("/{}", rest));
    }

    Some(src.to_string())
}

fn has_http_scheme(src: &str) -> bool {
    let lower = src
        .get(..8)
        .unwrap_or(src)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// First present image out of `[cover, icon, trophy]`.
pub fn display_image<'a>(
    cover: Option<&'a str>,
    icon: Option<&'a str>,
    trophy: Option<&'a str>,
) -> Option<&'a str> {
    [cover, icon, trophy]
        .into_iter()
        .flatten()
        .find(|candidate| !candidate.trim().is_empty())
}

/// CSS `background-image` declaration for an optional image path.
pub fn background_style(src: Option<&str>) -> Option<String> {
    resolve_image_src(src).map(|url| format!("background-image: url({});", url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through() {
        assert_eq!(
            resolve_image_src(Some("HTTPS://cdn.example.com/a.png")).as_deref(),
            Some("HTTPS://cdn.example.com/a.png")
        );
        assert_eq!(
            resolve_image_src(Some("/assets/zelda.png")).as_deref(),
            Some("/assets/zelda.png")
        );
    }

    #[test]
    fn dot_slash_maps_to_site_root() {
        assert_eq!(
            resolve_image_src(Some("./assets/covers/mario.jpg")).as_deref(),
            Some("/assets/covers/mario.jpg")
        );
    }

    #[test]
    fn empty_paths_resolve_to_nothing() {
        assert_eq!(resolve_image_src(None), None);
        assert_eq!(resolve_image_src(Some("   ")), None);
        assert_eq!(
            resolve_image_src(Some("img/relative.png")).as_deref(),
            Some("img/relative.png")
        );
    }

    #[test]
    fn display_image_prefers_cover_then_icon_then_trophy() {
        assert_eq!(display_image(Some("c"), Some("i"), Some("t")), Some("c"));
        assert_eq!(display_image(None, Some("i"), Some("t")), Some("i"));
        assert_eq!(display_image(Some(""), None, Some("t")), Some("t"));
        assert_eq!(display_image(None, None, None), None);
    }
}
