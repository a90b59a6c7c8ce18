use crate::AssetError;

/// Default document served for the empty name.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Turn a requested name into a lookup key.
///
/// One leading slash is stripped and the empty result becomes
/// `default_document`. Nothing else is rewritten: names are case-sensitive
/// and `a//b` stays `a//b`.
///
/// A name that could leave the overlay root (a `..` segment, or a path that
/// is still absolute after the strip) names no asset and is `NotFound`.
pub fn normalize(name: &str, default_document: &str) -> Result<String, AssetError> {
    let stripped = name.strip_prefix('/').unwrap_or(name);
    if stripped.is_empty() {
        return Ok(default_document.to_owned());
    }
    if stripped.starts_with('/') || stripped.split('/').any(|segment| segment == "..") {
        log::debug!("rejecting asset name {name:?}");
        return Err(AssetError::NotFound(stripped.to_owned()));
    }
    Ok(stripped.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(name: &str) -> String {
        normalize(name, DEFAULT_DOCUMENT).unwrap()
    }

    #[test]
    fn plain_name() {
        assert_eq!(norm("a.js"), "a.js");
    }

    #[test]
    fn leading_slash() {
        assert_eq!(norm("/foo.js"), "foo.js");
    }

    #[test]
    fn strip_is_idempotent() {
        assert_eq!(norm(&norm("/foo.js")), norm("foo.js"));
    }

    #[test]
    fn empty_is_default_document() {
        assert_eq!(norm(""), DEFAULT_DOCUMENT);
        assert_eq!(norm("/"), DEFAULT_DOCUMENT);
    }

    #[test]
    fn custom_default_document() {
        assert_eq!(normalize("/", "layout.html").unwrap(), "layout.html");
    }

    #[test]
    fn inner_separators_kept() {
        assert_eq!(norm("/static/a//b.css"), "static/a//b.css");
        assert_eq!(norm("static/./a.css"), "static/./a.css");
    }

    #[test]
    fn case_preserved() {
        assert_eq!(norm("/Layout.HTML"), "Layout.HTML");
    }

    #[test]
    fn parent_segments_are_not_found() {
        let err = normalize("static/../missing.js", DEFAULT_DOCUMENT).unwrap_err();
        assert!(err.is_not_found());
        assert!(normalize("..", DEFAULT_DOCUMENT).unwrap_err().is_not_found());
    }

    #[test]
    fn double_leading_slash_is_not_found() {
        assert!(normalize("//a.js", DEFAULT_DOCUMENT).unwrap_err().is_not_found());
    }

    #[test]
    fn dotted_file_names_allowed() {
        assert_eq!(norm("..hidden"), "..hidden");
    }
}
