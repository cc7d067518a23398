//! Key and value rules applied to a single `<meta>` element.

use scraper::node::Element;

const OG_PREFIX: &str = "og:";

/// Returns the non-empty value of `name` on `el`.
fn non_empty_attr<'a>(el: &'a Element, name: &str) -> Option<&'a str> {
    el.attr(name).filter(|v| !v.is_empty())
}

/// `property` if present and non-empty, else `name`.
pub(crate) fn meta_property(el: &Element) -> Option<&str> {
    non_empty_attr(el, "property").or_else(|| non_empty_attr(el, "name"))
}

/// Strips `og:` and replaces every `-` with `_`. `None` if the prefix is missing.
pub(crate) fn og_key(property: &str) -> Option<String> {
    property
        .strip_prefix(OG_PREFIX)
        .map(|rest| rest.replace('-', "_"))
}

/// Key this element contributes, or `None` if it is skipped.
///
/// Outside all-meta mode only elements whose `property` starts with `og:` count.
/// In all-meta mode every element with a `property`/`name` counts; `og:` names are
/// normalized, others are used verbatim.
pub(crate) fn meta_key(el: &Element, all_meta: bool) -> Option<String> {
    let property = meta_property(el)?;
    let key = if all_meta {
        og_key(property).unwrap_or_else(|| property.to_string())
    } else {
        og_key(non_empty_attr(el, "property")?)?
    };
    Some(key).filter(|k| !k.is_empty())
}

/// `content` if non-empty, else `value` if non-empty, else the empty string.
pub(crate) fn meta_value(el: &Element) -> String {
    non_empty_attr(el, "content")
        .or_else(|| non_empty_attr(el, "value"))
        .unwrap_or_default()
        .to_string()
}
