// src/core/html.rs
// DOM helpers over `scraper`.
// The result pages are old table layouts, so most lookups are "the first
// matching element after X in document order" rather than clean CSS paths.

use scraper::ElementRef;

/// All text under `el`, concatenated, outer whitespace trimmed.
pub fn text_trimmed(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Every text piece trimmed on its own, empty pieces dropped, glued with no separator.
/// `<td> A <br> B </td>` → "AB".
pub fn text_stripped(el: ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|t| !t.is_empty()).collect()
}

pub fn is_tag(el: ElementRef<'_>, name: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(name)
}

/// Attribute present and equal to `value` (ASCII case-insensitive, outer spaces ignored).
pub fn attr_is(el: ElementRef<'_>, attr: &str, value: &str) -> bool {
    el.value()
        .attr(attr)
        .is_some_and(|v| v.trim().eq_ignore_ascii_case(value))
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Nearest ancestor with tag `name`.
pub fn enclosing<'a>(el: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| is_tag(*a, name))
}

/// Elements after the start of `from` in document order: its own descendants
/// first, then the subtrees of its following siblings, then those of each
/// ancestor's following siblings. Ends right before `stop` if given.
pub fn following<'a>(
    from: ElementRef<'a>,
    stop: Option<ElementRef<'a>>,
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    let inside = from.descendants().skip(1);
    let after = std::iter::once(*from)
        .chain(from.ancestors())
        .flat_map(|node| node.next_siblings())
        .flat_map(|sibling| sibling.descendants());

    inside
        .chain(after)
        .filter_map(ElementRef::wrap)
        .take_while(move |e| Some(*e) != stop)
}
