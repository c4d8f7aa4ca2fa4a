//! Navigation highlighting.

/// Last segment of a location path, or `index_page` when the path ends in `/`.
pub fn current_page<'a>(pathname: &'a str, index_page: &'a str) -> &'a str {
    match pathname.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => index_page,
    }
}

/// Whether a nav link with this `href` is the current page.
pub fn is_current(href: Option<&str>, page: &str) -> bool {
    href == Some(page)
}

/// Current-page flags for a list of link hrefs, in order.
///
/// Every link gets a definite answer so the projection both sets and clears
/// the marker, which keeps repeated calls idempotent.
pub fn mark_links<'a, I>(hrefs: I, page: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs.into_iter().map(|href| is_current(href, page)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_current_page_takes_last_segment() {
        assert_eq!(current_page("/site/impacts.html", "index.html"), "impacts.html");
        assert_eq!(current_page("quiz.html", "index.html"), "quiz.html");
    }

    #[test]
    fn test_current_page_defaults_on_trailing_slash() {
        assert_eq!(current_page("/", "index.html"), "index.html");
        assert_eq!(current_page("", "index.html"), "index.html");
        assert_eq!(current_page("/site/", "home.html"), "home.html");
    }

    #[test]
    fn test_marks_exactly_the_matching_link() {
        let hrefs = [Some("index.html"), Some("impacts.html"), None, Some("quiz.html")];
        let marks = mark_links(hrefs, "impacts.html");
        assert_eq!(marks, vec![false, true, false, false]);
    }

    #[test]
    fn test_no_match_marks_nothing() {
        let marks = mark_links([Some("index.html"), Some("quiz.html")], "about.html");
        assert_eq!(marks, vec![false, false]);
    }

    #[test]
    fn test_marking_is_idempotent() {
        let hrefs = [Some("index.html"), Some("quiz.html")];
        let first = mark_links(hrefs, "quiz.html");
        let second = mark_links(hrefs, "quiz.html");
        assert_eq!(first, second);
    }
}
