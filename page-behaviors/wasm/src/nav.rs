use page_behaviors::{Result, nav};

use crate::dom::{Handles, Page, js_err, set_attr};

/// Mark the nav link for the current page with `aria-current="page"`.
pub fn mount(page: &Page) -> Result<Handles> {
    let pathname = page.window.location().pathname().map_err(js_err)?;
    let current = nav::current_page(&pathname, &page.config.index_page);

    let links = page.query_all(&page.config.markup.nav_links)?;
    let hrefs: Vec<Option<String>> = links.iter().map(|a| a.get_attribute("href")).collect();
    let marks = nav::mark_links(hrefs.iter().map(Option::as_deref), current);

    for (link, is_current) in links.iter().zip(marks) {
        if is_current {
            set_attr(link, "aria-current", "page");
        } else {
            let _ = link.remove_attribute("aria-current");
        }
    }

    tracing::debug!(page = current, links = links.len(), "nav highlighted");
    Ok(Handles::default())
}
