//! Page template fill: the static stand-in for the live DOM.
//!
//! The template carries empty container elements identified by `id`
//! attributes (`<div id="projects-grid"></div>`). A fill targets one id and
//! inserts a fragment just inside the opening tag. A missing container is a
//! no-op rather than an error, which tolerates partial page layouts.

pub struct Page {
    html: String,
}

impl Page {
    pub fn new(template: String) -> Self {
        Self { html: template }
    }

    /// Inserts `fragment` inside the element whose id equals `container_id`.
    /// No-op when the template has no such element.
    pub fn fill(&mut self, container_id: &str, fragment: &str) {
        let Some(at) = self.insertion_point(container_id) else {
            tracing::debug!("container '{}' not present in template, skipping", container_id);
            return;
        };
        self.html.insert_str(at, fragment);
    }

    pub fn has_container(&self, container_id: &str) -> bool {
        self.insertion_point(container_id).is_some()
    }

    pub fn into_html(self) -> String {
        self.html
    }

    // Position just past the `>` of the opening tag carrying the id.
    fn insertion_point(&self, container_id: &str) -> Option<usize> {
        let needle = format!("id=\"{}\"", container_id);
        let attr = self.html.find(&needle)?;
        let close = self.html[attr..].find('>')?;
        Some(attr + close + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str =
        "<main><div id=\"projects-grid\"></div><span id=\"year\"></span></main>";

    #[test]
    fn test_fill_inserts_inside_container() {
        let mut page = Page::new(TEMPLATE.to_string());
        page.fill("projects-grid", "<article>x</article>");
        assert_eq!(
            page.into_html(),
            "<main><div id=\"projects-grid\"><article>x</article></div><span id=\"year\"></span></main>"
        );
    }

    #[test]
    fn test_missing_container_is_a_noop() {
        let mut page = Page::new(TEMPLATE.to_string());
        page.fill("experience-list", "<li>ignored</li>");
        assert_eq!(page.into_html(), TEMPLATE);
    }

    #[test]
    fn test_has_container() {
        let page = Page::new(TEMPLATE.to_string());
        assert!(page.has_container("year"));
        assert!(!page.has_container("skills-grid"));
    }
}
