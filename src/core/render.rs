//! View renderers: pure mappings from records to HTML fragment strings.
//!
//! Nothing here touches I/O or shared state; every free-text field passes
//! through `escape_html` before it reaches the fragment, attribute positions
//! included.

use crate::domain::model::{Education, Experience, Link, Project, SkillGroup};
use crate::utils::text::{escape_html, normalize_url};

pub fn experience_list(items: &[Experience]) -> String {
    items
        .iter()
        .map(|role| {
            let bullets = role
                .bullets
                .iter()
                .map(|b| format!("<li>{}</li>", escape_html(b)))
                .collect::<String>();
            format!(
                "<article class=\"role\">\
                 <div class=\"role-top\">\
                 <h3 class=\"role-title\">{} &middot; {}</h3>\
                 <div class=\"role-meta\">{} &middot; {}</div>\
                 </div>\
                 <ul>{}</ul>\
                 </article>",
                escape_html(&role.title),
                escape_html(&role.company),
                escape_html(&role.location),
                escape_html(&role.dates),
                bullets
            )
        })
        .collect()
}

pub fn education_grid(items: &[Education]) -> String {
    items
        .iter()
        .map(|e| {
            format!(
                "<article class=\"edu\">\
                 <h3>{}</h3>\
                 <p>{}</p>\
                 <p class=\"muted\">{} &middot; {} &middot; {}</p>\
                 </article>",
                escape_html(&e.school),
                escape_html(&e.degree),
                escape_html(&e.location),
                escape_html(&e.dates),
                escape_html(&e.grade)
            )
        })
        .collect()
}

pub fn skills_grid(groups: &[SkillGroup]) -> String {
    groups
        .iter()
        .map(|group| {
            let tags = group
                .items
                .iter()
                .map(|t| format!("<span class=\"tag\">{}</span>", escape_html(t)))
                .collect::<String>();
            format!(
                "<article class=\"skill-card\"><h3>{}</h3><div class=\"tags\">{}</div></article>",
                escape_html(&group.name),
                tags
            )
        })
        .collect()
}

pub fn certification_strip(certs: &[String]) -> String {
    certs
        .iter()
        .map(|c| format!("<span class=\"cert\">{}</span>", escape_html(c)))
        .collect()
}

pub fn contact_links(links: &[Link]) -> String {
    links
        .iter()
        .filter(|l| !normalize_url(&l.url).is_empty())
        .map(|l| {
            format!(
                "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
                escape_html(&normalize_url(&l.url)),
                escape_html(&l.label)
            )
        })
        .collect()
}

/// Builds one project card.
///
/// The repository URL wins over the live URL as the card's primary click
/// target; with neither the card is a plain non-interactive container. The
/// inner "Live" anchor stops its click from propagating so it never triggers
/// the wrapper's navigation as well.
pub fn project_card(p: &Project) -> String {
    let tags = p
        .tags
        .iter()
        .map(|t| format!("<span class=\"pill\">{}</span>", escape_html(t)))
        .collect::<String>();

    let live = normalize_url(&p.live_url);
    let repo = normalize_url(&p.repo_url);

    let links = if live.is_empty() {
        String::new()
    } else {
        format!(
            "<a class=\"live-link\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\" \
             onclick=\"event.stopPropagation()\">Live</a>",
            escape_html(&live)
        )
    };

    let inner = format!(
        "<h3>{}</h3><p>{}</p><div class=\"meta\">{}</div><div class=\"links\">{}</div>",
        escape_html(&p.name),
        escape_html(&p.description),
        tags,
        links
    );

    let primary = if repo.is_empty() { live } else { repo };
    if primary.is_empty() {
        format!("<article class=\"project\">{}</article>", inner)
    } else {
        format!(
            "<a class=\"project project-link\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{}</a>",
            escape_html(&primary),
            inner
        )
    }
}

pub fn projects_grid(projects: &[Project]) -> String {
    if projects.is_empty() {
        return "<div class=\"project\"><h3>No projects found</h3>\
                <p>Add items in <code>data/projects.json</code> or load from GitHub.</p></div>"
            .to_string();
    }
    projects.iter().map(project_card).collect()
}

/// Generic failure card shown when the profile itself cannot be loaded.
pub fn failure_card() -> String {
    "<div class=\"project\"><h3>Something went wrong</h3>\
     <p>The page data could not be loaded. Check the logs for details.</p></div>"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(name: &str, live: &str, repo: &str) -> Project {
        Project {
            name: name.to_string(),
            description: "A thing".to_string(),
            tags: vec!["Rust".to_string()],
            live_url: live.to_string(),
            repo_url: repo.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_projects_render_single_placeholder() {
        let html = projects_grid(&[]);
        assert_eq!(html.matches("<h3>No projects found</h3>").count(), 1);
        assert_eq!(html.matches("class=\"project\"").count(), 1);
        assert!(html.contains("data/projects.json"));
    }

    #[test]
    fn test_card_prefers_repo_url_as_wrapper_target() {
        let html = project_card(&project("x", "https://live.example", "https://github.com/a/x"));
        assert!(html.starts_with("<a class=\"project project-link\" href=\"https://github.com/a/x\""));
        // inner live anchor survives and suppresses propagation
        assert!(html.contains("event.stopPropagation()"));
        assert!(html.contains("href=\"https://live.example\""));
    }

    #[test]
    fn test_card_with_only_repo_url_is_clickable() {
        let html = project_card(&project("x", "", "github.com/a/x"));
        assert!(html.contains("href=\"https://github.com/a/x\""));
        assert!(!html.contains("live-link"));
    }

    #[test]
    fn test_card_without_urls_is_not_clickable() {
        let html = project_card(&project("x", "", ""));
        assert!(html.starts_with("<article class=\"project\">"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_card_escapes_untrusted_fields() {
        let p = Project {
            name: "<script>alert(1)</script>".to_string(),
            description: "a \"desc\"".to_string(),
            tags: vec!["<b>".to_string()],
            ..Default::default()
        };
        let html = project_card(&p);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;desc&quot;"));
        assert!(html.contains("<span class=\"pill\">&lt;b&gt;</span>"));
    }

    #[test]
    fn test_experience_renders_in_source_order() {
        let items = vec![
            Experience {
                title: "First".to_string(),
                ..Default::default()
            },
            Experience {
                title: "Second".to_string(),
                ..Default::default()
            },
        ];
        let html = experience_list(&items);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_contact_links_skip_empty_urls() {
        let links = vec![
            Link {
                label: "GitHub".to_string(),
                url: "github.com/alice".to_string(),
            },
            Link {
                label: "Nothing".to_string(),
                url: "   ".to_string(),
            },
        ];
        let html = contact_links(&links);
        assert!(html.contains("href=\"https://github.com/alice\""));
        assert!(!html.contains("Nothing"));
    }
}
