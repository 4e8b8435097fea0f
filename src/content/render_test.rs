use super::*;

#[test]
fn header_lists_every_link() {
    let out = render_header();
    assert!(out.contains(PROFILE.name));
    for link in PROFILE.links {
        assert!(out.contains(link.url), "missing link {}", link.url);
    }
}

#[test]
fn timeline_includes_every_entry() {
    let out = render_timeline();
    for e in EXPERIENCE {
        assert!(out.contains(e.company), "missing company {}", e.company);
        assert!(out.contains(e.period), "missing period {}", e.period);
    }
}

#[test]
fn projects_flag_the_interactive_demo() {
    let out = render_projects();
    for p in PROJECTS {
        assert!(out.contains(p.title), "missing project {}", p.title);
    }
    assert_eq!(out.matches("[demo: folio chat]").count(), 1);
    let flagged: Vec<_> = PROJECTS.iter().filter(|p| p.interactive).collect();
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].title, "Mercari Shopping Agent");
}

#[test]
fn site_contains_all_section_titles() {
    let out = render_site();
    for title in ["TIMELINE", "PROJECTS", "TECHNICAL CONTEXT", "LEADERSHIP", "LIFE IN PICTURES"] {
        assert!(out.contains(title), "missing section {title}");
    }
}

#[test]
fn pictures_list_every_frame() {
    let out = render_pictures();
    for p in PHOTOS {
        assert!(out.contains(p.caption));
        assert!(out.contains(p.src));
    }
}
