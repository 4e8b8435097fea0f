//! Plain-text rendering of the portfolio sections.
//!
//! Mirrors the single-page layout: header, timeline, projects,
//! technical context, leadership, pictures. Pure iteration and joining.

use std::fmt::Write;

use super::data::{
    CERTIFICATIONS, EXPERIENCE, LEADERSHIP, PHOTOS, PROFILE, PROJECTS, SKILLS,
};

fn section(title: &str, body: &str) -> String {
    let rule = "-".repeat(title.len());
    format!("{}\n{rule}\n{body}", title.to_uppercase())
}

#[must_use]
pub fn render_header() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", PROFILE.name);
    let _ = writeln!(out, "{}", PROFILE.tagline);
    for link in PROFILE.links {
        let _ = writeln!(out, "{}: {}", link.label, link.url);
    }
    out
}

#[must_use]
pub fn render_timeline() -> String {
    let mut body = String::new();
    for e in EXPERIENCE {
        let _ = writeln!(body, "{}  {}, {}", e.period, e.role, e.company);
        let _ = writeln!(body, "    {}", e.detail);
    }
    section("Timeline", &body)
}

#[must_use]
pub fn render_projects() -> String {
    let mut body = String::new();
    for p in PROJECTS {
        let demo = if p.interactive { "  [demo: folio chat]" } else { "" };
        let _ = writeln!(body, "{} ({}){demo}", p.title, p.year);
        let _ = writeln!(body, "    {}", p.stack);
        let _ = writeln!(body, "    {}", p.link);
        let _ = writeln!(body, "    {}", p.desc);
    }
    section("Projects", &body)
}

#[must_use]
pub fn render_technical_context() -> String {
    let mut body = String::new();
    let _ = writeln!(body, "Toolkit: {}", SKILLS.join(" / "));
    let _ = writeln!(body, "Certifications:");
    for c in CERTIFICATIONS {
        let _ = writeln!(body, "  - {} — {}", c.title, c.issuer);
        let _ = writeln!(body, "    {}", c.link);
    }
    section("Technical Context", &body)
}

#[must_use]
pub fn render_leadership() -> String {
    let mut body = String::new();
    for item in LEADERSHIP {
        let _ = writeln!(body, "  - {item}");
    }
    section("Leadership", &body)
}

#[must_use]
pub fn render_pictures() -> String {
    let mut body = String::new();
    for p in PHOTOS {
        let _ = writeln!(body, "  {} ({})", p.caption, p.src);
    }
    let captions: Vec<&str> = PHOTOS.iter().map(|p| p.caption).collect();
    let _ = writeln!(body, "Selected frames: {}", captions.join(", "));
    section("Life in Pictures", &body)
}

/// The whole page, sections in layout order.
#[must_use]
pub fn render_site() -> String {
    [
        render_header(),
        render_timeline(),
        render_projects(),
        render_technical_context(),
        render_leadership(),
        render_pictures(),
    ]
    .join("\n")
}

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
