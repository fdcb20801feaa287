//! Page rendering
//!
//! Serializes the portfolio to a standalone HTML5 document. Direct media
//! containers are tagged so the browser host can attach playback surfaces.

use chrono::Datelike;
use folio_media::{DirectView, EmbedFrame, MediaView};

use crate::content::{ContentBlock, Inline, Link, Portfolio, Profile, Project};

const STYLESHEET: &str = include_str!("../assets/folio.css");

/// Card accents, cycled by card index
const CARD_ACCENTS: [&str; 3] = ["accent-indigo", "accent-blue", "accent-indigo-soft"];

/// Marks a direct media container (fullscreen target)
pub const SURFACE_ATTR: &str = "data-folio-surface";

/// Marks the button that toggles fullscreen on its surface
pub const FULLSCREEN_BUTTON_ATTR: &str = "data-folio-fullscreen";

/// Render configuration
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Document title. Defaults to "<name> | <tagline>".
    pub title: Option<String>,
    /// Copyright year in the footer
    pub year: i32,
    /// Inline the stylesheet in `<head>`
    pub stylesheet: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: None,
            year: chrono::Local::now().year(),
            stylesheet: true,
        }
    }
}

/// Portfolio page renderer
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    options: RenderOptions,
}

impl PageRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the full document
    pub fn render(&self, portfolio: &Portfolio) -> String {
        let profile = &portfolio.profile;
        let mut out = String::with_capacity(16 * 1024);

        out.push_str("<!DOCTYPE html>\n");
        open(&mut out, "html", &[("lang", "en")]);
        out.push('\n');
        self.head(profile, &mut out);
        open(&mut out, "body", &[]);
        out.push('\n');
        open(&mut out, "div", &[("class", "page")]);
        out.push('\n');

        self.hero(profile, &mut out);
        self.projects(&portfolio.projects, &mut out);
        self.about(profile, &mut out);
        self.footer(profile, &mut out);

        close(&mut out, "div");
        out.push('\n');
        close(&mut out, "body");
        out.push('\n');
        close(&mut out, "html");
        out.push('\n');

        tracing::debug!(bytes = out.len(), projects = portfolio.projects.len(), "rendered page");
        out
    }

    fn head(&self, profile: &Profile, out: &mut String) {
        let title = self
            .options
            .title
            .clone()
            .unwrap_or_else(|| format!("{} | {}", profile.name, profile.tagline));

        open(out, "head", &[]);
        open(out, "meta", &[("charset", "utf-8")]);
        open(
            out,
            "meta",
            &[("name", "viewport"), ("content", "width=device-width, initial-scale=1")],
        );
        element(out, "title", &[], &title);
        if self.options.stylesheet {
            open(out, "style", &[]);
            out.push_str(STYLESHEET);
            close(out, "style");
        }
        close(out, "head");
        out.push('\n');
    }

    fn hero(&self, profile: &Profile, out: &mut String) {
        open(out, "section", &[("class", "hero"), ("id", "top")]);
        open(out, "div", &[("class", "hero-backdrop"), ("aria-hidden", "true")]);
        close(out, "div");
        open(out, "div", &[("class", "hero-content")]);

        open(out, "div", &[("class", "portrait")]);
        open(
            out,
            "img",
            &[("src", profile.image.as_str()), ("alt", "profile"), ("class", "portrait-image animate-float")],
        );
        if let Some(resume) = &profile.resume {
            element(
                out,
                "a",
                &[("href", resume.href.as_str()), ("download", ""), ("class", "resume-link animate-fade-in-up")],
                &resume.label,
            );
        }
        close(out, "div");

        element(out, "h1", &[("class", "hero-name animate-fade-in-up")], &profile.name);
        element(out, "p", &[("class", "hero-tagline animate-fade-in-up")], &profile.tagline);
        open(out, "p", &[("class", "hero-intro animate-fade-in-up")]);
        escape_text(&profile.intro, out);
        if let Some(highlight) = &profile.highlight {
            out.push(' ');
            element(out, "span", &[("class", "highlight")], highlight);
        }
        close(out, "p");
        social_links(&profile.links, "hero-links", out);

        close(out, "div");
        close(out, "section");
        out.push('\n');
    }

    fn projects(&self, projects: &[Project], out: &mut String) {
        open(out, "section", &[("class", "projects"), ("id", "projects")]);
        open(out, "h2", &[("class", "section-title animate-fade-in-up")]);
        element(out, "span", &[("class", "gradient-text")], "Featured Projects");
        close(out, "h2");
        out.push('\n');

        for (index, project) in projects.iter().enumerate() {
            self.project_card(index, project, out);
        }

        close(out, "section");
        out.push('\n');
    }

    fn project_card(&self, index: usize, project: &Project, out: &mut String) {
        let number = index + 1;
        let accent = CARD_ACCENTS[index % CARD_ACCENTS.len()];
        let delay = 0.2 + index as f64 * 0.1;
        let class = format!("project-card {accent}");
        let style = format!("animation-delay: {delay:.1}s");
        let id = format!("project-{number}");

        open(out, "article", &[("class", class.as_str()), ("id", id.as_str()), ("style", style.as_str())]);
        open(out, "div", &[("class", "project-body")]);

        open(out, "h2", &[("class", "project-title")]);
        element(out, "span", &[("class", "project-number")], &format!("#{number}"));
        element(out, "span", &[("class", "gradient-text")], &project.title);
        close(out, "h2");

        open(out, "div", &[("class", "project-description")]);
        for block in &project.description {
            content_block(block, out);
        }
        close(out, "div");

        if let Some(technologies) = &project.technologies {
            open(out, "div", &[("class", "tech-tags")]);
            for tech in technologies {
                element(out, "span", &[("class", "tech-tag")], tech);
            }
            close(out, "div");
        }
        close(out, "div");

        open(out, "div", &[("class", "project-media")]);
        open(out, "div", &[("class", "media-glow"), ("aria-hidden", "true")]);
        close(out, "div");
        media(&MediaView::new(project.video_src.as_deref(), Some(&project.title)), out);
        close(out, "div");

        close(out, "article");
        out.push('\n');
    }

    fn about(&self, profile: &Profile, out: &mut String) {
        open(out, "section", &[("class", "about"), ("id", "about")]);
        open(out, "div", &[("class", "about-card animate-fade-in-up")]);

        open(out, "h2", &[("class", "section-title")]);
        element(out, "span", &[("class", "gradient-text")], "About Me");
        close(out, "h2");
        element(out, "p", &[("class", "about-text")], &profile.about);

        let contact = &profile.contact;
        open(out, "div", &[("class", "cta")]);
        element(out, "h3", &[], &contact.heading);
        element(out, "p", &[], &contact.prompt);
        open(out, "div", &[("class", "cta-links")]);
        for link in &contact.links {
            element(out, "a", &[("href", link.href.as_str()), ("class", "cta-link")], &link.label);
        }
        close(out, "div");
        close(out, "div");

        close(out, "div");
        close(out, "section");
        out.push('\n');
    }

    fn footer(&self, profile: &Profile, out: &mut String) {
        open(out, "footer", &[("class", "footer")]);
        social_links(&profile.links, "footer-links", out);
        element(
            out,
            "p",
            &[("class", "copyright")],
            &format!("© {} {}. All rights reserved.", self.options.year, profile.name),
        );
        if let Some(note) = &profile.footer_note {
            element(out, "p", &[("class", "footer-note")], note);
        }
        close(out, "footer");
        out.push('\n');
    }
}

fn social_links(links: &[Link], class: &str, out: &mut String) {
    if links.is_empty() {
        return;
    }
    open(out, "nav", &[("class", class)]);
    for link in links {
        let kind_class = format!("social social-{}", kind_name(link));
        if link.kind.is_external() {
            element(
                out,
                "a",
                &[
                    ("href", link.href.as_str()),
                    ("target", "_blank"),
                    ("rel", "noopener noreferrer"),
                    ("class", kind_class.as_str()),
                    ("aria-label", link.label.as_str()),
                ],
                &link.label,
            );
        } else {
            element(out, "a", &[("href", link.href.as_str()), ("class", kind_class.as_str())], &link.label);
        }
    }
    close(out, "nav");
}

fn kind_name(link: &Link) -> &'static str {
    use crate::content::LinkKind;
    match link.kind {
        LinkKind::Web => "web",
        LinkKind::Github => "github",
        LinkKind::Linkedin => "linkedin",
        LinkKind::Document => "document",
    }
}

fn content_block(block: &ContentBlock, out: &mut String) {
    match block {
        ContentBlock::Heading { text } => element(out, "p", &[("class", "lead")], text),
        ContentBlock::Paragraph { text, tone } => {
            open(out, "p", &[("class", tone.class())]);
            inlines(text, out);
            close(out, "p");
        }
        ContentBlock::List { items } => {
            open(out, "ul", &[("class", "bullets")]);
            for item in items {
                open(out, "li", &[]);
                inlines(item, out);
                close(out, "li");
            }
            close(out, "ul");
        }
        ContentBlock::Section { label, blocks } => {
            open(out, "div", &[("class", "group")]);
            element(out, "p", &[("class", "group-label")], label);
            for block in blocks {
                content_block(block, out);
            }
            close(out, "div");
        }
    }
}

fn inlines(runs: &[Inline], out: &mut String) {
    for run in runs {
        match run {
            Inline::Text(text) => escape_text(text, out),
            Inline::Strong { strong } => element(out, "strong", &[], strong),
        }
    }
}

fn media(view: &MediaView, out: &mut String) {
    match view {
        MediaView::Embed(frame) => embed_frame(frame, out),
        MediaView::Direct(direct) => direct_media(direct, out),
    }
}

fn embed_frame(frame: &EmbedFrame, out: &mut String) {
    let style = format!("aspect-ratio: {}", frame.aspect_ratio.css());
    let allow = frame.allow_attribute();

    open(out, "div", &[("class", "media-frame media-embed"), ("style", style.as_str())]);
    let mut attrs = vec![
        ("width", "100%"),
        ("height", "100%"),
        ("src", frame.src.as_str()),
        ("title", frame.title.as_str()),
        ("frameborder", "0"),
        ("allow", allow.as_str()),
        ("referrerpolicy", frame.referrer_policy.as_str()),
    ];
    if frame.allow_fullscreen {
        attrs.push(("allowfullscreen", ""));
    }
    open(out, "iframe", &attrs);
    close(out, "iframe");
    close(out, "div");
}

fn direct_media(view: &DirectView, out: &mut String) {
    open(out, "div", &[("class", "media-frame media-direct"), (SURFACE_ATTR, "")]);

    let mut attrs = Vec::with_capacity(4);
    if let Some(src) = &view.src {
        attrs.push(("src", src.as_str()));
    }
    attrs.push(("class", "media-video"));
    attrs.push(("aria-label", view.label.as_str()));
    if view.controls {
        attrs.push(("controls", ""));
    }
    open(out, "video", &attrs);
    close(out, "video");

    element(
        out,
        "button",
        &[
            ("type", "button"),
            ("class", "fullscreen-toggle"),
            (FULLSCREEN_BUTTON_ATTR, ""),
            ("aria-label", "Toggle fullscreen"),
        ],
        "⛶",
    );
    close(out, "div");
}

/// Start tag. Empty values are written as boolean attributes.
fn open(out: &mut String, tag: &str, attrs: &[(&str, &str)]) {
    out.push('<');
    out.push_str(tag);
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        if !value.is_empty() {
            out.push_str("=\"");
            escape_attribute(value, out);
            out.push('"');
        }
    }
    out.push('>');
}

fn close(out: &mut String, tag: &str) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn element(out: &mut String, tag: &str, attrs: &[(&str, &str)], text: &str) {
    open(out, tag, attrs);
    escape_text(text, out);
    close(out, tag);
}

/// Escape text for use anywhere in an HTML document
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_attribute(text, &mut out);
    out
}

/// Escape text content for HTML
fn escape_text(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Escape attribute value
fn escape_attribute(text: &str, output: &mut String) {
    for c in text.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '"' => output.push_str("&quot;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}
