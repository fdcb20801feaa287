//! Page integration tests
//!
//! Renders the portfolio and reads the result back through an HTML5 parser.

use std::collections::HashMap;

use folio_page::{PageRenderer, Portfolio, Project, RenderOptions};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Parsed element: tag, attributes, flattened text content
#[derive(Debug)]
struct Element {
    tag: String,
    attrs: HashMap<String, String>,
    text: String,
}

impl Element {
    fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class))
    }
}

fn text_of(handle: &Handle, out: &mut String) {
    if let NodeData::Text { contents } = &handle.data {
        out.push_str(&contents.borrow());
    }
    for child in handle.children.borrow().iter() {
        text_of(child, out);
    }
}

fn collect(handle: &Handle, out: &mut Vec<Element>) {
    if let NodeData::Element { name, attrs, .. } = &handle.data {
        let mut text = String::new();
        text_of(handle, &mut text);
        out.push(Element {
            tag: name.local.to_string(),
            attrs: attrs
                .borrow()
                .iter()
                .map(|a| (a.name.local.to_string(), a.value.to_string()))
                .collect(),
            text,
        });
    }
    for child in handle.children.borrow().iter() {
        collect(child, out);
    }
}

fn parse(html: &str) -> Vec<Element> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);
    let mut elements = Vec::new();
    collect(&dom.document, &mut elements);
    elements
}

fn render(portfolio: &Portfolio) -> Vec<Element> {
    let options = RenderOptions {
        year: 2025,
        ..RenderOptions::default()
    };
    parse(&PageRenderer::new(options).render(portfolio))
}

fn tagged<'a>(elements: &'a [Element], tag: &str) -> Vec<&'a Element> {
    elements.iter().filter(|e| e.tag == tag).collect()
}

fn with_class<'a>(elements: &'a [Element], class: &str) -> Vec<&'a Element> {
    elements.iter().filter(|e| e.has_class(class)).collect()
}

fn single_project(video_src: Option<&str>) -> Portfolio {
    let mut portfolio = Portfolio::embedded().unwrap();
    portfolio.projects = vec![Project {
        title: "Clip".into(),
        description: Vec::new(),
        video_src: video_src.map(str::to_string),
        technologies: None,
    }];
    portfolio
}

// ============================================================================
// DOCUMENT STRUCTURE
// ============================================================================

#[test]
fn test_embedded_portfolio_renders_every_section() {
    let elements = render(&Portfolio::embedded().unwrap());

    assert_eq!(with_class(&elements, "hero").len(), 1);
    assert_eq!(with_class(&elements, "projects").len(), 1);
    assert_eq!(with_class(&elements, "about").len(), 1);
    assert_eq!(tagged(&elements, "footer").len(), 1);
    assert_eq!(tagged(&elements, "style").len(), 1);
}

#[test]
fn test_default_title() {
    let elements = render(&Portfolio::embedded().unwrap());
    let title = tagged(&elements, "title");

    assert_eq!(title[0].text, "Shubham | Data Scientist & AI Enthusiast");
}

#[test]
fn test_title_override_and_no_stylesheet() {
    let options = RenderOptions {
        title: Some("Portfolio".into()),
        year: 2025,
        stylesheet: false,
    };
    let html = PageRenderer::new(options).render(&Portfolio::embedded().unwrap());
    let elements = parse(&html);

    assert_eq!(tagged(&elements, "title")[0].text, "Portfolio");
    assert!(tagged(&elements, "style").is_empty());
}

#[test]
fn test_stylesheet_animations() {
    let elements = render(&Portfolio::embedded().unwrap());
    let css = &tagged(&elements, "style")[0].text;

    for keyframes in ["fadeInUp", "float", "gradientPulse"] {
        assert!(css.contains(&format!("@keyframes {keyframes}")), "{keyframes}");
    }
    assert!(css.contains("scroll-behavior: smooth"));
}

// ============================================================================
// PROJECT CARDS
// ============================================================================

#[test]
fn test_cards_are_numbered_with_cycling_accents() {
    let elements = render(&Portfolio::embedded().unwrap());
    let cards = tagged(&elements, "article");
    assert_eq!(cards.len(), 3);

    let numbers: Vec<_> = with_class(&elements, "project-number")
        .iter()
        .map(|e| e.text.clone())
        .collect();
    assert_eq!(numbers, ["#1", "#2", "#3"]);

    assert!(cards[0].has_class("accent-indigo"));
    assert!(cards[1].has_class("accent-blue"));
    assert!(cards[2].has_class("accent-indigo-soft"));

    assert_eq!(cards[0].attr("style"), Some("animation-delay: 0.2s"));
    assert_eq!(cards[1].attr("style"), Some("animation-delay: 0.3s"));
    assert_eq!(cards[2].attr("style"), Some("animation-delay: 0.4s"));
}

#[test]
fn test_tech_tags_only_when_present() {
    let elements = render(&Portfolio::embedded().unwrap());
    let tags: Vec<_> = with_class(&elements, "tech-tag").iter().map(|e| e.text.clone()).collect();
    assert!(tags.contains(&"Scrapy".to_string()));
    assert!(tags.contains(&"MLflow".to_string()));

    let elements = render(&single_project(None));
    assert!(with_class(&elements, "tech-tags").is_empty());
}

#[test]
fn test_strong_runs_survive() {
    let elements = render(&Portfolio::embedded().unwrap());

    assert!(!tagged(&elements, "strong").is_empty());
    assert!(!with_class(&elements, "bullets").is_empty());
}

// ============================================================================
// MEDIA
// ============================================================================

#[test]
fn test_hosted_embed_markup() {
    let elements = render(&single_project(Some("https://www.youtube.com/embed/abc123")));
    let frames = tagged(&elements, "iframe");
    assert_eq!(frames.len(), 1);

    let frame = frames[0];
    assert_eq!(frame.attr("src"), Some("https://www.youtube.com/embed/abc123"));
    assert_eq!(frame.attr("title"), Some("Clip"));
    assert_eq!(frame.attr("referrerpolicy"), Some("strict-origin-when-cross-origin"));
    assert_eq!(
        frame.attr("allow"),
        Some("accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share")
    );
    assert!(frame.attrs.contains_key("allowfullscreen"));
    assert!(tagged(&elements, "video").is_empty());
}

#[test]
fn test_direct_media_markup() {
    let elements = render(&single_project(Some("https://cdn.example.com/video.mp4")));
    assert!(tagged(&elements, "iframe").is_empty());

    let video = tagged(&elements, "video")[0];
    assert_eq!(video.attr("src"), Some("https://cdn.example.com/video.mp4"));
    assert_eq!(video.attr("aria-label"), Some("Clip"));
    assert!(video.attrs.contains_key("controls"));

    let surfaces: Vec<_> = elements
        .iter()
        .filter(|e| e.attrs.contains_key("data-folio-surface"))
        .collect();
    assert_eq!(surfaces.len(), 1);
    assert!(elements.iter().any(|e| e.tag == "button" && e.attrs.contains_key("data-folio-fullscreen")));
}

#[test]
fn test_missing_source_has_no_src() {
    let elements = render(&single_project(None));
    let video = tagged(&elements, "video")[0];

    assert_eq!(video.attr("src"), None);
}

#[test]
fn test_embed_prefix_is_case_sensitive() {
    let elements = render(&single_project(Some("HTTPS://WWW.YOUTUBE.COM/embed/abc")));

    assert!(tagged(&elements, "iframe").is_empty());
    assert_eq!(tagged(&elements, "video").len(), 1);
}

// ============================================================================
// LINKS & ESCAPING
// ============================================================================

#[test]
fn test_links_are_verbatim() {
    let elements = render(&Portfolio::embedded().unwrap());
    let anchors = tagged(&elements, "a");
    let hrefs: Vec<_> = anchors.iter().filter_map(|a| a.attr("href")).collect();

    assert!(hrefs.contains(&"tel:+919599072664"));
    assert!(hrefs.contains(&"mailto:tallyshubham22@email.com"));

    let resume = anchors.iter().find(|a| a.attr("href") == Some("/RESUME.pdf")).unwrap();
    assert!(resume.attrs.contains_key("download"));
    assert_eq!(resume.attr("target"), None);

    for github in anchors.iter().filter(|a| a.attr("href") == Some("https://github.com/shubhamkummarrr")) {
        assert_eq!(github.attr("target"), Some("_blank"));
        assert_eq!(github.attr("rel"), Some("noopener noreferrer"));
    }
}

#[test]
fn test_footer_year() {
    let elements = render(&Portfolio::embedded().unwrap());
    let copyright = with_class(&elements, "copyright");

    assert_eq!(copyright[0].text, "© 2025 Shubham. All rights reserved.");
}

#[test]
fn test_markup_in_content_is_escaped() {
    let mut portfolio = single_project(Some("https://cdn.example.com/a.mp4?x=1&y=\"2\""));
    portfolio.profile.name = "<script>alert(1)</script>".into();

    let elements = render(&portfolio);
    assert!(tagged(&elements, "script").is_empty());
    assert_eq!(tagged(&elements, "h1")[0].text, "<script>alert(1)</script>");
    assert_eq!(
        tagged(&elements, "video")[0].attr("src"),
        Some("https://cdn.example.com/a.mp4?x=1&y=\"2\"")
    );
}
