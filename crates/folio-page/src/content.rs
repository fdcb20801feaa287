//! Portfolio content
//!
//! Profile and project records. Descriptions are a small tagged document
//! (headings, paragraphs, lists, labelled sections) rather than markup.

use serde::{Deserialize, Serialize};

const EMBEDDED: &str = include_str!("../content/portfolio.json");

/// Content error
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Malformed portfolio content: {0}")]
    Json(#[from] serde_json::Error),
}

/// The whole page's data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub projects: Vec<Project>,
}

impl Portfolio {
    /// Content compiled into the binary
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let portfolio: Portfolio = serde_json::from_str(json)?;
        tracing::debug!(projects = portfolio.projects.len(), "loaded portfolio content");
        Ok(portfolio)
    }
}

/// Who the page is about
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub tagline: String,
    pub intro: String,
    #[serde(default)]
    pub highlight: Option<String>,
    pub image: String,
    #[serde(default)]
    pub resume: Option<Link>,
    #[serde(default)]
    pub links: Vec<Link>,
    pub about: String,
    pub contact: Contact,
    #[serde(default)]
    pub footer_note: Option<String>,
}

/// Outbound link. Emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub kind: LinkKind,
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    #[default]
    Web,
    Github,
    Linkedin,
    Document,
}

impl LinkKind {
    /// Opens in a new tab
    pub fn is_external(self) -> bool {
        matches!(self, Self::Web | Self::Github | Self::Linkedin)
    }
}

/// Call-to-action block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub prompt: String,
    pub links: Vec<ContactLink>,
}

/// `tel:` / `mailto:` link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub label: String,
    pub href: String,
}

/// One project card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub description: Vec<ContentBlock>,
    #[serde(default)]
    pub video_src: Option<String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
}

/// Block of rich description content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading {
        text: String,
    },
    Paragraph {
        text: Vec<Inline>,
        #[serde(default)]
        tone: Tone,
    },
    List {
        items: Vec<Vec<Inline>>,
    },
    Section {
        label: String,
        blocks: Vec<ContentBlock>,
    },
}

/// Inline run: a bare string, or `{"strong": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Inline {
    Text(String),
    Strong { strong: String },
}

impl Inline {
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Strong { strong: text } => text,
        }
    }
}

/// Paragraph emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Normal,
    Accent,
    Emphasis,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Self::Normal => "tone-normal",
            Self::Accent => "tone-accent",
            Self::Emphasis => "tone-emphasis",
        }
    }
}

impl ContentBlock {
    /// Plain text of the block, runs joined without markup
    pub fn plain_text(&self) -> String {
        fn runs(inlines: &[Inline]) -> String {
            inlines.iter().map(Inline::text).collect()
        }
        match self {
            Self::Heading { text } => text.clone(),
            Self::Paragraph { text, .. } => runs(text),
            Self::List { items } => items
                .iter()
                .map(|item| runs(item))
                .collect::<Vec<_>>()
                .join("\n"),
            Self::Section { label, blocks } => std::iter::once(label.clone())
                .chain(blocks.iter().map(ContentBlock::plain_text))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}
