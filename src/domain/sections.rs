//! Building blocks of a documentation page.
//!
//! A topic body is an ordered list of [`Block`]s. Prose fragments are stored
//! as trusted inline HTML (they may carry `<code>` and `<strong>` spans);
//! code samples are stored in escaped single-line form and unescaped by the
//! render pipeline before highlighting.

/// One content block of a documentation page.
#[derive(Clone, Debug)]
pub enum Block {
    /// Section heading. `level` is the rendered HTML level (2..=4); level 1
    /// is reserved for the page title.
    Heading { level: u8, text: String },
    Paragraph { html: String },
    /// Secondary remark rendered in a dimmed style.
    Note { html: String },
    Bullets { items: Vec<String> },
    /// A group of labeled code samples, one container per sample.
    Code { samples: Vec<CodeSample> },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        debug_assert!((2..=4).contains(&level));
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn para(html: impl Into<String>) -> Self {
        Self::Paragraph { html: html.into() }
    }

    pub fn note(html: impl Into<String>) -> Self {
        Self::Note { html: html.into() }
    }

    pub fn bullets<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Bullets {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn code<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = CodeSample>,
    {
        Self::Code {
            samples: samples.into_iter().collect(),
        }
    }
}

/// Languages the labeled code containers distinguish, mirroring the shell /
/// PHP / HTML / plain-text sample kinds of the documentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeLanguage {
    Shell,
    Php,
    Html,
    Text,
}

impl CodeLanguage {
    /// Human-readable label shown in the container header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Shell => "Bash",
            Self::Php => "PHP",
            Self::Html => "HTML",
            Self::Text => "Text",
        }
    }

    /// Token used for syntax lookup and CSS class names.
    pub fn token(self) -> &'static str {
        match self {
            Self::Shell => "bash",
            Self::Php => "php",
            Self::Html => "html",
            Self::Text => "txt",
        }
    }
}

/// One code sample. `source` carries literal `\n`, `\t`, `\"` and `\\`
/// sequences; the render pipeline unescapes it exactly once.
#[derive(Clone, Debug)]
pub struct CodeSample {
    pub language: CodeLanguage,
    pub source: String,
}

impl CodeSample {
    pub fn new(language: CodeLanguage, source: impl Into<String>) -> Self {
        Self {
            language,
            source: source.into(),
        }
    }

    pub fn shell(source: impl Into<String>) -> Self {
        Self::new(CodeLanguage::Shell, source)
    }

    pub fn php(source: impl Into<String>) -> Self {
        Self::new(CodeLanguage::Php, source)
    }

    pub fn html(source: impl Into<String>) -> Self {
        Self::new(CodeLanguage::Html, source)
    }

    pub fn text(source: impl Into<String>) -> Self {
        Self::new(CodeLanguage::Text, source)
    }
}
