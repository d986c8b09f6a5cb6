// Pure page description - no HTTP or I/O in here.
// A page is a title/layout config plus the blocks emitted into it, in order.

use serde::{Deserialize, Serialize};

pub const PAGE_TITLE: &str = "BOM Dashboard";
pub const HEADING: &str = "Bill of Materials Dashboard";
pub const WELCOME: &str = "Welcome to the BOM (Bill of Materials) management application.";
pub const LOADED: &str = "Application loaded successfully!";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Centered,
    Wide,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Centered => "centered",
            Self::Wide => "wide",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
    pub title: String,
    pub layout: Layout,
}

/// One block of page content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Element {
    Title(String),
    Paragraph(String),
    Info(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub config: PageConfig,
    pub elements: Vec<Element>,
}

impl Page {
    pub fn new(config: PageConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
        }
    }

    /// Appends a top-level heading.
    pub fn title(&mut self, text: &str) -> &mut Self {
        self.elements.push(Element::Title(text.to_string()));
        self
    }

    /// Appends a paragraph of body text.
    pub fn write(&mut self, text: &str) -> &mut Self {
        self.elements.push(Element::Paragraph(text.to_string()));
        self
    }

    /// Appends an informational status banner.
    pub fn info(&mut self, text: &str) -> &mut Self {
        self.elements.push(Element::Info(text.to_string()));
        self
    }

    pub fn headings(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Title(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn paragraphs(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Paragraph(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn infos(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter_map(|e| match e {
                Element::Info(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// Builds the dashboard page. Every call starts from a blank page.
pub fn dashboard() -> Page {
    let mut page = Page::new(PageConfig {
        title: PAGE_TITLE.to_string(),
        layout: Layout::Wide,
    });

    page.title(HEADING).write(WELCOME).info(LOADED);

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_dashboard_config() {
        let page = dashboard();
        assert_eq!(page.config.title, "BOM Dashboard");
        assert_eq!(page.config.layout, Layout::Wide);
        assert_eq!(page.config.layout.as_str(), "wide");
    }

    #[test]
    fn test_dashboard_emission_order() {
        let page = dashboard();
        assert_eq!(
            page.elements,
            vec![
                Element::Title("Bill of Materials Dashboard".to_string()),
                Element::Paragraph(
                    "Welcome to the BOM (Bill of Materials) management application.".to_string()
                ),
                Element::Info("Application loaded successfully!".to_string()),
            ]
        );
    }

    #[test]
    fn test_exactly_one_of_each() {
        let page = dashboard();
        assert_eq!(page.headings(), vec![HEADING]);
        assert_eq!(page.paragraphs(), vec![WELCOME]);
        assert_eq!(page.infos(), vec![LOADED]);
    }

    #[test]
    fn test_no_state_carried_between_calls() {
        let first = dashboard();
        let second = dashboard();
        assert_eq!(first, second);
        assert_eq!(second.elements.len(), 3);
    }

    #[rstest]
    #[case(Layout::Wide, "\"wide\"")]
    #[case(Layout::Centered, "\"centered\"")]
    fn test_layout_serializes_lowercase(#[case] layout: Layout, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&layout).unwrap(), expected);
        assert_eq!(serde_json::from_str::<Layout>(expected).unwrap(), layout);
    }

    #[test]
    fn test_builder_chains_in_call_order() {
        let mut page = Page::new(PageConfig {
            title: "t".to_string(),
            layout: Layout::default(),
        });
        page.info("a").write("b").title("c");
        assert_eq!(page.infos(), vec!["a"]);
        assert_eq!(page.paragraphs(), vec!["b"]);
        assert_eq!(page.headings(), vec!["c"]);
        assert!(matches!(page.elements[0], Element::Info(_)));
        assert!(matches!(page.elements[2], Element::Title(_)));
    }
}
