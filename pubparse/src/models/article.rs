//! Parsed article union

use super::pmc::PmcArticle;
use super::pubmed::{PubmedArticleSet, PubmedBookArticleSet};
use serde::Serialize;
use std::fmt;

/// Result of format discrimination: exactly one variant per parsed document
///
/// Serializes as the inner tree with no variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedArticle {
    /// `<PubmedArticleSet>` of journal citations
    GenericArticleSet(PubmedArticleSet),
    /// `<PubmedBookArticleSet>` of book documents
    BookArticleSet(PubmedBookArticleSet),
    /// JATS `<article>` full text
    FullTextArticle(Box<PmcArticle>),
}

/// Schema family a document belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleFamily {
    Pubmed,
    Pmc,
}

impl ArticleFamily {
    /// Base name of the JSON schema file (`<name>_json_schema.json`)
    pub fn schema_name(self) -> &'static str {
        match self {
            ArticleFamily::Pubmed => "pubmed",
            ArticleFamily::Pmc => "pmc",
        }
    }

    /// Parse a declared family name ("pubmed" or "pmc")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pubmed" => Some(ArticleFamily::Pubmed),
            "pmc" => Some(ArticleFamily::Pmc),
            _ => None,
        }
    }
}

impl fmt::Display for ArticleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.schema_name())
    }
}

impl ParsedArticle {
    /// Schema family, a pure function of the variant
    pub fn family(&self) -> ArticleFamily {
        match self {
            ParsedArticle::GenericArticleSet(_) | ParsedArticle::BookArticleSet(_) => {
                ArticleFamily::Pubmed
            }
            ParsedArticle::FullTextArticle(_) => ArticleFamily::Pmc,
        }
    }

    /// Variant name for logs and diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            ParsedArticle::GenericArticleSet(_) => "GenericArticleSet",
            ParsedArticle::BookArticleSet(_) => "BookArticleSet",
            ParsedArticle::FullTextArticle(_) => "FullTextArticle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_follows_variant() {
        let generic = ParsedArticle::GenericArticleSet(PubmedArticleSet::default());
        let book = ParsedArticle::BookArticleSet(PubmedBookArticleSet::default());
        let full = ParsedArticle::FullTextArticle(Box::default());

        assert_eq!(generic.family(), ArticleFamily::Pubmed);
        assert_eq!(book.family(), ArticleFamily::Pubmed);
        assert_eq!(full.family(), ArticleFamily::Pmc);
        assert_eq!(full.family().schema_name(), "pmc");
    }

    #[test]
    fn test_family_from_name() {
        assert_eq!(ArticleFamily::from_name("PubMed"), Some(ArticleFamily::Pubmed));
        assert_eq!(ArticleFamily::from_name("pmc"), Some(ArticleFamily::Pmc));
        assert_eq!(ArticleFamily::from_name("jats"), None);
    }
}
