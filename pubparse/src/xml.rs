//! XML scanning helpers used ahead of serde decoding
//!
//! `quick_xml::de` ignores the root element name and cannot read mixed
//! content into `String` fields. These helpers cover both gaps with a light
//! pass over the raw text.

use crate::models::pubmed::UnknownElement;
use quick_xml::events::Event;
use quick_xml::Reader;

/// Formatting elements whose markup is dropped while their text is kept
const INLINE_TAGS: &[&str] = &[
    "b",
    "i",
    "u",
    "sup",
    "sub",
    "bold",
    "italic",
    "underline",
    "overline",
    "strike",
    "monospace",
    "roman",
    "sans-serif",
    "sc",
    "xref",
    "ext-link",
    "uri",
    "named-content",
    "styled-content",
    "break",
    "institution",
    "institution-wrap",
    "addr-line",
    "country",
];

/// Elements read as plain text whatever markup they contain
///
/// Everything nested inside one of these (lists, formulas, MathML, figures)
/// is reduced to its character data.
const TEXT_ONLY_TAGS: &[&str] = &[
    // PubMed
    "AbstractText",
    "ArticleTitle",
    "VernacularTitle",
    "BookTitle",
    "Title",
    "Keyword",
    "Affiliation",
    "Citation",
    "CoiStatement",
    "CopyrightInformation",
    // JATS
    "p",
    "title",
    "article-title",
    "subtitle",
    "kwd",
    "subject",
    "source",
    "copyright-statement",
    "meta-value",
];

fn is_inline(name: &str) -> bool {
    INLINE_TAGS.contains(&name)
}

fn is_text_only(name: &str) -> bool {
    TEXT_ONLY_TAGS.contains(&name)
}

/// Open text-only element whose descendants are being flattened
struct Flattening<'a> {
    name: &'a str,
    nested: usize,
}

/// Reduce mixed content to the character data serde can read
///
/// Inline formatting tags are removed everywhere, keeping the text between
/// them: `<AbstractText>CO<sub>2</sub> levels</AbstractText>` becomes
/// `<AbstractText>CO2 levels</AbstractText>`. Inside a text-only element every
/// descendant tag and comment is removed as well, so
/// `<p>Items: <list><list-item><p>one</p></list-item></list></p>` becomes
/// `<p>Items: one</p>`. Elsewhere comments, CDATA and processing instructions
/// are copied through untouched.
pub fn flatten_mixed_content(xml: &str) -> String {
    let mut out = String::with_capacity(xml.len());
    let mut rest = xml;
    let mut open: Option<Flattening<'_>> = None;

    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let tag = &rest[start..];

        let Some(close) = tag_end(tag) else {
            // Unterminated markup; leave it for the parser to reject
            out.push_str(tag);
            return out;
        };
        let markup = &tag[..=close];
        rest = &tag[close + 1..];

        let inner = &tag[1..close];
        let is_special = inner.starts_with('!') || inner.starts_with('?');
        let is_end = inner.starts_with('/');
        let is_empty = inner.ends_with('/');
        let name = inner
            .trim_start_matches('/')
            .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
            .next()
            .unwrap_or("");

        if let Some(current) = open.as_mut() {
            if inner.starts_with("![CDATA[") {
                out.push_str(markup);
            } else if is_special || is_empty {
                // dropped
            } else if is_end {
                if current.nested == 0 && name == current.name {
                    out.push_str(markup);
                    open = None;
                } else {
                    current.nested = current.nested.saturating_sub(1);
                }
            } else {
                current.nested += 1;
            }
            continue;
        }

        if is_special {
            out.push_str(markup);
        } else if !is_inline(name) {
            out.push_str(markup);
            if !is_end && !is_empty && is_text_only(name) {
                open = Some(Flattening { name, nested: 0 });
            }
        }
    }

    out.push_str(rest);
    out
}

/// Index of the `>` closing the tag that starts at `tag[0] == '<'`
fn tag_end(tag: &str) -> Option<usize> {
    if tag.starts_with("<!--") {
        return tag.find("-->").map(|i| i + 2);
    }
    if tag.starts_with("<![CDATA[") {
        return tag.find("]]>").map(|i| i + 2);
    }

    let mut quote: Option<char> = None;
    for (i, c) in tag.char_indices().skip(1) {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"') | (None, '\'') => quote = Some(c),
            (None, '>') => return Some(i),
            _ => {}
        }
    }
    None
}

/// Name of the document's root element, or `None` if there is none
///
/// The XML declaration, doctype, comments and processing instructions before
/// the root are skipped. Malformed markup before the root yields `None`.
pub fn root_element_name(xml: &str) -> Option<String> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                return Some(String::from_utf8_lossy(e.name().as_ref()).into_owned());
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
    }
}

/// Children of each `<PubmedArticle>` that the model does not map
///
/// Returns one list per `<PubmedArticle>`, in document order. Every child
/// other than `MedlineCitation` and `PubmedData` is captured with its raw
/// inner content.
pub fn collect_unknown_children(xml: &str) -> Result<Vec<Vec<UnknownElement>>, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut per_article: Vec<Vec<UnknownElement>> = Vec::new();
    let mut depth = 0usize;
    let mut in_article = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                depth += 1;
                if depth == 2 && e.name().as_ref() == b"PubmedArticle" {
                    in_article = true;
                    per_article.push(Vec::new());
                } else if depth == 3 && in_article && !is_mapped_child(e.name().as_ref()) {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    let content = reader.read_text(e.name())?;
                    depth -= 1;
                    if let Some(current) = per_article.last_mut() {
                        current.push(UnknownElement {
                            name,
                            content: content.trim().to_string(),
                        });
                    }
                }
            }
            Event::Empty(e) => {
                if depth == 1 && e.name().as_ref() == b"PubmedArticle" {
                    // Self-closing article still decodes as an article
                    per_article.push(Vec::new());
                } else if depth == 2 && in_article && !is_mapped_child(e.name().as_ref()) {
                    if let Some(current) = per_article.last_mut() {
                        current.push(UnknownElement {
                            name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                            content: String::new(),
                        });
                    }
                }
            }
            Event::End(_) => {
                if depth == 2 {
                    in_article = false;
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(per_article)
}

fn is_mapped_child(name: &[u8]) -> bool {
    name == b"MedlineCitation" || name == b"PubmedData"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_tags_dropped_text_kept() {
        let xml = r#"<AbstractText Label="A">CO<sub>2</sub> and <i>E. coli</i></AbstractText>"#;
        assert_eq!(
            flatten_mixed_content(xml),
            r#"<AbstractText Label="A">CO2 and E. coli</AbstractText>"#
        );
    }

    #[test]
    fn test_inline_tags_with_attributes_and_empty_tags() {
        let xml = r#"<p>See <xref ref-type="bibr" rid="r1">1</xref><break/> and <ext-link xlink:href="a>b">here</ext-link></p>"#;
        assert_eq!(flatten_mixed_content(xml), "<p>See 1 and here</p>");
    }

    #[test]
    fn test_structure_and_comments_left_alone() {
        let xml = "<!-- <i>note</i> --><sec><title>T</title><bibliography/></sec>";
        assert_eq!(flatten_mixed_content(xml), xml);
    }

    #[test]
    fn test_tag_names_not_matched_by_prefix() {
        // "item" and "issue" start with "i" but are not inline tags
        let xml = "<issue>3</issue><item>x</item>";
        assert_eq!(flatten_mixed_content(xml), xml);
    }

    #[test]
    fn test_block_content_inside_paragraph_flattened() {
        let xml = r#"<sec><p>Items: <list list-type="bullet"><list-item><p>one</p></list-item><list-item><p>two</p></list-item></list> end.</p><p>Next</p></sec>"#;
        assert_eq!(
            flatten_mixed_content(xml),
            "<sec><p>Items: onetwo end.</p><p>Next</p></sec>"
        );
    }

    #[test]
    fn test_mathml_inside_abstract_text_flattened() {
        let xml = r#"<AbstractText Label="R">Value <mml:math><mml:mi>x</mml:mi><mml:mo>=</mml:mo><mml:mn>2</mml:mn></mml:math> ok<!-- n --></AbstractText><Keyword>k</Keyword>"#;
        assert_eq!(
            flatten_mixed_content(xml),
            r#"<AbstractText Label="R">Value x=2 ok</AbstractText><Keyword>k</Keyword>"#
        );
    }

    #[test]
    fn test_empty_text_only_element_does_not_open() {
        let xml = "<sec><p/><fig id=\"f1\"><label>F</label></fig></sec>";
        assert_eq!(flatten_mixed_content(xml), xml);
    }

    #[test]
    fn test_cdata_inside_text_only_element_kept() {
        let xml = "<p>a <![CDATA[<b>]]> <inline-formula><tex-math>y</tex-math></inline-formula></p>";
        assert_eq!(flatten_mixed_content(xml), "<p>a <![CDATA[<b>]]> y</p>");
    }

    #[test]
    fn test_root_element_name_skips_prolog() {
        let xml = r#"<?xml version="1.0"?>
<!DOCTYPE article PUBLIC "-//NLM//DTD JATS//EN" "JATS.dtd">
<!-- generated -->
<article article-type="research-article"><front/></article>"#;
        assert_eq!(root_element_name(xml).as_deref(), Some("article"));
        assert_eq!(root_element_name("").as_deref(), None);
        assert_eq!(root_element_name("<Empty/>").as_deref(), Some("Empty"));
    }

    #[test]
    fn test_collect_unknown_children() {
        let xml = r#"<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation><PMID>1</PMID></MedlineCitation>
    <PubmedData/>
    <Extra kind="x">note <b>bold</b></Extra>
    <Flag/>
  </PubmedArticle>
  <PubmedArticle>
    <MedlineCitation><PMID>2</PMID></MedlineCitation>
  </PubmedArticle>
</PubmedArticleSet>"#;
        let found = collect_unknown_children(xml).unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].len(), 2);
        assert_eq!(found[0][0].name, "Extra");
        assert_eq!(found[0][0].content, "note <b>bold</b>");
        assert_eq!(found[0][1].name, "Flag");
        assert!(found[1].is_empty());
    }

    #[test]
    fn test_self_closing_article_keeps_alignment() {
        let xml = r#"<PubmedArticleSet>
  <PubmedArticle/>
  <PubmedArticle>
    <MedlineCitation><PMID>2</PMID></MedlineCitation>
    <Extra>x</Extra>
  </PubmedArticle>
</PubmedArticleSet>"#;
        let found = collect_unknown_children(xml).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found[0].is_empty());
        assert_eq!(found[1].len(), 1);
        assert_eq!(found[1][0].name, "Extra");
    }
}
