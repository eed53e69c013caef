//! Format discrimination
//!
//! PubMed, PubMed Book and JATS documents are all well-formed XML and decode
//! leniently into each other's models (unknown elements are skipped), so the
//! decoder alone cannot tell them apart. Each known shape pairs a decoder with
//! an acceptance check; shapes are tried in order and the first accepted
//! decoding wins.

use crate::error::ConvertError;
use crate::models::pmc::PmcArticle;
use crate::models::pubmed::{PubmedArticleSet, PubmedBookArticleSet};
use crate::models::ParsedArticle;
use crate::xml::{collect_unknown_children, flatten_mixed_content, root_element_name};
use tracing::debug;

/// Prepared document text handed to each shape
struct Document<'a> {
    text: &'a str,
    root: Option<String>,
}

/// One candidate document shape
struct Shape {
    name: &'static str,
    decode: fn(&Document<'_>) -> Result<ParsedArticle, String>,
    accept: fn(&ParsedArticle, &Document<'_>) -> Result<(), String>,
}

/// Candidate shapes in trial order
const SHAPES: [Shape; 3] = [
    Shape {
        name: "GenericArticleSet",
        decode: decode_generic,
        accept: accept_generic,
    },
    Shape {
        name: "BookArticleSet",
        decode: decode_book,
        accept: accept_book,
    },
    Shape {
        name: "FullTextArticle",
        decode: decode_full_text,
        accept: accept_full_text,
    },
];

/// Decode a raw document into the first shape that accepts it
///
/// Fails with [`ConvertError::Unrecognized`] listing each shape's rejection
/// reason when no shape accepts. Non-UTF-8 input is rejected the same way.
pub fn discriminate(bytes: &[u8]) -> Result<ParsedArticle, ConvertError> {
    let raw = std::str::from_utf8(bytes)
        .map_err(|e| ConvertError::Unrecognized(vec![format!("input is not valid UTF-8: {}", e)]))?;
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let text = flatten_mixed_content(raw);
    let doc = Document {
        root: root_element_name(&text),
        text: &text,
    };

    let mut reasons = Vec::with_capacity(SHAPES.len());
    for shape in &SHAPES {
        let verdict = (shape.decode)(&doc).and_then(|parsed| {
            (shape.accept)(&parsed, &doc)?;
            Ok(parsed)
        });
        match verdict {
            Ok(parsed) => {
                debug!(shape = shape.name, "Document shape accepted");
                return Ok(parsed);
            }
            Err(reason) => {
                debug!(shape = shape.name, reason = %reason, "Document shape rejected");
                reasons.push(format!("{}: {}", shape.name, reason));
            }
        }
    }

    Err(ConvertError::Unrecognized(reasons))
}

fn decode_generic(doc: &Document<'_>) -> Result<ParsedArticle, String> {
    let mut set: PubmedArticleSet = quick_xml::de::from_str(doc.text).map_err(|e| e.to_string())?;

    if !set.is_empty() {
        let unknown = collect_unknown_children(doc.text).map_err(|e| e.to_string())?;
        for (article, extra) in set.articles.iter_mut().zip(unknown) {
            if !extra.is_empty() {
                article.unknown = Some(extra);
            }
        }
    }

    Ok(ParsedArticle::GenericArticleSet(set))
}

fn accept_generic(parsed: &ParsedArticle, _doc: &Document<'_>) -> Result<(), String> {
    match parsed {
        ParsedArticle::GenericArticleSet(set) if !set.is_empty() => Ok(()),
        _ => Err("no PubmedArticle element found".to_string()),
    }
}

fn decode_book(doc: &Document<'_>) -> Result<ParsedArticle, String> {
    let set: PubmedBookArticleSet = quick_xml::de::from_str(doc.text).map_err(|e| e.to_string())?;
    Ok(ParsedArticle::BookArticleSet(set))
}

fn accept_book(parsed: &ParsedArticle, _doc: &Document<'_>) -> Result<(), String> {
    match parsed {
        ParsedArticle::BookArticleSet(set) if !set.is_empty() => Ok(()),
        _ => Err("no PubmedBookArticle element found".to_string()),
    }
}

fn decode_full_text(doc: &Document<'_>) -> Result<ParsedArticle, String> {
    let article: PmcArticle = quick_xml::de::from_str(doc.text).map_err(|e| e.to_string())?;
    Ok(ParsedArticle::FullTextArticle(Box::new(article)))
}

fn accept_full_text(_parsed: &ParsedArticle, doc: &Document<'_>) -> Result<(), String> {
    match doc.root.as_deref() {
        Some("article") => Ok(()),
        Some(other) => Err(format!("root element is <{}>, expected <article>", other)),
        None => Err("document has no root element".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_utf8_is_unrecognized() {
        let err = discriminate(&[0x3c, 0xff, 0xfe, 0x3e]).unwrap_err();
        match err {
            ConvertError::Unrecognized(reasons) => {
                assert_eq!(reasons.len(), 1);
                assert!(reasons[0].contains("UTF-8"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_every_shape_reports_a_reason() {
        let err = discriminate(b"<catalog><entry/></catalog>").unwrap_err();
        match err {
            ConvertError::Unrecognized(reasons) => {
                assert_eq!(reasons.len(), 3);
                assert!(reasons[0].starts_with("GenericArticleSet"));
                assert!(reasons[1].starts_with("BookArticleSet"));
                assert!(reasons[2].contains("<catalog>"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let mut bytes = "\u{feff}".as_bytes().to_vec();
        bytes.extend_from_slice(b"<article><front/></article>");
        let parsed = discriminate(&bytes).unwrap();
        assert_eq!(parsed.kind(), "FullTextArticle");
    }
}
