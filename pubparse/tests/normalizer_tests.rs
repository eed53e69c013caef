//! Normalization of decoded documents

mod helpers;

use helpers::*;
use pubparse::models::ParsedArticle;
use pubparse::services::{discriminate, normalize};

fn normalized(xml: &str) -> ParsedArticle {
    let mut parsed = discriminate(xml.as_bytes()).unwrap();
    normalize(&mut parsed);
    parsed
}

#[test]
fn test_rendered_documents_contain_no_nulls() {
    for xml in [PUBMED_WITH_KEYWORDS, PUBMED_WITH_UNKNOWN, PUBMED_BOOK, PMC_NO_BACK] {
        let value = serde_json::to_value(normalized(xml)).unwrap();
        assert_eq!(null_paths(&value), Vec::<String>::new());
    }
}

#[test]
fn test_missing_references_become_empty_list() {
    let ParsedArticle::GenericArticleSet(set) = normalized(PUBMED_WITH_KEYWORDS) else {
        panic!("wrong variant");
    };
    let article = &set.articles[0];
    assert_eq!(article.pubmed_data.reference_list, Some(vec![]));
    assert_eq!(article.unknown, Some(vec![]));
    assert_eq!(
        article.medline_citation.keyword_list.as_ref().map(Vec::len),
        Some(2)
    );
}

#[test]
fn test_each_article_normalized_independently() {
    let ParsedArticle::GenericArticleSet(set) = normalized(PUBMED_WITH_UNKNOWN) else {
        panic!("wrong variant");
    };
    assert_eq!(
        set.articles[0].pubmed_data.reference_list.as_ref().map(Vec::len),
        Some(1)
    );
    assert_eq!(set.articles[0].unknown.as_ref().map(Vec::len), Some(1));

    assert_eq!(set.articles[1].medline_citation.keyword_list, Some(vec![]));
    assert_eq!(set.articles[1].pubmed_data.reference_list, Some(vec![]));
    assert_eq!(set.articles[1].unknown, Some(vec![]));
}

#[test]
fn test_full_text_back_matter_instantiated() {
    let ParsedArticle::FullTextArticle(article) = normalized(PMC_NO_BACK) else {
        panic!("wrong variant");
    };

    let back = article.back.as_ref().unwrap();
    assert_eq!(back.acknowledgments.as_ref().unwrap().paragraphs, Some(vec![]));
    assert_eq!(back.ref_list.as_ref().unwrap().references, Some(vec![]));

    let floats = article.floats_group.as_ref().unwrap();
    assert!(floats.figures.is_empty());
    assert!(floats.tables.is_empty());

    let contributors = &article.front.article_meta.contrib_groups[0].contributors;
    assert!(contributors.iter().all(|c| c.affiliation.is_some()));
    assert_eq!(contributors[0].affiliation.as_ref().unwrap().text, "");

    let abstract_ = article.front.article_meta.abstract_.as_ref().unwrap();
    assert_eq!(abstract_.paragraphs, Some(vec![]));
    assert_eq!(abstract_.sections.len(), 1);

    let section = &article.body.as_ref().unwrap().sections[0];
    assert_eq!(section.paragraphs.as_ref().map(Vec::len), Some(2));
    assert_eq!(section.sub_sections[0].paragraphs, Some(vec![]));
}

#[test]
fn test_rendered_keys_after_normalization() {
    let value = serde_json::to_value(normalized(PMC_NO_BACK)).unwrap();
    assert_eq!(value["Back"]["RefList"]["References"], serde_json::json!([]));
    assert_eq!(value["FloatsGroup"]["Figures"], serde_json::json!([]));
    assert_eq!(
        value["Body"]["Sections"][0]["SubSections"][0]["Paragraphs"],
        serde_json::json!([])
    );

    let value = serde_json::to_value(normalized(PUBMED_WITH_KEYWORDS)).unwrap();
    let article = &value["PubmedArticles"][0];
    assert_eq!(article["PubmedData"]["ReferenceList"], serde_json::json!([]));
    assert_eq!(
        article["MedlineCitation"]["KeywordList"][0]["Text"],
        "metagenomics"
    );
}

#[test]
fn test_normalizing_twice_changes_nothing() {
    for xml in [PUBMED_WITH_UNKNOWN, PUBMED_BOOK, PMC_NO_BACK] {
        let once = normalized(xml);
        let mut twice = once.clone();
        normalize(&mut twice);
        assert_eq!(once, twice);
    }
}
