//! Normalization of parsed articles
//!
//! Replaces absent collections with explicit empty ones so that the rendered
//! JSON never contains `null` where a list or record is expected. Missing
//! optional records on the normalized paths are instantiated empty, and the
//! lists beneath them are then filled in turn.
//!
//! Normalization mutates in place, never fails and is idempotent.

use crate::models::pmc::{Acknowledgments, Back, Body, FloatsGroup, PmcArticle, RefList, Section};
use crate::models::pubmed::{BookDocument, PubmedArticle};
use crate::models::ParsedArticle;

/// In-place empty-collection guarantee
pub trait Normalize {
    fn normalize(&mut self);
}

/// Normalize any parsed article
pub fn normalize(article: &mut ParsedArticle) {
    article.normalize();
}

impl Normalize for ParsedArticle {
    fn normalize(&mut self) {
        match self {
            ParsedArticle::GenericArticleSet(set) => {
                set.articles.iter_mut().for_each(Normalize::normalize);
            }
            ParsedArticle::BookArticleSet(set) => {
                set.articles
                    .iter_mut()
                    .for_each(|a| a.book_document.normalize());
            }
            ParsedArticle::FullTextArticle(article) => article.normalize(),
        }
    }
}

impl Normalize for PubmedArticle {
    fn normalize(&mut self) {
        self.medline_citation.keyword_list.get_or_insert_with(Vec::new);
        self.pubmed_data.reference_list.get_or_insert_with(Vec::new);
        self.unknown.get_or_insert_with(Vec::new);
    }
}

impl Normalize for BookDocument {
    fn normalize(&mut self) {
        self.keyword_list.get_or_insert_with(Vec::new);
        self.reference_list.get_or_insert_with(Vec::new);
    }
}

impl Normalize for PmcArticle {
    fn normalize(&mut self) {
        self.floats_group.get_or_insert_with(FloatsGroup::default);
        self.back.get_or_insert_with(Back::default).normalize();
        self.body.get_or_insert_with(Body::default).normalize();

        let meta = &mut self.front.article_meta;
        for contributor in meta
            .contrib_groups
            .iter_mut()
            .flat_map(|group| group.contributors.iter_mut())
        {
            contributor.affiliation.get_or_insert_with(Default::default);
        }
        if let Some(abstract_) = meta.abstract_.as_mut() {
            abstract_.paragraphs.get_or_insert_with(Vec::new);
        }
    }
}

impl Normalize for Back {
    fn normalize(&mut self) {
        self.acknowledgments
            .get_or_insert_with(Acknowledgments::default)
            .paragraphs
            .get_or_insert_with(Vec::new);
        self.ref_list
            .get_or_insert_with(RefList::default)
            .references
            .get_or_insert_with(Vec::new);
    }
}

impl Normalize for Body {
    fn normalize(&mut self) {
        self.sections.iter_mut().for_each(Normalize::normalize);
    }
}

impl Normalize for Section {
    fn normalize(&mut self) {
        self.paragraphs.get_or_insert_with(Vec::new);
        self.sub_sections.iter_mut().for_each(Normalize::normalize);
    }
}
