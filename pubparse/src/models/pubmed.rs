//! PubMed citation models
//!
//! Mirrors the NLM PubMed DTD for the two citation dialects:
//! - `<PubmedArticleSet>` of `<PubmedArticle>` (journal citations)
//! - `<PubmedBookArticleSet>` of `<PubmedBookArticle>` (book chapters/documents)
//!
//! Field names serialize to the same PascalCase names used by the XML, which
//! is what the `pubmed` JSON schema expects. Attributes are read from `@Name`
//! keys and element text from `$text`; both serialize under plain names.
//!
//! Lists that the normalizer guarantees are `Option<Vec<T>>` so that a missing
//! wrapper element stays distinguishable from an empty one until normalization.
//! Every other list is a plain `Vec<T>`, which is empty when absent.

use serde::{Deserialize, Serialize};

wrapped_list!(optional keyword_list, Keyword, "Keyword");
wrapped_list!(optional reference_list, Reference, "Reference");
wrapped_list!(chemical_list, Chemical, "Chemical");
wrapped_list!(suppl_mesh_list, SupplMeshName, "SupplMeshName");
wrapped_list!(gene_symbol_list, String, "GeneSymbol");
wrapped_list!(mesh_heading_list, MeshHeading, "MeshHeading");
wrapped_list!(author_list, Author, "Author");
wrapped_list!(grant_list, Grant, "Grant");
wrapped_list!(publication_type_list, PublicationType, "PublicationType");
wrapped_list!(article_id_list, ArticleId, "ArticleId");
wrapped_list!(history, PubDate, "PubMedPubDate");
wrapped_list!(object_list, Object, "Object");

// ============================================================================
// Article sets
// ============================================================================

/// Root of a regular PubMed XML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PubmedArticleSet {
    #[serde(rename(deserialize = "PubmedArticle", serialize = "PubmedArticles"))]
    pub articles: Vec<PubmedArticle>,
}

/// One journal citation with its PubMed processing metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PubmedArticle {
    pub medline_citation: MedlineCitation,
    pub pubmed_data: PubmedData,
    /// Children of `<PubmedArticle>` with no mapping in this model.
    /// Filled by the discriminator's element scan, not by serde.
    #[serde(skip_deserializing)]
    pub unknown: Option<Vec<UnknownElement>>,
}

/// Root of a PubMed Book XML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PubmedBookArticleSet {
    #[serde(rename(deserialize = "PubmedBookArticle", serialize = "PubmedBookArticles"))]
    pub articles: Vec<PubmedBookArticle>,
}

/// One book chapter or book-level document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PubmedBookArticle {
    pub book_document: BookDocument,
    pub pubmed_book_data: PubmedBookData,
}

/// Captured XML element that the model does not map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct UnknownElement {
    pub name: String,
    pub content: String,
}

// ============================================================================
// Journal citation
// ============================================================================

/// Main bibliographic content of a journal citation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MedlineCitation {
    #[serde(rename(deserialize = "@Owner", serialize = "Owner"))]
    pub owner: String,
    #[serde(rename(deserialize = "@Status", serialize = "Status"))]
    pub status: String,
    #[serde(rename(deserialize = "@IndexingMethod", serialize = "IndexingMethod"))]
    pub indexing_method: String,
    #[serde(rename = "PMID")]
    pub pmid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_completed: Option<PubDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_revised: Option<PubDate>,
    pub article: Article,
    pub medline_journal_info: MedlineJournalInfo,
    #[serde(deserialize_with = "chemical_list")]
    pub chemical_list: Vec<Chemical>,
    #[serde(deserialize_with = "suppl_mesh_list")]
    pub suppl_mesh_list: Vec<SupplMeshName>,
    pub citation_subset: Vec<String>,
    #[serde(deserialize_with = "gene_symbol_list")]
    pub gene_symbol_list: Vec<String>,
    #[serde(deserialize_with = "mesh_heading_list")]
    pub mesh_heading_list: Vec<MeshHeading>,
    pub number_of_references: String,
    #[serde(rename = "OtherID")]
    pub other_id: Vec<OtherId>,
    pub other_abstract: Vec<Abstract>,
    #[serde(deserialize_with = "keyword_list")]
    pub keyword_list: Option<Vec<Keyword>>,
    pub coi_statement: String,
}

/// Core article metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Article {
    #[serde(rename(deserialize = "@PubModel", serialize = "PubModel"))]
    pub pub_model: String,
    pub journal: Journal,
    pub article_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(rename = "ELocationID")]
    pub elocation_id: Vec<ELocationId>,
    #[serde(rename = "Abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<Abstract>,
    #[serde(deserialize_with = "author_list")]
    pub author_list: Vec<Author>,
    pub language: Vec<String>,
    #[serde(deserialize_with = "grant_list")]
    pub grant_list: Vec<Grant>,
    #[serde(deserialize_with = "publication_type_list")]
    pub publication_type_list: Vec<PublicationType>,
    pub article_date: Vec<PubDate>,
}

/// Journal the article appeared in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Journal {
    #[serde(rename = "ISSN", skip_serializing_if = "Option::is_none")]
    pub issn: Option<Issn>,
    pub journal_issue: JournalIssue,
    pub title: String,
    #[serde(rename = "ISOAbbreviation")]
    pub iso_abbreviation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issn {
    #[serde(rename(deserialize = "@IssnType", serialize = "IssnType"))]
    pub issn_type: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct JournalIssue {
    #[serde(rename(deserialize = "@CitedMedium", serialize = "CitedMedium"))]
    pub cited_medium: String,
    pub volume: String,
    pub issue: String,
    pub pub_date: PubDate,
}

/// NLM catalog data for the journal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MedlineJournalInfo {
    pub country: String,
    #[serde(rename = "MedlineTA")]
    pub medline_ta: String,
    #[serde(rename = "NlmUniqueID")]
    pub nlm_unique_id: String,
    #[serde(rename = "ISSNLinking")]
    pub issn_linking: String,
}

/// Date in any PubMed date element (`PubDate`, `PubMedPubDate`, `ArticleDate`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PubDate {
    #[serde(rename(deserialize = "@PubStatus", serialize = "PubStatus"))]
    pub pub_status: String,
    #[serde(rename(deserialize = "@DateType", serialize = "DateType"))]
    pub date_type: String,
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minute: String,
    pub season: String,
    pub medline_date: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Pagination {
    pub start_page: String,
    pub end_page: String,
    pub medline_pgn: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ELocationId {
    #[serde(rename(deserialize = "@EIdType", serialize = "EIdType"))]
    pub eid_type: String,
    #[serde(rename(deserialize = "@ValidYN", serialize = "ValidYN"))]
    pub valid_yn: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

/// Abstract; structured abstracts carry one `AbstractText` per labelled part
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Abstract {
    pub abstract_text: Vec<AbstractText>,
    pub copyright_information: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AbstractText {
    #[serde(rename(deserialize = "@Label", serialize = "Label"))]
    pub label: String,
    #[serde(rename(deserialize = "@NlmCategory", serialize = "NlmCategory"))]
    pub nlm_category: String,
    #[serde(rename(deserialize = "$text", serialize = "Text"))]
    pub text: String,
}

/// Contributor metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Author {
    #[serde(rename(deserialize = "@ValidYN", serialize = "ValidYN"))]
    pub valid_yn: String,
    pub last_name: String,
    pub fore_name: String,
    pub initials: String,
    pub suffix: String,
    pub collective_name: String,
    pub identifier: Vec<Identifier>,
    pub affiliation_info: Vec<AffiliationInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct AffiliationInfo {
    pub affiliation: String,
    pub identifier: Vec<Identifier>,
}

/// Identifier such as an ORCID or ROR id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Identifier {
    #[serde(rename(deserialize = "@Source", serialize = "Source"))]
    pub source: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

/// Funding entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Grant {
    #[serde(rename = "GrantID")]
    pub grant_id: String,
    pub acronym: String,
    pub agency: String,
    pub country: String,
}

/// Article type (e.g., "Review")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicationType {
    #[serde(rename(deserialize = "@UI", serialize = "UI"))]
    pub ui: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Chemical {
    pub registry_number: String,
    pub name_of_substance: MeshTerm,
}

/// Controlled-vocabulary term with its unique identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshTerm {
    #[serde(rename(deserialize = "@UI", serialize = "UI"))]
    pub ui: String,
    #[serde(rename(deserialize = "@MajorTopicYN", serialize = "MajorTopicYN"))]
    pub major_topic_yn: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct MeshHeading {
    pub descriptor_name: MeshTerm,
    pub qualifier_name: Vec<MeshTerm>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplMeshName {
    #[serde(rename(deserialize = "@Type", serialize = "Type"))]
    pub kind: String,
    #[serde(rename(deserialize = "@UI", serialize = "UI"))]
    pub ui: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OtherId {
    #[serde(rename(deserialize = "@Source", serialize = "Source"))]
    pub source: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

/// Keyword term
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    #[serde(rename(deserialize = "@MajorTopicYN", serialize = "MajorTopicYN"))]
    pub major_topic_yn: String,
    #[serde(rename(deserialize = "$text", serialize = "Text"))]
    pub text: String,
}

/// PubMed processing history, identifiers and references
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PubmedData {
    #[serde(deserialize_with = "history")]
    pub history: Vec<PubDate>,
    pub publication_status: String,
    #[serde(deserialize_with = "article_id_list")]
    pub article_id_list: Vec<ArticleId>,
    #[serde(deserialize_with = "reference_list")]
    pub reference_list: Option<Vec<Reference>>,
}

/// One identifier (DOI, PMID, PMC, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleId {
    #[serde(rename(deserialize = "@IdType", serialize = "IdType"))]
    pub id_type: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

/// Cited publication
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Reference {
    pub citation: String,
    #[serde(deserialize_with = "article_id_list")]
    pub article_id_list: Vec<ArticleId>,
}

// ============================================================================
// Book citation
// ============================================================================

/// Metadata about a book or book section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BookDocument {
    #[serde(rename = "PMID")]
    pub pmid: String,
    #[serde(deserialize_with = "article_id_list")]
    pub article_id_list: Vec<ArticleId>,
    pub book: Book,
    pub location_label: Vec<LocationLabel>,
    pub article_title: String,
    pub language: Vec<String>,
    #[serde(deserialize_with = "author_list")]
    pub author_list: Vec<Author>,
    pub publication_type: Vec<PublicationType>,
    #[serde(rename = "Abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_: Option<Abstract>,
    #[serde(deserialize_with = "keyword_list")]
    pub keyword_list: Option<Vec<Keyword>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contribution_date: Option<PubDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_revised: Option<PubDate>,
    #[serde(deserialize_with = "grant_list")]
    pub grant_list: Vec<Grant>,
    pub item_list: Vec<ItemList>,
    #[serde(deserialize_with = "reference_list")]
    pub reference_list: Option<Vec<Reference>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Book {
    pub publisher: Publisher,
    pub book_title: String,
    pub pub_date: PubDate,
    #[serde(deserialize_with = "author_list")]
    pub author_list: Vec<Author>,
    pub medium: String,
    #[serde(rename = "Isbn")]
    pub isbn: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Publisher {
    pub publisher_name: String,
    pub publisher_location: String,
}

/// Structural location within the book (e.g., "Chapter 2")
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationLabel {
    #[serde(rename(deserialize = "@Type", serialize = "Type"))]
    pub kind: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

/// Named list of items
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ItemList {
    #[serde(rename(deserialize = "@ListType", serialize = "ListType"))]
    pub list_type: String,
    pub item: Vec<String>,
}

/// PubMed processing metadata for a book document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PubmedBookData {
    #[serde(deserialize_with = "history")]
    pub history: Vec<PubDate>,
    pub publication_status: String,
    #[serde(deserialize_with = "article_id_list")]
    pub article_id_list: Vec<ArticleId>,
    #[serde(deserialize_with = "object_list")]
    pub object_list: Vec<Object>,
}

/// Supplementary object reference
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Object {
    #[serde(rename(deserialize = "@Type", serialize = "Type"))]
    pub kind: String,
    pub param: Vec<ObjectParam>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectParam {
    #[serde(rename(deserialize = "@Name", serialize = "Name"))]
    pub name: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

impl PubmedArticleSet {
    /// Number of `<PubmedArticle>` elements decoded
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl PubmedBookArticleSet {
    /// Number of `<PubmedBookArticle>` elements decoded
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
