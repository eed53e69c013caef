//! PMC full-text (JATS) article model
//!
//! Covers the subset of the JATS archiving tag set that PMC's Open Access
//! files use for front matter, body sections, back matter and floats.
//! Elements are read by their kebab-case JATS names and serialized under
//! PascalCase names, matching the `pmc` JSON schema.

use super::{last_present, present_list};
use serde::{Deserialize, Serialize};

/// Root `<article>` element
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct PmcArticle {
    #[serde(rename(deserialize = "@article-type", serialize = "ArticleType"))]
    pub article_type: String,
    pub front: Front,
    pub body: Option<Body>,
    pub back: Option<Back>,
    pub floats_group: Option<FloatsGroup>,
}

// ============================================================================
// Front matter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Front {
    pub journal_meta: JournalMeta,
    pub article_meta: ArticleMeta,
}

/// Metadata about the publishing journal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct JournalMeta {
    #[serde(rename(deserialize = "journal-id", serialize = "JournalIds"))]
    pub journal_ids: Vec<TypedValue>,
    pub journal_title_group: JournalTitleGroup,
    #[serde(rename(deserialize = "issn", serialize = "ISSN"))]
    pub issn: Vec<TypedValue>,
    pub publisher: Publisher,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct JournalTitleGroup {
    pub journal_title: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Publisher {
    pub publisher_name: String,
    pub publisher_loc: String,
}

/// Text element qualified by a type attribute
///
/// JATS spells the qualifier differently per element (`journal-id-type`,
/// `pub-id-type`, `pub-type`); all of them land in `kind`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypedValue {
    #[serde(
        rename(serialize = "Type"),
        alias = "@journal-id-type",
        alias = "@pub-id-type",
        alias = "@pub-type"
    )]
    pub kind: String,
    #[serde(rename(deserialize = "$text", serialize = "Value"))]
    pub value: String,
}

/// Metadata describing the article itself
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct ArticleMeta {
    #[serde(rename(deserialize = "article-id", serialize = "ArticleIds"))]
    pub article_ids: Vec<TypedValue>,
    pub article_categories: ArticleCategories,
    pub title_group: TitleGroup,
    #[serde(rename(deserialize = "contrib-group", serialize = "ContribGroups"))]
    pub contrib_groups: Vec<ContribGroup>,
    #[serde(rename(deserialize = "aff", serialize = "Affiliations"))]
    pub affiliations: Vec<Affiliation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_notes: Option<AuthorNotes>,
    #[serde(rename(deserialize = "pub-date", serialize = "PubDates"))]
    pub pub_dates: Vec<Date>,
    pub volume: String,
    pub issue: String,
    pub fpage: String,
    pub lpage: String,
    pub history: History,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Permissions>,
    #[serde(
        rename(deserialize = "abstract", serialize = "Abstract"),
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_: Option<Abstract>,
    #[serde(rename(deserialize = "kwd-group", serialize = "KeywordGroups"))]
    pub keyword_groups: Vec<KeywordGroup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_meta_group: Option<CustomMetaGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct ArticleCategories {
    #[serde(rename(deserialize = "subj-group", serialize = "SubjectGroups"))]
    pub subject_groups: Vec<SubjectGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct SubjectGroup {
    #[serde(rename(deserialize = "@subj-group-type", serialize = "Type"))]
    pub kind: String,
    #[serde(rename(deserialize = "subject", serialize = "Subjects"))]
    pub subjects: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct TitleGroup {
    pub article_title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct ContribGroup {
    #[serde(rename(deserialize = "contrib", serialize = "Contributors"))]
    pub contributors: Vec<Contributor>,
    #[serde(rename(deserialize = "aff", serialize = "Affiliations"))]
    pub affiliations: Vec<Affiliation>,
}

/// Author, editor or other contributor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Contributor {
    #[serde(rename(deserialize = "@contrib-type", serialize = "ContribType"))]
    pub contrib_type: String,
    #[serde(rename(deserialize = "@corresp", serialize = "Corresp"))]
    pub corresp: String,
    pub name: Name,
    pub collab: String,
    pub degrees: String,
    /// Last `<aff>` when a contributor lists several
    #[serde(rename(deserialize = "aff", serialize = "Affiliation"), deserialize_with = "last_present")]
    pub affiliation: Option<Affiliation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Name {
    pub surname: String,
    pub given_names: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Affiliation {
    #[serde(rename(deserialize = "@id", serialize = "Id"))]
    pub id: String,
    pub label: String,
    #[serde(rename(deserialize = "$text", serialize = "Text"))]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct AuthorNotes {
    #[serde(rename(deserialize = "corresp", serialize = "Correspondence"))]
    pub correspondence: Vec<Correspondence>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Correspondence {
    #[serde(rename(deserialize = "@id", serialize = "Id"))]
    pub id: String,
    pub email: Vec<String>,
}

/// Publication or history date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Date {
    #[serde(
        rename(serialize = "Type"),
        alias = "@pub-type",
        alias = "@date-type"
    )]
    pub kind: String,
    pub year: String,
    pub month: String,
    pub day: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct History {
    #[serde(rename(deserialize = "date", serialize = "Dates"))]
    pub dates: Vec<Date>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Permissions {
    pub copyright_statement: String,
    pub copyright_year: String,
}

/// Article abstract; structured abstracts carry titled sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Abstract {
    pub title: String,
    #[serde(rename(deserialize = "p", serialize = "Paragraphs"), deserialize_with = "present_list")]
    pub paragraphs: Option<Vec<String>>,
    #[serde(rename(deserialize = "sec", serialize = "Sections"))]
    pub sections: Vec<AbstractSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct AbstractSection {
    pub title: String,
    #[serde(rename(deserialize = "p", serialize = "Paragraphs"))]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct KeywordGroup {
    #[serde(rename(deserialize = "@kwd-group-type", serialize = "Type"))]
    pub kind: String,
    #[serde(rename(deserialize = "kwd", serialize = "Keywords"))]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct CustomMetaGroup {
    #[serde(rename(deserialize = "custom-meta", serialize = "CustomMeta"))]
    pub custom_meta: Vec<CustomMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct CustomMeta {
    pub meta_name: String,
    pub meta_value: String,
}

// ============================================================================
// Body
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Body {
    #[serde(rename(deserialize = "p", serialize = "Paragraphs"))]
    pub paragraphs: Vec<String>,
    #[serde(rename(deserialize = "sec", serialize = "Sections"))]
    pub sections: Vec<Section>,
}

/// Body section; sections nest arbitrarily deep
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Section {
    #[serde(rename(deserialize = "@id", serialize = "Id"))]
    pub id: String,
    #[serde(rename(deserialize = "@sec-type", serialize = "SecType"))]
    pub sec_type: String,
    pub title: String,
    #[serde(rename(deserialize = "p", serialize = "Paragraphs"), deserialize_with = "present_list")]
    pub paragraphs: Option<Vec<String>>,
    #[serde(rename(deserialize = "sec", serialize = "SubSections"))]
    pub sub_sections: Vec<Section>,
    #[serde(rename(deserialize = "fig", serialize = "Figures"))]
    pub figures: Vec<Figure>,
    #[serde(rename(deserialize = "table-wrap", serialize = "Tables"))]
    pub tables: Vec<TableWrap>,
}

// ============================================================================
// Floats
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct FloatsGroup {
    #[serde(rename(deserialize = "fig", serialize = "Figures"))]
    pub figures: Vec<Figure>,
    #[serde(rename(deserialize = "table-wrap", serialize = "Tables"))]
    pub tables: Vec<TableWrap>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Figure {
    #[serde(rename(deserialize = "@id", serialize = "Id"))]
    pub id: String,
    pub label: String,
    pub caption: Caption,
    pub graphic: Graphic,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct TableWrap {
    #[serde(rename(deserialize = "@id", serialize = "Id"))]
    pub id: String,
    pub label: String,
    pub caption: Caption,
    pub graphic: Graphic,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Caption {
    pub title: String,
    #[serde(rename(deserialize = "p", serialize = "Paragraphs"))]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Graphic {
    #[serde(rename(deserialize = "@xlink:href", serialize = "Href"))]
    pub href: String,
}

// ============================================================================
// Back matter
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Back {
    #[serde(rename(deserialize = "ack", serialize = "Acknowledgments"))]
    pub acknowledgments: Option<Acknowledgments>,
    pub ref_list: Option<RefList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fn_group: Option<FootnoteGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Acknowledgments {
    pub title: String,
    #[serde(rename(deserialize = "p", serialize = "Paragraphs"), deserialize_with = "present_list")]
    pub paragraphs: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct RefList {
    pub title: String,
    #[serde(rename(deserialize = "ref", serialize = "References"), deserialize_with = "present_list")]
    pub references: Option<Vec<Reference>>,
}

/// One bibliography entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Reference {
    #[serde(rename(deserialize = "@id", serialize = "Id"))]
    pub id: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_citation: Option<Citation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed_citation: Option<Citation>,
}

/// Structured (`element-citation`) or mixed (`mixed-citation`) citation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Citation {
    #[serde(rename(deserialize = "@publication-type", serialize = "PublicationType"))]
    pub publication_type: String,
    #[serde(rename(deserialize = "person-group", serialize = "PersonGroups"))]
    pub person_groups: Vec<PersonGroup>,
    pub article_title: String,
    pub source: String,
    pub year: String,
    pub volume: String,
    pub fpage: String,
    pub lpage: String,
    #[serde(rename(deserialize = "pub-id", serialize = "PubIds"))]
    pub pub_ids: Vec<TypedValue>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct PersonGroup {
    #[serde(rename(deserialize = "@person-group-type", serialize = "Type"))]
    pub kind: String,
    #[serde(rename(deserialize = "name", serialize = "Names"))]
    pub names: Vec<Name>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct FootnoteGroup {
    #[serde(rename(deserialize = "fn", serialize = "Footnotes"))]
    pub footnotes: Vec<Footnote>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all(deserialize = "kebab-case", serialize = "PascalCase"))]
pub struct Footnote {
    #[serde(rename(deserialize = "@fn-type", serialize = "Type"))]
    pub kind: String,
    #[serde(rename(deserialize = "p", serialize = "Paragraphs"))]
    pub paragraphs: Vec<String>,
}
