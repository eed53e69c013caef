//! Data models for pubparse
//!
//! - `pubmed`: PubMed citation dialects (article set and book article set)
//! - `pmc`: JATS full-text article as distributed by PMC
//! - `article`: the tagged union produced by format discrimination
//! - `conversion`: per-item and per-batch outcome records

/// Generates a `deserialize_with` function for wrapper elements.
///
/// PubMed nests repeated children inside a wrapper
/// (`<KeywordList><Keyword/>...</KeywordList>`). The generated function reads
/// the wrapper and yields its children directly so the JSON output is a plain
/// array. A wrapper that occurs more than once (one `KeywordList` per owner)
/// is read as a sequence and the children are concatenated. The `optional`
/// form yields `Option<Vec<T>>`, keeping "wrapper absent" distinguishable from
/// "wrapper empty" until normalization.
macro_rules! wrapped_list {
    (optional $name:ident, $item:ty, $tag:literal) => {
        fn $name<'de, D>(deserializer: D) -> Result<Option<Vec<$item>>, D::Error>
        where
            D: ::serde::Deserializer<'de>,
        {
            #[derive(::serde::Deserialize)]
            struct Wrapper {
                #[serde(rename = $tag, default)]
                items: Vec<$item>,
            }
            <Vec<Wrapper> as ::serde::Deserialize>::deserialize(deserializer)
                .map(|wrappers| Some(wrappers.into_iter().flat_map(|w| w.items).collect()))
        }
    };
    ($name:ident, $item:ty, $tag:literal) => {
        fn $name<'de, D>(deserializer: D) -> Result<Vec<$item>, D::Error>
        where
            D: ::serde::Deserializer<'de>,
        {
            #[derive(::serde::Deserialize)]
            struct Wrapper {
                #[serde(rename = $tag, default)]
                items: Vec<$item>,
            }
            <Vec<Wrapper> as ::serde::Deserialize>::deserialize(deserializer)
                .map(|wrappers| wrappers.into_iter().flat_map(|w| w.items).collect())
        }
    };
}

/// Reads a repeated element into `Some(list)`.
///
/// Paired with container-level `#[serde(default)]`: a field whose element never
/// appears stays `None`, one that appears at least once becomes `Some`.
pub(crate) fn present_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(Some)
}

/// Reads an element that may repeat into the last occurrence.
///
/// Paired with container-level `#[serde(default)]` like [`present_list`]; a
/// field whose element never appears stays `None`.
pub(crate) fn last_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::Deserialize<'de>,
{
    <Vec<T> as serde::Deserialize>::deserialize(deserializer).map(|items| items.into_iter().last())
}

pub mod article;
pub mod conversion;
pub mod pmc;
pub mod pubmed;

pub use article::{ArticleFamily, ParsedArticle};
pub use conversion::{BatchState, BatchSummary, ConversionResult, ItemState, WorkItem};
