//! Single-file conversion pipeline
//!
//! Read → discriminate → normalize → serialize and validate. The first
//! failing stage short-circuits the rest. Everything here is synchronous and
//! CPU-bound; the batch runner calls it on the blocking thread pool.

use super::discriminator::discriminate;
use super::normalizer::normalize;
use super::serializer::{serialize_and_validate, SchemaSet};
use crate::error::{ConvertError, ItemError, Stage};
use crate::models::{ArticleFamily, ItemState, WorkItem};
use tracing::trace;

/// Convert one input file into its validated JSON output
///
/// Returns the article family on success. The report line is not written
/// here; that is the caller's final stage.
pub fn convert_file(item: &WorkItem, schemas: &SchemaSet) -> Result<ArticleFamily, ItemError> {
    let fail = |stage: Stage, err: ConvertError| ItemError::new(&item.input, &item.output, stage, err);
    let mut state = ItemState::Pending.advance();

    trace!(input = %item.input.display(), ?state, "Reading input");
    let bytes = std::fs::read(&item.input).map_err(|e| fail(Stage::Read, ConvertError::Read(e)))?;
    let mut article = discriminate(&bytes).map_err(|e| fail(Stage::Parse, e))?;

    state = state.advance();
    trace!(input = %item.input.display(), ?state, kind = article.kind(), "Normalizing");
    normalize(&mut article);

    state = state.advance();
    trace!(input = %item.input.display(), ?state, "Serializing");
    serialize_and_validate(&article, &item.output, schemas).map_err(|e| {
        let stage = match e {
            ConvertError::Validation(_) => Stage::Validate,
            _ => Stage::Serialize,
        };
        fail(stage, e)
    })?;

    Ok(article.family())
}
