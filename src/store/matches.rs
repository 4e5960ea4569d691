use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{MatchDraft, MatchPatch, MatchRecord};
use crate::store::{self, ListQuery};

const COLLECTION: &str = "matches";

#[instrument(skip(client, config))]
pub(crate) async fn list_matches(
    client: &reqwest::Client,
    config: &StoreConfig,
) -> Result<Vec<MatchRecord>> {
    let matches: Vec<MatchRecord> =
        store::get_list(client, config, COLLECTION, &ListQuery::by("date")).await?;
    debug!(count = matches.len(), "fetched match list");
    Ok(matches)
}

#[instrument(skip(client, config, draft))]
pub(crate) async fn create_match(
    client: &reqwest::Client,
    config: &StoreConfig,
    draft: &MatchDraft,
) -> Result<String> {
    draft.validate()?;
    let id = store::create_document(client, config, COLLECTION, draft).await?;
    debug!(%id, opponent = %draft.opponent, "created match");
    Ok(id)
}

#[instrument(skip(client, config, patch))]
pub(crate) async fn update_match(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
    patch: &MatchPatch,
) -> Result<()> {
    patch.validate()?;
    store::update_document(client, config, COLLECTION, id, patch).await
}

#[instrument(skip(client, config))]
pub(crate) async fn delete_match(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
) -> Result<()> {
    store::delete_document(client, config, COLLECTION, id).await
}
