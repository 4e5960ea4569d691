use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{TeamDraft, TeamPatch, TeamRecord};
use crate::store::{self, ListQuery};

const COLLECTION: &str = "teams";

#[instrument(skip(client, config))]
pub(crate) async fn list_teams(
    client: &reqwest::Client,
    config: &StoreConfig,
) -> Result<Vec<TeamRecord>> {
    let teams: Vec<TeamRecord> =
        store::get_list(client, config, COLLECTION, &ListQuery::by("name")).await?;
    debug!(count = teams.len(), "fetched team list");
    Ok(teams)
}

#[instrument(skip(client, config, draft))]
pub(crate) async fn create_team(
    client: &reqwest::Client,
    config: &StoreConfig,
    draft: &TeamDraft,
) -> Result<String> {
    let id = store::create_document(client, config, COLLECTION, draft).await?;
    debug!(%id, name = %draft.name, "created team");
    Ok(id)
}

#[instrument(skip(client, config, patch))]
pub(crate) async fn update_team(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
    patch: &TeamPatch,
) -> Result<()> {
    store::update_document(client, config, COLLECTION, id, patch).await
}

#[instrument(skip(client, config))]
pub(crate) async fn delete_team(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
) -> Result<()> {
    store::delete_document(client, config, COLLECTION, id).await
}
