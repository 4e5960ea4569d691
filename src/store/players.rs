use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{PlayerDraft, PlayerPatch, PlayerRecord};
use crate::store::{self, ListQuery};

const COLLECTION: &str = "players";

#[instrument(skip(client, config))]
pub(crate) async fn list_players(
    client: &reqwest::Client,
    config: &StoreConfig,
) -> Result<Vec<PlayerRecord>> {
    let players: Vec<PlayerRecord> =
        store::get_list(client, config, COLLECTION, &ListQuery::by("name")).await?;
    debug!(count = players.len(), "fetched player list");
    Ok(players)
}

#[instrument(skip(client, config))]
pub(crate) async fn get_player(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
) -> Result<Option<PlayerRecord>> {
    store::get_document(client, config, COLLECTION, id).await
}

/// Resolve a player by login email, the key the identity provider shares
/// with the store.
#[instrument(skip(client, config))]
pub(crate) async fn get_player_by_email(
    client: &reqwest::Client,
    config: &StoreConfig,
    email: &str,
) -> Result<Option<PlayerRecord>> {
    let query = ListQuery::by("name").filter("email", email).limit(1);
    let players: Vec<PlayerRecord> = store::get_list(client, config, COLLECTION, &query).await?;
    Ok(players.into_iter().next())
}

#[instrument(skip(client, config, draft))]
pub(crate) async fn create_player(
    client: &reqwest::Client,
    config: &StoreConfig,
    draft: &PlayerDraft,
) -> Result<String> {
    let id = store::create_document(client, config, COLLECTION, draft).await?;
    debug!(%id, name = %draft.name, "created player");
    Ok(id)
}

#[instrument(skip(client, config, patch))]
pub(crate) async fn update_player(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
    patch: &PlayerPatch,
) -> Result<()> {
    store::update_document(client, config, COLLECTION, id, patch).await
}

#[instrument(skip(client, config))]
pub(crate) async fn delete_player(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
) -> Result<()> {
    store::delete_document(client, config, COLLECTION, id).await
}
