use tracing::{debug, instrument};

use crate::config::StoreConfig;
use crate::error::Result;
use crate::model::{NewsDraft, NewsPatch, NewsPost};
use crate::store::{self, ListQuery};

const COLLECTION: &str = "news";

#[instrument(skip(client, config))]
pub(crate) async fn list_news(
    client: &reqwest::Client,
    config: &StoreConfig,
    limit: usize,
) -> Result<Vec<NewsPost>> {
    let query = ListQuery::by("createdAt").descending().limit(limit);
    let posts: Vec<NewsPost> = store::get_list(client, config, COLLECTION, &query).await?;
    debug!(count = posts.len(), limit, "fetched news posts");
    Ok(posts)
}

#[instrument(skip(client, config))]
pub(crate) async fn get_news_post(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
) -> Result<Option<NewsPost>> {
    store::get_document(client, config, COLLECTION, id).await
}

#[instrument(skip(client, config, draft))]
pub(crate) async fn create_news_post(
    client: &reqwest::Client,
    config: &StoreConfig,
    draft: &NewsDraft,
) -> Result<String> {
    let id = store::create_document(client, config, COLLECTION, draft).await?;
    debug!(%id, title = %draft.title, "created news post");
    Ok(id)
}

#[instrument(skip(client, config, patch))]
pub(crate) async fn update_news_post(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
    patch: &NewsPatch,
) -> Result<()> {
    store::update_document(client, config, COLLECTION, id, patch).await
}

#[instrument(skip(client, config))]
pub(crate) async fn delete_news_post(
    client: &reqwest::Client,
    config: &StoreConfig,
    id: &str,
) -> Result<()> {
    store::delete_document(client, config, COLLECTION, id).await
}
