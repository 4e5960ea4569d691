pub(crate) mod matches;
pub(crate) mod news;
pub(crate) mod players;
pub(crate) mod teams;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::StoreConfig;
use crate::error::{ClubError, Result};

#[derive(Debug, Clone, Copy)]
pub(crate) enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn as_str(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// List parameters the store understands: one sort field, one optional
/// equality filter, an optional limit. No joins.
#[derive(Debug, Clone)]
pub(crate) struct ListQuery<'a> {
    order_by: &'a str,
    direction: Direction,
    filter: Option<(&'a str, String)>,
    limit: Option<usize>,
}

impl<'a> ListQuery<'a> {
    pub(crate) fn by(order_by: &'a str) -> Self {
        Self {
            order_by,
            direction: Direction::Ascending,
            filter: None,
            limit: None,
        }
    }

    pub(crate) fn descending(mut self) -> Self {
        self.direction = Direction::Descending;
        self
    }

    pub(crate) fn filter(mut self, field: &'a str, value: impl Into<String>) -> Self {
        self.filter = Some((field, value.into()));
        self
    }

    pub(crate) fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("orderBy", self.order_by.to_string()),
            ("direction", self.direction.as_str().to_string()),
        ];
        if let Some((field, value)) = &self.filter {
            pairs.push(("where", format!("{field}=={value}")));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        pairs
    }
}

/// Creation body with both audit stamps attached.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Stamped<'a, T: Serialize> {
    #[serde(flatten)]
    body: &'a T,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a, T: Serialize> Stamped<'a, T> {
    fn new(body: &'a T) -> Self {
        let now = Utc::now();
        Self {
            body,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Update body with a refreshed `updatedAt` stamp.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Touched<'a, T: Serialize> {
    #[serde(flatten)]
    body: &'a T,
    updated_at: DateTime<Utc>,
}

impl<'a, T: Serialize> Touched<'a, T> {
    fn new(body: &'a T) -> Self {
        Self {
            body,
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CreatedDocument {
    id: String,
}

fn authorize(builder: reqwest::RequestBuilder, config: &StoreConfig) -> reqwest::RequestBuilder {
    match config.auth_token() {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

async fn read_body(url: &str, response: reqwest::Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClubError::UnexpectedStatus {
            url: url.to_string(),
            status,
        });
    }
    response.text().await.map_err(|source| ClubError::ResponseBody {
        url: url.to_string(),
        source,
    })
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| ClubError::Decode {
        url: url.to_string(),
        source,
    })
}

pub(crate) async fn get_list<T: DeserializeOwned>(
    client: &reqwest::Client,
    config: &StoreConfig,
    collection: &str,
    query: &ListQuery<'_>,
) -> Result<Vec<T>> {
    let url = config.collection_url(collection);
    let response = authorize(client.get(&url), config)
        .query(&query.to_pairs())
        .send()
        .await
        .map_err(|source| ClubError::Http {
            url: url.clone(),
            source,
        })?;
    let body = read_body(&url, response).await?;
    decode(&url, &body)
}

/// Fetch one document; a missing id is `None`, not an error.
pub(crate) async fn get_document<T: DeserializeOwned>(
    client: &reqwest::Client,
    config: &StoreConfig,
    collection: &str,
    id: &str,
) -> Result<Option<T>> {
    let url = config.document_url(collection, id);
    let response = authorize(client.get(&url), config)
        .send()
        .await
        .map_err(|source| ClubError::Http {
            url: url.clone(),
            source,
        })?;
    if response.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let body = read_body(&url, response).await?;
    decode(&url, &body).map(Some)
}

pub(crate) async fn create_document<B: Serialize>(
    client: &reqwest::Client,
    config: &StoreConfig,
    collection: &str,
    body: &B,
) -> Result<String> {
    let url = config.collection_url(collection);
    let response = authorize(client.post(&url), config)
        .json(&Stamped::new(body))
        .send()
        .await
        .map_err(|source| ClubError::Http {
            url: url.clone(),
            source,
        })?;
    let text = read_body(&url, response).await?;
    let created: CreatedDocument = decode(&url, &text)?;
    Ok(created.id)
}

pub(crate) async fn update_document<B: Serialize>(
    client: &reqwest::Client,
    config: &StoreConfig,
    collection: &str,
    id: &str,
    body: &B,
) -> Result<()> {
    let url = config.document_url(collection, id);
    let response = authorize(client.patch(&url), config)
        .json(&Touched::new(body))
        .send()
        .await
        .map_err(|source| ClubError::Http {
            url: url.clone(),
            source,
        })?;
    read_body(&url, response).await?;
    Ok(())
}

pub(crate) async fn delete_document(
    client: &reqwest::Client,
    config: &StoreConfig,
    collection: &str,
    id: &str,
) -> Result<()> {
    let url = config.document_url(collection, id);
    let response = authorize(client.delete(&url), config)
        .send()
        .await
        .map_err(|source| ClubError::Http {
            url: url.clone(),
            source,
        })?;
    read_body(&url, response).await?;
    Ok(())
}
