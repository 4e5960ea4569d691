/// Connection settings for the hosted document store.
///
/// Collections live under `{base_url}/collections/{name}`; an optional bearer
/// token covers the admin write surface.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    base_url: String,
    auth_token: Option<String>,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            auth_token: None,
        }
    }

    /// Attach a bearer token sent with every request.
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub(crate) fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub(crate) fn collection_url(&self, collection: &str) -> String {
        format!("{}/collections/{collection}", self.base_url)
    }

    pub(crate) fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/collections/{collection}/{id}", self.base_url)
    }
}

/// The club's own side of every fixture.
///
/// Matches only name the opponent; the club's display name, home ground and
/// colors come from here, supplied by the caller rather than read from any
/// global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubIdentity {
    pub name: String,
    pub home_address: String,
    pub club_color1: String,
    pub club_color2: String,
    pub kit_icon: Option<String>,
}

impl ClubIdentity {
    pub fn new(name: impl Into<String>, home_address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            home_address: home_address.into(),
            club_color1: String::new(),
            club_color2: String::new(),
            kit_icon: None,
        }
    }

    pub fn with_colors(mut self, color1: impl Into<String>, color2: impl Into<String>) -> Self {
        self.club_color1 = color1.into();
        self.club_color2 = color2.into();
        self
    }

    pub fn with_kit_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.kit_icon = Some(icon_url.into());
        self
    }
}

/// An authenticated visitor, as reported by the external identity provider.
///
/// Only the email is needed here: it is the key linking a login to a player
/// document for the self-service profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub email: String,
}

impl Session {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_trim_trailing_slash() {
        let config = StoreConfig::new("https://store.example.com/v1/");
        assert_eq!(
            config.collection_url("matches"),
            "https://store.example.com/v1/collections/matches"
        );
        assert_eq!(
            config.document_url("matches", "abc123"),
            "https://store.example.com/v1/collections/matches/abc123"
        );
    }
}
