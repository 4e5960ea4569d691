pub use calendar::{
    build_grouped_view, filter_matches, GroupedCalendar, MatchFilter, MatchViewModel, MonthGroup,
    SideView, SkippedMatch,
};
pub use client::ClubClient;
pub use config::{ClubIdentity, Session, StoreConfig};
pub use error::{ClubError, Result};
pub use locale::Locale;
pub use refresh::{RefreshTicket, ViewState};

pub mod calendar;
pub mod client;
pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod refresh;
pub(crate) mod store;
