use std::str::FromStr;

use gooma_club::{ClubClient, ClubIdentity, Locale, StoreConfig};

#[tokio::main]
async fn main() {
    let base_url =
        std::env::var("CLUB_STORE_URL").unwrap_or_else(|_| "http://localhost:8080/v1".to_string());
    let locale = std::env::var("CLUB_LANG")
        .ok()
        .and_then(|code| Locale::from_str(&code).ok())
        .unwrap_or_default();

    let mut config = StoreConfig::new(base_url);
    if let Ok(token) = std::env::var("CLUB_STORE_TOKEN") {
        config = config.with_auth_token(token);
    }
    let club = ClubIdentity::new("GOOMA UNITED", "Gemeentelijk Sportpark, Gooma")
        .with_colors("#DC2626", "#000000");
    let client = ClubClient::new(config, club);

    let calendar = client.fetch_calendar(locale).await.unwrap();
    for group in &calendar.groups {
        println!("== {}", group.label);
        for fixture in &group.matches {
            let score = fixture
                .score_line()
                .unwrap_or_else(|| fixture.display_time.clone());
            println!(
                "  {}  {} - {}  [{}]  @ {}",
                fixture.display_date,
                fixture.home_side.name,
                fixture.away_side.name,
                score,
                fixture.resolved_venue
            );
        }
    }
    for skipped in &calendar.warnings {
        eprintln!(
            "skipped match {} with unparseable date {:?}",
            skipped.id, skipped.raw_date
        );
    }
}
