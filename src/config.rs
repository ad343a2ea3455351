pub const GAMES_PATH: &str = "/data/games.json";
pub const AWARDS_PATH: &str = "/data/awards.json";
pub const TAGS_PATH: &str = "/data/tags.json";

pub const GAMES_VIEW_KEY: &str = "mjda.view.games";
pub const AWARDS_VIEW_KEY: &str = "mjda.view.awards";

/// Upper bound on featured games picked for the home carousel.
pub const CAROUSEL_MAX_ITEMS: usize = 12;
pub const CAROUSEL_AUTOPLAY_MS: u32 = 4_500;
pub const CAROUSEL_SWIPE_THRESHOLD: f64 = 40.0;
/// Nomination badges shown on an extended game tile.
pub const TILE_MAX_NOMINATIONS: usize = 4;
