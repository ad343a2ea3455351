use crate::config::{CAROUSEL_MAX_ITEMS, CAROUSEL_SWIPE_THRESHOLD};
use crate::data::{Catalog, Game};
use rand::seq::SliceRandom;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nomination {
    pub award_id: String,
    pub name: String,
    pub icon: Option<String>,
    pub trophy: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedGame {
    pub id: String,
    pub title: String,
    pub cover: Option<String>,
    pub synopsis: Option<String>,
    pub nominations: Vec<Nomination>,
}

/// Games nominated in at least one award, in data order and capped, each
/// with the awards it is nominated in. Unshuffled.
pub fn featured_games(catalog: &Catalog<'_>) -> Vec<FeaturedGame> {
    catalog
        .games
        .iter()
        .filter_map(|game| {
            let nominations = nominations_for(catalog, game);
            (!nominations.is_empty()).then(|| FeaturedGame {
                id: game.id.clone(),
                title: game.name.clone(),
                cover: game.cover.clone(),
                synopsis: game.synopsis.clone(),
                nominations,
            })
        })
        .take(CAROUSEL_MAX_ITEMS)
        .collect()
}

fn nominations_for(catalog: &Catalog<'_>, game: &Game) -> Vec<Nomination> {
    catalog
        .awards_nominating(&game.id)
        .into_iter()
        .map(|award| Nomination {
            award_id: award.id.clone(),
            name: award.name.clone(),
            icon: award.icon.clone(),
            trophy: award.trophy.clone(),
        })
        .collect()
}

pub fn shuffled_featured<R: Rng + ?Sized>(catalog: &Catalog<'_>, rng: &mut R) -> Vec<FeaturedGame> {
    let mut items = featured_games(catalog);
    items.shuffle(rng);
    items
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next,
    Prev,
}

/// Index and pause state of the rotating viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    index: usize,
    len: usize,
    paused: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            paused: false,
        }
    }

    pub fn with_random_start<R: Rng>(len: usize, rng: &mut R) -> Self {
        let mut carousel = Self::new(len);
        if len > 0 {
            carousel.index = rng.gen_range(0..len);
        }
        carousel
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Autoplay step; does nothing while paused.
    pub fn tick(&mut self) {
        if !self.paused {
            self.next();
        }
    }

    /// Adjusts to a new slide count, falling back to the first slide when
    /// the current one no longer exists.
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        if self.index >= len {
            self.index = 0;
        }
    }

    /// Applies a horizontal swipe from `start_x` to `end_x`.
    pub fn swipe(&mut self, start_x: f64, end_x: f64) -> Option<Swipe> {
        let swipe = classify_swipe(end_x - start_x)?;
        match swipe {
            Swipe::Next => self.next(),
            Swipe::Prev => self.prev(),
        }
        Some(swipe)
    }

    /// Horizontal offset of the slide strip, in percent of its width.
    pub fn offset_percent(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        -(self.index as f64) * 100.0 / self.len as f64
    }
}

pub fn classify_swipe(delta: f64) -> Option<Swipe> {
    if delta.abs() <= CAROUSEL_SWIPE_THRESHOLD {
        None
    } else if delta < 0.0 {
        Some(Swipe::Next)
    } else {
        Some(Swipe::Prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{award, game};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn navigation_wraps_around() {
        let mut carousel = Carousel::new(3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
        carousel.next();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.offset_percent(), 0.0);
    }

    #[test]
    fn paused_autoplay_does_not_advance() {
        let mut carousel = Carousel::new(4);
        carousel.set_paused(true);
        carousel.tick();
        assert_eq!(carousel.index(), 0);
        carousel.set_paused(false);
        carousel.tick();
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn swipes_need_to_cross_the_threshold() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.swipe(100.0, 70.0), None);
        assert_eq!(carousel.swipe(100.0, 40.0), Some(Swipe::Next));
        assert_eq!(carousel.index(), 1);
        assert_eq!(carousel.swipe(0.0, 55.0), Some(Swipe::Prev));
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn shrinking_resets_an_out_of_range_index() {
        let mut carousel = Carousel::new(5);
        carousel.prev();
        carousel.resize(2);
        assert_eq!(carousel.index(), 0);
        carousel.next();
        carousel.resize(4);
        assert_eq!(carousel.index(), 1);
    }

    #[test]
    fn random_start_is_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for len in 1..10 {
            assert!(Carousel::with_random_start(len, &mut rng).index() < len);
        }
        assert_eq!(Carousel::with_random_start(0, &mut rng).index(), 0);
    }

    #[test]
    fn only_nominated_games_are_featured() {
        let games = vec![game("a", "A"), game("b", "B"), game("c", "C")];
        let awards = vec![award("goty", "GOTY", &["c", "a"]), award("art", "Art", &["a"])];
        let catalog = Catalog {
            games: &games,
            awards: &awards,
            tags: &[],
        };

        let featured = featured_games(&catalog);
        let ids: Vec<_> = featured.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(featured[0].nominations.len(), 2);
        assert_eq!(featured[0].nominations[1].award_id, "art");
    }

    #[test]
    fn featured_list_is_capped_and_shuffle_keeps_members() {
        let games: Vec<_> = (0..20).map(|i| game(&format!("g{i}"), &format!("G{i}"))).collect();
        let ids: Vec<String> = games.iter().map(|g| g.id.clone()).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let awards = vec![award("goty", "GOTY", &id_refs)];
        let catalog = Catalog {
            games: &games,
            awards: &awards,
            tags: &[],
        };

        let mut rng = StdRng::seed_from_u64(42);
        let mut shuffled: Vec<_> = shuffled_featured(&catalog, &mut rng)
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(shuffled.len(), CAROUSEL_MAX_ITEMS);

        let mut expected: Vec<_> = featured_games(&catalog).into_iter().map(|f| f.id).collect();
        shuffled.sort();
        expected.sort();
        assert_eq!(shuffled, expected);
    }
}
