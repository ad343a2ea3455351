use crate::filter::{Searchable, SortMode};
use std::cmp::Ordering;

/// Orders entities by name without touching the input. Ties keep their
/// input order in both directions.
pub fn sort_entities<'a, T: Searchable + ?Sized>(items: &[&'a T], mode: SortMode) -> Vec<&'a T> {
    let mut sorted = items.to_vec();
    match mode {
        SortMode::None => {}
        SortMode::AlphaAsc => sorted.sort_by(|a, b| compare_names(a.name(), b.name())),
        SortMode::AlphaDesc => sorted.sort_by(|a, b| compare_names(b.name(), a.name())),
    }
    sorted
}

/// Collation close to a browser's default `localeCompare`: accents and case
/// only break ties.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let primary = folded(a).cmp(folded(b));
    if primary != Ordering::Equal {
        return primary;
    }

    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars().flat_map(char::to_lowercase).map(strip_accent)
}

fn strip_accent(ch: char) -> char {
    match ch {
        'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'ö' | 'õ' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ñ' => 'n',
        'ç' => 'c',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::game;
    use crate::data::Game;

    fn sorted_names(games: &[Game], mode: SortMode) -> Vec<String> {
        let refs: Vec<&Game> = games.iter().collect();
        sort_entities(&refs, mode)
            .into_iter()
            .map(|g| g.name.clone())
            .collect()
    }

    #[test]
    fn alphabetical_orders_and_reverses() {
        let games = vec![game("1", "B"), game("2", "A"), game("3", "B2")];

        assert_eq!(sorted_names(&games, SortMode::AlphaAsc), vec!["A", "B", "B2"]);
        assert_eq!(sorted_names(&games, SortMode::AlphaDesc), vec!["B2", "B", "A"]);
        assert_eq!(sorted_names(&games, SortMode::None), vec!["B", "A", "B2"]);
    }

    #[test]
    fn equal_names_keep_input_order() {
        let games = vec![game("first", "Tetris"), game("x", "Doom"), game("second", "Tetris")];
        let refs: Vec<&Game> = games.iter().collect();

        let asc: Vec<_> = sort_entities(&refs, SortMode::AlphaAsc)
            .into_iter()
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(asc, vec!["x", "first", "second"]);

        let desc: Vec<_> = sort_entities(&refs, SortMode::AlphaDesc)
            .into_iter()
            .map(|g| g.id.as_str())
            .collect();
        assert_eq!(desc, vec!["first", "second", "x"]);
    }

    #[test]
    fn input_is_left_untouched() {
        let games = vec![game("1", "Zelda"), game("2", "Celeste")];
        let refs: Vec<&Game> = games.iter().collect();
        let _ = sort_entities(&refs, SortMode::AlphaAsc);
        assert_eq!(refs[0].name, "Zelda");
    }

    #[test]
    fn case_and_accents_do_not_split_the_alphabet() {
        let games = vec![
            game("1", "zelda"),
            game("2", "Ícaro"),
            game("3", "Celeste"),
            game("4", "inside"),
        ];

        assert_eq!(
            sorted_names(&games, SortMode::AlphaAsc),
            vec!["Celeste", "Ícaro", "inside", "zelda"]
        );
    }
}
