//! Sample catalogs.
//!
//! `seven_games()` is the reference catalog used across CLI tests:
//! - 7 items, so a page size of 6 gives two pages
//! - exactly two titles contain "zel" (case-insensitive)
//! - exactly three items carry the "RPG" genre
//! - two items share the top rating (9.7)

use gamelist_types::Item;

pub fn seven_games() -> Vec<Item> {
    vec![
        Item::new(
            "The Legend of Zelda: Breath of the Wild",
            "zelda-botw.jpg",
            ["Action", "Adventure"],
            9.7,
        ),
        Item::new("Final Fantasy VII Remake", "ff7r.jpg", ["RPG", "Action"], 8.7),
        Item::new("Super Mario Odyssey", "mario-odyssey.jpg", ["Platformer"], 9.7),
        Item::new(
            "Zelda II: The Adventure of Link",
            "zelda-2.jpg",
            ["Action", "RPG"],
            7.2,
        ),
        Item::new("Persona 5 Royal", "p5r.jpg", ["RPG"], 9.5),
        Item::new("Celeste", "celeste.jpg", ["Platformer", "Indie"], 9.4),
        Item::new("Hades", "hades.jpg", ["Action", "Roguelike", "Indie"], 9.3),
    ]
}

/// Titles of `seven_games()` in dataset order.
pub fn seven_game_titles() -> Vec<String> {
    seven_games().into_iter().map(|item| item.title).collect()
}

pub fn catalog_json(items: &[Item]) -> String {
    serde_json::to_string_pretty(items).expect("catalog fixture serializes")
}
