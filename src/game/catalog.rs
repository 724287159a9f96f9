use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::state::MatchItem;

/// Topics available to the image/word matching game.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Animals,
    Kitchen,
    House,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Animals, Topic::Kitchen, Topic::House];

    pub fn id(&self) -> &'static str {
        match self {
            Topic::Animals => "animals",
            Topic::Kitchen => "kitchen",
            Topic::House => "house",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Topic::Animals => "Animals",
            Topic::Kitchen => "Kitchen Items",
            Topic::House => "House Items",
        }
    }
}

impl FromStr for Topic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "animals" => Ok(Topic::Animals),
            "kitchen" => Ok(Topic::Kitchen),
            "house" => Ok(Topic::House),
            _ => Err(()),
        }
    }
}

/// Menu entry for one mini-game. Navigation itself stays in the view
/// shell; this is the data it renders.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GameInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<&'static str>,
    pub available: bool,
}

static GAMES: Lazy<Vec<GameInfo>> = Lazy::new(|| {
    vec![
        GameInfo {
            id: "matching",
            name: "Matching Game",
            description: "Match items with their corresponding images",
            topics: Topic::ALL.iter().map(Topic::id).collect(),
            available: true,
        },
        GameInfo {
            id: "language",
            name: "Matching Words",
            description: "Connect French and English words",
            topics: Vec::new(),
            available: true,
        },
        GameInfo {
            id: "memory",
            name: "Memory Game",
            description: "Test your memory by finding matching pairs",
            topics: Vec::new(),
            available: false,
        },
        GameInfo {
            id: "quiz",
            name: "Quiz Game",
            description: "Test your knowledge with fun quizzes",
            topics: Vec::new(),
            available: false,
        },
        GameInfo {
            id: "coloring",
            name: "Coloring Game",
            description: "Express your creativity with colors",
            topics: Vec::new(),
            available: false,
        },
        GameInfo {
            id: "music",
            name: "Music Game",
            description: "Play with rhythm and melodies",
            topics: Vec::new(),
            available: false,
        },
    ]
});

static LANGUAGE_PAIRS: Lazy<Vec<MatchItem>> = Lazy::new(|| {
    vec![
        MatchItem::new(1, "Bonjour", "Hello"),
        MatchItem::new(2, "Merci", "Thank you"),
        MatchItem::new(3, "Au revoir", "Goodbye"),
        MatchItem::new(4, "S'il vous plaît", "Please"),
        MatchItem::new(5, "Oui", "Yes"),
        MatchItem::new(6, "Non", "No"),
        MatchItem::new(7, "Chat", "Cat"),
        MatchItem::new(8, "Chien", "Dog"),
        MatchItem::new(9, "Maison", "House"),
        MatchItem::new(10, "Voiture", "Car"),
        MatchItem::new(11, "Livre", "Book"),
        MatchItem::new(12, "École", "School"),
        MatchItem::new(13, "Pain", "Bread"),
        MatchItem::new(14, "Eau", "Water"),
        MatchItem::new(15, "Soleil", "Sun"),
    ]
});

static ANIMAL_ITEMS: Lazy<Vec<MatchItem>> = Lazy::new(|| {
    vec![
        MatchItem::new(1, "Cat", "/images/animals/cat.jpg"),
        MatchItem::new(2, "Dog", "/images/animals/dog.jpg"),
        MatchItem::new(3, "Rabbit", "/images/animals/rabbit.jpg"),
        MatchItem::new(4, "Duck", "/images/animals/duck.jpg"),
        MatchItem::new(5, "Horse", "/images/animals/horse.jpg"),
        MatchItem::new(6, "Sheep", "/images/animals/sheep.jpg"),
        MatchItem::new(7, "Owl", "/images/animals/owl.jpg"),
        MatchItem::new(8, "Fish", "/images/animals/fish.jpg"),
    ]
});

static KITCHEN_ITEMS: Lazy<Vec<MatchItem>> = Lazy::new(|| {
    vec![
        MatchItem::new(1, "Spoon", "/images/kitchen/spoon.jpg"),
        MatchItem::new(2, "Fork", "/images/kitchen/fork.jpg"),
        MatchItem::new(3, "Plate", "/images/kitchen/plate.jpg"),
        MatchItem::new(4, "Cup", "/images/kitchen/cup.jpg"),
        MatchItem::new(5, "Kettle", "/images/kitchen/kettle.jpg"),
        MatchItem::new(6, "Pan", "/images/kitchen/pan.jpg"),
        MatchItem::new(7, "Bowl", "/images/kitchen/bowl.jpg"),
    ]
});

static HOUSE_ITEMS: Lazy<Vec<MatchItem>> = Lazy::new(|| {
    vec![
        MatchItem::new(1, "Bed", "/images/house/bed.jpg"),
        MatchItem::new(2, "Chair", "/images/house/chair.jpg"),
        MatchItem::new(3, "Table", "/images/house/table.jpg"),
        MatchItem::new(4, "Lamp", "/images/house/lamp.jpg"),
        MatchItem::new(5, "Door", "/images/house/door.jpg"),
        MatchItem::new(6, "Window", "/images/house/window.jpg"),
        MatchItem::new(7, "Clock", "/images/house/clock.jpg"),
    ]
});

pub fn games() -> &'static [GameInfo] {
    &GAMES
}

/// French–English word pairs for the language game.
pub fn language_pairs() -> &'static [MatchItem] {
    &LANGUAGE_PAIRS
}

/// Text/image items for one topic of the matching game.
pub fn topic_items(topic: Topic) -> &'static [MatchItem] {
    match topic {
        Topic::Animals => &ANIMAL_ITEMS,
        Topic::Kitchen => &KITCHEN_ITEMS,
        Topic::House => &HOUSE_ITEMS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_catalog_has_distinct_ids() {
        let catalogs = [
            language_pairs(),
            topic_items(Topic::Animals),
            topic_items(Topic::Kitchen),
            topic_items(Topic::House),
        ];
        for catalog in catalogs {
            let ids: HashSet<_> = catalog.iter().map(|item| item.id).collect();
            assert_eq!(ids.len(), catalog.len());
        }
    }

    #[test]
    fn topic_ids_round_trip_through_from_str() {
        for topic in Topic::ALL {
            assert_eq!(topic.id().parse::<Topic>(), Ok(topic));
        }
        assert!("algebra".parse::<Topic>().is_err());
    }

    #[test]
    fn registry_marks_only_built_games_available() {
        let available: Vec<_> = games()
            .iter()
            .filter(|game| game.available)
            .map(|game| game.id)
            .collect();
        assert_eq!(available, vec!["matching", "language"]);
    }
}
