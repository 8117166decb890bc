use crate::domain::PlayerName;

/// The closed, ordered set of players. The roster is configuration: it is
/// fixed at startup and never created or deleted through the API.
///
/// Order is load-bearing. Best-score and best-putt lookups resolve ties to
/// the first minimum encountered while walking the roster, so reordering
/// this list changes observable results.
#[derive(Debug, Clone)]
pub struct Roster {
    players: Vec<PlayerName>,
}

impl Roster {
    pub fn new(players: Vec<PlayerName>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|p| p == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// The cup's six regulars, in their fixed display and tie-break order.
pub fn default_roster() -> Roster {
    Roster::new(
        ["Matsumoto", "Masamoto", "Watanabe", "Kondo", "Hiki", "Naito"]
            .into_iter()
            .map(String::from)
            .collect(),
    )
}
