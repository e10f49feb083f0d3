use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tictactoe_engine::{GameSession, SessionMode};
use tokio::sync::Mutex;

const ADJECTIVES: &[&str] = &[
    "swift", "brave", "clever", "mighty", "silent", "golden", "wild", "noble",
    "fierce", "gentle", "quick", "wise", "bold", "proud", "cunning", "sly",
];

const NOUNS: &[&str] = &[
    "falcon", "bear", "tiger", "wolf", "eagle", "dragon", "lion", "panther",
    "hawk", "fox", "raven", "cobra", "shark", "phoenix", "lynx", "viper",
];

struct GameEntry {
    session: GameSession,
    last_activity: Instant,
}

/// All live games, one independent session per game id. Cloning shares the
/// same registry.
#[derive(Clone)]
pub struct GameRegistry {
    games: Arc<Mutex<HashMap<String, GameEntry>>>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            games: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn create(&self, mode: SessionMode) -> String {
        let mut games = self.games.lock().await;

        let mut game_id = generate_game_id();
        while games.contains_key(&game_id) {
            game_id = generate_game_id();
        }

        games.insert(
            game_id.clone(),
            GameEntry {
                session: GameSession::new(mode),
                last_activity: Instant::now(),
            },
        );
        game_id
    }

    /// Runs `f` against the session behind `game_id`, refreshing its
    /// activity timestamp. `None` if the game does not exist.
    pub async fn with_game<R>(
        &self,
        game_id: &str,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Option<R> {
        let mut games = self.games.lock().await;
        let entry = games.get_mut(game_id)?;
        entry.last_activity = Instant::now();
        Some(f(&mut entry.session))
    }

    pub async fn remove_inactive(&self, timeout: Duration) -> Vec<String> {
        let mut games = self.games.lock().await;
        let stale: Vec<String> = games
            .iter()
            .filter(|(_, entry)| entry.last_activity.elapsed() >= timeout)
            .map(|(id, _)| id.clone())
            .collect();
        for id in &stale {
            games.remove(id);
        }
        stale
    }

    pub async fn game_count(&self) -> usize {
        self.games.lock().await.len()
    }
}

impl Default for GameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn generate_game_id() -> String {
    let mut rng = rand::rng();
    let adjective = ADJECTIVES[rng.random_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.random_range(0..NOUNS.len())];
    let suffix: u16 = rng.random_range(100..1000);
    format!("{}-{}-{}", adjective, noun, suffix)
}
