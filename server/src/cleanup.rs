use std::time::Duration;

use tictactoe_engine::log;

use crate::registry::GameRegistry;

pub struct CleanupTask {
    registry: GameRegistry,
    check_interval: Duration,
    inactivity_timeout: Duration,
}

impl CleanupTask {
    pub fn new(
        registry: GameRegistry,
        check_interval: Duration,
        inactivity_timeout: Duration,
    ) -> Self {
        Self {
            registry,
            check_interval,
            inactivity_timeout,
        }
    }

    pub async fn run(&self) {
        let mut interval = tokio::time::interval(self.check_interval);

        loop {
            interval.tick().await;

            let removed = self.registry.remove_inactive(self.inactivity_timeout).await;
            for game_id in removed {
                log!("Cleaning up inactive game: {}", game_id);
            }
        }
    }
}
