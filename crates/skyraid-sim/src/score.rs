//! Running score tracked by the engine.
//!
//! Stored in `SimulationEngine`, NOT as ECS entities.

use skyraid_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub enemies_deployed: u32,
    pub enemies_destroyed: u32,
    pub enemies_arrived: u32,
    pub shots_fired: u32,
    pub ship_destroyed: bool,
}

impl ScoreState {
    pub fn view(&self, mission_time_secs: f64) -> ScoreView {
        ScoreView {
            enemies_deployed: self.enemies_deployed,
            enemies_destroyed: self.enemies_destroyed,
            enemies_arrived: self.enemies_arrived,
            shots_fired: self.shots_fired,
            ship_destroyed: self.ship_destroyed,
            mission_time_secs,
        }
    }
}
