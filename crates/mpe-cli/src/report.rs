//! Plain-text formatting for CLI output.

use mpe::world::{Agent, World};
use ndarray::ArrayD;

/// One line per agent, then one per landmark
pub fn roster(world: &World) -> String {
    let mut out = String::new();
    for agent in &world.agents {
        out.push_str(&format!(
            "{:<12} {:<10} size={:.3} accel={:.2} max_speed={:.2}\n",
            agent.name, agent.role, agent.size, agent.accel, agent.max_speed
        ));
    }
    for landmark in &world.landmarks {
        out.push_str(&format!(
            "{:<12} {:<10} size={:.3}\n",
            landmark.name, "landmark", landmark.size
        ));
    }
    out
}

pub fn agent_line(agent: &Agent, reward: f32, obs: &ArrayD<f32>) -> String {
    let values: Vec<String> = obs.iter().map(|v| format!("{v:.3}")).collect();
    format!(
        "{:<12} {:<10} reward={:>8.3} obs[{}]=[{}]",
        agent.name,
        agent.role,
        reward,
        obs.len(),
        values.join(", ")
    )
}
