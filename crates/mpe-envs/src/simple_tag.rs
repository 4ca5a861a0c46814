//! Predator-prey tag with a hidden neutral faction.
//!
//! Adversaries chase cooperators ("good" agents) around a handful of
//! obstacles. Neutral agents wander through with zero reward; they can see
//! everyone, but adversaries and cooperators cannot see them.
//!
//! Agent order is fixed at construction: adversaries, then cooperators,
//! then neutrals.

use crate::config::TagConfig;
use mpe::scenario::{distance, is_collision, Scenario};
use mpe::world::{Agent, Landmark, Role, World};
use mpe::Result;
use ndarray::{Array1, ArrayD};
use rand::Rng;

/// Reward magnitude for a single capture
pub const CAPTURE_REWARD: f32 = 10.0;

const COMM_DIM: usize = 2;
const LANDMARK_SIZE: f32 = 0.2;
const LANDMARK_COLOR: [f32; 3] = [0.25, 0.25, 0.25];
const SHAPING_SCALE: f32 = 0.1;

/// Size, base acceleration and base max speed of a role
fn body(role: Role) -> (f32, f32, f32) {
    match role {
        Role::Adversary => (0.075, 3.0, 1.0),
        Role::Cooperator => (0.05, 4.0, 1.3),
        Role::Neutral => (0.075, 4.0, 1.3),
    }
}

fn color(role: Role, rank: usize) -> [f32; 3] {
    let shade = 0.35 + 0.2 * rank as f32;
    match role {
        Role::Adversary => [0.85, 0.35, shade],
        Role::Cooperator => [shade, 0.85, 0.35],
        Role::Neutral => [0.35, shade, 0.85],
    }
}

/// Penalty for one coordinate's distance from the origin. Zero inside the
/// arena, linear in the 0.9..1.0 band, exponential (capped at 10) beyond.
pub fn boundary_penalty(x: f32) -> f32 {
    if x < 0.9 {
        0.0
    } else if x < 1.0 {
        (x - 0.9) * 10.0
    } else {
        (2.0 * x - 2.0).exp().min(10.0)
    }
}

/// Whether `observer` can sense `other` at all
fn can_see(observer: &Agent, other: &Agent) -> bool {
    other.role != Role::Neutral || observer.role == Role::Neutral
}

/// Whether `observer` sees `other`'s velocity
fn can_see_velocity(observer: &Agent, other: &Agent, world: &World) -> bool {
    can_see(observer, other) && (other.role != Role::Adversary || world.obs_adversary_speeds)
}

/// The tag scenario.
#[derive(Clone, Debug)]
pub struct SimpleTag {
    config: TagConfig,
}

impl SimpleTag {
    /// Create a scenario, rejecting invalid configurations
    pub fn new(config: TagConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TagConfig {
        &self.config
    }

    /// Role for an agent index under this configuration
    pub fn role_of(&self, index: usize) -> Role {
        let c = &self.config;
        if index < c.num_adversaries {
            Role::Adversary
        } else if index < c.num_adversaries + c.num_good {
            Role::Cooperator
        } else {
            Role::Neutral
        }
    }

    /// Number of (cooperator, adversary) pairs currently overlapping
    pub fn capture_count(&self, world: &World) -> usize {
        world
            .cooperators()
            .map(|good| world.adversaries().filter(|adv| is_collision(*adv, good)).count())
            .sum()
    }

    /// Reward every collision-enabled adversary shares this tick.
    ///
    /// Every capture counts for every adversary, no matter who made it.
    pub fn adversary_team_reward(&self, world: &World) -> f32 {
        let mut rew = CAPTURE_REWARD * self.capture_count(world) as f32;
        if self.config.shape_rewards {
            rew -= SHAPING_SCALE * self.pursuit_gap(world);
        }
        rew
    }

    /// Sum over adversaries of the distance to their nearest cooperator
    fn pursuit_gap(&self, world: &World) -> f32 {
        world
            .adversaries()
            .filter_map(|adv| {
                world
                    .cooperators()
                    .map(|good| distance(good, adv))
                    .min_by(|a, b| a.total_cmp(b))
            })
            .sum()
    }

    fn cooperator_reward(&self, agent: &Agent, world: &World) -> f32 {
        let mut rew = 0.0;
        if self.config.shape_rewards {
            rew += SHAPING_SCALE * world.adversaries().map(|adv| distance(agent, adv)).sum::<f32>();
        }
        if agent.collide {
            let caught = world.adversaries().filter(|adv| is_collision(*adv, agent)).count();
            rew -= CAPTURE_REWARD * caught as f32;
        }
        // Leaving the arena would make the evader uncatchable
        rew - agent
            .state
            .position
            .iter()
            .map(|p| boundary_penalty(p.abs()))
            .sum::<f32>()
    }

    fn reward_with_team(&self, agent: &Agent, world: &World, team: f32) -> f32 {
        match agent.role {
            Role::Adversary if agent.collide => team,
            Role::Adversary => {
                if self.config.shape_rewards {
                    -SHAPING_SCALE * self.pursuit_gap(world)
                } else {
                    0.0
                }
            }
            Role::Cooperator => self.cooperator_reward(agent, world),
            Role::Neutral => 0.0,
        }
    }
}

impl Scenario for SimpleTag {
    fn make_world(&self) -> Result<World> {
        self.config.validate()?;

        let mut world = World::new(COMM_DIM);
        world.obs_adversary_speeds = self.config.obs_adversary_speeds;
        let (dim_p, dim_c) = (world.dim_p, world.dim_c);

        let total = self.config.total_agents();
        let mut ranks = [0usize; 3];
        world.agents = (0..total)
            .map(|i| {
                let role = self.role_of(i);
                let slot = &mut ranks[role as usize];
                let rank = *slot;
                *slot += 1;

                let (size, accel, max_speed) = body(role);
                let ability = self.config.ability(role);
                let mut agent =
                    Agent::new(format!("{}_{}", role.base_name(), rank), role, dim_p, dim_c);
                agent.size = size;
                agent.accel = accel * ability;
                agent.max_speed = max_speed * ability;
                agent.collide = true;
                agent.silent = true;
                agent
            })
            .collect();

        world.landmarks = (0..self.config.num_obstacles)
            .map(|i| {
                let mut landmark = Landmark::new(format!("landmark {i}"), dim_p);
                landmark.size = LANDMARK_SIZE;
                landmark.collide = true;
                landmark.movable = false;
                landmark.boundary = false;
                landmark
            })
            .collect();

        tracing::debug!(
            adversaries = self.config.num_adversaries,
            good = self.config.num_good,
            neutral = self.config.num_neutral,
            obstacles = self.config.num_obstacles,
            "Built tag world"
        );
        Ok(world)
    }

    fn reset_world<R: Rng + ?Sized>(&self, world: &mut World, rng: &mut R) {
        let mut ranks = [0usize; 3];
        for agent in &mut world.agents {
            let slot = &mut ranks[agent.role as usize];
            agent.color = color(agent.role, *slot);
            *slot += 1;
        }
        for landmark in &mut world.landmarks {
            landmark.color = LANDMARK_COLOR;
        }

        let (dim_p, dim_c) = (world.dim_p, world.dim_c);
        for agent in &mut world.agents {
            agent.state.position = Array1::from_shape_fn(dim_p, |_| rng.gen_range(-1.0..1.0));
            agent.state.velocity = Array1::zeros(dim_p);
            agent.state.comm = Array1::zeros(dim_c);
        }
        for landmark in world.landmarks.iter_mut().filter(|l| !l.boundary) {
            landmark.state.position = Array1::from_shape_fn(dim_p, |_| rng.gen_range(-0.9..0.9));
            landmark.state.velocity = Array1::zeros(dim_p);
        }
    }

    fn reward(&self, agent: usize, world: &World) -> Result<f32> {
        world.check_state()?;
        let subject = world.agent(agent)?;
        let team = match subject.role {
            Role::Adversary => self.adversary_team_reward(world),
            _ => 0.0,
        };
        Ok(self.reward_with_team(subject, world, team))
    }

    fn rewards(&self, world: &World) -> Result<Vec<f32>> {
        world.check_state()?;
        let team = self.adversary_team_reward(world);
        tracing::trace!(captures = self.capture_count(world), team, "Tag rewards");
        Ok(world
            .agents
            .iter()
            .map(|agent| self.reward_with_team(agent, world, team))
            .collect())
    }

    fn observation(&self, agent: usize, world: &World) -> Result<ArrayD<f32>> {
        world.check_state()?;
        let me = world.agent(agent)?;
        let origin = &me.state.position;

        let mut obs: Vec<f32> = Vec::with_capacity(self.observation_dim(agent, world)?);
        obs.extend(me.state.velocity.iter());
        obs.extend(origin.iter());

        for landmark in world.landmarks.iter().filter(|l| !l.boundary) {
            obs.extend((&landmark.state.position - origin).iter());
        }

        let others: Vec<&Agent> = world
            .agents
            .iter()
            .enumerate()
            .filter(|&(i, other)| i != agent && can_see(me, other))
            .map(|(_, other)| other)
            .collect();

        for other in &others {
            obs.extend((&other.state.position - origin).iter());
        }
        for other in others.iter().filter(|o| can_see_velocity(me, o, world)) {
            obs.extend(other.state.velocity.iter());
        }

        Ok(Array1::from(obs).into_dyn())
    }

    fn observation_dim(&self, agent: usize, world: &World) -> Result<usize> {
        let me = world.agent(agent)?;
        let landmarks = world.landmarks.iter().filter(|l| !l.boundary).count();
        let (mut seen, mut seen_moving) = (0, 0);
        for (i, other) in world.agents.iter().enumerate() {
            if i == agent || !can_see(me, other) {
                continue;
            }
            seen += 1;
            if can_see_velocity(me, other, world) {
                seen_moving += 1;
            }
        }
        Ok(world.dim_p * (2 + landmarks + seen + seen_moving))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mpe::MpeError;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn config(adv: usize, good: usize, neutral: usize, obstacles: usize) -> TagConfig {
        TagConfig {
            num_adversaries: adv,
            num_good: good,
            num_neutral: neutral,
            num_obstacles: obstacles,
            ..Default::default()
        }
    }

    /// World with every agent parked far apart inside the arena
    fn spread_world(scenario: &SimpleTag) -> World {
        let mut world = scenario.make_world().unwrap();
        let n = world.agents.len();
        for (i, agent) in world.agents.iter_mut().enumerate() {
            let x = -0.8 + 1.6 * i as f32 / n.max(1) as f32;
            agent.state.position = array![x, 0.5];
        }
        for (i, landmark) in world.landmarks.iter_mut().enumerate() {
            landmark.state.position = array![-0.5 + 0.5 * i as f32, -0.6];
        }
        world
    }

    #[test]
    fn test_role_ranges_and_counts() {
        for (adv, good, neutral, obstacles) in [(3, 1, 2, 2), (1, 0, 0, 0), (0, 2, 3, 1), (2, 2, 0, 4)] {
            let scenario = SimpleTag::new(config(adv, good, neutral, obstacles)).unwrap();
            let world = scenario.make_world().unwrap();
            assert_eq!(world.agents.len(), adv + good + neutral);
            assert_eq!(world.landmarks.len(), obstacles);
            for (i, agent) in world.agents.iter().enumerate() {
                let expected = if i < adv {
                    Role::Adversary
                } else if i < adv + good {
                    Role::Cooperator
                } else {
                    Role::Neutral
                };
                assert_eq!(agent.role, expected);
            }
        }
    }

    #[test]
    fn test_role_bodies_scaled_by_ability() {
        let scenario = SimpleTag::new(TagConfig {
            abilities_adversaries: 2.0,
            abilities_good: 0.5,
            abilities_neutrals: 1.5,
            ..Default::default()
        })
        .unwrap();
        let world = scenario.make_world().unwrap();

        let adv = &world.agents[0];
        assert_eq!((adv.size, adv.accel, adv.max_speed), (0.075, 6.0, 2.0));
        let good = &world.agents[3];
        assert_eq!((good.size, good.accel, good.max_speed), (0.05, 2.0, 0.65));
        let neutral = &world.agents[4];
        assert_eq!(neutral.size, 0.075);
        assert!((neutral.accel - 6.0).abs() < 1e-6);
        assert!((neutral.max_speed - 1.95).abs() < 1e-6);

        assert!(world.agents.iter().all(|a| a.collide && a.silent));
        assert!(world
            .landmarks
            .iter()
            .all(|l| l.size == 0.2 && l.collide && !l.movable && !l.boundary));
    }

    #[test]
    fn test_agent_names() {
        let world = SimpleTag::new(TagConfig::default()).unwrap().make_world().unwrap();
        let names: Vec<&str> = world.agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            ["adversary_0", "adversary_1", "adversary_2", "good_0", "neutral_0", "neutral_1"]
        );
        assert_eq!(world.landmarks[1].name, "landmark 1");
    }

    #[test]
    fn test_make_world_deterministic() {
        let scenario = SimpleTag::new(TagConfig::default()).unwrap();
        let a = scenario.make_world().unwrap();
        let b = scenario.make_world().unwrap();
        for (x, y) in a.agents.iter().zip(&b.agents) {
            assert_eq!(
                (x.role, x.size, x.accel, x.max_speed),
                (y.role, y.size, y.accel, y.max_speed)
            );
        }
    }

    #[test]
    fn test_zero_agents_is_invalid() {
        let err = SimpleTag::new(config(0, 0, 0, 2)).unwrap_err();
        assert!(matches!(err, MpeError::InvalidConfig(_)));
    }

    #[test]
    fn test_reset_colors_and_ranges() {
        let scenario = SimpleTag::new(TagConfig::default()).unwrap();
        let mut world = scenario.make_world().unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        scenario.reset_world(&mut world, &mut rng);

        assert_eq!(world.agents[0].color, [0.85, 0.35, 0.35]);
        assert_eq!(world.agents[2].color, [0.85, 0.35, 0.35 + 0.4]);
        assert_eq!(world.agents[3].color, [0.35, 0.85, 0.35]);
        assert_eq!(world.agents[5].color, [0.35, 0.35 + 0.2, 0.85]);
        assert!(world.landmarks.iter().all(|l| l.color == [0.25, 0.25, 0.25]));

        for agent in &world.agents {
            assert!(agent.state.position.iter().all(|p| (-1.0..1.0).contains(p)));
            assert!(agent.state.velocity.iter().all(|&v| v == 0.0));
            assert_eq!(agent.state.comm, Array1::<f32>::zeros(2));
        }
        for landmark in &world.landmarks {
            assert!(landmark.state.position.iter().all(|p| (-0.9..0.9).contains(p)));
        }
    }

    #[test]
    fn test_reset_same_seed_same_state() {
        let scenario = SimpleTag::new(TagConfig::default()).unwrap();
        let mut a = scenario.make_world().unwrap();
        let mut b = scenario.make_world().unwrap();
        // Leftover state from a previous episode must not leak through
        b.agents[0].state.velocity = array![3.0, -1.0];
        b.agents[1].state.comm = array![1.0, 1.0];

        scenario.reset_world(&mut a, &mut StdRng::seed_from_u64(7));
        scenario.reset_world(&mut b, &mut StdRng::seed_from_u64(7));

        for (x, y) in a.agents.iter().zip(&b.agents) {
            assert_eq!(x.state, y.state);
            assert_eq!(x.color, y.color);
        }
        for (x, y) in a.landmarks.iter().zip(&b.landmarks) {
            assert_eq!(x.state.position, y.state.position);
        }
    }

    #[test]
    fn test_boundary_landmarks_not_moved() {
        let scenario = SimpleTag::new(config(1, 1, 0, 2)).unwrap();
        let mut world = scenario.make_world().unwrap();
        world.landmarks[0].boundary = true;
        world.landmarks[0].state.position = array![5.0, 5.0];
        scenario.reset_world(&mut world, &mut StdRng::seed_from_u64(1));
        assert_eq!(world.landmarks[0].state.position, array![5.0, 5.0]);
    }

    #[test]
    fn test_boundary_penalty_bands() {
        assert_eq!(boundary_penalty(0.0), 0.0);
        assert_eq!(boundary_penalty(0.89), 0.0);
        assert!((boundary_penalty(0.95) - 0.5).abs() < 1e-5);
        assert!((boundary_penalty(1.0) - 1.0).abs() < 1e-6);
        assert!((boundary_penalty(1.5) - std::f32::consts::E).abs() < 1e-5);
        assert_eq!(boundary_penalty(10.0), 10.0);
    }

    #[test]
    fn test_cooperator_out_of_bounds() {
        let scenario = SimpleTag::new(config(1, 1, 0, 0)).unwrap();
        let mut world = spread_world(&scenario);
        world.agents[1].state.position = array![1.5, 0.0];
        let reward = scenario.reward(1, &world).unwrap();
        assert!((reward + std::f32::consts::E).abs() < 1e-5);

        // Penalties add across axes
        world.agents[1].state.position = array![-1.5, 1.5];
        let reward = scenario.reward(1, &world).unwrap();
        assert!((reward + 2.0 * std::f32::consts::E).abs() < 1e-4);
    }

    #[test]
    fn test_single_capture() {
        let scenario = SimpleTag::new(config(1, 1, 0, 0)).unwrap();
        let mut world = spread_world(&scenario);
        world.agents[0].state.position = array![0.2, 0.2];
        world.agents[1].state.position = array![0.2, 0.2];

        assert_eq!(scenario.reward(0, &world).unwrap(), 10.0);
        assert_eq!(scenario.reward(1, &world).unwrap(), -10.0);
        assert_eq!(scenario.rewards(&world).unwrap(), vec![10.0, -10.0]);
    }

    #[test]
    fn test_captures_stack_and_credit_is_shared() {
        let scenario = SimpleTag::new(config(3, 1, 1, 0)).unwrap();
        let mut world = spread_world(&scenario);
        // Adversaries 0 and 1 both on the cooperator; adversary 2 far away
        world.agents[0].state.position = array![0.0, 0.0];
        world.agents[1].state.position = array![0.01, 0.0];
        world.agents[3].state.position = array![0.0, 0.01];
        world.agents[2].state.position = array![-0.7, -0.7];

        let rewards = scenario.rewards(&world).unwrap();
        assert_eq!(rewards[0], 20.0);
        assert_eq!(rewards[1], 20.0);
        assert_eq!(rewards[2], 20.0);
        assert_eq!(rewards[3], -20.0);
        assert_eq!(rewards[4], 0.0);
        assert_eq!(scenario.capture_count(&world), 2);
    }

    #[test]
    fn test_rewards_match_per_agent_reward() {
        let scenario = SimpleTag::new(TagConfig::default()).unwrap();
        let mut world = scenario.make_world().unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            scenario.reset_world(&mut world, &mut rng);
            let batch = scenario.rewards(&world).unwrap();
            for (i, &r) in batch.iter().enumerate() {
                assert_eq!(scenario.reward(i, &world).unwrap(), r);
            }
        }
    }

    #[test]
    fn test_neutral_reward_always_zero() {
        let scenario = SimpleTag::new(config(1, 1, 2, 1)).unwrap();
        let mut world = spread_world(&scenario);
        // Neutral sitting on everyone and far outside the arena
        world.agents[2].state.position = world.agents[0].state.position.clone();
        world.agents[3].state.position = array![4.0, -4.0];
        assert_eq!(scenario.reward(2, &world).unwrap(), 0.0);
        assert_eq!(scenario.reward(3, &world).unwrap(), 0.0);
    }

    #[test]
    fn test_neutral_overlap_is_not_a_capture() {
        let scenario = SimpleTag::new(config(1, 1, 1, 0)).unwrap();
        let mut world = spread_world(&scenario);
        world.agents[2].state.position = world.agents[1].state.position.clone();
        assert_eq!(scenario.reward(0, &world).unwrap(), 0.0);
        assert_eq!(scenario.reward(1, &world).unwrap(), 0.0);
    }

    #[test]
    fn test_non_colliding_agents_skip_capture_terms() {
        let scenario = SimpleTag::new(config(1, 1, 0, 0)).unwrap();
        let mut world = spread_world(&scenario);
        world.agents[0].state.position = array![0.0, 0.0];
        world.agents[1].state.position = array![0.0, 0.0];
        world.agents[0].collide = false;
        world.agents[1].collide = false;
        assert_eq!(scenario.rewards(&world).unwrap(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_shaping_is_opt_in() {
        let mut cfg = config(1, 1, 0, 0);
        let plain = SimpleTag::new(cfg.clone()).unwrap();
        cfg.shape_rewards = true;
        let shaped = SimpleTag::new(cfg).unwrap();

        let mut world = plain.make_world().unwrap();
        world.agents[0].state.position = array![0.0, 0.0];
        world.agents[1].state.position = array![0.3, 0.4];

        assert_eq!(plain.rewards(&world).unwrap(), vec![0.0, 0.0]);
        let rewards = shaped.rewards(&world).unwrap();
        assert!((rewards[0] + 0.05).abs() < 1e-6);
        assert!((rewards[1] - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_malformed_state_is_rejected() {
        let scenario = SimpleTag::new(config(1, 1, 0, 1)).unwrap();
        let mut world = spread_world(&scenario);
        world.agents[0].state.position = array![0.1];
        assert!(matches!(
            scenario.reward(1, &world),
            Err(MpeError::MalformedState { .. })
        ));
        assert!(scenario.observation(1, &world).is_err());
        assert!(scenario.rewards(&world).is_err());
    }

    #[test]
    fn test_unknown_agent_index() {
        let scenario = SimpleTag::new(config(1, 1, 0, 0)).unwrap();
        let world = spread_world(&scenario);
        assert!(matches!(scenario.reward(5, &world), Err(MpeError::UnknownAgent(5))));
        assert!(scenario.observation(5, &world).is_err());
    }

    #[test]
    fn test_observation_layout() {
        let scenario = SimpleTag::new(config(1, 1, 1, 1)).unwrap();
        let mut world = scenario.make_world().unwrap();
        world.agents[0].state.position = array![0.1, 0.2];
        world.agents[0].state.velocity = array![0.3, 0.4];
        world.agents[1].state.position = array![0.5, -0.5];
        world.agents[1].state.velocity = array![-0.1, 0.1];
        world.agents[2].state.position = array![-0.6, 0.6];
        world.agents[2].state.velocity = array![0.7, 0.7];
        world.landmarks[0].state.position = array![0.0, 0.0];

        // Adversary: no neutral blocks
        let obs = scenario.observation(0, &world).unwrap();
        let expected: [f32; 10] = [0.3, 0.4, 0.1, 0.2, -0.1, -0.2, 0.4, -0.7, -0.1, 0.1];
        assert_eq!(obs.len(), expected.len());
        for (got, want) in obs.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "{obs:?}");
        }

        // Neutral: sees adversary and cooperator, including adversary speed
        let obs = scenario.observation(2, &world).unwrap();
        let expected: [f32; 14] = [
            0.7, 0.7, -0.6, 0.6, 0.6, -0.6, 0.7, -0.4, 1.1, -1.1, 0.3, 0.4, -0.1, 0.1,
        ];
        assert_eq!(obs.len(), expected.len());
        for (got, want) in obs.iter().zip(expected) {
            assert!((got - want).abs() < 1e-6, "{obs:?}");
        }
    }

    #[test]
    fn test_hidden_adversary_speeds() {
        let scenario = SimpleTag::new(TagConfig {
            obs_adversary_speeds: false,
            ..config(2, 1, 1, 0)
        })
        .unwrap();
        let mut world = scenario.make_world().unwrap();
        scenario.reset_world(&mut world, &mut StdRng::seed_from_u64(3));

        // Cooperator: self(4) + 2 adversary positions + no adversary speeds
        assert_eq!(scenario.observation(2, &world).unwrap().len(), 4 + 4);
        // Adversary: self(4) + adversary & cooperator positions + cooperator speed
        assert_eq!(scenario.observation(0, &world).unwrap().len(), 4 + 4 + 2);
        // Neutral: self(4) + three positions + cooperator speed
        assert_eq!(scenario.observation(3, &world).unwrap().len(), 4 + 6 + 2);
    }

    #[test]
    fn test_observation_length_uniform_within_role() {
        let scenario = SimpleTag::new(TagConfig::default()).unwrap();
        let mut world = scenario.make_world().unwrap();
        scenario.reset_world(&mut world, &mut StdRng::seed_from_u64(5));

        let lens: Vec<usize> = (0..world.agents.len())
            .map(|i| scenario.observation(i, &world).unwrap().len())
            .collect();
        // 2 landmarks; non-neutrals see 3 others, neutrals see 5
        assert_eq!(lens, vec![20, 20, 20, 20, 28, 28]);
        for (i, &len) in lens.iter().enumerate() {
            assert_eq!(scenario.observation_dim(i, &world).unwrap(), len);
        }
    }

    #[test]
    fn test_non_neutral_observation_ignores_neutrals() {
        let scenario = SimpleTag::new(config(1, 1, 2, 1)).unwrap();
        let mut world = scenario.make_world().unwrap();
        scenario.reset_world(&mut world, &mut StdRng::seed_from_u64(11));
        let before_adv = scenario.observation(0, &world).unwrap();
        let before_good = scenario.observation(1, &world).unwrap();
        let before_neutral = scenario.observation(2, &world).unwrap();

        world.agents[2].state.position = array![0.9, -0.9];
        world.agents[3].state.velocity = array![1.0, 1.0];

        assert_eq!(scenario.observation(0, &world).unwrap(), before_adv);
        assert_eq!(scenario.observation(1, &world).unwrap(), before_good);
        assert_ne!(scenario.observation(2, &world).unwrap(), before_neutral);
    }

    #[test]
    fn test_boundary_landmarks_not_observed() {
        let scenario = SimpleTag::new(config(1, 1, 0, 2)).unwrap();
        let mut world = scenario.make_world().unwrap();
        let before = scenario.observation_dim(0, &world).unwrap();
        world.landmarks[1].boundary = true;
        assert_eq!(scenario.observation_dim(0, &world).unwrap(), before - 2);
        assert_eq!(scenario.observation(0, &world).unwrap().len(), before - 2);
    }
}
