#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::commands::SimCommand;
    use crate::constants::STARTING_LIVES;
    use crate::enums::{EntityClass, GamePhase};
    use crate::events::{GameEvent, RenderDelta};
    use crate::state::GameState;
    use crate::types::{EntityId, SimTime};

    /// Verify enums round-trip through serde_json.
    #[test]
    fn test_game_phase_serde() {
        let variants = vec![GamePhase::Playing, GamePhase::GameOver];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_entity_class_serde() {
        let variants = vec![
            EntityClass::Craft,
            EntityClass::Projectile,
            EntityClass::Hostile,
            EntityClass::Pickup,
            EntityClass::Particle,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: EntityClass = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_command_serde() {
        let commands = vec![
            SimCommand::MoveLeft,
            SimCommand::MoveRight,
            SimCommand::Fire,
            SimCommand::DeployCraft,
            SimCommand::SpawnHostile {
                position: Vec3::new(-25.0, 0.0, -100.0),
            },
            SimCommand::SpawnPickup {
                position: Vec3::new(40.0, 0.0, -100.0),
            },
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let _back: SimCommand = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_event_serde() {
        let events = vec![
            GameEvent::HudChanged { score: 15, lives: 2 },
            GameEvent::GameOver,
        ];
        for e in events {
            let json = serde_json::to_string(&e).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(e, back);
        }
    }

    #[test]
    fn test_render_delta_serde() {
        let deltas = vec![
            RenderDelta::Added {
                id: EntityId(7),
                class: EntityClass::Hostile,
            },
            RenderDelta::Removed { id: EntityId(7) },
        ];
        for d in deltas {
            let json = serde_json::to_string(&d).unwrap();
            let back: RenderDelta = serde_json::from_str(&json).unwrap();
            assert_eq!(d, back);
        }
    }

    #[test]
    fn test_game_state_default() {
        let state = GameState::default();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..60 {
            time.advance(1.0 / 60.0);
        }
        assert_eq!(time.tick, 60);
        assert!(
            (time.elapsed_secs - 1.0).abs() < 1e-6,
            "60 ticks of 1/60 s should be ~1.0 s, got {}",
            time.elapsed_secs
        );
    }
}
