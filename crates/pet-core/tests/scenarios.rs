use pet_core::{
    AnimationRates, BehaviorConfig, Goal, PcgRng, PetEngine, PetState, SequenceRng,
    TransitionCause, Vec3,
};

#[test]
fn pet_walks_to_the_bowl_and_starts_eating() {
    let config = BehaviorConfig::default();
    let mut state = PetState::new(&config);
    assert_eq!(state.pet_position, Vec3::new(9.0, 0.0, 9.0));

    PetEngine::new(&mut state, &config).resource_clicked();
    assert_eq!(state.goal, Goal::GoToResource);

    let mut arrived_at = None;
    for tick in 1..=2_000 {
        if let Some(transition) = PetEngine::new(&mut state, &config).fast_tick() {
            assert_eq!(transition.cause, TransitionCause::Arrived);
            arrived_at = Some(tick);
            break;
        }
        assert!(config.arena.contains(state.pet_position));
    }

    let tick = arrived_at.expect("pet never reached the bowl");
    assert!((600..=700).contains(&tick), "arrived after {tick} ticks");
    assert_eq!(state.goal, Goal::UsingResource);
    assert_eq!(state.previous_goal, Goal::GoToResource);
    assert!(state.pet_position.distance_squared(state.resource_position) < 2.0);
}

#[test]
fn pet_follows_character_then_sits() {
    let config = BehaviorConfig::default();
    let mut state = PetState::new(&config);
    let mut rng = SequenceRng::new([0.5, 0.1]);

    {
        let mut engine = PetEngine::new(&mut state, &config);
        engine.update_character_position(Vec3::new(5.0, 0.0, 5.0));
        let transition = engine.slow_tick(&mut rng).expect("follow accepted");
        assert_eq!(transition.to, Goal::Follow);
    }

    for _ in 0..1_000 {
        PetEngine::new(&mut state, &config).fast_tick();
        if state.goal != Goal::Follow {
            break;
        }
    }

    assert_eq!(state.goal, Goal::Sit);
    assert_eq!(state.previous_goal, Goal::Follow);
}

#[test]
fn clicking_a_sitting_pet_stands_it_up() {
    let config = BehaviorConfig::default();
    let mut state = PetState::new(&config);

    PetEngine::new(&mut state, &config).pet_clicked();
    assert_eq!(state.goal, Goal::Sit);

    let transition = PetEngine::new(&mut state, &config).pet_clicked();
    assert_eq!(transition.from, Goal::Sit);
    assert_eq!(state.goal, Goal::Idle);
    assert_eq!(state.previous_goal, Goal::Sit);
}

#[test]
fn blending_pet_ignores_slow_ticks() {
    let config = BehaviorConfig::default();
    let mut state = PetState::new(&config);
    state.animation_blend = 0.5;
    let mut rng = SequenceRng::new([0.0; 5]);

    assert_eq!(PetEngine::new(&mut state, &config).slow_tick(&mut rng), None);
    assert_eq!(state.goal, Goal::Idle);
    assert_eq!(rng.remaining(), 5);
}

#[test]
fn seeded_session_respects_invariants() {
    let config = BehaviorConfig::default();
    let mut state = PetState::new(&config);
    let mut rng = PcgRng::new(0xD06);

    // Character paces a loop that wanders partly outside the arena.
    let waypoints = [
        Vec3::new(2.0, 0.0, 2.0),
        Vec3::new(8.0, 0.0, 3.0),
        Vec3::new(11.0, 0.0, 7.0),
        Vec3::new(4.0, 0.0, 8.0),
    ];

    for frame in 0..20_000u32 {
        let mut engine = PetEngine::new(&mut state, &config);

        if frame % 240 == 0 {
            let waypoint = waypoints[(frame / 240) as usize % waypoints.len()];
            engine.update_character_position(waypoint);
        }
        if frame % 3_000 == 1_500 {
            engine.resource_clicked();
        }
        if frame % 5_000 == 4_999 {
            engine.pet_clicked();
        }

        engine.fast_tick();
        if frame % 90 == 0 {
            engine.slow_tick(&mut rng);
        }

        assert!(
            config.arena.contains(state.pet_position),
            "frame {frame}: {:?}",
            state.pet_position
        );

        let rates = AnimationRates::from_state(&state);
        assert!((rates.total() - 1.0).abs() < 1e-5, "frame {frame}: {rates:?}");
        assert!(rates.sit >= 0.0 && rates.walk >= 0.0 && rates.idle >= -1e-5);
    }
}
