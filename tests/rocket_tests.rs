#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use geo::{Rect, coord};
use krokets::simulation::environment::{Arena, Environment, Target};
use krokets::simulation::genome::Genome;
use krokets::simulation::params::Params;
use krokets::simulation::rocket::{Rocket, RocketState};
use krokets::simulation::vector::Vector2;

fn create_test_params() -> Params {
    Params::default()
}

/// Open field: target straight above the spawn point, nothing in the way.
fn open_environment() -> Environment {
    Environment {
        target: Target {
            center: Vector2::new(100.0, 500.0),
            radius: 20.0,
        },
        obstacle: None,
        arena: Arena {
            width: 1000.0,
            height: 1000.0,
        },
    }
}

#[test]
fn test_new_rocket_is_at_rest() {
    let rocket = Rocket::new(Genome::zeros(5), Vector2::new(3.0, 4.0));

    assert_eq!(rocket.position(), Vector2::new(3.0, 4.0));
    assert_eq!(rocket.vel, Vector2::ZERO);
    assert_eq!(rocket.acc, Vector2::ZERO);
    assert_eq!(rocket.state(), RocketState::Flying);
    assert!(!rocket.is_completed());
    assert!(!rocket.is_crashed());
}

#[test]
fn test_rocket_flies_to_target_and_snaps() {
    let params = create_test_params();
    let environment = open_environment();
    let genome = Genome::constant(params.genome_length, Vector2::new(0.0, 0.5));
    let mut rocket = Rocket::new(genome, Vector2::new(100.0, 50.0));

    let mut last_distance = environment.distance_to_target(rocket.pos);
    let mut tick = 0;

    while !rocket.is_completed() {
        assert!(tick < params.genome_length, "rocket never reached the target");
        rocket.update(&environment, tick, &params);
        tick += 1;

        if !rocket.is_completed() {
            let distance = environment.distance_to_target(rocket.pos);
            assert!(distance < last_distance, "distance grew at tick {tick}");
            last_distance = distance;
        }
    }

    assert_eq!(rocket.pos, Vector2::new(100.0, 500.0));
    assert!(!rocket.is_crashed());
}

#[test]
fn test_zero_genome_stays_put() {
    let params = create_test_params();
    let environment = Environment::for_arena(800.0, 600.0);
    let spawn = environment.spawn_point();
    let mut rocket = Rocket::new(Genome::zeros(params.genome_length), spawn);

    for tick in 0..=params.genome_length {
        rocket.update(&environment, tick, &params);
    }

    assert_eq!(rocket.pos, spawn);
    assert_eq!(rocket.state(), RocketState::Flying);

    let expected = 800.0 - spawn.distance(environment.target.center);
    let fitness = rocket.calculate_fitness(&environment, &params);
    assert!((fitness - expected).abs() < 1e-3);
    assert_eq!(rocket.fitness, fitness);
}

#[test]
fn test_speed_is_capped() {
    let params = create_test_params();
    let environment = open_environment();
    let genome = Genome::constant(10, Vector2::new(6.0, 8.0));
    let mut rocket = Rocket::new(genome, Vector2::new(100.0, 50.0));

    rocket.update(&environment, 0, &params);

    assert!((rocket.vel.length() - params.max_speed).abs() < 1e-4);
    assert!((rocket.vel.x - 3.0).abs() < 1e-4);
    assert!((rocket.vel.y - 4.0).abs() < 1e-4);
    assert_eq!(rocket.acc, Vector2::ZERO);
}

#[test]
fn test_genes_stop_after_genome_ends() {
    let params = create_test_params();
    let environment = open_environment();
    let genome = Genome::constant(2, Vector2::new(0.0, 1.0));
    let mut rocket = Rocket::new(genome, Vector2::new(100.0, 50.0));

    for tick in 0..5 {
        rocket.update(&environment, tick, &params);
    }

    // two ticks of thrust, then coasting at constant velocity
    assert_eq!(rocket.vel, Vector2::new(0.0, 2.0));
    assert_eq!(rocket.pos, Vector2::new(100.0, 50.0 + 1.0 + 2.0 * 4.0));
}

#[test]
fn test_crash_into_obstacle_freezes_rocket() {
    let params = create_test_params();
    let mut environment = open_environment();
    environment.obstacle = Some(Rect::new(
        coord! { x: 50.0, y: 200.0 },
        coord! { x: 150.0, y: 210.0 },
    ));

    let genome = Genome::constant(params.genome_length, Vector2::new(0.0, 0.5));
    let mut rocket = Rocket::new(genome, Vector2::new(100.0, 50.0));

    let mut tick = 0;
    while !rocket.is_crashed() {
        assert!(tick < params.genome_length, "rocket never hit the obstacle");
        rocket.update(&environment, tick, &params);
        tick += 1;
    }

    let frozen_pos = rocket.pos;
    let frozen_vel = rocket.vel;
    for later in tick..tick + 20 {
        rocket.update(&environment, later, &params);
        assert_eq!(rocket.pos, frozen_pos);
        assert_eq!(rocket.vel, frozen_vel);
        assert!(rocket.is_crashed());
        assert!(!rocket.is_completed());
    }
}

#[test]
fn test_obstacle_boundary_counts_as_collision() {
    let params = create_test_params();
    let mut environment = open_environment();
    environment.obstacle = Some(Rect::new(
        coord! { x: 50.0, y: 200.0 },
        coord! { x: 150.0, y: 210.0 },
    ));
    let mut rocket = Rocket::new(Genome::zeros(5), Vector2::new(150.0, 205.0));

    rocket.update(&environment, 0, &params);

    assert!(rocket.is_crashed());
}

#[test]
fn test_leaving_arena_crashes() {
    let params = create_test_params();
    let environment = open_environment();
    let mut rocket = Rocket::new(Genome::zeros(5), Vector2::new(-1.0, 50.0));

    rocket.update(&environment, 0, &params);

    assert_eq!(rocket.state(), RocketState::Crashed);
    assert_eq!(rocket.pos, Vector2::new(-1.0, 50.0));
}

#[test]
fn test_completed_rocket_never_crashes() {
    let params = create_test_params();
    let mut environment = open_environment();
    let mut rocket = Rocket::new(Genome::zeros(5), Vector2::new(100.0, 495.0));

    rocket.update(&environment, 0, &params);
    assert!(rocket.is_completed());

    // shrink the arena so the rocket would now be out of bounds
    environment.arena = Arena {
        width: 10.0,
        height: 10.0,
    };
    for tick in 1..5 {
        rocket.update(&environment, tick, &params);
    }

    assert!(rocket.is_completed());
    assert!(!rocket.is_crashed());
    assert_eq!(rocket.pos, Vector2::new(100.0, 500.0));
}

#[test]
fn test_fitness_multipliers() {
    let params = create_test_params();
    let environment = open_environment();
    let pos = Vector2::new(100.0, 400.0);
    let base = 1000.0 - 100.0;

    let mut flying = Rocket::new(Genome::zeros(1), pos);
    assert!((flying.calculate_fitness(&environment, &params) - base).abs() < 1e-3);

    let mut completed = Rocket::new(Genome::zeros(1), pos);
    completed.state = RocketState::Completed;
    assert!((completed.calculate_fitness(&environment, &params) - base * 5.0).abs() < 1e-2);

    let mut crashed = Rocket::new(Genome::zeros(1), pos);
    crashed.state = RocketState::Crashed;
    assert!((crashed.calculate_fitness(&environment, &params) - base * 0.2).abs() < 1e-3);
}

#[test]
fn test_fitness_is_never_negative() {
    let params = create_test_params();
    let environment = open_environment();
    let mut rocket = Rocket::new(Genome::zeros(1), Vector2::new(5000.0, 5000.0));

    assert_eq!(rocket.calculate_fitness(&environment, &params), 0.0);
}
