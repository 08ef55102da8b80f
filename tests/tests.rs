use orrery::simulation::consts::{AU, G, MASS_SCALE, PRESET_COUNT};
use orrery::simulation::params::Parameters;
use orrery::simulation::states::{BodyInit, BodySet, NVec3, System};
use orrery::{accumulate_accels, euler_integrator, generate_system, orbital_speed};

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate a registry with a fixed seed; count 0 is the preset
pub fn generated(count: u32, seed: u64) -> BodySet {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_system(count, &mut rng).expect("generation failed")
}

/// Hand-built two-body system: preset-mass star plus an Earth-mass body on
/// a 1 AU circular orbit along +x, moving along +y
pub fn two_body_system() -> BodySet {
    let mut set = BodySet::with_capacity(2);
    set.push(BodyInit {
        parent: 0,
        position: NVec3::zeros(),
        mass: 1.989e6,
        radius: 3.48e7,
        orbit_radius: 0.0,
        velocity: NVec3::zeros(),
        acceleration: NVec3::zeros(),
        color: [1.0, 1.0, 0.0],
    });
    let speed = orbital_speed(1.989e6, AU);
    set.push(BodyInit {
        parent: 0,
        position: NVec3::new(AU, 0.0, 0.0),
        mass: 5.97,
        radius: 6_371.0e3,
        orbit_radius: AU,
        velocity: NVec3::new(0.0, speed, 0.0),
        acceleration: NVec3::zeros(),
        color: [0.0, 0.5, 1.0],
    });
    set
}

/// Unit playback parameters for tests that control dt directly
pub fn test_params() -> Parameters {
    Parameters {
        time_scale: 1.0,
        seed: 42,
    }
}

// ==================================================================================
// Generation tests
// ==================================================================================

#[test]
fn preset_has_nine_bodies() {
    let set = generated(0, 42);
    assert_eq!(set.len(), PRESET_COUNT);
}

#[test]
fn procedural_count_matches_request() {
    for n in [1u32, 2, 10, 40] {
        let set = generated(n, 42);
        assert_eq!(set.len(), n as usize, "wrong body count for n = {n}");
    }
}

#[test]
fn hierarchy_terminates_at_root() {
    let set = generated(40, 7);

    assert_eq!(set.parents[0], 0, "root must self-loop");
    for i in 1..set.len() {
        assert!(set.parents[i] < i, "body {i} references a later parent");

        // Walk the chain; strictly decreasing indices reach 0 within len steps
        let mut cursor = i;
        let mut hops = 0;
        while cursor != 0 {
            cursor = set.parents[cursor];
            hops += 1;
            assert!(hops <= set.len(), "parent chain of body {i} does not terminate");
        }
    }
}

#[test]
fn preset_matches_table() {
    let set = generated(0, 42);

    // Star: preset mass, at rest at the origin
    assert_eq!(set.masses[0], 1.989e6);
    assert_eq!(set.positions[0], NVec3::zeros());
    assert_eq!(set.velocities[0], NVec3::zeros());

    // Body 3 is the Earth equivalent: 1 AU orbit, tabulated mass and radius
    assert_eq!(set.orbit_radii[3], AU);
    assert_eq!(set.masses[3], 5.97);
    assert_eq!(set.radii[3], 6_371.0e3);

    // Orbit radii are the literal table regardless of the random azimuth
    assert_eq!(set.orbit_radii[1], 0.3871 * AU);
    assert_eq!(set.orbit_radii[8], 30.0611 * AU);
}

#[test]
fn generation_is_deterministic_for_a_seed() {
    let a = generated(25, 99);
    let b = generated(25, 99);
    assert_eq!(a.positions, b.positions);
    assert_eq!(a.velocities, b.velocities);
    assert_eq!(a.parents, b.parents);
}

#[test]
fn initial_speed_matches_circular_orbit_formula() {
    let set = generated(30, 11);

    for i in 1..set.len() {
        let parent = set.parents[i];
        // Subtract the inherited parent velocity to get the body's own
        // tangential speed
        let own_speed = (set.velocities[i] - set.velocities[parent]).norm();
        let expected = (G * set.masses[parent] * MASS_SCALE / set.orbit_radii[i]).sqrt();
        assert_relative_eq!(own_speed, expected, max_relative = 1e-4);
    }
}

#[test]
fn size_and_mass_hierarchy_is_respected() {
    let set = generated(40, 3);

    for i in 1..set.len() {
        let parent = set.parents[i];
        if parent == 0 {
            // Direct star children never outgrow half the star
            assert!(set.radii[i] <= set.radii[0] / 2.0);
        } else {
            // Moon masses are a small fraction of the parent's
            assert!(set.masses[i] <= set.masses[parent] / 1.0e4);
        }
    }
}

#[test]
fn forward_parent_reference_is_rejected() {
    use orrery::SimError;

    let mut set = two_body_system();
    set.parents[1] = 1; // self-reference off the root

    match set.validate_hierarchy() {
        Err(SimError::InvalidHierarchy { index: 1, parent: 1 }) => {}
        other => panic!("expected InvalidHierarchy, got {other:?}"),
    }
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn root_stays_fixed() {
    let mut sys = System::new(generated(0, 42));
    let params = test_params();

    for _ in 0..200 {
        euler_integrator(&mut sys, &params, 3600.0);
    }

    assert_eq!(sys.bodies.positions[0], NVec3::zeros());
    assert_eq!(sys.bodies.velocities[0], NVec3::zeros());
    assert_eq!(sys.bodies.accelerations[0], NVec3::zeros());
}

#[test]
fn zero_dt_leaves_positions_and_velocities_unchanged() {
    let mut sys = System::new(two_body_system());
    let params = test_params();

    let positions = sys.bodies.positions.clone();
    let velocities = sys.bodies.velocities.clone();

    euler_integrator(&mut sys, &params, 0.0);

    assert_eq!(sys.bodies.positions, positions);
    assert_eq!(sys.bodies.velocities, velocities);

    // Accelerations are still recomputed: they depend on positions, not time
    assert!(sys.bodies.accelerations[1].norm() > 0.0);
    assert_eq!(sys.t, 0.0);
}

#[test]
fn cascade_composes_one_level_per_step() {
    // Root -> planet -> moon chain, built by hand so every input is known
    let mut set = two_body_system();
    let moon_orbit = 4.0e8;
    let planet_pos = set.positions[1];
    let planet_vel = set.velocities[1];
    let moon_speed = orbital_speed(set.masses[1], moon_orbit);
    set.push(BodyInit {
        parent: 1,
        position: planet_pos + NVec3::new(moon_orbit, 0.0, 0.0),
        mass: set.masses[1] / 1.0e5,
        radius: 1.7e6,
        orbit_radius: moon_orbit,
        velocity: planet_vel + NVec3::new(0.0, moon_speed, 0.0),
        acceleration: NVec3::zeros(),
        color: [0.8, 0.8, 0.8],
    });
    set.validate_hierarchy().unwrap();

    let planet_vel_before = set.velocities[1];
    let moon_vel_before = set.velocities[2];

    // Expected per-body gravity deltas from the stored orbit radii, with
    // directions along -x (each body starts directly "outside" its parent)
    let a_planet = NVec3::new(-G * set.masses[0] * MASS_SCALE / (AU * AU), 0.0, 0.0);
    let a_moon_own = NVec3::new(
        -G * set.masses[1] * MASS_SCALE / (moon_orbit * moon_orbit),
        0.0,
        0.0,
    );

    let dt = 60.0;
    let mut sys = System::new(set);
    euler_integrator(&mut sys, &test_params(), dt);

    // Planet inherits only the root's (zero) acceleration
    let planet_delta = sys.bodies.velocities[1] - planet_vel_before;
    assert_relative_eq!(planet_delta.x, a_planet.x * dt, max_relative = 1e-10);

    // Moon inherits the planet's same-frame acceleration exactly one level up
    let moon_delta = sys.bodies.velocities[2] - moon_vel_before;
    assert_relative_eq!(moon_delta.x, (a_moon_own.x + a_planet.x) * dt, max_relative = 1e-10);
}

#[test]
fn two_body_orbit_closes_after_one_year() {
    let set = two_body_system();
    let speed = set.velocities[1].norm();
    let period = std::f64::consts::TAU * AU / speed; // one simulated "year"

    let steps = 50_000;
    let dt = period / steps as f64;

    let start = set.positions[1];
    let mut sys = System::new(set);
    let params = test_params();

    for _ in 0..steps {
        euler_integrator(&mut sys, &params, dt);

        // The force law pins the magnitude to the initial orbit radius, so
        // the orbit should stay a closed circle throughout
        let r = sys.bodies.positions[1].norm();
        assert!((r - AU).abs() / AU < 0.05, "orbit radius drifted to {r}");
    }

    let end = sys.bodies.positions[1];
    assert!(
        (end - start).norm() < 0.01 * AU,
        "orbit did not close: {} m from start",
        (end - start).norm()
    );
}

// ==================================================================================
// Acceleration pass tests
// ==================================================================================

#[test]
fn acceleration_magnitude_uses_stored_orbit_radius() {
    let mut set = two_body_system();

    // Displace the body outward; the live distance changes but the stored
    // orbit radius (and hence the magnitude) must not
    set.positions[1] = NVec3::new(1.5 * AU, 0.0, 0.0);
    accumulate_accels(&mut set);

    let expected = G * set.masses[0] * MASS_SCALE / (AU * AU);
    assert_relative_eq!(set.accelerations[1].norm(), expected, max_relative = 1e-12);
}
