use super::{Boostback, GravityTurn, Ignition, Phase, PhaseContext};
use crate::flight_control::{
    common::geo_math::GeoCoordinate,
    control_command::{AttitudeHold, SpeedMode},
    flight_phase::PhaseId,
    launch_config::LaunchConfiguration,
};
use crate::provider::{ProviderError, mock::MockProvider};
use chrono::TimeDelta;
use strum::IntoEnumIterator;

const PAD_LAT: f64 = -0.0972;
const PAD_LON: f64 = -74.5577;

fn config() -> LaunchConfiguration {
    LaunchConfiguration::new(PAD_LAT, PAD_LON, 90.0, 80_000.0).unwrap()
}

fn ms(millis: i64) -> TimeDelta { TimeDelta::milliseconds(millis) }

#[test]
fn test_ignition_throttle_ramp() {
    assert_eq!(Ignition::throttle_at(0.0), 0.5);
    assert_eq!(Ignition::throttle_at(0.5), 0.75);
    assert!(Ignition::throttle_at(0.999) < 1.0);
    assert_eq!(Ignition::throttle_at(1.0), 1.0);
    assert_eq!(Ignition::throttle_at(12.0), 1.0);
}

#[test]
fn test_gravity_turn_pitch_law() {
    assert_eq!(GravityTurn::target_pitch(5_000.0, 35_000.0), 42.5);
    assert_eq!(GravityTurn::target_pitch(5_000.0, 5_000.0), 85.0);
    assert_eq!(GravityTurn::target_pitch(5_000.0, 65_000.0), 0.0);
    assert_eq!(GravityTurn::target_pitch(0.0, 1.0e6), 0.0);
}

#[test]
fn test_boostback_throttle_law() {
    assert_eq!(Boostback::throttle_for(0.0), 0.05);
    assert!((Boostback::throttle_for(20_000.0) - 0.525).abs() < 1e-12);
    assert!((Boostback::throttle_for(41_052.6) - 1.0).abs() < 1e-6);
    assert_eq!(Boostback::throttle_for(41_053.0), 1.0);
    assert_eq!(Boostback::throttle_for(1.0e6), 1.0);
    assert_eq!(Boostback::throttle_for(f64::INFINITY), 1.0);
}

#[test]
fn test_boostback_steering_uses_plain_heading_difference() {
    assert_eq!(Boostback::steering_heading(10.0, 100.0), 100.0);
    assert_eq!(Boostback::steering_heading(10.0, 130.0), 10.0);
    // 20 degrees apart on the compass, but 340 apart numerically
    assert_eq!(Boostback::steering_heading(350.0, 10.0), 350.0);
}

#[test]
fn test_boostback_reached_pad() {
    assert!(Boostback::reached_pad(1_500.0, 5_000.0, 3_000.0));
    assert!(!Boostback::reached_pad(2_500.0, 5_000.0, 3_000.0));
    assert!(!Boostback::reached_pad(1_500.0, 3_500.0, 3_000.0));
}

#[tokio::test]
async fn test_enter_yields_requested_phase() {
    let config = config();
    let provider = MockProvider::new();
    let ctx = PhaseContext::new(&config, &provider);
    for id in PhaseId::iter() {
        let phase = Phase::enter(id, &ctx).await.unwrap();
        assert_eq!(phase.id(), id);
    }
}

#[tokio::test]
async fn test_countdown_is_elapsed_gated() {
    let config = config();
    let provider = MockProvider::new();
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::Countdown, &ctx).await.unwrap();

    assert_eq!(phase.update(&ctx, ms(0), false).await.unwrap(), None);
    assert_eq!(phase.update(&ctx, ms(1_500), false).await.unwrap(), None);
    assert_eq!(phase.update(&ctx, ms(2_999), false).await.unwrap(), None);
    assert_eq!(phase.update(&ctx, ms(3_000), false).await.unwrap(), Some(PhaseId::Ignition));
    let state = provider.state();
    assert!(state.commands.is_empty());
    assert_eq!(state.calls, 0);
}

#[tokio::test]
async fn test_ignition_hands_over_at_full_thrust() {
    let config = config();
    let provider = MockProvider::new();
    // g = 9.81 m/s², weight 196.2 kN
    provider.state().vessel.thrust = 300_000.0;
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::Ignition, &ctx).await.unwrap();
    assert_eq!(provider.state().stages_fired, 1);
    assert_eq!(provider.last_throttle(), Some(0.5));

    assert_eq!(phase.update(&ctx, ms(500), false).await.unwrap(), None);
    assert_eq!(provider.last_throttle(), Some(0.75));
    assert_eq!(phase.update(&ctx, ms(999), false).await.unwrap(), None);
    assert_eq!(phase.update(&ctx, ms(1_000), true).await.unwrap(), Some(PhaseId::Liftoff));
    assert_eq!(provider.last_throttle(), Some(1.0));
}

#[tokio::test]
async fn test_ignition_holds_while_underpowered() {
    let config = config();
    let provider = MockProvider::new();
    provider.state().vessel.thrust = 150_000.0;
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::Ignition, &ctx).await.unwrap();
    assert_eq!(phase.update(&ctx, ms(5_000), false).await.unwrap(), None);
}

#[tokio::test]
async fn test_liftoff_clears_tower() {
    let config = config();
    let provider = MockProvider::new();
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::Liftoff, &ctx).await.unwrap();
    assert_eq!(provider.last_throttle(), Some(1.0));
    assert_eq!(provider.state().stages_fired, 1);

    assert_eq!(phase.update(&ctx, ms(100), false).await.unwrap(), None);
    provider.state().vessel.mean_altitude = 250.0;
    assert_eq!(phase.update(&ctx, ms(200), false).await.unwrap(), None);
    provider.state().vessel.mean_altitude = 251.0;
    assert_eq!(phase.update(&ctx, ms(300), false).await.unwrap(), Some(PhaseId::PitchOver));
}

#[tokio::test]
async fn test_pitch_over_tolerances() {
    let config = config();
    let provider = MockProvider::new();
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::PitchOver, &ctx).await.unwrap();
    assert_eq!(provider.state().commands[0].get_autopilot(), Some(true));

    assert_eq!(phase.update(&ctx, ms(100), false).await.unwrap(), None);
    assert_eq!(provider.last_pitch_and_heading(), Some((85.0, 90.0)));

    {
        let mut state = provider.state();
        state.vessel.pitch = 82.0;
        state.vessel.heading = 99.0;
    }
    assert_eq!(phase.update(&ctx, ms(200), false).await.unwrap(), None);
    provider.state().vessel.heading = 93.0;
    assert_eq!(phase.update(&ctx, ms(300), false).await.unwrap(), Some(PhaseId::RollProgram));
}

#[tokio::test]
async fn test_roll_program_levels_out() {
    let config = config();
    let provider = MockProvider::new();
    provider.state().vessel.roll = -45.0;
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::RollProgram, &ctx).await.unwrap();
    assert_eq!(provider.state().commands[0].get_rcs(), Some(true));

    assert_eq!(phase.update(&ctx, ms(100), false).await.unwrap(), None);
    assert_eq!(provider.state().commands.last().unwrap().get_target_roll(), Some(0.0));
    provider.state().vessel.roll = -2.5;
    assert_eq!(phase.update(&ctx, ms(200), false).await.unwrap(), Some(PhaseId::GravityTurn));
}

#[tokio::test]
async fn test_gravity_turn_follows_altitude() {
    let config = config();
    let provider = MockProvider::new();
    {
        let mut state = provider.state();
        state.vessel.mean_altitude = 5_000.0;
        state.orbit.apoapsis_altitude = 40_000.0;
    }
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::GravityTurn, &ctx).await.unwrap();

    provider.state().vessel.mean_altitude = 35_000.0;
    assert_eq!(phase.update(&ctx, ms(100), true).await.unwrap(), None);
    assert_eq!(provider.last_pitch_and_heading(), Some((42.5, 90.0)));

    provider.state().orbit.apoapsis_altitude = 80_000.0;
    assert_eq!(
        phase.update(&ctx, ms(200), false).await.unwrap(),
        Some(PhaseId::StageSeparation)
    );
}

#[tokio::test]
async fn test_gravity_turn_stops_on_fuel_floor() {
    let config = config();
    let provider = MockProvider::new();
    provider.state().orbit.apoapsis_altitude = 30_000.0;
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::GravityTurn, &ctx).await.unwrap();

    provider.state().vessel.fuel_fraction = 0.18;
    assert_eq!(phase.update(&ctx, ms(100), false).await.unwrap(), None);
    provider.state().vessel.fuel_fraction = 0.17;
    assert_eq!(
        phase.update(&ctx, ms(200), false).await.unwrap(),
        Some(PhaseId::StageSeparation)
    );
}

#[tokio::test]
async fn test_stage_separation_stages_once() {
    let config = config();
    let provider = MockProvider::new();
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::StageSeparation, &ctx).await.unwrap();
    {
        let state = provider.state();
        let entry = &state.commands[0];
        assert_eq!(entry.get_throttle(), Some(0.0));
        assert_eq!(entry.get_autopilot(), Some(false));
        assert_eq!(entry.get_attitude_hold(), Some(AttitudeHold::StabilityAssist));
        assert_eq!(state.stages_fired, 0);
    }

    let mut transitions = Vec::new();
    for tick in 0..=100 {
        let elapsed = ms(tick * 100);
        if let Some(next) = phase.update(&ctx, elapsed, tick % 10 == 0).await.unwrap() {
            transitions.push((tick, next));
        }
        let staged = provider.state().stages_fired;
        assert_eq!(staged, usize::from(tick > 30), "tick {tick}");
    }
    assert_eq!(transitions.first(), Some(&(71, PhaseId::Flip)));

    // re-entering starts with a fresh guard
    let mut phase = Phase::enter(PhaseId::StageSeparation, &ctx).await.unwrap();
    phase.update(&ctx, ms(3_100), false).await.unwrap();
    assert_eq!(provider.state().stages_fired, 2);
}

#[tokio::test]
async fn test_flip_uses_circular_heading_distance() {
    let config = LaunchConfiguration::new(PAD_LAT, PAD_LON, 10.0, 80_000.0).unwrap();
    let provider = MockProvider::new();
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::Flip, &ctx).await.unwrap();
    assert_eq!(provider.state().commands[0].get_attitude_hold(), Some(AttitudeHold::Retrograde));

    provider.state().vessel.heading = 10.0;
    assert_eq!(phase.update(&ctx, ms(100), false).await.unwrap(), None);
    // return heading is 190, and 350 sits 160 away from it
    provider.state().vessel.heading = 350.0;
    assert_eq!(phase.update(&ctx, ms(200), false).await.unwrap(), None);
    provider.state().vessel.heading = 275.0;
    assert_eq!(phase.update(&ctx, ms(300), false).await.unwrap(), Some(PhaseId::Boostback));
}

#[tokio::test]
async fn test_boostback_without_prediction_flies_direct() {
    let config = config();
    let provider = MockProvider::new();
    {
        let mut state = provider.state();
        state.orbit.eccentricity = 1.2;
        state.vessel.latitude = 0.5;
        state.vessel.longitude = -73.0;
    }
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::Boostback, &ctx).await.unwrap();
    {
        let state = provider.state();
        assert_eq!(state.commands[0].get_attitude_hold(), Some(AttitudeHold::Off));
        assert_eq!(state.commands[0].get_rcs(), Some(false));
    }

    assert_eq!(phase.update(&ctx, ms(100), true).await.unwrap(), None);
    let direct = GeoCoordinate::new(0.5, -73.0).bearing_to(&config.launch_pad());
    assert_eq!(provider.last_pitch_and_heading(), Some((0.0, direct)));
    assert_eq!(provider.last_throttle(), Some(1.0));
    assert!(provider.state().propagated_to.is_empty());
}

#[tokio::test]
async fn test_boostback_throttles_down_near_pad() {
    let config = config();
    let provider = MockProvider::new();
    {
        let mut state = provider.state();
        state.body.rotational_speed = 0.0;
        state.vessel.latitude = PAD_LAT;
        state.vessel.longitude = -73.0;
        // short of the pad, between vessel and target
        state.surface_lat_lon = (PAD_LAT, PAD_LON + 0.05);
    }
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::Boostback, &ctx).await.unwrap();

    assert_eq!(phase.update(&ctx, ms(100), true).await.unwrap(), None);
    assert_eq!(provider.state().propagated_to.len(), 1);
    let throttle = provider.last_throttle().unwrap();
    assert!(throttle > 0.05 && throttle < 0.1, "throttle {throttle}");
    let (pitch, heading) = provider.last_pitch_and_heading().unwrap();
    assert_eq!(pitch, 0.0);
    assert!((heading - 270.0).abs() < 1.0, "heading {heading}");

    // overshooting the pad by ~1.3 km ends the burn
    provider.state().surface_lat_lon = (PAD_LAT, PAD_LON - 0.12);
    assert_eq!(phase.update(&ctx, ms(200), false).await.unwrap(), Some(PhaseId::Coast));
}

#[tokio::test]
async fn test_coast_is_terminal() {
    let config = config();
    let provider = MockProvider::new();
    let ctx = PhaseContext::new(&config, &provider);
    let mut phase = Phase::enter(PhaseId::Coast, &ctx).await.unwrap();
    {
        let state = provider.state();
        let entry = &state.commands[0];
        assert_eq!(entry.get_throttle(), Some(0.0));
        assert_eq!(entry.get_speed_mode(), Some(SpeedMode::Surface));
        assert_eq!(entry.get_brakes(), Some(true));
    }

    for tick in 1..=20 {
        let next = phase.update(&ctx, ms(tick * 100), tick % 10 == 0).await.unwrap();
        assert_eq!(next, None);
        assert_eq!(provider.last_throttle(), Some(0.0));
    }
}

#[tokio::test]
async fn test_stub_phases_do_nothing() {
    let config = config();
    let provider = MockProvider::new();
    let ctx = PhaseContext::new(&config, &provider);
    for id in [PhaseId::Entry, PhaseId::Landing, PhaseId::Balance] {
        let mut phase = Phase::enter(id, &ctx).await.unwrap();
        assert_eq!(phase.update(&ctx, ms(60_000), true).await.unwrap(), None);
    }
    let state = provider.state();
    assert!(state.commands.is_empty());
    assert_eq!(state.calls, 0);
}

#[tokio::test]
async fn test_provider_failure_surfaces() {
    let config = config();
    let provider = MockProvider::new();
    provider.state().fail_after = Some(0);
    let ctx = PhaseContext::new(&config, &provider);
    assert!(matches!(
        Phase::enter(PhaseId::Ignition, &ctx).await,
        Err(ProviderError::NoConnection)
    ));
}
