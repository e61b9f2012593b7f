use intro_loader::ease::{clamp01, ease_in_out_cubic, ease_out_cubic, lerp};
use intro_loader::{LoaderState, Phase, Timeline};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn timeline() -> Timeline {
    Timeline { grid_ms: 1100.0, scaffold_ms: 900.0, letterform_ms: 1200.0, hold_ms: 500.0 }
}

#[test]
fn total_is_sum_of_phases() {
    assert!(approx_eq(timeline().total_ms(), 3700.0));
    assert_eq!(Timeline::default(), timeline());
}

#[test]
fn negative_elapsed_clamps_to_zero() {
    for t in [-1.0, -500.0, -1e9] {
        let p = timeline().progress(t);
        assert_eq!((p.grid, p.scaffold, p.letterform), (0.0, 0.0, 0.0), "t={t}");
    }
}

#[test]
fn elapsed_past_total_is_fully_progressed() {
    for t in [3700.0, 3701.0, 10_000.0] {
        let p = timeline().progress(t);
        assert_eq!((p.grid, p.scaffold, p.letterform), (1.0, 1.0, 1.0), "t={t}");
    }
}

#[test]
fn progress_is_monotonic() {
    let tl = timeline();
    let mut prev = tl.progress(-100.0);
    let mut t = -100.0;
    while t <= 4000.0 {
        let p = tl.progress(t);
        for phase in [Phase::Grid, Phase::Scaffold, Phase::Letterform] {
            assert!(p.get(phase) >= prev.get(phase), "{phase:?} went backwards at t={t}");
            assert!((0.0..=1.0).contains(&p.get(phase)));
        }
        prev = p;
        t += 7.5;
    }
}

#[test]
fn phase_boundaries_match_reference_timeline() {
    let tl = timeline();

    let p = tl.progress(0.0);
    assert_eq!(p.grid, 0.0);

    let p = tl.progress(1100.0);
    assert_eq!(p.grid, 1.0);
    assert_eq!(p.scaffold, 0.0);

    let p = tl.progress(2000.0);
    assert_eq!(p.scaffold, 1.0);
    assert_eq!(p.letterform, 0.0);

    let p = tl.progress(2600.0);
    assert!(approx_eq(p.letterform, 0.5));

    let p = tl.progress(3200.0);
    assert_eq!(p.letterform, 1.0);
}

#[test]
fn state_follows_elapsed_time() {
    let tl = timeline();
    assert_eq!(tl.state_at(0.0), LoaderState::Playing(Phase::Grid));
    assert_eq!(tl.state_at(1099.0), LoaderState::Playing(Phase::Grid));
    assert_eq!(tl.state_at(1100.0), LoaderState::Playing(Phase::Scaffold));
    assert_eq!(tl.state_at(2000.0), LoaderState::Playing(Phase::Letterform));
    assert_eq!(tl.state_at(3200.0), LoaderState::Holding);
    assert_eq!(tl.state_at(3699.9), LoaderState::Holding);
    assert_eq!(tl.state_at(3700.0), LoaderState::Completed);
}

#[test]
fn zero_length_phase_jumps_at_its_start() {
    let tl = Timeline { scaffold_ms: 0.0, ..timeline() };
    assert_eq!(tl.phase_progress(Phase::Scaffold, 1099.0), 0.0);
    assert_eq!(tl.phase_progress(Phase::Scaffold, 1100.0), 1.0);
    assert_eq!(tl.state_at(1100.0), LoaderState::Playing(Phase::Letterform));
}

#[test]
fn easing_endpoints_and_clamping() {
    for ease in [ease_out_cubic, ease_in_out_cubic] {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(1.0), 1.0);
        assert_eq!(ease(-3.0), 0.0);
        assert_eq!(ease(7.0), 1.0);
    }
    assert!(approx_eq(ease_in_out_cubic(0.5), 0.5));
    // Decelerating: ahead of linear everywhere inside the interval.
    assert!(ease_out_cubic(0.25) > 0.25);
    assert!(ease_in_out_cubic(0.25) < 0.25);
}

#[test]
fn clamp_and_lerp_reject_out_of_range() {
    assert_eq!(clamp01(f64::NAN), 0.0);
    assert_eq!(clamp01(1.5), 1.0);
    assert!(approx_eq(lerp(0.1, 0.5, 0.5), 0.3));
    assert_eq!(lerp(0.1, 0.5, 2.0), 0.5);
    assert_eq!(lerp(0.1, 0.5, -2.0), 0.1);
}
