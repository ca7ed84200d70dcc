use super::*;

use crate::classify::IntensityTier;
use crate::foundation::core::Rgb8;
use crate::geo::GeoPoint;

const GRAY: Rgb8 = Rgb8::new(128, 128, 128);
const RED: Rgb8 = Rgb8::new(255, 0, 0);

fn gray_frame(time: &str, width: u32, height: u32) -> Frame {
    Frame {
        time: time.to_string(),
        raster: crate::foundation::core::Raster::filled(width, height, GRAY),
    }
}

/// Two 4x4 gray frames; the second one shows a heavy cell at pixel (2, 2).
fn storm_window() -> Vec<Frame> {
    let mut late = gray_frame("08:06", 4, 4);
    late.raster.put(2, 2, RED);
    vec![gray_frame("08:00", 4, 4), late]
}

/// Bounds chosen so one geographic degree maps onto one pixel of a 4x4
/// raster: (lat 4, lon 0) lands on pixel (0, 0) and (lat 1, lon 3) on (3, 3).
fn unit_bounds() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 4.0, 4.0).unwrap()
}

fn diagonal_route(id: &str) -> Route {
    Route {
        id: id.to_string(),
        from: GeoPoint { lat: 4.0, lon: 0.0 },
        to: GeoPoint { lat: 1.0, lon: 3.0 },
    }
}

fn dry_route(id: &str) -> Route {
    Route {
        id: id.to_string(),
        from: GeoPoint { lat: 4.0, lon: 0.0 },
        to: GeoPoint { lat: 4.0, lon: 3.0 },
    }
}

#[test]
fn storm_cell_on_the_route_is_detected_end_to_end() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let report = check_routes(
        &storm_window(),
        &[diagonal_route("commute")],
        unit_bounds(),
        &EvalThreading::default(),
    )
    .unwrap()
    .unwrap();

    assert_eq!(report.composite.raster().sample(2, 2), Some(RED));
    let verdict = &report.outcomes[0].verdict;
    assert!(verdict.will_rain);
    assert_eq!(verdict.intensity, IntensityTier::Heavy);
    assert!(verdict.rain_pixel_count >= 1);
    assert_eq!(verdict.sample_count, 4);
    assert_eq!(verdict.window_start, "08:00");
    assert_eq!(verdict.window_end, "08:06");
}

#[test]
fn route_missing_the_cell_stays_dry() {
    let report = check_routes(
        &storm_window(),
        &[dry_route("northern")],
        unit_bounds(),
        &EvalThreading::default(),
    )
    .unwrap()
    .unwrap();

    let verdict = &report.outcomes[0].verdict;
    assert!(!verdict.will_rain);
    assert_eq!(verdict.intensity, IntensityTier::None);
    assert_eq!(verdict.rain_ratio, 0.0);
}

#[test]
fn route_fully_off_raster_is_inconclusive() {
    let far = Route {
        id: "offshore".to_string(),
        from: GeoPoint {
            lat: -30.0,
            lon: -30.0,
        },
        to: GeoPoint {
            lat: -20.0,
            lon: -30.0,
        },
    };
    let report = check_routes(
        &storm_window(),
        &[far],
        unit_bounds(),
        &EvalThreading::default(),
    )
    .unwrap()
    .unwrap();

    let verdict = &report.outcomes[0].verdict;
    assert!(!verdict.will_rain);
    assert_eq!(verdict.sample_count, 0);
    assert_eq!(verdict.rain_ratio, 0.0);
}

#[test]
fn empty_window_reports_nothing() {
    let report = check_routes(
        &[],
        &[diagonal_route("commute")],
        unit_bounds(),
        &EvalThreading::default(),
    )
    .unwrap();
    assert!(report.is_none());
}

#[test]
fn malformed_bounds_fail_fast() {
    let bounds = BoundingBox {
        lat_min: 4.0,
        lon_min: 0.0,
        lat_max: 0.0,
        lon_max: 4.0,
    };
    let err = check_routes(
        &storm_window(),
        &[diagonal_route("commute")],
        bounds,
        &EvalThreading::default(),
    )
    .unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn zero_worker_threads_are_rejected() {
    let threading = EvalThreading {
        parallel: true,
        threads: Some(0),
    };
    let err = check_routes(
        &storm_window(),
        &[diagonal_route("commute")],
        unit_bounds(),
        &threading,
    )
    .unwrap_err();
    assert!(err.to_string().contains("validation error:"));
}

#[test]
fn repeated_evaluation_of_one_composite_is_identical() {
    let comp = crate::composite::composite(&storm_window()).unwrap().unwrap();
    let route = diagonal_route("commute");
    let bounds = unit_bounds();

    let first = evaluate_route(&comp, &route, bounds).unwrap();
    let second = evaluate_route(&comp, &route, bounds).unwrap();
    assert_eq!(first, second);
}

#[test]
fn parallel_and_sequential_outcomes_match() {
    let routes = vec![
        diagonal_route("a"),
        dry_route("b"),
        diagonal_route("c"),
        dry_route("d"),
    ];

    let sequential = check_routes(
        &storm_window(),
        &routes,
        unit_bounds(),
        &EvalThreading::default(),
    )
    .unwrap()
    .unwrap();
    let parallel = check_routes(
        &storm_window(),
        &routes,
        unit_bounds(),
        &EvalThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap()
    .unwrap();

    assert_eq!(sequential.outcomes, parallel.outcomes);
}
