use super::*;
use crate::foundation::core::Rgb8;

const GRAY: Rgb8 = Rgb8::new(128, 128, 128);
const RED: Rgb8 = Rgb8::new(255, 0, 0);
const CYAN: Rgb8 = Rgb8::new(60, 160, 255);

fn frame(time: &str, width: u32, height: u32, pixels: &[Rgb8]) -> Frame {
    let mut data = Vec::with_capacity(pixels.len() * 3);
    for px in pixels {
        data.extend_from_slice(&[px.r, px.g, px.b]);
    }
    Frame {
        time: time.to_string(),
        raster: Raster::new(width, height, data).unwrap(),
    }
}

#[test]
fn empty_window_yields_no_composite() {
    assert!(composite(&[]).unwrap().is_none());
}

#[test]
fn single_frame_composites_unchanged() {
    let f = frame("08:00", 2, 1, &[RED, GRAY]);
    let comp = composite(std::slice::from_ref(&f)).unwrap().unwrap();
    assert_eq!(comp.raster(), &f.raster);
    assert_eq!(comp.times(), ["08:00"]);
    assert_eq!(comp.window_start(), "08:00");
    assert_eq!(comp.window_end(), "08:00");
}

#[test]
fn first_writer_wins_across_frames() {
    let f0 = frame("08:00", 2, 1, &[RED, GRAY]);
    let f1 = frame("08:06", 2, 1, &[GRAY, RED]);
    let comp = composite(&[f0, f1]).unwrap().unwrap();

    // Pixel 0 keeps frame 0's red even though frame 1 shows gray there;
    // pixel 1 picks up frame 1's red since frame 0 had gray.
    assert_eq!(comp.raster().sample(0, 0), Some(RED));
    assert_eq!(comp.raster().sample(1, 0), Some(RED));
    assert_eq!(comp.times(), ["08:00", "08:06"]);
}

#[test]
fn earlier_rain_color_is_never_overwritten() {
    let f0 = frame("08:00", 1, 1, &[CYAN]);
    let f1 = frame("08:06", 1, 1, &[RED]);
    let comp = composite(&[f0, f1]).unwrap().unwrap();
    assert_eq!(comp.raster().sample(0, 0), Some(CYAN));
}

#[test]
fn window_labels_span_first_to_last() {
    let frames = [
        frame("07:48", 1, 1, &[GRAY]),
        frame("07:54", 1, 1, &[GRAY]),
        frame("08:00", 1, 1, &[GRAY]),
    ];
    let comp = composite(&frames).unwrap().unwrap();
    assert_eq!(comp.window_start(), "07:48");
    assert_eq!(comp.window_end(), "08:00");
}

#[test]
fn mismatched_frame_dimensions_fail() {
    let f0 = frame("08:00", 2, 1, &[GRAY, GRAY]);
    let f1 = frame("08:06", 1, 2, &[GRAY, GRAY]);
    let err = composite(&[f0, f1]).unwrap_err();
    assert!(err.to_string().contains("raster error:"));
}
