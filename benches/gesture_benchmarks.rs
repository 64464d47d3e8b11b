//! Benchmarks for the per-frame gesture recognition path

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gesture_control::{
    angles::{finger_angles, joint_angle, FingerAngles},
    click_control::{ClickDispatcher, DebounceMode, NullClickSink},
    gesture::classify,
    landmarks::{HandLandmarks, INDEX_MCP, INDEX_PIP, INDEX_TIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP},
};
use opencv::core::Point2f;

fn place_finger(points: &mut [Point2f], mcp: usize, pip: usize, tip: usize, joint: Point2f, angle_deg: f32) {
    let radius = 0.08_f32;
    let rad = angle_deg.to_radians();
    points[pip] = joint;
    points[mcp] = Point2f::new(joint.x + radius, joint.y);
    points[tip] = Point2f::new(joint.x + radius * rad.cos(), joint.y + radius * rad.sin());
}

fn hand_with_angles(index_deg: f32, middle_deg: f32) -> HandLandmarks {
    let mut points = vec![Point2f::new(0.5, 0.5); 21];
    place_finger(
        &mut points,
        INDEX_MCP,
        INDEX_PIP,
        INDEX_TIP,
        Point2f::new(0.3, 0.5),
        index_deg,
    );
    place_finger(
        &mut points,
        MIDDLE_MCP,
        MIDDLE_PIP,
        MIDDLE_TIP,
        Point2f::new(0.6, 0.5),
        middle_deg,
    );
    HandLandmarks::from_points(points, 0.9).expect("valid landmark count")
}

fn benchmark_angle_computation(c: &mut Criterion) {
    let mut group = c.benchmark_group("angles");

    let base = Point2f::new(0.4, 0.5);
    let joint = Point2f::new(0.3, 0.5);
    let tip = Point2f::new(0.25, 0.42);

    group.bench_function("joint_angle", |b| {
        b.iter(|| black_box(joint_angle(black_box(base), black_box(joint), black_box(tip))));
    });

    let hand = hand_with_angles(150.0, 10.0);
    group.bench_function("finger_angles", |b| {
        b.iter(|| black_box(finger_angles(black_box(&hand))));
    });

    group.finish();
}

fn benchmark_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let cases = [
        ("left_click", FingerAngles { index: 150.0, middle: 10.0 }),
        ("right_click", FingerAngles { index: 10.0, middle: 150.0 }),
        ("no_gesture", FingerAngles { index: 90.0, middle: 90.0 }),
    ];

    for (name, angles) in cases {
        group.bench_with_input(BenchmarkId::new("classify", name), &angles, |b, &angles| {
            b.iter(|| black_box(classify(black_box(angles))));
        });
    }

    group.finish();
}

fn benchmark_frame_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_chain");

    // Sweep across both click gestures and the ambiguous middle ground
    let hands: Vec<HandLandmarks> = (0..100)
        .map(|i| {
            let index = 10.0 + (i as f32) * 1.6;
            let middle = 170.0 - (i as f32) * 1.6;
            hand_with_angles(index, middle)
        })
        .collect();

    group.bench_function("angles_and_classify_100", |b| {
        b.iter(|| {
            for hand in &hands {
                let angles = finger_angles(black_box(hand));
                black_box(classify(angles));
            }
        });
    });

    let mut dispatcher = ClickDispatcher::new(Box::new(NullClickSink), DebounceMode::EdgeTriggered);
    group.bench_function("classify_and_dispatch_100", |b| {
        b.iter(|| {
            for hand in &hands {
                let gesture = classify(finger_angles(hand));
                let _ = black_box(dispatcher.dispatch(gesture));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_angle_computation,
    benchmark_classification,
    benchmark_frame_chain
);
criterion_main!(benches);
