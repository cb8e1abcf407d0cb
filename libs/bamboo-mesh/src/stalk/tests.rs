//! # Stalk Builder Tests

use super::*;
use crate::random::{MidpointRandom, SeededRandom, SequenceRandom};
use approx::assert_abs_diff_eq;
use config::constants::STATIONS_PER_SEGMENT;
use tracing_test::traced_test;

const STRIDE: usize = STATIONS_PER_SEGMENT;

fn params(segments: u32, resolution: u32) -> StalkParameters {
    StalkParameters {
        segments,
        resolution,
        ..Default::default()
    }
}

/// Index of the vertex at (segment, radial step, station).
fn index(resolution: u32, segment: usize, step: usize, station: usize) -> u32 {
    (segment * STRIDE * resolution as usize + step * STRIDE + station) as u32
}

fn ring_radius(p: DVec3) -> f64 {
    (p.x * p.x + p.y * p.y).sqrt()
}

#[test]
fn test_counts_match_parameters() {
    for (segments, resolution) in [(1, 3), (1, 4), (2, 7), (5, 32), (3, 64)] {
        let builder = StalkMeshBuilder::new(params(segments, resolution)).unwrap();
        let mesh = builder.build(&mut SeededRandom::new(9));
        let expected = segments as usize * resolution as usize;
        assert_eq!(mesh.vertex_count(), expected * 11);
        assert_eq!(mesh.face_count(), expected * 10);
    }
}

#[test]
fn test_faces_reference_valid_distinct_vertices() {
    let builder = StalkMeshBuilder::new(StalkParameters::default()).unwrap();
    let mesh = builder.build(&mut SeededRandom::new(3));
    let count = mesh.vertex_count() as u32;

    for quad in mesh.faces() {
        for (k, &a) in quad.iter().enumerate() {
            assert!(a < count);
            for &b in &quad[k + 1..] {
                assert_ne!(a, b, "repeated index in {:?}", quad);
            }
        }
    }
    assert!(mesh.validate());
}

#[test]
fn test_all_vertices_finite() {
    let extreme = StalkParameters {
        segments: 50,
        resolution: 64,
        stalk_radius: 4.0,
        ridge_size: 1.1,
        waist_size: 0.8,
        height: 10.0,
        tilt: 3.0,
    };
    let mesh = StalkMeshBuilder::new(extreme)
        .unwrap()
        .build(&mut SeededRandom::new(5));
    assert!(mesh.vertices().iter().all(|v| v.is_finite()));
    assert!(mesh.validate());
}

#[test]
fn test_same_seed_is_bit_identical() {
    let builder = StalkMeshBuilder::new(params(4, 12)).unwrap();
    let a = builder.build(&mut SeededRandom::new(2024));
    let b = builder.build(&mut SeededRandom::new(2024));
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_differ() {
    let builder = StalkMeshBuilder::new(params(2, 8)).unwrap();
    let a = builder.build(&mut SeededRandom::new(1));
    let b = builder.build(&mut SeededRandom::new(2));
    assert_eq!(a.faces(), b.faces());
    assert_ne!(a.vertices(), b.vertices());
}

#[test]
fn test_zero_tilt_keeps_bases_on_axis() {
    let builder = StalkMeshBuilder::new(StalkParameters {
        tilt: 0.0,
        ..Default::default()
    })
    .unwrap();
    let (_, frames) = builder.build_with_frames(&mut MidpointRandom);

    assert_eq!(frames.len(), 5);
    for frame in &frames {
        assert_eq!(frame.origin.x, 0.0);
        assert_eq!(frame.origin.y, 0.0);
        assert_eq!(frame.tilt_degrees, 0.0);
    }
}

#[test]
fn test_zero_tilt_without_jitter_ignores_random_stream() {
    let params = StalkParameters {
        tilt: 0.0,
        ..Default::default()
    };
    let builder = StalkMeshBuilder::with_config(params, GeneratorConfig::without_jitter()).unwrap();
    let seeded = builder.build_with_frames(&mut SeededRandom::new(77));
    let midpoint = builder.build_with_frames(&mut MidpointRandom);

    assert_eq!(seeded, midpoint);
    assert!(seeded.1.iter().all(|frame| frame.origin.x == 0.0));
}

#[test]
fn test_segments_stack_from_node_top() {
    let builder = StalkMeshBuilder::new(StalkParameters {
        segments: 3,
        resolution: 4,
        tilt: 0.0,
        height: 5.0,
        ..Default::default()
    })
    .unwrap();
    let (mesh, frames) = builder.build_with_frames(&mut MidpointRandom);

    let step = 5.0 * NODE_TOP_FRACTION;
    for (k, frame) in frames.iter().enumerate() {
        assert_abs_diff_eq!(frame.origin.z, step * k as f64, epsilon = 1e-12);
        let first = mesh.vertex(index(4, k, 0, 0));
        assert_abs_diff_eq!(first.z, step * k as f64, epsilon = 1e-12);
    }
}

#[test]
fn test_station_heights_increase_along_each_strip() {
    let builder = StalkMeshBuilder::new(params(3, 6)).unwrap();
    let mesh = builder.build(&mut SeededRandom::new(11));

    for segment in 0..3 {
        for step in 0..6 {
            for station in 1..STRIDE {
                let below = mesh.vertex(index(6, segment, step, station - 1));
                let above = mesh.vertex(index(6, segment, step, station));
                assert!(above.z > below.z);
            }
        }
    }
}

#[test]
fn test_waist_toward_one_reduces_pinch() {
    let mut previous = 0.0;
    for waist_size in [0.5, 0.8, 0.85, 0.9, 0.95, 0.99] {
        let builder = StalkMeshBuilder::new(StalkParameters {
            waist_size,
            tilt: 0.0,
            ..params(1, 8)
        })
        .unwrap();
        let mesh = builder.build(&mut MidpointRandom);
        let pinch = ring_radius(mesh.vertex(index(8, 0, 0, 3)));

        assert!(pinch > previous, "pinch did not shrink at waist {waist_size}");
        assert!(pinch < 1.0);
        previous = pinch;
    }
}

#[test]
fn test_resolution_three_closes_ring() {
    let builder = StalkMeshBuilder::new(params(2, 3)).unwrap();
    let mesh = builder.build(&mut SeededRandom::new(0));

    assert_eq!(mesh.vertex_count(), 66);
    assert_eq!(mesh.face_count(), 60);
    assert!(mesh.validate());

    // Seam quads of the first segment join strip 2 back to strip 0
    assert_eq!(mesh.face(20), [22, 0, 1, 23]);
    assert_eq!(mesh.face(29), [31, 9, 10, 32]);
    // Second segment's seam is offset by one vertex block
    assert_eq!(mesh.face(50), [55, 33, 34, 56]);
}

#[test]
fn test_reference_stalk() {
    let params = StalkParameters {
        segments: 1,
        resolution: 4,
        stalk_radius: 1.0,
        ridge_size: 1.05,
        waist_size: 0.9,
        height: 5.0,
        tilt: 0.0,
    };
    let mesh = StalkMeshBuilder::new(params)
        .unwrap()
        .build(&mut MidpointRandom);

    assert_eq!(mesh.vertex_count(), 44);
    assert_eq!(mesh.face_count(), 40);

    for step in 0..4 {
        let angle = (90.0 * step as f64).to_radians();
        let base = mesh.vertex(index(4, 0, step, 0));
        assert_abs_diff_eq!(ring_radius(base), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(base.x, angle.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(base.y, angle.sin(), epsilon = 1e-12);
        assert_eq!(base.z, 0.0);

        for station in [3, 4] {
            let pinch = mesh.vertex(index(4, 0, step, station));
            assert_abs_diff_eq!(ring_radius(pinch), 0.81, epsilon = 1e-12);
        }
        for station in [2, 5] {
            let waist = mesh.vertex(index(4, 0, step, station));
            assert_abs_diff_eq!(ring_radius(waist), 0.9, epsilon = 1e-12);
        }
        for station in [8, 9] {
            let ridge = mesh.vertex(index(4, 0, step, station));
            assert_abs_diff_eq!(ring_radius(ridge), 1.05, epsilon = 1e-12);
        }
        let top = mesh.vertex(index(4, 0, step, 10));
        assert_abs_diff_eq!(ring_radius(top), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(top.z, 5.0, epsilon = 1e-12);
    }

    assert!(mesh.validate());
}

#[test]
fn test_positive_tilt_leans_cumulatively() {
    let builder = StalkMeshBuilder::new(StalkParameters {
        tilt: 2.0,
        ..params(4, 8)
    })
    .unwrap();
    let (mesh, frames) = builder.build_with_frames(&mut MidpointRandom);

    for (k, frame) in frames.iter().enumerate() {
        assert_abs_diff_eq!(frame.tilt_degrees, 2.0 * k as f64, epsilon = 1e-12);
    }
    // Each segment base drifts further along +X than the one below
    for pair in frames.windows(2) {
        assert!(pair[1].origin.x > pair[0].origin.x);
    }
    let (_, max) = mesh.bounding_box();
    assert!(max.x > 1.0);
}

#[test]
fn test_extreme_draws_reach_band_edges() {
    // Every draw at the top of its range
    let builder = StalkMeshBuilder::new(StalkParameters {
        tilt: 0.0,
        height: 5.0,
        ..params(2, 4)
    })
    .unwrap();
    let (mesh, frames) = builder.build_with_frames(&mut SequenceRandom::new([1.0]));

    let base = mesh.vertex(index(4, 0, 0, 0));
    assert_abs_diff_eq!(base.x, 1.02, epsilon = 1e-12);

    let expected_top = 5.0 * (NODE_TOP_FRACTION - RIDGE_HEIGHT_FRACTION / 20.0) * 1.01;
    assert_abs_diff_eq!(frames[1].origin.z, expected_top, epsilon = 1e-12);
}

#[test]
fn test_dyn_random_source() {
    let builder = StalkMeshBuilder::new(params(1, 5)).unwrap();
    let mut seeded = SeededRandom::new(8);
    let rng: &mut dyn RandomSource = &mut seeded;
    let mesh = builder.build(rng);
    assert_eq!(mesh.vertex_count(), 55);
}

#[test]
fn test_rejects_invalid_parameters() {
    let result = StalkMeshBuilder::new(params(1, 2));
    assert!(matches!(
        result,
        Err(MeshError::InvalidParameter {
            name: "resolution",
            ..
        })
    ));
}

#[test]
fn test_rejects_stalk_over_vertex_limit() {
    let config = GeneratorConfig::default().with_max_vertices(100);
    let result = StalkMeshBuilder::with_config(params(1, 10), config);
    assert_eq!(
        result.unwrap_err(),
        MeshError::TooManyVertices {
            count: 110,
            max: 100
        }
    );
}

#[test]
fn test_rejects_lattice_too_large_to_count() {
    let params = StalkParameters {
        segments: u32::MAX,
        resolution: u32::MAX,
        ..Default::default()
    };
    let result = StalkMeshBuilder::new(params);
    assert_eq!(
        result.unwrap_err(),
        MeshError::TooManyVertices {
            count: usize::MAX,
            max: config::constants::MAX_VERTICES
        }
    );
}

#[test]
fn test_rejects_invalid_config() {
    let config = GeneratorConfig {
        shape_jitter: -1.0,
        ..GeneratorConfig::default()
    };
    let result = StalkMeshBuilder::with_config(params(1, 4), config);
    assert!(matches!(result, Err(MeshError::Config(_))));
}

#[traced_test]
#[test]
fn test_build_is_logged() {
    let builder = StalkMeshBuilder::new(params(1, 4)).unwrap();
    builder.build(&mut MidpointRandom);
    assert!(logs_contain("Building bamboo stalk"));
    assert!(logs_contain("Bamboo stalk built"));
}
