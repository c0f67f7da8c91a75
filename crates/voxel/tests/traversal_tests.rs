//! Traversal behaviour tests
//!
//! Exercises the DDA walk through the public `VoxelGrid::trace` API against
//! hand-built scenes.

use glam::{IVec3, Vec3};
use voxel::*;

/// Ground plane of material 1 at y = 0
fn ground_plane() -> VoxelGrid {
    let mut grid = VoxelGrid::new();
    grid.fill_box(IVec3::new(0, 0, 0), IVec3::new(GRID_X - 1, 0, GRID_Z - 1), 1);
    grid
}

/// Directions spread over the sphere, skipping the exact axes
fn direction_fan() -> Vec<Vec3> {
    let mut dirs = Vec::new();
    for i in 0..12 {
        for j in 1..6 {
            let yaw = i as f32 * std::f32::consts::TAU / 12.0 + 0.1;
            let pitch = j as f32 * std::f32::consts::PI / 6.0 - std::f32::consts::FRAC_PI_2;
            dirs.push(
                Vec3::new(pitch.cos() * yaw.cos(), pitch.sin(), pitch.cos() * yaw.sin())
                    .normalize(),
            );
        }
    }
    dirs
}

#[test]
fn test_rays_missing_the_box() {
    let grid = ground_plane();

    let cases = vec![
        // Beside the grid on +x, aimed away
        (Vec3::new(30.0, 4.0, 4.0), Vec3::X),
        // Above the grid, aimed up
        (Vec3::new(12.0, 20.0, 12.0), Vec3::Y),
        // Parallel to x but outside the y slab
        (Vec3::new(-5.0, 17.0, 12.0), Vec3::X),
        // Behind the grid on -z, aimed diagonally away
        (Vec3::new(12.0, 8.0, -3.0), Vec3::new(0.3, 0.1, -1.0).normalize()),
        // Passes beside the box
        (Vec3::new(-5.0, 8.0, -5.0), Vec3::new(1.0, 0.0, -0.2).normalize()),
    ];

    for (origin, direction) in cases {
        let outcome = grid.trace(&Ray::new(origin, direction));
        assert_eq!(outcome, TraceOutcome::Outside, "origin {origin:?} dir {direction:?}");
        assert!(!outcome.entered_grid());
        assert!(!outcome.is_hit());
        assert_eq!(outcome.steps(), 0);
    }
}

#[test]
fn test_empty_grid_walk_visits_each_cell_once() {
    let grid = VoxelGrid::new();
    let origin = Vec3::new(11.3, 7.7, 12.1);

    for direction in direction_fan() {
        let mut debug = TraversalDebugState::new();
        let outcome = grid.trace_debug(&Ray::new(origin, direction), Some(&mut debug));

        assert!(outcome.entered_grid());
        assert!(!outcome.is_hit());
        assert_eq!(outcome.steps() as usize, debug.visited.len());
        assert!(outcome.steps() <= MAX_STEPS);

        // Start cell contains the origin
        assert_eq!(debug.visited[0], origin.floor().as_ivec3());

        for pair in debug.visited.windows(2) {
            let delta = (pair[1] - pair[0]).abs();
            assert_eq!(
                delta.x + delta.y + delta.z,
                1,
                "cells must be face neighbours: {:?} -> {:?}",
                pair[0],
                pair[1]
            );
        }

        let mut unique = debug.visited.clone();
        unique.sort_by_key(|c| (c.x, c.y, c.z));
        unique.dedup();
        assert_eq!(unique.len(), debug.visited.len(), "cell visited twice");

        // Last tested cell is on the boundary of the grid
        let last = *debug.visited.last().unwrap();
        let size = grid.size();
        assert!(
            last.x == 0
                || last.y == 0
                || last.z == 0
                || last.x == size.x - 1
                || last.y == size.y - 1
                || last.z == size.z - 1,
            "walk ended inside the grid at {last:?}"
        );
    }
}

#[test]
fn test_axis_aligned_walk_lengths() {
    let grid = VoxelGrid::new();

    let cases = vec![
        (Vec3::new(-1.0, 4.5, 4.5), Vec3::X, 24),
        (Vec3::new(4.5, 20.0, 4.5), Vec3::NEG_Y, 16),
        (Vec3::new(4.5, 4.5, 10.5), Vec3::Z, 14),
        (Vec3::new(4.5, 4.5, 10.5), Vec3::NEG_Z, 11),
    ];

    for (origin, direction, expected) in cases {
        let outcome = grid.trace(&Ray::new(origin, direction));
        assert_eq!(outcome, TraceOutcome::Miss { steps: expected }, "origin {origin:?}");
    }
}

#[test]
fn test_step_cap() {
    let grid = VoxelGrid::with_size(IVec3::new(400, 1, 1)).unwrap();
    let outcome = grid.trace(&Ray::new(Vec3::new(0.5, 0.5, 0.5), Vec3::X));
    assert_eq!(outcome, TraceOutcome::Miss { steps: MAX_STEPS });
}

#[test]
fn test_same_ray_same_outcome() {
    let mut grid = ground_plane();
    grid.fill_box(IVec3::new(8, 1, 8), IVec3::new(9, 5, 9), 2);

    let ray = Ray::new(
        Vec3::new(30.0, 8.5, 12.0),
        Vec3::new(-1.0, -0.35, -0.2).normalize(),
    );
    let first = grid.trace(&ray);
    for _ in 0..10 {
        assert_eq!(grid.trace(&ray), first);
    }
}

#[test]
fn test_t_max_never_decreases() {
    let grid = VoxelGrid::new();
    let origins = [
        Vec3::new(12.0, 8.0, 12.0),
        Vec3::new(0.25, 15.5, 23.75),
        Vec3::new(-6.0, 3.0, 30.0),
    ];

    for origin in origins {
        for direction in direction_fan() {
            let mut debug = TraversalDebugState::new();
            grid.trace_debug(&Ray::new(origin, direction), Some(&mut debug));

            for pair in debug.t_max_history.windows(2) {
                assert!(pair[1].x >= pair[0].x);
                assert!(pair[1].y >= pair[0].y);
                assert!(pair[1].z >= pair[0].z);
            }
        }
    }
}

#[test]
fn test_single_cell_hit_from_above() {
    let mut grid = VoxelGrid::new();
    grid.set(8, 0, 8, 1);

    let outcome = grid.trace(&Ray::new(Vec3::new(8.5, 5.0, 8.5), Vec3::NEG_Y));
    let TraceOutcome::Hit {
        material,
        normal,
        cell,
        ..
    } = outcome
    else {
        panic!("expected a hit, got {outcome:?}");
    };
    assert_eq!(material, 1);
    assert_eq!(cell, IVec3::new(8, 0, 8));
    assert_eq!(normal, Axis::PosY);
    assert_eq!(normal.as_vec3(), Vec3::new(0.0, 1.0, 0.0));

    // One cell above the target: entry cell, then one step into the target
    let outcome = grid.trace(&Ray::new(Vec3::new(8.5, 1.5, 8.5), Vec3::NEG_Y));
    assert_eq!(
        outcome,
        TraceOutcome::Hit {
            material: 1,
            normal: Axis::PosY,
            cell: IVec3::new(8, 0, 8),
            steps: 2,
        }
    );
}

#[test]
fn test_ground_plane_downward_rays() {
    let grid = ground_plane();

    for origin_y in [1.5, 2.5, 5.0, 7.5, 12.25] {
        for i in -4..=4 {
            for k in -4..=4 {
                let direction = Vec3::new(i as f32 * 0.2, -1.0, k as f32 * 0.2 + 0.01).normalize();
                let origin = Vec3::new(12.3, origin_y, 11.7);

                match grid.trace(&Ray::new(origin, direction)) {
                    TraceOutcome::Hit {
                        material,
                        normal,
                        cell,
                        ..
                    } => {
                        assert_eq!(material, 1);
                        assert_eq!(normal, Axis::PosY, "dir {direction:?}");
                        assert_eq!(cell.y, 0);
                    }
                    other => panic!("expected ground hit for {direction:?}, got {other:?}"),
                }
            }
        }
    }
}

#[test]
fn test_origin_on_face_boundary_enters() {
    let mut grid = VoxelGrid::new();

    let ray = Ray::new(Vec3::new(0.0, 4.5, 4.5), Vec3::X);
    assert_eq!(grid.trace(&ray), TraceOutcome::Miss { steps: 24 });

    grid.set(0, 4, 4, 3);
    assert_eq!(
        grid.trace(&ray),
        TraceOutcome::Hit {
            material: 3,
            normal: Axis::PosY,
            cell: IVec3::new(0, 4, 4),
            steps: 1,
        }
    );

    // Tiny cross components fall under the parallel threshold
    let ray = Ray::new(Vec3::new(0.0, 4.0, 4.0), Vec3::new(1.0, 1e-7, -1e-7));
    assert!(grid.trace(&ray).entered_grid());
}

#[test]
fn test_hit_through_side_face() {
    let mut grid = VoxelGrid::new();
    grid.set(5, 4, 4, 2);

    let outcome = grid.trace(&Ray::new(Vec3::new(-3.0, 4.5, 4.5), Vec3::X));
    assert_eq!(
        outcome,
        TraceOutcome::Hit {
            material: 2,
            normal: Axis::NegX,
            cell: IVec3::new(5, 4, 4),
            steps: 6,
        }
    );

    let outcome = grid.trace(&Ray::new(Vec3::new(30.0, 4.5, 4.5), Vec3::NEG_X));
    assert_eq!(
        outcome,
        TraceOutcome::Hit {
            material: 2,
            normal: Axis::PosX,
            cell: IVec3::new(5, 4, 4),
            steps: 19,
        }
    );
}
