// Host-side tests for the network backdrop field.

use fx_core::constants::*;
use fx_core::*;
use glam::Vec2;

fn small_field(nodes: &[(Vec2, Vec2)]) -> NetworkField {
    let mut field = NetworkField::new(
        NetworkConfig {
            node_count: nodes.len(),
            ..NetworkConfig::default()
        },
        Viewport::new(800.0, 600.0),
        1,
    )
    .unwrap();
    for (node, &(pos, vel)) in field.nodes_mut().iter_mut().zip(nodes) {
        node.pos = pos;
        node.vel = vel;
    }
    field
}

fn in_bounds(field: &NetworkField) -> bool {
    let vp = field.viewport();
    field
        .nodes()
        .iter()
        .all(|n| n.pos.x >= 0.0 && n.pos.x <= vp.width && n.pos.y >= 0.0 && n.pos.y <= vp.height)
}

#[test]
fn nodes_stay_inside_viewport() {
    let mut field = NetworkField::with_defaults(Viewport::new(320.0, 240.0), 5).unwrap();
    assert_eq!(field.nodes().len(), NETWORK_NODE_COUNT);
    for _ in 0..5000 {
        field.step();
        assert!(in_bounds(&field));
    }
}

#[test]
fn spawned_nodes_respect_config_ranges() {
    let field = NetworkField::with_defaults(Viewport::new(800.0, 600.0), 8).unwrap();
    assert!(in_bounds(&field));
    for n in field.nodes() {
        assert!(n.vel.x.abs() <= NETWORK_MAX_SPEED && n.vel.y.abs() <= NETWORK_MAX_SPEED);
        assert!(n.radius >= NETWORK_RADIUS_MIN && n.radius < NETWORK_RADIUS_MAX);
    }
}

#[test]
fn node_bounces_off_right_edge() {
    let mut node = NetworkNode {
        pos: Vec2::new(799.9, 300.0),
        vel: Vec2::new(0.25, 0.0),
        radius: 2.0,
    };
    node.update(Viewport::new(800.0, 600.0));
    assert_eq!(node.pos.x, 800.0);
    assert_eq!(node.vel.x, -0.25);
    node.update(Viewport::new(800.0, 600.0));
    assert!(node.pos.x < 800.0);
}

#[test]
fn edge_opacity_falls_off_linearly() {
    let cd = NETWORK_CONNECTION_DISTANCE;
    assert_eq!(edge_opacity(0.0, cd), Some(1.0));
    assert_eq!(edge_opacity(75.0, cd), Some(0.5));
    assert_eq!(edge_opacity(cd, cd), None);
    assert_eq!(edge_opacity(cd + 1.0, cd), None);

    let mut prev = f32::MAX;
    for d in 0..150 {
        let o = edge_opacity(d as f32, cd).expect("inside threshold");
        assert!(o < prev && o > 0.0);
        prev = o;
    }
}

#[test]
fn nodes_exactly_at_threshold_are_not_connected() {
    let mut field = small_field(&[
        (Vec2::new(100.0, 100.0), Vec2::ZERO),
        (Vec2::new(250.0, 100.0), Vec2::ZERO),
    ]);
    let mut surface = RecordingSurface::new();
    field.tick(&mut surface);
    assert_eq!(surface.lines().count(), 0);
    assert_eq!(surface.circles().count(), 2);
}

#[test]
fn close_nodes_are_connected_with_faint_edge() {
    let mut field = small_field(&[
        (Vec2::new(100.0, 100.0), Vec2::ZERO),
        (Vec2::new(249.0, 100.0), Vec2::ZERO),
    ]);
    let mut surface = RecordingSurface::new();
    field.tick(&mut surface);
    let lines: Vec<_> = surface.lines().cloned().collect();
    assert_eq!(lines.len(), 1);
    match &lines[0] {
        DrawOp::Line { width, color, .. } => {
            assert_eq!(*width, NETWORK_EDGE_WIDTH);
            assert_eq!([color.r, color.g, color.b], NETWORK_EDGE_RGB);
            assert!((color.a - 1.0 / 150.0).abs() < 1e-4);
        }
        other => panic!("unexpected op {other:?}"),
    }
}

#[test]
fn edges_use_positions_from_before_the_frame_moves() {
    let a = Vec2::new(300.0, 300.0);
    let b = Vec2::new(400.0, 300.0);
    let mut field = small_field(&[(a, Vec2::new(-0.25, 0.0)), (b, Vec2::new(0.25, 0.0))]);
    let mut surface = RecordingSurface::new();
    field.tick(&mut surface);

    assert!(matches!(surface.ops.first(), Some(DrawOp::Clear { .. })));
    match surface.lines().next() {
        Some(DrawOp::Line { from, to, .. }) => {
            assert_eq!(*from, a);
            assert_eq!(*to, b);
        }
        other => panic!("expected one edge, got {other:?}"),
    }
    assert_eq!(field.nodes()[0].pos, Vec2::new(299.75, 300.0));
    assert_eq!(field.nodes()[1].pos, Vec2::new(400.25, 300.0));
}

#[test]
fn grid_and_brute_force_find_the_same_edges() {
    let mut field = NetworkField::new(
        NetworkConfig {
            node_count: 300,
            ..NetworkConfig::default()
        },
        Viewport::new(1200.0, 800.0),
        77,
    )
    .unwrap();
    assert_eq!(field.strategy(), EdgeStrategy::Grid);

    for _ in 0..5 {
        let pairs = |edges: Vec<Edge>| {
            let mut v: Vec<(usize, usize)> = edges.iter().map(|e| (e.a, e.b)).collect();
            v.sort_unstable();
            v
        };
        let brute = pairs(field.edges_with(EdgeStrategy::BruteForce));
        let grid = pairs(field.edges_with(EdgeStrategy::Grid));
        assert!(!brute.is_empty());
        assert_eq!(brute, grid);
        for _ in 0..50 {
            field.step();
        }
    }
}

#[test]
fn default_field_uses_brute_force() {
    let field = NetworkField::with_defaults(Viewport::default(), 0).unwrap();
    assert_eq!(field.strategy(), EdgeStrategy::BruteForce);
}

#[test]
fn shrinking_viewport_pulls_nodes_back_in() {
    let mut field = NetworkField::with_defaults(Viewport::new(1200.0, 800.0), 13).unwrap();
    field.resize(Viewport::new(400.0, 300.0));
    assert_eq!(field.nodes().len(), NETWORK_NODE_COUNT);
    field.step();
    assert!(in_bounds(&field));
    for _ in 0..200 {
        field.step();
        assert!(in_bounds(&field));
    }
}

#[test]
fn grid_neighbours_cover_adjacent_cells() {
    let mut grid = grid::SpatialGrid::new(150.0);
    grid.rebuild([
        Vec2::new(10.0, 10.0),
        Vec2::new(160.0, 10.0),
        Vec2::new(460.0, 10.0),
    ]);
    let mut near: Vec<usize> = grid.neighbours(Vec2::new(10.0, 10.0)).collect();
    near.sort_unstable();
    assert_eq!(near, vec![0, 1]);
    assert_eq!(grid.occupied_cells(), 3);
}

#[test]
fn edge_color_renders_as_css() {
    let config = NetworkConfig::default();
    assert_eq!(config.edge_color(0.5).to_css(), "rgba(50, 50, 50, 0.5)");
    assert_eq!(config.edge_color(1.5), Rgba::new(50, 50, 50, 1.0));
    assert_eq!(config.edge_color(-0.2).a, 0.0);
    assert_eq!(NETWORK_NODE_COLOR.to_css(), "#333333");
    assert_eq!(VORTEX_COLOR_A.to_css(), "#ff2a2a");
    assert_eq!(VORTEX_TRAIL_OVERLAY.to_css(), "rgba(2, 2, 5, 0.3)");
}
