//! Drifting-node "neural network" backdrop.

use crate::config::NetworkConfig;
use crate::error::Result;
use crate::field::Field;
use crate::grid::SpatialGrid;
use crate::surface::Surface;
use crate::viewport::Viewport;
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct NetworkNode {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl NetworkNode {
    fn spawn(config: &NetworkConfig, viewport: Viewport, rng: &mut impl Rng) -> Self {
        Self {
            pos: Vec2::new(
                rng.gen_range(0.0..viewport.width),
                rng.gen_range(0.0..viewport.height),
            ),
            vel: Vec2::new(
                rng.gen_range(-config.max_speed..config.max_speed),
                rng.gen_range(-config.max_speed..config.max_speed),
            ),
            radius: rng.gen_range(config.radius_min..config.radius_max),
        }
    }

    /// Drift by one velocity step and bounce off the viewport edges.
    ///
    /// The position is clamped onto the edge it crossed and the velocity on
    /// that axis is pointed back inwards, so a node stranded outside by a
    /// shrinking resize returns on its next step.
    pub fn update(&mut self, viewport: Viewport) {
        self.pos += self.vel;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = self.vel.x.abs();
        } else if self.pos.x > viewport.width {
            self.pos.x = viewport.width;
            self.vel.x = -self.vel.x.abs();
        }
        if self.pos.y < 0.0 {
            self.pos.y = 0.0;
            self.vel.y = self.vel.y.abs();
        } else if self.pos.y > viewport.height {
            self.pos.y = viewport.height;
            self.vel.y = -self.vel.y.abs();
        }
    }
}

/// Opacity of a proximity edge, or `None` when the pair is too far apart.
///
/// Falls off linearly from 1 at distance 0 to 0 at `connection_distance`.
#[inline]
pub fn edge_opacity(distance: f32, connection_distance: f32) -> Option<f32> {
    (distance < connection_distance).then(|| 1.0 - distance / connection_distance)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    /// Lower node index.
    pub a: usize,
    pub b: usize,
    pub from: Vec2,
    pub to: Vec2,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeStrategy {
    /// Check every unordered pair.
    BruteForce,
    /// Only check pairs in neighbouring grid cells.
    Grid,
}

fn push_edge(out: &mut Vec<Edge>, nodes: &[NetworkNode], a: usize, b: usize, cd: f32) {
    let (from, to) = (nodes[a].pos, nodes[b].pos);
    if let Some(opacity) = edge_opacity(from.distance(to), cd) {
        out.push(Edge {
            a,
            b,
            from,
            to,
            opacity,
        });
    }
}

fn brute_force_edges(nodes: &[NetworkNode], cd: f32, out: &mut Vec<Edge>) {
    for a in 0..nodes.len() {
        for b in (a + 1)..nodes.len() {
            push_edge(out, nodes, a, b, cd);
        }
    }
}

fn grid_edges(nodes: &[NetworkNode], cd: f32, grid: &mut SpatialGrid, out: &mut Vec<Edge>) {
    grid.rebuild(nodes.iter().map(|n| n.pos));
    for (a, node) in nodes.iter().enumerate() {
        for b in grid.neighbours(node.pos) {
            if b > a {
                push_edge(out, nodes, a, b, cd);
            }
        }
    }
}

pub struct NetworkField {
    pub config: NetworkConfig,
    viewport: Viewport,
    nodes: Vec<NetworkNode>,
    grid: SpatialGrid,
    edges: Vec<Edge>,
    frames: u64,
}

impl NetworkField {
    pub fn new(config: NetworkConfig, viewport: Viewport, seed: u64) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let nodes = (0..config.node_count)
            .map(|_| NetworkNode::spawn(&config, viewport, &mut rng))
            .collect::<Vec<_>>();
        let grid = SpatialGrid::new(config.connection_distance);
        log::debug!(
            "[network] nodes={} connection_distance={} strategy={:?}",
            nodes.len(),
            config.connection_distance,
            Self::strategy_for(&config)
        );
        Ok(Self {
            config,
            viewport,
            nodes,
            grid,
            edges: Vec::new(),
            frames: 0,
        })
    }

    pub fn with_defaults(viewport: Viewport, seed: u64) -> Result<Self> {
        Self::new(NetworkConfig::default(), viewport, seed)
    }

    fn strategy_for(config: &NetworkConfig) -> EdgeStrategy {
        if config.node_count > config.grid_threshold {
            EdgeStrategy::Grid
        } else {
            EdgeStrategy::BruteForce
        }
    }

    pub fn strategy(&self) -> EdgeStrategy {
        Self::strategy_for(&self.config)
    }

    pub fn nodes(&self) -> &[NetworkNode] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [NetworkNode] {
        &mut self.nodes
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Edges for the current positions using an explicit strategy.
    pub fn edges_with(&mut self, strategy: EdgeStrategy) -> Vec<Edge> {
        let mut out = Vec::new();
        self.collect_edges(strategy, &mut out);
        out
    }

    fn collect_edges(&mut self, strategy: EdgeStrategy, out: &mut Vec<Edge>) {
        out.clear();
        let cd = self.config.connection_distance;
        match strategy {
            EdgeStrategy::BruteForce => brute_force_edges(&self.nodes, cd, out),
            EdgeStrategy::Grid => grid_edges(&self.nodes, cd, &mut self.grid, out),
        }
    }

    /// Advance every node once without drawing.
    pub fn step(&mut self) {
        let viewport = self.viewport;
        for node in &mut self.nodes {
            node.update(viewport);
        }
        self.frames += 1;
    }
}

impl Field for NetworkField {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn resize(&mut self, viewport: Viewport) {
        log::debug!("[network] resize {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
    }

    fn tick(&mut self, surface: &mut dyn Surface) {
        surface.clear(Vec2::ZERO, self.viewport.size());

        // Edges always use positions from before this frame's moves.
        let mut edges = std::mem::take(&mut self.edges);
        self.collect_edges(self.strategy(), &mut edges);
        for e in &edges {
            surface.stroke_line(
                e.from,
                e.to,
                self.config.edge_width,
                self.config.edge_color(e.opacity),
            );
        }
        self.edges = edges;

        self.step();
        for node in &self.nodes {
            surface.fill_circle(node.pos, node.radius, self.config.node_color);
        }
    }
}
