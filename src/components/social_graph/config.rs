use super::types::Rotation;

pub const NODE_COUNT: usize = 50;
pub const SPHERE_RADIUS: f64 = 150.0;
pub const LINK_DISTANCE: f64 = 70.0;
pub const MAX_LINKS: usize = 6;
pub const FOCAL_LENGTH: f64 = 400.0;
pub const AUTO_ROTATE: Rotation = Rotation::new(0.001, 0.002);
pub const DRAG_SENSITIVITY: f64 = 0.01;
pub const NODE_SIZE: f64 = 6.0;
pub const HIT_RADIUS: f64 = 8.0;
pub const HIT_PADDING: f64 = 10.0;
pub const GLOW_DEPTH: f64 = -50.0;

/// Tunables for generation, motion, drawing and picking.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	pub node_count: usize,
	pub sphere_radius: f64,
	/// Nodes strictly closer than this are linked.
	pub link_distance: f64,
	/// Out-degree cap, applied on the source side only.
	pub max_links: usize,
	pub focal_length: f64,
	/// Added to the rotation on every idle tick.
	pub auto_rotate: Rotation,
	/// Radians per pixel of pointer drag.
	pub drag_sensitivity: f64,
	pub node_size: f64,
	pub hit_radius: f64,
	pub hit_padding: f64,
	/// Nodes whose rotated z exceeds this get the glow outline.
	pub glow_depth: f64,
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			node_count: NODE_COUNT,
			sphere_radius: SPHERE_RADIUS,
			link_distance: LINK_DISTANCE,
			max_links: MAX_LINKS,
			focal_length: FOCAL_LENGTH,
			auto_rotate: AUTO_ROTATE,
			drag_sensitivity: DRAG_SENSITIVITY,
			node_size: NODE_SIZE,
			hit_radius: HIT_RADIUS,
			hit_padding: HIT_PADDING,
			glow_depth: GLOW_DEPTH,
		}
	}
}
