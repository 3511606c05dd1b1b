use super::types::{Node, Point3, Rotation};

/// A node as seen this frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProjectedPoint {
	pub x: f64,
	pub y: f64,
	/// Perspective scale; multiplies sizes drawn at this point.
	pub scale: f64,
	/// Rotated z. Larger is nearer the viewer.
	pub depth: f64,
}

/// Rotate around Y by yaw, then around X by pitch.
pub fn rotate(p: Point3, rotation: Rotation) -> Point3 {
	let (sin_y, cos_y) = rotation.yaw.sin_cos();
	let x1 = p.x * cos_y - p.z * sin_y;
	let z1 = p.z * cos_y + p.x * sin_y;

	let (sin_x, cos_x) = rotation.pitch.sin_cos();
	let y2 = p.y * cos_x - z1 * sin_x;
	let z2 = z1 * cos_x + p.y * sin_x;

	Point3::new(x1, y2, z2)
}

/// Perspective-project `p` onto the screen around `center`.
///
/// Points at or behind `focal_length` in z are outside the view frustum;
/// callers keep the sphere radius below the focal length.
pub fn project(p: Point3, rotation: Rotation, center: (f64, f64), focal_length: f64) -> ProjectedPoint {
	let r = rotate(p, rotation);
	let scale = focal_length / (focal_length - r.z);
	ProjectedPoint {
		x: r.x * scale + center.0,
		y: r.y * scale + center.1,
		scale,
		depth: r.z,
	}
}

/// Projection of every node for one frame.
#[derive(Clone, Debug, Default)]
pub struct Frame {
	/// Indexed by node index.
	pub points: Vec<ProjectedPoint>,
	/// Node indices back to front (ascending depth). Ties keep node order.
	pub order: Vec<usize>,
}

impl Frame {
	pub fn build(nodes: &[Node], rotation: Rotation, center: (f64, f64), focal_length: f64) -> Self {
		let points: Vec<ProjectedPoint> = nodes
			.iter()
			.map(|n| project(n.position, rotation, center, focal_length))
			.collect();
		let mut order: Vec<usize> = (0..points.len()).collect();
		// `sort_by` is stable.
		order.sort_by(|&a, &b| points[a].depth.total_cmp(&points[b].depth));
		Self { points, order }
	}

	pub fn point(&self, index: usize) -> Option<&ProjectedPoint> {
		self.points.get(index)
	}

	/// Paint order: farthest first.
	pub fn back_to_front(&self) -> impl Iterator<Item = (usize, &ProjectedPoint)> {
		self.order.iter().map(|&i| (i, &self.points[i]))
	}

	/// Pick order: nearest first.
	pub fn front_to_back(&self) -> impl Iterator<Item = (usize, &ProjectedPoint)> {
		self.order.iter().rev().map(|&i| (i, &self.points[i]))
	}
}

#[cfg(test)]
mod tests {
	use std::f64::consts::{FRAC_PI_2, PI};

	use super::*;
	use crate::components::social_graph::config::GraphConfig;
	use crate::components::social_graph::sphere::generate_nodes;

	const EPS: f64 = 1e-9;

	fn node_at(position: Point3) -> Node {
		Node {
			position,
			id: String::new(),
			label: String::new(),
			color: String::new(),
			connections: Vec::new(),
		}
	}

	fn assert_close(a: f64, b: f64) {
		assert!((a - b).abs() < EPS, "{} != {}", a, b);
	}

	#[test]
	fn identity_rotation_keeps_point() {
		let p = Point3::new(1.0, 2.0, 3.0);
		assert_eq!(rotate(p, Rotation::default()), p);
	}

	#[test]
	fn quarter_yaw_swings_x_into_z() {
		let r = rotate(Point3::new(1.0, 0.0, 0.0), Rotation::new(FRAC_PI_2, 0.0));
		assert_close(r.x, 0.0);
		assert_close(r.z, 1.0);
	}

	#[test]
	fn quarter_pitch_swings_y_into_z() {
		let r = rotate(Point3::new(0.0, 1.0, 0.0), Rotation::new(0.0, FRAC_PI_2));
		assert_close(r.y, 0.0);
		assert_close(r.z, 1.0);
	}

	#[test]
	fn rotation_preserves_length() {
		let p = Point3::new(40.0, -90.0, 110.0);
		let r = rotate(p, Rotation::new(0.7, -2.3));
		assert_close(r.distance(&Point3::default()), p.distance(&Point3::default()));
	}

	#[test]
	fn full_turn_reproduces_projection() {
		let nodes = generate_nodes(&GraphConfig::default(), |_| String::new());
		let base = Rotation::new(0.3, -0.8);
		let turned = base + Rotation::new(2.0 * PI, 2.0 * PI);
		let a = Frame::build(&nodes, base, (400.0, 300.0), 400.0);
		let b = Frame::build(&nodes, turned, (400.0, 300.0), 400.0);
		for (p, q) in a.points.iter().zip(&b.points) {
			assert!((p.x - q.x).abs() < 1e-6);
			assert!((p.y - q.y).abs() < 1e-6);
			assert!((p.scale - q.scale).abs() < 1e-9);
		}
	}

	#[test]
	fn perspective_scales_with_depth() {
		let rot = Rotation::default();
		let near = project(Point3::new(10.0, 10.0, 100.0), rot, (0.0, 0.0), 400.0);
		let plane = project(Point3::new(10.0, 10.0, 0.0), rot, (0.0, 0.0), 400.0);
		let far = project(Point3::new(10.0, 10.0, -100.0), rot, (0.0, 0.0), 400.0);
		assert_close(near.scale, 400.0 / 300.0);
		assert_close(plane.scale, 1.0);
		assert_close(far.scale, 400.0 / 500.0);
		assert_close(plane.x, 10.0);
		assert!(near.x > plane.x && plane.x > far.x);
	}

	#[test]
	fn projection_is_centred() {
		let p = project(Point3::new(5.0, -5.0, 0.0), Rotation::default(), (200.0, 100.0), 400.0);
		assert_close(p.x, 205.0);
		assert_close(p.y, 95.0);
	}

	#[test]
	fn order_is_ascending_depth() {
		let nodes = generate_nodes(&GraphConfig::default(), |_| String::new());
		let frame = Frame::build(&nodes, Rotation::new(1.1, 0.4), (0.0, 0.0), 400.0);
		assert_eq!(frame.order.len(), nodes.len());
		let depths: Vec<f64> = frame.back_to_front().map(|(_, p)| p.depth).collect();
		assert!(depths.windows(2).all(|w| w[0] <= w[1]));
	}

	#[test]
	fn ties_keep_node_order() {
		let nodes = vec![
			node_at(Point3::new(0.0, 0.0, 5.0)),
			node_at(Point3::new(1.0, 0.0, 0.0)),
			node_at(Point3::new(2.0, 0.0, 0.0)),
			node_at(Point3::new(0.0, 0.0, -5.0)),
			node_at(Point3::new(3.0, 0.0, 0.0)),
		];
		let frame = Frame::build(&nodes, Rotation::default(), (0.0, 0.0), 400.0);
		assert_eq!(frame.order, vec![3, 1, 2, 4, 0]);
		let picked: Vec<usize> = frame.front_to_back().map(|(i, _)| i).collect();
		assert_eq!(picked, vec![0, 4, 2, 1, 3]);
	}
}
