use std::ops::Add;

/// A position in model space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Point3 {
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	pub fn distance(&self, other: &Point3) -> f64 {
		let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
		(dx * dx + dy * dy + dz * dz).sqrt()
	}
}

/// A user on the sphere. `connections` are indices into the node list,
/// directed from this node, without duplicates.
#[derive(Clone, Debug)]
pub struct Node {
	pub position: Point3,
	pub id: String,
	pub label: String,
	pub color: String,
	pub connections: Vec<usize>,
}

/// Yaw turns around the Y axis, pitch around the X axis. Radians.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rotation {
	pub yaw: f64,
	pub pitch: f64,
}

impl Rotation {
	pub const fn new(yaw: f64, pitch: f64) -> Self {
		Self { yaw, pitch }
	}
}

impl Add for Rotation {
	type Output = Rotation;

	fn add(self, rhs: Rotation) -> Rotation {
		Rotation::new(self.yaw + rhs.yaw, self.pitch + rhs.pitch)
	}
}

/// What the detail panel shows for the selected node.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedNode {
	pub id: String,
	pub label: String,
	pub color: String,
	pub connection_count: usize,
}

impl From<&Node> for SelectedNode {
	fn from(node: &Node) -> Self {
		Self {
			id: node.id.clone(),
			label: node.label.clone(),
			color: node.color.clone(),
			connection_count: node.connections.len(),
		}
	}
}
