use std::f64::consts::PI;

use log::debug;

use super::config::GraphConfig;
use super::types::{Node, Point3};

/// Point `i` of `n` on the unit sphere, spiralling from the north pole
/// to the south pole by the golden angle.
pub fn golden_spiral_point(i: usize, n: usize) -> Point3 {
	let golden_angle = PI * (3.0 - 5.0_f64.sqrt());
	let y = if n > 1 {
		1.0 - (i as f64 / (n - 1) as f64) * 2.0
	} else {
		1.0
	};
	let radius = (1.0 - y * y).max(0.0).sqrt();
	let theta = golden_angle * i as f64;
	Point3::new(theta.cos() * radius, y, theta.sin() * radius)
}

/// Build the node list: spiral positions scaled to the sphere radius, then
/// directed links. `color_of` picks each node's fill.
pub fn generate_nodes(config: &GraphConfig, mut color_of: impl FnMut(usize) -> String) -> Vec<Node> {
	let n = config.node_count;
	let r = config.sphere_radius;
	let mut nodes: Vec<Node> = (0..n)
		.map(|i| {
			let p = golden_spiral_point(i, n);
			Node {
				position: Point3::new(p.x * r, p.y * r, p.z * r),
				id: format!("user-{}", i),
				label: format!("User {}", i + 1),
				color: color_of(i),
				connections: Vec::new(),
			}
		})
		.collect();

	link_nodes(&mut nodes, config.link_distance, config.max_links);

	debug!(
		"Generated {} nodes with {} directed links",
		nodes.len(),
		nodes.iter().map(|n| n.connections.len()).sum::<usize>()
	);
	nodes
}

/// i -> j for every j (ascending) closer than `threshold`, until i holds
/// `max_links`. j's own cap is not consulted, so links are not symmetric.
fn link_nodes(nodes: &mut [Node], threshold: f64, max_links: usize) {
	let positions: Vec<Point3> = nodes.iter().map(|n| n.position).collect();
	for (i, node) in nodes.iter_mut().enumerate() {
		for (j, other) in positions.iter().enumerate() {
			if i == j || node.connections.len() >= max_links {
				continue;
			}
			if node.position.distance(other) < threshold {
				node.connections.push(j);
			}
		}
	}
}
