use log::{debug, info, warn};

use super::config::GraphConfig;
use super::hit_test;
use super::projection::Frame;
use super::sphere::generate_nodes;
use super::types::{Node, Rotation, SelectedNode};

/// Everything that changes between frames or on pointer input. Each
/// transition takes the old state and returns the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewState {
	pub rotation: Rotation,
	pub dragging: bool,
	pub last_pointer: (f64, f64),
	/// Index of the selected node.
	pub selected: Option<usize>,
}

impl ViewState {
	/// Idle auto-rotation. Suspended while dragging.
	#[must_use]
	pub fn tick(self, config: &GraphConfig) -> Self {
		if self.dragging {
			return self;
		}
		Self {
			rotation: self.rotation + config.auto_rotate,
			..self
		}
	}

	#[must_use]
	pub fn pointer_down(self, x: f64, y: f64) -> Self {
		Self {
			dragging: true,
			last_pointer: (x, y),
			..self
		}
	}

	/// Horizontal drag turns yaw, vertical drag turns pitch the opposite way.
	#[must_use]
	pub fn pointer_move(self, x: f64, y: f64, sensitivity: f64) -> Self {
		if !self.dragging {
			return self;
		}
		let (dx, dy) = (x - self.last_pointer.0, y - self.last_pointer.1);
		Self {
			rotation: Rotation::new(
				self.rotation.yaw + dx * sensitivity,
				self.rotation.pitch - dy * sensitivity,
			),
			last_pointer: (x, y),
			..self
		}
	}

	#[must_use]
	pub fn pointer_up(self) -> Self {
		Self {
			dragging: false,
			..self
		}
	}

	#[must_use]
	pub fn pointer_leave(self) -> Self {
		self.pointer_up()
	}
}

pub struct SocialGraphState {
	pub config: GraphConfig,
	pub view: ViewState,
	pub width: f64,
	pub height: f64,
	nodes: Vec<Node>,
	frame: Frame,
}

impl SocialGraphState {
	pub fn new(
		config: GraphConfig,
		width: f64,
		height: f64,
		color_of: impl FnMut(usize) -> String,
	) -> Self {
		if config.sphere_radius >= config.focal_length {
			warn!(
				"Sphere radius {} reaches the focal length {}; near nodes will project badly",
				config.sphere_radius, config.focal_length
			);
		}
		let nodes = generate_nodes(&config, color_of);
		let mut state = Self {
			config,
			view: ViewState::default(),
			width,
			height,
			nodes,
			frame: Frame::default(),
		};
		state.reproject();
		info!(
			"Social graph ready: {} nodes on a {}x{} canvas",
			state.nodes.len(),
			width,
			height
		);
		state
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// The projection computed by the last tick.
	pub fn frame(&self) -> &Frame {
		&self.frame
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// Advance one animation frame and re-project.
	pub fn tick(&mut self) {
		self.view = self.view.tick(&self.config);
		self.reproject();
	}

	pub fn pointer_down(&mut self, x: f64, y: f64) {
		self.view = self.view.pointer_down(x, y);
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		self.view = self.view.pointer_move(x, y, self.config.drag_sensitivity);
	}

	pub fn pointer_up(&mut self) {
		self.view = self.view.pointer_up();
	}

	pub fn pointer_leave(&mut self) {
		self.view = self.view.pointer_leave();
	}

	/// Pick the node under the canvas-local point from the latest frame.
	/// Ignored mid-drag; a miss clears the selection.
	pub fn select_at(&mut self, x: f64, y: f64) -> Option<&Node> {
		if self.view.dragging {
			return self.selected_node();
		}
		let hit = hit_test::node_at(
			&self.frame,
			x,
			y,
			self.config.hit_radius,
			self.config.hit_padding,
		);
		self.view.selected = hit;
		match hit {
			Some(idx) => debug!("Selected {}", self.nodes[idx].id),
			None => debug!("Selection cleared"),
		}
		self.selected_node()
	}

	pub fn clear_selection(&mut self) {
		self.view.selected = None;
	}

	pub fn selected_node(&self) -> Option<&Node> {
		self.view.selected.and_then(|idx| self.nodes.get(idx))
	}

	pub fn selected_summary(&self) -> Option<SelectedNode> {
		self.selected_node().map(SelectedNode::from)
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.reproject();
	}

	fn reproject(&mut self) {
		self.frame = Frame::build(
			&self.nodes,
			self.view.rotation,
			self.center(),
			self.config.focal_length,
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> SocialGraphState {
		SocialGraphState::new(GraphConfig::default(), 800.0, 600.0, |i| format!("c{}", i))
	}

	#[test]
	fn idle_tick_auto_rotates() {
		let config = GraphConfig::default();
		let view = ViewState::default().tick(&config).tick(&config);
		assert!((view.rotation.yaw - 0.002).abs() < 1e-12);
		assert!((view.rotation.pitch - 0.004).abs() < 1e-12);
	}

	#[test]
	fn dragging_suspends_auto_rotation() {
		let config = GraphConfig::default();
		let mut view = ViewState::default().pointer_down(10.0, 10.0);
		for _ in 0..100 {
			view = view.tick(&config);
		}
		assert_eq!(view.rotation, Rotation::default());

		view = view.pointer_move(30.0, 0.0, config.drag_sensitivity);
		view = view.tick(&config);
		view = view.pointer_move(40.0, 5.0, config.drag_sensitivity);
		view = view.tick(&config);
		// Only the explicit deltas: dx = 30, dy = -5.
		assert!((view.rotation.yaw - 0.30).abs() < 1e-12);
		assert!((view.rotation.pitch - 0.05).abs() < 1e-12);
		assert_eq!(view.last_pointer, (40.0, 5.0));
	}

	#[test]
	fn move_without_drag_is_ignored() {
		let view = ViewState::default().pointer_move(50.0, 50.0, 0.01);
		assert_eq!(view, ViewState::default());
	}

	#[test]
	fn release_and_leave_end_drag() {
		let down = ViewState::default().pointer_down(0.0, 0.0);
		assert!(!down.pointer_up().dragging);
		assert!(!down.pointer_leave().dragging);
		let config = GraphConfig::default();
		let resumed = down.pointer_up().tick(&config);
		assert_eq!(resumed.rotation, config.auto_rotate);
	}

	#[test]
	fn tick_reprojects() {
		let mut s = state();
		let before = s.frame().points.clone();
		s.tick();
		assert_ne!(before, s.frame().points);
		assert_eq!(s.frame().points.len(), s.nodes().len());
	}

	#[test]
	fn click_selects_front_node_and_miss_clears() {
		let mut s = state();
		s.tick();
		let &front = s.frame().order.last().unwrap();
		let p = s.frame().points[front];
		let id = s.select_at(p.x, p.y).map(|n| n.id.clone());
		assert_eq!(id, Some(format!("user-{}", front)));
		assert_eq!(s.view.selected, Some(front));

		let summary = s.selected_summary().unwrap();
		assert_eq!(summary.color, format!("c{}", front));
		assert_eq!(summary.connection_count, s.nodes()[front].connections.len());

		assert!(s.select_at(-500.0, -500.0).is_none());
		assert_eq!(s.view.selected, None);
	}

	#[test]
	fn click_mid_drag_keeps_selection() {
		let mut s = state();
		let &front = s.frame().order.last().unwrap();
		let p = s.frame().points[front];
		s.select_at(p.x, p.y);
		s.pointer_down(0.0, 0.0);
		assert!(s.select_at(-500.0, -500.0).is_some());
		assert_eq!(s.view.selected, Some(front));
		s.clear_selection();
		assert!(s.selected_node().is_none());
	}

	#[test]
	fn resize_recentres() {
		let mut s = state();
		let before = s.frame().points[0];
		s.resize(400.0, 200.0);
		let after = s.frame().points[0];
		assert!((before.x - 400.0 - (after.x - 200.0)).abs() < 1e-9);
		assert!((before.y - 300.0 - (after.y - 100.0)).abs() < 1e-9);
	}

	#[test]
	fn nodes_are_untouched_by_frames() {
		let mut s = state();
		let snapshot: Vec<_> = s.nodes().iter().map(|n| (n.position, n.connections.clone())).collect();
		for _ in 0..10 {
			s.pointer_down(0.0, 0.0);
			s.pointer_move(12.0, -7.0);
			s.pointer_up();
			s.tick();
		}
		let now: Vec<_> = s.nodes().iter().map(|n| (n.position, n.connections.clone())).collect();
		assert_eq!(snapshot, now);
	}
}
