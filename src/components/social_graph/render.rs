use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::SocialGraphState;

const EDGE_COLOR: &str = "rgba(255, 215, 0, 0.2)";
const OUTLINE_COLOR: &str = "white";
const GLOW_BLUR: f64 = 10.0;

/// Outline pass for near nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Outline<'a> {
	pub color: &'a str,
	pub width: f64,
	pub glow_color: &'a str,
	pub glow_blur: f64,
}

/// The drawing primitives the renderer needs.
pub trait Surface {
	fn clear(&mut self, width: f64, height: f64);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
	fn fill_polygon(&mut self, points: &[(f64, f64)], color: &str);
	fn stroke_polygon(&mut self, points: &[(f64, f64)], outline: &Outline<'_>);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn fill_polygon(&mut self, points: &[(f64, f64)], color: &str) {
		trace_polygon(self, points);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn stroke_polygon(&mut self, points: &[(f64, f64)], outline: &Outline<'_>) {
		trace_polygon(self, points);
		self.set_shadow_blur(outline.glow_blur);
		self.set_shadow_color(outline.glow_color);
		self.set_stroke_style_str(outline.color);
		self.set_line_width(outline.width);
		self.stroke();
		self.set_shadow_blur(0.0);
	}
}

fn trace_polygon(ctx: &CanvasRenderingContext2d, points: &[(f64, f64)]) {
	ctx.begin_path();
	for (i, &(x, y)) in points.iter().enumerate() {
		if i == 0 {
			ctx.move_to(x, y);
		} else {
			ctx.line_to(x, y);
		}
	}
	ctx.close_path();
}

/// Regular hexagon with a vertex on the +x axis.
pub fn hexagon(center: (f64, f64), size: f64) -> [(f64, f64); 6] {
	std::array::from_fn(|k| {
		let angle = PI / 3.0 * k as f64;
		(center.0 + size * angle.cos(), center.1 + size * angle.sin())
	})
}

/// Paint the latest frame back to front: all links, then all nodes.
pub fn render(state: &SocialGraphState, surface: &mut impl Surface) {
	surface.clear(state.width, state.height);
	draw_edges(state, surface);
	draw_nodes(state, surface);
}

fn draw_edges(state: &SocialGraphState, surface: &mut impl Surface) {
	let (frame, nodes) = (state.frame(), state.nodes());
	for (idx, from) in frame.back_to_front() {
		for &target in &nodes[idx].connections {
			if let Some(to) = frame.point(target) {
				surface.stroke_line((from.x, from.y), (to.x, to.y), EDGE_COLOR, 1.0);
			}
		}
	}
}

fn draw_nodes(state: &SocialGraphState, surface: &mut impl Surface) {
	let (frame, nodes, config) = (state.frame(), state.nodes(), &state.config);
	for (idx, p) in frame.back_to_front() {
		let node = &nodes[idx];
		let shape = hexagon((p.x, p.y), config.node_size * p.scale);
		surface.fill_polygon(&shape, &node.color);

		if p.depth > config.glow_depth {
			surface.stroke_polygon(
				&shape,
				&Outline {
					color: OUTLINE_COLOR,
					width: p.scale,
					glow_color: &node.color,
					glow_blur: GLOW_BLUR,
				},
			);
		}
	}
}
