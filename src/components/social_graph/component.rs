use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

use leptos::prelude::*;
use log::{error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, PointerEvent, Window};

use super::config::GraphConfig;
use super::panel::NodeDetailPanel;
use super::render;
use super::state::SocialGraphState;
use super::types::SelectedNode;

/// A random `hsl` fill, one per node. Not seeded.
fn random_avatar_color(_: usize) -> String {
	format!("hsl({:.0}, 70%, 50%)", js_sys::Math::random() * 360.0)
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
	canvas
		.get_context("2d")?
		.ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
		.dyn_into::<CanvasRenderingContext2d>()
		.map_err(JsValue::from)
}

fn viewport_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

#[component]
pub fn SocialGraphCanvas(
	#[prop(default = false)] fullscreen: bool,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
	#[prop(default = GraphConfig::default())] config: GraphConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<SocialGraphState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	// Shared with the cleanup hook, which must be Send.
	let frame_id = Arc::new(AtomicI32::new(0));
	let torn_down = Arc::new(AtomicBool::new(false));
	let (frame_id_init, torn_down_init) = (frame_id.clone(), torn_down.clone());

	let selected = RwSignal::new(None::<SelectedNode>);
	let dragging = RwSignal::new(false);

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("No window; social graph not started");
			return;
		};

		let (w, h) = match (fullscreen, viewport_size(&window)) {
			(true, Some(size)) => size,
			_ => (
				width.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_width() as f64)
						.unwrap_or(800.0)
				}),
				height.unwrap_or_else(|| {
					canvas
						.parent_element()
						.map(|p| p.client_height() as f64)
						.unwrap_or(600.0)
				}),
			),
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(err) => {
				error!("Failed to acquire canvas context: {:?}", err);
				return;
			}
		};
		*state_init.borrow_mut() = Some(SocialGraphState::new(
			config.clone(),
			w,
			h,
			random_avatar_color,
		));

		if fullscreen {
			let (state_resize, canvas_resize, torn_down_resize) =
				(state_init.clone(), canvas.clone(), torn_down_init.clone());
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				if torn_down_resize.load(Ordering::Relaxed) {
					return;
				}
				let Some((nw, nh)) = web_sys::window().as_ref().and_then(viewport_size) else {
					return;
				};
				canvas_resize.set_width(nw as u32);
				canvas_resize.set_height(nh as u32);
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(nw, nh);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (state_anim, animate_inner, frame_id_anim, torn_down_anim) = (
			state_init.clone(),
			animate_init.clone(),
			frame_id_init.clone(),
			torn_down_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if torn_down_anim.load(Ordering::Relaxed) {
				return;
			}
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick();
				render::render(s, &mut ctx);
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(Ok(id)) = web_sys::window()
					.map(|win| win.request_animation_frame(cb.as_ref().unchecked_ref()))
				{
					frame_id_anim.store(id, Ordering::Relaxed);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_id_init.store(id, Ordering::Relaxed);
			}
		}
	});

	on_cleanup(move || {
		torn_down.store(true, Ordering::Relaxed);
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(frame_id.load(Ordering::Relaxed));
		}
		info!("Social graph torn down");
	});

	// The panel's close button clears the signal; mirror that into the view state.
	let state_sel = state.clone();
	Effect::new(move |_| {
		if selected.get().is_none() {
			if let Some(ref mut s) = *state_sel.borrow_mut() {
				s.clear_selection();
			}
		}
	});

	let state_pd = state.clone();
	let on_pointerdown = move |ev: PointerEvent| {
		if let Some(ref mut s) = *state_pd.borrow_mut() {
			s.pointer_down(ev.client_x() as f64, ev.client_y() as f64);
			dragging.set(true);
		}
	};

	let state_pm = state.clone();
	let on_pointermove = move |ev: PointerEvent| {
		if let Some(ref mut s) = *state_pm.borrow_mut() {
			s.pointer_move(ev.client_x() as f64, ev.client_y() as f64);
		}
	};

	let state_pu = state.clone();
	let on_pointerup = move |_: PointerEvent| {
		if let Some(ref mut s) = *state_pu.borrow_mut() {
			s.pointer_up();
		}
		dragging.set(false);
	};

	let state_pl = state.clone();
	let on_pointerleave = move |_: PointerEvent| {
		if let Some(ref mut s) = *state_pl.borrow_mut() {
			s.pointer_leave();
		}
		dragging.set(false);
	};

	let state_click = state.clone();
	let on_click = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let (x, y) = (
			ev.client_x() as f64 - rect.left(),
			ev.client_y() as f64 - rect.top(),
		);

		let summary = match *state_click.borrow_mut() {
			Some(ref mut s) => {
				s.select_at(x, y);
				s.selected_summary()
			}
			None => return,
		};
		selected.set(summary);
	};

	view! {
		<div
			class="social-graph"
			style="position: relative; width: 100%; height: 100%; overflow: hidden; background: radial-gradient(circle, #2a1a4a 0%, #121212 100%);"
		>
			<canvas
				node_ref=canvas_ref
				class="social-graph-canvas"
				on:pointerdown=on_pointerdown
				on:pointermove=on_pointermove
				on:pointerup=on_pointerup
				on:pointerleave=on_pointerleave
				on:click=on_click
				style=move || {
					format!(
						"display: block; touch-action: none; cursor: {};",
						if dragging.get() { "grabbing" } else { "grab" },
					)
				}
			/>
			<NodeDetailPanel selected=selected />
		</div>
	}
}
