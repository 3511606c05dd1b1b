use leptos::prelude::*;

use crate::components::social_graph::SocialGraphCanvas;

/// Default Home Page: the rotating user network.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph" style="position: fixed; inset: 0;">
				<SocialGraphCanvas fullscreen=true />
				<div
					class="graph-overlay"
					style="position: absolute; top: 20px; left: 20px; color: white; pointer-events: none;"
				>
					<h3>"Global Network"</h3>
					<p style="font-size: 12px; opacity: 0.7;">"Swipe to rotate"</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
