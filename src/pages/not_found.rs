use leptos::prelude::*;

/// 404 Not Found Page
#[component]
pub fn NotFound() -> impl IntoView {
	view! {
		<div style="color: white; padding: 20px;">
			<h1>"Uh oh!" <br /> "We couldn't find that page!"</h1>
			<a href="/" style="color: #ffd700;">"Back to the network"</a>
		</div>
	}
}
