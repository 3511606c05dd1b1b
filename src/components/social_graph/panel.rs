use leptos::prelude::*;

use super::types::SelectedNode;

const PANEL_STYLE: &str = "position: absolute; bottom: 20px; left: 5%; width: 90%; \
	background-color: #1e1e1e; padding: 15px; border-radius: 15px; box-sizing: border-box; \
	display: flex; align-items: center; gap: 15px; box-shadow: 0 4px 10px rgba(0, 0, 0, 0.5);";

/// Slide-up card for the selected node. Closing clears `selected`.
#[component]
pub fn NodeDetailPanel(selected: RwSignal<Option<SelectedNode>>) -> impl IntoView {
	move || {
		selected.get().map(|node| {
			let swatch = format!(
				"width: 50px; height: 50px; border-radius: 50%; background-color: {}; \
				 display: flex; align-items: center; justify-content: center; font-size: 24px;",
				node.color
			);
			view! {
				<div class="node-detail" style=PANEL_STYLE>
					<div style=swatch>"⬢"</div>
					<div style="flex: 1;">
						<div style="color: white; font-weight: bold;">{node.label}</div>
						<div style="color: #666; font-size: 10px;">{node.id}</div>
						<div style="color: #aaa; font-size: 12px;">
							"Connections: "{node.connection_count}
						</div>
						<div style="color: #ffd700; font-size: 12px;">"Shared interests: Music, Tech"</div>
					</div>
					<button
						style="background: none; border: none; color: white; font-size: 20px; cursor: pointer;"
						on:click=move |_| selected.set(None)
					>
						"×"
					</button>
				</div>
			}
		})
	}
}
