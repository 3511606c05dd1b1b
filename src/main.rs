//! Browser entry point: mounts the network app to the document body.

use social_graph_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
