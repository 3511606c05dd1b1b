mod component;
mod config;
mod panel;
mod projection;
mod render;
mod sphere;
mod state;
mod types;

pub use component::SocialGraphCanvas;
