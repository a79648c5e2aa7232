pub mod bridge;
pub mod models;
pub mod presenter;
pub mod services;
pub mod state;

pub use models::getaway_model::GetawayModel;
pub use presenter::{render, render_text, Body, Icon, PageView};
pub use state::LoadState;
