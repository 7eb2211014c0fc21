//! Ratatui front-end: the controller that owns the catalog state, the card
//! renderer, and the terminal loop that feeds key presses into both.

mod app;
mod cards;
mod helpers;
mod terminal;

pub use app::{App, Phase};
pub use cards::{render_catalog, CatalogView, CourseCard, NO_RESULTS};
pub use terminal::run_app;
