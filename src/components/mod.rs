pub mod app;
pub mod game_over_overlay;
pub mod game_view;
pub mod intro_overlay;
