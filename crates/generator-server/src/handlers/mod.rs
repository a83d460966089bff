pub mod generate;
pub mod health;
pub mod presets;
pub mod save;
