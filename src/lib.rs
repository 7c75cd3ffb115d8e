pub mod assets;
pub mod catalog;
pub mod config;
pub mod link;
pub mod logging;
pub mod nav;
pub mod screen;
pub mod ui;
