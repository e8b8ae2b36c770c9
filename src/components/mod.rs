pub mod app;
pub mod copy_button;
pub mod diagram_svg;
pub mod diagram_viewer;
pub mod docker_page;
pub mod footer;
pub mod home_page;
pub mod navbar;
pub mod section_card;
pub mod viewer_controls;
pub mod wsl_page;
