pub mod cloud;
pub mod roots;
pub mod walk;

pub use cloud::{find_cloud_roots, steam_install_dir};
pub use roots::enumerate_roots;
pub use walk::{compile_ignore_patterns, walk_dirs, MAX_SCAN_DEPTH};
