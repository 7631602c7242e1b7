pub mod cwd;
pub mod fsx;
