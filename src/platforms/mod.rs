mod windows;

pub use windows::*;
