#[cfg(not(target_arch = "wasm32"))]
pub(crate) mod fs;
pub(crate) mod format;
