pub mod accessibility;
pub mod debounce;
pub mod dom;
pub mod image_probe;
pub mod lazy_loader;
