pub mod bundled;
pub mod file;
pub mod traits;

// Re-export
pub use bundled::BundledCallRepository;
pub use file::FileCallRepository;
pub use traits::CallRepository;
