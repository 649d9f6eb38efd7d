// Application layer - Use case interactors

pub mod batch_interactor;
pub mod clip_interactor;
pub mod preflight;

// Re-export interactors
pub use batch_interactor::{BatchInteractor, BatchOutcome};
pub use clip_interactor::ClipInteractor;
