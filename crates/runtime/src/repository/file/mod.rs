//! File-based repository implementations.

mod player;

pub use player::FilePlayerRepository;
