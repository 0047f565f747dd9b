pub mod error;
pub mod filter;
pub mod frequency;
pub mod normalize;
pub mod state;
pub mod variants;
