pub mod playthrough;
pub mod reports;
pub mod seeds;
pub mod tester;

pub use playthrough::Playthrough;
pub use seeds::resolve_seed_inputs;
pub use tester::*;
