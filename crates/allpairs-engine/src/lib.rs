pub mod range;
pub mod render;
pub mod solver;

pub use render::{CaseRenderer, RenderOptions, RenderedCase};
pub use solver::coverage::PairCoverageMatrix;
pub use solver::select::find_next;
pub use solver::TestCase;
