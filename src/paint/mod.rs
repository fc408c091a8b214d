pub mod engine;
pub mod exec;
pub mod output;

pub use engine::{run, Pacing, PaintEvent, PaintOptions, MESSAGE_PREFIX, PUSH_INTERVAL, SCRATCH_FILE};
pub use exec::exec;
pub use output::{print_banner, print_summary};
