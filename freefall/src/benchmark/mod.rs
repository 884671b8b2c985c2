pub mod clock;
pub mod refine;
pub mod report;
