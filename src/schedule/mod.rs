//! Schedule generation: unit normalization, the per-convention recurrence
//! engines and the dispatcher that ties them together.

pub mod american;
pub mod dispatch;
pub mod engine;
pub mod french;
pub mod german;
pub mod normalize;
pub mod single;
