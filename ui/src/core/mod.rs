//! Pure, platform-agnostic logic: dataset loading, scales, aggregation,
//! annotation placement, scene composition, and navigation state.

pub mod aggregate;
pub mod annotate;
pub mod dataset;
pub mod format;
pub mod navigation;
pub mod scale;
pub mod scene;
