pub mod batch;
pub mod model;
pub mod normalize;
pub mod sort;
pub mod toggle;
