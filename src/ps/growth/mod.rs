pub mod frequent;
pub mod topk;

pub use frequent::{frequent_growth, frequent_growth_parallel};
pub use topk::topk_growth;

/// `(support, pattern)` pairs in emission order.
pub type Results<T> = Vec<(usize, Vec<T>)>;
