pub mod apply;

pub use apply::filter_by_name;
