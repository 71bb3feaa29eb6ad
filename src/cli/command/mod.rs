pub mod averages;

pub use averages::averages;
