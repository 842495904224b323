pub mod chart;
pub mod configs;
pub mod dataset;
pub mod revenue;
