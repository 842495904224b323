pub mod aggregate_error;
