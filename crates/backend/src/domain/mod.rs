pub mod a006_completeness;
