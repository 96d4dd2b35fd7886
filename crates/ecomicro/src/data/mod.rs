pub mod tips;
