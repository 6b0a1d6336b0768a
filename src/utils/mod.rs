pub mod progress_bar_builder;

pub use progress_bar_builder::ProgressBarBuilder;
