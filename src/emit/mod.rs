//! Rendering a finished translation unit into on-disk artifacts.

pub mod object_file;

pub use object_file::{render_entries_file, render_externals_file, render_object_file};
