pub mod target_path_resolver;

pub use target_path_resolver::StdTargetPathResolver;
