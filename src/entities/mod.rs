pub mod prelude;

pub mod custom_extensions;
pub mod files;
pub mod fixed_extensions;
