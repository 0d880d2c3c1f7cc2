pub use super::custom_extensions::Entity as CustomExtensions;
pub use super::files::Entity as Files;
pub use super::fixed_extensions::Entity as FixedExtensions;
