//! Repository implementations

mod registry;

pub use registry::TomlRegistryRepository;
