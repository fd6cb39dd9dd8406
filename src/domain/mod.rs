//! Domain Layer
//!
//! The core of reposweep: deciding which metadata directories are still in use.
//!
//! ## Structure
//!
//! - `entities/` - Registered projects and the project registry
//! - `value_objects/` - Keep sets, delete sets, scan roots, validated paths
//! - `services/` - The reconcile scanner
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **Explicit inputs** - Scan roots and keep sets are passed in, never read from globals
//! 2. **Ports & Adapters** - Prompting, deletion and persistence go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
