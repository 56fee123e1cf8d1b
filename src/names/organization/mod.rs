//! Organizational names: assemblies, their versions, and namespaces.
//!
//! These are the leaves of every type identifier. They are parsed eagerly and never fail:
//! anything unparseable degrades to the respective unknown value.

mod assembly;
mod namespace;

pub use assembly::{AssemblyName, AssemblyVersion};
pub use namespace::NamespaceName;
