//! The name identifier system.
//!
//! Every program entity of a managed object platform (types, methods, fields, properties,
//! events, parameters, assemblies and namespaces) is described by a canonical identifier
//! string. This module maps those strings to a typed, queryable model and back. Identifiers are
//! the sole source of truth: two names are equal iff their identifiers are equal, and every
//! derived part (declaring type, type parameters, parameter lists) is parsed lazily from the
//! identifier on first access and cached per instance.
//!
//! # Architecture
//!
//! A raw identifier first passes the legacy normalizer ([`fixes`]), then the classifier
//! ([`classify`]) picks one of six type-name shapes. The chosen variant wraps the identifier and
//! uses the [`tokenizer`] to find sub-structures when they are requested. Member names compose
//! type names for their value and declaring types.
//!
//! # Key Components
//!
//! - [`tokenizer`] - Bracket-aware scanning and splitting
//! - [`AssemblyName`] / [`AssemblyVersion`] / [`NamespaceName`] - Organizational names
//! - [`TypeName`] / [`TypeInfo`] - The six type-name variants and their capability surface
//! - [`MethodName`], [`FieldName`], [`PropertyName`], [`EventName`], [`ParameterName`] - Members
//! - [`fixes`] - Rewriting of legacy identifier spellings
//! - [`serialization`] - The `<prefix>:<identifier>` wire tokens
//! - [`readable`] - Human-readable rendering
//! - [`anonymize`] - Hashing of project-specific names
//! - [`NameCache`] - An explicit interning cache
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{ArrayTypeName, TypeInfo, TypeName};
//!
//! let int = TypeName::parse("System.Int32, mscorlib, 4.0.0.0");
//! assert_eq!(int, TypeName::new("p:int"));
//!
//! let matrix = ArrayTypeName::from(&int, 2)?;
//! assert_eq!(matrix.identifier(), "p:int[,]");
//! assert_eq!(matrix.as_array_type()?.rank(), 2);
//! # Ok::<(), namescope::Error>(())
//! ```

pub mod anonymize;
pub mod fixes;
pub mod generics;
pub mod readable;
pub mod serialization;
pub mod tokenizer;

mod cache;
mod members;
mod organization;
mod types;

pub use cache::NameCache;
pub use members::{
    EventName, FieldName, LambdaName, LocalVariableName, MemberInfo, MemberModifiers, MethodName,
    ParameterModifiers, ParameterName, PropertyName,
};
pub use organization::{AssemblyName, AssemblyVersion, NamespaceName};
pub use types::{
    alias_for_full_name, classify, is_array_type_identifier, is_delegate_type_identifier,
    is_predefined_type_identifier, is_regular_type_identifier, is_type_parameter_identifier,
    is_unknown_type_identifier, predefined_aliases, ArrayType, ArrayTypeName, DelegateTypeName,
    PredefinedTypeName, RegularTypeName, TypeInfo, TypeName, TypeNameKind, TypeParameterName,
    UnknownTypeName, PREDEFINED_ASSEMBLY,
};
