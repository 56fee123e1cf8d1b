//! # namescope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the namescope library. Import this module to get quick access to the name types,
//! their accessor traits and the serialization entry points.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all namescope operations
pub use crate::Error;

/// The result type used throughout namescope
pub use crate::Result;

// ================================================================================================
// Type Names
// ================================================================================================

/// Type name variants and their shared accessors
pub use crate::names::{
    ArrayType, ArrayTypeName, DelegateTypeName, PredefinedTypeName, RegularTypeName, TypeInfo,
    TypeName, TypeNameKind, TypeParameterName, UnknownTypeName,
};

// ================================================================================================
// Member Names
// ================================================================================================

/// Members and the names that appear inside their signatures
pub use crate::names::{
    EventName, FieldName, LambdaName, LocalVariableName, MemberInfo, MemberModifiers, MethodName,
    ParameterModifiers, ParameterName, PropertyName,
};

// ================================================================================================
// Organization
// ================================================================================================

/// Assemblies, versions and namespaces
pub use crate::names::{AssemblyName, AssemblyVersion, NamespaceName};

// ================================================================================================
// Serialization and Transformations
// ================================================================================================

/// The prefixed wire format
pub use crate::names::serialization::{deserialize, serialize, Name};

/// Rewriting of historical identifier spellings
pub use crate::names::fixes::{fix_identifiers, fix_legacy_formats};

/// Name transformations
pub use crate::names::{anonymize::Anonymize, generics::RemoveGenerics, readable::Readable};

/// Interning of parsed names
pub use crate::names::NameCache;
