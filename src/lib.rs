// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # namescope
//!
//! Typed, string-backed identifiers for the code entities of .NET programs: types, methods,
//! fields, properties, events, parameters, local variables, lambdas, namespaces and assemblies.
//!
//! Every name is a single canonical identifier string, for example
//! ``System.Collections.Generic.List`1[[T -> p:int]], mscorlib, 4.0.0.0`` or
//! `static [p:void] [n.C, P].M([p:int] i)`. Equality and hashing use only that string; all
//! structural information (namespace, nesting, type-parameter bindings, parameters, assembly and
//! version) is derived from it on demand and cached per instance.
//!
//! ## Features
//!
//! - **Type classification** - Unknown, predefined, array, delegate, type-parameter and regular
//!   types behind one [`names::TypeName`] enum
//! - **Member names** - Methods, fields, properties, events and parameters with lazy accessors
//! - **Serialization** - The prefixed `0T:`/`0M:`/... format, with fixes for historical
//!   identifier spellings ([`names::serialization`], [`names::fixes`])
//! - **Transformations** - Readable rendering, generic-binding removal and anonymization of
//!   project-specific names ([`names::readable`], [`names::generics`], [`names::anonymize`])
//! - **Interning** - An explicit, thread-safe [`names::NameCache`]
//!
//! ## Quick Start
//!
//! ```rust
//! use namescope::prelude::*;
//!
//! let list = TypeName::new("System.Collections.Generic.List`1[[T -> p:int]], mscorlib, 4.0.0.0");
//! assert_eq!(list.namespace().identifier(), "System.Collections.Generic");
//! assert_eq!(list.to_readable(), "List<int>");
//!
//! let method = MethodName::new("[p:void] [n.C, P].M([p:int] i)")?;
//! assert_eq!(method.parameters()[0].value_type(), &TypeName::new("p:int"));
//!
//! let token = serialize(&Name::from(method));
//! assert_eq!(token, "0M:[p:void] [n.C, P].M([p:int] i)");
//! assert!(matches!(deserialize(&token)?, Name::Method(_)));
//! # Ok::<(), namescope::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Type-name construction is total: strings that match no other rule become regular type names
//! and malformed optional parts degrade to their unknown values. Member constructors and
//! [`names::serialization::deserialize`] return [`Result`] with an [`Error`] describing the
//! rejected identifier.

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Identifier types and the operations over them.
///
/// # Key Components
///
/// - [`names::TypeName`] and its variants - Type identifiers
/// - [`names::MethodName`], [`names::FieldName`], [`names::PropertyName`],
///   [`names::EventName`] - Member identifiers
/// - [`names::ParameterName`], [`names::LocalVariableName`], [`names::LambdaName`] - Names
///   inside member signatures and bodies
/// - [`names::AssemblyName`], [`names::AssemblyVersion`], [`names::NamespaceName`] -
///   Organizational names
/// - [`names::serialization`] - The prefixed wire format
pub mod names;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use namescope::prelude::*;
///
/// let field = FieldName::new("static [p:int] [n.C, P]._count")?;
/// assert!(field.is_static());
/// # Ok::<(), namescope::Error>(())
/// ```
pub mod prelude;

/// `namescope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `namescope` Error type
///
/// # Examples
///
/// ```rust
/// use namescope::{names::MethodName, Error};
///
/// match MethodName::new("[p:int] [n.C, P]..ctor()") {
///     Ok(_) => println!("parsed"),
///     Err(Error::InvalidIdentifier { kind, identifier }) => {
///         println!("not a {}: {}", kind, identifier)
///     }
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub use error::Error;
