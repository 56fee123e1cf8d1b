//! Assembly identifiers and their four-part versions.
//!
//! The trailing segment of a type identifier names the assembly that defines the type:
//! `System.String, mscorlib, 4.0.0.0` carries the assembly `mscorlib, 4.0.0.0`, while
//! `MyType, MyProject` carries the unversioned assembly `MyProject`. An assembly without a
//! version is produced by the project under analysis and is called a *local project* assembly;
//! anonymization hashes exactly those.
//!
//! # Key Components
//!
//! - [`AssemblyVersion`] - Four-part version numbering (major.minor.build.revision)
//! - [`AssemblyName`] - Assembly name plus optional version
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{AssemblyName, AssemblyVersion};
//!
//! let mscorlib = AssemblyName::new("mscorlib, 4.0.0.0");
//! assert_eq!(mscorlib.name(), "mscorlib");
//! assert_eq!(mscorlib.version(), AssemblyVersion::new(4, 0, 0, 0));
//! assert!(!mscorlib.is_local_project());
//!
//! let project = AssemblyName::new("MyProject");
//! assert!(project.is_local_project());
//! assert!(project.version().is_unknown());
//! ```

use std::{fmt, str::FromStr, sync::Arc};

use crate::{Error, Result};

/// A four-part assembly version.
///
/// Parsing never fails: text that does not consist of exactly four non-negative integers yields
/// [`AssemblyVersion::UNKNOWN`], which is `-1.-1.-1.-1` and sorts before every real version.
///
/// # Examples
///
/// ```rust
/// use namescope::names::AssemblyVersion;
///
/// let older = AssemblyVersion::parse("3.4.2.1");
/// let newer: AssemblyVersion = "4.3.2.1".parse()?;
/// assert!(older < newer);
/// assert!(AssemblyVersion::parse("1.2").is_unknown());
/// # Ok::<(), namescope::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssemblyVersion {
    /// Major version component
    pub major: i32,
    /// Minor version component
    pub minor: i32,
    /// Build version component
    pub build: i32,
    /// Revision version component
    pub revision: i32,
}

impl AssemblyVersion {
    /// Sentinel value representing an absent or unparseable version (`-1.-1.-1.-1`).
    pub const UNKNOWN: Self = Self {
        major: -1,
        minor: -1,
        build: -1,
        revision: -1,
    };

    /// Create a new assembly version with the specified components.
    #[must_use]
    pub const fn new(major: i32, minor: i32, build: i32, revision: i32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }

    /// Parse a version from `"<major>.<minor>.<build>.<revision>"`.
    ///
    /// Surrounding whitespace is ignored. Anything else than four non-negative integers,
    /// including the empty string, results in [`AssemblyVersion::UNKNOWN`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut components = [0i32; 4];
        let mut parts = text.trim().split('.');
        for component in &mut components {
            match parts.next().map(|p| p.parse::<i32>()) {
                Some(Ok(value)) if value >= 0 => *component = value,
                _ => return Self::UNKNOWN,
            }
        }
        if parts.next().is_some() {
            return Self::UNKNOWN;
        }

        Self::new(components[0], components[1], components[2], components[3])
    }

    /// Returns `true` if this is the [`AssemblyVersion::UNKNOWN`] sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl Default for AssemblyVersion {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

impl FromStr for AssemblyVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::parse(s))
    }
}

/// The identifier of an assembly: a name and an optional version.
///
/// The version is split off at the last comma, but only when the text after it actually is a
/// version. `"?"` and the empty string denote the unknown assembly.
#[derive(Clone)]
pub struct AssemblyName {
    identifier: Arc<str>,
    name_end: usize,
    version: AssemblyVersion,
}

impl AssemblyName {
    /// Identifier of the unknown assembly.
    pub const UNKNOWN_IDENTIFIER: &'static str = "?";

    /// Parse an assembly identifier such as `mscorlib, 4.0.0.0` or `MyProject`.
    #[must_use]
    pub fn new(identifier: &str) -> Self {
        let mut name_end = identifier.len();
        let mut version = AssemblyVersion::UNKNOWN;
        if let Some(comma) = identifier.rfind(',') {
            let candidate = AssemblyVersion::parse(&identifier[comma + 1..]);
            if !candidate.is_unknown() {
                name_end = comma;
                version = candidate;
            }
        }

        AssemblyName {
            identifier: Arc::from(identifier),
            name_end,
            version,
        }
    }

    /// The unknown assembly, `?`.
    #[must_use]
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN_IDENTIFIER)
    }

    /// Build the identifier of `name` at `version`.
    #[must_use]
    pub fn from_parts(name: &str, version: AssemblyVersion) -> Self {
        if version.is_unknown() {
            Self::new(name)
        } else {
            Self::new(&format!("{}, {}", name, version))
        }
    }

    /// The full identifier as it appears in type names.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The simple assembly name, `???` for the unknown assembly.
    #[must_use]
    pub fn name(&self) -> &str {
        if self.is_unknown() {
            return "???";
        }
        self.identifier[..self.name_end].trim()
    }

    /// The version, [`AssemblyVersion::UNKNOWN`] when none is given.
    #[must_use]
    pub fn version(&self) -> AssemblyVersion {
        self.version
    }

    /// Returns `true` for the unknown assembly.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        let id = self.identifier.trim();
        id.is_empty() || id == Self::UNKNOWN_IDENTIFIER
    }

    /// Returns `true` for a known assembly without a version, i.e. one built from the project
    /// under analysis.
    #[must_use]
    pub fn is_local_project(&self) -> bool {
        !self.is_unknown() && self.version.is_unknown()
    }
}

impl_name_identity!(AssemblyName);
