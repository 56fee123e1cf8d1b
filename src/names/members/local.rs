use std::sync::{Arc, OnceLock};

use crate::{
    names::{
        members::{format_parameters, parse_parameters, ParameterName},
        tokenizer::find_corresponding_close_bracket,
        TypeInfo, TypeName,
    },
    Error, Result,
};

/// Identifier of the unknown local variable.
pub const UNKNOWN_LOCAL_VARIABLE_IDENTIFIER: &str = "[?] ???";

/// Identifier of the unknown lambda.
pub const UNKNOWN_LAMBDA_IDENTIFIER: &str = "[?] ()";

/// Split `[T] rest` into the offsets of the bracketed type and the start of the rest.
fn split_value_type(identifier: &str) -> Option<(usize, usize)> {
    if !identifier.starts_with('[') {
        return None;
    }
    let close = find_corresponding_close_bracket(identifier, 0).ok()?;
    if identifier.as_bytes().get(close + 1) != Some(&b' ') {
        return None;
    }
    Some((close, close + 2))
}

struct LocalVariableInner {
    identifier: String,
    value_close: usize,
    value_type: OnceLock<TypeName>,
}

/// A local variable, `[<value type>] <name>`.
#[derive(Clone)]
pub struct LocalVariableName {
    inner: Arc<LocalVariableInner>,
}

impl LocalVariableName {
    /// Parse a local variable identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for malformed identifiers.
    pub fn new(identifier: &str) -> Result<Self> {
        let (value_close, _) = split_value_type(identifier)
            .filter(|(_, start)| !identifier[*start..].trim().is_empty())
            .ok_or_else(|| Error::InvalidIdentifier {
                kind: "local variable",
                identifier: identifier.to_string(),
            })?;

        Ok(LocalVariableName {
            inner: Arc::new(LocalVariableInner {
                identifier: identifier.to_string(),
                value_close,
                value_type: OnceLock::new(),
            }),
        })
    }

    /// The unknown local variable, `[?] ???`.
    #[must_use]
    pub fn unknown() -> Self {
        LocalVariableName {
            inner: Arc::new(LocalVariableInner {
                identifier: UNKNOWN_LOCAL_VARIABLE_IDENTIFIER.to_string(),
                value_close: 2,
                value_type: OnceLock::new(),
            }),
        }
    }

    /// Build `[<value type>] <name>`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `name` is empty.
    pub fn from_parts(value_type: &TypeName, name: &str) -> Result<Self> {
        Self::new(&format!("[{}] {}", value_type.identifier(), name))
    }

    /// The canonical identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    /// Returns `true` for `[?] ???`.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.identifier() == UNKNOWN_LOCAL_VARIABLE_IDENTIFIER
    }

    /// The declared type of the variable.
    #[must_use]
    pub fn value_type(&self) -> &TypeName {
        self.inner
            .value_type
            .get_or_init(|| TypeName::new(&self.inner.identifier[1..self.inner.value_close]))
    }

    /// The variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.inner.identifier[self.inner.value_close + 2..].trim()
    }
}

impl_name_identity!(LocalVariableName);

struct LambdaInner {
    identifier: String,
    return_close: usize,
    params_open: usize,
    params_close: usize,
    return_type: OnceLock<TypeName>,
    parameters: OnceLock<Vec<ParameterName>>,
}

/// An anonymous function, `[<return type>] (<parameters>)`.
#[derive(Clone)]
pub struct LambdaName {
    inner: Arc<LambdaInner>,
}

impl LambdaName {
    /// Parse a lambda identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] for malformed identifiers.
    pub fn new(identifier: &str) -> Result<Self> {
        let invalid = || Error::InvalidIdentifier {
            kind: "lambda",
            identifier: identifier.to_string(),
        };
        let (return_close, params_open) = split_value_type(identifier).ok_or_else(invalid)?;
        if identifier.as_bytes().get(params_open) != Some(&b'(') {
            return Err(invalid());
        }
        let params_close =
            find_corresponding_close_bracket(identifier, params_open).map_err(|_| invalid())?;
        if params_close + 1 != identifier.len() {
            return Err(invalid());
        }

        Ok(LambdaName {
            inner: Arc::new(LambdaInner {
                identifier: identifier.to_string(),
                return_close,
                params_open,
                params_close,
                return_type: OnceLock::new(),
                parameters: OnceLock::new(),
            }),
        })
    }

    /// The unknown lambda, `[?] ()`.
    #[must_use]
    pub fn unknown() -> Self {
        LambdaName {
            inner: Arc::new(LambdaInner {
                identifier: UNKNOWN_LAMBDA_IDENTIFIER.to_string(),
                return_close: 2,
                params_open: 4,
                params_close: 5,
                return_type: OnceLock::new(),
                parameters: OnceLock::new(),
            }),
        }
    }

    /// Build `[<return type>] (<parameters>)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if the parts do not form a valid lambda.
    pub fn from_parts(return_type: &TypeName, parameters: &[ParameterName]) -> Result<Self> {
        Self::new(&format!(
            "[{}] {}",
            return_type.identifier(),
            format_parameters(parameters)
        ))
    }

    /// The canonical identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    /// Returns `true` for `[?] ()`.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.identifier() == UNKNOWN_LAMBDA_IDENTIFIER
    }

    /// The return type.
    #[must_use]
    pub fn return_type(&self) -> &TypeName {
        self.inner
            .return_type
            .get_or_init(|| TypeName::new(&self.inner.identifier[1..self.inner.return_close]))
    }

    /// The parameter list including its parentheses.
    #[must_use]
    pub fn signature(&self) -> &str {
        &self.inner.identifier[self.inner.params_open..]
    }

    /// The lambda parameters, parsed once.
    pub fn parameters(&self) -> &[ParameterName] {
        self.inner.parameters.get_or_init(|| {
            parse_parameters(
                &self.inner.identifier,
                self.inner.params_open,
                self.inner.params_close,
            )
        })
    }

    /// Returns `true` if the lambda takes at least one parameter.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters().is_empty()
    }
}

impl_name_identity!(LambdaName);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_variable() {
        let v = LocalVariableName::new("[n.C`1[[T]], P] items").unwrap();
        assert_eq!(v.name(), "items");
        assert_eq!(v.value_type().identifier(), "n.C`1[[T]], P");
        assert!(!v.is_unknown());
        assert!(LocalVariableName::unknown().is_unknown());
        assert_eq!(LocalVariableName::unknown().name(), "???");
    }

    #[test]
    fn test_local_variable_from_parts() {
        let v = LocalVariableName::from_parts(&TypeName::new("p:int"), "i").unwrap();
        assert_eq!(v.identifier(), "[p:int] i");
        assert!(LocalVariableName::from_parts(&TypeName::new("p:int"), "").is_err());
    }

    #[test]
    fn test_invalid_local_variables() {
        for id in ["i", "[p:int]", "[p:int] ", "[p:int i"] {
            assert!(LocalVariableName::new(id).is_err(), "{}", id);
        }
    }

    #[test]
    fn test_lambda() {
        let l = LambdaName::new("[p:string] ([p:int] length, [p:char] c)").unwrap();
        assert!(l.return_type().is_predefined());
        assert!(l.has_parameters());
        assert_eq!(l.parameters()[1].name(), "c");
        assert_eq!(l.signature(), "([p:int] length, [p:char] c)");
        assert!(std::ptr::eq(l.parameters(), l.parameters()));
    }

    #[test]
    fn test_lambda_without_parameters() {
        let l = LambdaName::new("[p:void] ()").unwrap();
        assert!(!l.has_parameters());
        assert!(LambdaName::unknown().is_unknown());
        assert_eq!(LambdaName::unknown(), LambdaName::new("[?] ()").unwrap());
    }

    #[test]
    fn test_lambda_from_parts() {
        let l = LambdaName::from_parts(
            &TypeName::new("p:bool"),
            &[ParameterName::new("[p:int] x").unwrap()],
        )
        .unwrap();
        assert_eq!(l.identifier(), "[p:bool] ([p:int] x)");
    }

    #[test]
    fn test_invalid_lambdas() {
        for id in ["()", "[p:void]()", "[p:void] (", "[p:void] () x"] {
            assert!(LambdaName::new(id).is_err(), "{}", id);
        }
    }
}
