use std::sync::{Arc, OnceLock};

use crate::{
    names::{
        members::ParameterName,
        organization::{AssemblyName, NamespaceName},
        tokenizer::parse_parameter_list,
        types::{
            classifier::{delegate_shape, DelegateShape},
            TypeInfo, TypeName, TypeParameterName,
        },
    },
    Error, Result,
};

struct DelegateInner {
    identifier: String,
    shape: DelegateShape,
    delegate_type: OnceLock<TypeName>,
    return_type: OnceLock<TypeName>,
    parameters: OnceLock<Vec<ParameterName>>,
    signature: OnceLock<String>,
}

/// A delegate type, `d:[<return type>] [<delegate type>].(<parameters>)`.
///
/// Return and parameter types are parsed on first access. A delegate whose return type is its
/// own delegate type returns itself from [`DelegateTypeName::return_type`].
#[derive(Clone)]
pub struct DelegateTypeName {
    inner: Arc<DelegateInner>,
}

impl DelegateTypeName {
    /// Parse a delegate identifier without array suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIdentifier`] if `identifier` is not a delegate or is a delegate
    /// array.
    pub fn new(identifier: &str) -> Result<Self> {
        let shape = delegate_shape(identifier)
            .filter(|s| s.array.is_none())
            .ok_or_else(|| Error::InvalidIdentifier {
                kind: "delegate type",
                identifier: identifier.to_string(),
            })?;

        Ok(DelegateTypeName {
            inner: Arc::new(DelegateInner {
                identifier: identifier.to_string(),
                shape,
                delegate_type: OnceLock::new(),
                return_type: OnceLock::new(),
                parameters: OnceLock::new(),
                signature: OnceLock::new(),
            }),
        })
    }

    /// The type that declares the delegate, the second bracketed segment.
    #[must_use]
    pub fn delegate_type(&self) -> &TypeName {
        self.inner.delegate_type.get_or_init(|| {
            TypeName::new(self.inner.shape.declaring_id(&self.inner.identifier))
        })
    }

    fn declaring_id(&self) -> &str {
        self.inner.shape.declaring_id(&self.inner.identifier)
    }

    fn return_id(&self) -> &str {
        self.inner.shape.return_id(&self.inner.identifier)
    }

    /// The return type of the delegate's invoke signature.
    #[must_use]
    pub fn return_type(&self) -> TypeName {
        if self.return_id() == self.declaring_id() {
            return TypeName::Delegate(self.clone());
        }
        self.inner
            .return_type
            .get_or_init(|| TypeName::new(self.return_id()))
            .clone()
    }

    /// The parameters of the invoke signature.
    pub fn parameters(&self) -> &[ParameterName] {
        self.inner.parameters.get_or_init(|| {
            let shape = &self.inner.shape;
            let entries =
                parse_parameter_list(&self.inner.identifier, shape.params_open, shape.params_close)
                    .unwrap_or_default();
            entries
                .into_iter()
                .map(|entry| {
                    ParameterName::new(entry).unwrap_or_else(|err| {
                        log::warn!("Unparseable delegate parameter '{}': {}", entry, err);
                        ParameterName::unknown()
                    })
                })
                .collect()
        })
    }

    /// Returns `true` if the invoke signature takes at least one parameter.
    #[must_use]
    pub fn has_parameters(&self) -> bool {
        !self.parameters().is_empty()
    }

    /// The delegate name followed by the raw parameter list, `D([p:int] i)`.
    #[must_use]
    pub fn signature(&self) -> &str {
        self.inner.signature.get_or_init(|| {
            let shape = &self.inner.shape;
            format!(
                "{}{}",
                self.name(),
                &self.inner.identifier[shape.params_open..=shape.params_close]
            )
        })
    }

    /// Returns `true` if the return type or a parameter type refers back to the delegate type.
    #[must_use]
    pub fn is_recursive(&self) -> bool {
        let declaring = self.declaring_id();
        let refers = |t: &TypeName| {
            t.identifier() == declaring
                || matches!(t, TypeName::TypeParameter(tp)
                    if tp.is_bound() && tp.type_parameter_type().identifier() == declaring)
        };
        if self.return_id() == declaring {
            return true;
        }
        refers(&self.return_type()) || self.parameters().iter().any(|p| refers(p.value_type()))
    }
}

impl_name_identity!(DelegateTypeName);

impl TypeInfo for DelegateTypeName {
    fn identifier(&self) -> &str {
        &self.inner.identifier
    }

    fn name(&self) -> &str {
        self.delegate_type().name()
    }

    fn full_name(&self) -> &str {
        self.delegate_type().full_name()
    }

    fn namespace(&self) -> NamespaceName {
        self.delegate_type().namespace()
    }

    fn assembly(&self) -> AssemblyName {
        self.delegate_type().assembly()
    }

    fn declaring_type(&self) -> Option<TypeName> {
        self.delegate_type().declaring_type()
    }

    fn is_nested_type(&self) -> bool {
        self.delegate_type().is_nested_type()
    }

    fn is_reference_type(&self) -> bool {
        true
    }

    fn is_delegate_type(&self) -> bool {
        true
    }

    fn is_generic_entity(&self) -> bool {
        self.delegate_type().is_generic_entity()
    }

    fn type_parameters(&self) -> &[TypeParameterName] {
        self.delegate_type().type_parameters()
    }
}
