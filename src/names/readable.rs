//! Human-readable rendering of names.
//!
//! Identifiers are precise but noisy. [`Readable::to_readable`] renders them the way they would
//! be written in source: language aliases for built-in types, `List<int>` instead of
//! ``List`1[[T -> p:int]]``, array suffixes after the element type, and neither namespaces nor
//! assemblies.
//!
//! # Examples
//!
//! ```rust
//! use namescope::names::{readable::Readable, MethodName, TypeName};
//!
//! let dict = TypeName::parse(
//!     "System.Collections.Generic.Dictionary`2[[TKey -> p:string],[TValue -> p:int[]]], mscorlib, 4.0.0.0",
//! );
//! assert_eq!(dict.to_readable(), "Dictionary<string, int[]>");
//!
//! let method = MethodName::new("[p:void] [n.C, P].M([s:n.S, P] s, out [p:int] i)")?;
//! assert_eq!(method.to_readable(), "C.M(S s, out int i)");
//! # Ok::<(), namescope::Error>(())
//! ```

use crate::names::{
    serialization::Name, tokenizer::array_suffix, types::alias_for_full_name, ArrayType,
    EventName, FieldName, LambdaName, LocalVariableName, MemberInfo, MethodName, ParameterName,
    PropertyName, TypeInfo, TypeName, TypeParameterName,
};

/// Rendering as it would appear in source code.
pub trait Readable {
    /// The readable form of the name.
    fn to_readable(&self) -> String;
}

impl Readable for TypeName {
    fn to_readable(&self) -> String {
        match self {
            TypeName::Unknown(_) => "?".to_string(),
            TypeName::Predefined(predefined) => predefined.name().to_string(),
            TypeName::TypeParameter(tp) => type_parameter(tp),
            TypeName::Array(array) => format!(
                "{}{}",
                array.array_base_type().to_readable(),
                array_suffix(array.rank())
            ),
            TypeName::Delegate(delegate) => delegate.delegate_type().to_readable(),
            TypeName::Regular(regular) => {
                let simple = match regular.type_parameters() {
                    [] => alias_for_full_name(regular.full_name()).unwrap_or(regular.name()),
                    _ => regular.name(),
                };
                if !regular.has_type_parameters() {
                    return simple.to_string();
                }
                let arguments: Vec<String> = regular
                    .type_parameters()
                    .iter()
                    .map(type_argument)
                    .collect();
                format!("{}<{}>", simple, arguments.join(", "))
            }
        }
    }
}

/// A type parameter in declaration position: the bound type when bound, otherwise its name.
fn type_parameter(tp: &TypeParameterName) -> String {
    if !tp.is_bound() {
        return tp.name().to_string();
    }
    let bound = tp.type_parameter_type().to_readable();
    if tp.is_array() {
        format!("{}{}", bound, array_suffix(tp.rank()))
    } else {
        bound
    }
}

/// A type parameter inside `<...>`.
fn type_argument(tp: &TypeParameterName) -> String {
    if tp.is_bound() {
        type_parameter(tp)
    } else {
        tp.type_parameter_short_name().to_string()
    }
}

fn parameter_list(parameters: &[ParameterName]) -> String {
    let entries: Vec<String> = parameters.iter().map(Readable::to_readable).collect();
    format!("({})", entries.join(", "))
}

impl Readable for ParameterName {
    fn to_readable(&self) -> String {
        let mut out = String::new();
        if self.is_passed_by_reference() && self.value_type().is_value_type() {
            out.push_str("ref ");
        }
        if self.is_output() {
            out.push_str("out ");
        }
        if self.is_optional() {
            out.push_str("opt ");
        }
        if self.is_parameter_array() {
            out.push_str("params ");
        }
        out.push_str(&self.value_type().to_readable());
        out.push(' ');
        out.push_str(self.name());
        out
    }
}

impl Readable for MethodName {
    fn to_readable(&self) -> String {
        let mut out = format!("{}.{}", self.declaring_type().to_readable(), self.name());
        if self.has_type_parameters() {
            let arguments: Vec<String> =
                self.type_parameters().iter().map(type_argument).collect();
            out.push('<');
            out.push_str(&arguments.join(", "));
            out.push('>');
        }
        out.push_str(&parameter_list(self.parameters()));
        out
    }
}

impl Readable for PropertyName {
    fn to_readable(&self) -> String {
        let head = format!("{}.{}", self.declaring_type().to_readable(), self.name());
        if self.has_parameters() {
            format!("{}{}", head, parameter_list(self.parameters()))
        } else {
            head
        }
    }
}

impl Readable for FieldName {
    fn to_readable(&self) -> String {
        format!("{}.{}", self.declaring_type().to_readable(), self.name())
    }
}

impl Readable for EventName {
    fn to_readable(&self) -> String {
        format!("{}.{}", self.declaring_type().to_readable(), self.name())
    }
}

impl Readable for LocalVariableName {
    fn to_readable(&self) -> String {
        format!("{} {}", self.value_type().to_readable(), self.name())
    }
}

impl Readable for LambdaName {
    fn to_readable(&self) -> String {
        format!(
            "{} => {}",
            parameter_list(self.parameters()),
            self.return_type().to_readable()
        )
    }
}

/// Organizational names have no shorter form and render as their identifier.
impl Readable for Name {
    fn to_readable(&self) -> String {
        match self {
            Name::Type(name) => name.to_readable(),
            Name::Method(name) => name.to_readable(),
            Name::Field(name) => name.to_readable(),
            Name::Property(name) => name.to_readable(),
            Name::Event(name) => name.to_readable(),
            Name::Parameter(name) => name.to_readable(),
            Name::LocalVariable(name) => name.to_readable(),
            Name::Lambda(name) => name.to_readable(),
            Name::Assembly(_) | Name::Version(_) | Name::Namespace(_) => self.identifier(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readable(id: &str) -> String {
        TypeName::parse(id).to_readable()
    }

    #[test]
    fn test_readable_simple_types() {
        assert_eq!(readable("?"), "?");
        assert_eq!(readable("p:int"), "int");
        assert_eq!(readable("p:string[,]"), "string[,]");
        assert_eq!(readable("n.C, P"), "C");
        assert_eq!(readable("n.C+D, P"), "D");
        assert_eq!(readable("s:System.Int32, mscorlib, 4.0.0.0"), "int");
    }

    #[test]
    fn test_readable_generics() {
        assert_eq!(
            readable("System.Collections.Generic.List`1[[T -> p:int]], mscorlib, 4.0.0.0"),
            "List<int>"
        );
        assert_eq!(readable("n.C`2[[T],[U -> n.D, P]], P"), "C<T, D>");
        assert_eq!(readable("n.C`1[[T -> n.D`1[[U -> p:bool]], P]], P"), "C<D<bool>>");
    }

    #[test]
    fn test_readable_arrays() {
        assert_eq!(readable("n.C[], P"), "C[]");
        assert_eq!(readable("n.C`1[,][[T -> p:int]], P"), "C<int>[,]");
        assert_eq!(readable("?[]"), "?[]");
        assert_eq!(readable("d:[p:void] [n.D, P].()[]"), "D[]");
    }

    #[test]
    fn test_readable_type_parameters() {
        assert_eq!(readable("T"), "T");
        assert_eq!(readable("T[]"), "T[]");
        assert_eq!(readable("T -> p:int"), "int");
        assert_eq!(readable("T[] -> p:int"), "int[]");
    }

    #[test]
    fn test_readable_delegate() {
        assert_eq!(readable("d:[p:void] [n.Action, P].([p:int] i)"), "Action");
    }

    #[test]
    fn test_readable_parameters() {
        let p = ParameterName::new("ref [s:n.S, P] s").unwrap();
        assert_eq!(p.to_readable(), "ref S s");
        let p = ParameterName::new("ref [n.C, P] c").unwrap();
        assert_eq!(p.to_readable(), "C c");
        let p = ParameterName::new("params [p:int[]] xs").unwrap();
        assert_eq!(p.to_readable(), "params int[] xs");
        let p = ParameterName::new("opt [p:string] s").unwrap();
        assert_eq!(p.to_readable(), "opt string s");
    }

    #[test]
    fn test_readable_members() {
        let method =
            MethodName::new("[p:void] [n.C`1[[T]], P].M`1[[U]]([T] t, [U] u)").unwrap();
        assert_eq!(method.to_readable(), "C<T>.M<U>(T t, U u)");

        let field = FieldName::new("static [p:int] [n.C, P]._f").unwrap();
        assert_eq!(field.to_readable(), "C._f");

        let event = EventName::new("[n.H, P] [n.C, P].E").unwrap();
        assert_eq!(event.to_readable(), "C.E");

        let property = PropertyName::new("get [p:int] [n.C, P].P()").unwrap();
        assert_eq!(property.to_readable(), "C.P");

        let indexer = PropertyName::new("get [p:int] [n.C, P].Item([p:int] i)").unwrap();
        assert_eq!(indexer.to_readable(), "C.Item(int i)");
    }

    #[test]
    fn test_readable_locals_and_lambdas() {
        let local = LocalVariableName::new("[n.C`1[[T -> p:int]], P] items").unwrap();
        assert_eq!(local.to_readable(), "C<int> items");

        let lambda = LambdaName::new("[p:bool] ([p:int] x, [p:string] s)").unwrap();
        assert_eq!(lambda.to_readable(), "(int x, string s) => bool");
    }

    #[test]
    fn test_readable_name_dispatch() {
        let name = Name::Type(TypeName::new("p:int"));
        assert_eq!(name.to_readable(), "int");
        let namespace = Name::Namespace(crate::names::NamespaceName::new("System.IO"));
        assert_eq!(namespace.to_readable(), "System.IO");
    }
}
