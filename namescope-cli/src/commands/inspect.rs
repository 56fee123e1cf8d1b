use namescope::prelude::*;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    commands::common::decode_or_type,
    output::{print_fields, print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
struct Field {
    key: &'static str,
    value: String,
}

#[derive(Debug, Serialize)]
struct NameInfo {
    token: String,
    kind: &'static str,
    identifier: String,
    readable: String,
    fields: Vec<Field>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    type_parameters: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    parameters: Vec<String>,
}

impl NameInfo {
    fn field(&mut self, key: &'static str, value: impl ToString) {
        self.fields.push(Field {
            key,
            value: value.to_string(),
        });
    }
}

fn type_traits(t: &TypeName) -> String {
    let checks: [(&str, bool); 9] = [
        ("void", t.is_void_type()),
        ("value", t.is_value_type()),
        ("reference", t.is_reference_type()),
        ("class", t.is_class_type()),
        ("struct", t.is_struct_type()),
        ("enum", t.is_enum_type()),
        ("interface", t.is_interface_type()),
        ("nullable", t.is_nullable_type()),
        ("nested", t.is_nested_type()),
    ];
    let set: Vec<&str> = checks
        .iter()
        .filter(|(_, on)| *on)
        .map(|(label, _)| *label)
        .collect();
    if set.is_empty() {
        "-".to_string()
    } else {
        set.join(", ")
    }
}

fn describe_type(info: &mut NameInfo, t: &TypeName) {
    let variant: &'static str = t.kind().into();
    info.field("variant", variant);
    info.field("name", t.name());
    info.field("full name", t.full_name());
    info.field("namespace", t.namespace());
    info.field("assembly", t.assembly());
    info.field("traits", type_traits(t));
    if let Some(declaring) = t.declaring_type() {
        info.field("declaring type", declaring);
    }
    if let Ok(array) = t.as_array_type() {
        info.field("rank", array.rank());
        info.field("element type", array.array_base_type());
    }
    if let Ok(delegate) = t.as_delegate_type() {
        info.field("delegate type", delegate.delegate_type());
        info.field("return type", delegate.return_type());
        info.parameters = identifiers(delegate.parameters());
    }
    if let Ok(tp) = t.as_type_parameter() {
        info.field("short name", tp.type_parameter_short_name());
        if tp.is_bound() {
            info.field("bound to", tp.type_parameter_type());
        }
    }
    info.type_parameters = t
        .type_parameters()
        .iter()
        .map(|tp| tp.identifier().to_string())
        .collect();
}

fn describe_member(info: &mut NameInfo, member: &impl MemberInfo) {
    info.field("name", member.name());
    info.field("full name", member.full_name());
    info.field("declaring type", member.declaring_type());
    info.field("value type", member.value_type());
    info.field("static", member.is_static());
}

fn identifiers(parameters: &[ParameterName]) -> Vec<String> {
    parameters
        .iter()
        .map(|p| p.identifier().to_string())
        .collect()
}

fn describe(token: &str, name: &Name) -> NameInfo {
    let mut info = NameInfo {
        token: token.to_string(),
        kind: name.kind_name(),
        identifier: name.identifier(),
        readable: name.to_readable(),
        fields: Vec::new(),
        type_parameters: Vec::new(),
        parameters: Vec::new(),
    };

    match name {
        Name::Type(t) => describe_type(&mut info, t),
        Name::Method(m) => {
            describe_member(&mut info, m);
            info.field("constructor", m.is_constructor());
            info.field("extension method", m.is_extension_method());
            info.type_parameters = m
                .type_parameters()
                .iter()
                .map(|tp| tp.identifier().to_string())
                .collect();
            info.parameters = identifiers(m.parameters());
        }
        Name::Field(f) => describe_member(&mut info, f),
        Name::Event(e) => describe_member(&mut info, e),
        Name::Property(p) => {
            describe_member(&mut info, p);
            info.field("getter", p.has_getter());
            info.field("setter", p.has_setter());
            info.field("indexer", p.is_indexer());
            info.parameters = identifiers(p.parameters());
        }
        Name::Parameter(p) => {
            info.field("name", p.name());
            info.field("value type", p.value_type());
            info.field("modifiers", format!("{:?}", p.modifiers()));
        }
        Name::LocalVariable(l) => {
            info.field("name", l.name());
            info.field("value type", l.value_type());
        }
        Name::Lambda(l) => {
            info.field("return type", l.return_type());
            info.parameters = identifiers(l.parameters());
        }
        Name::Assembly(a) => {
            info.field("name", a.name());
            info.field("version", a.version());
            info.field("local project", a.is_local_project());
        }
        Name::Version(v) => {
            info.field("unknown", v.is_unknown());
        }
        Name::Namespace(n) => {
            info.field("name", n.name());
            info.field("global", n.is_global_namespace());
            if let Some(parent) = n.parent_namespace() {
                info.field("parent", parent);
            }
        }
    }
    info
}

fn display(info: &NameInfo) {
    let mut fields: Vec<(&str, String)> = vec![
        ("kind", info.kind.to_string()),
        ("identifier", info.identifier.clone()),
        ("readable", info.readable.clone()),
    ];
    fields.extend(info.fields.iter().map(|f| (f.key, f.value.clone())));
    print_fields(&fields);

    for (title, entries) in [
        ("Type parameters", &info.type_parameters),
        ("Parameters", &info.parameters),
    ] {
        if entries.is_empty() {
            continue;
        }
        println!();
        println!("{title}:");
        let mut writer = TabWriter::new(vec![("#", Align::Right), ("IDENTIFIER", Align::Left)])
            .indent("  ");
        for (idx, entry) in entries.iter().enumerate() {
            writer.row(vec![idx.to_string(), entry.clone()]);
        }
        writer.print();
    }
}

pub fn run(token: &str, opts: &GlobalOptions) -> anyhow::Result<()> {
    let name = decode_or_type(token)?;
    let info = describe(token, &name);
    print_output(&info, opts, display)
}
