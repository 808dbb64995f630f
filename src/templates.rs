use crate::types::{SchemaType, TemplateKind};

pub const RESOLVERS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/resolvers.js.tpl"
));
pub const TYPE_DEFS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/templates/typeDefs.js.tpl"
));

/// Uppercases the first character and leaves the rest untouched.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Renders the template named by `key` (`resolvers` or `typeDefs`).
///
/// Returns `None` for any other key.
pub fn render(key: &str, schema: &str, type_tag: &str) -> Option<String> {
    let kind = TemplateKind::from_key(key)?;
    Some(render_kind(kind, schema, SchemaType::from_tag(type_tag)))
}

pub fn render_kind(kind: TemplateKind, schema: &str, schema_type: SchemaType) -> String {
    let source = match kind {
        TemplateKind::Resolvers => RESOLVERS,
        TemplateKind::TypeDefs => TYPE_DEFS,
    };
    let capitalized = capitalize(schema);
    interpolate(source, |name| match name {
        "schema" => Some(schema),
        "Schema" => Some(capitalized.as_str()),
        "type" => Some(schema_type.as_str()),
        _ => None,
    })
}

// Single pass over `{{name}}` placeholders; substituted text is never rescanned.
fn interpolate<'a>(source: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            break;
        };
        match lookup(&after[..end]) {
            Some(value) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &after[end + 2..];
            }
            None => {
                out.push_str(&rest[..start + 2]);
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
