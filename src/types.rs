use std::fmt;

/// The root operation type a scaffolded field is declared on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaType {
    Query,
    Mutation,
}

impl SchemaType {
    pub const ALL: [SchemaType; 2] = [SchemaType::Query, SchemaType::Mutation];

    // NOTE: tags are free text on the command line. Only `Query` and the `q` shorthand select
    // Query; everything else (including a lowercase `query`) falls through to Mutation.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Query" | "q" => SchemaType::Query,
            _ => SchemaType::Mutation,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaType::Query => "Query",
            SchemaType::Mutation => "Mutation",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One of the two generated files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Resolvers,
    TypeDefs,
}

impl TemplateKind {
    /// Generation order: resolvers first, then type definitions.
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Resolvers, TemplateKind::TypeDefs];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "resolvers" => Some(TemplateKind::Resolvers),
            "typeDefs" => Some(TemplateKind::TypeDefs),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TemplateKind::Resolvers => "resolvers",
            TemplateKind::TypeDefs => "typeDefs",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TemplateKind::Resolvers => ".resolvers.js",
            TemplateKind::TypeDefs => ".typeDefs.js",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
