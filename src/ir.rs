// Inferred type tree. No serde_json::Value here.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InferredType {
    Bool,
    String,
    Integer,
    Float,
    Dynamic,                 // null, or the element of an empty array
    Array { element: Box<InferredType> },
    Record { fields: Vec<Field> }, // sorted by identifier
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub key: String,         // original JSON key, used for the tag
    pub identifier: String,  // canonical, unique within the record
    pub ty: InferredType,
}

impl InferredType {
    pub fn array(element: InferredType) -> Self {
        InferredType::Array { element: Box::new(element) }
    }

    #[cfg(test)]
    pub(crate) fn is_record(&self) -> bool {
        matches!(self, InferredType::Record { .. })
    }

    #[cfg(test)]
    pub(crate) fn field(&self, identifier: &str) -> Option<&Field> {
        match self {
            InferredType::Record { fields } => fields.iter().find(|f| f.identifier == identifier),
            _ => None,
        }
    }
}

/// Single-line Go spelling, used in error messages.
impl std::fmt::Display for InferredType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InferredType::Bool => write!(f, "bool"),
            InferredType::String => write!(f, "string"),
            InferredType::Integer => write!(f, "int64"),
            InferredType::Float => write!(f, "float64"),
            InferredType::Dynamic => write!(f, "interface{{}}"),
            InferredType::Array { element } => write!(f, "[]{element}"),
            InferredType::Record { fields } if fields.is_empty() => write!(f, "struct{{}}"),
            InferredType::Record { fields } => {
                write!(f, "struct {{ ")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{} {}", field.identifier, field.ty)?;
                }
                write!(f, " }}")
            }
        }
    }
}
