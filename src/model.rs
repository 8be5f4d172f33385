//! Data model for parsed declarations and report records — format-agnostic.

/// Structural result of parsing one source file.
///
/// Owns the top-level type declarations; discarded once extraction for the
/// file completes.
#[derive(Debug, Default)]
pub struct ParsedUnit {
    pub types: Vec<TypeDecl>,
}

/// One type declaration (class, interface, enum, annotation type) in a unit.
#[derive(Debug, Default)]
pub struct TypeDecl {
    pub name: String,
    /// Simple names of the annotations on the declaration. May be empty.
    pub annotations: Vec<String>,
    /// Comment immediately preceding the declaration, if any.
    pub doc: Option<Comment>,
    /// Members in declaration order.
    pub members: Vec<MemberDecl>,
}

/// One member of a type. Only method-kind members are classified and
/// extracted downstream; the parser still exposes the rest.
#[derive(Debug, Default)]
pub struct MemberDecl {
    pub kind: MemberKind,
    pub name: String,
    pub annotations: Vec<String>,
    pub doc: Option<Comment>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    #[default]
    Method,
    Constructor,
    Field,
    NestedType,
}

/// Comment attached to a declaration.
///
/// Only the documentation variant (`/** ... */`) is extracted into the
/// report; plain comments (`/* ... */`, `//`) count as "no JavaDoc comment".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comment {
    Documentation(String),
    Plain(String),
}

/// Kind of declaration a record was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Type,
    Method,
}

/// One extracted documentation comment with its declaration context.
///
/// Appended to the run-local list in declaration-encounter order and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub kind: RecordKind,
    pub name: String,
    /// Enclosing type name; present for method records only.
    pub enclosing: Option<String>,
    /// Verbatim comment text, including the `/** ... */` markers.
    pub comment: String,
}

impl Record {
    /// Labeled text block as it appears in the report artifact.
    pub fn render(&self) -> String {
        match self.kind {
            RecordKind::Type => {
                format!("Class {} has JavaDoc comment: \n{}\n", self.name, self.comment)
            }
            RecordKind::Method => format!(
                "Method {} in class {} has JavaDoc comment: \n{}\n",
                self.name,
                self.enclosing.as_deref().unwrap_or_default(),
                self.comment
            ),
        }
    }
}
