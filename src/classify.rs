//! Marker-annotation classification.
//!
//! Matching is exact string equality on the simple (unqualified) annotation
//! name. An annotation that shares the marker's simple name but lives in an
//! unrelated package is indistinguishable here and classifies as marked.
//! That looseness is a documented policy decision, not an accident.
//!
//! Classification never fails; an absent marker is an ordinary outcome. It
//! also never gates report inclusion — it only selects the progress message.

use crate::model::{MemberDecl, TypeDecl};

/// Marker annotation checked on type declarations.
pub const TYPE_MARKER: &str = "ClassDocumentation";

/// Marker annotation checked on method declarations.
pub const METHOD_MARKER: &str = "MethodDocumentation";

pub fn type_is_marked(decl: &TypeDecl) -> bool {
    decl.annotations.iter().any(|name| name == TYPE_MARKER)
}

pub fn method_is_marked(member: &MemberDecl) -> bool {
    member.annotations.iter().any(|name| name == METHOD_MARKER)
}
