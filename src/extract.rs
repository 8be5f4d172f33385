//! Declaration walk — per-declaration diagnostics plus record production.
//!
//! Marker classification selects only which progress message is printed;
//! extraction runs identically on both branches. A declaration yields a
//! record exactly when it carries a documentation comment, in encounter
//! order: types in file order, method members in declaration order.

use crate::classify;
use crate::model::{Comment, MemberKind, ParsedUnit, Record, RecordKind};

/// Walk one parsed unit, appending a record for every documented type and
/// method to the run-local list.
pub fn extract_unit(unit: &ParsedUnit, records: &mut Vec<Record>) {
    for ty in &unit.types {
        if classify::type_is_marked(ty) {
            println!("Class {} is annotated with @{}", ty.name, classify::TYPE_MARKER);
        } else {
            println!("Class {} is not annotated with @{}", ty.name, classify::TYPE_MARKER);
        }

        match &ty.doc {
            Some(Comment::Documentation(text)) => {
                println!("Class {} has JavaDoc comment", ty.name);
                records.push(Record {
                    kind: RecordKind::Type,
                    name: ty.name.clone(),
                    enclosing: None,
                    comment: text.clone(),
                });
            }
            _ => println!("Class {} has no JavaDoc comment", ty.name),
        }

        for member in &ty.members {
            if member.kind != MemberKind::Method {
                continue;
            }

            if classify::method_is_marked(member) {
                println!(
                    "Method {} in class {} is annotated with @{}",
                    member.name,
                    ty.name,
                    classify::METHOD_MARKER
                );
            } else {
                println!(
                    "Method {} in class {} is not annotated with @{}",
                    member.name,
                    ty.name,
                    classify::METHOD_MARKER
                );
            }

            match &member.doc {
                Some(Comment::Documentation(text)) => {
                    println!("Method {} in class {} has JavaDoc comment", member.name, ty.name);
                    records.push(Record {
                        kind: RecordKind::Method,
                        name: member.name.clone(),
                        enclosing: Some(ty.name.clone()),
                        comment: text.clone(),
                    });
                }
                _ => println!(
                    "Method {} in class {} has no JavaDoc comment",
                    member.name, ty.name
                ),
            }
        }
        println!();
    }
}
