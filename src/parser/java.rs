//! Java structural parser — line-by-line state machine.
//!
//! Produces a declaration tree: types with their annotations, attached
//! comments, and ordered members. Comments are classified at this boundary
//! as documentation (`/** ... */`) or plain (`/* ... */`, `//`). Brace depth
//! is tracked with string/char literals and comments blanked out, so nested
//! bodies do not confuse member attribution. This is a structural scan, not
//! a compiler front-end: it never resolves names or types.

use crate::error::ParseError;
use crate::model::*;
use regex::Regex;
use std::mem;
use std::sync::LazyLock;

static RE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*)").unwrap()
});

// `@interface Name` declares an annotation type, not an annotation use.
static RE_ANNOTATION_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?:public|protected|private|static|final|abstract)\s+)*",
        r"@\s*interface\s+([A-Za-z_$][\w$]*)"
    ))
    .unwrap()
});

static RE_TYPE_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?:public|protected|private|static|final|abstract|strictfp|sealed)\s+)*",
        r"(class|interface|enum)\s+([A-Za-z_$][\w$]*)"
    ))
    .unwrap()
});

static RE_METHOD_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?:public|protected|private|static|final|abstract|synchronized|native|default|strictfp)\s+)*",
        r"(?:<[^(]*>\s*)?",
        r"([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*(?:\s*<[^(]*>)?(?:\s*\[\s*\])*)",
        r"\s+([A-Za-z_$][\w$]*)\s*\("
    ))
    .unwrap()
});

static RE_CTOR_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:public|protected|private)\s+)*([A-Z][\w$]*)\s*\(").unwrap()
});

static RE_FIELD_DECL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:(?:public|protected|private|static|final|transient|volatile)\s+)*",
        r"([A-Za-z_$][\w$]*(?:\.[A-Za-z_$][\w$]*)*(?:\s*<[^=;]*>)?(?:\s*\[\s*\])*)",
        r"\s+([A-Za-z_$][\w$]*)(?:\s*\[\s*\])*\s*[=;]"
    ))
    .unwrap()
});

/// Statement keywords that would otherwise look like a return type.
const STMT_KEYWORDS: &[&str] = &[
    "return", "new", "throw", "throws", "if", "else", "while", "for", "do", "switch", "case",
    "break", "continue", "assert", "this", "super", "yield",
];

// Backtracking can leave a modifier in the type position (`public Widget(`
// would otherwise read as a method named Widget with return type `public`).
const MODIFIER_KEYWORDS: &[&str] = &[
    "public", "protected", "private", "static", "final", "abstract", "synchronized", "native",
    "default", "strictfp", "transient", "volatile",
];

fn is_type_token(head: &str) -> bool {
    !STMT_KEYWORDS.contains(&head) && !MODIFIER_KEYWORDS.contains(&head)
}

/// Parse Java source text into a declaration tree.
pub fn parse(content: &str) -> Result<ParsedUnit, ParseError> {
    let mut parser = Parser::default();
    for raw in content.lines() {
        parser.line(raw)?;
    }
    parser.finish()
}

/// A type declaration whose body has not closed yet.
#[derive(Default)]
struct OpenType {
    decl: TypeDecl,
    /// Brace depth of the type body, once its `{` has been seen.
    body_depth: Option<usize>,
    nested: bool,
}

/// A block comment continuing across lines.
#[derive(Default)]
struct BlockComment {
    doc: bool,
    /// False when the comment trails code on its opening line; such a
    /// comment is consumed but never attaches to a declaration.
    attach: bool,
    text: String,
}

#[derive(Default)]
struct Parser {
    unit: ParsedUnit,
    stack: Vec<OpenType>,
    depth: usize,
    /// Comment waiting to attach to the next declaration.
    pending: Option<Comment>,
    /// Annotation simple names waiting to attach to the next declaration.
    pending_annotations: Vec<String>,
    block: Option<BlockComment>,
    /// Paren depth of an annotation argument list left open on an earlier
    /// line. Braces inside the arguments must not reach brace tracking.
    ann_parens: usize,
}

impl Parser {
    fn line(&mut self, raw: &str) -> Result<(), ParseError> {
        let mut rest = raw;

        // Continue an open block comment.
        if self.block.is_some() {
            let Some(idx) = rest.find("*/") else {
                if let Some(block) = self.block.as_mut() {
                    block.text.push('\n');
                    block.text.push_str(rest.trim());
                }
                return Ok(());
            };
            if let Some(mut block) = self.block.take() {
                block.text.push('\n');
                block.text.push_str(rest[..idx + 2].trim());
                if block.attach {
                    self.pending = Some(if block.doc {
                        Comment::Documentation(block.text)
                    } else {
                        Comment::Plain(block.text)
                    });
                }
            }
            rest = &rest[idx + 2..];
        }

        let code = self.strip_line(rest);
        let mut trimmed = code.trim();

        // Finish an annotation argument list left open on an earlier line.
        if self.ann_parens > 0 {
            let mut end = None;
            for (i, c) in trimmed.char_indices() {
                match c {
                    '(' => self.ann_parens += 1,
                    ')' => {
                        self.ann_parens -= 1;
                        if self.ann_parens == 0 {
                            end = Some(i + 1);
                            break;
                        }
                    }
                    _ => {}
                }
            }
            match end {
                Some(i) => trimmed = trimmed[i..].trim(),
                None => return Ok(()),
            }
        }

        if trimmed.is_empty() {
            return Ok(());
        }
        self.handle_code(trimmed)
    }

    /// Blank string/char literal contents and drop comments from one line,
    /// recording standalone comments as the pending attachment. May leave a
    /// block comment open.
    fn strip_line(&mut self, line: &str) -> String {
        let mut out = String::new();
        let mut rest = line;
        loop {
            let Some(pos) = rest.find(['"', '\'', '/']) else {
                out.push_str(rest);
                break;
            };
            out.push_str(&rest[..pos]);
            let after = &rest[pos..];
            if after.starts_with("//") {
                // A comment with no code before it attaches as the pending
                // comment; a trailing one is consumed but ignored.
                if out.trim().is_empty() {
                    self.pending = Some(Comment::Plain(after[2..].trim().to_string()));
                }
                break;
            } else if after.starts_with("/*") {
                let doc = after.starts_with("/**") && !after.starts_with("/**/");
                let attach = out.trim().is_empty();
                match after[2..].find("*/") {
                    Some(end) => {
                        if attach {
                            let text = after[..2 + end + 2].to_string();
                            self.pending = Some(if doc {
                                Comment::Documentation(text)
                            } else {
                                Comment::Plain(text)
                            });
                        }
                        rest = &after[2 + end + 2..];
                    }
                    None => {
                        self.block = Some(BlockComment {
                            doc,
                            attach,
                            text: after.trim().to_string(),
                        });
                        break;
                    }
                }
            } else if let Some(literal) = after.strip_prefix('/') {
                out.push('/');
                rest = literal;
            } else {
                let delim = if after.starts_with('"') { '"' } else { '\'' };
                out.push(delim);
                let mut close = None;
                let mut chars = after[1..].char_indices();
                while let Some((i, c)) = chars.next() {
                    if c == '\\' {
                        chars.next();
                    } else if c == delim {
                        close = Some(i);
                        break;
                    }
                }
                match close {
                    Some(i) => {
                        out.push(delim);
                        rest = &after[1 + i + 1..];
                    }
                    // Unterminated literal: drop the remainder of the line.
                    None => break,
                }
            }
        }
        out
    }

    fn handle_code(&mut self, code: &str) -> Result<(), ParseError> {
        let mut rest = code;

        if let Some(caps) = RE_ANNOTATION_TYPE.captures(rest) {
            let decl = TypeDecl {
                name: caps[1].to_string(),
                annotations: mem::take(&mut self.pending_annotations),
                doc: self.pending.take(),
                members: Vec::new(),
            };
            self.stack.push(OpenType {
                decl,
                body_depth: None,
                nested: !self.stack.is_empty(),
            });
            return self.scan_braces(rest);
        }

        // Leading annotations, possibly several, possibly with arguments.
        loop {
            let (simple, end) = match RE_ANNOTATION.captures(rest) {
                Some(caps) => {
                    let simple = caps[1].rsplit('.').next().unwrap_or_default().to_string();
                    (simple, caps.get(0).map_or(0, |m| m.end()))
                }
                None => break,
            };
            self.pending_annotations.push(simple);
            rest = self.skip_annotation_args(&rest[end..]).trim_start();
        }
        if rest.is_empty() {
            // Annotation-only line: attachments carry over to the next line.
            return Ok(());
        }

        if let Some(caps) = RE_TYPE_DECL.captures(rest) {
            let decl = TypeDecl {
                name: caps[2].to_string(),
                annotations: mem::take(&mut self.pending_annotations),
                doc: self.pending.take(),
                members: Vec::new(),
            };
            self.stack.push(OpenType {
                decl,
                body_depth: None,
                nested: !self.stack.is_empty(),
            });
            return self.scan_braces(rest);
        }

        // Members are recognized only at the body depth of the innermost
        // open type; anything deeper is statement territory.
        let enclosing = match self.stack.last() {
            Some(open) if open.body_depth == Some(self.depth) => Some(open.decl.name.clone()),
            _ => None,
        };
        if let Some(enclosing) = enclosing {
            if let Some((kind, name)) = match_member(rest, &enclosing) {
                let member = MemberDecl {
                    kind,
                    name,
                    annotations: mem::take(&mut self.pending_annotations),
                    doc: self.pending.take(),
                };
                if let Some(open) = self.stack.last_mut() {
                    open.decl.members.push(member);
                }
                return self.scan_braces(rest);
            }
        }

        // Plain code: whatever was pending does not attach to anything.
        self.pending = None;
        self.pending_annotations.clear();
        self.scan_braces(rest)
    }

    /// Track brace depth and close type bodies as their braces balance.
    fn scan_braces(&mut self, code: &str) -> Result<(), ParseError> {
        for c in code.chars() {
            match c {
                '{' => {
                    self.depth += 1;
                    if let Some(open) = self.stack.last_mut() {
                        if open.body_depth.is_none() {
                            open.body_depth = Some(self.depth);
                        }
                    }
                }
                '}' => {
                    if self.depth == 0 {
                        return Err(ParseError::UnbalancedBraces);
                    }
                    self.depth -= 1;
                    let closes_type = self
                        .stack
                        .last()
                        .is_some_and(|open| open.body_depth == Some(self.depth + 1));
                    if closes_type {
                        if let Some(open) = self.stack.pop() {
                            self.close_type(open);
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// A closed nested type becomes a non-method member of its parent; its
    /// own members are not surfaced. A closed top-level type joins the unit.
    fn close_type(&mut self, open: OpenType) {
        let OpenType { decl, nested, .. } = open;
        if nested {
            if let Some(parent) = self.stack.last_mut() {
                parent.decl.members.push(MemberDecl {
                    kind: MemberKind::NestedType,
                    name: decl.name,
                    annotations: decl.annotations,
                    doc: decl.doc,
                });
                return;
            }
        }
        self.unit.types.push(decl);
    }

    /// Skip a parenthesized annotation argument list at the start of `s`.
    /// Arguments spilling onto later lines leave the paren depth open; the
    /// continuation lines are consumed before any other handling.
    fn skip_annotation_args<'a>(&mut self, s: &'a str) -> &'a str {
        let trimmed = s.trim_start();
        let Some(args) = trimmed.strip_prefix('(') else {
            return trimmed;
        };
        let mut depth = 1usize;
        for (i, c) in args.char_indices() {
            match c {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return &args[i + 1..];
                    }
                }
                _ => {}
            }
        }
        self.ann_parens = depth;
        ""
    }

    fn finish(self) -> Result<ParsedUnit, ParseError> {
        if self.block.is_some() {
            return Err(ParseError::UnterminatedComment);
        }
        if self.ann_parens > 0 {
            return Err(ParseError::UnterminatedAnnotation);
        }
        if self.depth != 0 || !self.stack.is_empty() {
            return Err(ParseError::UnbalancedBraces);
        }
        Ok(self.unit)
    }
}

/// Classify one declaration line inside a type body.
fn match_member(code: &str, enclosing: &str) -> Option<(MemberKind, String)> {
    if let Some(caps) = RE_METHOD_DECL.captures(code) {
        let head = caps[1]
            .split(|c: char| matches!(c, '.' | '<' | '[' | ' '))
            .next()
            .unwrap_or_default();
        if is_type_token(head) {
            return Some((MemberKind::Method, caps[2].to_string()));
        }
    }
    if let Some(caps) = RE_CTOR_DECL.captures(code) {
        if &caps[1] == enclosing {
            return Some((MemberKind::Constructor, caps[1].to_string()));
        }
    }
    if let Some(caps) = RE_FIELD_DECL.captures(code) {
        let head = caps[1]
            .split(|c: char| matches!(c, '.' | '<' | '[' | ' '))
            .next()
            .unwrap_or_default();
        if is_type_token(head) {
            return Some((MemberKind::Field, caps[2].to_string()));
        }
    }
    None
}
