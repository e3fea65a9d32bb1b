//! Type reference syntax used inside manifests.
//!
//! ```text
//! type  = "*" type
//!       | "[" "]" type
//!       | "[" digits "]" type
//!       | "map" "[" type "]" type
//!       | ident
//! ```
//!
//! `any`, `timestamp` and primitive kind names are reserved identifiers;
//! every other identifier names a declared type.

use std::fmt;

use typeshape_core::PrimitiveKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeRef {
    Pointer(Box<TypeRef>),
    Collection(Box<TypeRef>),
    FixedCollection(usize, Box<TypeRef>),
    Mapping(Box<TypeRef>, Box<TypeRef>),
    Dynamic,
    Timestamp,
    Primitive(PrimitiveKind),
    Named(String),
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pointer(inner) => write!(f, "*{inner}"),
            Self::Collection(inner) => write!(f, "[]{inner}"),
            Self::FixedCollection(len, inner) => write!(f, "[{len}]{inner}"),
            Self::Mapping(key, value) => write!(f, "map[{key}]{value}"),
            Self::Dynamic => f.write_str("any"),
            Self::Timestamp => f.write_str("timestamp"),
            Self::Primitive(kind) => f.write_str(kind.name()),
            Self::Named(name) => f.write_str(name),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid type `{input}` at offset {pos}: {msg}")]
pub struct TypeRefError {
    pub input: String,
    pub pos: usize,
    pub msg: &'static str,
}

pub fn parse(input: &str) -> Result<TypeRef, TypeRefError> {
    let mut parser = Parser { input, pos: 0 };
    let ty = parser.parse_type()?;
    if parser.pos != input.len() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(ty)
}

struct Parser<'s> {
    input: &'s str,
    pos: usize,
}

impl<'s> Parser<'s> {
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, byte: u8, msg: &'static str) -> Result<(), TypeRefError> {
        if self.eat(byte) {
            return Ok(());
        }
        Err(self.error(msg))
    }

    fn error(&self, msg: &'static str) -> TypeRefError {
        TypeRefError {
            input: self.input.to_string(),
            pos: self.pos,
            msg,
        }
    }

    fn parse_type(&mut self) -> Result<TypeRef, TypeRefError> {
        if self.eat(b'*') {
            return Ok(TypeRef::Pointer(Box::new(self.parse_type()?)));
        }

        if self.eat(b'[') {
            if self.eat(b']') {
                return Ok(TypeRef::Collection(Box::new(self.parse_type()?)));
            }
            let len = self.parse_len()?;
            self.expect(b']', "expected `]` after array length")?;
            return Ok(TypeRef::FixedCollection(len, Box::new(self.parse_type()?)));
        }

        let ident = self.parse_ident();
        if ident.is_empty() {
            return Err(self.error("expected a type"));
        }

        if ident == "map" && self.eat(b'[') {
            let key = self.parse_type()?;
            self.expect(b']', "expected `]` after map key")?;
            let value = self.parse_type()?;
            return Ok(TypeRef::Mapping(Box::new(key), Box::new(value)));
        }

        Ok(match ident {
            "any" => TypeRef::Dynamic,
            "timestamp" => TypeRef::Timestamp,
            _ => match ident.parse::<PrimitiveKind>() {
                Ok(kind) => TypeRef::Primitive(kind),
                Err(_) => TypeRef::Named(ident.to_string()),
            },
        })
    }

    fn parse_len(&mut self) -> Result<usize, TypeRefError> {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        match self.input[start..self.pos].parse() {
            Ok(len) => Ok(len),
            Err(_) => {
                self.pos = start;
                Err(self.error("expected `]` or an array length"))
            }
        }
    }

    fn parse_ident(&mut self) -> &'s str {
        let input = self.input;
        let start = self.pos;
        while let Some(b) = self.peek() {
            let ok = if self.pos == start {
                b.is_ascii_alphabetic() || b == b'_'
            } else {
                b.is_ascii_alphanumeric() || b == b'_'
            };
            if !ok {
                break;
            }
            self.pos += 1;
        }
        &input[start..self.pos]
    }
}
