use std::collections::HashMap;
use std::fmt;

use simplelang_diagnostic::span::Span;
use simplelang_frontend::ast::Ident;
use simplelang_utils::declare_key_type;
use simplelang_utils::keyvec::KeyVec;

use crate::{CodegenError, CodegenResult};

declare_key_type! {
    /// A memory cell. Variables get consecutive cells from 0 in declaration order.
    #[derive(serde::Serialize)]
    pub struct Address;
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Symbol {
    pub name: String,
    pub address: Address,

    #[serde(skip)]
    pub span: Span,
}

/// Flat, append-only table of declared variables. There is no block scoping.
#[derive(Default, Debug, Clone, serde::Serialize)]
#[serde(transparent)]
pub struct SymbolTable {
    symbols: KeyVec<Address, Symbol>,

    #[serde(skip)]
    lookup: HashMap<String, Address>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable at the next free address. Redeclaring a name is an error.
    pub fn declare(&mut self, ident: &Ident) -> CodegenResult<Address> {
        if let Some(&first) = self.lookup.get(&ident.name) {
            return Err(CodegenError::DuplicateSymbol {
                name: ident.name.clone(),
                first: self.symbols[first].span,
                second: ident.span,
            });
        }

        let address = self.symbols.insert(Symbol {
            name: ident.name.clone(),
            address: self.symbols.next_key(),
            span: ident.span,
        });
        self.lookup.insert(ident.name.clone(), address);

        Ok(address)
    }

    pub fn lookup(&self, name: &str) -> Option<Address> {
        self.lookup.get(name).copied()
    }

    pub fn resolve(&self, ident: &Ident) -> CodegenResult<Address> {
        self.lookup(&ident.name)
            .ok_or_else(|| CodegenError::UndefinedVariable {
                name: ident.name.clone(),
                span: ident.span,
            })
    }

    pub(crate) fn len(&self) -> usize {
        self.symbols.len()
    }
}
