// MiniC - Semantic analysis and three-address code generation for a small C-like language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! The scope-chained symbol table.
//!
//! The table manages a stack of scope tables, supporting nested
//! lexical scopes. Scope entry and exit are traced to a caller-supplied
//! log sink in the exact format the diagnostic output expects.

use super::scope::ScopeTable;
use super::symbol::SymbolInfo;
use crate::error::{Result, SymbolError};
use std::io::{self, Write};

/// The delimiter line bracketing a full scope-chain dump.
const CHAIN_DELIMITER: &str = "################################";

/// The symbol table: a stack of scopes with unique, never-reused ids.
#[derive(Debug)]
pub struct SymbolTable {
    bucket_count: usize,
    /// The scope stack (innermost scope last).
    scopes: Vec<ScopeTable>,
    /// The most recently assigned scope id; ids start at 1.
    last_scope_id: u32,
}

impl SymbolTable {
    /// Create a new symbol table. No scope is active until
    /// [`enter_scope`](Self::enter_scope) is called.
    pub fn new(bucket_count: usize) -> Self {
        Self {
            bucket_count: bucket_count.max(1),
            scopes: Vec::new(),
            last_scope_id: 0,
        }
    }

    /// Get the bucket count every scope is created with.
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Get the number of active scopes.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Get the current (innermost) scope, if any.
    pub fn current_scope(&self) -> Option<&ScopeTable> {
        self.scopes.last()
    }

    /// Get the current scope's id, if any scope is active.
    pub fn current_scope_id(&self) -> Option<u32> {
        self.scopes.last().map(ScopeTable::id)
    }

    /// Enter a new scope and trace the creation to the log sink.
    pub fn enter_scope<W: Write>(&mut self, log: &mut W) -> io::Result<()> {
        self.last_scope_id += 1;
        self.scopes
            .push(ScopeTable::new(self.bucket_count, self.last_scope_id));
        writeln!(log, "New ScopeTable with ID {} created", self.last_scope_id)?;
        writeln!(log)
    }

    /// Exit the current scope, destroying it and its records, and trace
    /// the removal. Does nothing when no scope is active.
    pub fn exit_scope<W: Write>(&mut self, log: &mut W) -> io::Result<()> {
        match self.scopes.pop() {
            Some(scope) => {
                writeln!(log, "Scopetable with ID {} removed", scope.id())?;
                writeln!(log)
            }
            None => Ok(()),
        }
    }

    /// Insert a record into the current scope.
    pub fn insert(&mut self, symbol: SymbolInfo) -> Result<()> {
        match self.scopes.last_mut() {
            Some(scope) => scope.insert(symbol),
            None => Err(SymbolError::NoActiveScope),
        }
    }

    /// Remove a record by name from the current scope.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        match self.scopes.last_mut() {
            Some(scope) => scope.delete(name),
            None => Err(SymbolError::NoActiveScope),
        }
    }

    /// Look up a name, searching from the innermost scope outward and
    /// returning the first match.
    pub fn lookup(&self, name: &str) -> Option<&SymbolInfo> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.lookup(name) {
                return Some(symbol);
            }
        }
        None
    }

    /// Look up a name for mutation, innermost scope first.
    pub fn lookup_mut(&mut self, name: &str) -> Option<&mut SymbolInfo> {
        for scope in self.scopes.iter_mut().rev() {
            if let Some(symbol) = scope.lookup_mut(name) {
                return Some(symbol);
            }
        }
        None
    }

    /// Dump the current scope only. Writes nothing when no scope is
    /// active.
    pub fn dump_current<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self.scopes.last() {
            Some(scope) => scope.dump(out),
            None => Ok(()),
        }
    }

    /// Dump every active scope from innermost to outermost, bracketed
    /// by the chain delimiter lines.
    pub fn dump_chain<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", CHAIN_DELIMITER)?;
        writeln!(out)?;
        for scope in self.scopes.iter().rev() {
            scope.dump(out)?;
        }
        writeln!(out, "{}", CHAIN_DELIMITER)?;
        writeln!(out)
    }
}
