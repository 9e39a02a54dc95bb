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

//! Abstract Syntax Tree (AST) definitions.
//!
//! This module defines the data structures the parser builds and the
//! code generator lowers to three-address code.

mod expr;
mod stmt;

pub use expr::*;
pub use stmt::*;

/// A complete program.
#[derive(Debug, Clone, Default)]
pub struct Program {
    /// Top-level items (functions and file-scope statements).
    pub items: Vec<TopLevelItem>,
}

impl Program {
    /// Create a new empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a top-level item to the program.
    pub fn add_item(&mut self, item: TopLevelItem) {
        self.items.push(item);
    }

    /// Find a function definition by name.
    pub fn find_function(&self, name: &str) -> Option<&FunctionDef> {
        for item in &self.items {
            if let TopLevelItem::Function(func) = item {
                if func.name == name {
                    return Some(func);
                }
            }
        }
        None
    }
}

/// A top-level item in a program.
#[derive(Debug, Clone)]
pub enum TopLevelItem {
    /// A function definition.
    Function(FunctionDef),
    /// A file-scope statement, such as a global declaration.
    Statement(Statement),
}

/// A block of statements.
#[derive(Debug, Clone, Default)]
pub struct Block {
    /// The statements in this block.
    pub statements: Vec<Statement>,
}

impl Block {
    /// Create a new empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a block from a list of statements.
    pub fn with_statements(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Append a statement to this block.
    pub fn add_statement(&mut self, stmt: Statement) {
        self.statements.push(stmt);
    }

    /// Check if this block is empty.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", item)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for TopLevelItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopLevelItem::Function(func) => write!(f, "{}", func),
            TopLevelItem::Statement(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.statements.is_empty() {
            write!(f, "{{ }}")
        } else {
            write!(f, "{{")?;
            for stmt in &self.statements {
                write!(f, " {}", stmt)?;
            }
            write!(f, " }}")
        }
    }
}
