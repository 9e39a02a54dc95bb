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

//! MiniC Compiler Core Library
//!
//! This library provides the semantic-analysis and intermediate-code
//! layers of a small C-like language compiler: a scope-chained symbol
//! table and an AST that lowers to linear three-address code. The
//! lexer and parser live outside this crate; they drive the symbol
//! table while building the tree, then hand the finished program to
//! the code generator.
//!
//! # Modules
//!
//! - [`error`] - Error types for symbol-table operations
//! - [`symtab`] - Scope-chained, hash-bucketed symbol table
//! - [`ast`] - Abstract Syntax Tree definitions
//! - [`codegen`] - Three-address code generation
//!
//! # Example
//!
//! ```
//! use minic::ast::{Declarator, Expr, Program, Statement, TopLevelItem, VarRef};
//! use minic::codegen;
//! use minic::symtab::{SymbolInfo, SymbolTable};
//!
//! // The parser records declarations while tracking scopes.
//! let mut table = SymbolTable::new(7);
//! let mut log = Vec::new();
//! table.enter_scope(&mut log).unwrap();
//! table.insert(SymbolInfo::variable("a", "ID", "int")).unwrap();
//! assert!(table.lookup("a").is_some());
//!
//! // It also builds the tree that lowers to three-address code.
//! let mut program = Program::new();
//! program.add_item(TopLevelItem::Statement(Statement::decl(
//!     "int",
//!     vec![Declarator::scalar("a")],
//! )));
//! program.add_item(TopLevelItem::Statement(Statement::expression(
//!     Expr::assign(
//!         VarRef::scalar("a", "int"),
//!         Expr::binary("+", Expr::constant("2"), Expr::constant("3")),
//!     ),
//! )));
//!
//! let code = codegen::generate(&program);
//! assert!(code.contains("t2 = t0 + t1"));
//! ```

pub mod ast;
pub mod codegen;
pub mod error;
pub mod symtab;

// Re-export commonly used types
pub use ast::Program;
pub use error::{Result, SymbolError};
pub use symtab::{SymbolInfo, SymbolKind, SymbolTable};

/// The version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the project.
pub const NAME: &str = "MiniC";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "MiniC");
    }
}
