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

//! Error types for the symbol-table layer.
//!
//! All failures here are recoverable and reported through return values;
//! the parser driving the table decides how to surface them to the user.

use thiserror::Error;

/// An error produced by a symbol-table operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    /// A record with the same name already exists in the current scope.
    /// The existing record is left untouched.
    #[error("symbol '{name}' is already declared in the current scope")]
    Duplicate {
        /// The name that was inserted twice.
        name: String,
    },

    /// No record with the given name exists in the current scope.
    #[error("symbol '{name}' is not declared in the current scope")]
    NotFound {
        /// The name that was requested.
        name: String,
    },

    /// An insert or delete was attempted before any scope was entered.
    #[error("no active scope")]
    NoActiveScope,
}

/// Result type for symbol-table operations.
pub type Result<T> = std::result::Result<T, SymbolError>;
