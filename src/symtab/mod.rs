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
//! The parser drives this module directly: it enters and exits scopes
//! at block boundaries, inserts a record per declaration, and looks up
//! every identifier use. Scope entry/exit and the dump operations write
//! a line-oriented trace whose format is fixed; downstream tooling
//! compares it byte for byte.

mod scope;
mod symbol;
mod symbol_table;

pub use scope::*;
pub use symbol::*;
pub use symbol_table::*;
