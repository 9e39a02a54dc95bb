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

//! Symbol records stored in the scope tables.
//!
//! A record starts out unclassified; the parser attaches a kind
//! (variable, array or function) once it has seen the declaration.

use std::fmt;

/// A single function parameter, as declared in the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// The parameter's declared type name.
    pub data_type: String,
    /// The parameter's name.
    pub name: String,
}

impl Param {
    /// Create a new parameter.
    pub fn new(data_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            data_type: data_type.into(),
            name: name.into(),
        }
    }
}

/// The declared classification of a symbol.
///
/// Type names are carried as plain strings: the parser owns the type
/// vocabulary and diagnostic dumps render the names verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    /// A scalar variable.
    Variable {
        /// The declared type name.
        data_type: String,
    },
    /// An array with a fixed element count.
    Array {
        /// The declared element type name.
        data_type: String,
        /// The declared element count.
        size: usize,
    },
    /// A function definition.
    Function {
        /// The declared return type name.
        return_type: String,
        /// The declared parameters, in signature order.
        params: Vec<Param>,
    },
}

/// A symbol table entry.
///
/// The name is fixed at construction: the owning scope table hashes it
/// to pick a bucket, so renaming a stored record would strand it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolInfo {
    name: String,
    symbol_type: String,
    kind: Option<SymbolKind>,
}

impl SymbolInfo {
    /// Create an unclassified record, as the parser does when it first
    /// sees a name and has not yet reached the declaration shape.
    pub fn new(name: impl Into<String>, symbol_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol_type: symbol_type.into(),
            kind: None,
        }
    }

    /// Create a record classified as a scalar variable.
    pub fn variable(
        name: impl Into<String>,
        symbol_type: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol_type: symbol_type.into(),
            kind: Some(SymbolKind::Variable {
                data_type: data_type.into(),
            }),
        }
    }

    /// Create a record classified as an array.
    pub fn array(
        name: impl Into<String>,
        symbol_type: impl Into<String>,
        data_type: impl Into<String>,
        size: usize,
    ) -> Self {
        Self {
            name: name.into(),
            symbol_type: symbol_type.into(),
            kind: Some(SymbolKind::Array {
                data_type: data_type.into(),
                size,
            }),
        }
    }

    /// Create a record classified as a function.
    pub fn function(
        name: impl Into<String>,
        symbol_type: impl Into<String>,
        return_type: impl Into<String>,
        params: Vec<Param>,
    ) -> Self {
        Self {
            name: name.into(),
            symbol_type: symbol_type.into(),
            kind: Some(SymbolKind::Function {
                return_type: return_type.into(),
                params,
            }),
        }
    }

    /// Get the symbol's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the token category the parser recorded for this symbol.
    pub fn symbol_type(&self) -> &str {
        &self.symbol_type
    }

    /// Get the declared classification, if one has been attached.
    pub fn kind(&self) -> Option<&SymbolKind> {
        self.kind.as_ref()
    }

    /// Attach or replace the declared classification.
    pub fn set_kind(&mut self, kind: SymbolKind) {
        self.kind = Some(kind);
    }

    /// Append a parameter to a function record's signature.
    /// Does nothing on a record that is not a function.
    pub fn add_parameter(&mut self, data_type: impl Into<String>, name: impl Into<String>) {
        if let Some(SymbolKind::Function { params, .. }) = &mut self.kind {
            params.push(Param::new(data_type, name));
        }
    }

    /// Check if this record is classified as a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self.kind, Some(SymbolKind::Variable { .. }))
    }

    /// Check if this record is classified as an array.
    pub fn is_array(&self) -> bool {
        matches!(self.kind, Some(SymbolKind::Array { .. }))
    }

    /// Check if this record is classified as a function.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, Some(SymbolKind::Function { .. }))
    }

    /// Get the declared data type of a variable or array record.
    pub fn data_type(&self) -> Option<&str> {
        match &self.kind {
            Some(SymbolKind::Variable { data_type }) => Some(data_type),
            Some(SymbolKind::Array { data_type, .. }) => Some(data_type),
            _ => None,
        }
    }

    /// Get the declared element count of an array record.
    pub fn array_size(&self) -> Option<usize> {
        match &self.kind {
            Some(SymbolKind::Array { size, .. }) => Some(*size),
            _ => None,
        }
    }

    /// Get the parameters of a function record.
    /// Empty for records that are not functions.
    pub fn parameters(&self) -> &[Param] {
        match &self.kind {
            Some(SymbolKind::Function { params, .. }) => params,
            _ => &[],
        }
    }
}

/// Renders the record exactly as the diagnostic dump expects it: the
/// `< name : type >` line, then the kind block, with no trailing newline.
impl fmt::Display for SymbolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "< {} : {} >", self.name, self.symbol_type)?;
        match &self.kind {
            Some(SymbolKind::Variable { data_type }) => {
                write!(f, "\nVariable\nType: {}", data_type)
            }
            Some(SymbolKind::Array { data_type, size }) => {
                write!(f, "\nArray\nType: {}\nSize: {}", data_type, size)
            }
            Some(SymbolKind::Function {
                return_type,
                params,
            }) => {
                let details = params
                    .iter()
                    .map(|p| format!("{} {}", p.data_type, p.name))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(
                    f,
                    "\nFunction Definition\nReturn Type: {}\nNumber of Parameters: {}\nParameter Details: {}",
                    return_type,
                    params.len(),
                    details
                )
            }
            None => Ok(()),
        }
    }
}
