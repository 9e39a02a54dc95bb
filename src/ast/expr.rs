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

//! Expression AST nodes.
//!
//! Operators and type names are carried as plain strings: the parser
//! owns that vocabulary and code generation emits it verbatim. Child
//! slots are optional where the parser may hand over a partial tree;
//! lowering degrades a missing child to an empty operand.

/// A reference to a named variable, scalar or indexed.
///
/// This shape appears both as an expression of its own and as the
/// target of an assignment.
#[derive(Debug, Clone)]
pub struct VarRef {
    /// The variable name.
    pub name: String,
    /// The declared type name; for an array access this is the element
    /// type and decides the offset scale.
    pub var_type: String,
    /// The index expression for an array access, `None` for a scalar.
    pub index: Option<Box<Expr>>,
}

impl VarRef {
    /// Create a reference to a scalar variable.
    pub fn scalar(name: impl Into<String>, var_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            var_type: var_type.into(),
            index: None,
        }
    }

    /// Create an indexed reference to an array element.
    pub fn indexed(name: impl Into<String>, var_type: impl Into<String>, index: Expr) -> Self {
        Self {
            name: name.into(),
            var_type: var_type.into(),
            index: Some(Box::new(index)),
        }
    }

    /// Check if this reference is indexed.
    pub fn has_index(&self) -> bool {
        self.index.is_some()
    }
}

/// An expression.
#[derive(Debug, Clone)]
pub enum Expr {
    /// A variable reference or array element access.
    Variable(VarRef),

    /// A literal constant, kept as its source text.
    Constant {
        /// The literal text, emitted verbatim.
        value: String,
    },

    /// A binary operation.
    Binary {
        /// The operator text, emitted verbatim.
        op: String,
        left: Option<Box<Expr>>,
        right: Option<Box<Expr>>,
    },

    /// A unary operation.
    Unary {
        /// The operator text, emitted verbatim.
        op: String,
        operand: Option<Box<Expr>>,
    },

    /// An assignment; its value is the assigned expression's value.
    Assign {
        /// The assignment target.
        target: VarRef,
        value: Option<Box<Expr>>,
    },

    /// A function call.
    Call {
        /// The callee's name.
        name: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    /// Create a scalar variable reference.
    pub fn variable(name: impl Into<String>, var_type: impl Into<String>) -> Self {
        Expr::Variable(VarRef::scalar(name, var_type))
    }

    /// Create an array element access.
    pub fn array_element(
        name: impl Into<String>,
        var_type: impl Into<String>,
        index: Expr,
    ) -> Self {
        Expr::Variable(VarRef::indexed(name, var_type, index))
    }

    /// Create a constant from its source text.
    pub fn constant(value: impl Into<String>) -> Self {
        Expr::Constant {
            value: value.into(),
        }
    }

    /// Create a binary operation.
    pub fn binary(op: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op: op.into(),
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    /// Create a unary operation.
    pub fn unary(op: impl Into<String>, operand: Expr) -> Self {
        Expr::Unary {
            op: op.into(),
            operand: Some(Box::new(operand)),
        }
    }

    /// Create an assignment to the given target.
    pub fn assign(target: VarRef, value: Expr) -> Self {
        Expr::Assign {
            target,
            value: Some(Box::new(value)),
        }
    }

    /// Create a function call.
    pub fn call(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Call {
            name: name.into(),
            args,
        }
    }
}

/// An ordered argument collector the parser fills while reducing a
/// call's argument list; building the call consumes it.
#[derive(Debug, Clone, Default)]
pub struct ArgList {
    args: Vec<Expr>,
}

impl ArgList {
    /// Create an empty argument list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument.
    pub fn push(&mut self, arg: Expr) {
        self.args.push(arg);
    }

    /// Get the number of collected arguments.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Check if no arguments have been collected.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl From<ArgList> for Vec<Expr> {
    fn from(list: ArgList) -> Self {
        list.args
    }
}

fn fmt_opt(f: &mut std::fmt::Formatter<'_>, expr: &Option<Box<Expr>>) -> std::fmt::Result {
    if let Some(expr) = expr {
        write!(f, "{}", expr)?;
    }
    Ok(())
}

impl std::fmt::Display for VarRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.index {
            Some(index) => write!(f, "{}[{}]", self.name, index),
            None => write!(f, "{}", self.name),
        }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Variable(var) => write!(f, "{}", var),
            Expr::Constant { value } => write!(f, "{}", value),
            Expr::Binary { op, left, right } => {
                write!(f, "(")?;
                fmt_opt(f, left)?;
                write!(f, " {} ", op)?;
                fmt_opt(f, right)?;
                write!(f, ")")
            }
            Expr::Unary { op, operand } => {
                write!(f, "({}", op)?;
                fmt_opt(f, operand)?;
                write!(f, ")")
            }
            Expr::Assign { target, value } => {
                write!(f, "{} = ", target)?;
                fmt_opt(f, value)
            }
            Expr::Call { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}
