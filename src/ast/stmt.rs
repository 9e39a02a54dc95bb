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

//! Statement AST nodes.

use super::{Block, Expr};

/// A statement.
#[derive(Debug, Clone)]
pub enum Statement {
    /// An expression evaluated for effect; `None` is the empty
    /// statement `;`.
    Expression(Option<Expr>),

    /// A nested compound statement.
    Block(Block),

    /// An if statement.
    If(IfStatement),

    /// A while loop.
    While(WhileStatement),

    /// A for loop.
    For(ForStatement),

    /// A return statement with an optional value.
    Return(Option<Expr>),

    /// A variable declaration.
    Decl(Declaration),
}

impl Statement {
    /// Create an expression statement.
    pub fn expression(expr: Expr) -> Self {
        Statement::Expression(Some(expr))
    }

    /// Create an empty statement.
    pub fn empty() -> Self {
        Statement::Expression(None)
    }

    /// Create a nested block statement.
    pub fn block(block: Block) -> Self {
        Statement::Block(block)
    }

    /// Create an if statement without an else branch.
    pub fn if_then(condition: Expr, then_branch: Statement) -> Self {
        Statement::If(IfStatement {
            condition: Some(condition),
            then_branch: Some(Box::new(then_branch)),
            else_branch: None,
        })
    }

    /// Create an if statement with an else branch.
    pub fn if_then_else(condition: Expr, then_branch: Statement, else_branch: Statement) -> Self {
        Statement::If(IfStatement {
            condition: Some(condition),
            then_branch: Some(Box::new(then_branch)),
            else_branch: Some(Box::new(else_branch)),
        })
    }

    /// Create a while loop.
    pub fn while_loop(condition: Expr, body: Statement) -> Self {
        Statement::While(WhileStatement {
            condition: Some(condition),
            body: Some(Box::new(body)),
        })
    }

    /// Create a for loop. The header expressions are each optional,
    /// as in `for (;;)`.
    pub fn for_loop(
        init: Option<Expr>,
        condition: Option<Expr>,
        update: Option<Expr>,
        body: Statement,
    ) -> Self {
        Statement::For(ForStatement {
            init,
            condition,
            update,
            body: Some(Box::new(body)),
        })
    }

    /// Create a return statement carrying a value.
    pub fn return_value(value: Expr) -> Self {
        Statement::Return(Some(value))
    }

    /// Create a bare return statement.
    pub fn return_void() -> Self {
        Statement::Return(None)
    }

    /// Create a declaration statement.
    pub fn decl(data_type: impl Into<String>, vars: Vec<Declarator>) -> Self {
        Statement::Decl(Declaration {
            data_type: data_type.into(),
            vars,
        })
    }
}

/// An if statement.
#[derive(Debug, Clone)]
pub struct IfStatement {
    /// The condition.
    pub condition: Option<Expr>,
    /// The then-branch.
    pub then_branch: Option<Box<Statement>>,
    /// The optional else-branch.
    pub else_branch: Option<Box<Statement>>,
}

/// A while loop.
#[derive(Debug, Clone)]
pub struct WhileStatement {
    /// The loop condition, re-evaluated every iteration.
    pub condition: Option<Expr>,
    /// The loop body.
    pub body: Option<Box<Statement>>,
}

/// A for loop.
#[derive(Debug, Clone)]
pub struct ForStatement {
    /// The init expression, run once before the loop.
    pub init: Option<Expr>,
    /// The loop condition.
    pub condition: Option<Expr>,
    /// The update expression, run after each iteration.
    pub update: Option<Expr>,
    /// The loop body.
    pub body: Option<Box<Statement>>,
}

/// A declaration statement: one type, one or more declarators.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// The declared type name.
    pub data_type: String,
    /// The declared names, in source order.
    pub vars: Vec<Declarator>,
}

/// A single declared name within a declaration.
#[derive(Debug, Clone)]
pub struct Declarator {
    /// The declared name.
    pub name: String,
    /// The element count for an array declarator, `None` for a scalar.
    pub array_size: Option<usize>,
}

impl Declarator {
    /// Create a scalar declarator.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            array_size: None,
        }
    }

    /// Create an array declarator.
    pub fn array(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            array_size: Some(size),
        }
    }

    /// Check if this declarator declares an array.
    pub fn is_array(&self) -> bool {
        self.array_size.is_some()
    }
}

/// A function parameter.
#[derive(Debug, Clone)]
pub struct Parameter {
    /// The parameter's declared type name.
    pub param_type: String,
    /// The parameter's name.
    pub name: String,
}

impl Parameter {
    /// Create a new parameter.
    pub fn new(param_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            param_type: param_type.into(),
            name: name.into(),
        }
    }
}

/// A function definition.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// The declared return type name.
    pub return_type: String,
    /// The function name.
    pub name: String,
    /// The parameters, in signature order.
    pub params: Vec<Parameter>,
    /// The function body.
    pub body: Block,
}

impl FunctionDef {
    /// Create a function definition with no parameters and an empty
    /// body; the parser attaches both as it reduces the signature.
    pub fn new(return_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            return_type: return_type.into(),
            name: name.into(),
            params: Vec::new(),
            body: Block::new(),
        }
    }

    /// Append a parameter to the signature.
    pub fn add_param(&mut self, param_type: impl Into<String>, name: impl Into<String>) {
        self.params.push(Parameter::new(param_type, name));
    }

    /// Attach the function body.
    pub fn set_body(&mut self, body: Block) {
        self.body = body;
    }

    /// Render the signature as `ret name(type name, type name)`.
    pub fn signature(&self) -> String {
        let params = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.param_type, p.name))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{} {}({})", self.return_type, self.name, params)
    }
}

fn fmt_opt_expr(f: &mut std::fmt::Formatter<'_>, expr: &Option<Expr>) -> std::fmt::Result {
    if let Some(expr) = expr {
        write!(f, "{}", expr)?;
    }
    Ok(())
}

fn fmt_opt_stmt(f: &mut std::fmt::Formatter<'_>, stmt: &Option<Box<Statement>>) -> std::fmt::Result {
    match stmt {
        Some(stmt) => write!(f, "{}", stmt),
        None => write!(f, ";"),
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Expression(Some(expr)) => write!(f, "{};", expr),
            Statement::Expression(None) => write!(f, ";"),
            Statement::Block(block) => write!(f, "{}", block),
            Statement::If(stmt) => {
                write!(f, "if (")?;
                fmt_opt_expr(f, &stmt.condition)?;
                write!(f, ") ")?;
                fmt_opt_stmt(f, &stmt.then_branch)?;
                if let Some(else_branch) = &stmt.else_branch {
                    write!(f, " else {}", else_branch)?;
                }
                Ok(())
            }
            Statement::While(stmt) => {
                write!(f, "while (")?;
                fmt_opt_expr(f, &stmt.condition)?;
                write!(f, ") ")?;
                fmt_opt_stmt(f, &stmt.body)
            }
            Statement::For(stmt) => {
                write!(f, "for (")?;
                fmt_opt_expr(f, &stmt.init)?;
                write!(f, "; ")?;
                fmt_opt_expr(f, &stmt.condition)?;
                write!(f, "; ")?;
                fmt_opt_expr(f, &stmt.update)?;
                write!(f, ") ")?;
                fmt_opt_stmt(f, &stmt.body)
            }
            Statement::Return(Some(value)) => write!(f, "return {};", value),
            Statement::Return(None) => write!(f, "return;"),
            Statement::Decl(decl) => write!(f, "{}", decl),
        }
    }
}

impl std::fmt::Display for Declaration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.data_type)?;
        for (i, var) in self.vars.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", var)?;
        }
        write!(f, ";")
    }
}

impl std::fmt::Display for Declarator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.array_size {
            Some(size) => write!(f, "{}[{}]", self.name, size),
            None => write!(f, "{}", self.name),
        }
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.param_type, self.name)
    }
}

impl std::fmt::Display for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.signature(), self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::VarRef;

    #[test]
    fn test_display_declaration() {
        let stmt = Statement::decl(
            "int",
            vec![Declarator::scalar("x"), Declarator::array("arr", 5)],
        );
        assert_eq!(format!("{}", stmt), "int x, arr[5];");
    }

    #[test]
    fn test_display_return() {
        assert_eq!(format!("{}", Statement::return_void()), "return;");
        assert_eq!(
            format!("{}", Statement::return_value(Expr::variable("x", "int"))),
            "return x;"
        );
    }

    #[test]
    fn test_display_if() {
        let stmt = Statement::if_then(
            Expr::variable("flag", "int"),
            Statement::expression(Expr::assign(
                VarRef::scalar("x", "int"),
                Expr::constant("1"),
            )),
        );
        assert_eq!(format!("{}", stmt), "if (flag) x = 1;");
    }

    #[test]
    fn test_display_if_else() {
        let stmt = Statement::if_then_else(
            Expr::variable("flag", "int"),
            Statement::empty(),
            Statement::return_void(),
        );
        assert_eq!(format!("{}", stmt), "if (flag) ; else return;");
    }

    #[test]
    fn test_display_while() {
        let stmt = Statement::while_loop(Expr::constant("1"), Statement::empty());
        assert_eq!(format!("{}", stmt), "while (1) ;");
    }

    #[test]
    fn test_display_for_with_empty_header() {
        let stmt = Statement::for_loop(None, None, None, Statement::empty());
        assert_eq!(format!("{}", stmt), "for (; ; ) ;");
    }

    #[test]
    fn test_function_def_signature() {
        let mut func = FunctionDef::new("int", "max");
        func.add_param("int", "a");
        func.add_param("int", "b");
        assert_eq!(func.signature(), "int max(int a, int b)");
    }

    #[test]
    fn test_function_def_signature_without_params() {
        let func = FunctionDef::new("void", "main");
        assert_eq!(func.signature(), "void main()");
    }

    #[test]
    fn test_declarator_is_array() {
        assert!(!Declarator::scalar("x").is_array());
        assert!(Declarator::array("a", 3).is_array());
    }

    #[test]
    fn test_set_body_replaces_the_empty_default() {
        let mut func = FunctionDef::new("void", "main");
        assert!(func.body.is_empty());
        let mut block = Block::new();
        block.add_statement(Statement::return_void());
        func.set_body(block);
        assert_eq!(func.body.statements.len(), 1);
    }
}
