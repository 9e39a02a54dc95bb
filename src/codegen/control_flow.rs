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

//! Statement and control flow code generation.
//!
//! Conditionals and loops are linearized with labels and gotos:
//! - if: condition, jump to the true or false arm, fall through to end
//! - while: condition re-evaluated at the top of every iteration
//! - for: init once, then the while structure with the update after
//!   the body
//!
//! Declarations lower to `//` comment lines; they allocate nothing.

use super::expressions::ExpressionEmitter;
use super::CodeGenerator;
use crate::ast::{
    Block, Declaration, Expr, ForStatement, FunctionDef, IfStatement, Program, Statement,
    TopLevelItem, WhileStatement,
};

/// Extension trait for statement and program code generation.
pub trait ControlFlowEmitter {
    /// Lower a whole program, item by item, in source order.
    fn generate_program(&mut self, program: &Program);

    /// Lower a function definition: signature comment, body, blank
    /// separator line.
    fn generate_function(&mut self, func: &FunctionDef);

    /// Lower every statement of a block in sequence.
    fn generate_block(&mut self, block: &Block);

    /// Lower a single statement.
    fn generate_statement(&mut self, stmt: &Statement);

    /// Lower an if statement.
    fn generate_if(&mut self, stmt: &IfStatement);

    /// Lower a while loop.
    fn generate_while(&mut self, stmt: &WhileStatement);

    /// Lower a for loop.
    fn generate_for(&mut self, stmt: &ForStatement);

    /// Lower a return statement.
    fn generate_return(&mut self, value: Option<&Expr>);

    /// Lower a declaration to its comment lines.
    fn generate_declaration(&mut self, decl: &Declaration);
}

impl ControlFlowEmitter for CodeGenerator {
    fn generate_program(&mut self, program: &Program) {
        for item in &program.items {
            match item {
                TopLevelItem::Function(func) => self.generate_function(func),
                TopLevelItem::Statement(stmt) => self.generate_statement(stmt),
            }
        }
    }

    fn generate_function(&mut self, func: &FunctionDef) {
        self.emit(&format!("// Function: {}", func.signature()));
        self.generate_block(&func.body);
        self.emit("");
    }

    fn generate_block(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.generate_statement(stmt);
        }
    }

    fn generate_statement(&mut self, stmt: &Statement) {
        match stmt {
            Statement::Expression(expr) => {
                if let Some(expr) = expr {
                    self.generate_expression(expr);
                }
            }
            Statement::Block(block) => self.generate_block(block),
            Statement::If(stmt) => self.generate_if(stmt),
            Statement::While(stmt) => self.generate_while(stmt),
            Statement::For(stmt) => self.generate_for(stmt),
            Statement::Return(value) => self.generate_return(value.as_ref()),
            Statement::Decl(decl) => self.generate_declaration(decl),
        }
    }

    fn generate_if(&mut self, stmt: &IfStatement) {
        let true_label = self.make_label();
        let false_label = self.make_label();
        let end_label = self.make_label();

        let condition = self.generate_opt_expression(stmt.condition.as_ref());
        self.emit(&format!("if {} goto {}", condition, true_label));
        self.emit(&format!("goto {}", false_label));
        self.define_label(&true_label);
        if let Some(then_branch) = &stmt.then_branch {
            self.generate_statement(then_branch);
        }
        self.emit(&format!("goto {}", end_label));
        // The false arm is laid out even without an else branch.
        self.define_label(&false_label);
        if let Some(else_branch) = &stmt.else_branch {
            self.generate_statement(else_branch);
        }
        self.define_label(&end_label);
    }

    fn generate_while(&mut self, stmt: &WhileStatement) {
        let begin_label = self.make_label();
        let body_label = self.make_label();
        let end_label = self.make_label();

        self.define_label(&begin_label);
        let condition = self.generate_opt_expression(stmt.condition.as_ref());
        self.emit(&format!("if {} goto {}", condition, body_label));
        self.emit(&format!("goto {}", end_label));
        self.define_label(&body_label);
        if let Some(body) = &stmt.body {
            self.generate_statement(body);
        }
        self.emit(&format!("goto {}", begin_label));
        self.define_label(&end_label);
    }

    fn generate_for(&mut self, stmt: &ForStatement) {
        if let Some(init) = &stmt.init {
            self.generate_expression(init);
        }
        let begin_label = self.make_label();
        let body_label = self.make_label();
        let end_label = self.make_label();

        self.define_label(&begin_label);
        let condition = self.generate_opt_expression(stmt.condition.as_ref());
        self.emit(&format!("if {} goto {}", condition, body_label));
        self.emit(&format!("goto {}", end_label));
        self.define_label(&body_label);
        if let Some(body) = &stmt.body {
            self.generate_statement(body);
        }
        if let Some(update) = &stmt.update {
            self.generate_expression(update);
        }
        self.emit(&format!("goto {}", begin_label));
        self.define_label(&end_label);
    }

    fn generate_return(&mut self, value: Option<&Expr>) {
        let value_temp = self.generate_opt_expression(value);
        if value_temp.is_empty() {
            self.emit("return");
        } else {
            self.emit(&format!("return {}", value_temp));
        }
    }

    fn generate_declaration(&mut self, decl: &Declaration) {
        for var in &decl.vars {
            match var.array_size {
                Some(size) => self.emit(&format!(
                    "// Declaration: {} {}[{}]",
                    decl.data_type, var.name, size
                )),
                None => self.emit(&format!("// Declaration: {} {}", decl.data_type, var.name)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Declarator, VarRef};

    fn lower(stmt: &Statement) -> String {
        let mut generator = CodeGenerator::new();
        generator.generate_statement(stmt);
        generator.into_output()
    }

    fn assign(name: &str, value: &str) -> Statement {
        Statement::expression(Expr::assign(
            VarRef::scalar(name, "int"),
            Expr::constant(value),
        ))
    }

    #[test]
    fn test_if_without_else_still_lays_out_the_false_arm() {
        let stmt = Statement::if_then(Expr::variable("flag", "int"), assign("x", "1"));
        let code = lower(&stmt);
        assert_eq!(
            code,
            "t0 = flag\n\
             if t0 goto L0\n\
             goto L1\n\
             L0:\n\
             t1 = 1\n\
             x = t1\n\
             goto L2\n\
             L1:\n\
             L2:\n"
        );
    }

    #[test]
    fn test_if_with_else() {
        let stmt = Statement::if_then_else(
            Expr::variable("flag", "int"),
            assign("x", "1"),
            assign("x", "2"),
        );
        let code = lower(&stmt);
        assert_eq!(
            code,
            "t0 = flag\n\
             if t0 goto L0\n\
             goto L1\n\
             L0:\n\
             t1 = 1\n\
             x = t1\n\
             goto L2\n\
             L1:\n\
             t2 = 2\n\
             x = t2\n\
             L2:\n"
        );
    }

    #[test]
    fn test_while_reevaluates_the_condition_each_iteration() {
        let stmt = Statement::while_loop(Expr::variable("run", "int"), assign("x", "1"));
        let code = lower(&stmt);
        // The condition load sits after L0, inside the loop.
        assert_eq!(
            code,
            "L0:\n\
             t0 = run\n\
             if t0 goto L1\n\
             goto L2\n\
             L1:\n\
             t1 = 1\n\
             x = t1\n\
             goto L0\n\
             L2:\n"
        );
    }

    #[test]
    fn test_for_runs_init_once_and_update_after_the_body() {
        let stmt = Statement::for_loop(
            Some(Expr::assign(VarRef::scalar("i", "int"), Expr::constant("0"))),
            Some(Expr::binary(
                "<",
                Expr::variable("i", "int"),
                Expr::constant("10"),
            )),
            Some(Expr::assign(
                VarRef::scalar("i", "int"),
                Expr::binary("+", Expr::variable("i", "int"), Expr::constant("1")),
            )),
            assign("x", "5"),
        );
        let code = lower(&stmt);
        // The update's read of `i` reuses the temporary cached by the
        // condition's load.
        assert_eq!(
            code,
            "t0 = 0\n\
             i = t0\n\
             L0:\n\
             t1 = i\n\
             t2 = 10\n\
             t3 = t1 < t2\n\
             if t3 goto L1\n\
             goto L2\n\
             L1:\n\
             t4 = 5\n\
             x = t4\n\
             t5 = 1\n\
             t6 = t1 + t5\n\
             i = t6\n\
             goto L0\n\
             L2:\n"
        );
    }

    #[test]
    fn test_for_with_empty_header() {
        let stmt = Statement::for_loop(None, None, None, Statement::empty());
        let code = lower(&stmt);
        assert_eq!(
            code,
            "L0:\n\
             if  goto L1\n\
             goto L2\n\
             L1:\n\
             goto L0\n\
             L2:\n"
        );
    }

    #[test]
    fn test_return_with_value() {
        let code = lower(&Statement::return_value(Expr::variable("x", "int")));
        assert_eq!(code, "t0 = x\nreturn t0\n");
    }

    #[test]
    fn test_bare_return_has_no_operand() {
        let code = lower(&Statement::return_void());
        assert_eq!(code, "return\n");
    }

    #[test]
    fn test_declaration_comments() {
        let stmt = Statement::decl(
            "int",
            vec![Declarator::scalar("x"), Declarator::array("arr", 5)],
        );
        let code = lower(&stmt);
        assert_eq!(
            code,
            "// Declaration: int x\n// Declaration: int arr[5]\n"
        );
    }

    #[test]
    fn test_empty_statement_emits_nothing() {
        assert_eq!(lower(&Statement::empty()), "");
    }

    #[test]
    fn test_function_emits_signature_body_and_separator() {
        let mut func = FunctionDef::new("int", "inc");
        func.add_param("int", "n");
        func.set_body(Block::with_statements(vec![Statement::return_value(
            Expr::binary("+", Expr::variable("n", "int"), Expr::constant("1")),
        )]));

        let mut generator = CodeGenerator::new();
        generator.generate_function(&func);
        assert_eq!(
            generator.output(),
            "// Function: int inc(int n)\n\
             t0 = n\n\
             t1 = 1\n\
             t2 = t0 + t1\n\
             return t2\n\
             \n"
        );
    }

    #[test]
    fn test_nested_blocks_share_the_generator_state() {
        let inner = Block::with_statements(vec![assign("x", "1")]);
        let outer = Statement::block(Block::with_statements(vec![
            Statement::block(inner),
            assign("y", "2"),
        ]));
        let code = lower(&outer);
        assert_eq!(code, "t0 = 1\nx = t0\nt1 = 2\ny = t1\n");
    }

    #[test]
    fn test_labels_nest_without_collision() {
        let inner_if = Statement::if_then(Expr::variable("b", "int"), assign("x", "1"));
        let outer = Statement::while_loop(Expr::variable("a", "int"), inner_if);
        let code = lower(&outer);
        assert_eq!(
            code,
            "L0:\n\
             t0 = a\n\
             if t0 goto L1\n\
             goto L2\n\
             L1:\n\
             t1 = b\n\
             if t1 goto L3\n\
             goto L4\n\
             L3:\n\
             t2 = 1\n\
             x = t2\n\
             goto L5\n\
             L4:\n\
             L5:\n\
             goto L0\n\
             L2:\n"
        );
    }
}
