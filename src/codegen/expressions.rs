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

//! Expression code generation.
//!
//! Lowering an expression returns the name of the temporary holding
//! its value. Plain variable reads go through a name-to-temporary
//! cache so repeated reads reuse one load; assignments invalidate the
//! cached entry. Array accesses are always recomputed.

use super::CodeGenerator;
use crate::ast::{Expr, VarRef};

/// Extension trait for expression code generation.
pub trait ExpressionEmitter {
    /// Lower an expression and return the temporary holding its value.
    fn generate_expression(&mut self, expr: &Expr) -> String;

    /// Lower an optional child expression. A missing child degrades to
    /// an empty operand instead of failing.
    fn generate_opt_expression(&mut self, expr: Option<&Expr>) -> String;

    /// Lower a variable read or array element load.
    fn generate_variable(&mut self, var: &VarRef) -> String;

    /// Emit the byte-offset computation for an indexed reference and
    /// return the temporary holding the offset. Returns an empty
    /// operand for a reference without an index.
    fn generate_index_offset(&mut self, var: &VarRef) -> String;

    /// Lower an assignment and return the assigned value's temporary.
    fn generate_assignment(&mut self, target: &VarRef, value: Option<&Expr>) -> String;

    /// Lower a function call and return its result temporary.
    fn generate_call(&mut self, name: &str, args: &[Expr]) -> String;
}

impl ExpressionEmitter for CodeGenerator {
    fn generate_expression(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Variable(var) => self.generate_variable(var),
            Expr::Constant { value } => {
                let temp = self.make_temp();
                self.emit(&format!("{} = {}", temp, value));
                temp
            }
            Expr::Binary { op, left, right } => {
                // Left before right: operand code may touch the cache.
                let left_temp = self.generate_opt_expression(left.as_deref());
                let right_temp = self.generate_opt_expression(right.as_deref());
                let temp = self.make_temp();
                self.emit(&format!("{} = {} {} {}", temp, left_temp, op, right_temp));
                temp
            }
            Expr::Unary { op, operand } => {
                let operand_temp = self.generate_opt_expression(operand.as_deref());
                let temp = self.make_temp();
                if op == "!" || op == "-" || op == "+" {
                    self.emit(&format!("{} = {}{}", temp, op, operand_temp));
                } else {
                    self.emit(&format!("{} = {} {}", temp, op, operand_temp));
                }
                temp
            }
            Expr::Assign { target, value } => self.generate_assignment(target, value.as_deref()),
            Expr::Call { name, args } => self.generate_call(name, args),
        }
    }

    fn generate_opt_expression(&mut self, expr: Option<&Expr>) -> String {
        match expr {
            Some(expr) => self.generate_expression(expr),
            None => String::new(),
        }
    }

    fn generate_variable(&mut self, var: &VarRef) -> String {
        if var.has_index() {
            let offset = self.generate_index_offset(var);
            let temp = self.make_temp();
            self.emit(&format!("{} = {}[{}]", temp, var.name, offset));
            temp
        } else {
            if let Some(temp) = self.var_temps.get(&var.name) {
                return temp.clone();
            }
            let temp = self.make_temp();
            self.emit(&format!("{} = {}", temp, var.name));
            self.var_temps.insert(var.name.clone(), temp.clone());
            temp
        }
    }

    fn generate_index_offset(&mut self, var: &VarRef) -> String {
        let index_temp = match &var.index {
            Some(index) => self.generate_expression(index),
            None => return String::new(),
        };
        // Elements are addressed by byte offset; wide element types
        // scale by 8, everything else by 4.
        let scale = if var.var_type == "float" || var.var_type == "double" {
            8
        } else {
            4
        };
        let scale_temp = self.make_temp();
        self.emit(&format!("{} = {}", scale_temp, scale));
        let offset_temp = self.make_temp();
        self.emit(&format!("{} = {} * {}", offset_temp, index_temp, scale_temp));
        offset_temp
    }

    fn generate_assignment(&mut self, target: &VarRef, value: Option<&Expr>) -> String {
        let value_temp = self.generate_opt_expression(value);
        if target.has_index() {
            let offset = self.generate_index_offset(target);
            self.emit(&format!("{}[{}] = {}", target.name, offset, value_temp));
        } else {
            self.emit(&format!("{} = {}", target.name, value_temp));
            // The variable changed; a cached load would now be stale.
            self.var_temps.remove(&target.name);
        }
        value_temp
    }

    fn generate_call(&mut self, name: &str, args: &[Expr]) -> String {
        let mut arg_temps = Vec::with_capacity(args.len());
        for arg in args {
            arg_temps.push(self.generate_expression(arg));
        }
        for temp in &arg_temps {
            self.emit(&format!("param {}", temp));
        }
        let temp = self.make_temp();
        self.emit(&format!("{} = call {}, {}", temp, name, args.len()));
        temp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lower(expr: &Expr) -> (String, String) {
        let mut generator = CodeGenerator::new();
        let place = generator.generate_expression(expr);
        (place, generator.into_output())
    }

    #[test]
    fn test_constant() {
        let (place, code) = lower(&Expr::constant("42"));
        assert_eq!(place, "t0");
        assert_eq!(code, "t0 = 42\n");
    }

    #[test]
    fn test_variable_load_and_cache() {
        let mut generator = CodeGenerator::new();
        let first = generator.generate_expression(&Expr::variable("x", "int"));
        let second = generator.generate_expression(&Expr::variable("x", "int"));
        assert_eq!(first, "t0");
        // The cached temporary is reused without a second load.
        assert_eq!(second, "t0");
        assert_eq!(generator.output(), "t0 = x\n");
    }

    #[test]
    fn test_binary_lowers_left_before_right() {
        let expr = Expr::binary("+", Expr::constant("2"), Expr::constant("3"));
        let (place, code) = lower(&expr);
        assert_eq!(place, "t2");
        assert_eq!(code, "t0 = 2\nt1 = 3\nt2 = t0 + t1\n");
    }

    #[test]
    fn test_relational_operator_is_emitted_verbatim() {
        let expr = Expr::binary("<=", Expr::variable("i", "int"), Expr::constant("10"));
        let (place, code) = lower(&expr);
        assert_eq!(place, "t2");
        assert_eq!(code, "t0 = i\nt1 = 10\nt2 = t0 <= t1\n");
    }

    #[test]
    fn test_tight_unary_operators_are_concatenated() {
        for op in ["!", "-", "+"] {
            let expr = Expr::unary(op, Expr::variable("x", "int"));
            let (place, code) = lower(&expr);
            assert_eq!(place, "t1");
            assert_eq!(code, format!("t0 = x\nt1 = {}t0\n", op));
        }
    }

    #[test]
    fn test_other_unary_operators_get_a_space() {
        let expr = Expr::unary("~", Expr::variable("x", "int"));
        let (_, code) = lower(&expr);
        assert_eq!(code, "t0 = x\nt1 = ~ t0\n");
    }

    #[test]
    fn test_array_load_scales_by_element_size() {
        let expr = Expr::array_element("arr", "int", Expr::variable("i", "int"));
        let (place, code) = lower(&expr);
        assert_eq!(place, "t3");
        assert_eq!(code, "t0 = i\nt1 = 4\nt2 = t0 * t1\nt3 = arr[t2]\n");
    }

    #[test]
    fn test_wide_element_types_scale_by_eight() {
        for var_type in ["float", "double"] {
            let expr = Expr::array_element("arr", var_type, Expr::constant("1"));
            let (_, code) = lower(&expr);
            assert_eq!(code, "t0 = 1\nt1 = 8\nt2 = t0 * t1\nt3 = arr[t2]\n");
        }
    }

    #[test]
    fn test_array_load_is_not_cached() {
        let mut generator = CodeGenerator::new();
        let expr = Expr::array_element("arr", "int", Expr::constant("0"));
        let first = generator.generate_expression(&expr);
        let second = generator.generate_expression(&expr);
        assert_ne!(first, second);
    }

    #[test]
    fn test_assignment_emits_store_and_returns_value() {
        let expr = Expr::assign(VarRef::scalar("x", "int"), Expr::constant("5"));
        let (place, code) = lower(&expr);
        assert_eq!(place, "t0");
        assert_eq!(code, "t0 = 5\nx = t0\n");
    }

    #[test]
    fn test_assignment_invalidates_the_cache() {
        let mut generator = CodeGenerator::new();
        generator.generate_expression(&Expr::variable("x", "int"));
        generator.generate_expression(&Expr::assign(
            VarRef::scalar("x", "int"),
            Expr::constant("2"),
        ));
        let reread = generator.generate_expression(&Expr::variable("x", "int"));
        // The stale t0 is not reused; a fresh load is emitted.
        assert_eq!(reread, "t2");
        assert_eq!(generator.output(), "t0 = x\nt1 = 2\nx = t1\nt2 = x\n");
    }

    #[test]
    fn test_indexed_assignment_lowers_value_before_offset() {
        let expr = Expr::assign(
            VarRef::indexed("arr", "int", Expr::variable("i", "int")),
            Expr::constant("7"),
        );
        let (place, code) = lower(&expr);
        assert_eq!(place, "t0");
        assert_eq!(
            code,
            "t0 = 7\nt1 = i\nt2 = 4\nt3 = t1 * t2\narr[t3] = t0\n"
        );
    }

    #[test]
    fn test_indexed_assignment_leaves_scalar_cache_alone() {
        let mut generator = CodeGenerator::new();
        generator.generate_expression(&Expr::variable("arr", "int"));
        generator.generate_expression(&Expr::assign(
            VarRef::indexed("arr", "int", Expr::constant("0")),
            Expr::constant("1"),
        ));
        let reread = generator.generate_expression(&Expr::variable("arr", "int"));
        // Only plain assignments invalidate; the cached base survives.
        assert_eq!(reread, "t0");
    }

    #[test]
    fn test_call_emits_params_after_all_argument_code() {
        let expr = Expr::call(
            "max",
            vec![
                Expr::binary("+", Expr::constant("1"), Expr::constant("2")),
                Expr::variable("y", "int"),
            ],
        );
        let (place, code) = lower(&expr);
        assert_eq!(place, "t4");
        assert_eq!(
            code,
            "t0 = 1\nt1 = 2\nt2 = t0 + t1\nt3 = y\nparam t2\nparam t3\nt4 = call max, 2\n"
        );
    }

    #[test]
    fn test_call_without_arguments() {
        let (place, code) = lower(&Expr::call("tick", vec![]));
        assert_eq!(place, "t0");
        assert_eq!(code, "t0 = call tick, 0\n");
    }

    #[test]
    fn test_missing_operands_degrade_to_empty() {
        let expr = Expr::Binary {
            op: "+".to_string(),
            left: None,
            right: Some(Box::new(Expr::constant("2"))),
        };
        let (place, code) = lower(&expr);
        assert_eq!(place, "t1");
        assert_eq!(code, "t0 = 2\nt1 =  + t0\n");
    }

    #[test]
    fn test_missing_assignment_value_degrades_to_empty() {
        let expr = Expr::Assign {
            target: VarRef::scalar("x", "int"),
            value: None,
        };
        let (place, code) = lower(&expr);
        assert_eq!(place, "");
        assert_eq!(code, "x = \n");
    }
}
