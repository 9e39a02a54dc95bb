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

//! Three-address code generation from the AST.
//!
//! It handles:
//! - Temporary and label allocation
//! - Expression lowering
//! - Control flow linearization
//! - Array offset computation
//!
//! The generator appends one instruction per line to an owned text
//! buffer; [`generate`] runs it over a whole program.

pub mod control_flow;
pub mod expressions;

pub use control_flow::ControlFlowEmitter;
pub use expressions::ExpressionEmitter;

use crate::ast::Program;
use std::collections::HashMap;

/// The prefix of generated temporaries (`t0`, `t1`, ...).
const TEMP_PREFIX: &str = "t";
/// The prefix of generated labels (`L0`, `L1`, ...).
const LABEL_PREFIX: &str = "L";

/// The three-address code generator.
///
/// One generator covers one compilation: its counters are never reset,
/// so every temporary and label it hands out is unique.
pub struct CodeGenerator {
    /// The generated code, one instruction per line.
    code: String,
    /// Cache from variable name to the temporary holding its current
    /// value. Invalidated when the variable is assigned.
    var_temps: HashMap<String, String>,
    /// Counter for temporary names.
    temp_counter: u32,
    /// Counter for label names.
    label_counter: u32,
}

impl CodeGenerator {
    /// Create a new code generator with an empty output buffer.
    pub fn new() -> Self {
        Self {
            code: String::new(),
            var_temps: HashMap::new(),
            temp_counter: 0,
            label_counter: 0,
        }
    }

    /// Allocate a fresh temporary name.
    fn make_temp(&mut self) -> String {
        let temp = format!("{}{}", TEMP_PREFIX, self.temp_counter);
        self.temp_counter += 1;
        temp
    }

    /// Allocate a fresh label name.
    fn make_label(&mut self) -> String {
        let label = format!("{}{}", LABEL_PREFIX, self.label_counter);
        self.label_counter += 1;
        label
    }

    /// Append one instruction line to the output.
    fn emit(&mut self, line: &str) {
        self.code.push_str(line);
        self.code.push('\n');
    }

    /// Append a label definition line (`name:`) to the output.
    fn define_label(&mut self, name: &str) {
        self.code.push_str(name);
        self.code.push_str(":\n");
    }

    /// Get the generated code so far.
    pub fn output(&self) -> &str {
        &self.code
    }

    /// Consume the generator and take the generated code.
    pub fn into_output(self) -> String {
        self.code
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower a whole program to three-address code.
pub fn generate(program: &Program) -> String {
    let mut generator = CodeGenerator::new();
    generator.generate_program(program);
    generator.into_output()
}
