//! Canonical printer
//!
//! Renders AST nodes back to source text. Parsing printed output yields a tree
//! equal to the one that was printed:
//!
//! - declarations: `let x: Int = <expr>` (annotation only when present)
//! - binary expressions: `<left> <symbol> <right>`, never parenthesized
//! - strings: the captured text between `"` quotes, unchanged
//! - statements: one per line, separated by `\n`, no trailing newline

use crate::parser::ast::*;
use std::fmt;

/// Nodes the printer can render.
pub trait Printable {
    fn print_with(&self, printer: &mut Printer);
}

/// Render `node` in canonical form.
pub fn print<N: Printable + ?Sized>(node: &N) -> String {
    let mut printer = Printer::new();
    node.print_with(&mut printer);
    printer.finish()
}

/// Accumulates canonical source text.
#[derive(Debug, Default)]
pub struct Printer {
    out: String,
}

impl Printer {
    pub fn new() -> Self {
        Printer::default()
    }

    pub fn finish(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }
}

impl Printable for CompilationUnit {
    fn print_with(&self, printer: &mut Printer) {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                printer.write("\n");
            }
            statement.print_with(printer);
        }
    }
}

impl Printable for Statement {
    fn print_with(&self, printer: &mut Printer) {
        match self {
            Statement::Declaration(declaration) => declaration.print_with(printer),
        }
    }
}

impl Printable for Declaration {
    fn print_with(&self, printer: &mut Printer) {
        let binding = self.binding();

        printer.write(if self.is_mutable() { "var" } else { "let" });
        printer.write(" ");
        binding.name.print_with(printer);
        if let Some(type_annotation) = &binding.type_annotation {
            printer.write(": ");
            type_annotation.print_with(printer);
        }
        printer.write(" = ");
        binding.initializer.print_with(printer);
    }
}

/// Pending output while walking an expression tree.
enum Step<'a> {
    Node(&'a Expression),
    Operator(BinaryOperator),
}

impl Printable for Expression {
    /// Walks the tree with an explicit stack, so printing depth is bounded by
    /// heap rather than by the call stack.
    fn print_with(&self, printer: &mut Printer) {
        let mut pending = vec![Step::Node(self)];

        while let Some(step) = pending.pop() {
            match step {
                Step::Node(Expression::Constant(literal)) => literal.print_with(printer),
                Step::Node(Expression::Variable(name)) => name.print_with(printer),
                Step::Node(Expression::Binary {
                    left,
                    operator,
                    right,
                }) => {
                    pending.push(Step::Node(right));
                    pending.push(Step::Operator(*operator));
                    pending.push(Step::Node(left));
                }
                Step::Operator(operator) => {
                    printer.write(" ");
                    operator.print_with(printer);
                    printer.write(" ");
                }
            }
        }
    }
}

impl Printable for Literal {
    fn print_with(&self, printer: &mut Printer) {
        match self {
            Literal::Int(value) => printer.write(&value.to_string()),
            Literal::String(value) => {
                printer.write("\"");
                printer.write(value);
                printer.write("\"");
            }
            Literal::Bool(true) => printer.write("true"),
            Literal::Bool(false) => printer.write("false"),
        }
    }
}

impl Printable for BinaryOperator {
    fn print_with(&self, printer: &mut Printer) {
        printer.write(self.symbol());
    }
}

impl Printable for Identifier {
    fn print_with(&self, printer: &mut Printer) {
        printer.write(self.as_str());
    }
}

impl Printable for TypeIdentifier {
    fn print_with(&self, printer: &mut Printer) {
        printer.write(self.as_str());
    }
}

macro_rules! display_via_printer {
    ($($node:ty),* $(,)?) => {
        $(
            impl fmt::Display for $node {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&print(self))
                }
            }
        )*
    };
}

display_via_printer!(
    CompilationUnit,
    Statement,
    Declaration,
    Expression,
    Literal,
    BinaryOperator,
    Identifier,
    TypeIdentifier,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::parse;
    use crate::parser::token::PredefinedType;

    #[test]
    fn test_print_declarations() {
        assert_eq!(print(&Declaration::value("x", None, Expression::int(10))), "let x = 10");
        assert_eq!(
            print(&Declaration::variable(
                "name",
                Some(PredefinedType::String.into()),
                Expression::string("John Doe")
            )),
            "var name: String = \"John Doe\""
        );
    }

    #[test]
    fn test_print_binary_without_parentheses() {
        let expr = Expression::binary(
            Expression::int(1),
            BinaryOperator::Plus,
            Expression::binary(Expression::int(2), BinaryOperator::Multiply, Expression::variable("otherValue")),
        );
        assert_eq!(print(&expr), "1 + 2 * otherValue");
    }

    #[test]
    fn test_print_long_chains_in_source_order() {
        let depth = crate::parser::MAX_EXPRESSION_DEPTH;

        let mut left_leaning = Expression::int(0);
        let mut right_leaning = Expression::int(0);
        for i in 1..=depth as i64 {
            left_leaning = Expression::binary(left_leaning, BinaryOperator::Minus, Expression::int(i));
            right_leaning = Expression::binary(Expression::int(i), BinaryOperator::Plus, right_leaning);
        }

        let ascending: Vec<String> = (0..=depth).map(|i| i.to_string()).collect();
        assert_eq!(print(&left_leaning), ascending.join(" - "));

        let descending: Vec<String> = (0..=depth).rev().map(|i| i.to_string()).collect();
        assert_eq!(print(&right_leaning), descending.join(" + "));
    }

    #[test]
    fn test_print_literals() {
        assert_eq!(print(&Literal::Int(0)), "0");
        assert_eq!(print(&Literal::Int(1234567)), "1234567");
        assert_eq!(print(&Literal::Bool(true)), "true");
        assert_eq!(print(&Literal::Bool(false)), "false");
        assert_eq!(print(&Literal::String(r#"say \"hi\""#.to_string())), r#""say \"hi\"""#);
    }

    #[test]
    fn test_print_statements_one_per_line() {
        let unit = CompilationUnit::new(vec![
            Declaration::value("a", None, Expression::int(1)).into(),
            Declaration::variable("b", None, Expression::variable("a")).into(),
        ]);
        assert_eq!(print(&unit), "let a = 1\nvar b = a");
        assert_eq!(print(&CompilationUnit::default()), "");
    }

    #[test]
    fn test_display_matches_print() {
        let unit = parse("let finished: Int = 1 + 2 * otherValue").unwrap();
        assert_eq!(unit.to_string(), print(&unit));
        assert_eq!(BinaryOperator::Modulo.to_string(), "%");
    }

    #[test]
    fn test_canonicalizes_layout() {
        let unit = parse("let   x:Int=007 // trailing\n\n/* gap */ var y=x*2").unwrap();
        assert_eq!(print(&unit), "let x: Int = 7\nvar y = x * 2");
    }
}
