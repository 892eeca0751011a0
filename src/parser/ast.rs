// AST (Abstract Syntax Tree) definitions for Soil
//
// Nodes carry no source locations: two trees are equal exactly when they have
// the same shape and the same values.

use super::token::{PredefinedType, TokenKind};

/// A binding or reference name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Identifier(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Identifier::new(name)
    }
}

/// A type name in an annotation, either predefined or user-given
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeIdentifier(pub String);

impl TypeIdentifier {
    pub fn new(name: impl Into<String>) -> Self {
        TypeIdentifier(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The built-in type this name refers to, if any
    pub fn predefined(&self) -> Option<PredefinedType> {
        PredefinedType::from_name(&self.0)
    }
}

impl From<PredefinedType> for TypeIdentifier {
    fn from(ty: PredefinedType) -> Self {
        TypeIdentifier::new(ty.name())
    }
}

impl From<&str> for TypeIdentifier {
    fn from(name: &str) -> Self {
        TypeIdentifier::new(name)
    }
}

/// Literal values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    Int(i64),
    /// Text between the quotes, exactly as written in the source
    String(String),
    Bool(bool),
}

/// Associativity of a binary operator within its precedence tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulo,
}

/// One row of the operator table
#[derive(Debug)]
pub struct OperatorInfo {
    pub operator: BinaryOperator,
    pub token: TokenKind,
    pub symbol: &'static str,
    pub precedence: u8,
    pub associativity: Associativity,
}

/// Operator table, indexed by `BinaryOperator as usize`.
///
/// Higher precedence binds tighter.
static OPERATORS: [OperatorInfo; 5] = [
    OperatorInfo {
        operator: BinaryOperator::Plus,
        token: TokenKind::Plus,
        symbol: "+",
        precedence: 1,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        operator: BinaryOperator::Minus,
        token: TokenKind::Minus,
        symbol: "-",
        precedence: 1,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        operator: BinaryOperator::Multiply,
        token: TokenKind::Star,
        symbol: "*",
        precedence: 2,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        operator: BinaryOperator::Divide,
        token: TokenKind::Slash,
        symbol: "/",
        precedence: 2,
        associativity: Associativity::Left,
    },
    OperatorInfo {
        operator: BinaryOperator::Modulo,
        token: TokenKind::Percent,
        symbol: "%",
        precedence: 2,
        associativity: Associativity::Left,
    },
];

impl BinaryOperator {
    pub fn info(self) -> &'static OperatorInfo {
        &OPERATORS[self as usize]
    }

    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    pub fn precedence(self) -> u8 {
        self.info().precedence
    }

    pub fn associativity(self) -> Associativity {
        self.info().associativity
    }

    /// Look up an operator by its source symbol
    pub fn from_symbol(symbol: &str) -> Option<BinaryOperator> {
        OPERATORS
            .iter()
            .find(|info| info.symbol == symbol)
            .map(|info| info.operator)
    }

    /// Look up the operator a token stands for, if it is one
    pub fn from_token(kind: TokenKind) -> Option<BinaryOperator> {
        OPERATORS
            .iter()
            .find(|info| info.token == kind)
            .map(|info| info.operator)
    }
}

/// Expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Constant(Literal),
    Variable(Identifier),
    Binary {
        left: Box<Expression>,
        operator: BinaryOperator,
        right: Box<Expression>,
    },
}

impl Expression {
    pub fn int(value: i64) -> Self {
        Expression::Constant(Literal::Int(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::Constant(Literal::String(value.into()))
    }

    pub fn bool(value: bool) -> Self {
        Expression::Constant(Literal::Bool(value))
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(Identifier::new(name))
    }

    pub fn binary(left: Expression, operator: BinaryOperator, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

/// Name, optional type annotation and initializer shared by both declaration kinds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    pub name: Identifier,
    pub type_annotation: Option<TypeIdentifier>,
    pub initializer: Expression,
}

/// Declarations
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Declaration {
    /// `let`: immutable binding
    Value(Binding),
    /// `var`: mutable binding
    Variable(Binding),
}

impl Declaration {
    pub fn value(
        name: impl Into<Identifier>,
        type_annotation: Option<TypeIdentifier>,
        initializer: Expression,
    ) -> Self {
        Declaration::Value(Binding {
            name: name.into(),
            type_annotation,
            initializer,
        })
    }

    pub fn variable(
        name: impl Into<Identifier>,
        type_annotation: Option<TypeIdentifier>,
        initializer: Expression,
    ) -> Self {
        Declaration::Variable(Binding {
            name: name.into(),
            type_annotation,
            initializer,
        })
    }

    pub fn binding(&self) -> &Binding {
        match self {
            Declaration::Value(binding) | Declaration::Variable(binding) => binding,
        }
    }

    pub fn is_mutable(&self) -> bool {
        matches!(self, Declaration::Variable(_))
    }
}

/// Statements
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Statement {
    Declaration(Declaration),
}

impl From<Declaration> for Statement {
    fn from(declaration: Declaration) -> Self {
        Statement::Declaration(declaration)
    }
}

/// Root of a parsed source text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CompilationUnit {
    pub statements: Vec<Statement>, // source order
}

impl CompilationUnit {
    pub fn new(statements: Vec<Statement>) -> Self {
        CompilationUnit { statements }
    }
}

impl From<Vec<Statement>> for CompilationUnit {
    fn from(statements: Vec<Statement>) -> Self {
        CompilationUnit::new(statements)
    }
}

impl FromIterator<Statement> for CompilationUnit {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        CompilationUnit::new(iter.into_iter().collect())
    }
}
