/// A location in the source text.
///
/// Lines are 1-based. Columns are 0-based character offsets within the line,
/// so the first character of a program is at `line 1:0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    /// The source line.
    pub line:   usize,
    /// The character offset inside the line.
    pub column: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}:{}", self.line, self.column)
    }
}

/// A complete program: the statements of one run, in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements evaluated from first to last.
    pub statements: Vec<Statement>,
}

/// A single assignment, `name = expression` or a bare `name`.
///
/// A statement without an expression assigns `0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// The variable being assigned.
    pub variable:   Variable,
    /// The value expression, if one was written.
    pub expression: Option<Expression>,
    /// Position of the first token of the statement.
    pub position:   Position,
}

/// A variable name as it appeared in the source.
///
/// Used both as an assignment target and as a reference inside an atom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    /// The identifier text.
    pub name:     String,
    /// Position of the identifier.
    pub position: Position,
}

/// Additive operators joining the terms of an [`Expression`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
}

/// Multiplicative operators joining the factors of a [`Term`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MulOperator {
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

/// A prefix sign on an atom.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Sign {
    /// Unary plus (`+x`), leaves the value unchanged.
    Plus,
    /// Unary minus (`-x`).
    Minus,
}

/// A chain of terms joined by `+` and `-`, folded left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    /// The leading term.
    pub first:    Term,
    /// Every following `(operator, term)` pair.
    pub rest:     Vec<(AddOperator, Term)>,
    /// Position of the leading term.
    pub position: Position,
}

/// A chain of factors joined by `*` and `/`, folded left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct Term {
    /// The leading factor.
    pub first:    Factor,
    /// Every following `(operator, factor)` pair.
    pub rest:     Vec<(MulOperator, Factor)>,
    /// Position of the leading factor.
    pub position: Position,
}

/// A chain of signed atoms joined by `^`.
///
/// The chain is folded left to right: `a ^ b ^ c` is `(a ^ b) ^ c`.
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    /// The base.
    pub first:    SignedAtom,
    /// The exponents, applied in order.
    pub rest:     Vec<SignedAtom>,
    /// Position of the base.
    pub position: Position,
}

/// An atom with an optional prefix sign.
///
/// The sign binds tighter than `^`, so `-5 ^ 2` is `(-5) ^ 2`.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedAtom {
    /// The sign, if one was written.
    pub sign:     Option<Sign>,
    /// The operand.
    pub atom:     Atom,
    /// Position of the sign, or of the atom when unsigned.
    pub position: Position,
}

/// The smallest unit of an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Atom {
    /// A parenthesized sub-expression.
    Group {
        /// The enclosed expression.
        expression: Box<Expression>,
        /// Position of the opening parenthesis.
        position:   Position,
    },
    /// A numeric literal, kept as its source text.
    Number {
        /// The literal text, e.g. `2.5e-3`.
        text:     String,
        /// Position of the literal.
        position: Position,
    },
    /// A reference to a previously assigned variable.
    Variable(Variable),
    /// A builtin function call.
    Call(FunctionCall),
}

impl Atom {
    /// Gets the source position of `self`.
    ///
    /// ## Example
    /// ```
    /// use formulon::ast::{Atom, Position};
    ///
    /// let atom = Atom::Number { text:     "42".to_string(),
    ///                           position: Position::new(3, 7), };
    ///
    /// assert_eq!(atom.position(), Position::new(3, 7));
    /// ```
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Group { position, .. } | Self::Number { position, .. } => *position,
            Self::Variable(variable) => variable.position,
            Self::Call(call) => call.position,
        }
    }
}

/// A call such as `pow(2, 10)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The function name.
    pub name:           String,
    /// The arguments, in source order.
    pub arguments:      Vec<Expression>,
    /// Whether the argument list ended with a comma, as in `pow(2, 3,)`.
    pub trailing_comma: bool,
    /// Position of the function name.
    pub position:       Position,
}

impl std::fmt::Display for AddOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for MulOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
