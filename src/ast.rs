use std::{fmt, rc::Rc};

/// The root of a parsed source text: its top-level statements in order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements, in source order.
    pub statements: Vec<Statement>,
}

/// A `{ ... }` delimited sequence of statements.
///
/// Blocks only appear as the bodies of `if` expressions and function
/// literals; they are not expressions on their own.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BlockStatement {
    /// Statements inside the braces, in source order.
    pub statements: Vec<Statement>,
}

/// A name used as a binding, a parameter or a variable reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier as written in the source.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier from its name.
    ///
    /// ## Example
    /// ```
    /// use mandrill::ast::Identifier;
    ///
    /// let id = Identifier::new("adder");
    ///
    /// assert_eq!(id.to_string(), "adder");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A statement of the language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `var <name> = <value>;`
    Var {
        /// The name being bound.
        name:  Identifier,
        /// The bound expression.
        value: Expression,
    },
    /// `return <value>;`
    Return {
        /// The returned expression.
        value: Expression,
    },
    /// A bare expression used as a statement. Its value is the statement's
    /// value.
    Expression {
        /// The wrapped expression.
        value: Expression,
    },
}

/// Operators that appear in front of a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// Logical negation, `!`.
    Not,
    /// Arithmetic negation, `-`.
    Negate,
}

/// Operators that join a left and a right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
}

/// A function literal: `func(<parameters>) { <body> }`.
///
/// Literals are reference counted so that every function value created from
/// the same literal shares its parameters and body instead of copying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    /// Parameter names, in declaration order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
}

/// An abstract syntax tree node representing an expression.
///
/// Every variant is fully populated once the parser hands it out; sub-nodes
/// are owned exclusively by their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// `true` or `false`.
    Boolean(bool),
    /// A double quoted string literal, without its quotes.
    StringLiteral(String),
    /// Array literal, `[a, b, c]`.
    Array {
        /// Element expressions, in source order.
        elements: Vec<Self>,
    },
    /// Hash literal, `{k: v, ...}`.
    Hash {
        /// Key/value expression pairs, in source order.
        entries: Vec<(Self, Self)>,
    },
    /// A prefix operation such as `-x` or `!ok`.
    Prefix {
        /// The operator.
        op:      PrefixOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation such as `a + b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
    },
    /// Indexing, `left[index]`.
    Index {
        /// The indexed container.
        left:  Box<Self>,
        /// The index expression.
        index: Box<Self>,
    },
    /// `if (<condition>) { ... } else { ... }`, the `else` being optional.
    If {
        /// The condition; it must evaluate to a boolean.
        condition:   Box<Self>,
        /// Block evaluated when the condition is true.
        consequence: BlockStatement,
        /// Block evaluated when the condition is false, if any.
        alternative: Option<BlockStatement>,
    },
    /// A function literal.
    Function(Rc<FunctionLiteral>),
    /// A call, `callee(arguments)`.
    Call {
        /// The expression producing the called value.
        callee:    Box<Self>,
        /// Argument expressions, in source order.
        arguments: Vec<Self>,
    },
}

/// Writes `items` separated by `", "`.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    /// Renders the program as its statements, back to back.
    ///
    /// The output parses back into an equal program.
    ///
    /// ## Example
    /// ```
    /// use mandrill::parse;
    ///
    /// let program = parse("var x = 1 + 2 * 3; x").unwrap();
    ///
    /// assert_eq!(program.to_string(), "var x = (1 + (2 * 3));x;");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        write!(f, "}}")
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var { name, value } => write!(f, "var {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { value } => write!(f, "{value};"),
        }
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Not => write!(f, "!"),
            Self::Negate => write!(f, "-"),
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{symbol}")
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func(")?;
        write_list(f, &self.parameters)?;
        write!(f, ") {}", self.body)
    }
}

impl fmt::Display for Expression {
    /// Renders the expression in fully parenthesized canonical form.
    ///
    /// Every prefix, infix and index expression gets its own pair of
    /// parentheses so the output shows exactly how the parser grouped it.
    ///
    /// ## Example
    /// ```
    /// use mandrill::parse;
    ///
    /// let program = parse("-a * b[1] + f(2, [3])").unwrap();
    ///
    /// assert_eq!(program.to_string(), "(((-a) * (b[1])) + f(2, [3]));");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(identifier) => write!(f, "{identifier}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "\"{value}\""),
            Self::Array { elements } => {
                write!(f, "[")?;
                write_list(f, elements)?;
                write!(f, "]")
            },
            Self::Hash { entries } => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Prefix { op, operand } => write!(f, "({op}{operand})"),
            Self::Infix { left, op, right } => write!(f, "({left} {op} {right})"),
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::If { condition,
                       consequence,
                       alternative, } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::Function(literal) => write!(f, "{literal}"),
            Self::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_list(f, arguments)?;
                write!(f, ")")
            },
        }
    }
}
