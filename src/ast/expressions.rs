use std::fmt::Display;

/// Expression nodes.
///
/// Each variant corresponds to exactly one tagged node shape of the input
/// tree. Shapes that match none of them are kept as `Unrecognized` together
/// with their original JSON so they can be reported in the output.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Symbol(String),
    Float(String),
    Double(String),
    Integer(String),
    String(String),
    Boolean(bool),
    Call(CallExpr),
    Assignment(AssignmentExpr),
    PassThrough(String),
    Unrecognized(serde_json::Value),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equals,
    GreaterThan,
    LessThan,
}

impl BinaryOperator {
    pub const ALL: [BinaryOperator; 7] = [
        BinaryOperator::Plus,
        BinaryOperator::Minus,
        BinaryOperator::Multiply,
        BinaryOperator::Divide,
        BinaryOperator::Equals,
        BinaryOperator::GreaterThan,
        BinaryOperator::LessThan,
    ];

    /// C spelling of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Equals => "==",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThan => "<",
        }
    }

    /// Tag used for this operator in the JSON tree.
    pub fn tag(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "plus",
            BinaryOperator::Minus => "minus",
            BinaryOperator::Multiply => "multiply",
            BinaryOperator::Divide => "divide",
            BinaryOperator::Equals => "equals",
            BinaryOperator::GreaterThan => "greaterThan",
            BinaryOperator::LessThan => "lessThan",
        }
    }

    pub fn from_tag(tag: &str) -> Option<BinaryOperator> {
        BinaryOperator::ALL.into_iter().find(|op| op.tag() == tag)
    }

    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOperator::Equals | BinaryOperator::GreaterThan | BinaryOperator::LessThan
        )
    }

    /// Binding strength of the operator in C; higher binds tighter.
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Multiply | BinaryOperator::Divide => 4,
            BinaryOperator::Plus | BinaryOperator::Minus => 3,
            BinaryOperator::GreaterThan | BinaryOperator::LessThan => 2,
            BinaryOperator::Equals => 1,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub arguments: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    pub assignee: String,
    pub value: Box<Expr>,
}

impl Expr {
    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Expr {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    pub fn symbol(name: impl Into<String>) -> Expr {
        Expr::Symbol(name.into())
    }

    pub fn integer(value: i64) -> Expr {
        Expr::Integer(value.to_string())
    }

    pub fn string(value: impl Into<String>) -> Expr {
        Expr::String(value.into())
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Expr>) -> Expr {
        Expr::Call(CallExpr {
            callee: callee.into(),
            arguments,
        })
    }

    pub fn assign(assignee: impl Into<String>, value: Expr) -> Expr {
        Expr::Assignment(AssignmentExpr {
            assignee: assignee.into(),
            value: Box::new(value),
        })
    }
}
