use super::{
    expressions::{AssignmentExpr, CallExpr, Expr},
    types::Type,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Function(FunctionDecl),
    If(IfStmt),
    For(ForStmt),
    Return(Option<Expr>),
    VarDecl(VarDeclStmt),
    Call(CallExpr),
    Assignment(AssignmentExpr),
    PassThrough(String),
    Unrecognized(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub param_type: Type,
}

/// A function statement. A missing body makes it a prototype, which only
/// registers the signature.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: Type,
    pub body: Option<Vec<Stmt>>,
}

impl FunctionDecl {
    pub fn is_prototype(&self) -> bool {
        self.body.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub else_body: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub initial: Box<Stmt>,
    pub condition: Expr,
    pub step: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclStmt {
    pub identifier: String,
    pub assigned_value: Expr,
}

impl Parameter {
    pub fn new(name: impl Into<String>, param_type: Type) -> Self {
        Parameter {
            name: name.into(),
            param_type,
        }
    }
}

impl Stmt {
    pub fn var(identifier: impl Into<String>, assigned_value: Expr) -> Stmt {
        Stmt::VarDecl(VarDeclStmt {
            identifier: identifier.into(),
            assigned_value,
        })
    }

    pub fn call(callee: impl Into<String>, arguments: Vec<Expr>) -> Stmt {
        Stmt::Call(CallExpr {
            callee: callee.into(),
            arguments,
        })
    }

    pub fn assign(assignee: impl Into<String>, value: Expr) -> Stmt {
        Stmt::Assignment(AssignmentExpr {
            assignee: assignee.into(),
            value: Box::new(value),
        })
    }

    pub fn function(
        name: impl Into<String>,
        parameters: Vec<Parameter>,
        return_type: Type,
        body: Option<Vec<Stmt>>,
    ) -> Stmt {
        Stmt::Function(FunctionDecl {
            name: name.into(),
            parameters,
            return_type,
            body,
        })
    }

    /// Number of brace-delimited blocks nested inside this statement,
    /// counting its own block if it has one.
    pub fn block_depth(&self) -> usize {
        match self {
            Stmt::Function(function) => function
                .body
                .as_ref()
                .map(|body| 1 + block_depth(body))
                .unwrap_or(0),
            Stmt::If(if_stmt) => {
                let then_depth = block_depth(&if_stmt.then_body);
                let else_depth = if_stmt.else_body.as_deref().map(block_depth).unwrap_or(0);
                1 + then_depth.max(else_depth)
            }
            Stmt::For(for_stmt) => 1 + block_depth(&for_stmt.body),
            _ => 0,
        }
    }
}

/// Deepest block nesting among a sequence of statements.
pub fn block_depth(body: &[Stmt]) -> usize {
    body.iter().map(Stmt::block_depth).max().unwrap_or(0)
}
