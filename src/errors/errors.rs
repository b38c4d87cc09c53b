use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Option<Position>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position: Some(position),
        }
    }

    /// Creates an error that has no source location, as raised by the
    /// lowering engine which works on position-free trees.
    pub fn unlocated(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
            position: None,
        }
    }

    pub fn get_position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::InvalidAst { .. } => "InvalidAst",
            ErrorImpl::UndefinedSymbol { .. } => "UndefinedSymbol",
            ErrorImpl::UndefinedFunction { .. } => "UndefinedFunction",
            ErrorImpl::ExtraArgument { .. } => "ExtraArgument",
            ErrorImpl::MissingArgument { .. } => "MissingArgument",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number literal: `{}`", token))
            }
            ErrorImpl::UnknownType { type_ } => ErrorTip::Suggestion(format!(
                "Unknown type `{}`, expected one of I32, F32, F64, String, Bool or Void",
                type_
            )),
            ErrorImpl::InvalidAst { .. } => ErrorTip::None,
            ErrorImpl::UndefinedSymbol { name } => {
                ErrorTip::Suggestion(format!("`{}` is not declared in any enclosing scope", name))
            }
            ErrorImpl::UndefinedFunction { name } => ErrorTip::Suggestion(format!(
                "Function `{}` is not declared, add a prototype before calling it",
                name
            )),
            ErrorImpl::ExtraArgument { function, .. } => {
                ErrorTip::Suggestion(format!("Too many arguments in call to `{}`", function))
            }
            ErrorImpl::MissingArgument { function, parameter } => ErrorTip::Suggestion(format!(
                "Call to `{}` is missing a value for `{}`",
                function, parameter
            )),
            ErrorImpl::TypeMismatch { expected, received, .. } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
    #[error("invalid AST: {message}")]
    InvalidAst { message: String },
    #[error("undefined symbol {name:?}")]
    UndefinedSymbol { name: String },
    #[error("undefined function {name:?}")]
    UndefinedFunction { name: String },
    #[error("unexpected extra argument {argument} in call to {function:?}")]
    ExtraArgument { function: String, argument: String },
    #[error("missing argument {parameter:?} in call to {function:?}")]
    MissingArgument { function: String, parameter: String },
    #[error("types do not match in {context}: expected {expected}, received {received}")]
    TypeMismatch {
        context: String,
        expected: String,
        received: String,
    },
}
