//! Lexical scope chains.
//!
//! A chain is a persistent singly linked list of frames, innermost first.
//! Extending a chain never touches the frames it was built from: binding a
//! name copies only the head frame, and pushing a frame shares the whole old
//! chain as its tail. Sibling branches can therefore keep using the chain
//! they were handed while another branch extends its own copy.

use std::{collections::HashMap, rc::Rc};

use crate::ast::{statements::Parameter, types::Type};

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionSignature {
    pub return_type: Type,
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Symbol {
    Variable { var_type: Type },
    Function(FunctionSignature),
}

impl Symbol {
    pub fn variable(var_type: Type) -> Self {
        Symbol::Variable { var_type }
    }

    pub fn function(return_type: Type, parameters: Vec<Parameter>) -> Self {
        Symbol::Function(FunctionSignature {
            return_type,
            parameters,
        })
    }

    /// The type an identifier expression naming this symbol evaluates to.
    pub fn get_type(&self) -> Type {
        match self {
            Symbol::Variable { var_type } => *var_type,
            Symbol::Function(signature) => signature.return_type,
        }
    }
}

pub type Frame = HashMap<String, Symbol>;

#[derive(Debug)]
struct Link {
    frame: Frame,
    tail: Option<Rc<Link>>,
}

#[derive(Debug, Clone)]
pub struct ScopeChain {
    head: Rc<Link>,
}

impl ScopeChain {
    /// A chain holding one empty root frame.
    pub fn root() -> Self {
        ScopeChain {
            head: Rc::new(Link {
                frame: Frame::new(),
                tail: None,
            }),
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&Symbol> {
        self.frames().find_map(|frame| frame.get(name))
    }

    /// Resolves `name` as a callee. A nearer variable of the same name hides
    /// any function further out.
    pub fn lookup_function(&self, name: &str) -> Option<&FunctionSignature> {
        match self.lookup(name)? {
            Symbol::Function(signature) => Some(signature),
            Symbol::Variable { .. } => None,
        }
    }

    pub fn bind_in_head(&self, name: impl Into<String>, symbol: Symbol) -> ScopeChain {
        let mut frame = self.head.frame.clone();
        frame.insert(name.into(), symbol);

        ScopeChain {
            head: Rc::new(Link {
                frame,
                tail: self.head.tail.clone(),
            }),
        }
    }

    pub fn push_frame(&self, frame: Frame) -> ScopeChain {
        ScopeChain {
            head: Rc::new(Link {
                frame,
                tail: Some(Rc::clone(&self.head)),
            }),
        }
    }

    pub fn push_empty_frame(&self) -> ScopeChain {
        self.push_frame(Frame::new())
    }

    pub fn head_frame(&self) -> &Frame {
        &self.head.frame
    }

    pub fn depth(&self) -> usize {
        self.frames().count()
    }

    fn frames(&self) -> impl Iterator<Item = &Frame> {
        std::iter::successors(Some(self.head.as_ref()), |&link| link.tail.as_deref())
            .map(|link| &link.frame)
    }
}

impl Default for ScopeChain {
    fn default() -> Self {
        ScopeChain::root()
    }
}
