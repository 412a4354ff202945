use tracing::{debug, error};

use crate::{
    ast::{ast::Program, destroy::destroy_program},
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// Holder of the single root of a parse.
///
/// Created empty before parsing begins, written once by the program
/// reduction, read by every later pass and finally torn down.
#[derive(Debug, Default)]
pub struct CompilerState {
    abstract_syntax_tree: Option<Program>,
    published: bool,
}

impl CompilerState {
    pub fn new() -> Self {
        CompilerState::default()
    }

    /// Stores `program` as the root. A second publication is rejected and
    /// the rejected program is destroyed.
    pub fn publish_root(&mut self, program: Program) -> Result<&Program, Error> {
        if self.published {
            error!("attempted to publish a second program root");
            destroy_program(Some(program));
            return Err(Error::new(ErrorImpl::RootAlreadyPublished, Position::null()));
        }

        self.published = true;
        Ok(self.abstract_syntax_tree.insert(program))
    }

    pub fn root(&self) -> Option<&Program> {
        self.abstract_syntax_tree.as_ref()
    }

    pub fn expect_root(&self) -> Result<&Program, Error> {
        self.root()
            .ok_or_else(|| Error::new(ErrorImpl::MissingRoot, Position::null()))
    }

    /// Hands the root to the caller, leaving the slot empty.
    pub fn take_root(&mut self) -> Option<Program> {
        self.abstract_syntax_tree.take()
    }

    pub fn is_published(&self) -> bool {
        self.published
    }

    /// Destroys the root, if any, and clears the slot.
    pub fn teardown(&mut self) {
        debug!(has_root = self.abstract_syntax_tree.is_some(), "tearing down compiler state");
        destroy_program(self.abstract_syntax_tree.take());
    }
}
