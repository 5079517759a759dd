//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the entry
//! point the CLI drives every operation through.
//!
//! It dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It never
//! prints, never exits, and holds no business logic of its own.
//!
//! `BookApi<S: DataStore>` is generic over the storage backend; the HTTP
//! gateway shares the same `DataStore` underneath but reads it directly.

use crate::commands;
use crate::config::BookConfig;
use crate::error::Result;
use crate::search::{LINK_TAG, TODO_TAG};
use crate::store::DataStore;

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct BookApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> BookApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn install(&self) -> Result<commands::CmdResult> {
        commands::install::run(self.store.paths())
    }

    pub fn books(&self) -> Result<commands::CmdResult> {
        commands::books::run(&self.store)
    }

    pub fn create_book(&self, name: &str) -> Result<commands::CmdResult> {
        commands::create::book(&self.store, name)
    }

    pub fn create_note(&self, book: &str, name: &str) -> Result<commands::CmdResult> {
        commands::create::note(&self.store, book, name)
    }

    pub fn delete_book(&self, name: &str) -> Result<commands::CmdResult> {
        commands::delete::book(&self.store, name)
    }

    pub fn delete_note(&self, book: &str, name: &str) -> Result<commands::CmdResult> {
        commands::delete::note(&self.store, book, name)
    }

    pub fn show_book(&self, book: &str) -> Result<commands::CmdResult> {
        commands::show::run(&self.store, book)
    }

    pub fn find_tag(&self, tag: &str) -> Result<commands::CmdResult> {
        commands::tags::run(&self.store, tag)
    }

    pub fn todos(&self) -> Result<commands::CmdResult> {
        self.find_tag(TODO_TAG)
    }

    pub fn links(&self) -> Result<commands::CmdResult> {
        self.find_tag(LINK_TAG)
    }

    pub fn note_path(&self, book: &str, name: &str) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store, book, name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(self.store.paths().root(), action)
    }

    pub fn load_config(&self) -> Result<BookConfig> {
        BookConfig::load(self.store.paths().root())
    }
}
