pub mod config;
pub mod decomposer;
pub mod errors;
pub mod input;
pub mod lexicon;
pub mod logging;
pub mod numeral_config;
pub mod phrase;
pub mod scale;
pub mod session;
pub mod tables;
pub mod ui;

pub use decomposer::Decomposer;
pub use errors::{InputError, TableError, TranslateError};
pub use lexicon::{Lexicon, LexiconProvider};
pub use phrase::{Phrase, capitalize};
pub use scale::{BoundaryPolicy, Limits, ScaleProvider, ScaleTable, ScaleTier};
pub use tables::{TableSource, Tables};
