pub use account::Account;
pub use draft::{BillDraft, NOTE_MAX_CHARS, ValidatedBill};
pub use entry::BillEntry;
pub use error::{EngineError, Field, ValidationError};
pub use money::MoneyCents;
pub use register::{BillRegister, DEFAULT_MAX_ENTRIES};

mod account;
mod draft;
mod entry;
mod error;
mod money;
mod register;

type ResultEngine<T> = Result<T, EngineError>;
