#![allow(missing_docs)]

pub mod confirm;
pub mod error;
pub mod flow;
pub mod http;
pub mod state;

pub use confirm::{Confirmation, Countdown, Navigator, REDIRECT_URL};
pub use error::{StateError, SubmitError};
pub use flow::{CHECK_FIELDS_MESSAGE, Outcome, Phase, Status, SubmitAck, SubmitFlow, Submitter};
pub use http::{ApiBase, HttpSubmitter};
pub use state::FormState;
