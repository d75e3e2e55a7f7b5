//! # txe-circuit
//!
//! Circuit input assembly and the verifier relation (spec components H/I):
//! the witness layout the proving backend allocates, and the predicate a
//! proof over that witness attests to.

pub mod argify;
pub mod eip712;
pub mod error;
pub mod input;
pub mod relation;

pub use argify::argify;
pub use error::{CircuitError, VerifyError};
pub use input::{extract, Input, PrivateInput, PrivateRecipient, PublicInput, PublicRecipient};
