mod error;
mod inbound_sms;
mod reminder;
mod status;

pub mod dtos {
    pub use crate::reminder::dtos::*;
}

pub use crate::error::api::*;
pub use crate::inbound_sms::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
