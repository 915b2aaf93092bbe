//! Domain layer: strong types with validation and invariants (no I/O).

mod gateway;
mod mode;
mod overrides;
mod request;
mod response;
mod validation;
mod value;

pub use gateway::{DEFAULT_GATEWAYS, Gateways, Scheme};
pub use mode::{MethodPath, OperatingMode};
pub use overrides::CallOverrides;
pub use request::{ApiCall, ParamValue, Params, SendSmsOptions};
pub use response::ResponseEnvelope;
pub use validation::ValidationError;
pub use value::{
    AccountEmail, ApiKey, FieldName, GroupName, MessageText, MethodName, PageToken, PhoneNumber,
    RawPhoneNumber, SenderSign, UnixTimestamp, ViberChannel,
};
