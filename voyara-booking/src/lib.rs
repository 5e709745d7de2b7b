pub mod forms;
pub mod receipt;
pub mod validate;
pub mod workflow;

pub use forms::{
    format_card_number, normalize_card_number, BookingForm, BookingFormPatch, PersonalInfo,
    PaymentInfo,
};
pub use receipt::Receipt;
pub use validate::{validate_step, FieldError};
pub use workflow::{
    AdvanceOutcome, BookingError, BookingStep, BookingWorkflow, RetreatOutcome,
};
