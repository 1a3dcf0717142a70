pub mod reducer;
pub mod signup;

pub use reducer::{reduce, SignupEvent, SignupState};
pub use signup::{SignupController, SubmitRejected};
