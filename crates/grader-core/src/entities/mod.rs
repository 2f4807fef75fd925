//! Record structs for the grader domain.
//!
//! Drafts are what the response parser produces: no store-assigned ids and no
//! aggregate counts. `Test` and `Problem` map to the `tests` and `problems`
//! tables. All structs derive `Serialize`, `Deserialize`, and `JsonSchema`.

mod draft;
mod message;
mod problem;

pub use draft::{ProblemDraft, TestDraft, validate_exam};
pub use message::ChatMessage;
pub use problem::Problem;
pub use test::Test;
