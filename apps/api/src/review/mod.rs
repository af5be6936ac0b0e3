// Review & match flows: multipart upload intake, PDF text extraction,
// the deterministic keyword match, and the two AI review prompts.
// The two flows share no mutable state and may run concurrently.

pub mod handlers;
pub mod pdf;
pub mod upload;
