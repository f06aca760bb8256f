// ────────────────────────────────────────────────────────────────────────────
// Resume intake: file text extraction, heuristic parsing and job matching
// ────────────────────────────────────────────────────────────────────────────

pub mod extract;
pub mod handlers;
pub mod parser;

pub use parser::parse_resume_text;
