//! Activity logging: opt-in JSONL event stream on stderr.

pub mod jsonl;
