mod exchange;
mod parse;
mod sample;

pub use exchange::{group_exchanges, Exchange};
pub use parse::{match_speaker_header, parse_transcript, ASSISTANT_ALIASES, USER_ALIASES};
pub use sample::SAMPLE_TRANSCRIPT;
