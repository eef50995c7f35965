//! Speech preparation
//!
//! Turns raw lesson content into voice-routed utterances: sanitize the
//! markup away, segment by language, pick a voice per segment.

mod pipeline;
mod router;
mod sanitize;

pub use pipeline::prepare_utterances;
pub use router::{RoutedUtterance, VoiceRouter};
pub use sanitize::clean_text_for_tts;
