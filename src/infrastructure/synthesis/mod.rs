mod espeak_engine;
mod google_tts_engine;
mod stream_elements_engine;

pub use espeak_engine::EspeakEngine;
pub use google_tts_engine::GoogleTtsEngine;
pub use stream_elements_engine::StreamElementsEngine;

/// One silent MPEG-1 Layer III frame (44.1 kHz, 32 kbit/s, mono). Engines
/// return this for empty text, which must synthesize successfully because
/// upstream extraction can legitimately yield nothing.
pub fn minimal_silence() -> Vec<u8> {
    let mut frame = vec![0u8; 104];
    frame[..4].copy_from_slice(&[0xFF, 0xFB, 0x10, 0xC4]);
    frame
}
