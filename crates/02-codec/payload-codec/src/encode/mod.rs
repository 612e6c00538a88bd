//! One encoder per parameter kind. Each takes the module instance id plus a
//! typed configuration and returns a freshly allocated [`crate::ParamBlock`].

mod detection;
mod generic;
mod interface;
mod media;
mod speaker;

pub use detection::{
    encode_detection_reset, encode_doa_query, encode_event_config, encode_setup_duration,
    encode_sound_model, encode_wakeup_buffer_config, encode_wakeup_config, PortSetupDuration,
    WakeUpBufferConfig, WakeUpConfig, DOA_TRACKING_MONITOR_LEN,
};
pub use generic::{encode_custom, encode_query, encode_session_time_query, SESSION_TIME_LEN};
pub use interface::{
    encode_dp_audio_config, encode_mono_switch, encode_usb_audio_config, DpAudioConfig,
    EncoderChannelMode, UsbAudioConfig,
};
pub use media::{
    encode_cop_output_format, encode_mfc_output_format, encode_pcm_output_format,
    encode_rat_media_format, MediaConfig, MfcOutputFormat, PCM_FORMAT_FIELDS_LEN,
};
pub use speaker::{encode_speaker_r0t0, SpeakerR0T0};
