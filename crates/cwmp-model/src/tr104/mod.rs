// ── TR-104: VoiceService ──
//
// Schema paths are relative to the `Services.` object of whichever root
// hosts the service (`InternetGatewayDevice.` or `Device.`).

use crate::macros::cwmp_object;

mod line;
mod profile;

pub use line::{CodecListEntry, Line, LineCodec, LineSip, LineStats};
pub use profile::{ProfileSip, Rtp, Tone, ToneDescription, ToneEvent, TonePattern, VoiceProfile};

/// Codec names used by `Capabilities.Codecs.{i}.Codec`.
pub const CODECS: &[&str] = &[
    "G.711MuLaw",
    "G.711ALaw",
    "G.726",
    "G.729",
    "G.729a",
    "G.729e",
    "G.728",
    "G.723.1",
    "G.722",
    "G.722.1",
    "G.722.2",
    "GSM-FR",
    "GSM-HR",
    "GSM-EFR",
    "iLBC",
];

cwmp_object! {
    /// A voice service instance.
    pub struct VoiceService("VoiceService", "VoiceService.{i}.") {
        object capabilities: Capabilities = "Capabilities";
        table voice_profile: VoiceProfile = "VoiceProfile" counted "VoiceProfileNumberOfEntries";
    }
}

cwmp_object! {
    /// What the voice service implementation supports.
    pub struct Capabilities("Capabilities", "VoiceService.{i}.Capabilities.") {
        param max_profile_count: u32 = "MaxProfileCount" [ro];
        param max_line_count: u32 = "MaxLineCount" [ro];
        param max_sessions_per_line: u32 = "MaxSessionsPerLine" [ro];
        param max_session_count: u32 = "MaxSessionCount" [ro];
        param signaling_protocols: String = "SignalingProtocols" [ro, max(256)];
        param regions: String = "Regions" [ro, max(256)];
        param rtcp: bool = "RTCP" [ro];
        param srtp: bool = "SRTP" [ro];
        param rtp_redundancy: bool = "RTPRedundancy" [ro];
        param dscp_coupled: bool = "DSCPCoupled" [ro];
        param ethernet_tagging_coupled: bool = "EthernetTaggingCoupled" [ro];
        param pstn_soft_switch_over: bool = "PSTNSoftSwitchOver" [ro];
        param fax_t38: bool = "FaxT38" [ro];
        param fax_pass_through: bool = "FaxPassThrough" [ro];
        param modem_pass_through: bool = "ModemPassThrough" [ro];
        param tone_generation: bool = "ToneGeneration" [ro];
        param tone_descriptions_editable: bool = "ToneDescriptionsEditable" [ro];
        param pattern_based_tone_generation: bool = "PatternBasedToneGeneration" [ro];
        param file_based_tone_generation: bool = "FileBasedToneGeneration" [ro];
        param tone_file_formats: String = "ToneFileFormats" [ro, max(256)];
        param ring_generation: bool = "RingGeneration" [ro];
        param numbering_plan: bool = "NumberingPlan" [ro];
        param button_map: bool = "ButtonMap" [ro];
        param voice_port_tests: bool = "VoicePortTests" [ro];
        table codecs: CapabilityCodec = "Codecs";
    }
}

cwmp_object! {
    pub struct CapabilityCodec("Codecs", "VoiceService.{i}.Capabilities.Codecs.{i}.") [keys: "EntryID"] {
        param entry_id: u32 = "EntryID" [ro, min(1)];
        param codec: String = "Codec" [ro, values(CODECS)];
        param bit_rate: u32 = "BitRate" [ro];
        param packetization_period: String = "PacketizationPeriod" [ro, max(64)];
        param silence_suppression: bool = "SilenceSuppression" [ro];
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn codecs_table_is_not_counted() {
        let caps = Capabilities::default().with_codecs(CapabilityCodec::default().with_entry_id(1));
        assert!(caps.params().iter().all(|p| !p.name.ends_with("NumberOfEntries")));
        assert_eq!(caps.codecs().len(), 1);
    }

    #[test]
    fn service_relative_paths() {
        assert_eq!(VoiceService::SCHEMA_PATH, "VoiceService.{i}.");
        assert_eq!(
            VoiceService::default().template("VoiceProfile").unwrap().schema_path(),
            "VoiceService.{i}.VoiceProfile.{i}."
        );
    }
}
