use crate::common;
use crate::macros::cwmp_object;
use crate::param::Unit;

use super::line::Line;

const TRANSPORTS: &[&str] = &["UDP", "TCP", "TLS", "SCTP"];
const PASS_THROUGH: &[&str] = &["Disable", "Auto", "Force"];

cwmp_object! {
    /// Configuration shared by a group of lines.
    pub struct VoiceProfile("VoiceProfile", "VoiceService.{i}.VoiceProfile.{i}.") {
        param enable: String = "Enable" [rw, values(common::VOICE_ENABLE)] default "Disabled";
        param reset: bool = "Reset" [rw];
        param name: String = "Name" [rw, max(64)];
        param signaling_protocol: String = "SignalingProtocol" [rw, max(64)];
        param max_sessions: u32 = "MaxSessions" [rw];
        param dtmf_method: String = "DTMFMethod" [rw, values(&["InBand", "RFC2833", "SIPInfo"])];
        param dtmf_method_g711: String = "DTMFMethodG711"
            [rw, values(&["InBand", "RFC2833", "SIPInfo", ""])];
        /// ISO 3166-1 alpha-2 country code selecting the tone set.
        param region: String = "Region" [rw, max(2)];
        param digit_map: String = "DigitMap" [rw, max(256)];
        param digit_map_enable: bool = "DigitMapEnable" [rw];
        param stun_enable: bool = "STUNEnable" [rw];
        param stun_server: String = "STUNServer" [rw, max(256)];
        param fax_pass_through: String = "FaxPassThrough" [rw, values(PASS_THROUGH)];
        param modem_pass_through: String = "ModemPassThrough" [rw, values(PASS_THROUGH)];
        object sip: ProfileSip = "SIP";
        object rtp: Rtp = "RTP";
        object tone: Tone = "Tone";
        table line: Line = "Line" counted "NumberOfLines";
    }
}

cwmp_object! {
    /// SIP signaling of a voice profile.
    pub struct ProfileSip("SIP", "VoiceService.{i}.VoiceProfile.{i}.SIP.") {
        param proxy_server: String = "ProxyServer" [rw, max(256)];
        param proxy_server_port: u32 = "ProxyServerPort" [rw, range(0, 65535)] default 5060;
        param proxy_server_transport: String = "ProxyServerTransport"
            [rw, values(TRANSPORTS)] default "UDP";
        param registrar_server: String = "RegistrarServer" [rw, max(256)];
        param registrar_server_port: u32 = "RegistrarServerPort" [rw, range(0, 65535)] default 5060;
        param registrar_server_transport: String = "RegistrarServerTransport"
            [rw, values(TRANSPORTS)] default "UDP";
        param user_agent_domain: String = "UserAgentDomain" [rw, max(256)];
        param user_agent_port: u32 = "UserAgentPort" [rw, range(0, 65535)] default 0;
        param user_agent_transport: String = "UserAgentTransport"
            [rw, values(TRANSPORTS)] default "UDP";
        param outbound_proxy: String = "OutboundProxy" [rw, max(256)];
        param outbound_proxy_port: u32 = "OutboundProxyPort" [rw, range(0, 65535)] default 5060;
        param organization: String = "Organization" [rw, max(256)];
        param registration_period: u32 = "RegistrationPeriod" [rw, min(1), unit(Unit::Seconds)];
        param register_expires: u32 = "RegisterExpires" [rw, min(1), unit(Unit::Seconds)];
        param register_retry_interval: u32 = "RegisterRetryInterval" [rw, min(1), unit(Unit::Seconds)];
        param invite_expires: u32 = "InviteExpires" [rw, min(1), unit(Unit::Seconds)];
        param re_invite_expires: u32 = "ReInviteExpires" [rw, min(1), unit(Unit::Seconds)];
        param timer_t1: u32 = "TimerT1" [rw, min(1), unit(Unit::Milliseconds)] default 500;
        param timer_t2: u32 = "TimerT2" [rw, min(1), unit(Unit::Milliseconds)] default 4000;
        param timer_t4: u32 = "TimerT4" [rw, min(1), unit(Unit::Milliseconds)] default 5000;
        param dscp_mark: u32 = "DSCPMark" [rw, range(0, 63)];
        /// -1 leaves the VLAN tag unset.
        param vlan_id_mark: i32 = "VLANIDMark" [rw, min(-1)] default -1;
        param ethernet_priority_mark: i32 = "EthernetPriorityMark" [rw, min(-1)] default -1;
    }
}

cwmp_object! {
    pub struct Rtp("RTP", "VoiceService.{i}.VoiceProfile.{i}.RTP.") {
        param local_port_min: u32 = "LocalPortMin" [rw, range(0, 65535)];
        param local_port_max: u32 = "LocalPortMax" [rw, range(0, 65535)];
        param dscp_mark: u32 = "DSCPMark" [rw, range(0, 63)];
        param vlan_id_mark: i32 = "VLANIDMark" [rw, min(-1)] default -1;
        param ethernet_priority_mark: i32 = "EthernetPriorityMark" [rw, min(-1)] default -1;
        param telephone_event_payload_type: u32 = "TelephoneEventPayloadType" [rw, range(0, 128)];
    }
}

// ── Tones ──

cwmp_object! {
    pub struct Tone("Tone", "VoiceService.{i}.VoiceProfile.{i}.Tone.") {
        table event: ToneEvent = "Event" counted "EventNumberOfEntries";
        table description: ToneDescription = "Description" counted "DescriptionNumberOfEntries";
        table pattern: TonePattern = "Pattern" counted "PatternNumberOfEntries";
    }
}

cwmp_object! {
    /// Binds a call-progress event to a tone description.
    pub struct ToneEvent("Event", "VoiceService.{i}.VoiceProfile.{i}.Tone.Event.{i}.") [keys: "Function"] {
        param function: String = "Function" [ro, values(&[
            "Busy",
            "Confirmation",
            "Dial",
            "LineMessagesWaiting",
            "OffHookWarning",
            "RingBack",
            "ReOrder",
            "Stutterdial",
            "CallWaiting1",
            "CallWaiting2",
            "CallWaiting3",
            "CallWaiting4",
            "AlertingSignal",
            "SpecialDial",
            "SpecialInfo",
            "Release",
            "Congestion",
            "UserDefined1",
            "UserDefined2",
            "UserDefined3",
            "UserDefined4",
        ])];
        /// `EntryID` of the `Tone.Description.{i}.` to play.
        param tone_id: u32 = "ToneID" [rw];
    }
}

cwmp_object! {
    pub struct ToneDescription(
        "Description",
        "VoiceService.{i}.VoiceProfile.{i}.Tone.Description.{i}."
    ) [keys: "EntryID"] {
        param entry_id: u32 = "EntryID" [ro, min(1)];
        param tone_enable: bool = "ToneEnable" [rw];
        param tone_name: String = "ToneName" [rw, max(64)];
        param tone_pattern: u32 = "TonePattern" [rw];
        param tone_file: String = "ToneFile" [rw, max(256)];
        /// Times to repeat the tone file; 0 plays it once.
        param tone_repetitions: u32 = "ToneRepetitions" [rw] default 0;
        param tone_text: String = "ToneText" [rw, max(64)];
    }
}

cwmp_object! {
    /// One step of a pattern-based tone.
    pub struct TonePattern("Pattern", "VoiceService.{i}.VoiceProfile.{i}.Tone.Pattern.{i}.")
        [keys: "EntryID"]
    {
        param entry_id: u32 = "EntryID" [ro, min(1)];
        param tone_on: bool = "ToneOn" [rw];
        param frequency1: u32 = "Frequency1" [rw, range(0, 4095), unit(Unit::Hz)];
        param power1: i32 = "Power1" [rw, unit(Unit::Dbm)];
        param frequency2: u32 = "Frequency2" [rw, range(0, 4095), unit(Unit::Hz)];
        param power2: i32 = "Power2" [rw, unit(Unit::Dbm)];
        param frequency3: u32 = "Frequency3" [rw, range(0, 4095), unit(Unit::Hz)];
        param power3: i32 = "Power3" [rw, unit(Unit::Dbm)];
        param frequency4: u32 = "Frequency4" [rw, range(0, 4095), unit(Unit::Hz)];
        param power4: i32 = "Power4" [rw, unit(Unit::Dbm)];
        param modulation_frequency: u32 = "ModulationFrequency" [rw, range(0, 4095), unit(Unit::Hz)];
        param modulation_power: i32 = "ModulationPower" [rw, unit(Unit::Dbm)];
        param duration: u32 = "Duration" [rw, unit(Unit::Milliseconds)];
        param next_entry_id: u32 = "NextEntryID" [rw];
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::value::Value;

    #[test]
    fn sip_defaults() {
        let sip = ProfileSip::default();
        assert_eq!(sip.proxy_server_port(), Some(&5060));
        assert_eq!(sip.registrar_server_port(), Some(&5060));
        assert_eq!(sip.proxy_server_transport().map(String::as_str), Some("UDP"));
        assert_eq!(sip.timer_t1(), Some(&500));
        assert_eq!(sip.vlan_id_mark(), Some(&-1));
        assert_eq!(sip.proxy_server(), None);
    }

    #[test]
    fn tone_repetitions_default_to_zero() {
        let tone = ToneDescription::default();
        assert_eq!(tone.tone_repetitions(), Some(&0));
        assert_eq!(tone.param("ToneRepetitions").unwrap(), Some(Value::UnsignedInt(0)));
    }

    #[test]
    fn profile_counts_lines_as_number_of_lines() {
        let profile = VoiceProfile::default()
            .with_line(Line::default())
            .with_line(Line::default());
        assert_eq!(profile.enable().map(String::as_str), Some("Disabled"));
        assert_eq!(profile.param("NumberOfLines").unwrap(), Some(Value::UnsignedInt(2)));
    }
}
