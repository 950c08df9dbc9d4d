use crate::common;
use crate::macros::cwmp_object;
use crate::param::{ActiveNotify, Unit};

cwmp_object! {
    /// A voice line of a profile.
    pub struct Line("Line", "VoiceService.{i}.VoiceProfile.{i}.Line.{i}.") {
        param enable: String = "Enable" [rw, values(common::VOICE_ENABLE)] default "Disabled";
        param directory_number: String = "DirectoryNumber" [rw, max(32)];
        param status: String = "Status" [ro, values(&[
            "Up",
            "Initializing",
            "Registering",
            "Unregistering",
            "Error",
            "Testing",
            "Quiescent",
            "Disabled",
        ])] default "Disabled";
        param call_state: String = "CallState" [ro, values(&[
            "Idle",
            "Calling",
            "Ringing",
            "Connecting",
            "InCall",
            "Hold",
            "Disconnecting",
        ])] default "Idle";
        param phy_reference_list: String = "PhyReferenceList" [rw, max(32)];
        param ring_mute_status: bool = "RingMuteStatus" [rw];
        param ring_volume_status: u32 = "RingVolumeStatus" [rw, range(0, 100), unit(Unit::Percent)];
        object sip: LineSip = "SIP";
        object codec: LineCodec = "Codec";
        object stats: LineStats = "Stats";
    }
}

cwmp_object! {
    pub struct LineSip("SIP", "VoiceService.{i}.VoiceProfile.{i}.Line.{i}.SIP.") {
        param auth_user_name: String = "AuthUserName" [rw, max(128)];
        param auth_password: String = "AuthPassword" [rw, max(128)];
        param uri: String = "URI" [rw, max(389)];
    }
}

cwmp_object! {
    /// Codec currently in use on the line, plus the negotiable list.
    pub struct LineCodec("Codec", "VoiceService.{i}.VoiceProfile.{i}.Line.{i}.Codec.") {
        param transmit_codec: String = "TransmitCodec" [ro, max(64)];
        param receive_codec: String = "ReceiveCodec" [ro, max(64)];
        param transmit_bit_rate: u32 = "TransmitBitRate" [ro];
        param receive_bit_rate: u32 = "ReceiveBitRate" [ro];
        param transmit_silence_suppression: bool = "TransmitSilenceSuppression" [ro];
        param receive_silence_suppression: bool = "ReceiveSilenceSuppression" [ro];
        param transmit_packetization_period: u32 = "TransmitPacketizationPeriod"
            [ro, unit(Unit::Milliseconds)];
        table list: CodecListEntry = "List";
    }
}

cwmp_object! {
    pub struct CodecListEntry("List", "VoiceService.{i}.VoiceProfile.{i}.Line.{i}.Codec.List.{i}.")
        [keys: "EntryID"]
    {
        param entry_id: u32 = "EntryID" [ro, min(1)];
        param codec: String = "Codec" [ro, max(64)];
        param bit_rate: u32 = "BitRate" [ro];
        param packetization_period: String = "PacketizationPeriod" [rw, max(64)];
        param silence_suppression: bool = "SilenceSuppression" [rw];
        param enable: bool = "Enable" [rw];
        /// Lower values are preferred during negotiation.
        param priority: u32 = "Priority" [rw, min(1)];
    }
}

cwmp_object! {
    pub struct LineStats("Stats", "VoiceService.{i}.VoiceProfile.{i}.Line.{i}.Stats.") {
        param reset_statistics: bool = "ResetStatistics" [rw];
        param packets_sent: u32 = "PacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param packets_received: u32 = "PacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param bytes_sent: u32 = "BytesSent" [ro, notify(ActiveNotify::CanDeny)];
        param bytes_received: u32 = "BytesReceived" [ro, notify(ActiveNotify::CanDeny)];
        param packets_lost: u32 = "PacketsLost" [ro, notify(ActiveNotify::CanDeny)];
        param overruns: u32 = "Overruns" [ro, notify(ActiveNotify::CanDeny)];
        param underruns: u32 = "Underruns" [ro, notify(ActiveNotify::CanDeny)];
        param incoming_calls_received: u32 = "IncomingCallsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param incoming_calls_answered: u32 = "IncomingCallsAnswered" [ro, notify(ActiveNotify::CanDeny)];
        param incoming_calls_connected: u32 = "IncomingCallsConnected" [ro, notify(ActiveNotify::CanDeny)];
        param incoming_calls_failed: u32 = "IncomingCallsFailed" [ro, notify(ActiveNotify::CanDeny)];
        param outgoing_calls_attempted: u32 = "OutgoingCallsAttempted" [ro, notify(ActiveNotify::CanDeny)];
        param outgoing_calls_answered: u32 = "OutgoingCallsAnswered" [ro, notify(ActiveNotify::CanDeny)];
        param outgoing_calls_connected: u32 = "OutgoingCallsConnected" [ro, notify(ActiveNotify::CanDeny)];
        param outgoing_calls_failed: u32 = "OutgoingCallsFailed" [ro, notify(ActiveNotify::CanDeny)];
        param calls_dropped: u32 = "CallsDropped" [ro, notify(ActiveNotify::CanDeny)];
        param total_call_time: u32 = "TotalCallTime"
            [ro, unit(Unit::Seconds), notify(ActiveNotify::CanDeny)];
        param server_down_time: u32 = "ServerDownTime"
            [ro, unit(Unit::Seconds), notify(ActiveNotify::CanDeny)];
        param receive_packet_loss_rate: u32 = "ReceivePacketLossRate"
            [ro, range(0, 100), unit(Unit::Percent), notify(ActiveNotify::CanDeny)];
        param far_end_packet_loss_rate: u32 = "FarEndPacketLossRate"
            [ro, range(0, 100), unit(Unit::Percent), notify(ActiveNotify::CanDeny)];
        param receive_interarrival_jitter: u32 = "ReceiveInterarrivalJitter" [ro, notify(ActiveNotify::CanDeny)];
        param far_end_interarrival_jitter: u32 = "FarEndInterarrivalJitter" [ro, notify(ActiveNotify::CanDeny)];
        param round_trip_delay: u32 = "RoundTripDelay" [ro, notify(ActiveNotify::CanDeny)];
        param average_round_trip_delay: u32 = "AverageRoundTripDelay" [ro, notify(ActiveNotify::CanDeny)];
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn line_defaults() {
        let line = Line::default();
        assert_eq!(line.enable().map(String::as_str), Some("Disabled"));
        assert_eq!(line.status().map(String::as_str), Some("Disabled"));
        assert_eq!(line.call_state().map(String::as_str), Some("Idle"));
        assert!(line.codec().is_none());
    }

    #[test]
    fn codec_list_priorities_are_plain_data() {
        let mut line = Line::default();
        let list = line.codec_mut().list_mut();
        list.push(CodecListEntry::default().with_codec("G.711ALaw".into()).with_priority(1));
        list.push(CodecListEntry::default().with_codec("G.729".into()).with_priority(1));
        let priorities: Vec<_> = line
            .codec()
            .unwrap()
            .list()
            .iter()
            .filter_map(|(_, e)| e.priority().copied())
            .collect();
        assert_eq!(priorities, vec![1, 1]);
    }
}
