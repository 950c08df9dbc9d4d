use crate::common;
use crate::macros::cwmp_object;
use crate::param::{ActiveNotify, Unit};

cwmp_object! {
    /// Generic Routing Encapsulation tunnels.
    pub struct Gre("GRE", "Device.GRE.") {
        table tunnel: GreTunnel = "Tunnel" counted "TunnelNumberOfEntries";
    }
}

cwmp_object! {
    pub struct GreTunnel("Tunnel", "Device.GRE.Tunnel.{i}.") {
        param enable: bool = "Enable" [rw] default false;
        param status: String = "Status" [ro, values(common::ENABLE_STATUS)] default "Disabled";
        param alias: String = "Alias" [rw, max(64)];
        /// Comma-separated list of candidate remote endpoints.
        param remote_endpoints: String = "RemoteEndpoints" [rw, max(256)];
        param keep_alive_policy: String = "KeepAlivePolicy" [rw, values(&["ICMP", "None"])] default "None";
        param keep_alive_timeout: u32 = "KeepAliveTimeout" [rw, min(1), unit(Unit::Seconds)] default 10;
        param keep_alive_threshold: u32 = "KeepAliveThreshold" [rw] default 3;
        param delivery_header_protocol: String = "DeliveryHeaderProtocol" [rw, values(&["IPv4", "IPv6"])];
        param default_dscp_mark: u32 = "DefaultDSCPMark" [rw] default 0;
        param connected_remote_endpoint: String = "ConnectedRemoteEndpoint" [ro, max(45)];
        object stats: GreTunnelStats = "Stats";
        table interface: GreInterface = "Interface" counted "InterfaceNumberOfEntries";
    }
}

cwmp_object! {
    pub struct GreTunnelStats("Stats", "Device.GRE.Tunnel.{i}.Stats.") {
        param keep_alive_sent: u32 = "KeepAliveSent" [ro, notify(ActiveNotify::CanDeny)];
        param keep_alive_received: u32 = "KeepAliveReceived" [ro, notify(ActiveNotify::CanDeny)];
        param bytes_sent: u64 = "BytesSent" [ro, notify(ActiveNotify::CanDeny)];
        param bytes_received: u64 = "BytesReceived" [ro, notify(ActiveNotify::CanDeny)];
        param packets_sent: u64 = "PacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param packets_received: u64 = "PacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param errors_sent: u32 = "ErrorsSent" [ro, notify(ActiveNotify::CanDeny)];
        param errors_received: u32 = "ErrorsReceived" [ro, notify(ActiveNotify::CanDeny)];
    }
}

cwmp_object! {
    pub struct GreInterface("Interface", "Device.GRE.Tunnel.{i}.Interface.{i}.") [keys: "Name"] {
        param enable: bool = "Enable" [rw];
        param status: String = "Status" [ro, values(common::INTERFACE_STATUS)] default "Down";
        param alias: String = "Alias" [rw, max(64)];
        param name: String = "Name" [ro, max(64)];
        param last_change: u32 = "LastChange" [ro, unit(Unit::Seconds)];
        param lower_layers: String = "LowerLayers" [rw, max(1024)];
        param protocol_id_override: u32 = "ProtocolIdOverride" [rw] default 0;
        param use_checksum: bool = "UseChecksum" [rw] default false;
        param key_identifier_generation_policy: String = "KeyIdentifierGenerationPolicy"
            [rw, values(&["Disabled", "Provisioned", "CPE_Generated"])] default "Disabled";
        param key_identifier: u32 = "KeyIdentifier" [rw];
        param use_sequence_number: bool = "UseSequenceNumber" [rw] default false;
        object stats: GreInterfaceStats = "Stats";
    }
}

cwmp_object! {
    pub struct GreInterfaceStats("Stats", "Device.GRE.Tunnel.{i}.Interface.{i}.Stats.") {
        param bytes_sent: u64 = "BytesSent" [ro, notify(ActiveNotify::CanDeny)];
        param bytes_received: u64 = "BytesReceived" [ro, notify(ActiveNotify::CanDeny)];
        param packets_sent: u64 = "PacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param packets_received: u64 = "PacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param errors_sent: u32 = "ErrorsSent" [ro, notify(ActiveNotify::CanDeny)];
        param errors_received: u32 = "ErrorsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param discard_checksum_received: u32 = "DiscardChecksumReceived" [ro, notify(ActiveNotify::CanDeny)];
        param discard_sequence_number_received: u32 = "DiscardSequenceNumberReceived"
            [ro, notify(ActiveNotify::CanDeny)];
    }
}
