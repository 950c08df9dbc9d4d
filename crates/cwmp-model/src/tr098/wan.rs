use crate::common;
use crate::macros::cwmp_object;
use crate::param::{ActiveNotify, Unit};

const CONNECTION_STATUS: &[&str] = &[
    "Unconfigured",
    "Connecting",
    "Authenticating",
    "Connected",
    "PendingDisconnect",
    "Disconnecting",
    "Disconnected",
];

const CONNECTION_ERROR: &[&str] = &[
    "ERROR_NONE",
    "ERROR_ISP_TIME_OUT",
    "ERROR_COMMAND_ABORTED",
    "ERROR_NOT_ENABLED_FOR_INTERNET",
    "ERROR_BAD_PHONE_NUMBER",
    "ERROR_USER_DISCONNECT",
    "ERROR_ISP_DISCONNECT",
    "ERROR_IDLE_DISCONNECT",
    "ERROR_FORCED_DISCONNECT",
    "ERROR_SERVER_OUT_OF_RESOURCES",
    "ERROR_RESTRICTED_LOGON_HOURS",
    "ERROR_ACCOUNT_DISABLED",
    "ERROR_ACCOUNT_EXPIRED",
    "ERROR_PASSWORD_EXPIRED",
    "ERROR_AUTHENTICATION_FAILURE",
    "ERROR_NO_DIALTONE",
    "ERROR_NO_CARRIER",
    "ERROR_NO_ANSWER",
    "ERROR_LINE_BUSY",
    "ERROR_UNSUPPORTED_BITSPERSECOND",
    "ERROR_TOO_MANY_LINE_ERRORS",
    "ERROR_IP_CONFIGURATION",
    "ERROR_UNKNOWN",
];

const CONNECTION_TRIGGER: &[&str] = &["OnDemand", "AlwaysOn", "Manual"];

cwmp_object! {
    /// One WAN side of the gateway.
    pub struct WanDevice("WANDevice", "InternetGatewayDevice.WANDevice.{i}.") {
        object wan_common_interface_config: WanCommonInterfaceConfig = "WANCommonInterfaceConfig";
        table wan_connection_device: WanConnectionDevice = "WANConnectionDevice"
            counted "WANConnectionNumberOfEntries";
    }
}

cwmp_object! {
    pub struct WanCommonInterfaceConfig(
        "WANCommonInterfaceConfig",
        "InternetGatewayDevice.WANDevice.{i}.WANCommonInterfaceConfig."
    ) {
        param enabled_for_internet: bool = "EnabledForInternet" [rw];
        param wan_access_type: String = "WANAccessType" [ro, values(&["DSL", "Ethernet", "POTS"])];
        param layer1_upstream_max_bit_rate: u32 = "Layer1UpstreamMaxBitRate" [ro];
        param layer1_downstream_max_bit_rate: u32 = "Layer1DownstreamMaxBitRate" [ro];
        param physical_link_status: String = "PhysicalLinkStatus"
            [ro, values(&["Up", "Down", "Initializing", "Unavailable"])];
        param wan_access_provider: String = "WANAccessProvider" [ro, max(256)];
        param total_bytes_sent: u32 = "TotalBytesSent" [ro, notify(ActiveNotify::CanDeny)];
        param total_bytes_received: u32 = "TotalBytesReceived" [ro, notify(ActiveNotify::CanDeny)];
        param total_packets_sent: u32 = "TotalPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param total_packets_received: u32 = "TotalPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param maximum_active_connections: u32 = "MaximumActiveConnections" [ro, min(1)];
        param number_of_active_connections: u32 = "NumberOfActiveConnections" [ro];
    }
}

cwmp_object! {
    pub struct WanConnectionDevice(
        "WANConnectionDevice",
        "InternetGatewayDevice.WANDevice.{i}.WANConnectionDevice.{i}."
    ) {
        table wan_ip_connection: WanIpConnection = "WANIPConnection"
            counted "WANIPConnectionNumberOfEntries";
        table wan_ppp_connection: WanPppConnection = "WANPPPConnection"
            counted "WANPPPConnectionNumberOfEntries";
    }
}

cwmp_object! {
    /// Routed or bridged IP connection over the WAN link.
    pub struct WanIpConnection(
        "WANIPConnection",
        "InternetGatewayDevice.WANDevice.{i}.WANConnectionDevice.{i}.WANIPConnection.{i}."
    ) {
        param enable: bool = "Enable" [rw];
        param connection_status: String = "ConnectionStatus"
            [ro, values(CONNECTION_STATUS)] default "Unconfigured";
        param possible_connection_types: String = "PossibleConnectionTypes" [ro];
        param connection_type: String = "ConnectionType"
            [rw, values(&["Unconfigured", "IP_Routed", "IP_Bridged"])];
        param name: String = "Name" [rw, max(256)];
        param uptime: u32 = "Uptime" [ro, unit(Unit::Seconds), notify(ActiveNotify::CanDeny)];
        param last_connection_error: String = "LastConnectionError" [ro, values(CONNECTION_ERROR)];
        param auto_disconnect_time: u32 = "AutoDisconnectTime" [rw, unit(Unit::Seconds)];
        param idle_disconnect_time: u32 = "IdleDisconnectTime" [rw, unit(Unit::Seconds)];
        param warn_disconnect_delay: u32 = "WarnDisconnectDelay" [rw, unit(Unit::Seconds)];
        param nat_enabled: bool = "NATEnabled" [rw];
        param addressing_type: String = "AddressingType" [rw, values(&["DHCP", "Static"])];
        param external_ip_address: String = "ExternalIPAddress" [rw, pattern(common::IPV4_ADDRESS)];
        param subnet_mask: String = "SubnetMask" [rw, pattern(common::IPV4_ADDRESS)];
        param default_gateway: String = "DefaultGateway" [rw, pattern(common::IPV4_ADDRESS)];
        param dns_enabled: bool = "DNSEnabled" [rw];
        param dns_override_allowed: bool = "DNSOverrideAllowed" [rw];
        param dns_servers: String = "DNSServers" [rw, max(64)];
        param max_mtu_size: u32 = "MaxMTUSize" [rw, range(1, 1540)];
        param mac_address: String = "MACAddress" [rw, max(17), pattern(common::MAC_ADDRESS)];
        param connection_trigger: String = "ConnectionTrigger" [rw, values(CONNECTION_TRIGGER)];
        param route_protocol_rx: String = "RouteProtocolRx"
            [rw, values(&["Off", "RIPv1", "RIPv2", "OSPF"])];
    }
}

cwmp_object! {
    /// PPP session over the WAN link.
    pub struct WanPppConnection(
        "WANPPPConnection",
        "InternetGatewayDevice.WANDevice.{i}.WANConnectionDevice.{i}.WANPPPConnection.{i}."
    ) {
        param enable: bool = "Enable" [rw];
        param connection_status: String = "ConnectionStatus"
            [ro, values(CONNECTION_STATUS)] default "Unconfigured";
        param possible_connection_types: String = "PossibleConnectionTypes" [ro];
        param connection_type: String = "ConnectionType" [rw, values(&[
            "Unconfigured",
            "IP_Routed",
            "DHCP_Spoofed",
            "PPPoE_Bridged",
            "PPTP_Relay",
            "L2TP_Relay",
            "PPPoE_Relay",
        ])];
        param name: String = "Name" [rw, max(256)];
        param uptime: u32 = "Uptime" [ro, unit(Unit::Seconds), notify(ActiveNotify::CanDeny)];
        param last_connection_error: String = "LastConnectionError" [ro, values(CONNECTION_ERROR)];
        param auto_disconnect_time: u32 = "AutoDisconnectTime" [rw, unit(Unit::Seconds)];
        param idle_disconnect_time: u32 = "IdleDisconnectTime" [rw, unit(Unit::Seconds)];
        param nat_enabled: bool = "NATEnabled" [rw];
        param username: String = "Username" [rw, max(64)];
        param password: String = "Password" [rw, max(64)];
        param ppp_encryption_protocol: String = "PPPEncryptionProtocol" [ro, values(&["None", "MPPE"])];
        param ppp_authentication_protocol: String = "PPPAuthenticationProtocol"
            [ro, values(&["PAP", "CHAP", "MS-CHAP"])];
        param external_ip_address: String = "ExternalIPAddress" [ro, pattern(common::IPV4_ADDRESS)];
        param remote_ip_address: String = "RemoteIPAddress" [ro, pattern(common::IPV4_ADDRESS)];
        param max_mru_size: u32 = "MaxMRUSize" [rw, range(1, 1540)];
        param current_mru_size: u32 = "CurrentMRUSize" [ro, range(1, 1540)];
        param dns_enabled: bool = "DNSEnabled" [rw];
        param dns_servers: String = "DNSServers" [rw, max(64)];
        param mac_address: String = "MACAddress" [rw, max(17), pattern(common::MAC_ADDRESS)];
        param transport_type: String = "TransportType" [ro, values(&["PPPoA", "PPPoE", "L2TP", "PPTP"])];
        param pppoe_ac_name: String = "PPPoEACName" [rw, max(256)];
        param pppoe_service_name: String = "PPPoEServiceName" [rw, max(256)];
        param connection_trigger: String = "ConnectionTrigger" [rw, values(CONNECTION_TRIGGER)];
        param ppp_lcp_echo: u32 = "PPPLCPEcho" [ro, unit(Unit::Seconds)];
        param ppp_lcp_echo_retry: u32 = "PPPLCPEchoRetry" [ro];
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn connections_start_unconfigured() {
        assert_eq!(
            WanIpConnection::default().connection_status().map(String::as_str),
            Some("Unconfigured")
        );
        assert_eq!(
            WanPppConnection::default().connection_status().map(String::as_str),
            Some("Unconfigured")
        );
    }

    #[test]
    fn connection_device_counts_both_tables() {
        let cd = WanConnectionDevice::default()
            .with_wan_ip_connection(WanIpConnection::default())
            .with_wan_ppp_connection(WanPppConnection::default())
            .with_wan_ppp_connection(WanPppConnection::default());
        let names: Vec<_> = cd.params().iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            vec!["WANIPConnectionNumberOfEntries", "WANPPPConnectionNumberOfEntries"]
        );
        assert_eq!(cd.wan_ppp_connection().count(), 2);
    }
}
