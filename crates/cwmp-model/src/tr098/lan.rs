use crate::common;
use crate::macros::cwmp_object;
use crate::param::{ActiveNotify, Unit};

cwmp_object! {
    /// One LAN side of the gateway.
    pub struct LanDevice("LANDevice", "InternetGatewayDevice.LANDevice.{i}.") {
        object lan_host_config_management: LanHostConfigManagement = "LANHostConfigManagement";
        object hosts: Hosts = "Hosts";
        table lan_ethernet_interface_config: LanEthernetInterfaceConfig = "LANEthernetInterfaceConfig"
            counted "LANEthernetInterfaceNumberOfEntries";
        table wlan_configuration: WlanConfiguration = "WLANConfiguration"
            counted "LANWLANConfigurationNumberOfEntries";
    }
}

cwmp_object! {
    /// DHCP server and addressing of the LAN.
    pub struct LanHostConfigManagement(
        "LANHostConfigManagement",
        "InternetGatewayDevice.LANDevice.{i}.LANHostConfigManagement."
    ) {
        param dhcp_server_configurable: bool = "DHCPServerConfigurable" [rw];
        param dhcp_server_enable: bool = "DHCPServerEnable" [rw];
        param dhcp_relay: bool = "DHCPRelay" [ro];
        param min_address: String = "MinAddress" [rw, pattern(common::IPV4_ADDRESS)];
        param max_address: String = "MaxAddress" [rw, pattern(common::IPV4_ADDRESS)];
        param reserved_addresses: String = "ReservedAddresses" [rw, max(256)];
        param subnet_mask: String = "SubnetMask" [rw, pattern(common::IPV4_ADDRESS)];
        param dns_servers: String = "DNSServers" [rw, max(64)];
        param domain_name: String = "DomainName" [rw, max(64)];
        param ip_routers: String = "IPRouters" [rw, max(64)];
        /// Lease time handed out by the DHCP server; -1 means infinite.
        param dhcp_lease_time: i32 = "DHCPLeaseTime" [rw, min(-1), unit(Unit::Seconds)] default 86400;
    }
}

// ── Ethernet ──

cwmp_object! {
    pub struct LanEthernetInterfaceConfig(
        "LANEthernetInterfaceConfig",
        "InternetGatewayDevice.LANDevice.{i}.LANEthernetInterfaceConfig.{i}."
    ) [keys: "MACAddress"] {
        param enable: bool = "Enable" [rw];
        param status: String = "Status" [ro, values(&["Up", "NoLink", "Error", "Disabled"])];
        param mac_address: String = "MACAddress" [ro, max(17), pattern(common::MAC_ADDRESS)];
        param mac_address_control_enabled: bool = "MACAddressControlEnabled" [rw];
        param max_bit_rate: String = "MaxBitRate" [rw, values(&["10", "100", "1000", "10000", "Auto"])];
        param duplex_mode: String = "DuplexMode" [rw, values(&["Half", "Full", "Auto"])];
        object stats: LanEthernetInterfaceStats = "Stats";
    }
}

cwmp_object! {
    pub struct LanEthernetInterfaceStats(
        "Stats",
        "InternetGatewayDevice.LANDevice.{i}.LANEthernetInterfaceConfig.{i}.Stats."
    ) {
        param bytes_sent: u32 = "BytesSent" [ro, notify(ActiveNotify::CanDeny)];
        param bytes_received: u32 = "BytesReceived" [ro, notify(ActiveNotify::CanDeny)];
        param packets_sent: u32 = "PacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param packets_received: u32 = "PacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param errors_sent: u32 = "ErrorsSent" [ro, notify(ActiveNotify::CanDeny)];
        param errors_received: u32 = "ErrorsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param discard_packets_sent: u32 = "DiscardPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param discard_packets_received: u32 = "DiscardPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
    }
}

// ── WLAN ──

cwmp_object! {
    /// An 802.11 LAN interface.
    pub struct WlanConfiguration(
        "WLANConfiguration",
        "InternetGatewayDevice.LANDevice.{i}.WLANConfiguration.{i}."
    ) {
        param enable: bool = "Enable" [rw];
        param status: String = "Status" [ro, values(&["Up", "Error", "Disabled"])] default "Disabled";
        param bssid: String = "BSSID" [ro, max(17), pattern(common::MAC_ADDRESS)];
        param max_bit_rate: String = "MaxBitRate" [rw, max(4)];
        param channel: u32 = "Channel" [rw, range(0, 255)];
        param auto_channel_enable: bool = "AutoChannelEnable" [rw];
        param ssid: String = "SSID" [rw, max(32)];
        param beacon_type: String = "BeaconType" [rw, values(&[
            "None",
            "Basic",
            "WPA",
            "11i",
            "BasicandWPA",
            "Basicand11i",
            "WPAand11i",
            "BasicandWPAand11i",
        ])];
        param mac_address_control_enabled: bool = "MACAddressControlEnabled" [rw];
        param standard: String = "Standard" [ro, values(&["a", "b", "g", "g-only", "n"])];
        param wep_key_index: u32 = "WEPKeyIndex" [rw, range(1, 4)];
        param key_passphrase: String = "KeyPassphrase" [rw, max(63)];
        param wep_encryption_level: String = "WEPEncryptionLevel" [ro, max(64)];
        param basic_encryption_modes: String = "BasicEncryptionModes"
            [rw, values(&["None", "WEPEncryption"])];
        param basic_authentication_mode: String = "BasicAuthenticationMode"
            [rw, values(&["None", "EAPAuthentication", "SharedAuthentication"])];
        param wpa_encryption_modes: String = "WPAEncryptionModes" [rw, values(&[
            "WEPEncryption",
            "TKIPEncryption",
            "WEPandTKIPEncryption",
            "AESEncryption",
            "WEPandAESEncryption",
            "TKIPandAESEncryption",
            "WEPandTKIPandAESEncryption",
        ])];
        param ssid_advertisement_enabled: bool = "SSIDAdvertisementEnabled" [rw];
        param radio_enabled: bool = "RadioEnabled" [rw];
        param transmit_power: u32 = "TransmitPower" [rw, range(0, 100), unit(Unit::Percent)];
        param regulatory_domain: String = "RegulatoryDomain" [rw, size(3, 3)];
        param total_bytes_sent: u32 = "TotalBytesSent" [ro, notify(ActiveNotify::CanDeny)];
        param total_bytes_received: u32 = "TotalBytesReceived" [ro, notify(ActiveNotify::CanDeny)];
        param total_packets_sent: u32 = "TotalPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param total_packets_received: u32 = "TotalPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        object wps: Wps = "WPS";
        object stats: WlanStats = "Stats";
        table associated_device: WlanAssociatedDevice = "AssociatedDevice" counted "TotalAssociations";
    }
}

cwmp_object! {
    /// Wi-Fi Protected Setup of a WLAN.
    pub struct Wps("WPS", "InternetGatewayDevice.LANDevice.{i}.WLANConfiguration.{i}.WPS.") {
        param enable: bool = "Enable" [rw] default false;
        param device_name: String = "DeviceName" [ro, max(32)];
        param device_password: u32 = "DevicePassword" [rw];
        param uuid: String = "UUID" [ro, size(0, 36), pattern(common::UUID)];
        param version: u32 = "Version" [ro];
        param config_methods_supported: String = "ConfigMethodsSupported" [ro];
        param config_methods_enabled: String = "ConfigMethodsEnabled" [rw];
        param setup_locked_state: String = "SetupLockedState" [ro, values(&[
            "Unlocked",
            "LockedByLocalManagement",
            "LockedByRemoteManagement",
            "PINRetryLimitReached",
        ])];
        param setup_lock: bool = "SetupLock" [rw];
        param configuration_state: String = "ConfigurationState"
            [ro, values(&["Not configured", "Configured"])];
        param last_configuration_error: String = "LastConfigurationError" [ro, values(&[
            "NoError",
            "DecryptionCRCFailure",
            "SignalTooWeak",
            "CouldntConnectToRegistrar",
            "RogueActivitySuspected",
            "DeviceBusy",
            "SetupLocked",
            "MessageTimeout",
            "RegistrationSessionTimeout",
            "DevicePasswordAuthFailure",
        ])];
        param registrar_established: bool = "RegistrarEstablished" [ro];
        table registrar: WpsRegistrar = "Registrar" counted "RegistrarNumberOfEntries";
    }
}

cwmp_object! {
    pub struct WpsRegistrar(
        "Registrar",
        "InternetGatewayDevice.LANDevice.{i}.WLANConfiguration.{i}.WPS.Registrar.{i}."
    ) [keys: "UUID"] {
        param enable: bool = "Enable" [rw];
        param uuid: String = "UUID" [ro, size(0, 36), pattern(common::UUID)];
        param device_name: String = "DeviceName" [ro, max(32)];
    }
}

cwmp_object! {
    pub struct WlanAssociatedDevice(
        "AssociatedDevice",
        "InternetGatewayDevice.LANDevice.{i}.WLANConfiguration.{i}.AssociatedDevice.{i}."
    ) [keys: "AssociatedDeviceMACAddress"] {
        param associated_device_mac_address: String = "AssociatedDeviceMACAddress"
            [ro, max(17), pattern(common::MAC_ADDRESS)];
        param associated_device_ip_address: String = "AssociatedDeviceIPAddress" [ro, max(64)];
        param associated_device_authentication_state: bool = "AssociatedDeviceAuthenticationState" [ro];
        param last_requested_unicast_cipher: String = "LastRequestedUnicastCipher" [ro, max(256)];
        param last_pmk_id: String = "LastPMKId" [ro, max(256)];
        param last_data_transmit_rate: String = "LastDataTransmitRate" [ro, max(4)];
    }
}

cwmp_object! {
    pub struct WlanStats("Stats", "InternetGatewayDevice.LANDevice.{i}.WLANConfiguration.{i}.Stats.") {
        param errors_sent: u32 = "ErrorsSent" [ro, notify(ActiveNotify::CanDeny)];
        param errors_received: u32 = "ErrorsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param unicast_packets_sent: u32 = "UnicastPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param unicast_packets_received: u32 = "UnicastPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param discard_packets_sent: u32 = "DiscardPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param discard_packets_received: u32 = "DiscardPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param multicast_packets_sent: u32 = "MulticastPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param multicast_packets_received: u32 = "MulticastPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param broadcast_packets_sent: u32 = "BroadcastPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param broadcast_packets_received: u32 = "BroadcastPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param unknown_proto_packets_received: u32 = "UnknownProtoPacketsReceived"
            [ro, notify(ActiveNotify::CanDeny)];
    }
}

// ── Hosts ──

cwmp_object! {
    pub struct Hosts("Hosts", "InternetGatewayDevice.LANDevice.{i}.Hosts.") {
        table host: LanHost = "Host" counted "HostNumberOfEntries";
    }
}

cwmp_object! {
    pub struct LanHost("Host", "InternetGatewayDevice.LANDevice.{i}.Hosts.Host.{i}.") [keys: "MACAddress"] {
        param ip_address: String = "IPAddress" [ro, max(45)];
        param address_source: String = "AddressSource" [ro, values(&["DHCP", "Static", "AutoIP"])];
        param lease_time_remaining: i32 = "LeaseTimeRemaining" [ro, min(-1), unit(Unit::Seconds)];
        param mac_address: String = "MACAddress" [ro, max(17), pattern(common::MAC_ADDRESS)];
        param layer2_interface: String = "Layer2Interface" [ro, max(256)];
        param vendor_class_id: String = "VendorClassID" [ro, max(255)];
        param client_id: String = "ClientID" [ro, max(255)];
        param user_class_id: String = "UserClassID" [ro, max(255)];
        param host_name: String = "HostName" [ro, max(64)];
        param interface_type: String = "InterfaceType" [ro, values(&[
            "Ethernet",
            "USB",
            "802.11",
            "HomePNA",
            "HomePlug",
            "MoCA",
            "G.hn",
            "Other",
        ])];
        param active: bool = "Active" [ro];
    }
}
