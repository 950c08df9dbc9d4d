use chrono::{DateTime, Utc};

use crate::common;
use crate::macros::cwmp_object;
use crate::param::{ActiveNotify, Unit};
use crate::value::HexBinary;

cwmp_object! {
    pub struct WiFi("WiFi", "Device.WiFi.") {
        table radio: Radio = "Radio" counted "RadioNumberOfEntries";
        table ssid: Ssid = "SSID" counted "SSIDNumberOfEntries";
        table access_point: AccessPoint = "AccessPoint" counted "AccessPointNumberOfEntries";
    }
}

// ── Radio ──

cwmp_object! {
    /// A physical 802.11 radio.
    pub struct Radio("Radio", "Device.WiFi.Radio.{i}.") [keys: "Name"] {
        param enable: bool = "Enable" [rw];
        param status: String = "Status" [ro, values(common::INTERFACE_STATUS)] default "Down";
        param alias: String = "Alias" [rw, max(64)];
        param name: String = "Name" [ro, max(64)];
        param last_change: u32 = "LastChange" [ro, unit(Unit::Seconds)];
        param lower_layers: String = "LowerLayers" [rw, max(1024)];
        param upstream: bool = "Upstream" [ro];
        param max_bit_rate: u32 = "MaxBitRate" [ro, unit(Unit::Mbps)];
        param supported_frequency_bands: String = "SupportedFrequencyBands" [ro];
        param operating_frequency_band: String = "OperatingFrequencyBand"
            [rw, values(&["2.4GHz", "5GHz", "6GHz"])];
        param supported_standards: String = "SupportedStandards" [ro];
        param operating_standards: String = "OperatingStandards" [rw];
        param possible_channels: String = "PossibleChannels" [ro, max(1024)];
        param channel: u32 = "Channel" [rw, range(1, 255)];
        param auto_channel_supported: bool = "AutoChannelSupported" [ro];
        param auto_channel_enable: bool = "AutoChannelEnable" [rw];
        param operating_channel_bandwidth: String = "OperatingChannelBandwidth"
            [rw, values(&["20MHz", "40MHz", "80MHz", "160MHz", "320MHz", "Auto"])];
        param transmit_power_supported: String = "TransmitPowerSupported" [ro, max(64)];
        /// Percentage of full power; -1 means auto.
        param transmit_power: i32 = "TransmitPower" [rw, range(-1, 100), unit(Unit::Percent)];
        /// ISO 3166 country code plus environment letter.
        param regulatory_domain: String = "RegulatoryDomain"
            [rw, size(3, 3), pattern("[A-Z][A-Z][ OI]")];
        object stats: RadioStats = "Stats";
    }
}

cwmp_object! {
    pub struct RadioStats("Stats", "Device.WiFi.Radio.{i}.Stats.") {
        param bytes_sent: u64 = "BytesSent" [ro, notify(ActiveNotify::CanDeny)];
        param bytes_received: u64 = "BytesReceived" [ro, notify(ActiveNotify::CanDeny)];
        param packets_sent: u64 = "PacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param packets_received: u64 = "PacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param errors_sent: u32 = "ErrorsSent" [ro, notify(ActiveNotify::CanDeny)];
        param errors_received: u32 = "ErrorsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param discard_packets_sent: u32 = "DiscardPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param discard_packets_received: u32 = "DiscardPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        /// Average noise floor.
        param noise: i32 = "Noise" [ro, unit(Unit::Dbm), notify(ActiveNotify::CanDeny)];
    }
}

// ── SSID ──

cwmp_object! {
    pub struct Ssid("SSID", "Device.WiFi.SSID.{i}.") [keys: "Name", "BSSID"] {
        param enable: bool = "Enable" [rw];
        param status: String = "Status" [ro, values(common::INTERFACE_STATUS)] default "Down";
        param alias: String = "Alias" [rw, max(64)];
        param name: String = "Name" [ro, max(64)];
        param last_change: u32 = "LastChange" [ro, unit(Unit::Seconds)];
        param lower_layers: String = "LowerLayers" [rw, max(1024)];
        param bssid: String = "BSSID" [ro, max(17), pattern(common::MAC_ADDRESS)];
        param mac_address: String = "MACAddress" [ro, max(17), pattern(common::MAC_ADDRESS)];
        param ssid: String = "SSID" [rw, max(32)];
        param upstream: bool = "Upstream" [ro];
        object stats: SsidStats = "Stats";
    }
}

interface_stats!(SsidStats, "Device.WiFi.SSID.{i}.Stats.");

// ── AccessPoint ──

cwmp_object! {
    /// Access point bound to one SSID.
    pub struct AccessPoint("AccessPoint", "Device.WiFi.AccessPoint.{i}.") [keys: "SSIDReference"] {
        param enable: bool = "Enable" [rw];
        param status: String = "Status" [ro, values(common::ENABLE_STATUS)] default "Disabled";
        param alias: String = "Alias" [rw, max(64)];
        /// Path of the `Device.WiFi.SSID.{i}.` this access point serves.
        param ssid_reference: String = "SSIDReference" [rw, max(256)];
        param ssid_advertisement_enabled: bool = "SSIDAdvertisementEnabled" [rw];
        param retry_limit: u32 = "RetryLimit" [rw, range(0, 7)];
        param wmm_capability: bool = "WMMCapability" [ro];
        param uapsd_capability: bool = "UAPSDCapability" [ro];
        param wmm_enable: bool = "WMMEnable" [rw];
        param uapsd_enable: bool = "UAPSDEnable" [rw];
        param isolation_enable: bool = "IsolationEnable" [rw];
        param mac_address_control_enabled: bool = "MACAddressControlEnabled" [rw];
        param allowed_mac_address: String = "AllowedMACAddress" [rw];
        param max_associated_devices: u32 = "MaxAssociatedDevices" [rw];
        object security: AccessPointSecurity = "Security";
        object wps: AccessPointWps = "WPS";
        table associated_device: AssociatedDevice = "AssociatedDevice"
            counted "AssociatedDeviceNumberOfEntries";
    }
}

cwmp_object! {
    pub struct AccessPointSecurity("Security", "Device.WiFi.AccessPoint.{i}.Security.") {
        param reset: bool = "Reset" [rw];
        param modes_supported: String = "ModesSupported" [ro];
        param mode_enabled: String = "ModeEnabled" [rw, values(&[
            "None",
            "WEP-64",
            "WEP-128",
            "WPA-Personal",
            "WPA2-Personal",
            "WPA3-Personal",
            "WPA-WPA2-Personal",
            "WPA2-PSK-WPA3-SAE",
            "WPA-Enterprise",
            "WPA2-Enterprise",
            "WPA3-Enterprise",
            "WPA-WPA2-Enterprise",
        ])];
        /// 5 bytes for WEP-64, 13 for WEP-128.
        param wep_key: HexBinary = "WEPKey" [rw, size(5, 13)];
        param pre_shared_key: HexBinary = "PreSharedKey" [rw, max(32)];
        param key_passphrase: String = "KeyPassphrase" [rw, size(8, 63)];
        param rekeying_interval: u32 = "RekeyingInterval" [rw, unit(Unit::Seconds)] default 3600;
        param radius_server_ip_addr: String = "RadiusServerIPAddr" [rw, max(45)];
        param radius_server_port: u32 = "RadiusServerPort" [rw, range(0, 65535)] default 1812;
        param radius_secret: String = "RadiusSecret" [rw, max(128)];
        param mfp_config: String = "MFPConfig" [rw, values(&["Disabled", "Optional", "Required"])];
    }
}

cwmp_object! {
    pub struct AccessPointWps("WPS", "Device.WiFi.AccessPoint.{i}.WPS.") {
        param enable: bool = "Enable" [rw];
        param config_methods_supported: String = "ConfigMethodsSupported" [ro];
        param config_methods_enabled: String = "ConfigMethodsEnabled" [rw];
        param status: String = "Status"
            [ro, values(&["Disabled", "Error", "Unconfigured", "Configured", "SetupLocked"])];
        param version: String = "Version" [ro];
        param pin: String = "PIN" [rw, size(4, 8), pattern("[0-9]{4}|[0-9]{8}")];
    }
}

cwmp_object! {
    /// A station associated with an access point.
    pub struct AssociatedDevice("AssociatedDevice", "Device.WiFi.AccessPoint.{i}.AssociatedDevice.{i}.")
        [keys: "MACAddress"]
    {
        param mac_address: String = "MACAddress" [ro, max(17), pattern(common::MAC_ADDRESS)];
        param operating_standard: String = "OperatingStandard" [ro];
        param authentication_state: bool = "AuthenticationState" [ro];
        param last_data_downlink_rate: u32 = "LastDataDownlinkRate"
            [ro, range(1000, 9_600_000), unit(Unit::Kbps)];
        param last_data_uplink_rate: u32 = "LastDataUplinkRate"
            [ro, range(1000, 9_600_000), unit(Unit::Kbps)];
        param signal_strength: i32 = "SignalStrength" [ro, range(-200, 0), unit(Unit::Dbm)];
        param noise: i32 = "Noise" [ro, range(-200, 0), unit(Unit::Dbm)];
        param retransmissions: u32 = "Retransmissions" [ro, range(0, 100), unit(Unit::Percent)];
        param active: bool = "Active" [ro];
        param association_time: DateTime<Utc> = "AssociationTime" [ro];
        object stats: AssociatedDeviceStats = "Stats";
    }
}

cwmp_object! {
    pub struct AssociatedDeviceStats("Stats", "Device.WiFi.AccessPoint.{i}.AssociatedDevice.{i}.Stats.") {
        param bytes_sent: u64 = "BytesSent" [ro, notify(ActiveNotify::CanDeny)];
        param bytes_received: u64 = "BytesReceived" [ro, notify(ActiveNotify::CanDeny)];
        param packets_sent: u64 = "PacketsSent" [ro, notify(ActiveNotify::CanDeny)];
        param packets_received: u64 = "PacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
        param errors_sent: u32 = "ErrorsSent" [ro, notify(ActiveNotify::CanDeny)];
        param retrans_count: u32 = "RetransCount" [ro, notify(ActiveNotify::CanDeny)];
        param failed_retrans_count: u32 = "FailedRetransCount" [ro, notify(ActiveNotify::CanDeny)];
        param retry_count: u32 = "RetryCount" [ro, notify(ActiveNotify::CanDeny)];
        param multiple_retry_count: u32 = "MultipleRetryCount" [ro, notify(ActiveNotify::CanDeny)];
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::value::Value;

    #[test]
    fn security_defaults_and_constraints() {
        let sec = AccessPointSecurity::default();
        assert_eq!(sec.rekeying_interval(), Some(&3600));
        assert_eq!(sec.radius_server_port(), Some(&1812));

        let wep = sec.param_info("WEPKey").unwrap();
        assert_eq!((wep.min_size, wep.max_size), (Some(5), Some(13)));
        assert!(sec.param_info("ModeEnabled").unwrap().values.contains(&"WPA3-Personal"));
    }

    #[test]
    fn binary_parameter_roundtrips_through_node() {
        let mut sec = AccessPointSecurity::default();
        sec.set_param("PreSharedKey", Value::HexBinary(vec![0xde, 0xad]))
            .unwrap();
        assert_eq!(sec.pre_shared_key().unwrap().as_bytes(), &[0xde, 0xad]);
        assert!(sec.set_param("PreSharedKey", Value::String("dead".into())).is_err());
    }

    #[test]
    fn associated_devices_are_counted() {
        let station = |mac: &str| AssociatedDevice::default().with_mac_address(mac.into());
        let mut ap = AccessPoint::default()
            .with_associated_device(station("aa:bb:cc:dd:ee:01"))
            .with_associated_device(station("aa:bb:cc:dd:ee:02"));
        assert_eq!(
            ap.param("AssociatedDeviceNumberOfEntries").unwrap(),
            Some(Value::UnsignedInt(2))
        );
        assert!(matches!(
            ap.set_param("AssociatedDeviceNumberOfEntries", Value::UnsignedInt(9)),
            Err(crate::error::ModelError::NotWritable { .. })
        ));
    }
}
