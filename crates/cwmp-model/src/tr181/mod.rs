// ── TR-181 Issue 2: Device:2 data model ──
//
// `Device.` root plus the Ethernet, WiFi, IP, Hosts and GRE subtrees.
// TR-104 voice and TR-196 femto services mount under `Device.Services.`.

use chrono::{DateTime, Utc};

use crate::common;
use crate::macros::cwmp_object;
use crate::param::{ActiveNotify, Unit};
use crate::tr104::VoiceService;
use crate::tr196::FapService;

/// Declares the standard interface `Stats.` object shared by Ethernet,
/// WiFi SSID and IP interfaces, each under its own schema path.
macro_rules! interface_stats {
    ($(#[$meta:meta])* $name:ident, $schema:literal) => {
        cwmp_object! {
            $(#[$meta])*
            pub struct $name("Stats", $schema) {
                param bytes_sent: u64 = "BytesSent" [ro, notify(ActiveNotify::CanDeny)];
                param bytes_received: u64 = "BytesReceived" [ro, notify(ActiveNotify::CanDeny)];
                param packets_sent: u64 = "PacketsSent" [ro, notify(ActiveNotify::CanDeny)];
                param packets_received: u64 = "PacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
                param errors_sent: u32 = "ErrorsSent" [ro, notify(ActiveNotify::CanDeny)];
                param errors_received: u32 = "ErrorsReceived" [ro, notify(ActiveNotify::CanDeny)];
                param unicast_packets_sent: u64 = "UnicastPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
                param unicast_packets_received: u64 = "UnicastPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
                param discard_packets_sent: u32 = "DiscardPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
                param discard_packets_received: u32 = "DiscardPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
                param multicast_packets_sent: u64 = "MulticastPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
                param multicast_packets_received: u64 = "MulticastPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
                param broadcast_packets_sent: u64 = "BroadcastPacketsSent" [ro, notify(ActiveNotify::CanDeny)];
                param broadcast_packets_received: u64 = "BroadcastPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
                param unknown_proto_packets_received: u32 = "UnknownProtoPacketsReceived" [ro, notify(ActiveNotify::CanDeny)];
            }
        }
    };
}

mod ethernet;
mod gre;
mod hosts;
mod ip;
mod wifi;

pub use ethernet::{Ethernet, EthernetInterface, EthernetInterfaceStats};
pub use gre::{Gre, GreInterface, GreInterfaceStats, GreTunnel, GreTunnelStats};
pub use hosts::{Host, Hosts};
pub use ip::{Ip, IpInterface, IpInterfaceStats, Ipv4Address};
pub use wifi::{
    AccessPoint, AccessPointSecurity, AccessPointWps, AssociatedDevice, AssociatedDeviceStats,
    Radio, RadioStats, Ssid, SsidStats, WiFi,
};

cwmp_object! {
    /// Root object of the Device:2 data model.
    pub struct Device("Device", "Device.") {
        /// Data model version implemented by the device, e.g. `2.15`.
        param root_data_model_version: String = "RootDataModelVersion"
            [ro, max(32), pattern("|[0-9]+\\.[0-9]+")];
        object device_info: DeviceInfo = "DeviceInfo";
        object management_server: ManagementServer = "ManagementServer";
        object ethernet: Ethernet = "Ethernet";
        object wifi: WiFi = "WiFi";
        object ip: Ip = "IP";
        object hosts: Hosts = "Hosts";
        object gre: Gre = "GRE";
        object services: Services = "Services";
    }
}

cwmp_object! {
    /// General device information.
    pub struct DeviceInfo("DeviceInfo", "Device.DeviceInfo.") {
        param manufacturer: String = "Manufacturer" [ro, max(64)];
        /// Organizationally unique identifier of the manufacturer.
        param manufacturer_oui: String = "ManufacturerOUI" [ro, size(6, 6), pattern(common::OUI)];
        param model_name: String = "ModelName" [ro, max(64)];
        param model_number: String = "ModelNumber" [ro, max(64)];
        param description: String = "Description" [ro, max(256)];
        param product_class: String = "ProductClass" [ro, max(64)];
        param serial_number: String = "SerialNumber" [ro, max(64)];
        param hardware_version: String = "HardwareVersion" [ro, max(64)];
        param software_version: String = "SoftwareVersion"
            [ro, max(64), notify(ActiveNotify::ForceEnabled)];
        param provisioning_code: String = "ProvisioningCode"
            [rw, max(64), notify(ActiveNotify::ForceEnabled)];
        /// Time since the CPE was last restarted.
        param up_time: u32 = "UpTime" [ro, unit(Unit::Seconds), notify(ActiveNotify::CanDeny)];
        param first_use_date: DateTime<Utc> = "FirstUseDate" [ro];
    }
}

cwmp_object! {
    /// CWMP client configuration of the CPE.
    pub struct ManagementServer("ManagementServer", "Device.ManagementServer.") {
        param enable_cwmp: bool = "EnableCWMP" [rw] default true;
        /// ACS URL.
        param url: String = "URL" [rw, max(256)];
        param username: String = "Username" [rw, max(256)];
        param password: String = "Password" [rw, max(256)];
        param periodic_inform_enable: bool = "PeriodicInformEnable" [rw];
        param periodic_inform_interval: u32 = "PeriodicInformInterval"
            [rw, min(1), unit(Unit::Seconds)];
        param periodic_inform_time: DateTime<Utc> = "PeriodicInformTime" [rw];
        param parameter_key: String = "ParameterKey"
            [ro, max(32), notify(ActiveNotify::CanDeny)];
        param connection_request_url: String = "ConnectionRequestURL"
            [ro, max(256), notify(ActiveNotify::ForceDefaultEnabled)];
        param connection_request_username: String = "ConnectionRequestUsername" [rw, max(256)];
        param connection_request_password: String = "ConnectionRequestPassword" [rw, max(256)];
        param upgrades_managed: bool = "UpgradesManaged" [rw];
        param default_active_notification_throttle: u32 = "DefaultActiveNotificationThrottle"
            [rw, unit(Unit::Seconds)];
        param cwmp_retry_minimum_wait_interval: u32 = "CWMPRetryMinimumWaitInterval"
            [rw, range(1, 65535), unit(Unit::Seconds)] default 5;
        param cwmp_retry_interval_multiplier: u32 = "CWMPRetryIntervalMultiplier"
            [rw, range(1000, 65535)] default 2000;
        param instance_mode: String = "InstanceMode"
            [rw, values(&["InstanceNumber", "InstanceAlias"])] default "InstanceNumber";
        param alias_based_addressing: bool = "AliasBasedAddressing" [ro];
    }
}

cwmp_object! {
    /// Service objects hosted by the device.
    pub struct Services("Services", "Device.Services.") {
        table voice_service: VoiceService = "VoiceService" counted "VoiceServiceNumberOfEntries";
        table fap_service: FapService = "FAPService" counted "FAPServiceNumberOfEntries";
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::value::Value;

    #[test]
    fn management_server_defaults() {
        let ms = ManagementServer::default();
        assert_eq!(ms.enable_cwmp(), Some(&true));
        assert_eq!(ms.instance_mode().map(String::as_str), Some("InstanceNumber"));
        assert_eq!(ms.cwmp_retry_minimum_wait_interval(), Some(&5));
        assert_eq!(ms.url(), None);
    }

    #[test]
    fn fluent_builders_nest() {
        let device = Device::default()
            .with_root_data_model_version("2.15".into())
            .with_device_info(
                DeviceInfo::default()
                    .with_manufacturer("Acme".into())
                    .with_up_time(3600),
            );
        let info = device.device_info().unwrap();
        assert_eq!(info.manufacturer().map(String::as_str), Some("Acme"));
        assert_eq!(info.param("UpTime").unwrap(), Some(Value::UnsignedInt(3600)));
    }

    #[test]
    fn children_are_created_lazily() {
        let mut device = Device::default();
        assert!(device.hosts().is_none());
        device.hosts_mut().host_mut().push(Host::default());
        assert_eq!(device.hosts().unwrap().host().len(), 1);
        assert_eq!(
            device.hosts().unwrap().param("HostNumberOfEntries").unwrap(),
            Some(Value::UnsignedInt(1))
        );
    }

    #[test]
    fn services_mount_other_documents() {
        let services = Services::default();
        let names: Vec<_> = services.children().iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["VoiceService", "FAPService"]);
        assert_eq!(services.params().len(), 2);
    }
}
