// ── TR-098: InternetGatewayDevice data model ──

use chrono::{DateTime, Utc};

use crate::common;
use crate::macros::cwmp_object;
use crate::param::{ActiveNotify, Unit};
use crate::tr104::VoiceService;
use crate::tr196::FapService;

mod lan;
mod wan;

pub use lan::{
    Hosts, LanDevice, LanEthernetInterfaceConfig, LanEthernetInterfaceStats, LanHost,
    LanHostConfigManagement, WlanAssociatedDevice, WlanConfiguration, WlanStats, Wps,
    WpsRegistrar,
};
pub use wan::{
    WanCommonInterfaceConfig, WanConnectionDevice, WanDevice, WanIpConnection, WanPppConnection,
};

cwmp_object! {
    /// Root object of the TR-098 Internet Gateway Device data model.
    pub struct InternetGatewayDevice("InternetGatewayDevice", "InternetGatewayDevice.") {
        /// Supported data model profiles, e.g. `InternetGatewayDevice:1.4[](Baseline:1)`.
        param device_summary: String = "DeviceSummary" [ro, max(1024)];
        object device_info: DeviceInfo = "DeviceInfo";
        object management_server: ManagementServer = "ManagementServer";
        object time: Time = "Time";
        object services: Services = "Services";
        table lan_device: LanDevice = "LANDevice" counted "LANDeviceNumberOfEntries";
        table wan_device: WanDevice = "WANDevice" counted "WANDeviceNumberOfEntries";
    }
}

cwmp_object! {
    pub struct DeviceInfo("DeviceInfo", "InternetGatewayDevice.DeviceInfo.") {
        param manufacturer: String = "Manufacturer" [ro, max(64)];
        param manufacturer_oui: String = "ManufacturerOUI" [ro, size(6, 6), pattern(common::OUI)];
        param model_name: String = "ModelName" [ro, max(64)];
        param description: String = "Description" [ro, max(256)];
        param product_class: String = "ProductClass" [ro, max(64)];
        param serial_number: String = "SerialNumber" [ro, max(64)];
        param hardware_version: String = "HardwareVersion" [ro, max(64)];
        param software_version: String = "SoftwareVersion"
            [ro, max(64), notify(ActiveNotify::ForceEnabled)];
        param spec_version: String = "SpecVersion" [ro, max(16)] default "1.0";
        param provisioning_code: String = "ProvisioningCode"
            [rw, max(64), notify(ActiveNotify::ForceEnabled)];
        param up_time: u32 = "UpTime" [ro, unit(Unit::Seconds), notify(ActiveNotify::CanDeny)];
        param first_use_date: DateTime<Utc> = "FirstUseDate" [ro];
        param device_log: String = "DeviceLog" [ro, max(32768), notify(ActiveNotify::CanDeny)];
    }
}

cwmp_object! {
    pub struct ManagementServer("ManagementServer", "InternetGatewayDevice.ManagementServer.") {
        param enable_cwmp: bool = "EnableCWMP" [rw] default true;
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
        param kick_url: String = "KickURL" [ro, max(256)];
        param download_progress_url: String = "DownloadProgressURL" [ro, max(256)];
    }
}

cwmp_object! {
    /// NTP client and local time zone.
    pub struct Time("Time", "InternetGatewayDevice.Time.") {
        param enable: bool = "Enable" [rw];
        param status: String = "Status" [ro, values(&[
            "Disabled",
            "Unsynchronized",
            "Synchronized",
            "Error_FailedToSynchronize",
            "Error",
        ])] default "Disabled";
        param ntp_server1: String = "NTPServer1" [rw, max(64)];
        param ntp_server2: String = "NTPServer2" [rw, max(64)];
        param ntp_server3: String = "NTPServer3" [rw, max(64)];
        param current_local_time: DateTime<Utc> = "CurrentLocalTime"
            [ro, notify(ActiveNotify::CanDeny)];
        param local_time_zone: String = "LocalTimeZone" [rw, max(6)];
        param local_time_zone_name: String = "LocalTimeZoneName" [rw, max(64)];
    }
}

cwmp_object! {
    pub struct Services("Services", "InternetGatewayDevice.Services.") {
        table voice_service: VoiceService = "VoiceService" counted "VoiceServiceNumberOfEntries";
        table fap_service: FapService = "FAPService" counted "FAPServiceNumberOfEntries";
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::{ChildKind, Node};
    use crate::value::Value;

    #[test]
    fn device_info_defaults() {
        let info = DeviceInfo::default();
        assert_eq!(info.spec_version().map(String::as_str), Some("1.0"));
        assert_eq!(info.manufacturer(), None);
        assert_eq!(Time::default().status().map(String::as_str), Some("Disabled"));
    }

    #[test]
    fn root_layout() {
        let igd = InternetGatewayDevice::default();
        let tables: Vec<_> = igd
            .children()
            .iter()
            .filter(|c| c.kind == ChildKind::Table)
            .map(|c| c.name)
            .collect();
        assert_eq!(tables, vec!["LANDevice", "WANDevice"]);
        assert_eq!(
            igd.param("LANDeviceNumberOfEntries").unwrap(),
            Some(Value::UnsignedInt(0))
        );
    }

    #[test]
    fn unknown_parameter_is_an_error() {
        let igd = InternetGatewayDevice::default();
        assert!(matches!(
            igd.param("Bogus"),
            Err(crate::error::ModelError::UnknownParameter { .. })
        ));
    }
}
