use crate::common;
use crate::macros::cwmp_object;
use crate::param::{ActiveNotify, Unit};

cwmp_object! {
    /// IP layer configuration.
    pub struct Ip("IP", "Device.IP.") {
        param ipv4_capable: bool = "IPv4Capable" [ro];
        param ipv4_enable: bool = "IPv4Enable" [rw];
        param ipv4_status: String = "IPv4Status"
            [ro, values(&["Disabled", "Enabled", "Error"])] default "Disabled";
        table interface: IpInterface = "Interface" counted "InterfaceNumberOfEntries";
    }
}

cwmp_object! {
    /// An IP-layer interface, stacked on top of a link-layer one.
    pub struct IpInterface("Interface", "Device.IP.Interface.{i}.") [keys: "Name"] {
        param enable: bool = "Enable" [rw];
        param ipv4_enable: bool = "IPv4Enable" [rw];
        param status: String = "Status" [ro, values(common::INTERFACE_STATUS)] default "Down";
        param alias: String = "Alias" [rw, max(64)];
        param name: String = "Name" [ro, max(64)];
        param last_change: u32 = "LastChange" [ro, unit(Unit::Seconds)];
        param lower_layers: String = "LowerLayers" [rw, max(1024)];
        param router: String = "Router" [rw, max(256)];
        /// Write-only trigger; reads back as false.
        param reset: bool = "Reset" [rw];
        param max_mtu_size: u32 = "MaxMTUSize" [rw, range(64, 65535)];
        param interface_type: String = "Type"
            [ro, values(&["Normal", "Loopback", "Tunnel", "Tunneled"])] default "Normal";
        param loopback: bool = "Loopback" [rw];
        object stats: IpInterfaceStats = "Stats";
        table ipv4_address: Ipv4Address = "IPv4Address" counted "IPv4AddressNumberOfEntries";
    }
}

interface_stats!(IpInterfaceStats, "Device.IP.Interface.{i}.Stats.");

cwmp_object! {
    pub struct Ipv4Address("IPv4Address", "Device.IP.Interface.{i}.IPv4Address.{i}.")
        [keys: "IPAddress"]
    {
        param enable: bool = "Enable" [rw];
        param status: String = "Status" [ro, values(common::ENABLE_STATUS)] default "Disabled";
        param alias: String = "Alias" [rw, max(64)];
        param ip_address: String = "IPAddress" [rw, max(15), pattern(common::IPV4_ADDRESS)];
        param subnet_mask: String = "SubnetMask" [rw, max(15), pattern(common::IPV4_ADDRESS)];
        param addressing_type: String = "AddressingType"
            [ro, values(&["DHCP", "IKEv2", "AutoIP", "IPCP", "Static"])] default "Static";
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn type_field_keeps_standard_name() {
        let iface = IpInterface::default();
        assert_eq!(iface.interface_type().map(String::as_str), Some("Normal"));
        let json = serde_json::to_value(&iface).unwrap();
        assert_eq!(json["Type"], "Normal");
        assert_eq!(json["Status"], "Down");
    }

    #[test]
    fn address_keys() {
        let addr = Ipv4Address::default();
        assert_eq!(addr.unique_keys(), &["IPAddress"]);
        assert_eq!(addr.object_name(), "IPv4Address");
    }
}
