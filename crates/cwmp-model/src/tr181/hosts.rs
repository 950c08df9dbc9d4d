use chrono::{DateTime, Utc};

use crate::macros::cwmp_object;
use crate::param::Unit;
use crate::value::HexBinary;

cwmp_object! {
    /// Hosts learned by the device on its LAN side.
    pub struct Hosts("Hosts", "Device.Hosts.") {
        table host: Host = "Host" counted "HostNumberOfEntries";
    }
}

cwmp_object! {
    /// A LAN host, keyed by its hardware address.
    pub struct Host("Host", "Device.Hosts.Host.{i}.") [keys: "PhysAddress"] {
        param alias: String = "Alias" [rw, max(64)];
        param phys_address: String = "PhysAddress" [ro, max(64)];
        param ip_address: String = "IPAddress" [ro, max(45)];
        param address_source: String = "AddressSource"
            [ro, values(&["DHCP", "Static", "AutoIP", "None"])];
        param dhcp_client: String = "DHCPClient" [ro, max(256)];
        /// Seconds left on the DHCP lease; -1 for an infinite lease.
        param lease_time_remaining: i32 = "LeaseTimeRemaining" [ro, min(-1), unit(Unit::Seconds)];
        param associated_device: String = "AssociatedDevice" [ro, max(256)];
        param layer1_interface: String = "Layer1Interface" [ro, max(256)];
        param layer3_interface: String = "Layer3Interface" [ro, max(256)];
        param vendor_class_id: String = "VendorClassID" [ro, max(255)];
        param client_id: HexBinary = "ClientID" [ro, max(65535)];
        param user_class_id: HexBinary = "UserClassID" [ro, max(65535)];
        param host_name: String = "HostName" [ro, max(64)];
        param active: bool = "Active" [ro];
        param active_last_change: DateTime<Utc> = "ActiveLastChange" [ro];
    }
}
