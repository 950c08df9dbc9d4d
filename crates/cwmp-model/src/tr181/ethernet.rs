use crate::common;
use crate::macros::cwmp_object;
use crate::param::{ActiveNotify, Unit};

cwmp_object! {
    pub struct Ethernet("Ethernet", "Device.Ethernet.") {
        table interface: EthernetInterface = "Interface" counted "InterfaceNumberOfEntries";
    }
}

cwmp_object! {
    /// A physical Ethernet port.
    pub struct EthernetInterface("Interface", "Device.Ethernet.Interface.{i}.") [keys: "Name"] {
        param enable: bool = "Enable" [rw];
        param status: String = "Status" [ro, values(common::INTERFACE_STATUS)] default "Down";
        param alias: String = "Alias" [rw, max(64)];
        param name: String = "Name" [ro, max(64)];
        param last_change: u32 = "LastChange" [ro, unit(Unit::Seconds)];
        param lower_layers: String = "LowerLayers" [rw, max(1024)];
        param upstream: bool = "Upstream" [ro];
        param mac_address: String = "MACAddress" [ro, max(17), pattern(common::MAC_ADDRESS)];
        /// Administrative bit rate; -1 selects auto-negotiation.
        param max_bit_rate: i32 = "MaxBitRate" [rw, min(-1), unit(Unit::Mbps)];
        param current_bit_rate: u32 = "CurrentBitRate" [ro, unit(Unit::Mbps)];
        param duplex_mode: String = "DuplexMode" [rw, values(&["Half", "Full", "Auto"])];
        param eee_capability: bool = "EEECapability" [ro];
        param eee_enable: bool = "EEEEnable" [rw];
        object stats: EthernetInterfaceStats = "Stats";
    }
}

interface_stats!(EthernetInterfaceStats, "Device.Ethernet.Interface.{i}.Stats.");
