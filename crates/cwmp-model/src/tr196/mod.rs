// ── TR-196: FAPService (LTE) ──
//
// Schema paths are service-relative, like TR-104's.

use chrono::{DateTime, Utc};

use crate::macros::cwmp_object;
use crate::param::Unit;

mod cell_config;
mod rem;

pub use cell_config::{CellConfig, CellConfigLte, Epc, EpcPlmn, Ran, RanRf};
pub use rem::{BcchPlmn, LteCell, LteCellBcch, LteCellRf, Rem, RemLte};

/// LTE channel bandwidth in resource blocks.
pub const LTE_BANDWIDTH: &[&str] = &["n6", "n15", "n25", "n50", "n75", "n100"];

cwmp_object! {
    /// A femto access point service instance.
    pub struct FapService("FAPService", "FAPService.{i}.") {
        param alias: String = "Alias" [rw, max(64)];
        /// Distinguished-name prefix used in performance files.
        param dn_prefix: String = "DNPrefix" [rw, max(256)];
        object capabilities: FapCapabilities = "Capabilities";
        object fap_control: FapControl = "FAPControl";
        object cell_config: CellConfig = "CellConfig";
        object rem: Rem = "REM";
        object perf_mgmt: PerfMgmt = "PerfMgmt";
    }
}

// ── Capabilities ──

cwmp_object! {
    pub struct FapCapabilities("Capabilities", "FAPService.{i}.Capabilities.") {
        param gps_equipped: bool = "GPSEquipped" [ro];
        param max_tx_power: u32 = "MaxTxPower" [ro, unit(Unit::Dbm)];
        param supported_systems: String = "SupportedSystems" [ro, max(64)];
        param beacon: bool = "Beacon" [ro];
        object lte: CapabilitiesLte = "LTE";
    }
}

cwmp_object! {
    pub struct CapabilitiesLte("LTE", "FAPService.{i}.Capabilities.LTE.") {
        param duplex_mode: String = "DuplexMode" [ro, values(&["FDDMode", "TDDMode"])];
        param bands_supported: String = "BandsSupported" [ro, max(32)];
        param nnsf_supported: bool = "NNSFSupported" [ro];
        param umts_rx_supported: bool = "UMTSRxSupported" [ro];
        param gsm_rx_supported: bool = "GSMRxSupported" [ro];
        param cdma2000_rx_supported: bool = "CDMA2000RxSupported" [ro];
        param max_ues_served: u32 = "MaxUEsServed" [ro, min(1)];
    }
}

// ── FAPControl ──

cwmp_object! {
    pub struct FapControl("FAPControl", "FAPService.{i}.FAPControl.") {
        object lte: FapControlLte = "LTE";
    }
}

cwmp_object! {
    pub struct FapControlLte("LTE", "FAPService.{i}.FAPControl.LTE.") {
        param op_state: bool = "OpState" [ro];
        param admin_state: bool = "AdminState" [rw];
        param rf_tx_status: bool = "RFTxStatus" [ro];
        object gateway: FapControlLteGateway = "Gateway";
    }
}

cwmp_object! {
    /// Security gateways and S1 signalling endpoints.
    pub struct FapControlLteGateway("Gateway", "FAPService.{i}.FAPControl.LTE.Gateway.") {
        param sec_gw_server1: String = "SecGWServer1" [rw, max(64)];
        param sec_gw_server2: String = "SecGWServer2" [rw, max(64)];
        param sec_gw_server3: String = "SecGWServer3" [rw, max(64)];
        param s1_sig_link_server_list: String = "S1SigLinkServerList" [rw, max(256)];
        param s1_connection_mode: String = "S1ConnectionMode" [rw, values(&["One", "All"])];
        param s1_sig_link_port: u32 = "S1SigLinkPort" [rw, range(0, 65535)] default 36412;
    }
}

// ── PerfMgmt ──

cwmp_object! {
    pub struct PerfMgmt("PerfMgmt", "FAPService.{i}.PerfMgmt.") {
        table config: PerfMgmtConfig = "Config" counted "ConfigNumberOfEntries";
    }
}

cwmp_object! {
    /// Periodic upload of performance measurement files.
    pub struct PerfMgmtConfig("Config", "FAPService.{i}.PerfMgmt.Config.{i}.") [keys: "URL"] {
        param enable: bool = "Enable" [rw] default false;
        param alias: String = "Alias" [rw, max(64)];
        param url: String = "URL" [rw, max(256)];
        param username: String = "Username" [rw, max(256)];
        param password: String = "Password" [rw, max(256)];
        param periodic_upload_interval: u32 = "PeriodicUploadInterval"
            [rw, min(1), unit(Unit::Seconds)];
        param periodic_upload_time: DateTime<Utc> = "PeriodicUploadTime" [rw];
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn gateway_defaults_to_sctp_port() {
        assert_eq!(FapControlLteGateway::default().s1_sig_link_port(), Some(&36412));
    }

    #[test]
    fn deep_lazy_construction() {
        let mut fap = FapService::default();
        fap.fap_control_mut().lte_mut().gateway_mut().set_sec_gw_server1("segw.example.net".into());
        let gw = fap.fap_control().unwrap().lte().unwrap().gateway().unwrap();
        assert_eq!(gw.sec_gw_server1().map(String::as_str), Some("segw.example.net"));
        assert!(fap.rem().is_none());
    }

    #[test]
    fn perf_mgmt_config_by_alias() {
        let pm = PerfMgmt::default()
            .with_config(PerfMgmtConfig::default().with_alias("hourly".into()))
            .with_config(PerfMgmtConfig::default().with_alias("daily".into()));
        let entry = pm.config().get(2).unwrap();
        assert_eq!(entry.alias().map(String::as_str), Some("daily"));
    }
}
