// Radio environment measurement: what the FAP hears from surrounding cells.

use chrono::{DateTime, Utc};

use crate::common;
use crate::macros::cwmp_object;
use crate::param::Unit;

use super::LTE_BANDWIDTH;

cwmp_object! {
    pub struct Rem("REM", "FAPService.{i}.REM.") {
        object lte: RemLte = "LTE";
    }
}

cwmp_object! {
    pub struct RemLte("LTE", "FAPService.{i}.REM.LTE.") {
        param in_service_handling: String = "InServiceHandling" [rw, values(&["Immediate", "Delayed"])];
        param scan_on_boot: bool = "ScanOnBoot" [rw];
        param scan_periodically: bool = "ScanPeriodically" [rw];
        param periodic_interval: u32 = "PeriodicInterval" [rw, unit(Unit::Seconds)];
        param periodic_time: DateTime<Utc> = "PeriodicTime" [rw];
        param rem_plmn_list: String = "REMPLMNList" [rw, max(32)];
        param rem_band_list: String = "REMBandList" [rw, max(32)];
        param eutra_carrier_arfcn_dl_list: String = "EUTRACarrierARFCNDLList" [rw, max(64)];
        param scan_timeout: u32 = "ScanTimeout" [rw, unit(Unit::Seconds)];
        param scan_status: String = "ScanStatus"
            [ro, values(&["Indeterminate", "InProgress", "Success", "Error", "Error_TIMEOUT"])];
        param error_details: String = "ErrorDetails" [ro, max(256)];
        param last_scan_time: DateTime<Utc> = "LastScanTime" [ro];
        param max_cell_entries: u32 = "MaxCellEntries" [ro];
        table cell: LteCell = "Cell" counted "CellNumberOfEntries";
    }
}

cwmp_object! {
    /// A neighbouring E-UTRA cell found by the last scan.
    pub struct LteCell("Cell", "FAPService.{i}.REM.LTE.Cell.{i}.") {
        object rf: LteCellRf = "RF";
        object bcch: LteCellBcch = "BCCH";
    }
}

cwmp_object! {
    pub struct LteCellRf("RF", "FAPService.{i}.REM.LTE.Cell.{i}.RF.") {
        param eutra_carrier_arfcn: u32 = "EUTRACarrierARFCN" [ro, range(0, 65535)];
        param phy_cell_id: u32 = "PhyCellID" [ro, range(0, 503)];
        param rsrp: i32 = "RSRP" [ro, range(-140, -44), unit(Unit::Dbm)];
        /// In tenths of a dB.
        param rsrq: i32 = "RSRQ" [ro, range(-240, -30)];
        param rssi: i32 = "RSSI" [ro, unit(Unit::Dbm)];
    }
}

cwmp_object! {
    /// System information decoded from the cell's broadcast channel.
    pub struct LteCellBcch("BCCH", "FAPService.{i}.REM.LTE.Cell.{i}.BCCH.") {
        param dl_bandwidth: String = "DLBandwidth" [ro, values(LTE_BANDWIDTH)];
        param ul_bandwidth: String = "ULBandwidth" [ro, values(LTE_BANDWIDTH)];
        param rs_tx_power: i32 = "RSTxPower" [ro, range(-60, 50), unit(Unit::Dbm)];
        param tac: u32 = "TAC" [ro, range(0, 65535)];
        param cell_id: u32 = "CellID" [ro, range(0, 268_435_455)];
        param cell_barred: bool = "CellBarred" [ro];
        param csg_indication: bool = "CSGIndication" [ro];
        param csg_identity: u32 = "CSGIdentity" [ro, range(0, 134_217_727)];
        param max_plmn_list_entries: u32 = "MaxPLMNListEntries" [ro];
        table plmn_list: BcchPlmn = "PLMNList" counted "PLMNListNumberOfEntries";
    }
}

cwmp_object! {
    pub struct BcchPlmn("PLMNList", "FAPService.{i}.REM.LTE.Cell.{i}.BCCH.PLMNList.{i}.") [keys: "PLMNID"] {
        param plmn_id: String = "PLMNID" [ro, max(6), pattern(common::PLMN_ID)];
        param cell_reserved_for_operator_use: bool = "CellReservedForOperatorUse" [ro];
    }
}
