use crate::common;
use crate::macros::cwmp_object;
use crate::param::Unit;

use super::LTE_BANDWIDTH;

cwmp_object! {
    pub struct CellConfig("CellConfig", "FAPService.{i}.CellConfig.") {
        object lte: CellConfigLte = "LTE";
    }
}

cwmp_object! {
    pub struct CellConfigLte("LTE", "FAPService.{i}.CellConfig.LTE.") {
        object epc: Epc = "EPC";
        object ran: Ran = "RAN";
    }
}

cwmp_object! {
    /// Core-network facing cell configuration.
    pub struct Epc("EPC", "FAPService.{i}.CellConfig.LTE.EPC.") {
        param allowed_ciphering_algorithm_list: String = "AllowedCipheringAlgorithmList" [rw, max(256)];
        param allowed_integrity_protection_algorithm_list: String =
            "AllowedIntegrityProtectionAlgorithmList" [rw, max(256)];
        /// Tracking area code.
        param tac: u32 = "TAC" [rw, range(0, 65535)];
        param eaid: u32 = "EAID" [rw, range(0, 65535)];
        param max_plmn_list_entries: u32 = "MaxPLMNListEntries" [ro, range(1, 6)];
        table plmn_list: EpcPlmn = "PLMNList" counted "PLMNListNumberOfEntries";
    }
}

cwmp_object! {
    /// A PLMN broadcast by the cell.
    pub struct EpcPlmn("PLMNList", "FAPService.{i}.CellConfig.LTE.EPC.PLMNList.{i}.") [keys: "PLMNID"] {
        param enable: bool = "Enable" [rw] default false;
        param alias: String = "Alias" [rw, max(64)];
        param is_primary: bool = "IsPrimary" [rw] default false;
        param plmn_id: String = "PLMNID" [rw, max(6), pattern(common::PLMN_ID)];
        param cell_reserved_for_operator_use: bool = "CellReservedForOperatorUse" [rw] default false;
    }
}

cwmp_object! {
    pub struct Ran("RAN", "FAPService.{i}.CellConfig.LTE.RAN.") {
        object rf: RanRf = "RF";
    }
}

cwmp_object! {
    /// Radio parameters of the cell.
    pub struct RanRf("RF", "FAPService.{i}.CellConfig.LTE.RAN.RF.") {
        param earfcn_dl: String = "EARFCNDL" [rw, max(64)];
        param earfcn_ul: String = "EARFCNUL" [rw, max(64)];
        param freq_band_indicator: u32 = "FreqBandIndicator" [rw, range(1, 256)];
        param dl_bandwidth: String = "DLBandwidth" [rw, values(LTE_BANDWIDTH)];
        param ul_bandwidth: String = "ULBandwidth" [rw, values(LTE_BANDWIDTH)];
        param reference_signal_power: i32 = "ReferenceSignalPower" [rw, range(-60, 50), unit(Unit::Dbm)];
        /// Candidate physical cell identities, comma separated.
        param phy_cell_id: String = "PhyCellID" [rw, max(256)];
        param psch_power_offset: i32 = "PSCHPowerOffset" [rw, range(-6, 8), unit(Unit::Db)];
        param ssch_power_offset: i32 = "SSCHPowerOffset" [rw, range(-6, 8), unit(Unit::Db)];
        param pbch_power_offset: i32 = "PBCHPowerOffset" [rw, range(-6, 8), unit(Unit::Db)];
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::node::Node;
    use crate::value::Value;

    #[test]
    fn plmn_list_defaults_and_count() {
        let epc = Epc::default()
            .with_plmn_list(EpcPlmn::default().with_plmn_id("00101".into()).with_is_primary(true))
            .with_plmn_list(EpcPlmn::default().with_plmn_id("310260".into()));
        assert_eq!(epc.param("PLMNListNumberOfEntries").unwrap(), Some(Value::UnsignedInt(2)));
        let second = epc.plmn_list().get(2).unwrap();
        assert_eq!(second.is_primary(), Some(&false));
        assert_eq!(second.enable(), Some(&false));
    }

    #[test]
    fn rf_constraints() {
        let rf = RanRf::default();
        let info = rf.param_info("ReferenceSignalPower").unwrap();
        assert_eq!(info.range, Some((-60, 50)));
        assert_eq!(rf.param_info("DLBandwidth").unwrap().values, LTE_BANDWIDTH);
    }
}
