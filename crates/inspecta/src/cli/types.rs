//! CLI value enums and domain type conversions.
//!
//! Command-line arguments use ASCII value enums; conversions map them onto
//! the domain enums whose serialized form carries the production labels.

use clap::ValueEnum;

use crate::domain::{InspectionResult, InspectionType};

/// Inspection stage for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionTypeArg {
    /// 来料检验 - incoming material inspection
    Incoming,
    /// 首检 - first-piece inspection
    #[value(name = "first-piece")]
    FirstPiece,
    /// 巡检 - patrol inspection
    Patrol,
    /// 自检 - operator self-inspection
    #[value(name = "self-check", alias = "self")]
    SelfCheck,
    /// 成品检 - finished-goods inspection
    #[value(name = "finished-goods")]
    FinishedGoods,
    /// 出货检验 - outgoing shipment inspection
    Outgoing,
}

impl std::fmt::Display for InspectionTypeArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Incoming => write!(f, "incoming"),
            Self::FirstPiece => write!(f, "first-piece"),
            Self::Patrol => write!(f, "patrol"),
            Self::SelfCheck => write!(f, "self-check"),
            Self::FinishedGoods => write!(f, "finished-goods"),
            Self::Outgoing => write!(f, "outgoing"),
        }
    }
}

impl From<InspectionTypeArg> for InspectionType {
    fn from(arg: InspectionTypeArg) -> Self {
        match arg {
            InspectionTypeArg::Incoming => InspectionType::Incoming,
            InspectionTypeArg::FirstPiece => InspectionType::FirstPiece,
            InspectionTypeArg::Patrol => InspectionType::Patrol,
            InspectionTypeArg::SelfCheck => InspectionType::SelfCheck,
            InspectionTypeArg::FinishedGoods => InspectionType::FinishedGoods,
            InspectionTypeArg::Outgoing => InspectionType::Outgoing,
        }
    }
}

/// Inspection outcome for CLI arguments
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectionResultArg {
    /// 合格 - passed inspection
    Pass,
    /// 不合格 - failed inspection
    Fail,
}

impl std::fmt::Display for InspectionResultArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

impl From<InspectionResultArg> for InspectionResult {
    fn from(arg: InspectionResultArg) -> Self {
        match arg {
            InspectionResultArg::Pass => InspectionResult::Pass,
            InspectionResultArg::Fail => InspectionResult::Fail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_args_map_onto_domain_labels() {
        assert_eq!(InspectionType::from(InspectionTypeArg::FirstPiece).label(), "首检");
        assert_eq!(InspectionType::from(InspectionTypeArg::Outgoing).label(), "出货检验");
    }

    #[test]
    fn result_args_map_onto_domain_labels() {
        assert_eq!(InspectionResult::from(InspectionResultArg::Pass).label(), "合格");
        assert_eq!(InspectionResult::from(InspectionResultArg::Fail).label(), "不合格");
    }
}
