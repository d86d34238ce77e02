use crate::classify::PercentileLevel;
use crate::report::{ExchangeRateKpi, InflationKpi, PolicyRateKpi};
use crate::transforms::CycleDirection;
use configuration::IndicatorSettings;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Alert,
    Warning,
    Positive,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Alert => "ALERT",
            Severity::Warning => "WARNING",
            Severity::Positive => "POSITIVE",
            Severity::Info => "INFO",
        };
        f.write_str(label)
    }
}

/// Stable identifier of each insight rule, for consumers that do not want to parse text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCode {
    InflationAboveCeiling,
    InflationAboveTarget,
    InflationWithinTarget,
    FxElevated,
    FxModerate,
    PolicyTightening,
    PolicyEasing,
    TightPolicyFxRelief,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    pub severity: Severity,
    pub code: InsightCode,
    pub message: String,
}

impl Insight {
    fn new(severity: Severity, code: InsightCode, message: String) -> Self {
        Self {
            severity,
            code,
            message,
        }
    }
}

/// Builds the narrative alerts shown beside the headline cards.
///
/// Exactly one inflation insight and one exchange-rate insight are always produced; the
/// policy-cycle and policy/FX insights appear only when their conditions hold.
pub fn derive_insights(
    policy: &PolicyRateKpi,
    fx: &ExchangeRateKpi,
    inflation: &InflationKpi,
    settings: &IndicatorSettings,
) -> Vec<Insight> {
    let mut insights = Vec::with_capacity(4);

    // --- Inflation vs target band ---
    insights.push(if inflation.above_ceiling {
        Insight::new(
            Severity::Alert,
            InsightCode::InflationAboveCeiling,
            format!(
                "Trailing inflation ({:.2}%) is above the {:.2}% ceiling of the target band. \
                 Price pressure supports keeping policy restrictive.",
                inflation.trailing, inflation.ceiling
            ),
        )
    } else if inflation.above_target {
        Insight::new(
            Severity::Warning,
            InsightCode::InflationAboveTarget,
            format!(
                "Trailing inflation ({:.2}%) is above the {:.2}% target but inside the tolerance band.",
                inflation.trailing, inflation.target
            ),
        )
    } else {
        Insight::new(
            Severity::Positive,
            InsightCode::InflationWithinTarget,
            format!(
                "Trailing inflation ({:.2}%) is at or below the {:.2}% target.",
                inflation.trailing, inflation.target
            ),
        )
    });

    // --- Exchange-rate level ---
    insights.push(if fx.level == PercentileLevel::Normal {
        Insight::new(
            Severity::Info,
            InsightCode::FxModerate,
            format!(
                "Exchange rate at the {}th percentile of its history: a moderate level.",
                fx.percentile
            ),
        )
    } else {
        Insight::new(
            Severity::Warning,
            InsightCode::FxElevated,
            format!(
                "Exchange rate at the {}th percentile of its history ({}). Watch for pass-through to inflation.",
                fx.percentile, fx.level
            ),
        )
    });

    // --- Policy cycle ---
    if let Some(cycle) = &policy.cycle {
        let (code, verb) = match cycle.direction {
            CycleDirection::Tightening => (InsightCode::PolicyTightening, "rose"),
            CycleDirection::Easing => (InsightCode::PolicyEasing, "fell"),
        };
        insights.push(Insight::new(
            Severity::Info,
            code,
            format!(
                "Policy rate {verb} from {:.2}% ({}) to {:.2}% ({}): {:+.2} p.p. over {} moves.",
                cycle.from_value,
                cycle.from_month,
                cycle.to_value,
                cycle.to_month,
                cycle.change_pp,
                cycle.moves
            ),
        ));
    }

    // --- Tight policy with a strengthening currency ---
    let fx_falling = fx
        .primary_change()
        .is_some_and(|d| d.defined && d.value < Decimal::ZERO);
    if policy.latest >= settings.status.tight_policy_rate && fx_falling {
        let change = fx.primary_change().map(|d| d.value).unwrap_or_default();
        insights.push(Insight::new(
            Severity::Positive,
            InsightCode::TightPolicyFxRelief,
            format!(
                "Restrictive policy rate ({:.2}%) coincides with a falling exchange rate ({:+.2}%): \
                 high rates attract foreign capital.",
                policy.latest, change
            ),
        ));
    }

    insights
}
