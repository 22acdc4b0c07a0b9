//! Calculator snapshot submitted with a report request.

use flownetics_core::LeadReportSnapshot;
use serde::{Deserialize, Serialize};

use crate::currency::{conversion_rate, group_thousands};
use crate::{ReportError, Result};

/// Inputs and outputs of the ROI calculator at the moment the lead asked for
/// a report.
///
/// Built entirely by the website and passed in as a value. Amounts are in the
/// INR base unit; `currency` selects the display conversion. Every field is
/// optional on the wire so that partial submissions still render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    /// Display currency code (`INR`, `USD`, `EUR`, ...)
    #[serde(default)]
    pub currency: Option<String>,
    /// Symbol printed before converted amounts
    #[serde(default)]
    pub currency_symbol: Option<String>,
    /// Annual production volume in tons
    #[serde(default)]
    pub annual_qty_tons: Option<f64>,
    /// Monthly production volume in tons
    #[serde(default)]
    pub volume_tons_per_month: Option<f64>,
    /// Total client investment
    #[serde(default, rename = "totalCostClientINR")]
    pub total_cost_client_inr: Option<f64>,
    /// Annual savings after the FaaS fee
    #[serde(default, rename = "savingsAfterFaasINR")]
    pub savings_after_faas_inr: Option<f64>,
    /// Raw-material cost reduction per kg
    #[serde(default, rename = "savingsRmPerKgINR")]
    pub savings_rm_per_kg_inr: Option<f64>,
    /// Number of process steps
    #[serde(default)]
    pub num_steps: Option<f64>,
    /// FaaS fee as a percentage of savings
    #[serde(default)]
    pub faas_percent: Option<f64>,
    /// Breakeven period in months
    #[serde(default)]
    pub roi_months: Option<f64>,
}

impl ReportData {
    /// Currency code, empty when absent.
    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or_default()
    }

    /// Currency symbol, empty when absent.
    pub fn symbol(&self) -> &str {
        self.currency_symbol.as_deref().unwrap_or_default()
    }

    /// Multiplier applied to every amount in this report.
    pub fn rate(&self) -> f64 {
        conversion_rate(self.currency_code())
    }

    /// Convert an INR amount into the report currency and format it as
    /// `"{symbol} {rounded, grouped}"`.
    ///
    /// Zero, absent and NaN amounts render as the bare string `"0"`, without
    /// a symbol.
    pub fn format_money(&self, amount: Option<f64>) -> String {
        match amount {
            Some(value) if value != 0.0 && !value.is_nan() => {
                format!("{} {}", self.symbol(), group_thousands(value * self.rate()))
            }
            _ => "0".to_string(),
        }
    }

    /// Check the fields a meaningful report depends on.
    ///
    /// Rendering does not call this; it is for request boundaries that prefer
    /// rejecting malformed submissions over sending a degraded report.
    pub fn validate(&self) -> Result<()> {
        if self.currency_code().is_empty() {
            return Err(ReportError::MissingField("currency"));
        }
        if self.symbol().is_empty() {
            return Err(ReportError::MissingField("currencySymbol"));
        }

        let required = [
            ("roiMonths", self.roi_months),
            ("totalCostClientINR", self.total_cost_client_inr),
            ("savingsAfterFaasINR", self.savings_after_faas_inr),
        ];
        for (name, value) in required {
            if value.is_none() {
                return Err(ReportError::MissingField(name));
            }
        }

        let numeric = [
            ("annualQtyTons", self.annual_qty_tons),
            ("volumeTonsPerMonth", self.volume_tons_per_month),
            ("totalCostClientINR", self.total_cost_client_inr),
            ("savingsAfterFaasINR", self.savings_after_faas_inr),
            ("savingsRmPerKgINR", self.savings_rm_per_kg_inr),
            ("numSteps", self.num_steps),
            ("faasPercent", self.faas_percent),
            ("roiMonths", self.roi_months),
        ];
        for (name, value) in numeric {
            let Some(v) = value else { continue };
            if !v.is_finite() {
                return Err(ReportError::NonFinite(name));
            }
            if v < 0.0 {
                return Err(ReportError::Negative(name));
            }
        }

        Ok(())
    }

    /// The subset of this report persisted with a lead.
    pub fn snapshot(&self) -> LeadReportSnapshot {
        LeadReportSnapshot {
            currency: self.currency.clone(),
            volume_tons_per_month: self.volume_tons_per_month,
            num_steps: self.num_steps,
            roi_months: self.roi_months,
            total_cost_client_inr: self.total_cost_client_inr,
            savings_after_faas_inr: self.savings_after_faas_inr,
        }
    }
}
