//! ROI derivations and the summary table fragment.

use crate::ReportData;
use crate::currency::{display_number, to_fixed};
use crate::email::escape_html;

/// Headline figures derived from a report.
#[derive(Debug, Clone, PartialEq)]
pub struct RoiMetrics {
    /// Breakeven period in months (`0.0` when absent)
    pub roi_months: f64,
    /// Breakeven period in years
    pub roi_years: f64,
    /// Annual ROI, one decimal (`"25.0"`), or exactly `"0"` without a
    /// positive investment
    pub roi_percentage: String,
}

/// One labelled line of the summary table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    /// Left-hand label
    pub label: &'static str,
    /// Formatted value
    pub value: String,
}

impl ReportData {
    /// Derive breakeven years and annual ROI percentage.
    pub fn metrics(&self) -> RoiMetrics {
        let roi_months = self.roi_months.unwrap_or(0.0);
        let total_cost = self.total_cost_client_inr.unwrap_or(0.0);
        let savings = self.savings_after_faas_inr.unwrap_or(0.0);

        let roi_percentage = if total_cost > 0.0 {
            to_fixed(savings / total_cost * 100.0, 1)
        } else {
            "0".to_string()
        };

        RoiMetrics {
            roi_months,
            roi_years: roi_months / 12.0,
            roi_percentage,
        }
    }

    /// The six summary rows, always in this order: volume, investment,
    /// savings, per-kg reduction, process steps, fee.
    pub fn summary_rows(&self) -> [SummaryRow; 6] {
        [
            SummaryRow {
                label: "Annual Production Volume",
                value: format!("{} tons", display_number(self.annual_qty_tons)),
            },
            SummaryRow {
                label: "Total Investment Required",
                value: self.format_money(self.total_cost_client_inr),
            },
            SummaryRow {
                label: "Annual Cost Savings",
                value: self.format_money(self.savings_after_faas_inr),
            },
            SummaryRow {
                label: "Cost per Kg Reduction",
                value: self.format_money(self.savings_rm_per_kg_inr),
            },
            SummaryRow {
                label: "Number of Process Steps",
                value: display_number(self.num_steps),
            },
            SummaryRow {
                label: "FaaS Fee Structure",
                value: format!("{}% of savings", display_number(self.faas_percent)),
            },
        ]
    }
}

const CELL_STYLE: &str = "padding: 12px; border-bottom: 1px solid #e5e7eb;";
const STRIPE_STYLE: &str = " style=\"background: #f5f5f7;\"";

/// Render the "ROI Analysis Summary" HTML fragment.
pub fn render_summary(data: &ReportData) -> String {
    let metrics = data.metrics();
    let mut html = String::with_capacity(2048);

    html.push_str(
        "<div style=\"background: white; padding: 20px; border-radius: 8px; margin: 20px 0;\">\n",
    );
    html.push_str(
        "  <h2 style=\"color: #702594; margin-bottom: 20px;\">ROI Analysis Summary</h2>\n",
    );
    html.push_str(
        "  <div style=\"background: linear-gradient(135deg, #702594, #057210); color: white; \
         padding: 20px; border-radius: 8px; margin-bottom: 20px;\">\n",
    );
    html.push_str("    <h3 style=\"margin: 0 0 10px 0;\">Investment Return Summary</h3>\n");
    html.push_str(&format!(
        "    <div style=\"font-size: 32px; font-weight: bold; margin: 10px 0;\">{} Months</div>\n",
        to_fixed(metrics.roi_months, 1)
    ));
    html.push_str(&format!(
        "    <div style=\"opacity: 0.9;\">Breakeven Period ({} years) • {}% Annual ROI</div>\n",
        to_fixed(metrics.roi_years, 1),
        metrics.roi_percentage
    ));
    html.push_str("  </div>\n");

    html.push_str("  <table style=\"width: 100%; border-collapse: collapse; margin: 20px 0;\">\n");
    for (i, row) in data.summary_rows().iter().enumerate() {
        let stripe = if i % 2 == 0 { STRIPE_STYLE } else { "" };
        html.push_str(&format!("    <tr{stripe}>\n"));
        html.push_str(&format!(
            "      <td style=\"{CELL_STYLE}\"><strong>{}</strong></td>\n",
            row.label
        ));
        html.push_str(&format!(
            "      <td style=\"{CELL_STYLE}\">{}</td>\n",
            escape_html(&row.value)
        ));
        html.push_str("    </tr>\n");
    }
    html.push_str("  </table>\n");
    html.push_str("</div>\n");
    html
}
