//! Worked examples of the report pipeline.

use flownetics_report::{ReportData, generate};

fn calculator_payload(currency: &str, symbol: &str) -> ReportData {
    let json = serde_json::json!({
        "roiMonths": 18,
        "totalCostClientINR": 1_000_000,
        "savingsAfterFaasINR": 250_000,
        "currency": currency,
        "currencySymbol": symbol,
        "annualQtyTons": 100,
        "numSteps": 3,
        "faasPercent": 20,
        "savingsRmPerKgINR": 5
    });
    serde_json::from_value(json).expect("calculator payload should deserialize")
}

#[test]
fn test_inr_report() {
    let data = calculator_payload("INR", "₹");
    let metrics = data.metrics();

    assert_eq!(metrics.roi_years, 1.5);
    assert_eq!(metrics.roi_percentage, "25.0");
    assert_eq!(data.summary_rows()[1].value, "₹ 1,000,000");

    let doc = generate("Priya", &data);
    assert!(doc.summary_html.contains("₹ 1,000,000"));
    assert!(doc.summary_html.contains("25.0% Annual ROI"));
    assert!(doc.email_html.contains("Dear Priya,"));
}

#[test]
fn test_usd_report_converts_amounts() {
    let data = calculator_payload("USD", "$");

    assert_eq!(data.summary_rows()[1].value, "$ 12,000");
    assert_eq!(data.summary_rows()[2].value, "$ 3,000");
    // Percentages are currency independent.
    assert_eq!(data.metrics().roi_percentage, "25.0");
}

#[test]
fn test_eur_report_converts_amounts() {
    let data = calculator_payload("EUR", "€");
    assert_eq!(data.summary_rows()[1].value, "€ 11,000");
}

#[test]
fn test_zero_investment_reports_zero_percent() {
    let mut data = calculator_payload("INR", "₹");
    data.total_cost_client_inr = Some(0.0);

    assert_eq!(data.metrics().roi_percentage, "0");
    assert_eq!(data.summary_rows()[1].value, "0");

    let doc = generate("Priya", &data);
    assert!(doc.summary_html.contains("• 0% Annual ROI"));
}

#[test]
fn test_unknown_currency_passes_amounts_through() {
    let data = calculator_payload("JPY", "¥");
    assert_eq!(data.summary_rows()[1].value, "¥ 1,000,000");
}

#[test]
fn test_empty_payload_still_renders() {
    let data: ReportData = serde_json::from_str("{}").unwrap();
    let doc = generate("Someone", &data);

    assert!(doc.summary_html.contains("0.0 Months"));
    assert!(doc.summary_html.contains("0 tons"));
    assert!(data.validate().is_err());
}
