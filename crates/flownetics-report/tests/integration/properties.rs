//! Properties that must hold for every calculator input.

use flownetics_report::{ReportData, conversion_rate, generate, group_thousands};
use proptest::prelude::*;

const ROW_ORDER: [&str; 6] = [
    "Annual Production Volume",
    "Total Investment Required",
    "Annual Cost Savings",
    "Cost per Kg Reduction",
    "Number of Process Steps",
    "FaaS Fee Structure",
];

proptest! {
    #[test]
    fn test_non_positive_investment_yields_zero_percent(
        total in -1.0e12f64..=0.0,
        savings in proptest::option::of(0.0f64..1.0e12),
    ) {
        let data = ReportData {
            total_cost_client_inr: Some(total),
            savings_after_faas_inr: savings,
            ..Default::default()
        };
        prop_assert_eq!(data.metrics().roi_percentage, "0");
    }

    #[test]
    fn test_unlisted_currency_codes_pass_through(code in "[A-Za-z]{0,5}") {
        prop_assume!(code != "USD" && code != "EUR");
        prop_assert_eq!(conversion_rate(&code), 1.0);
    }

    #[test]
    fn test_summary_rows_keep_fixed_order(
        qty in proptest::option::of(0.0f64..1.0e6),
        cost in proptest::option::of(0.0f64..1.0e9),
        steps in proptest::option::of(0.0f64..50.0),
        currency in prop_oneof![Just("INR"), Just("USD"), Just("EUR"), Just("GBP")],
    ) {
        let data = ReportData {
            currency: Some(currency.to_string()),
            currency_symbol: Some("#".to_string()),
            annual_qty_tons: qty,
            total_cost_client_inr: cost,
            num_steps: steps,
            ..Default::default()
        };
        let labels: Vec<&str> = data.summary_rows().iter().map(|r| r.label).collect();
        prop_assert_eq!(labels, ROW_ORDER.to_vec());
    }

    #[test]
    fn test_zero_or_absent_money_is_bare_zero(symbol in "\\PC{0,3}") {
        let data = ReportData {
            currency_symbol: Some(symbol),
            ..Default::default()
        };
        prop_assert_eq!(data.format_money(Some(0.0)), "0");
        prop_assert_eq!(data.format_money(None), "0");
    }

    #[test]
    fn test_markup_in_name_or_symbol_is_escaped(
        prefix in "[a-z]{1,6}",
        tag in "[a-z]{1,6}",
        in_symbol in any::<bool>(),
    ) {
        let hostile = format!("{prefix}<{tag}>&");
        let escaped = format!("{prefix}&lt;{tag}&gt;&amp;");
        let (name, symbol) = if in_symbol {
            ("Asha".to_string(), hostile.clone())
        } else {
            (hostile.clone(), "₹".to_string())
        };
        let data = ReportData {
            currency: Some("INR".to_string()),
            currency_symbol: Some(symbol),
            total_cost_client_inr: Some(1_000_000.0),
            ..Default::default()
        };

        let doc = generate(&name, &data);
        prop_assert!(!doc.email_html.contains(hostile.as_str()));
        prop_assert!(!doc.summary_html.contains(hostile.as_str()));
        prop_assert!(doc.email_html.contains(escaped.as_str()));
        if in_symbol {
            prop_assert!(doc.summary_html.contains(escaped.as_str()));
        }
    }

    #[test]
    fn test_money_converts_then_groups(
        code in prop_oneof![Just("USD"), Just("EUR")],
        symbol in "[$€A-Z]{1,2}",
        amount in 1.0f64..1.0e12,
    ) {
        let rate = if code == "USD" { 0.012 } else { 0.011 };
        let data = ReportData {
            currency: Some(code.to_string()),
            currency_symbol: Some(symbol.clone()),
            ..Default::default()
        };
        let expected = format!("{symbol} {}", group_thousands(amount * rate));
        prop_assert_eq!(data.format_money(Some(amount)), expected);
    }

    #[test]
    fn test_positive_investment_yields_one_decimal_percent(
        total in 0.01f64..1.0e12,
        savings in 0.0f64..1.0e12,
    ) {
        let data = ReportData {
            total_cost_client_inr: Some(total),
            savings_after_faas_inr: Some(savings),
            ..Default::default()
        };
        let pct = data.metrics().roi_percentage;
        prop_assert!(pct.parse::<f64>().is_ok());
        let decimals = pct.split_once('.').map(|(_, frac)| frac.len());
        prop_assert_eq!(decimals, Some(1));
    }
}
