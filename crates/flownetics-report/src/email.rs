//! The branded email wrapped around the summary.

use std::borrow::Cow;

use crate::ReportData;
use crate::summary::render_summary;

/// Subject line of the report email.
pub const EMAIL_SUBJECT: &str = "Your Flownetics ROI Analysis Report";

const COMPANY_NAME: &str = "FLOWNETICS Engineering Private Limited";
const COMPANY_ADDRESS: &str =
    "148/A, Industrial Suburb 1st Stage, Yeswanthpura-560022, Bangalore, India";
const COMPANY_CONTACT: &str = "sales@flownetics-engg.com | +91 90350 21855";

const EMAIL_STYLE: &str = "\
    body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 0; }
    .container { max-width: 600px; margin: 0 auto; padding: 20px; }
    .header { background: linear-gradient(135deg, #e07742, #702594, #057210); color: white; padding: 30px; text-align: center; border-radius: 8px 8px 0 0; }
    .content { padding: 30px; background: #f5f5f7; }
    .footer { text-align: center; padding: 20px; color: #86868b; font-size: 12px; background: white; border-radius: 0 0 8px 8px; }";

/// Both renderings of one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDocument {
    /// The summary fragment on its own
    pub summary_html: String,
    /// The complete email document embedding the summary
    pub email_html: String,
}

/// Render the summary and the email for `name`.
pub fn generate(name: &str, data: &ReportData) -> ReportDocument {
    let summary_html = render_summary(data);
    let email_html = render_email(name, &summary_html);
    ReportDocument {
        summary_html,
        email_html,
    }
}

/// Wrap an already rendered summary in the email document.
pub fn render_email(name: &str, summary_html: &str) -> String {
    let name = escape_html(name);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <style>
{EMAIL_STYLE}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1 style="margin: 0;">Flownetics ROI Report</h1>
    </div>
    <div class="content">
      <p>Dear {name},</p>
      <p>Thank you for using the Flownetics ROI Calculator. Please find your comprehensive ROI Analysis Report below.</p>
{summary_html}
      <p>If you have any questions or would like to discuss your results, please don't hesitate to contact us.</p>
      <p>Best regards,<br><strong>Flownetics Team</strong></p>
    </div>
    <div class="footer">
      <p><strong>{COMPANY_NAME}</strong></p>
      <p>{COMPANY_ADDRESS}</p>
      <p>{COMPANY_CONTACT}</p>
    </div>
  </div>
</body>
</html>
"#
    )
}

/// Escape text for interpolation into HTML element content or attributes.
pub(crate) fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 16);
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}
