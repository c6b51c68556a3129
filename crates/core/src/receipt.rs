//! Printable HTML donation receipts.
//!
//! The receipt is a standalone document (inline CSS, no external assets) so
//! the browser's print dialog can save it as PDF.

use chrono::NaiveDate;

/// Everything printed on a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptData {
    pub org_name: String,
    pub org_address: String,
    pub receipt_number: String,
    pub date: NaiveDate,
    pub donor_name: String,
    pub donor_email: String,
    pub donor_address: Option<String>,
    pub pan_number: Option<String>,
    pub seva_type: String,
    pub campaign_title: Option<String>,
    pub amount: f64,
    pub currency: String,
    pub payment_reference: Option<String>,
}

/// Render a receipt as a complete HTML document. All text is escaped.
pub fn render_receipt_html(data: &ReceiptData) -> String {
    let mut rows = vec![
        row("Receipt No.", &data.receipt_number),
        row("Date", &data.date.format("%d %B %Y").to_string()),
        row("Received from", &data.donor_name),
        row("Email", &data.donor_email),
    ];
    if let Some(address) = non_empty(&data.donor_address) {
        rows.push(row("Address", address));
    }
    if let Some(pan) = non_empty(&data.pan_number) {
        rows.push(row("PAN", pan));
    }
    rows.push(row("Seva", &data.seva_type));
    if let Some(campaign) = non_empty(&data.campaign_title) {
        rows.push(row("Campaign", campaign));
    }
    rows.push(row(
        "Amount",
        &format!("{} {}", data.currency, format_amount(data.amount)),
    ));
    rows.push(row("Amount in words", &amount_in_words(data.amount)));
    if let Some(reference) = non_empty(&data.payment_reference) {
        rows.push(row("Payment reference", reference));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Receipt {receipt_number}</title>
<style>
body {{ font-family: Georgia, serif; margin: 40px; color: #222; }}
.receipt {{ max-width: 720px; margin: 0 auto; border: 1px solid #c9a227; padding: 32px; }}
h1 {{ margin: 0; color: #8a4b08; }}
.address {{ margin: 4px 0 24px; color: #555; }}
table {{ width: 100%; border-collapse: collapse; }}
th {{ text-align: left; width: 35%; padding: 6px 8px; color: #555; font-weight: normal; }}
td {{ padding: 6px 8px; }}
.note {{ margin-top: 24px; font-size: 0.9em; color: #555; }}
</style>
</head>
<body>
<div class="receipt">
<h1>{org_name}</h1>
<p class="address">{org_address}</p>
<h2>Donation Receipt</h2>
<table>
{rows}
</table>
<p class="note">Thank you for your generous support. Donations are eligible for deduction under Section 80G of the Income Tax Act, 1961, subject to applicable conditions.</p>
</div>
</body>
</html>
"#,
        receipt_number = escape_html(&data.receipt_number),
        org_name = escape_html(&data.org_name),
        org_address = escape_html(&data.org_address),
        rows = rows.join("\n"),
    )
}

fn row(label: &str, value: &str) -> String {
    format!(
        "<tr><th>{}</th><td>{}</td></tr>",
        escape_html(label),
        escape_html(value)
    )
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format an amount with Indian digit grouping: `12,34,567.00`.
pub fn format_amount(amount: f64) -> String {
    let paise_total = (amount.abs() * 100.0).round() as u64;
    let rupees = (paise_total / 100).to_string();
    let paise = paise_total % 100;

    let grouped = if rupees.len() <= 3 {
        rupees
    } else {
        let (head, last3) = rupees.split_at(rupees.len() - 3);
        let mut parts: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            parts.push(&head[end - 2..end]);
            end -= 2;
        }
        parts.push(&head[..end]);
        parts.reverse();
        format!("{},{last3}", parts.join(","))
    };

    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{paise:02}")
}

const ONES: [&str; 20] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Spell out an amount in the Indian numbering system (lakh, crore).
///
/// `1234.5` becomes `Rupees One Thousand Two Hundred Thirty-Four and Fifty Paise Only`.
pub fn amount_in_words(amount: f64) -> String {
    let paise_total = (amount.abs() * 100.0).round() as u64;
    let rupees = paise_total / 100;
    let paise = paise_total % 100;

    if paise == 0 {
        format!("Rupees {} Only", number_in_words(rupees))
    } else {
        format!(
            "Rupees {} and {} Paise Only",
            number_in_words(rupees),
            number_in_words(paise)
        )
    }
}

fn number_in_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut parts = Vec::new();
    let crore = n / 10_000_000;
    let lakh = (n / 100_000) % 100;
    let thousand = (n / 1_000) % 100;
    let hundred = (n / 100) % 10;
    let rest = n % 100;

    if crore > 0 {
        parts.push(format!("{} Crore", number_in_words(crore)));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digit_words(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digit_words(thousand)));
    }
    if hundred > 0 {
        parts.push(format!("{} Hundred", ONES[hundred as usize]));
    }
    if rest > 0 {
        parts.push(two_digit_words(rest));
    }
    parts.join(" ")
}

fn two_digit_words(n: u64) -> String {
    let n = n as usize;
    if n < 20 {
        ONES[n].to_string()
    } else if n % 10 == 0 {
        TENS[n / 10].to_string()
    } else {
        format!("{}-{}", TENS[n / 10], ONES[n % 10])
    }
}
