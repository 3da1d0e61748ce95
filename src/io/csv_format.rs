//! CSV format handling
//!
//! Decodes replay-script rows into [`CommandRecord`]s and encodes the final
//! per-account summary.
//!
//! # Input
//!
//! ```text
//! op,phone,amount,category,ref,target,name
//! register,+992000000001,,,,,
//! deposit,+992000000001,1000,,,,
//! pay,+992000000001,80,auto,p1,,
//! favorite,+992000000001,,,f1,p1,car wash
//! ```
//!
//! # Output
//!
//! ```text
//! phone,balance,payments,failed
//! +992000000001,920,1,0
//! ```

use crate::types::{Account, Command, CommandRecord, Money, Payment};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;

/// Raw replay-script row as read from CSV
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct CsvRecord {
    pub op: String,
    pub phone: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "ref")]
    pub reference: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// Take an optional field, treating blank text as absent
fn present(field: Option<String>) -> Option<String> {
    field
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn required(field: Option<String>, column: &str, op: &str) -> Result<String, String> {
    present(field).ok_or_else(|| format!("'{}' requires column '{}'", op, column))
}

fn parse_amount(field: Option<String>, op: &str) -> Result<Money, String> {
    let raw = required(field, "amount", op)?;
    raw.parse::<Money>()
        .map_err(|_| format!("Invalid amount '{}' for '{}'", raw, op))
}

/// Convert a raw CSV row into a command
///
/// The operation name is case-insensitive. Columns an operation does not use
/// are ignored.
///
/// # Errors
///
/// Returns a description of the problem when the operation is unknown, the
/// phone is blank, a required column is missing, or the amount is not an
/// integer.
pub fn convert_csv_record(csv_record: CsvRecord) -> Result<CommandRecord, String> {
    let op = csv_record.op.trim().to_lowercase();
    let phone = csv_record.phone.trim().to_string();
    if phone.is_empty() {
        return Err(format!("'{}' requires a phone", op));
    }

    let command = match op.as_str() {
        "register" => Command::Register,
        "deposit" => Command::Deposit {
            amount: parse_amount(csv_record.amount, &op)?,
        },
        "pay" => Command::Pay {
            amount: parse_amount(csv_record.amount, &op)?,
            category: required(csv_record.category, "category", &op)?,
            reference: present(csv_record.reference),
        },
        "reject" => Command::Reject {
            target: required(csv_record.target, "target", &op)?,
        },
        "repeat" => Command::Repeat {
            target: required(csv_record.target, "target", &op)?,
            reference: present(csv_record.reference),
        },
        "favorite" => Command::Favorite {
            target: required(csv_record.target, "target", &op)?,
            name: required(csv_record.name, "name", &op)?,
            reference: present(csv_record.reference),
        },
        "pay_favorite" => Command::PayFavorite {
            target: required(csv_record.target, "target", &op)?,
            reference: present(csv_record.reference),
        },
        _ => return Err(format!("Invalid operation: '{}'", csv_record.op.trim())),
    };

    Ok(CommandRecord { phone, command })
}

/// One output row of the account summary
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub phone: String,
    pub balance: Money,
    pub payments: usize,
    pub failed: usize,
}

/// Build summary rows sorted by phone
pub fn summarize(accounts: &[Account], payments: &[Payment]) -> Vec<AccountSummary> {
    let mut counts: HashMap<_, (usize, usize)> = HashMap::new();
    for payment in payments {
        let entry = counts.entry(payment.account_id).or_default();
        entry.0 += 1;
        if payment.is_failed() {
            entry.1 += 1;
        }
    }

    let mut summaries: Vec<AccountSummary> = accounts
        .iter()
        .map(|account| {
            let (payments, failed) = counts.get(&account.id).copied().unwrap_or_default();
            AccountSummary {
                phone: account.phone.clone(),
                balance: account.balance,
                payments,
                failed,
            }
        })
        .collect();
    summaries.sort_by(|a, b| a.phone.cmp(&b.phone));
    summaries
}

/// Write the account summary as CSV
///
/// Rows are sorted by phone so the output does not depend on the order in
/// which accounts were registered.
pub fn write_accounts_csv(
    accounts: &[Account],
    payments: &[Payment],
    output: &mut dyn Write,
) -> Result<(), String> {
    use csv::Writer;

    let mut writer = Writer::from_writer(output);

    writer
        .write_record(["phone", "balance", "payments", "failed"])
        .map_err(|e| format!("Failed to write CSV header: {}", e))?;

    for summary in summarize(accounts, payments) {
        writer
            .write_record(&[
                summary.phone,
                summary.balance.to_string(),
                summary.payments.to_string(),
                summary.failed.to_string(),
            ])
            .map_err(|e| format!("Failed to write account record: {}", e))?;
    }

    writer
        .flush()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    Ok(())
}
