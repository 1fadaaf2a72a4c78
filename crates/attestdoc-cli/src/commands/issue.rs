//! Issue command implementation.

use attestdoc_artifact::embed;
use attestdoc_canonical::{Network, TxHash, Uint};
use attestdoc_core::{
    create_attestation, InvoiceForm, ReadinessTracker, SourceError, TransactionDetails,
    TransactionSource,
};
use clap::Args;

use crate::ledger::FileLedger;
use crate::output;

/// Arguments for the issue command.
#[derive(Args)]
pub struct IssueArgs {
    /// Issuing business name
    #[arg(long)]
    pub business_name: String,
    /// Funding transaction hash (hex, optional 0x prefix)
    #[arg(long)]
    pub tx_hash: String,
    /// Invoice date (YYYY-MM-DD)
    #[arg(long)]
    pub invoice_date: String,
    /// Product name
    #[arg(long)]
    pub product_name: String,
    /// Product category
    #[arg(long)]
    pub category: String,
    /// Quantity (decimal digits)
    #[arg(long)]
    pub quantity: String,
    /// Target network name (e.g. sepolia)
    #[arg(long)]
    pub network: String,
    /// Transferred amount in the smallest denomination, from the funding transaction
    #[arg(long)]
    pub amount: String,
    /// Counterparty address, from the funding transaction
    #[arg(long)]
    pub customer: String,
    /// Chain id currently reported by the wallet (hex); omit to stay disconnected
    #[arg(long)]
    pub connected_chain: Option<String>,
    /// Path to ledger file
    #[arg(long)]
    pub ledger: String,
    /// Output artifact path
    #[arg(long)]
    pub out: String,
    /// Output the registered record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Transaction details supplied on the command line, standing in for the
/// out-of-scope network transaction source.
struct StaticTransactionSource {
    details: TransactionDetails,
}

impl TransactionSource for StaticTransactionSource {
    fn lookup(&self, _hash: &TxHash, _network: Network) -> Result<TransactionDetails, SourceError> {
        Ok(self.details.clone())
    }
}

pub fn run(args: IssueArgs) -> Result<(), Box<dyn std::error::Error>> {
    let network = Network::parse(&args.network)?;

    let mut tracker = ReadinessTracker::new(network);
    if let Some(chain) = &args.connected_chain {
        tracker.wallet_connected(chain);
    }

    let source = StaticTransactionSource {
        details: TransactionDetails {
            amount: Uint::parse(args.amount.clone())?,
            from_address: args.customer.clone(),
        },
    };
    let mut ledger = FileLedger::open(&args.ledger)?;

    let form = InvoiceForm {
        business_name: args.business_name.clone(),
        transaction_hash: args.tx_hash.clone(),
        invoice_date: args.invoice_date.clone(),
        product_name: args.product_name.clone(),
        category: args.category.clone(),
        quantity: args.quantity.clone(),
        network,
    };

    let record = create_attestation(&tracker, &form, &source, &mut ledger)?;
    let bytes = embed(&record)?;
    std::fs::write(&args.out, &bytes)?;

    if args.json {
        println!("{}", output::record_json(&record));
    } else {
        println!("Attestation registered: {}", record.full_attestation_id);
        println!("Artifact written: {} ({} bytes)", args.out, bytes.len());
    }

    Ok(())
}
