//! Renders action results into chat replies.
//!
//! Rendering never fails: missing record fields are skipped, long lists
//! are truncated with a "showing N of M" note, and long descriptions
//! are clipped at a character bound.

use crate::domain::conversation::{MessageContent, OutboundLink};
use crate::domain::foundation::AlgorandAddress;
use crate::domain::operation::OperationKind;

use super::{BridgeReceipt, NfdPage, NfdRecord, Project, Quote, SwapReceipt, TxReceipt};

/// Display bounds and link bases for reply rendering.
#[derive(Debug, Clone)]
pub struct Formatter {
    explorer_tx_base: String,
    max_list_items: usize,
    max_description_chars: usize,
}

impl Formatter {
    pub fn new(
        explorer_tx_base: impl Into<String>,
        max_list_items: usize,
        max_description_chars: usize,
    ) -> Self {
        Self {
            explorer_tx_base: explorer_tx_base.into(),
            max_list_items,
            max_description_chars,
        }
    }

    fn explorer_url(&self, tx_id: &str) -> String {
        format!("{}/{}", self.explorer_tx_base.trim_end_matches('/'), tx_id)
    }

    /// Success reply for a signed and submitted transaction.
    pub fn tx_success(&self, kind: OperationKind, receipt: &TxReceipt) -> MessageContent {
        let mut text = format!("🎉 Your {} went through!", kind.label());
        if let Some(asset_id) = receipt.asset_id {
            text.push_str(&format!("\n\nAsset ID: `{asset_id}`"));
        }
        text.push_str(&format!("\nTransaction ID: `{}`", receipt.tx_id));
        MessageContent::Card {
            text,
            image_url: None,
            links: vec![OutboundLink::new(
                "View on explorer",
                self.explorer_url(&receipt.tx_id),
            )],
        }
    }

    /// Success reply for a settled swap.
    pub fn swap_success(
        &self,
        swap_type: &str,
        token_id: u64,
        amount: f64,
        receipt: &SwapReceipt,
    ) -> MessageContent {
        MessageContent::Card {
            text: format!(
                "✅ Successfully swapped {amount} of token `{token_id}`.\n🔄 Swap type: {swap_type}"
            ),
            image_url: None,
            links: vec![OutboundLink::new("Verify transaction", receipt.url.clone())],
        }
    }

    pub fn bridge_success(&self, kind: OperationKind, receipt: &BridgeReceipt) -> MessageContent {
        MessageContent::text(format!(
            "🌉 {} submitted!\n\nRemote transaction hash: `{}`",
            kind.label(),
            receipt.tx_hash
        ))
    }

    /// Address resolved to an NFD record.
    pub fn resolved_address(&self, address: &AlgorandAddress, record: &NfdRecord) -> MessageContent {
        let mut text = format!("🔎 `{}` resolves to **{}**", address.abbreviated(), record.name);
        text.push_str(&self.record_details(record));
        self.with_avatar(text, record)
    }

    /// Name or numeric id looked up in the registry.
    pub fn reverse_lookup(&self, record: &NfdRecord) -> MessageContent {
        let mut text = format!("🔎 Here's what I found for **{}**:", record.name);
        text.push_str(&self.record_details(record));
        self.with_avatar(text, record)
    }

    fn record_details(&self, record: &NfdRecord) -> String {
        let mut lines = String::new();
        if let Some(app_id) = record.app_id {
            lines.push_str(&format!("\n- App ID: `{app_id}`"));
        }
        if let Some(state) = &record.state {
            lines.push_str(&format!("\n- State: {state}"));
        }
        if let Some(owner) = &record.owner {
            lines.push_str(&format!("\n- Owner: `{owner}`"));
        }
        if let Some(deposit) = &record.deposit_account {
            lines.push_str(&format!("\n- Deposit account: `{deposit}`"));
        }
        if let Some(url) = record.property("url") {
            lines.push_str(&format!("\n- URL: {url}"));
        }
        if let Some(bio) = record.property("bio") {
            lines.push_str(&format!("\n- Bio: {}", self.clip(bio)));
        }
        lines
    }

    fn with_avatar(&self, text: String, record: &NfdRecord) -> MessageContent {
        match record.avatar() {
            Some(avatar) => MessageContent::Card {
                text,
                image_url: Some(avatar.to_string()),
                links: Vec::new(),
            },
            None => MessageContent::text(text),
        }
    }

    /// All NFDs owned by an address, truncated to the display bound.
    pub fn nfds_for_address(&self, address: &AlgorandAddress, page: &NfdPage) -> MessageContent {
        if page.nfds.is_empty() {
            return MessageContent::text(format!(
                "🤷 No NFDs found for `{}`.",
                address.abbreviated()
            ));
        }

        let shown = page.nfds.len().min(self.max_list_items);
        let total = page.total.max(page.nfds.len() as u64);
        let mut lines = vec![format!(
            "📛 NFDs owned by `{}` (showing {} of {}):",
            address.abbreviated(),
            shown,
            total
        )];
        for record in page.nfds.iter().take(self.max_list_items) {
            match record.app_id {
                Some(app_id) => lines.push(format!("- **{}** (app `{app_id}`)", record.name)),
                None => lines.push(format!("- **{}**", record.name)),
            }
        }
        MessageContent::text(lines.join("\n"))
    }

    /// Spot prices, one line per resolved ticker.
    pub fn quotes(&self, requested: &[String], quotes: &[Quote]) -> MessageContent {
        if quotes.is_empty() {
            return MessageContent::text(format!(
                "🤷 I couldn't find prices for: {}.",
                requested.join(", ")
            ));
        }

        let mut lines = vec!["💱 Latest prices:".to_string()];
        for quote in quotes {
            lines.push(format!(
                "1 {} - ${} USDT",
                quote.symbol.to_ascii_uppercase(),
                quote.price_usdt
            ));
        }

        let found: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        let missing: Vec<&str> = requested
            .iter()
            .map(String::as_str)
            .filter(|t| !found.iter().any(|f| f.eq_ignore_ascii_case(t)))
            .collect();
        if !missing.is_empty() {
            lines.push(format!("(no data for: {})", missing.join(", ")));
        }
        MessageContent::text(lines.join("\n"))
    }

    /// Matching ecosystem projects, truncated to the display bound.
    pub fn projects(&self, query: &str, matches: &[Project]) -> MessageContent {
        if matches.is_empty() {
            return MessageContent::text(format!(
                "🤷 No ecosystem projects matched \"{query}\". Try a category like wallets, explorers, or SDKs."
            ));
        }

        let shown = matches.len().min(self.max_list_items);
        let mut lines = vec![format!(
            "🌐 Ecosystem projects matching \"{query}\" (showing {} of {}):",
            shown,
            matches.len()
        )];
        for project in matches.iter().take(self.max_list_items) {
            lines.push(String::new());
            lines.push(format!("**{}** · {}", project.name, project.category));
            if !project.description.is_empty() {
                lines.push(self.clip(&project.description));
            }
            if let Some(website) = &project.website {
                lines.push(format!("🔗 {website}"));
            }
            if let Some(github) = &project.github {
                lines.push(format!("💻 {github}"));
            }
        }
        MessageContent::text(lines.join("\n"))
    }

    fn clip(&self, text: &str) -> String {
        if text.chars().count() <= self.max_description_chars {
            return text.to_string();
        }
        let clipped: String = text.chars().take(self.max_description_chars).collect();
        format!("{}...", clipped.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn formatter() -> Formatter {
        Formatter::new("https://testnet.explorer.perawallet.app/tx", 3, 20)
    }

    fn record(name: &str) -> NfdRecord {
        NfdRecord {
            name: name.to_string(),
            app_id: Some(1),
            state: None,
            owner: None,
            deposit_account: None,
            time_changed: None,
            properties: None,
        }
    }

    fn addr() -> AlgorandAddress {
        AlgorandAddress::parse(&format!("{}Y", "A".repeat(57))).unwrap()
    }

    #[test]
    fn tx_success_links_to_the_explorer() {
        let receipt = TxReceipt {
            tx_id: "TX123".to_string(),
            asset_id: Some(42),
        };
        match formatter().tx_success(OperationKind::MintFungibleToken, &receipt) {
            MessageContent::Card { text, links, .. } => {
                assert!(text.contains("Asset ID: `42`"));
                assert!(text.contains("TX123"));
                assert_eq!(
                    links[0].url,
                    "https://testnet.explorer.perawallet.app/tx/TX123"
                );
            }
            other => panic!("expected card, got {other:?}"),
        }
    }

    #[test]
    fn swap_success_links_to_the_returned_url() {
        let receipt = SwapReceipt {
            url: "https://explorer.test/tx/SWAP42".to_string(),
        };
        match formatter().swap_success("native", 42, 12.5, &receipt) {
            MessageContent::Card { text, links, .. } => {
                assert!(text.contains("swapped 12.5 of token `42`"), "text: {text}");
                assert!(text.contains("Swap type: native"));
                assert_eq!(links[0].url, "https://explorer.test/tx/SWAP42");
            }
            other => panic!("expected card, got {other:?}"),
        }
    }

    #[test]
    fn nfd_listing_truncates_with_a_count_note() {
        let page = NfdPage {
            nfds: (0..5).map(|i| record(&format!("name{i}.algo"))).collect(),
            total: 5,
        };
        let text = formatter().nfds_for_address(&addr(), &page).as_text().to_string();
        assert!(text.contains("showing 3 of 5"), "text: {text}");
        assert!(text.contains("name2.algo"));
        assert!(!text.contains("name3.algo"));
    }

    #[test]
    fn quotes_report_missing_tickers() {
        let requested = vec!["btc".to_string(), "nope".to_string()];
        let quotes = vec![Quote {
            symbol: "btc".to_string(),
            price_usdt: 65000.5,
        }];
        let text = formatter().quotes(&requested, &quotes).as_text().to_string();
        assert!(text.contains("1 BTC - $65000.5 USDT"));
        assert!(text.contains("no data for: nope"));
    }

    #[test]
    fn empty_project_match_suggests_categories() {
        let text = formatter().projects("flurbs", &[]).as_text().to_string();
        assert!(text.contains("No ecosystem projects matched"));
    }

    #[test]
    fn long_descriptions_are_clipped() {
        let projects = vec![Project {
            name: "Proj".to_string(),
            description: "x".repeat(40),
            category: "Wallets".to_string(),
            website: None,
            github: None,
            logo: None,
        }];
        let text = formatter().projects("wallet", &projects).as_text().to_string();
        assert!(text.contains(&format!("{}...", "x".repeat(20))));
    }

    #[test]
    fn missing_record_fields_are_simply_omitted() {
        let minimal = NfdRecord {
            name: "bare.algo".to_string(),
            app_id: None,
            state: None,
            owner: None,
            deposit_account: None,
            time_changed: None,
            properties: None,
        };
        let text = formatter().reverse_lookup(&minimal).as_text().to_string();
        assert!(text.contains("bare.algo"));
        assert!(!text.contains("Owner"));
    }
}
