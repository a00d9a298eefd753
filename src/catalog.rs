//! Security catalog
//!
//! Fixed in-memory directory of tradable instruments. Lookups go through an
//! O(1) symbol index; search is a full scan in catalog declaration order.
//! The catalog is seeded once and immutable for the process lifetime.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

/// One tradable instrument with its last-known market attributes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Security {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: i64,
    pub market_cap: String,
    pub pe: f64,
    pub eps: f64,
    pub high_52w: f64,
    pub low_52w: f64,
    pub dividend: f64,
    pub beta: f64,
    pub description: String,
    pub last_updated: String,
}

/// Security directory with declaration-ordered search results
pub struct StockCatalog {
    records: Vec<Security>,
    by_symbol: DashMap<String, usize>,
}

impl StockCatalog {
    /// Build a catalog and its symbol index
    pub fn new(records: Vec<Security>) -> Self {
        let by_symbol = DashMap::new();
        for (ix, record) in records.iter().enumerate() {
            by_symbol.insert(record.symbol.to_uppercase(), ix);
        }

        Self { records, by_symbol }
    }

    /// Catalog from the built-in seed data
    pub fn seeded() -> Self {
        Self::new(seed_securities())
    }

    /// Search by case-insensitive substring against symbol, name, sector and
    /// industry. A record matches if any field contains the query; blank
    /// queries return no results.
    pub fn search(&self, query: &str) -> Vec<Security> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let query_lower = query.to_lowercase();

        self.records
            .iter()
            .filter(|s| {
                s.symbol.to_lowercase().contains(&query_lower)
                    || s.name.to_lowercase().contains(&query_lower)
                    || s.sector.to_lowercase().contains(&query_lower)
                    || s.industry.to_lowercase().contains(&query_lower)
            })
            .cloned()
            .collect()
    }

    /// Exact lookup by symbol, case-insensitive on the symbol key only
    pub fn get_by_symbol(&self, symbol: &str) -> Option<Security> {
        let key = symbol.trim().to_uppercase();
        self.by_symbol
            .get(&key)
            .map(|ix| self.records[*ix].clone())
    }

    /// All records in declaration order
    pub fn records(&self) -> &[Security] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Built-in seed catalog
pub fn seed_securities() -> Vec<Security> {
    vec![
        Security {
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            sector: "Technology".to_string(),
            industry: "Consumer Electronics".to_string(),
            price: 182.52,
            change: 2.45,
            change_percent: 1.36,
            volume: 45_234_567,
            market_cap: "2.85T".to_string(),
            pe: 28.5,
            eps: 6.42,
            high_52w: 199.62,
            low_52w: 164.08,
            dividend: 0.96,
            beta: 1.24,
            description: "Designs, manufactures and markets smartphones, personal computers, tablets, wearables and accessories.".to_string(),
            last_updated: "2024-03-15 16:00:00".to_string(),
        },
        Security {
            symbol: "GOOGL".to_string(),
            name: "Alphabet Inc.".to_string(),
            sector: "Communication Services".to_string(),
            industry: "Internet Content & Information".to_string(),
            price: 142.56,
            change: -1.23,
            change_percent: -0.85,
            volume: 28_456_789,
            market_cap: "1.78T".to_string(),
            pe: 24.8,
            eps: 5.75,
            high_52w: 151.55,
            low_52w: 121.46,
            dividend: 0.00,
            beta: 1.05,
            description: "Provides online search, advertising, cloud computing and software platforms worldwide.".to_string(),
            last_updated: "2024-03-15 16:00:00".to_string(),
        },
        Security {
            symbol: "MSFT".to_string(),
            name: "Microsoft Corporation".to_string(),
            sector: "Technology".to_string(),
            industry: "Software - Infrastructure".to_string(),
            price: 378.85,
            change: 4.67,
            change_percent: 1.25,
            volume: 32_567_890,
            market_cap: "2.81T".to_string(),
            pe: 32.1,
            eps: 11.80,
            high_52w: 384.30,
            low_52w: 309.45,
            dividend: 3.00,
            beta: 0.89,
            description: "Develops and supports software, services, devices and cloud solutions worldwide.".to_string(),
            last_updated: "2024-03-15 16:00:00".to_string(),
        },
        Security {
            symbol: "TSLA".to_string(),
            name: "Tesla, Inc.".to_string(),
            sector: "Consumer Cyclical".to_string(),
            industry: "Auto Manufacturers".to_string(),
            price: 248.42,
            change: 12.34,
            change_percent: 5.23,
            volume: 89_456_123,
            market_cap: "790.2B".to_string(),
            pe: 45.6,
            eps: 5.44,
            high_52w: 299.29,
            low_52w: 152.37,
            dividend: 0.00,
            beta: 2.08,
            description: "Designs, manufactures and sells electric vehicles and energy generation and storage systems.".to_string(),
            last_updated: "2024-03-15 16:00:00".to_string(),
        },
        Security {
            symbol: "AMZN".to_string(),
            name: "Amazon.com, Inc.".to_string(),
            sector: "Consumer Cyclical".to_string(),
            industry: "Internet Retail".to_string(),
            price: 153.76,
            change: -2.11,
            change_percent: -1.35,
            volume: 41_234_567,
            market_cap: "1.59T".to_string(),
            pe: 48.2,
            eps: 3.19,
            high_52w: 170.40,
            low_52w: 118.35,
            dividend: 0.00,
            beta: 1.15,
            description: "Engages in retail sale of consumer products, advertising and subscription services, and cloud computing.".to_string(),
            last_updated: "2024-03-15 16:00:00".to_string(),
        },
        Security {
            symbol: "NVDA".to_string(),
            name: "NVIDIA Corporation".to_string(),
            sector: "Technology".to_string(),
            industry: "Semiconductors".to_string(),
            price: 875.28,
            change: 18.45,
            change_percent: 2.15,
            volume: 52_345_678,
            market_cap: "2.16T".to_string(),
            pe: 65.4,
            eps: 13.38,
            high_52w: 974.00,
            low_52w: 419.38,
            dividend: 0.16,
            beta: 1.68,
            description: "Provides graphics, compute and networking platforms for gaming, data centers and automotive markets.".to_string(),
            last_updated: "2024-03-15 16:00:00".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_returns_empty() {
        let catalog = StockCatalog::seeded();
        assert!(catalog.search("").is_empty());
        assert!(catalog.search("   ").is_empty());
        assert!(catalog.search("\t\n").is_empty());
    }

    #[test]
    fn test_search_matches_name_case_insensitive() {
        let catalog = StockCatalog::seeded();
        let results = catalog.search("app");
        assert!(results.iter().any(|s| s.symbol == "AAPL"));
    }

    #[test]
    fn test_search_matches_symbol() {
        let catalog = StockCatalog::seeded();
        let results = catalog.search("nvd");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].symbol, "NVDA");
    }

    #[test]
    fn test_search_matches_sector_and_industry() {
        let catalog = StockCatalog::seeded();

        let by_sector = catalog.search("technology");
        let sector_symbols: Vec<_> = by_sector.iter().map(|s| s.symbol.as_str()).collect();
        assert!(sector_symbols.contains(&"AAPL"));
        assert!(sector_symbols.contains(&"MSFT"));
        assert!(sector_symbols.contains(&"NVDA"));

        let by_industry = catalog.search("semiconductors");
        assert_eq!(by_industry.len(), 1);
        assert_eq!(by_industry[0].symbol, "NVDA");
    }

    #[test]
    fn test_search_preserves_declaration_order() {
        let catalog = StockCatalog::seeded();
        let results = catalog.search("inc");
        let symbols: Vec<_> = results.iter().map(|s| s.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL", "TSLA", "AMZN"]);
    }

    #[test]
    fn test_get_by_symbol_is_case_insensitive() {
        let catalog = StockCatalog::seeded();

        let lower = catalog.get_by_symbol("aapl").unwrap();
        assert_eq!(lower.name, "Apple Inc.");

        let mixed = catalog.get_by_symbol("TsLa").unwrap();
        assert_eq!(mixed.symbol, "TSLA");

        assert!(catalog.get_by_symbol("ZZZZ").is_none());
    }

    #[test]
    fn test_get_by_symbol_matches_symbol_only() {
        // Name substrings must not resolve via the symbol lookup
        let catalog = StockCatalog::seeded();
        assert!(catalog.get_by_symbol("Apple").is_none());
    }

    #[test]
    fn test_seed_invariants() {
        let records = seed_securities();
        assert_eq!(records.len(), 6);

        let mut symbols: Vec<_> = records.iter().map(|s| s.symbol.clone()).collect();
        symbols.sort();
        symbols.dedup();
        assert_eq!(symbols.len(), records.len(), "symbols must be unique");

        for s in &records {
            assert!(s.price >= 0.0);
            assert!(s.volume >= 0);
            assert!(s.high_52w >= 0.0);
            assert!(s.low_52w >= 0.0);
            assert!(s.high_52w >= s.low_52w, "{}: 52w high below 52w low", s.symbol);
        }
    }
}
