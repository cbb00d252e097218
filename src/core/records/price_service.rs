// Commodity price table.
//
// Edits always replace the whole table. The helpers below build the edited
// table for the two edits the bot offers (set a price, drop a row).

use super::record_collection::RecordCollection;
use super::records_models::PriceEntry;
use super::records_store::{RecordError, RecordFile};

pub struct PriceService<S: RecordFile<PriceEntry>> {
    prices: RecordCollection<PriceEntry, S>,
}

impl<S: RecordFile<PriceEntry>> PriceService<S> {
    pub async fn open(store: S) -> Self {
        Self {
            prices: RecordCollection::open(store).await,
        }
    }

    pub async fn list(&self) -> Vec<PriceEntry> {
        self.prices.snapshot().await
    }

    /// Replace the table with an edited copy and persist it.
    pub async fn replace_all(&self, edited: Vec<PriceEntry>) -> Result<(), RecordError> {
        self.prices.replace_all(edited).await?;
        Ok(())
    }

    /// Update a commodity's price, adding a row if it is not listed yet.
    pub async fn set_price(
        &self,
        commodity: &str,
        price_per_kg: i64,
    ) -> Result<PriceEntry, RecordError> {
        let commodity = commodity.trim();
        if commodity.is_empty() {
            return Err(RecordError::MissingField("commodity"));
        }

        let entry = self
            .prices
            .update(|table| {
                *table = with_price(table, commodity, price_per_kg);
                table
                    .iter()
                    .find(|e| same_commodity(&e.commodity, commodity))
                    .cloned()
            })
            .await?;

        Ok(entry.unwrap_or_else(|| PriceEntry::new(commodity, price_per_kg)))
    }

    /// Drop a commodity row. Returns `None` (and writes nothing) if it is not
    /// listed.
    pub async fn remove_commodity(
        &self,
        commodity: &str,
    ) -> Result<Option<PriceEntry>, RecordError> {
        let removed = self
            .prices
            .update(|table| {
                let removed = table
                    .iter()
                    .find(|e| same_commodity(&e.commodity, commodity))
                    .cloned()?;
                *table = without_commodity(table, commodity);
                Some(removed)
            })
            .await?;

        Ok(removed)
    }
}

fn same_commodity(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// Copy of `entries` with `commodity` priced at `price_per_kg`. Existing rows
/// keep their position and spelling; unknown commodities are appended.
pub fn with_price(entries: &[PriceEntry], commodity: &str, price_per_kg: i64) -> Vec<PriceEntry> {
    let mut edited = entries.to_vec();
    match edited
        .iter_mut()
        .find(|e| same_commodity(&e.commodity, commodity))
    {
        Some(entry) => entry.price_per_kg = price_per_kg,
        None => edited.push(PriceEntry::new(commodity.trim(), price_per_kg)),
    }
    edited
}

/// Copy of `entries` without any row for `commodity`.
pub fn without_commodity(entries: &[PriceEntry], commodity: &str) -> Vec<PriceEntry> {
    entries
        .iter()
        .filter(|e| !same_commodity(&e.commodity, commodity))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::records::record_collection::test_support::MemoryFile;
    use crate::core::records::records_models::Record;
    use std::sync::Arc;

    #[test]
    fn test_with_price_edits_in_place_case_insensitively() {
        let edited = with_price(&PriceEntry::defaults(), "  jagung ", 6000);
        assert_eq!(edited.len(), 6);
        assert_eq!(edited[1], PriceEntry::new("Jagung", 6000));
    }

    #[test]
    fn test_with_price_appends_new_commodity() {
        let edited = with_price(&PriceEntry::defaults(), "Kedelai", 9000);
        assert_eq!(edited.len(), 7);
        assert_eq!(edited[6], PriceEntry::new("Kedelai", 9000));
    }

    #[test]
    fn test_without_commodity() {
        let edited = without_commodity(&PriceEntry::defaults(), "KOPI");
        assert_eq!(edited.len(), 5);
        assert!(edited.iter().all(|e| e.commodity != "Kopi"));
    }

    #[tokio::test]
    async fn test_first_write_persists_defaults_plus_edit() {
        let file = MemoryFile::<PriceEntry>::empty();
        let prices = PriceService::open(file.clone()).await;
        assert_eq!(prices.list().await, PriceEntry::defaults());
        assert!(file.stored().is_none());

        prices.set_price("Padi", 7200).await.unwrap();

        let mut expected = PriceEntry::defaults();
        expected[0].price_per_kg = 7200;
        assert_eq!(file.stored().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_replace_all_accepts_additions_and_removals() {
        let file = MemoryFile::<PriceEntry>::empty();
        let prices = PriceService::open(file.clone()).await;

        let edited = vec![
            PriceEntry::new("Padi", 7100),
            PriceEntry::new("Cabai", 40000),
        ];
        prices.replace_all(edited.clone()).await.unwrap();

        assert_eq!(prices.list().await, edited);
        assert_eq!(file.stored().unwrap(), edited);
    }

    #[tokio::test]
    async fn test_remove_unknown_commodity_is_noop() {
        let file = MemoryFile::<PriceEntry>::empty();
        let prices = PriceService::open(file.clone()).await;

        assert!(prices.remove_commodity("Durian").await.unwrap().is_none());
        assert_eq!(file.write_count(), 0);

        let removed = prices.remove_commodity("kelapa").await.unwrap();
        assert_eq!(removed, Some(PriceEntry::new("Kelapa", 2500)));
        assert_eq!(prices.list().await.len(), 5);
        assert_eq!(file.write_count(), 1);
    }

    #[tokio::test]
    async fn test_blank_commodity_is_rejected() {
        let file = MemoryFile::<PriceEntry>::empty();
        let prices = PriceService::open(file.clone()).await;
        assert!(matches!(
            prices.set_price("  ", 1000).await,
            Err(RecordError::MissingField("commodity"))
        ));
        assert_eq!(file.write_count(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_edits_keep_every_commodity() {
        for _ in 0..50 {
            let file = MemoryFile::<PriceEntry>::empty();
            let prices = Arc::new(PriceService::open(file.clone()).await);

            let handles: Vec<_> = (0..16)
                .map(|i| {
                    let prices = Arc::clone(&prices);
                    tokio::spawn(async move {
                        prices
                            .set_price(&format!("K{i}"), 1000 + i)
                            .await
                            .unwrap();
                    })
                })
                .collect();
            for handle in handles {
                handle.await.unwrap();
            }

            let listed = prices.list().await;
            assert_eq!(listed.len(), PriceEntry::defaults().len() + 16);
            for i in 0..16 {
                let name = format!("K{i}");
                assert!(listed.contains(&PriceEntry::new(&name, 1000 + i)));
            }
            assert_eq!(file.stored().unwrap(), listed);
            assert_eq!(file.write_count(), 16);
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_removals_and_edits_do_not_resurrect_rows() {
        let file = MemoryFile::<PriceEntry>::empty();
        let prices = Arc::new(PriceService::open(file.clone()).await);

        let mut handles = Vec::new();
        for name in ["Padi", "Jagung", "Kopi"] {
            let prices = Arc::clone(&prices);
            handles.push(tokio::spawn(async move {
                prices.remove_commodity(name).await.unwrap();
            }));
        }
        for i in 0..8 {
            let prices = Arc::clone(&prices);
            handles.push(tokio::spawn(async move {
                prices.set_price(&format!("Baru{i}"), 500).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let listed = prices.list().await;
        assert_eq!(listed.len(), PriceEntry::defaults().len() - 3 + 8);
        assert!(listed
            .iter()
            .all(|e| !["Padi", "Jagung", "Kopi"].contains(&e.commodity.as_str())));
        assert_eq!(file.stored().unwrap(), listed);
    }
}
